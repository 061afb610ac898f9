use crate::schema::SchemaVersion;
use serde::{Deserialize, Serialize};

/// Reconstruction configuration.
/// Key notes:
///   - `schema` selects the output-metadata schema version and thereby which
///     optional blocks (outline/physics/skinning) get populated
///   - `parallel` enables per-sprite parallel batch reconstruction when the
///     "parallel" feature is on
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconstructConfig {
    #[serde(default = "default_schema")]
    pub schema: SchemaVersion,
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

impl Default for ReconstructConfig {
    fn default() -> Self {
        Self {
            schema: default_schema(),
            parallel: default_parallel(),
        }
    }
}

fn default_schema() -> SchemaVersion {
    SchemaVersion::Skinned
}
fn default_parallel() -> bool {
    false
}

/// Builder for `ReconstructConfig` for ergonomic construction.
#[derive(Debug, Default, Clone)]
pub struct ReconstructConfigBuilder {
    cfg: ReconstructConfig,
}

impl ReconstructConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: ReconstructConfig::default(),
        }
    }
    pub fn schema(mut self, v: SchemaVersion) -> Self {
        self.cfg.schema = v;
        self
    }
    pub fn parallel(mut self, v: bool) -> Self {
        self.cfg.parallel = v;
        self
    }
    pub fn build(self) -> ReconstructConfig {
        self.cfg
    }
}

impl ReconstructConfig {
    /// Create a fluent builder for `ReconstructConfig`.
    pub fn builder() -> ReconstructConfigBuilder {
        ReconstructConfigBuilder::new()
    }
}
