use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Versioned output-metadata schema.
///
/// The export format grew optional fields over engine generations; each
/// variant statically declares which of them it carries, so every optional
/// block in the composer is gated by an exhaustive match instead of a
/// field-name probe.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SchemaVersion {
    /// Rect/pivot/border only.
    Legacy,
    /// Adds the visual outline polygon set.
    Outline,
    /// Adds physics-collision polygons.
    Physics,
    /// Adds the skinning block: bones, mesh vertices/indices/weights and the
    /// sprite identifier.
    Skinned,
}

impl SchemaVersion {
    pub fn supports_outline(&self) -> bool {
        match self {
            Self::Legacy => false,
            Self::Outline | Self::Physics | Self::Skinned => true,
        }
    }

    pub fn supports_physics_shape(&self) -> bool {
        match self {
            Self::Legacy | Self::Outline => false,
            Self::Physics | Self::Skinned => true,
        }
    }

    pub fn supports_bones(&self) -> bool {
        match self {
            Self::Legacy | Self::Outline | Self::Physics => false,
            Self::Skinned => true,
        }
    }

    pub fn supports_sprite_id(&self) -> bool {
        match self {
            Self::Legacy | Self::Outline | Self::Physics => false,
            Self::Skinned => true,
        }
    }

    pub fn supports_vertices(&self) -> bool {
        match self {
            Self::Legacy | Self::Outline | Self::Physics => false,
            Self::Skinned => true,
        }
    }

    pub fn supports_weights(&self) -> bool {
        match self {
            Self::Legacy | Self::Outline | Self::Physics => false,
            Self::Skinned => true,
        }
    }
}

impl FromStr for SchemaVersion {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "outline" => Ok(Self::Outline),
            "physics" => Ok(Self::Physics),
            "skinned" => Ok(Self::Skinned),
            _ => Err(()),
        }
    }
}
