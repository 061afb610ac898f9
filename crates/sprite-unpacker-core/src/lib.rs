//! Core library for reconstructing editable sprite metadata from packed atlases.
//!
//! - Inverts the bake: recovers original-space rect/pivot/border, outline and
//!   physics polygons, and (for skinned sprites) mesh + bone rig from the
//!   packed render data and atlas bookkeeping.
//! - Pipeline: `reconstruct_sprite` takes an in-memory `Sprite` (plus its
//!   parent `SpriteAtlas`, if any) and returns a fully populated `SpriteMeta`.
//! - Data model is serde-serializable; the caller owns all file I/O.
//!
//! Quick example:
//! ```ignore
//! use sprite_unpacker_core::prelude::*;
//!
//! let cfg = ReconstructConfig::builder().schema(SchemaVersion::Skinned).build();
//! let ids = RandomSpriteId;
//! let meta = reconstruct_sprite(&sprite, Some(&atlas), &cfg, &codec, &ids)?;
//! println!("pivot: {:?}", meta.pivot);
//! ```

pub mod atlas;
pub mod bones;
pub mod config;
pub mod error;
pub mod geometry;
pub mod group;
pub mod id;
pub mod mesh;
pub mod model;
pub mod pipeline;
pub mod schema;

pub use atlas::*;
pub use bones::*;
pub use config::*;
pub use error::*;
pub use geometry::*;
pub use group::*;
pub use id::*;
pub use mesh::*;
pub use model::*;
pub use pipeline::*;
pub use schema::*;

/// Convenience prelude for common types and functions.
/// Importing `sprite_unpacker_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::atlas::{AtlasCoordinates, resolve_atlas_coordinates};
    pub use crate::config::{ReconstructConfig, ReconstructConfigBuilder};
    pub use crate::group::SpriteGroup;
    pub use crate::id::{RandomSpriteId, SpriteIdGenerator};
    pub use crate::mesh::{VertexCodec, VertexStreams};
    pub use crate::model::{
        BoneWeights, PackingRotation, Rect, RenderData, RenderDataKey, Sprite, SpriteAtlas,
        SpriteAtlasData, SpriteBone, SpriteMeta, VertexFormat,
    };
    pub use crate::schema::SchemaVersion;
    pub use crate::{reconstruct_batch, reconstruct_sprite};
}
