use glam::{Quat, Vec2, Vec3, Vec4};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

/// Axis-aligned rectangle in pixel space. `x,y` is bottom-left; `w,h` are sizes.
///
/// Sprite rects are float-valued in the source data (sub-pixel trims happen),
/// so unlike an integer page rect this one keeps `f32` throughout.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
    /// Width/height as a vector.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }
    /// Geometric center of the rect (absolute coordinates).
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w * 0.5, self.y + self.h * 0.5)
    }
}

/// Key into an atlas's render-data map: source texture GUID plus a
/// per-sprite discriminator. Opaque to this crate beyond equality/hashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RenderDataKey {
    pub guid: [u8; 16],
    pub data: i64,
}

/// Flip/rotation applied by the atlas packer to the sprite's pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackingRotation {
    #[default]
    None,
    FlipHorizontal,
    FlipVertical,
    Rotate90,
    Rotate180,
}

impl PackingRotation {
    /// Decodes the raw serialized discriminant. Values outside the four known
    /// states come from unmodeled format versions and decode to `None`
    /// (identity) rather than an error.
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            0 => Self::None,
            1 => Self::FlipHorizontal,
            2 => Self::FlipVertical,
            3 => Self::Rotate90,
            4 => Self::Rotate180,
            other => {
                warn!(raw = other, "unknown packing rotation, treating as none");
                Self::None
            }
        }
    }
}

/// Format/version/endianness descriptor forwarded to the vertex codec.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct VertexFormat {
    /// Serialized-file format version the vertex blob was written with.
    pub version: u32,
    pub big_endian: bool,
}

/// The engine's runtime geometry/texture-mapping record for one sprite, as
/// stored in the packed asset. This is the post-bake side of the transform
/// the reconstruction inverts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderData {
    /// Packed sub-rectangle within the atlas page (or the source texture when
    /// the sprite was never atlased).
    pub texture_rect: Rect,
    /// Bottom-left crop offset applied when transparent borders were trimmed.
    pub texture_rect_offset: Vec2,
    /// Raw visual-outline polygons in pixel space, centered on the rect.
    pub outline: Vec<Vec<Vec2>>,
    /// Tightly packed little-endian u16 triangle-list indices.
    pub index_buffer: Vec<u8>,
    /// Opaque interleaved vertex blob; decoded by an external [`VertexCodec`].
    ///
    /// [`VertexCodec`]: crate::mesh::VertexCodec
    pub vertex_data: Vec<u8>,
    pub vertex_format: VertexFormat,
    pub is_packed: bool,
    pub packing_rotation: PackingRotation,
}

/// One bone of a sprite's skinning rig. Positions are pixel-space before
/// reconstruction and unit-space after.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteBone {
    pub name: String,
    pub position: Vec3,
    pub rotation: Quat,
    pub length: f32,
    /// Index of the parent bone; `-1` marks the root.
    pub parent_id: i32,
}

impl Default for SpriteBone {
    fn default() -> Self {
        Self {
            name: String::new(),
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            length: 0.0,
            parent_id: -1,
        }
    }
}

/// Per-vertex skin influence: four bone-index/weight pairs, weights already
/// normalized by the vertex codec.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct BoneWeights {
    pub weight: [f32; 4],
    pub bone_index: [i32; 4],
}

/// A fully deserialized sprite asset, read-only input to reconstruction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sprite {
    pub name: String,
    /// Rect within the original (pre-atlas) source image, pixels.
    pub rect: Rect,
    /// Pivot offset from the rect center, pixels. Consulted only when
    /// `pivot` is absent.
    pub offset: Vec2,
    /// Normalized pivot in `[0,1]^2`, when the authoring data kept one.
    pub pivot: Option<Vec2>,
    /// Nine-slice border as (left, bottom, right, top), pixels.
    pub border: Option<Vec4>,
    pub pixels_per_unit: f32,
    pub render_data: RenderData,
    /// Key into the owning atlas's render-data map, when atlased.
    pub render_data_key: Option<RenderDataKey>,
    /// Skinning rig, parent-before-child order. Empty when not skinned.
    pub bones: Vec<SpriteBone>,
    /// Physics-collision polygons in pixel space. Empty when absent.
    pub physics_shape: Vec<Vec<Vec2>>,
}

impl Default for Sprite {
    fn default() -> Self {
        Self {
            name: String::new(),
            rect: Rect::default(),
            offset: Vec2::ZERO,
            pivot: None,
            border: None,
            // engine default; the real value always comes from the asset
            pixels_per_unit: 100.0,
            render_data: RenderData::default(),
            render_data_key: None,
            bones: Vec::new(),
            physics_shape: Vec::new(),
        }
    }
}

/// Per-sprite bookkeeping inside an atlas: where the packer put the sprite
/// and what it did to the pixels. Overrides the sprite's own render data
/// for all geometry math when present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpriteAtlasData {
    pub texture_rect: Rect,
    pub texture_rect_offset: Vec2,
    pub is_packed: bool,
    pub packing_rotation: PackingRotation,
}

/// A sprite atlas asset: the per-sprite record table plus an optional
/// reference to the master atlas for variant atlases.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpriteAtlas {
    pub render_data_map: HashMap<RenderDataKey, SpriteAtlasData>,
    master_atlas: Option<String>,
}

impl SpriteAtlas {
    pub fn new(render_data_map: HashMap<RenderDataKey, SpriteAtlasData>) -> Self {
        Self {
            render_data_map,
            master_atlas: None,
        }
    }

    pub fn with_master_atlas(mut self, master: impl Into<String>) -> Self {
        self.master_atlas = Some(master.into());
        self
    }

    /// Name of the master atlas this variant belongs to, if any.
    pub fn master_atlas(&self) -> Option<&str> {
        self.master_atlas.as_deref()
    }
}

/// How the editor interprets a sprite's pivot. Reconstruction always emits
/// `Custom` together with an explicit pivot vector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpriteAlignment {
    #[default]
    Center,
    TopLeft,
    TopCenter,
    TopRight,
    LeftCenter,
    RightCenter,
    BottomLeft,
    BottomCenter,
    BottomRight,
    Custom,
}

/// Reconstructed, atlas-independent authoring metadata for one sprite.
///
/// Fields the selected output schema does not carry stay empty/`None`; the
/// caller serializes the record and owns all file/path decisions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpriteMeta {
    pub name: String,
    pub rect: Rect,
    pub alignment: SpriteAlignment,
    pub pivot: Vec2,
    /// (left, bottom, right, top) in pixels; zero when the sprite had none.
    pub border: Vec4,
    /// Visual outline polygons, unit space.
    pub outline: Vec<Vec<Vec2>>,
    /// Physics-collision polygons, unit space. Winding preserved.
    pub physics_shape: Vec<Vec<Vec2>>,
    pub tessellation_detail: f32,
    /// Mesh vertices in unit space (skinned sprites only).
    pub vertices: Vec<Vec2>,
    /// Triangle-list indices, widened past 16 bits to keep the full unsigned
    /// range.
    pub indices: Vec<u32>,
    pub weights: Vec<BoneWeights>,
    /// Rescaled rig, unit space, root anchored to the rect center.
    pub bones: Vec<SpriteBone>,
    /// Freshly generated opaque identifier (32 hex chars); unique per
    /// reconstruction, carries no recoverable meaning.
    pub sprite_id: Option<String>,
}
