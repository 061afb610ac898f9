use crate::error::Result;
use crate::model::{BoneWeights, Rect, VertexFormat};
use byteorder::{ByteOrder, LittleEndian};
use glam::{Vec2, Vec3, Vec4};

/// Parallel attribute arrays decoded from a render-data vertex blob.
///
/// Reconstruction consumes `positions` and `skin`; the remaining channels are
/// part of the codec contract and pass through untouched.
#[derive(Debug, Clone, Default)]
pub struct VertexStreams {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub tangents: Vec<Vec4>,
    pub colors: Vec<[u8; 4]>,
    pub uv: [Vec<Vec2>; 8],
    pub skin: Vec<BoneWeights>,
}

/// Decodes an opaque interleaved vertex blob into parallel attribute arrays.
///
/// Implementations live outside this crate (the vertex layout is a versioned
/// engine format of its own); they must be IO-free and thread-safe so batch
/// reconstruction can run per-sprite in parallel.
pub trait VertexCodec: Sync {
    fn decode(&self, blob: &[u8], format: &VertexFormat) -> Result<VertexStreams>;
}

/// Decodes a raw triangle-index buffer: a tightly packed stream of unsigned
/// 16-bit little-endian integers, one per triangle-list index.
///
/// An empty buffer is a sprite without mesh data, not an error. Indices are
/// widened to `u32` so the full unsigned 16-bit range survives without sign
/// collision.
pub fn decode_index_buffer(buffer: &[u8]) -> Vec<u32> {
    buffer
        .chunks_exact(2)
        .map(|pair| LittleEndian::read_u16(pair) as u32)
        .collect()
}

/// Projects decoded 3-D mesh positions into 2-D sprite space: the third
/// coordinate is dropped, then points are scaled to units and translated so
/// the mesh is centered on the rect.
pub fn project_vertices(positions: &[Vec3], rect: Rect, pixels_per_unit: f32) -> Vec<Vec2> {
    let half_size = rect.size() * 0.5;
    positions
        .iter()
        .map(|p| Vec2::new(p.x, p.y) * pixels_per_unit + half_size)
        .collect()
}
