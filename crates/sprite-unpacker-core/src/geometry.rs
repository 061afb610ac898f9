use crate::model::{PackingRotation, Rect};
use glam::Vec2;

/// Converts raw pixel-space polygons (centered on the rect) to unit space,
/// shifted so they are expressed relative to the pivot.
///
/// Point and polygon order are preserved; winding matters for physics
/// colliders.
pub fn transform_polygons(
    raw: &[Vec<Vec2>],
    rect: Rect,
    pivot: Vec2,
    pixels_per_unit: f32,
) -> Vec<Vec<Vec2>> {
    let pivot_shift = rect.size() * pivot - rect.size() * 0.5;
    raw.iter()
        .map(|polygon| {
            polygon
                .iter()
                .map(|&point| point * pixels_per_unit + pivot_shift)
                .collect()
        })
        .collect()
}

/// Undoes the atlas packer's flip/rotation on already-unit-space polygons.
/// No-op unless the sprite was actually packed.
///
/// `Rotate90` is a bare coordinate swap `(x, y) -> (y, x)`, not a rotation
/// matrix; applying it twice is not `Rotate180`. That is what the packed
/// data observably encodes and downstream consumers are tuned to it, so it
/// is reproduced as-is.
pub fn fix_rotation(polygons: &mut [Vec<Vec2>], is_packed: bool, rotation: PackingRotation) {
    if !is_packed {
        return;
    }
    let map: fn(Vec2) -> Vec2 = match rotation {
        PackingRotation::None => return,
        PackingRotation::FlipHorizontal => |p| Vec2::new(-p.x, p.y),
        PackingRotation::FlipVertical => |p| Vec2::new(p.x, -p.y),
        PackingRotation::Rotate90 => |p| Vec2::new(p.y, p.x),
        PackingRotation::Rotate180 => |p| Vec2::new(-p.x, -p.y),
    };
    for polygon in polygons.iter_mut() {
        for point in polygon.iter_mut() {
            *point = map(*point);
        }
    }
}
