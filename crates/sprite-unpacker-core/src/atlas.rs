use crate::error::{Result, SpriteUnpackerError};
use crate::model::{PackingRotation, Rect, Sprite, SpriteAtlas};
use glam::{Vec2, Vec4};

/// A sprite's effective geometry resolved against its atlas: the packed rect,
/// the pivot/border re-expressed relative to that rect, and the packing flags
/// that apply to it. Single source of geometric truth for the later steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtlasCoordinates {
    pub rect: Rect,
    /// Normalized pivot relative to `rect`.
    pub pivot: Vec2,
    /// (left, bottom, right, top) border, crop-adjusted.
    pub border: Vec4,
    pub is_packed: bool,
    pub rotation: PackingRotation,
}

/// Recomputes a sprite's rect/pivot/border relative to its packed location.
///
/// Sprite values are relative to the original image it was created from.
/// Since the atlas shuffles and crops sprite images, those values have to be
/// recalculated against the packed sub-rect. A sprite that doesn't belong to
/// an atlas is treated as a single-sprite atlas of its own image.
pub fn resolve_atlas_coordinates(
    sprite: &Sprite,
    atlas: Option<&SpriteAtlas>,
) -> Result<AtlasCoordinates> {
    let (atlas_rect, crop_bot_left, is_packed, rotation) =
        match (atlas, sprite.render_data_key.as_ref()) {
            (Some(atlas), Some(key)) => {
                let data = atlas.render_data_map.get(key).ok_or_else(|| {
                    SpriteUnpackerError::MissingAtlasEntry {
                        name: sprite.name.clone(),
                        key: *key,
                    }
                })?;
                (
                    data.texture_rect,
                    data.texture_rect_offset,
                    data.is_packed,
                    data.packing_rotation,
                )
            }
            _ => {
                let rd = &sprite.render_data;
                (
                    rd.texture_rect,
                    rd.texture_rect_offset,
                    rd.is_packed,
                    rd.packing_rotation,
                )
            }
        };

    if atlas_rect.w <= 0.0 || atlas_rect.h <= 0.0 {
        return Err(SpriteUnpackerError::InvalidRect {
            name: sprite.name.clone(),
            width: atlas_rect.w,
            height: atlas_rect.h,
        });
    }

    // Total trim is the size difference; whatever isn't accounted for by the
    // bottom-left crop offset was cut from the top/right side.
    let size_delta = sprite.rect.size() - atlas_rect.size();
    let crop_top_right = size_delta - crop_bot_left;

    let pivot = match sprite.pivot {
        Some(pivot) => pivot,
        None => {
            let center = sprite.rect.size() * 0.5;
            (center + sprite.offset) / sprite.rect.size()
        }
    };

    let pivot_position = pivot * sprite.rect.size();
    let atlas_pivot = (pivot_position - crop_bot_left) / atlas_rect.size();

    // A zero border component means "no border on that edge" and is never
    // crop-adjusted; non-zero components lose the trim taken off their edge.
    let border = match sprite.border {
        Some(b) => Vec4::new(
            crop_border(b.x, crop_bot_left.x),
            crop_border(b.y, crop_bot_left.y),
            crop_border(b.z, crop_top_right.x),
            crop_border(b.w, crop_top_right.y),
        ),
        None => Vec4::ZERO,
    };

    Ok(AtlasCoordinates {
        rect: atlas_rect,
        pivot: atlas_pivot,
        border,
        is_packed,
        rotation,
    })
}

fn crop_border(value: f32, crop: f32) -> f32 {
    if value == 0.0 { 0.0 } else { value - crop }
}
