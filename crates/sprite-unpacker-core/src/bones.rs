use crate::model::{Rect, SpriteBone};

/// Rescales a skinning rig from pixel space to unit space and anchors the
/// root bone to the rect center. Returns a fresh rig; the input sprite is
/// never mutated.
///
/// Callers supply bones in parent-before-child order; that order is kept.
/// Zero or multiple roots are accepted as-is and rig connectivity is not
/// validated.
pub fn rescale_bones(bones: &[SpriteBone], pixels_per_unit: f32, rect: Rect) -> Vec<SpriteBone> {
    bones
        .iter()
        .map(|bone| {
            let mut bone = bone.clone();
            bone.position *= pixels_per_unit;
            bone.length *= pixels_per_unit;
            if bone.parent_id == -1 {
                bone.position.x += rect.w * 0.5;
                bone.position.y += rect.h * 0.5;
            }
            bone
        })
        .collect()
}
