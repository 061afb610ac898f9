use glam::{Vec2, Vec4};
use sprite_unpacker_core::prelude::*;
use sprite_unpacker_core::SpriteUnpackerError;
use std::collections::HashMap;

fn key(n: u8) -> RenderDataKey {
    RenderDataKey {
        guid: [n; 16],
        data: n as i64,
    }
}

fn standalone_sprite() -> Sprite {
    Sprite {
        name: "hero".into(),
        rect: Rect::new(0.0, 0.0, 64.0, 64.0),
        pixels_per_unit: 1.0,
        render_data: RenderData {
            texture_rect: Rect::new(0.0, 0.0, 64.0, 64.0),
            ..RenderData::default()
        },
        ..Sprite::default()
    }
}

#[test]
fn no_atlas_is_identity_on_rect_pivot_border() {
    let mut sprite = standalone_sprite();
    sprite.pivot = Some(Vec2::new(0.5, 0.5));
    sprite.border = Some(Vec4::new(1.0, 2.0, 3.0, 4.0));

    let coords = resolve_atlas_coordinates(&sprite, None).unwrap();
    assert_eq!(coords.rect, Rect::new(0.0, 0.0, 64.0, 64.0));
    assert_eq!(coords.pivot, Vec2::new(0.5, 0.5));
    assert_eq!(coords.border, Vec4::new(1.0, 2.0, 3.0, 4.0));
    assert!(!coords.is_packed);
    assert_eq!(coords.rotation, PackingRotation::None);
}

#[test]
fn absent_pivot_defaults_to_center_plus_offset() {
    // offset (0,0): pivot lands on the geometric center
    let sprite = standalone_sprite();
    let coords = resolve_atlas_coordinates(&sprite, None).unwrap();
    assert_eq!(coords.pivot, Vec2::new(0.5, 0.5));
    assert_eq!(coords.border, Vec4::ZERO);

    let mut shifted = standalone_sprite();
    shifted.offset = Vec2::new(16.0, -16.0);
    let coords = resolve_atlas_coordinates(&shifted, None).unwrap();
    assert_eq!(coords.pivot, Vec2::new(0.75, 0.25));
}

#[test]
fn atlas_entry_overrides_render_data() {
    let mut sprite = standalone_sprite();
    sprite.render_data_key = Some(key(7));
    sprite.pivot = Some(Vec2::new(0.5, 0.5));
    sprite.border = Some(Vec4::new(5.0, 0.0, 6.0, 7.0));

    // Atlas trimmed the 64x64 source down to 60x56: 1px/3px cut bottom-left,
    // the remaining 3px/5px cut top-right.
    let mut map = HashMap::new();
    map.insert(
        key(7),
        SpriteAtlasData {
            texture_rect: Rect::new(10.0, 20.0, 60.0, 56.0),
            texture_rect_offset: Vec2::new(1.0, 3.0),
            is_packed: true,
            packing_rotation: PackingRotation::Rotate90,
        },
    );
    let atlas = SpriteAtlas::new(map);

    let coords = resolve_atlas_coordinates(&sprite, Some(&atlas)).unwrap();
    assert_eq!(coords.rect, Rect::new(10.0, 20.0, 60.0, 56.0));
    assert_eq!(coords.pivot, Vec2::new(31.0 / 60.0, 29.0 / 56.0));
    // zero border component stays zero, others lose the trim on their edge
    assert_eq!(coords.border, Vec4::new(4.0, 0.0, 3.0, 2.0));
    assert!(coords.is_packed);
    assert_eq!(coords.rotation, PackingRotation::Rotate90);
}

#[test]
fn sprite_without_key_ignores_atlas() {
    let mut sprite = standalone_sprite();
    sprite.render_data.texture_rect_offset = Vec2::new(2.0, 2.0);
    sprite.render_data.texture_rect = Rect::new(0.0, 0.0, 60.0, 60.0);

    let atlas = SpriteAtlas::new(HashMap::new());
    let coords = resolve_atlas_coordinates(&sprite, Some(&atlas)).unwrap();
    // identity-atlas path: the sprite's own render data wins
    assert_eq!(coords.rect, Rect::new(0.0, 0.0, 60.0, 60.0));
    assert_eq!(coords.pivot, Vec2::new(30.0 / 60.0, 30.0 / 60.0));
}

#[test]
fn missing_atlas_entry_is_per_sprite_error() {
    let mut sprite = standalone_sprite();
    sprite.render_data_key = Some(key(9));
    let atlas = SpriteAtlas::new(HashMap::new());

    let err = resolve_atlas_coordinates(&sprite, Some(&atlas)).unwrap_err();
    assert!(matches!(
        err,
        SpriteUnpackerError::MissingAtlasEntry { .. }
    ));
}

#[test]
fn zero_area_atlas_rect_is_rejected() {
    let mut sprite = standalone_sprite();
    sprite.render_data.texture_rect = Rect::new(0.0, 0.0, 0.0, 64.0);

    let err = resolve_atlas_coordinates(&sprite, None).unwrap_err();
    assert!(matches!(err, SpriteUnpackerError::InvalidRect { .. }));
}
