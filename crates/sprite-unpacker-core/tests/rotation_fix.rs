use glam::Vec2;
use sprite_unpacker_core::fix_rotation;
use sprite_unpacker_core::prelude::*;

fn shape() -> Vec<Vec<Vec2>> {
    vec![vec![Vec2::new(2.0, 3.0), Vec2::new(-1.0, 4.0)]]
}

fn apply(rotation: PackingRotation, packed: bool) -> Vec<Vec<Vec2>> {
    let mut polygons = shape();
    fix_rotation(&mut polygons, packed, rotation);
    polygons
}

#[test]
fn mapping_table_is_exact() {
    assert_eq!(apply(PackingRotation::None, true), shape());
    assert_eq!(
        apply(PackingRotation::FlipHorizontal, true)[0],
        vec![Vec2::new(-2.0, 3.0), Vec2::new(1.0, 4.0)]
    );
    assert_eq!(
        apply(PackingRotation::FlipVertical, true)[0],
        vec![Vec2::new(2.0, -3.0), Vec2::new(-1.0, -4.0)]
    );
    assert_eq!(
        apply(PackingRotation::Rotate90, true)[0],
        vec![Vec2::new(3.0, 2.0), Vec2::new(4.0, -1.0)]
    );
    assert_eq!(
        apply(PackingRotation::Rotate180, true)[0],
        vec![Vec2::new(-2.0, -3.0), Vec2::new(1.0, -4.0)]
    );
}

#[test]
fn unpacked_sprites_are_untouched() {
    assert_eq!(apply(PackingRotation::Rotate180, false), shape());
    assert_eq!(apply(PackingRotation::FlipHorizontal, false), shape());
}

// Rotate90 is a coordinate swap, not a rotation matrix: applying it twice is
// the identity, which differs from Rotate180. Intentional; the packed data
// encodes exactly this transform.
#[test]
fn rotate90_twice_is_not_rotate180() {
    let mut twice = shape();
    fix_rotation(&mut twice, true, PackingRotation::Rotate90);
    fix_rotation(&mut twice, true, PackingRotation::Rotate90);
    assert_eq!(twice, shape());

    let once_180 = apply(PackingRotation::Rotate180, true);
    assert_ne!(twice, once_180);
}

#[test]
fn unknown_raw_rotation_decodes_to_identity() {
    assert_eq!(PackingRotation::from_raw(3), PackingRotation::Rotate90);
    assert_eq!(PackingRotation::from_raw(5), PackingRotation::None);
    assert_eq!(PackingRotation::from_raw(255), PackingRotation::None);
}

#[test]
fn point_and_polygon_order_preserved() {
    let mut polygons = vec![
        vec![Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0), Vec2::new(-1.0, 0.0)],
        vec![Vec2::new(5.0, 5.0)],
    ];
    fix_rotation(&mut polygons, true, PackingRotation::FlipVertical);
    assert_eq!(polygons.len(), 2);
    assert_eq!(polygons[0].len(), 3);
    assert_eq!(polygons[0][0], Vec2::new(1.0, 0.0));
    assert_eq!(polygons[0][1], Vec2::new(0.0, -1.0));
    assert_eq!(polygons[1][0], Vec2::new(5.0, -5.0));
}
