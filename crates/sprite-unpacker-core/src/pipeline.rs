use crate::atlas::resolve_atlas_coordinates;
use crate::bones::rescale_bones;
use crate::config::ReconstructConfig;
use crate::error::Result;
use crate::geometry::{fix_rotation, transform_polygons};
use crate::id::SpriteIdGenerator;
use crate::mesh::{VertexCodec, VertexStreams, decode_index_buffer, project_vertices};
use crate::model::{Sprite, SpriteAlignment, SpriteAtlas, SpriteMeta};
use tracing::{instrument, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[instrument(skip_all, fields(sprite = %sprite.name))]
/// Reconstructs one sprite's atlas-independent authoring metadata.
///
/// Notes:
/// - `atlas` is the sprite's parent atlas, when it has one; its per-sprite
///   record overrides the sprite's own render data for all geometry math.
/// - Which optional blocks get populated is decided by `cfg.schema`; a block
///   additionally requires the sprite to carry the source data for it.
/// - The call is pure and deterministic apart from the generated sprite
///   identifier; concurrent calls over the same atlas need no locking.
pub fn reconstruct_sprite(
    sprite: &Sprite,
    atlas: Option<&SpriteAtlas>,
    cfg: &ReconstructConfig,
    codec: &dyn VertexCodec,
    ids: &dyn SpriteIdGenerator,
) -> Result<SpriteMeta> {
    let coords = resolve_atlas_coordinates(sprite, atlas)?;

    let mut meta = SpriteMeta {
        name: sprite.name.clone(),
        rect: coords.rect,
        alignment: SpriteAlignment::Custom,
        pivot: coords.pivot,
        border: coords.border,
        tessellation_detail: 0.0,
        ..SpriteMeta::default()
    };

    if cfg.schema.supports_outline() {
        let mut outline = transform_polygons(
            &sprite.render_data.outline,
            coords.rect,
            coords.pivot,
            sprite.pixels_per_unit,
        );
        fix_rotation(&mut outline, coords.is_packed, coords.rotation);
        meta.outline = outline;
    }

    if cfg.schema.supports_physics_shape() && !sprite.physics_shape.is_empty() {
        let mut shape = transform_polygons(
            &sprite.physics_shape,
            coords.rect,
            coords.pivot,
            sprite.pixels_per_unit,
        );
        fix_rotation(&mut shape, coords.is_packed, coords.rotation);
        meta.physics_shape = shape;
    }

    if cfg.schema.supports_bones() && !sprite.bones.is_empty() && cfg.schema.supports_sprite_id() {
        // Bone/mesh anchoring uses the sprite's own rect: the rig was
        // authored against the original image, not the packed sub-rect.
        meta.bones = rescale_bones(&sprite.bones, sprite.pixels_per_unit, sprite.rect);
        set_bone_geometry(&mut meta, sprite, cfg, codec)?;
        meta.sprite_id = Some(ids.generate());
    }

    Ok(meta)
}

/// Decodes the sprite's mesh block (vertices, indices, skin weights) into the
/// metadata record. Absent vertex or index data yields empty sequences.
fn set_bone_geometry(
    meta: &mut SpriteMeta,
    sprite: &Sprite,
    cfg: &ReconstructConfig,
    codec: &dyn VertexCodec,
) -> Result<()> {
    let rd = &sprite.render_data;
    let streams = if rd.vertex_data.is_empty() {
        VertexStreams::default()
    } else {
        codec.decode(&rd.vertex_data, &rd.vertex_format)?
    };

    if cfg.schema.supports_vertices() {
        meta.vertices = project_vertices(&streams.positions, sprite.rect, sprite.pixels_per_unit);
    }

    meta.indices = decode_index_buffer(&rd.index_buffer);

    if cfg.schema.supports_weights() {
        if streams.skin.is_empty() || streams.skin.len() == streams.positions.len() {
            meta.weights = streams.skin;
        } else {
            // Weight list that doesn't line up with the vertices is corrupt;
            // drop it for this sprite instead of failing the batch.
            warn!(
                skin = streams.skin.len(),
                vertices = streams.positions.len(),
                "skin weight count does not match vertex count, dropping weights"
            );
        }
    }

    Ok(())
}

/// Reconstructs a batch of sprites, one result per input in input order.
///
/// Failures are per-sprite and never corrupt the rest of the batch; callers
/// wanting abort-all or skip-and-continue semantics fold over the returned
/// results. With the "parallel" feature and `cfg.parallel` set, sprites are
/// processed in parallel (each result is independent).
pub fn reconstruct_batch(
    items: &[(&Sprite, Option<&SpriteAtlas>)],
    cfg: &ReconstructConfig,
    codec: &dyn VertexCodec,
    ids: &dyn SpriteIdGenerator,
) -> Vec<Result<SpriteMeta>> {
    #[cfg(feature = "parallel")]
    {
        if cfg.parallel {
            return items
                .par_iter()
                .map(|(sprite, atlas)| reconstruct_sprite(sprite, *atlas, cfg, codec, ids))
                .collect();
        }
    }

    items
        .iter()
        .map(|(sprite, atlas)| reconstruct_sprite(sprite, *atlas, cfg, codec, ids))
        .collect()
}
