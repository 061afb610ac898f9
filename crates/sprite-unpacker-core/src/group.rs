use crate::config::ReconstructConfig;
use crate::error::{Result, SpriteUnpackerError};
use crate::id::SpriteIdGenerator;
use crate::mesh::VertexCodec;
use crate::model::{Sprite, SpriteAtlas, SpriteMeta};
use crate::pipeline::reconstruct_batch;
use std::collections::HashMap;

/// Sprites that share one source texture, each paired with the atlas it was
/// packed into (if any).
///
/// A sprite can be encountered more than once while scanning a project: once
/// standalone and again through an atlas, or through a variant atlas. The
/// group keeps the richest pairing and rejects genuinely conflicting atlas
/// mappings, where "conflicting" means the two atlases do not belong to the
/// same master atlas.
#[derive(Debug, Default, Clone)]
pub struct SpriteGroup {
    texture: String,
    entries: Vec<(Sprite, Option<SpriteAtlas>)>,
    by_name: HashMap<String, usize>,
}

impl SpriteGroup {
    pub fn new(texture: impl Into<String>) -> Self {
        Self {
            texture: texture.into(),
            entries: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// Name of the texture the grouped sprites were baked into.
    pub fn texture(&self) -> &str {
        &self.texture
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds a sprite/atlas pairing. A sprite already present without an atlas
    /// is upgraded to the atlased pairing; a sprite already mapped to an
    /// atlas of a different master is a data-integrity fault.
    pub fn insert(&mut self, sprite: Sprite, atlas: Option<SpriteAtlas>) -> Result<()> {
        match self.by_name.get(&sprite.name) {
            Some(&idx) => {
                if let Some(atlas) = atlas {
                    let mapped = &mut self.entries[idx].1;
                    match mapped {
                        None => *mapped = Some(atlas),
                        Some(existing) => {
                            if let Some(master) = atlas.master_atlas() {
                                if existing.master_atlas() != Some(master) {
                                    return Err(SpriteUnpackerError::ConflictingAtlases {
                                        texture: self.texture.clone(),
                                    });
                                }
                            }
                        }
                    }
                }
            }
            None => {
                self.by_name.insert(sprite.name.clone(), self.entries.len());
                self.entries.push((sprite, atlas));
            }
        }
        Ok(())
    }

    /// Iterates the grouped pairings in insertion order.
    pub fn sprites(&self) -> impl Iterator<Item = (&Sprite, Option<&SpriteAtlas>)> {
        self.entries
            .iter()
            .map(|(sprite, atlas)| (sprite, atlas.as_ref()))
    }

    /// Reconstructs every sprite in the group, one result per sprite in
    /// insertion order.
    pub fn reconstruct_all(
        &self,
        cfg: &ReconstructConfig,
        codec: &dyn VertexCodec,
        ids: &dyn SpriteIdGenerator,
    ) -> Vec<Result<SpriteMeta>> {
        let items: Vec<_> = self.sprites().collect();
        reconstruct_batch(&items, cfg, codec, ids)
    }
}
