use crate::model::RenderDataKey;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpriteUnpackerError {
    #[error("sprite `{name}`: atlas has no entry for render data key {key:?}")]
    MissingAtlasEntry { name: String, key: RenderDataKey },
    #[error("sprite `{name}`: resolved atlas rect has non-positive size {width}x{height}")]
    InvalidRect {
        name: String,
        width: f32,
        height: f32,
    },
    #[error("vertex codec error: {0}")]
    Codec(String),
    #[error("texture `{texture}`: sprite is mapped to conflicting atlases")]
    ConflictingAtlases { texture: String },
}

pub type Result<T> = std::result::Result<T, SpriteUnpackerError>;
