/// Produces opaque 32-hex-character sprite identifiers.
///
/// The engine derives the original identifier from sprite binary content,
/// which the bake discards; reconstruction only needs the replacement to be
/// unique, so implementations are free to draw from any entropy source.
pub trait SpriteIdGenerator: Sync {
    fn generate(&self) -> String;
}

/// Default generator: 128 random bits formatted as lowercase hex.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomSpriteId;

impl SpriteIdGenerator for RandomSpriteId {
    fn generate(&self) -> String {
        format!("{:032x}", rand::random::<u128>())
    }
}
