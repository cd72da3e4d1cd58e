use thiserror::Error;

/// A [`GenerationConfig`](super::params::GenerationConfig) that cannot be generated.
///
/// Returned before any cell is seeded; no partial grid exists when this is observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidConfig {
    #[error("invalid config: width must be positive, got {0}")]
    NonPositiveWidth(i32),

    #[error("invalid config: height must be positive, got {0}")]
    NonPositiveHeight(i32),

    #[error("invalid config: noise density must be within 0..=100, got {0}")]
    NoiseDensityOutOfRange(i32),

    #[error("invalid config: iterations must not be negative, got {0}")]
    NegativeIterations(i32),
}
