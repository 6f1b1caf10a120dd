use thiserror::Error;

/// Invalid blob configuration. Animation and path building never fail once a
/// blob has been constructed with valid parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BlobError {
    #[error("blob needs at least {min} points, got {count}")]
    TooFewPoints { count: usize, min: usize },
    #[error("invalid radius bounds: min {min} max {max}")]
    InvalidRadiusBounds { min: f32, max: f32 },
}

pub type Result<T, E = BlobError> = std::result::Result<T, E>;
