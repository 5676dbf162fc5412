use gaussgrid_core::CoreError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CountError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CountError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("invalid radius: {radius} (must be finite and non-negative)")]
    InvalidRadius { radius: f64 },

    #[error("invalid sweep interval: {interval} (must be finite and positive)")]
    InvalidInterval { interval: f64 },

    #[error("coverage limit {limit} exceeds the maximum of {max}")]
    LimitExceeded { limit: u64, max: u64 },
}

impl CountError {
    #[must_use]
    pub fn radius(radius: f64) -> Self {
        Self::InvalidRadius { radius }
    }
}
