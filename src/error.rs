use thiserror::Error;

pub type QuakeResult<T> = Result<T, QuakeError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum QuakeError {
    #[error("invalid domain: min={min}, max={max}")]
    InvalidDomain { min: f64, max: f64 },

    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("regression over {points} point(s) has zero x-variance")]
    DegenerateRegression { points: usize },

    #[error("magnitude {magnitude} does not map to any category")]
    UnknownMagnitudeCategory { magnitude: f64 },

    #[error("slider was mutated while dispatching listener notifications")]
    ReentrantMutation,
}
