use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutlineError {
    #[error("Empty curve: {0}")]
    EmptyCurve(String),

    #[error("Invalid face {face}: {reason}")]
    InvalidFace { face: usize, reason: String },

    #[error("Non-finite coordinate: {0}")]
    NonFinite(String),
}

pub type Result<T> = std::result::Result<T, OutlineError>;
