// Error type shared by the library and the CLI
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LandRunError {
    #[error("wind profile contains no samples")]
    EmptyProfile,

    #[error("invalid wind sample at row {index}: {reason}")]
    InvalidSample { index: usize, reason: String },

    #[error("invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: String,
    },

    #[error("failed to read wind table: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LandRunError>;
