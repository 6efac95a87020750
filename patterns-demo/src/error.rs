use strategies::CompressionError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ValidationErrors),
    #[error("Unknown demo: {0}")]
    UnknownDemo(String),
    #[error("Compression failed: {0}")]
    Compression(#[from] CompressionError),
    #[error("{0} strategy did not restore the original data")]
    LossyRoundTrip(&'static str),
}
