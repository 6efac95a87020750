use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CompressionError {
    #[error("No strategy configured")]
    Unconfigured,
    #[error("Truncated stream: {0} more byte(s) expected")]
    Truncated(usize),
    #[error("Invalid format tag: {0:#04x}")]
    InvalidFormat(u8),
    #[error("Invalid back-reference: offset {offset} at position {position}")]
    InvalidReference { offset: usize, position: usize },
    #[error("Length mismatch: expecting {expected} byte(s) but {actual} decoded")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("Trailing data: {0} byte(s) after end of stream")]
    TrailingData(usize),
}
