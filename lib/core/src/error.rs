use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Configuration errors. Data defects never error: malformed cells degrade
/// to safe defaults during normalization instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Top-K must be at least 1, got {0}")]
    InvalidTopK(usize),

    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),
}
