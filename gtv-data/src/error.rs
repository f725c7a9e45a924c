/// Error types for loading the temperature dataset
use thiserror::Error;

/// Main error type for dataset loading
///
/// Every variant is terminal for a render: the pipeline logs it once and
/// draws nothing.
#[derive(Error, Debug)]
pub enum LoadError {
    /// HTTP request failed or was rejected
    #[error("Network request failed: {0}")]
    Network(String),

    /// Payload is not valid JSON or is missing expected fields
    #[error("Failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),

    /// An observation carries a month outside 1..=12
    #[error("Invalid month {month} for year {year}")]
    InvalidMonth { year: i32, month: u32 },

    /// The dataset has no observations, so no scale can be computed
    #[error("Dataset contains no observations")]
    EmptyDataset,

    /// Failed to read a local copy of the payload
    #[error("Failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(feature = "api")]
impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        LoadError::Network(err.to_string())
    }
}

impl LoadError {
    /// True for failures where the payload arrived but could not be used.
    pub fn is_parse(&self) -> bool {
        matches!(self, LoadError::Parse(_) | LoadError::InvalidMonth { .. })
    }
}

/// Type alias for Results using LoadError
pub type Result<T> = std::result::Result<T, LoadError>;
