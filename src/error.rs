use thiserror::Error;

/// Error types for the peakfit-rs library.
#[derive(Error, Debug)]
pub enum PeakFitError {
    /// Paired sequences disagree in length.
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    /// A borrowed dataset's `x` sequence is not sorted ascending.
    #[error("Unsorted input: {0}")]
    UnsortedInput(String),

    /// Two samples share the same `x` coordinate.
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    /// A degenerate or empty query interval.
    #[error("Invalid interval: {0}")]
    InvalidInterval(String),

    /// A query coordinate falls outside the dataset's support.
    #[error("Out of range: {0}")]
    OutOfRange(String),

    /// An exact-match lookup missed.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Too few samples for the requested operation.
    #[error("Dataset too small: {0}")]
    TooSmall(String),

    /// An invalid argument was passed to the optimizer.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O error wrapper.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Generic error for cases that don't fit the other categories.
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for peakfit-rs operations.
pub type Result<T> = std::result::Result<T, PeakFitError>;

/// Extensions for converting from other error types.
impl From<String> for PeakFitError {
    fn from(s: String) -> Self {
        PeakFitError::Other(s)
    }
}

impl From<&str> for PeakFitError {
    fn from(s: &str) -> Self {
        PeakFitError::Other(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PeakFitError::ShapeMismatch("x and y have different sizes (3 != 2)".to_string());
        assert!(format!("{}", err).contains("3 != 2"));

        let err = PeakFitError::InvalidInterval("[2; 2] is empty".to_string());
        assert!(format!("{}", err).contains("[2; 2]"));
    }

    #[test]
    fn test_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PeakFitError = io_err.into();

        match err {
            PeakFitError::IoError(_) => (),
            _ => panic!("Expected IoError variant"),
        }

        let str_err: PeakFitError = "test error".into();
        match str_err {
            PeakFitError::Other(s) => assert_eq!(s, "test error"),
            _ => panic!("Expected Other variant"),
        }
    }
}
