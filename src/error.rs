use thiserror::Error;

/// Main error type for index build operations
#[derive(Error, Debug)]
pub enum StaveError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] bincode::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type alias for index build operations
pub type Result<T> = std::result::Result<T, StaveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StaveError::Config("barrel size must be at least 1".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: barrel size must be at least 1"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: StaveError = io_err.into();
        assert!(matches!(err, StaveError::Io(_)));
    }
}
