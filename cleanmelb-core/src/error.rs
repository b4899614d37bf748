use thiserror::Error;

#[derive(Error, Debug)]
pub enum PosterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("Compression error: {0}")]
    CompressionError(String),

    #[error("Invalid object reference: {0}")]
    InvalidReference(String),

    #[error("Nothing to export: set at least one goal above zero and fix any input errors")]
    NothingToExport,
}

pub type Result<T> = std::result::Result<T, PosterError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error as IoError, ErrorKind};

    #[test]
    fn test_poster_error_display() {
        let error = PosterError::InvalidImage("Not a valid JPEG file".to_string());
        assert_eq!(error.to_string(), "Invalid image: Not a valid JPEG file");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = IoError::new(ErrorKind::NotFound, "logo.jpg");
        let error: PosterError = io_error.into();
        assert!(matches!(error, PosterError::Io(_)));
        assert!(error.to_string().starts_with("IO error:"));
    }

    #[test]
    fn test_nothing_to_export_message() {
        let error = PosterError::NothingToExport;
        assert!(error.to_string().contains("at least one goal"));
    }
}
