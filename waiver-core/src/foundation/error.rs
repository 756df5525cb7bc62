use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WaiverError {
    #[error("snapshot capture failed: {0}")]
    Capture(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("{format} encoding error: {details}")]
    Encoding { format: String, details: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, WaiverError>;

impl From<serde_json::Error> for WaiverError {
    fn from(err: serde_json::Error) -> Self {
        WaiverError::Encoding { format: "json".to_string(), details: err.to_string() }
    }
}

impl From<io::Error> for WaiverError {
    fn from(err: io::Error) -> Self {
        WaiverError::Message(err.to_string())
    }
}

impl From<image::ImageError> for WaiverError {
    fn from(err: image::ImageError) -> Self {
        WaiverError::Encoding { format: "png".to_string(), details: err.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_variants_render() {
        let err = WaiverError::Capture("render context unavailable".to_string());
        assert!(err.to_string().contains("snapshot capture failed"));

        let err = WaiverError::Encoding { format: "png".to_string(), details: "truncated".to_string() };
        assert!(err.to_string().contains("png"));

        let err = WaiverError::Transport("connection refused".to_string());
        assert!(err.to_string().contains("transport"));
    }
}
