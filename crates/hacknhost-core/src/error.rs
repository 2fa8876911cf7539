//! Error types shared across the HacknHost crates.

use thiserror::Error;

/// Errors raised while configuring or starting the assistant.
///
/// The matcher itself is total and never produces one of these.
#[derive(Debug, Error)]
pub enum HacknHostError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Knowledge base error: {0}")]
    Knowledge(String),

    #[error("Gateway error: {0}")]
    Gateway(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HacknHostError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HacknHostError::Knowledge("missing entries".into());
        assert_eq!(err.to_string(), "Knowledge base error: missing entries");
    }

    #[test]
    fn test_io_error_converts() {
        fn open() -> Result<String> {
            Ok(std::fs::read_to_string("/definitely/not/here/hacknhost.toml")?)
        }
        assert!(matches!(open(), Err(HacknHostError::Io(_))));
    }
}
