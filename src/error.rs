// ABOUTME: Error types with structured exit codes for CLI
// ABOUTME: Maps conversion, storage, and API errors to specific exit codes

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error {status} on {endpoint}: {message}")]
    Api {
        endpoint: String,
        status: u16,
        message: String,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Filesystem error: {0}")]
    Filesystem(#[from] std::io::Error),

    #[error("Source is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Auth(_) => 2,
            Error::Network(_) => 3,
            Error::Api { .. } => 4,
            Error::Parse(_) => 5,
            Error::Filesystem(_) => 6,
            Error::Encoding(_) => 7,
            Error::Config(_) => 8,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_exit_codes() {
        assert_eq!(Error::Auth("test".into()).exit_code(), 2);
        assert_eq!(
            Error::Api {
                endpoint: "/drafts/".into(),
                status: 404,
                message: "not found".into()
            }
            .exit_code(),
            4
        );
        assert_eq!(Error::Config("bad key".into()).exit_code(), 8);
    }

    #[test]
    fn test_encoding_error_from_utf8() {
        let bytes = [0xff_u8, 0xfe];
        let err: Error = std::str::from_utf8(&bytes).unwrap_err().into();
        assert_eq!(err.exit_code(), 7);
        assert!(err.to_string().starts_with("Source is not valid UTF-8"));
    }
}
