use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading the breakdown configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for config operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_read_display() {
        let error = ConfigError::Read {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(
            error.to_string(),
            "Failed to read config file 'missing.json': no such file"
        );
    }

    #[test]
    fn test_config_error_parse_display() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = ConfigError::from(source);
        assert!(error.to_string().starts_with("Invalid config: "));
    }
}
