//! Error types for manifest loading.

use thiserror::Error;

/// Error type for manifest loading and validation.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Reading the manifest file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// YAML parsing error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// File extension is not one of the known formats
    #[error("unsupported manifest format: '{0}' (expected .yaml, .yml, .toml or .json)")]
    UnsupportedFormat(String),
    /// A value parsed but is not acceptable
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// Field name
        field: String,
        /// Error message
        message: String,
    },
}

impl ManifestError {
    pub(crate) fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ManifestError::invalid("theme.colors.grey", "invalid hex color: 'zz'");
        assert_eq!(
            err.to_string(),
            "Invalid value for 'theme.colors.grey': invalid hex color: 'zz'"
        );

        let err = ManifestError::UnsupportedFormat("ini".to_string());
        assert!(err.to_string().contains("'ini'"));
    }

    #[test]
    fn test_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: ManifestError = io.into();
        assert!(matches!(err, ManifestError::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_from_json() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = ManifestError::from(json_err);
        assert!(err.to_string().starts_with("JSON error:"));
    }
}
