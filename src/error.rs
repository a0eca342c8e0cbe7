use thiserror::Error;

/// Error types for addressinput-util
#[derive(Error, Debug)]
pub enum UtilError {
    // Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Invalid configuration file: {path}")]
    InvalidConfig { path: String },

    // Input errors
    #[error("Invalid argument `{name}`: {reason}")]
    InvalidArgument { name: String, reason: String },

    // Generic errors
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl UtilError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration { message: message.into() }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal { message: message.into() }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::Configuration { .. } | Self::InvalidConfig { .. } => "configuration",
            Self::InvalidArgument { .. } => "input",
            Self::Internal { .. } => "internal",
        }
    }
}

/// Result type alias for addressinput-util
pub type UtilResult<T> = std::result::Result<T, UtilError>;

/// Convert anyhow::Error to UtilError
impl From<anyhow::Error> for UtilError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal { message: err.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let error = UtilError::config("Invalid setting");
        assert_eq!(error.category(), "configuration");
        assert_eq!(error.to_string(), "Configuration error: Invalid setting");
    }

    #[test]
    fn test_invalid_argument_message() {
        let error = UtilError::invalid_argument("language_tag", "must not be blank");
        assert_eq!(error.category(), "input");
        assert_eq!(error.to_string(), "Invalid argument `language_tag`: must not be blank");
    }

    #[test]
    fn test_from_anyhow() {
        let error: UtilError = anyhow::anyhow!("boom").into();
        assert_eq!(error.category(), "internal");
        assert!(error.to_string().contains("boom"));
    }
}
