use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolidError {
    #[error("{subject} cannot {operation}: {reason}")]
    UnsupportedOperation {
        subject: String,
        operation: String,
        reason: String,
    },

    #[error("Unknown principle: {name}")]
    UnknownPrinciple { name: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Raised on purpose by an illustration.
    Illustration,
    Configuration,
    System,
}

impl SolidError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SolidError::UnsupportedOperation { .. } => ErrorCategory::Illustration,
            SolidError::UnknownPrinciple { .. }
            | SolidError::ConfigError { .. }
            | SolidError::InvalidConfigValueError { .. }
            | SolidError::TomlError(_) => ErrorCategory::Configuration,
            SolidError::IoError(_) | SolidError::SerializationError(_) => ErrorCategory::System,
        }
    }

    /// Process exit status for the reader binary: 1 for configuration
    /// problems, 2 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 1,
            ErrorCategory::Illustration | ErrorCategory::System => 2,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SolidError::UnsupportedOperation { reason, .. } => reason.clone(),
            SolidError::UnknownPrinciple { name } => {
                format!("'{}' is not one of the five SOLID principles", name)
            }
            SolidError::ConfigError { message } => format!("Configuration problem: {}", message),
            SolidError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            SolidError::IoError(e) => format!("Could not read or write a file: {}", e),
            SolidError::SerializationError(e) => format!("Could not produce JSON output: {}", e),
            SolidError::TomlError(e) => format!("Config file is not valid TOML: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SolidError::UnsupportedOperation { .. } => {
                "Split the capability into its own trait so only types that support it implement it"
            }
            SolidError::UnknownPrinciple { .. } => {
                "Use a slug such as 'open-closed', a title, or one of the letters S, O, L, I, D"
            }
            SolidError::ConfigError { .. } | SolidError::InvalidConfigValueError { .. } => {
                "Check the command-line flags and the config file values"
            }
            SolidError::TomlError(_) => "Fix the syntax of the config file",
            SolidError::IoError(_) => "Check that the path exists and is readable",
            SolidError::SerializationError(_) => "Try the plain text format instead",
        }
    }
}

pub type Result<T> = std::result::Result<T, SolidError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_operation_display() {
        let err = SolidError::UnsupportedOperation {
            subject: "Penguin".to_string(),
            operation: "fly".to_string(),
            reason: "Penguins do not fly".to_string(),
        };
        assert_eq!(err.to_string(), "Penguin cannot fly: Penguins do not fly");
        assert_eq!(err.category(), ErrorCategory::Illustration);
        assert_eq!(err.user_friendly_message(), "Penguins do not fly");
    }

    #[test]
    fn test_categories() {
        let unknown = SolidError::UnknownPrinciple {
            name: "X".to_string(),
        };
        assert_eq!(unknown.category(), ErrorCategory::Configuration);

        let io = SolidError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.category(), ErrorCategory::System);
    }

    #[test]
    fn test_exit_codes() {
        let unknown = SolidError::UnknownPrinciple {
            name: "yagni".to_string(),
        };
        assert_eq!(unknown.exit_code(), 1);

        let duplicate = SolidError::ConfigError {
            message: "principle 'open-closed' is selected more than once".to_string(),
        };
        assert_eq!(duplicate.exit_code(), 1);

        let bad_toml = toml::from_str::<toml::Table>("[catalog").unwrap_err();
        assert_eq!(SolidError::from(bad_toml).exit_code(), 1);

        let missing = SolidError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "absent.toml",
        ));
        assert_eq!(missing.exit_code(), 2);

        let penguin = SolidError::UnsupportedOperation {
            subject: "Penguin".to_string(),
            operation: "fly".to_string(),
            reason: "Penguins do not fly".to_string(),
        };
        assert_eq!(penguin.exit_code(), 2);
    }
}
