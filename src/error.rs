//! Error handling for wordlist-forge

use thiserror::Error;

/// Main error type for wordlist-forge
#[derive(Error, Debug, Clone)]
pub enum WordlistForgeError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    #[error("Prompt error: {message}")]
    Prompt { message: String },

    #[error("No words generated")]
    EmptyWordlist,

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("CLI error: {message}")]
    Cli { message: String },
}

impl WordlistForgeError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }

    /// Create a prompt error
    pub fn prompt(message: impl Into<String>) -> Self {
        Self::Prompt {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create a CLI error
    pub fn cli(message: impl Into<String>) -> Self {
        Self::Cli {
            message: message.into(),
        }
    }

    /// Whether the pipeline can keep going after this error
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message } => {
                format!("❌ Configuration problem: {}\n💡 Check your config file or .env", message)
            }
            Self::Validation { message } => {
                format!("❌ Validation error: {}\n💡 Check your input values", message)
            }
            Self::Io { message, path } => {
                let path_info = path.as_ref().map_or(String::new(), |p| format!(" ({})", p));
                format!("❌ File error{}: {}\n💡 Check file permissions and paths", path_info, message)
            }
            Self::Prompt { message } => {
                format!("❌ Prompt cancelled: {}", message)
            }
            Self::EmptyWordlist => {
                "❌ No words generated.\n💡 Provide at least one generation method".to_string()
            }
            Self::Internal { message } => {
                format!("❌ Internal error: {}\n💡 This is a bug, please report it", message)
            }
            Self::Cli { message } => {
                format!("❌ Command error: {}\n💡 Use --help for usage information", message)
            }
        }
    }
}

/// Convert from common error types
impl From<std::io::Error> for WordlistForgeError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string(), None)
    }
}

impl From<inquire::InquireError> for WordlistForgeError {
    fn from(err: inquire::InquireError) -> Self {
        Self::prompt(err.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, WordlistForgeError>;

/// Helper macros for common error patterns
#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::error::WordlistForgeError::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::WordlistForgeError::config(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! validation_error {
    ($msg:expr) => {
        $crate::error::WordlistForgeError::validation($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::WordlistForgeError::validation(format!($fmt, $($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let err: WordlistForgeError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert!(matches!(err, WordlistForgeError::Io { .. }));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_validation_macro() {
        let err = validation_error!("min {} > max {}", 8, 4);
        assert_eq!(err.to_string(), "Validation error: min 8 > max 4");
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_config_macro() {
        let err = config_error!("bad key {}", "max_len");
        assert!(matches!(err, WordlistForgeError::Config { .. }));
        assert!(err.user_message().contains("bad key max_len"));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_user_message_mentions_path() {
        let err = WordlistForgeError::io("denied", Some("out.txt".to_string()));
        assert!(err.user_message().contains("out.txt"));
    }
}
