//! Error types for sitelog operations.

use thiserror::Error;

/// The main error type for sitelog operations.
///
/// Logging itself never fails; errors come from timer misuse and from
/// loading or validating configuration.
#[derive(Error, Debug)]
pub enum SitelogError {
    /// An operation that is not valid in the current state, such as ending
    /// a timer that was never started. Carries the offending label.
    #[error("No such label: {0}")]
    InvalidOperation(String),

    /// Configuration-related error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

impl SitelogError {
    /// The label carried by an [`SitelogError::InvalidOperation`], if any.
    pub fn label(&self) -> Option<&str> {
        match self {
            SitelogError::InvalidOperation(label) => Some(label),
            _ => None,
        }
    }
}

/// A specialized Result type for sitelog operations.
pub type Result<T> = std::result::Result<T, SitelogError>;

/// Helper macro to bail out with a SitelogError
///
/// # Example
///
/// ```ignore
/// if name.is_empty() {
///     bail!(Validation, "console name must not be empty");
/// }
/// ```
#[macro_export]
macro_rules! bail {
    ($variant:ident, $msg:expr) => {
        return Err($crate::SitelogError::$variant($msg.to_string()))
    };
    ($variant:ident, $fmt:expr, $($arg:tt)*) => {
        return Err($crate::SitelogError::$variant(format!($fmt, $($arg)*)))
    };
    ($msg:expr) => {
        return Err($crate::SitelogError::Other($msg.to_string()))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn end_timer(label: &str) -> Result<()> {
        bail!(InvalidOperation, label)
    }

    #[test]
    fn test_invalid_operation_names_label() {
        let err = end_timer("startup").unwrap_err();
        assert_eq!(err.to_string(), "No such label: startup");
        assert_eq!(err.label(), Some("startup"));
    }

    #[test]
    fn test_other_errors_have_no_label() {
        let err = SitelogError::Config("bad".to_string());
        assert_eq!(err.label(), None);
        assert_eq!(err.to_string(), "Configuration error: bad");
    }
}
