//! Common enumerations used throughout sitelog.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::errors::{SitelogError, Result};

/// A console logging method.
///
/// `Info`, `Log`, `Warn` and `Error` form the severity list, in ascending
/// order. `Dir` and `Assert` sit outside it and carry no rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Informational messages, lowest severity
    Info,
    /// Plain log output
    Log,
    /// Warnings
    Warn,
    /// Errors, highest severity
    Error,
    /// Debug dump of a value
    Dir,
    /// Failed assertions
    Assert,
}

impl Method {
    /// The severity list, ascending.
    pub const SEVERITY: [Method; 4] = [Method::Info, Method::Log, Method::Warn, Method::Error];

    /// Every method, severity list first.
    pub const ALL: [Method; 6] = [
        Method::Info,
        Method::Log,
        Method::Warn,
        Method::Error,
        Method::Dir,
        Method::Assert,
    ];

    /// Position in the severity list, or `None` for unranked methods.
    pub fn rank(self) -> Option<usize> {
        Self::SEVERITY.iter().position(|m| *m == self)
    }

    /// Whether a call through this method clears the `min` threshold.
    ///
    /// Unranked methods always pass, and so does every method when the
    /// threshold itself is absent or unranked.
    pub fn passes(self, min: Option<Method>) -> bool {
        match (self.rank(), min.and_then(Method::rank)) {
            (Some(rank), Some(threshold)) => rank >= threshold,
            _ => true,
        }
    }

    /// Lowercase method name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Method::Info => "info",
            Method::Log => "log",
            Method::Warn => "warn",
            Method::Error => "error",
            Method::Dir => "dir",
            Method::Assert => "assert",
        }
    }

    /// Uppercase label as it appears in rendered output.
    pub const fn label(self) -> &'static str {
        match self {
            Method::Info => "INFO",
            Method::Log => "LOG",
            Method::Warn => "WARN",
            Method::Error => "ERROR",
            Method::Dir => "DIR",
            Method::Assert => "ASSERT",
        }
    }

    /// Whether the standard sink routes this method to stderr.
    pub const fn is_diagnostic(self) -> bool {
        matches!(self, Method::Warn | Method::Error | Method::Assert)
    }
}

impl FromStr for Method {
    type Err = SitelogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "info" => Ok(Method::Info),
            "log" => Ok(Method::Log),
            "warn" | "warning" => Ok(Method::Warn),
            "error" => Ok(Method::Error),
            "dir" => Ok(Method::Dir),
            "assert" => Ok(Method::Assert),
            _ => Err(SitelogError::Validation(format!("Invalid method: {}", s))),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
