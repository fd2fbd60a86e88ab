//! Call locations, raw and resolved.

use std::fmt;

/// A raw location captured at a logging call.
///
/// `file` is whatever the compiler reported (`file!()` or
/// `Location::file()`), `function` the fully-qualified path of the enclosing
/// function when the caller could capture it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<'a> {
    /// Source file path
    pub file: &'a str,
    /// Line number, 1-based
    pub line: u32,
    /// Enclosing function path, e.g. `app::worker::run::{{closure}}`
    pub function: Option<&'a str>,
}

impl<'a> Frame<'a> {
    /// Create a frame.
    pub const fn new(file: &'a str, line: u32, function: Option<&'a str>) -> Self {
        Self { file, line, function }
    }
}

/// A resolved call site, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    /// File path relative to the resolver's root
    pub file: String,
    /// Line number
    pub line: u32,
    /// Innermost named function, `"main"` when anonymous
    pub function: String,
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.function, self.line)
    }
}
