//! # Sitelog Core
//!
//! Call-site-aware console output with token-based formatting.
//!
//! This crate provides:
//!
//! - **Console**: logging methods that, once enabled, prefix each line with
//!   timestamp, level, name, pid and call site
//! - **Tokens**: a per-console table of `{token}` values, constant or computed
//! - **Rendering**: substitution of tokens into the format string
//! - **Call sites**: resolution of captured frames to relative paths and
//!   function names
//! - **Sinks**: standard streams and in-memory capture
//! - **Timers**: `time` / `time_end` measurements
//! - **Configuration**: YAML files with environment overrides
//!
//! ## Example
//!
//! ```rust
//! use sitelog_core::{Console, MemorySink, Method, site_info};
//!
//! let sink = MemorySink::new();
//! let console = Console::new(sink.clone());
//!
//! console.enable("svc", Some(Method::Info));
//! console.format("{label} {function}: {parameters}");
//! site_info!(console, "ready");
//!
//! assert_eq!(sink.lines().len(), 1);
//! assert!(sink.lines()[0].starts_with("INFO "));
//!
//! console.disable();
//! console.info("ready");
//! assert_eq!(sink.last().as_deref(), Some("ready"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod callsite;
pub mod config;
pub mod console;
pub mod log;
pub mod macros;
pub mod render;
pub mod sink;
pub mod term;
pub mod time;
pub mod timer;
pub mod tokens;

// Re-export commonly used items
pub use callsite::WorkingDirResolver;
pub use console::{Augmentation, Console};
pub use sink::{MemorySink, StdSink};
pub use tokens::{Token, TokenTable};
pub use sitelog_types::{
    CallSite, CallSiteResolver, ConsoleConfig, Frame, Method, Result, Sink, SitelogError, DEFAULT_FORMAT,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
