//! # Sitelog Types
//!
//! Core types, traits, and enums shared across all sitelog crates.
//!
//! This crate provides the vocabulary the console augmenter is built from:
//!
//! - The logging [`Method`]s and their severity ranks
//! - Raw [`Frame`]s captured at a call and the resolved [`CallSite`]
//! - The [`Sink`] and [`CallSiteResolver`] seams
//! - Configuration types, error types and result aliases
//!
//! ## Example
//!
//! ```
//! use sitelog_types::Method;
//!
//! let min: Method = "warn".parse().unwrap();
//! assert!(Method::Error.passes(Some(min)));
//! assert!(!Method::Info.passes(Some(min)));
//! // Methods outside the severity list always pass.
//! assert!(Method::Dir.passes(Some(min)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod enums;
pub mod site;
pub mod traits;
pub mod config;

// Re-export common types for convenience
pub use errors::{SitelogError, Result};
pub use enums::Method;
pub use site::{CallSite, Frame};
pub use traits::{CallSiteResolver, Sink};
pub use config::{ConsoleConfig, DEFAULT_FORMAT};
