//! Diagnostics for sitelog itself.
//!
//! The console's own events (augmentation toggles, timer misuse, config
//! loading) are emitted through `tracing`. These helpers install a
//! subscriber for applications that do not already have one.

use sitelog_types::{Result, SitelogError};
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "sitelog_core=warn";

/// Initialize diagnostics from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn init_default() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    install(filter)
}

/// Initialize diagnostics with an explicit filter directive, e.g. `sitelog_core=debug`.
pub fn init_with_filter(directive: &str) -> Result<()> {
    let filter = EnvFilter::try_new(directive)
        .map_err(|e| SitelogError::Config(format!("Invalid log filter '{}': {}", directive, e)))?;
    install(filter)
}

fn install(filter: EnvFilter) -> Result<()> {
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| SitelogError::Other(format!("Diagnostics already initialized: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_filter_rejected() {
        let err = init_with_filter("sitelog_core=loud").unwrap_err();
        assert!(matches!(err, SitelogError::Config(_)));
    }
}
