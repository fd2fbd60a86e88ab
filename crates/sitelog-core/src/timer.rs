//! Named timers.

use parking_lot::Mutex;
use sitelog_types::{Result, SitelogError};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::warn;

/// Running timers, keyed by label.
#[derive(Debug, Default)]
pub struct Timers {
    started: Mutex<HashMap<String, Instant>>,
}

impl Timers {
    /// Create an empty timer set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start timing `label`.
    ///
    /// Starting a label that is already running keeps the original start
    /// and returns `false`.
    pub fn start(&self, label: &str) -> bool {
        let mut started = self.started.lock();
        if started.contains_key(label) {
            warn!("Timer '{}' already exists", label);
            return false;
        }
        started.insert(label.to_string(), Instant::now());
        true
    }

    /// Stop timing `label` and return the elapsed time.
    pub fn end(&self, label: &str) -> Result<Duration> {
        self.started
            .lock()
            .remove(label)
            .map(|start| start.elapsed())
            .ok_or_else(|| SitelogError::InvalidOperation(label.to_string()))
    }

    /// Whether `label` is currently running.
    pub fn is_running(&self, label: &str) -> bool {
        self.started.lock().contains_key(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_end() {
        let timers = Timers::new();
        assert!(timers.start("boot"));
        assert!(timers.is_running("boot"));

        let elapsed = timers.end("boot").unwrap();
        assert!(elapsed < Duration::from_secs(60));
        assert!(!timers.is_running("boot"));
    }

    #[test]
    fn test_restart_keeps_first() {
        let timers = Timers::new();
        assert!(timers.start("load"));
        assert!(!timers.start("load"));
        assert!(timers.end("load").is_ok());
        assert!(timers.end("load").is_err());
    }

    #[test]
    fn test_end_unknown_label() {
        let timers = Timers::new();
        let err = timers.end("never").unwrap_err();
        assert!(matches!(err, SitelogError::InvalidOperation(ref label) if label == "never"));
        assert!(err.to_string().contains("never"));
    }
}
