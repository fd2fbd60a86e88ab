//! Output sinks.

use parking_lot::Mutex;
use sitelog_types::{Method, Sink};
use std::io::{self, Write};
use std::sync::Arc;

/// Writes to the process's standard streams.
///
/// `log`, `info` and `dir` go to stdout; `warn`, `error` and `assert` go to
/// stderr. One line per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdSink;

impl Sink for StdSink {
    fn write(&self, method: Method, line: &str) {
        // The standard streams are treated as infallible.
        if method.is_diagnostic() {
            let _ = writeln!(io::stderr().lock(), "{}", line);
        } else {
            let _ = writeln!(io::stdout().lock(), "{}", line);
        }
    }
}

/// Keeps every written line in memory.
///
/// Clones share the same buffer, so a clone can be handed to a console and
/// the original inspected afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    entries: Arc<Mutex<Vec<(Method, String)>>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every written `(method, line)` pair, oldest first.
    pub fn entries(&self) -> Vec<(Method, String)> {
        self.entries.lock().clone()
    }

    /// Every written line, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.entries.lock().iter().map(|(_, line)| line.clone()).collect()
    }

    /// The most recent line, if any.
    pub fn last(&self) -> Option<String> {
        self.entries.lock().last().map(|(_, line)| line.clone())
    }

    /// Drop everything written so far.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl Sink for MemorySink {
    fn write(&self, method: Method, line: &str) {
        self.entries.lock().push((method, line.to_string()));
    }
}
