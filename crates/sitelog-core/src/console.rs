//! The console augmenter.
//!
//! A [`Console`] owns an output [`Sink`] and, once [enabled](Console::enable),
//! prefixes every line with call-site information rendered through a format
//! string of `{token}` placeholders. Disabling hands messages straight back to
//! the sink, exactly as a console that was never enabled would.
//!
//! ## Example
//!
//! ```
//! use sitelog_core::{Console, Method, MemorySink, site_warn};
//!
//! let sink = MemorySink::new();
//! let console = Console::new(sink.clone());
//!
//! console.enable("svc", Some(Method::Warn));
//! console.format("{name}:{parameters}");
//!
//! site_warn!(console, "disk at {}%", 91);
//! console.info("suppressed");
//!
//! assert_eq!(sink.lines(), vec!["svc:disk at 91%"]);
//! ```

use crate::callsite::WorkingDirResolver;
use crate::render::render;
use crate::sink::StdSink;
use crate::term;
use crate::time::pretty_millis;
use crate::timer::Timers;
use crate::tokens::{Token, TokenTable};
use parking_lot::RwLock;
use sitelog_types::{bail, CallSiteResolver, ConsoleConfig, Frame, Method, Result, Sink, DEFAULT_FORMAT};
use std::fmt;
use std::panic::Location;
use std::time::Duration;
use tracing::debug;

/// The active augmentation: who is logging, and from which level up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Augmentation {
    /// Value of the `{name}` token
    pub name: String,
    /// Lowest method that still produces output
    pub min_level: Option<Method>,
}

#[derive(Debug)]
struct Settings {
    format: String,
    tokens: TokenTable,
    color: bool,
}

/// A console whose logging methods can be augmented with call-site output.
pub struct Console {
    sink: Box<dyn Sink>,
    resolver: Box<dyn CallSiteResolver>,
    settings: RwLock<Settings>,
    augmentation: RwLock<Option<Augmentation>>,
    timers: Timers,
}

impl Console {
    /// Create a console writing through `sink`, not yet augmented.
    pub fn new(sink: impl Sink + 'static) -> Self {
        Self {
            sink: Box::new(sink),
            resolver: Box::new(WorkingDirResolver::new()),
            settings: RwLock::new(Settings {
                format: DEFAULT_FORMAT.to_string(),
                tokens: TokenTable::with_builtins(),
                color: false,
            }),
            augmentation: RwLock::new(None),
            timers: Timers::new(),
        }
    }

    /// Create a console writing to stdout and stderr.
    pub fn stdout() -> Self {
        Self::new(StdSink)
    }

    /// Replace the call-site resolver.
    pub fn with_resolver(mut self, resolver: impl CallSiteResolver + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    /// Build a console from configuration.
    ///
    /// Registers the configured constant tokens and format, and enables the
    /// augmentation unless the configuration switches it off.
    pub fn from_config(config: &ConsoleConfig, sink: impl Sink + 'static) -> Result<Self> {
        if config.name.trim().is_empty() {
            bail!(Validation, "console name must not be empty");
        }
        if config.format.is_empty() {
            bail!(Validation, "format must not be empty");
        }

        let console = Self::new(sink);
        console.format(&config.format);
        console.set_color(config.color);
        for (name, value) in &config.tokens {
            console.token(name, value.as_str());
        }
        if config.enabled {
            console.enable(&config.name, config.min_level);
        }
        Ok(console)
    }

    /// Augment every logging method.
    ///
    /// Returns `false` without touching anything when the console is already
    /// augmented; the first `name` and `min_level` stay in effect.
    pub fn enable(&self, name: &str, min_level: Option<Method>) -> bool {
        let mut augmentation = self.augmentation.write();
        if augmentation.is_some() {
            debug!("Console already augmented, ignoring enable for '{}'", name);
            return false;
        }
        *augmentation = Some(Augmentation {
            name: name.to_string(),
            min_level,
        });
        debug!("Augmented console '{}' (min level: {:?})", name, min_level);
        true
    }

    /// Restore the plain logging methods.
    ///
    /// Returns `false` when the console was not augmented.
    pub fn disable(&self) -> bool {
        let previous = self.augmentation.write().take();
        if let Some(augmentation) = &previous {
            debug!("Restored plain console for '{}'", augmentation.name);
        }
        previous.is_some()
    }

    /// Whether the augmentation is active.
    pub fn is_enabled(&self) -> bool {
        self.augmentation.read().is_some()
    }

    /// The active augmentation, if any.
    pub fn augmentation(&self) -> Option<Augmentation> {
        self.augmentation.read().clone()
    }

    /// Register or overwrite one token.
    pub fn token(&self, name: &str, value: impl Into<Token>) {
        self.settings.write().tokens.insert(name, value);
    }

    /// Replace the format string.
    pub fn format(&self, template: &str) {
        self.settings.write().format = template.to_string();
    }

    /// Paint the `{label}` token when stdout is a terminal.
    pub fn set_color(&self, color: bool) {
        self.settings.write().color = color;
    }

    /// Log one message through `method` from `frame`.
    ///
    /// Every logging method and macro ends up here.
    pub fn emit(&self, method: Method, frame: &Frame<'_>, args: fmt::Arguments<'_>) {
        let message = fmt::format(args);

        let augmentation = match self.augmentation() {
            Some(augmentation) => augmentation,
            None => return self.sink.write(method, &message),
        };
        if !method.passes(augmentation.min_level) {
            return;
        }

        let site = self.resolver.resolve(frame);
        let line = {
            let settings = self.settings.read();
            let label = if settings.color && term::in_controlling_terminal() {
                term::paint_label(method)
            } else {
                method.label().to_string()
            };
            render(
                &settings.format,
                &[
                    ("label", label.as_str()),
                    ("name", augmentation.name.as_str()),
                    ("parameters", message.as_str()),
                ],
                &settings.tokens,
                &site,
            )
        };
        self.sink.write(method, &line);
    }

    #[track_caller]
    fn emit_here(&self, method: Method, args: fmt::Arguments<'_>) {
        let location = Location::caller();
        self.emit(method, &Frame::new(location.file(), location.line(), None), args);
    }

    /// Log through `log`.
    #[track_caller]
    pub fn log(&self, message: impl fmt::Display) {
        self.emit_here(Method::Log, format_args!("{}", message));
    }

    /// Log through `info`.
    #[track_caller]
    pub fn info(&self, message: impl fmt::Display) {
        self.emit_here(Method::Info, format_args!("{}", message));
    }

    /// Log through `warn`.
    #[track_caller]
    pub fn warn(&self, message: impl fmt::Display) {
        self.emit_here(Method::Warn, format_args!("{}", message));
    }

    /// Log through `error`.
    #[track_caller]
    pub fn error(&self, message: impl fmt::Display) {
        self.emit_here(Method::Error, format_args!("{}", message));
    }

    /// Dump a value with its `Debug` representation.
    #[track_caller]
    pub fn dir(&self, value: &impl fmt::Debug) {
        self.emit_here(Method::Dir, format_args!("{:?}", value));
    }

    /// Log `Assertion failed: <message>` when `condition` does not hold.
    #[track_caller]
    pub fn assert(&self, condition: bool, message: impl fmt::Display) {
        if !condition {
            self.emit_here(Method::Assert, format_args!("Assertion failed: {}", message));
        }
    }

    /// Start a timer. A running label keeps its original start.
    pub fn time(&self, label: &str) {
        self.timers.start(label);
    }

    /// Stop a timer, log `<label>: <elapsed>ms` and return the elapsed time.
    ///
    /// Fails with [`SitelogError::InvalidOperation`](sitelog_types::SitelogError::InvalidOperation)
    /// when `label` was never started.
    #[track_caller]
    pub fn time_end(&self, label: &str) -> Result<Duration> {
        let elapsed = self.timers.end(label)?;
        self.emit_here(Method::Log, format_args!("{}: {}", label, pretty_millis(elapsed)));
        Ok(elapsed)
    }
}

impl fmt::Debug for Console {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console")
            .field("augmentation", &*self.augmentation.read())
            .field("format", &self.settings.read().format)
            .finish_non_exhaustive()
    }
}
