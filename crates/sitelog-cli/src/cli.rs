//! CLI structure and option handling.

use anyhow::{Context, Result};
use clap::Parser;
use sitelog_core::{config, Console, ConsoleConfig, Frame, Method, Sink, StdSink};
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::debug;

/// File reported when no `--file` is given.
pub const DEFAULT_FILE: &str = "-";

#[derive(Parser, Debug)]
#[command(name = "sitelog")]
#[command(version = sitelog_core::VERSION)]
#[command(about = "Write one call-site-stamped log line", long_about = None)]
pub struct Cli {
    /// Method to log through (info, log, warn, error, dir, assert)
    pub method: Method,

    /// Message words, joined with single spaces
    #[arg(required = true)]
    pub message: Vec<String>,

    /// Configuration file [default: ~/.sitelog/config.yml]
    #[arg(short, long, env = "SITELOG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Value of the {name} token
    #[arg(short, long)]
    pub name: Option<String>,

    /// Lowest method that still produces output ("none" for all)
    #[arg(short, long)]
    pub level: Option<String>,

    /// Format string with {token} placeholders
    #[arg(short, long)]
    pub format: Option<String>,

    /// Extra constant token as KEY=VALUE (repeatable)
    #[arg(short, long = "token", value_parser = parse_token)]
    pub tokens: Vec<(String, String)>,

    /// File reported as the call site
    #[arg(long)]
    pub file: Option<String>,

    /// Line reported as the call site
    #[arg(long)]
    pub line: Option<u32>,

    /// Function reported as the call site
    #[arg(long)]
    pub function: Option<String>,

    /// Write the bare message, without augmentation
    #[arg(long)]
    pub plain: bool,

    /// Color the level label when writing to a terminal
    #[arg(long)]
    pub color: bool,

    /// Enable debug diagnostics
    #[arg(short, long)]
    pub debug: bool,
}

impl Cli {
    /// Run the command against the standard streams.
    pub fn execute(&self) -> Result<()> {
        let settings = self.settings(std::env::vars_os())?;
        self.run(&settings, StdSink)
    }

    /// Write the line through `sink` using resolved `settings`.
    pub fn run(&self, settings: &ConsoleConfig, sink: impl Sink + 'static) -> Result<()> {
        let console = Console::from_config(settings, sink).context("Invalid console settings")?;

        let message = self.message();
        let frame = Frame::new(
            self.file.as_deref().unwrap_or(DEFAULT_FILE),
            self.line.unwrap_or(0),
            self.function.as_deref(),
        );
        console.emit(self.method, &frame, format_args!("{}", message));
        Ok(())
    }

    /// Resolve console settings: flags over environment over file.
    pub fn settings<I>(&self, env: I) -> Result<ConsoleConfig>
    where
        I: IntoIterator<Item = (OsString, OsString)>,
    {
        let path = self.config.clone().unwrap_or_else(config::default_path);
        let mut settings =
            config::load(&path).with_context(|| format!("Failed to load {}", path.display()))?;
        debug!("Loaded settings from {:?}", path);

        config::apply_env_os(&mut settings, env)?;

        if let Some(name) = &self.name {
            settings.name = name.clone();
        }
        if let Some(level) = &self.level {
            settings.min_level = config::parse_level(level)?;
        }
        if let Some(format) = &self.format {
            settings.format = format.clone();
        }
        settings.tokens.extend(self.tokens.iter().cloned());
        settings.color |= self.color;
        if self.plain {
            settings.enabled = false;
        }
        Ok(settings)
    }

    /// The message as it is handed to the console.
    pub fn message(&self) -> String {
        let text = self.message.join(" ");
        match self.method {
            Method::Assert => format!("Assertion failed: {}", text),
            _ => text,
        }
    }
}

fn parse_token(s: &str) -> std::result::Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", s))?;
    if key.is_empty() || !key.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return Err(format!("invalid token name '{}'", key));
    }
    Ok((key.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitelog_core::MemorySink;

    const NO_CONFIG: &str = "/nonexistent/sitelog/config.yml";

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["sitelog", "--config", NO_CONFIG];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_parse_method_and_message() {
        let cli = parse(&["WARN", "disk", "almost", "full"]);
        assert_eq!(cli.method, Method::Warn);
        assert_eq!(cli.message(), "disk almost full");
    }

    #[test]
    fn test_rejects_unknown_method_and_bad_token() {
        assert!(Cli::try_parse_from(["sitelog", "shout", "x"]).is_err());
        assert!(Cli::try_parse_from(["sitelog", "-t", "novalue", "log", "x"]).is_err());
        assert!(Cli::try_parse_from(["sitelog", "-t", "a-b=1", "log", "x"]).is_err());
    }

    #[test]
    fn test_flags_beat_env() {
        let cli = parse(&["--name", "cli", "--level", "error", "-t", "dc=fra1", "log", "x"]);
        let env = vec![
            (OsString::from("SITELOG_NAME"), OsString::from("env")),
            (OsString::from("SITELOG_FORMAT"), OsString::from("{name}")),
        ];

        let settings = cli.settings(env).unwrap();
        assert_eq!(settings.name, "cli");
        assert_eq!(settings.format, "{name}");
        assert_eq!(settings.min_level, Some(Method::Error));
        assert_eq!(settings.tokens["dc"], "fra1");
        assert!(settings.enabled);
    }

    #[test]
    fn test_plain_disables_augmentation() {
        let cli = parse(&["--plain", "info", "x"]);
        assert!(!cli.settings(Vec::new()).unwrap().enabled);
    }

    #[test]
    fn test_assert_message() {
        let cli = parse(&["assert", "queue", "empty"]);
        assert_eq!(cli.message(), "Assertion failed: queue empty");
    }

    fn run_with(args: &[&str]) -> MemorySink {
        let cli = parse(args);
        let settings = cli.settings(Vec::new()).unwrap();
        let sink = MemorySink::new();
        cli.run(&settings, sink.clone()).unwrap();
        sink
    }

    #[test]
    fn test_frame_flags_feed_call_site_tokens() {
        let sink = run_with(&[
            "--format",
            "{filename}:{function}:{line}",
            "--file",
            "a.rs",
            "--line",
            "7",
            "--function",
            "app::job::tick",
            "log",
            "x",
        ]);
        assert_eq!(sink.lines(), vec!["a.rs:tick:7"]);
    }

    #[test]
    fn test_frame_defaults() {
        let sink = run_with(&["--format", "{filename}:{function}:{line} {label} {parameters}", "warn", "low", "disk"]);
        assert_eq!(sink.entries(), vec![(Method::Warn, "-:main:0 WARN low disk".to_string())]);
    }

    #[test]
    fn test_plain_run_writes_bare_message() {
        let sink = run_with(&["--plain", "--format", "{name} {parameters}", "assert", "queue", "empty"]);
        assert_eq!(sink.lines(), vec!["Assertion failed: queue empty"]);
    }

    #[test]
    fn test_level_suppresses_run() {
        let sink = run_with(&["--level", "error", "info", "quiet"]);
        assert!(sink.lines().is_empty());
    }
}
