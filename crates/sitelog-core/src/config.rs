//! Configuration loading.
//!
//! Console settings resolve in this priority order:
//! 1. Environment variables (`SITELOG_NAME`, `SITELOG_LEVEL`, `SITELOG_FORMAT`, `SITELOG_COLOR`)
//! 2. Values loaded from a YAML file
//! 3. Default values
//!
//! ## Example
//!
//! ```no_run
//! use sitelog_core::{config, Console};
//!
//! let settings = config::load_with_env(config::default_path())?;
//! let console = Console::from_config(&settings, sitelog_core::StdSink)?;
//! # Ok::<(), sitelog_core::SitelogError>(())
//! ```

use sitelog_types::{ConsoleConfig, Method, Result, SitelogError};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable overriding the console name.
pub const ENV_NAME: &str = "SITELOG_NAME";
/// Environment variable overriding the minimum level (`none` clears it).
pub const ENV_LEVEL: &str = "SITELOG_LEVEL";
/// Environment variable overriding the format string.
pub const ENV_FORMAT: &str = "SITELOG_FORMAT";
/// Environment variable overriding label coloring.
pub const ENV_COLOR: &str = "SITELOG_COLOR";

const ENV_KEYS: [&str; 4] = [ENV_NAME, ENV_LEVEL, ENV_FORMAT, ENV_COLOR];

/// Default configuration file, `~/.sitelog/config.yml`.
pub fn default_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_default()
        .join(".sitelog")
        .join("config.yml")
}

/// Load configuration from a YAML file.
///
/// A missing file yields the defaults.
pub fn load(path: impl AsRef<Path>) -> Result<ConsoleConfig> {
    let path = path.as_ref();
    if !path.exists() {
        debug!("No config at {:?}, using defaults", path);
        return Ok(ConsoleConfig::default());
    }

    let content = fs::read_to_string(path)?;
    parse(&content)
}

/// Parse configuration from YAML text.
pub fn parse(content: &str) -> Result<ConsoleConfig> {
    if content.trim().is_empty() {
        return Ok(ConsoleConfig::default());
    }
    Ok(serde_yaml::from_str(content)?)
}

/// Load configuration from a file, then apply the process environment.
pub fn load_with_env(path: impl AsRef<Path>) -> Result<ConsoleConfig> {
    let mut config = load(path)?;
    apply_env_os(&mut config, std::env::vars_os())?;
    Ok(config)
}

/// Apply environment overrides from raw OS pairs, as `std::env::vars_os` yields them.
///
/// Entries that are not valid UTF-8 are skipped unless they are one of the
/// `SITELOG_*` keys, in which case the value is rejected.
pub fn apply_env_os<I>(config: &mut ConsoleConfig, vars: I) -> Result<()>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    let mut utf8 = Vec::new();
    for (key, value) in vars {
        let Ok(key) = key.into_string() else { continue };
        if !ENV_KEYS.contains(&key.as_str()) {
            continue;
        }
        let value = value
            .into_string()
            .map_err(|_| SitelogError::Config(format!("{} is not valid UTF-8", key)))?;
        utf8.push((key, value));
    }
    apply_env(config, utf8)
}

/// Apply environment overrides from `vars` on top of `config`.
pub fn apply_env<I, K, V>(config: &mut ConsoleConfig, vars: I) -> Result<()>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    for (key, value) in vars {
        let value = value.as_ref();
        match key.as_ref() {
            ENV_NAME => config.name = value.to_string(),
            ENV_FORMAT => config.format = value.to_string(),
            ENV_LEVEL => config.min_level = parse_level(value)?,
            ENV_COLOR => config.color = parse_flag(ENV_COLOR, value)?,
            _ => continue,
        }
        debug!("Applied {} from environment", key.as_ref());
    }
    Ok(())
}

/// Parse a minimum level; empty or `none` means no threshold.
pub fn parse_level(value: &str) -> Result<Option<Method>> {
    match value.trim() {
        "" => Ok(None),
        v if v.eq_ignore_ascii_case("none") => Ok(None),
        v => v.parse().map(Some),
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(SitelogError::Config(format!("Invalid boolean for {}: {}", key, other))),
    }
}
