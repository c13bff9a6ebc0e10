//! Saved default flags.
//!
//! Defaults live in a global config file and an optional `.textwalkrc` in
//! the working directory. Both hold command-line flags, whitespace
//! separated, with `#` starting a comment line. A `--debug-log` line takes
//! the rest of the line as its path. Flags given on the command line win
//! over saved ones.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

const APP_DIR: &str = "textwalk";
const LOCAL_FILE: &str = ".textwalkrc";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("flag `{flag}` expects a value")]
    MissingValue { flag: &'static str },
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub summary: bool,
    pub no_header: bool,
    pub perf: bool,
    pub debug_log: Option<PathBuf>,
}

impl ConfigFlags {
    pub fn union(&self, other: &Self) -> Self {
        Self {
            summary: self.summary || other.summary,
            no_header: self.no_header || other.no_header,
            perf: self.perf || other.perf,
            debug_log: other.debug_log.clone().or_else(|| self.debug_log.clone()),
        }
    }

    fn to_tokens(&self) -> Vec<String> {
        let mut tokens = Vec::new();
        if self.summary {
            tokens.push("--summary".to_string());
        }
        if self.no_header {
            tokens.push("--no-header".to_string());
        }
        if self.perf {
            tokens.push("--perf".to_string());
        }
        if let Some(path) = &self.debug_log {
            tokens.push(format!("--debug-log={}", path.display()));
        }
        tokens
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join(APP_DIR).join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join(APP_DIR)
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join(APP_DIR).join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".config").join(APP_DIR).join("config");
        }
    }

    PathBuf::from(LOCAL_FILE)
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(LOCAL_FILE)
}

/// Load flags from `path`. A missing file yields the defaults.
///
/// # Errors
/// Returns an error if the file cannot be read or a flag is missing its value.
pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(line_tokens)
        .collect::<Vec<_>>();
    let flags = parse_flag_tokens(&tokens)
        .with_context(|| format!("Invalid config {}", path.display()))?;
    tracing::debug!(path = %path.display(), ?flags, "loaded config");
    Ok(flags)
}

/// Split one config line into flag tokens.
///
/// A `--debug-log` line keeps the rest of the line as its value, so saved
/// paths may contain spaces.
fn line_tokens(line: &str) -> Vec<String> {
    if let Some(rest) = line.strip_prefix("--debug-log") {
        if rest.is_empty() {
            return vec!["--debug-log".to_string()];
        }
        if let Some(value) = rest
            .strip_prefix('=')
            .or_else(|| rest.starts_with(char::is_whitespace).then_some(rest))
        {
            let value = value.trim();
            if value.is_empty() {
                return vec!["--debug-log".to_string()];
            }
            return vec!["--debug-log".to_string(), value.to_string()];
        }
    }
    line.split_whitespace().map(ToOwned::to_owned).collect()
}

/// Write `flags` to `path`, creating parent directories as needed.
///
/// # Errors
/// Returns an error if the directory or file cannot be written.
pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = vec!["# textwalk defaults (saved with --save)".to_string()];
    lines.extend(flags.to_tokens());
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

/// Delete the config file at `path`, if any.
///
/// # Errors
/// Returns an error if the file exists but cannot be removed.
pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Pick the known flags out of `tokens`, ignoring anything else.
///
/// # Errors
/// Returns [`ConfigError::MissingValue`] when `--debug-log` is the last token.
pub fn parse_flag_tokens(tokens: &[String]) -> Result<ConfigFlags, ConfigError> {
    let mut flags = ConfigFlags::default();
    let mut tokens = tokens.iter();
    while let Some(token) = tokens.next() {
        match token.as_str() {
            "--summary" => flags.summary = true,
            "--no-header" => flags.no_header = true,
            "--perf" => flags.perf = true,
            "--debug-log" => {
                let value = tokens.next().ok_or(ConfigError::MissingValue {
                    flag: "--debug-log",
                })?;
                flags.debug_log = Some(PathBuf::from(value));
            }
            other => {
                if let Some(value) = other.strip_prefix("--debug-log=") {
                    flags.debug_log = Some(PathBuf::from(value));
                }
            }
        }
    }
    Ok(flags)
}
