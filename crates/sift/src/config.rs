//! Environment-driven defaults.
//!
//! Every value here can be overridden by a command-line flag; the
//! environment only fills in what the flags leave unset.

use std::path::{Path, PathBuf};

/// Default column budget when `--width` is not given.
pub const ENV_WIDTH: &str = "SIFT_WIDTH";
/// `tracing` filter directives, e.g. `sift_text=debug`.
pub const ENV_LOG: &str = "SIFT_LOG";
/// `text` (default) or `json`.
pub const ENV_LOG_FORMAT: &str = "SIFT_LOG_FORMAT";

pub const DEFAULT_WIDTH: usize = 40;
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" | "plain" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub width: usize,
    pub log_filter: String,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_format: LogFormat::Text,
        }
    }
}

impl Config {
    /// Read the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Read configuration through `get_env`. Unparseable values are ignored.
    #[must_use]
    pub fn from_env_with<F>(get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let width = get_env(ENV_WIDTH)
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(defaults.width);
        let log_filter = get_env(ENV_LOG)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or(defaults.log_filter);
        let log_format = get_env(ENV_LOG_FORMAT)
            .and_then(|value| LogFormat::parse(&value))
            .unwrap_or(defaults.log_format);

        Self {
            width,
            log_filter,
            log_format,
        }
    }

    /// The flag value if given, otherwise the configured width.
    #[must_use]
    pub fn width_or(&self, flag: Option<usize>) -> usize {
        flag.unwrap_or(self.width)
    }
}

/// Expand a leading `~` and `$VAR` / `${VAR}` references.
///
/// `~` resolves through [`dirs::home_dir`]. See [`expand_path_with_home`].
pub fn expand_path<F>(input: &str, get_env: F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    expand_path_with_home(input, dirs::home_dir().as_deref(), get_env)
}

/// [`expand_path`] with an explicit home directory.
///
/// `~` is only special alone or before `/`, and stays as written when `home`
/// is `None`. Unset variables expand to the empty string; an unterminated
/// `${` is kept as written.
pub fn expand_path_with_home<F>(input: &str, home: Option<&Path>, get_env: F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = String::with_capacity(input.len());
    let mut remaining = match (input.strip_prefix('~'), home) {
        (Some(rest), Some(home)) if rest.is_empty() || rest.starts_with('/') => {
            out.push_str(&home.to_string_lossy());
            rest
        }
        _ => input,
    };

    while let Some(dollar) = remaining.find('$') {
        out.push_str(&remaining[..dollar]);
        let after = &remaining[dollar + 1..];

        if let Some(braced) = after.strip_prefix('{') {
            let Some(close) = braced.find('}') else {
                out.push_str(&remaining[dollar..]);
                return PathBuf::from(out);
            };
            out.push_str(&get_env(&braced[..close]).unwrap_or_default());
            remaining = &braced[close + 1..];
            continue;
        }

        let name_len = after
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(after.len());
        if name_len == 0 {
            out.push('$');
        } else {
            out.push_str(&get_env(&after[..name_len]).unwrap_or_default());
        }
        remaining = &after[name_len..];
    }

    out.push_str(remaining);
    PathBuf::from(out)
}
