//! Timer configuration.
//!
//! Loaded from `~/.config/pomodoro/config.toml` when it exists. Every key
//! is optional; command-line flags win over the file, and the file wins
//! over the built-in 25/5/15 minute defaults.
//!
//! ```toml
//! focus = "50m"
//! short-break = "10m"
//! long-break = "30m"
//! ```

use std::{fs, io, path::Path, path::PathBuf};

use jiff::SignedDuration;
use serde::Deserialize;

use crate::model::{Durations, DurationsError, PhaseKind};

/// Errors from reading or interpreting configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid {field} duration {value:?}: {reason}")]
    Duration {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error(transparent)]
    Durations(#[from] DurationsError),
}

/// Timer configuration as written in the config file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    pub focus: Option<String>,
    pub short_break: Option<String>,
    pub long_break: Option<String>,
}

/// Per-run duration overrides, typically from the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub focus: Option<String>,
    pub short_break: Option<String>,
    pub long_break: Option<String>,
}

impl Config {
    /// Loads the config file, or defaults when there is none.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads config from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The config file path: `~/.config/pomodoro/config.toml`.
    pub fn path() -> Option<PathBuf> {
        app_dir().map(|dir| dir.join("config.toml"))
    }

    /// Resolves phase lengths from `overrides`, then this config, then defaults.
    pub fn durations(&self, overrides: &Overrides) -> Result<Durations, ConfigError> {
        let defaults = Durations::default();
        let pick = |field: &'static str, over: Option<&str>, file: Option<&str>, kind| {
            match over.or(file) {
                Some(text) => parse_duration(field, text),
                None => Ok(defaults.get(kind)),
            }
        };

        let focus = pick(
            "focus",
            overrides.focus.as_deref(),
            self.focus.as_deref(),
            PhaseKind::Focus,
        )?;
        let short_break = pick(
            "short-break",
            overrides.short_break.as_deref(),
            self.short_break.as_deref(),
            PhaseKind::ShortBreak,
        )?;
        let long_break = pick(
            "long-break",
            overrides.long_break.as_deref(),
            self.long_break.as_deref(),
            PhaseKind::LongBreak,
        )?;

        Ok(Durations::new(focus, short_break, long_break)?)
    }
}

/// The per-user directory holding the database and config file.
pub fn app_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("pomodoro"))
}

/// Parses a phase length into whole seconds.
///
/// Accepts friendly durations (`25m`, `90s`, `1h 30m`) or a bare number of
/// minutes.
pub fn parse_duration(field: &'static str, text: &str) -> Result<u32, ConfigError> {
    let invalid = |reason: String| ConfigError::Duration {
        field,
        value: text.to_string(),
        reason,
    };

    let text = text.trim();
    let duration = match text.parse::<u32>() {
        Ok(minutes) => SignedDuration::from_mins(i64::from(minutes)),
        Err(_) => text
            .parse::<SignedDuration>()
            .map_err(|e| invalid(e.to_string()))?,
    };
    if duration.is_negative() {
        return Err(invalid("must not be negative".into()));
    }
    u32::try_from(duration.as_secs()).map_err(|_| invalid("too long".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn parses_friendly_durations() {
        assert_eq!(parse_duration("focus", "25m").unwrap(), 1500);
        assert_eq!(parse_duration("focus", "90s").unwrap(), 90);
        assert_eq!(parse_duration("focus", "1h").unwrap(), 3600);
        assert_eq!(parse_duration("focus", "1h 30m").unwrap(), 5400);
    }

    #[test]
    fn bare_number_is_minutes() {
        assert_eq!(parse_duration("focus", "25").unwrap(), 1500);
        assert_eq!(parse_duration("focus", " 5 ").unwrap(), 300);
    }

    #[test]
    fn rejects_garbage_and_negative() {
        assert!(matches!(
            parse_duration("focus", "soon"),
            Err(ConfigError::Duration { field: "focus", .. })
        ));
        assert!(matches!(
            parse_duration("long-break", "-5m"),
            Err(ConfigError::Duration {
                field: "long-break",
                ..
            })
        ));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();

        let durations = config.durations(&Overrides::default()).unwrap();
        assert_eq!(durations, Durations::default());
    }

    #[test]
    fn file_values_are_used() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "focus = \"50m\"\nlong-break = \"30m\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        let durations = config.durations(&Overrides::default()).unwrap();
        assert_eq!(durations.get(PhaseKind::Focus), 3000);
        assert_eq!(durations.get(PhaseKind::ShortBreak), 300);
        assert_eq!(durations.get(PhaseKind::LongBreak), 1800);
    }

    #[test]
    fn overrides_win_over_file() {
        let config = Config {
            focus: Some("50m".into()),
            short_break: Some("10m".into()),
            long_break: None,
        };
        let overrides = Overrides {
            focus: Some("90s".into()),
            ..Overrides::default()
        };

        let durations = config.durations(&overrides).unwrap();
        assert_eq!(durations.get(PhaseKind::Focus), 90);
        assert_eq!(durations.get(PhaseKind::ShortBreak), 600);
        assert_eq!(durations.get(PhaseKind::LongBreak), 900);
    }

    #[test]
    fn zero_duration_is_rejected() {
        let overrides = Overrides {
            short_break: Some("0s".into()),
            ..Overrides::default()
        };
        let err = Config::default().durations(&overrides).unwrap_err();
        assert!(matches!(err, ConfigError::Durations(_)));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "fokus = \"50m\"\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
