use std::path::PathBuf;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

pub trait SettingsService {
    fn get_settings(&self) -> Result<Settings, SettingsError>;
    fn set_settings(&self, settings: &Settings) -> Result<(), SettingsError>;
}

pub trait SettingsRepository {
    /// Returns the default settings if nothing has been stored yet.
    fn read_settings(&self) -> Result<Settings, SettingsError>;
    fn write_settings(&self, settings: &Settings) -> Result<(), SettingsError>;
}

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("failed to access settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub log_level: LogLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Raises the level by the number of `-v` flags given on the command line.
    #[must_use]
    pub fn increase(self, steps: u8) -> Self {
        (0..steps).fold(self, |level, _| match level {
            LogLevel::Off => LogLevel::Error,
            LogLevel::Error => LogLevel::Warn,
            LogLevel::Warn => LogLevel::Info,
            LogLevel::Info => LogLevel::Debug,
            LogLevel::Debug | LogLevel::Trace => LogLevel::Trace,
        })
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(LogLevel::Warn, 0, LogLevel::Warn)]
    #[case(LogLevel::Warn, 1, LogLevel::Info)]
    #[case(LogLevel::Warn, 2, LogLevel::Debug)]
    #[case(LogLevel::Warn, 5, LogLevel::Trace)]
    #[case(LogLevel::Off, 1, LogLevel::Error)]
    fn test_log_level_increase(
        #[case] level: LogLevel,
        #[case] steps: u8,
        #[case] expected: LogLevel,
    ) {
        assert_eq!(level.increase(steps), expected);
    }

    #[rstest]
    #[case(LogLevel::Off, LevelFilter::Off)]
    #[case(LogLevel::Warn, LevelFilter::Warn)]
    #[case(LogLevel::Trace, LevelFilter::Trace)]
    fn test_log_level_filter(#[case] level: LogLevel, #[case] expected: LevelFilter) {
        assert_eq!(LevelFilter::from(level), expected);
    }

    #[test]
    fn test_settings_default() {
        assert_eq!(
            Settings::default(),
            Settings {
                catalog: None,
                seed: None,
                log_level: LogLevel::Warn,
                log_file: None,
            }
        );
    }
}
