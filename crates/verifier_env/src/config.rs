//!
//! Logger configuration.
//!

use serde::Deserialize;

/// Log config settings.
#[derive(Debug, Default, Deserialize, Clone)]
#[serde(default)]
pub struct Log {
    /// Logging to a file.
    pub file: LogFile,
    /// Logging to the console.
    pub console: LogConsole,
}

/// Configuration of the file logger.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LogFile {
    /// Whether file logging is enabled.
    pub enabled: bool,
    /// Directory to store log files in, relative to the workspace root.
    pub path: String,
    /// Name of the log file without suffix.
    pub file_name: String,
    /// Maximum verbosity level written to the file.
    pub level: Level,
}

impl Default for LogFile {
    fn default() -> Self {
        Self {
            enabled: false,
            path: String::from("logs"),
            file_name: String::from("verifier.log"),
            level: Level(tracing::Level::WARN),
        }
    }
}

/// Configuration of the console logger.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LogConsole {
    /// Whether console logging is enabled.
    pub enabled: bool,
    /// Maximum verbosity level printed for watched crates.
    pub level: Level,
    /// Console output format.
    pub log_format: LogFormat,
}

impl Default for LogConsole {
    fn default() -> Self {
        Self {
            enabled: true,
            level: Level(tracing::Level::INFO),
            log_format: LogFormat::Default,
        }
    }
}

/// Console output format.
#[derive(Debug, Default, Deserialize, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable output.
    #[default]
    Default,
    /// JSON output, one object per line.
    Json,
}

/// Verbosity level, deserializable from config strings such as "DEBUG" or
/// "warn".
#[derive(Debug, Clone, Copy)]
pub struct Level(pub tracing::Level);

impl Level {
    /// Returns the wrapped [`tracing::Level`].
    pub fn into_level(self) -> tracing::Level {
        self.0
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let level = String::deserialize(deserializer)?;
        level
            .parse::<tracing::Level>()
            .map(Level)
            .map_err(serde::de::Error::custom)
    }
}
