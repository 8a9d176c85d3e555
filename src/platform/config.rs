// GameLog - platform/config.rs
//
// Platform-specific directory resolution and config.toml loading with
// startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::core::model::Severity;
use crate::util::constants;
use crate::util::error::{ConfigError, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for GameLog configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/gamelog/ or %APPDATA%\GameLog\config\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }
}

// =============================================================================
// config.toml
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[console]` section.
    pub console: ConsoleSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[console]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ConsoleSection {
    /// Entries kept before the oldest is evicted.
    pub max_entries: Option<usize>,
    /// File overwritten by the custom export.
    pub export_file: Option<String>,
    /// File appended to by the capture export.
    pub capture_file: Option<String>,
    /// Whether the console is open on startup.
    pub start_visible: Option<bool>,
    /// Initial filter threshold: "info", "warning" or "error".
    pub min_severity: Option<String>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration.
///
/// Invalid values produce warnings and fall back to defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub max_entries: usize,
    pub export_file: PathBuf,
    pub capture_file: PathBuf,
    pub start_visible: bool,
    pub min_severity: Severity,
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_entries: constants::DEFAULT_MAX_ENTRIES,
            export_file: PathBuf::from(constants::DEFAULT_EXPORT_FILE),
            capture_file: PathBuf::from(constants::DEFAULT_CAPTURE_FILE),
            start_visible: true,
            min_severity: Severity::Info,
            log_level: None,
        }
    }
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns the validated config and a list of non-fatal warnings.
/// A missing file is the first-run case: defaults, no warnings.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), Vec::new());
    }

    let raw = match read_config(&config_path) {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!(error = %e, "Using default configuration");
            return (AppConfig::default(), vec![format!("{e}. Using defaults.")]);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config.toml");
    validate(raw)
}

/// Read and parse config.toml without validating values.
fn read_config(config_path: &Path) -> Result<RawConfig> {
    let content = std::fs::read_to_string(config_path).map_err(|e| ConfigError::Io {
        path: config_path.to_path_buf(),
        source: e,
    })?;
    let raw: RawConfig = toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
        path: config_path.to_path_buf(),
        source: e,
    })?;
    Ok(raw)
}

/// Validate a parsed config against the named limits.
pub fn validate(raw: RawConfig) -> (AppConfig, Vec<String>) {
    let mut config = AppConfig::default();
    let mut warnings: Vec<String> = Vec::new();

    // -- Console: max_entries --
    if let Some(max) = raw.console.max_entries {
        if (constants::MIN_MAX_ENTRIES..=constants::ABSOLUTE_MAX_ENTRIES).contains(&max) {
            config.max_entries = max;
        } else {
            let err = ConfigError::ValueOutOfRange {
                field: "console.max_entries",
                value: max.to_string(),
                expected: format!(
                    "{}-{}",
                    constants::MIN_MAX_ENTRIES,
                    constants::ABSOLUTE_MAX_ENTRIES
                ),
            };
            warnings.push(format!(
                "{err}. Using default ({}).",
                constants::DEFAULT_MAX_ENTRIES
            ));
        }
    }

    // -- Console: file names --
    match raw.console.export_file.as_deref() {
        Some("") => warnings.push(format!(
            "[console] export_file is empty. Using default ({}).",
            constants::DEFAULT_EXPORT_FILE
        )),
        Some(file) => config.export_file = PathBuf::from(file),
        None => {}
    }
    match raw.console.capture_file.as_deref() {
        Some("") => warnings.push(format!(
            "[console] capture_file is empty. Using default ({}).",
            constants::DEFAULT_CAPTURE_FILE
        )),
        Some(file) => config.capture_file = PathBuf::from(file),
        None => {}
    }
    if config.export_file == config.capture_file {
        warnings.push(format!(
            "[console] export_file and capture_file are both '{}'; the capture \
             file would be truncated by every export. Using defaults.",
            config.export_file.display()
        ));
        config.export_file = PathBuf::from(constants::DEFAULT_EXPORT_FILE);
        config.capture_file = PathBuf::from(constants::DEFAULT_CAPTURE_FILE);
    }

    if let Some(visible) = raw.console.start_visible {
        config.start_visible = visible;
    }
    // -- Console: min_severity --
    if let Some(ref name) = raw.console.min_severity {
        match name.to_lowercase().as_str() {
            "info" => config.min_severity = Severity::Info,
            "warning" => config.min_severity = Severity::Warning,
            "error" => config.min_severity = Severity::Error,
            other => {
                warnings.push(format!(
                    "[console] min_severity = \"{other}\" is not recognised. \
                     Expected \"info\", \"warning\" or \"error\". Using default (info).",
                ));
            }
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default (info).",
            ));
        }
    }

    if !warnings.is_empty() {
        tracing::warn!(count = warnings.len(), "Config validation produced warnings");
    }

    (config, warnings)
}
