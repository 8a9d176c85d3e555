// GameLog - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "GameLog";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "GameLog";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Console window
// =============================================================================

/// Title of the debug console window.
pub const CONSOLE_TITLE: &str = "Game Log";

/// Label of the severity filter selector.
pub const FILTER_LABEL: &str = "Level Filter";

/// Canned messages appended by the console's test buttons.
pub const TEST_INFO_MESSAGE: &str = "This is a test info message";
pub const TEST_WARNING_MESSAGE: &str = "This is a test warning message";
pub const TEST_ERROR_MESSAGE: &str = "This is a test error message";

// =============================================================================
// Retention limits
// =============================================================================

/// Default number of entries the console keeps before evicting the oldest.
pub const DEFAULT_MAX_ENTRIES: usize = 10_000;

/// Minimum sensible retention (anything lower makes the console useless).
pub const MIN_MAX_ENTRIES: usize = 100;

/// Hard upper bound on retention (prevents configuration mistakes).
pub const ABSOLUTE_MAX_ENTRIES: usize = 1_000_000;

// =============================================================================
// Export
// =============================================================================

/// Overwritten by "Log To File (Custom)".
pub const DEFAULT_EXPORT_FILE: &str = "custom_log.txt";

/// Appended to by "Log To File (Capture)".
pub const DEFAULT_CAPTURE_FILE: &str = "console_capture.txt";

// =============================================================================
// Logging / configuration
// =============================================================================

/// Default tracing level when neither RUST_LOG, --debug nor config set one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Config file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

// =============================================================================
// Window geometry
// =============================================================================

/// Initial inner size of the host window.
pub const WINDOW_SIZE: [f32; 2] = [1100.0, 720.0];

/// Minimum inner size of the host window.
pub const WINDOW_MIN_SIZE: [f32; 2] = [640.0, 400.0];
