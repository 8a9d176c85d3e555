// GameLog - app/state.rs
//
// Application state management. Holds the console store, export targets,
// and the last export outcome. Owned by the eframe::App implementation and
// lent by `&mut` to the panels each frame.

use crate::core::export;
use crate::core::model::{self, Severity};
use crate::core::store::LogStore;
use crate::platform::config::AppConfig;
use crate::util::constants;
use std::path::PathBuf;

/// Something the console asked for during a frame.
///
/// Panels collect at most one of these while drawing and the caller applies
/// it after the draw closure has released its borrows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleAction {
    /// Append the canned test message for a severity.
    AppendTest(Severity),
    /// Drop every entry.
    Clear,
    /// Overwrite the export file with every entry.
    ExportCustom,
    /// Append the displayed rows to the capture file.
    CaptureUi,
    /// Hide the console.
    Close,
}

/// Result of the most recent export, shown under the console controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub is_error: bool,
}

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// The in-game console.
    pub console: LogStore,

    /// Target of "Log To File (Custom)".
    pub export_path: PathBuf,

    /// Target of "Log To File (Capture)".
    pub capture_path: PathBuf,

    /// Last export outcome (None until something was exported).
    pub status: Option<StatusLine>,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Build state from validated configuration.
    pub fn new(config: &AppConfig, debug_mode: bool) -> Self {
        let mut console = LogStore::new(config.max_entries);
        console.set_visible(config.start_visible);
        console.set_min_severity(config.min_severity);
        Self {
            console,
            export_path: config.export_file.clone(),
            capture_path: config.capture_file.clone(),
            status: None,
            debug_mode,
        }
    }

    /// Perform a console action synchronously.
    pub fn apply(&mut self, action: ConsoleAction) {
        tracing::debug!(?action, "Console action");
        match action {
            ConsoleAction::AppendTest(severity) => {
                self.console.append(severity, test_message(severity));
            }
            ConsoleAction::Clear => self.console.clear(),
            ConsoleAction::ExportCustom => self.export_custom(),
            ConsoleAction::CaptureUi => self.capture_ui(),
            ConsoleAction::Close => self.console.set_visible(false),
        }
    }

    /// Overwrite the export file with all entries, ignoring the filter.
    pub fn export_custom(&mut self) {
        let result = export::export_to_file(self.console.entries(), &self.export_path);
        self.status = Some(match result {
            Ok(n) => StatusLine {
                text: format!("Exported {n} entries to {}.", self.export_path.display()),
                is_error: false,
            },
            Err(e) => {
                tracing::warn!(error = %e, "Console export failed");
                StatusLine {
                    text: format!("Export failed: {e}"),
                    is_error: true,
                }
            }
        });
    }

    /// Append the rows currently shown by the console to the capture file.
    pub fn capture_ui(&mut self) {
        let result = export::append_capture(
            constants::CONSOLE_TITLE,
            &model::now_time(),
            self.console.min_severity(),
            self.console.visible_entries(),
            &self.capture_path,
        );
        self.status = Some(match result {
            Ok(n) => StatusLine {
                text: format!("Captured {n} rows to {}.", self.capture_path.display()),
                is_error: false,
            },
            Err(e) => {
                tracing::warn!(error = %e, "Console capture failed");
                StatusLine {
                    text: format!("Capture failed: {e}"),
                    is_error: true,
                }
            }
        });
    }
}

/// Canned message appended by the console's test buttons.
pub fn test_message(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => constants::TEST_INFO_MESSAGE,
        Severity::Warning => constants::TEST_WARNING_MESSAGE,
        Severity::Error => constants::TEST_ERROR_MESSAGE,
    }
}
