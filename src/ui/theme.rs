// GameLog - ui/theme.rs
//
// Severity colour mapping and layout constants.
// No dependencies on app state or business logic.

use crate::core::model::Severity;
use egui::Color32;

/// Text colour for a console row.
pub fn severity_colour(severity: Severity) -> Color32 {
    match severity {
        Severity::Info => Color32::WHITE,
        Severity::Warning => Color32::YELLOW,
        Severity::Error => Color32::RED,
    }
}

/// Status line colours.
pub const STATUS_OK: Color32 = Color32::from_rgb(134, 239, 172); // Green 300
pub const STATUS_ERROR: Color32 = Color32::from_rgb(248, 113, 113); // Red 400

/// Layout constants.
pub const CONSOLE_DEFAULT_SIZE: [f32; 2] = [620.0, 360.0];
pub const STATUS_BAR_HEIGHT: f32 = 24.0;
