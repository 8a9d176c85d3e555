// GameLog - ui/panels/status.rs
//
// Bottom status bar: turn counter and console entry counts.

use crate::app::state::AppState;

/// Status bar label for the completed-turn counter.
pub fn turns_label(completed: u32) -> String {
    format!("Turns completed: {completed}")
}

/// Render the status bar contents.
pub fn render(ui: &mut egui::Ui, state: &AppState, turns_completed: u32) {
    ui.horizontal(|ui| {
        ui.label(turns_label(turns_completed));
        if state.debug_mode {
            ui.separator();
            ui.label(egui::RichText::new("DEBUG").small().strong());
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let console = &state.console;
            let total = console.len();
            let shown = console.visible_entries().count();
            ui.label(format!("{shown}/{total} console entries"));
            if console.evicted() > 0 {
                ui.separator();
                ui.weak(format!("{} oldest dropped", console.evicted()));
            }
            if !console.is_visible() {
                ui.separator();
                ui.weak("console hidden");
            }
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns_label_names_completed_turns() {
        assert_eq!(turns_label(0), "Turns completed: 0");
        assert_eq!(turns_label(3), "Turns completed: 3");
    }
}
