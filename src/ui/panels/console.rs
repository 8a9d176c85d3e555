// GameLog - ui/panels/console.rs
//
// The "Game Log" debug console window, redrawn from scratch every frame.
//
// Buttons never mutate state while the window is being laid out: the click
// is recorded as a `ConsoleAction` and applied once `Window::show` returns.
// The filter selector is the exception; it writes the threshold directly,
// which only changes what the next frame shows.
//
// Closing follows the same deferred path: egui still lays out the body in
// the frame where the title-bar close button is clicked, and the console
// is hidden (drawing nothing) from the next frame on.

use crate::app::state::{AppState, ConsoleAction};
use crate::core::model::Severity;
use crate::core::store::LogStore;
use crate::ui::theme;
use crate::util::constants;

/// Render the console window if it is visible.
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.console.is_visible() {
        return;
    }

    let mut open = true;
    let mut action: Option<ConsoleAction> = None;

    egui::Window::new(constants::CONSOLE_TITLE)
        .open(&mut open)
        .default_size(theme::CONSOLE_DEFAULT_SIZE)
        .resizable(true)
        .show(ctx, |ui| {
            action = contents(ui, state);
        });

    if !open {
        action = Some(ConsoleAction::Close);
    }
    if let Some(action) = action {
        state.apply(action);
    }
}

/// Controls, status line and entry list. Returns the clicked action, if any.
fn contents(ui: &mut egui::Ui, state: &mut AppState) -> Option<ConsoleAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        if ui.button("Test Info").clicked() {
            action = Some(ConsoleAction::AppendTest(Severity::Info));
        }
        if ui.button("Test Warning").clicked() {
            action = Some(ConsoleAction::AppendTest(Severity::Warning));
        }
        if ui.button("Test Error").clicked() {
            action = Some(ConsoleAction::AppendTest(Severity::Error));
        }
        if ui.button("Clear").clicked() {
            action = Some(ConsoleAction::Clear);
        }
    });

    ui.horizontal(|ui| {
        if ui
            .button("Log To File (Custom)")
            .on_hover_text(format!("Overwrite {}", state.export_path.display()))
            .clicked()
        {
            action = Some(ConsoleAction::ExportCustom);
        }
        if ui
            .button("Log To File (Capture)")
            .on_hover_text(format!(
                "Append the shown rows to {}",
                state.capture_path.display()
            ))
            .clicked()
        {
            action = Some(ConsoleAction::CaptureUi);
        }
    });
    ui.separator();

    let mut min = state.console.min_severity();
    egui::ComboBox::from_label(constants::FILTER_LABEL)
        .selected_text(min.label())
        .show_ui(ui, |ui| {
            for severity in Severity::all() {
                ui.selectable_value(&mut min, *severity, severity.label());
            }
        });
    if min != state.console.min_severity() {
        tracing::debug!(min = %min, "Console filter changed");
        state.console.set_min_severity(min);
    }

    if let Some(ref status) = state.status {
        let colour = if status.is_error {
            theme::STATUS_ERROR
        } else {
            theme::STATUS_OK
        };
        ui.label(egui::RichText::new(&status.text).small().color(colour));
    }

    entry_list(ui, &state.console);
    action
}

/// Scrollable list of the filtered view, one coloured line per entry.
fn entry_list(ui: &mut egui::Ui, console: &LogStore) {
    let indices = console.filtered_indices();

    if indices.is_empty() {
        ui.weak(if console.is_empty() {
            "No messages."
        } else {
            "No messages at or above the selected level."
        });
        return;
    }

    let row_height = ui.text_style_height(&egui::TextStyle::Monospace);

    egui::ScrollArea::both()
        .id_salt("console_rows")
        .auto_shrink([false; 2])
        .stick_to_bottom(true)
        .show_rows(ui, row_height, indices.len(), |ui, row_range| {
            for row in row_range {
                let Some(entry) = indices.get(row).and_then(|&idx| console.get(idx)) else {
                    continue;
                };
                let text = egui::RichText::new(entry.line())
                    .monospace()
                    .color(theme::severity_colour(entry.severity()));
                ui.add(egui::Label::new(text).extend());
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::config::AppConfig;

    fn run_frame(state: &mut AppState) -> egui::FullOutput {
        let ctx = egui::Context::default();
        ctx.run(egui::RawInput::default(), |ctx| render(ctx, state))
    }

    #[test]
    fn test_hidden_console_draws_nothing_and_mutates_nothing() {
        let mut state = AppState::new(&AppConfig::default(), false);
        state.console.info("a");
        state.console.toggle_visibility();

        let output = run_frame(&mut state);
        assert!(output.shapes.is_empty());
        assert_eq!(state.console.len(), 1);
        assert!(!state.console.is_visible());
        assert!(state.status.is_none());
    }

    #[test]
    fn test_visible_frame_without_input_leaves_store_alone() {
        let mut state = AppState::new(&AppConfig::default(), false);
        state.console.info("a");
        state.console.warn("b");
        state.console.error("c");
        state.console.set_min_severity(Severity::Warning);

        run_frame(&mut state);
        run_frame(&mut state);

        assert!(state.console.is_visible());
        assert_eq!(state.console.len(), 3);
        assert_eq!(state.console.min_severity(), Severity::Warning);
        assert!(state.status.is_none());
    }
}
