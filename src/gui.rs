// GameLog - gui.rs
//
// Top-level eframe::App implementation: the host side of the game
// lifecycle. Construction runs the startup hook; every `update` is one
// render frame which draws the game area and then the console.

use crate::app::game::Game;
use crate::app::state::{AppState, ConsoleAction};
use crate::ui;
use crate::util::constants;

/// Key that shows/hides the console.
const TOGGLE_KEY: egui::Key = egui::Key::F12;

/// The GameLog application.
pub struct GameLogApp {
    pub state: AppState,
    pub game: Game,
}

impl GameLogApp {
    /// Create the application and run the game startup hook.
    ///
    /// `startup_warnings` (config problems found before the GUI existed) are
    /// echoed into the console so they are visible without a terminal.
    pub fn new(mut state: AppState, startup_warnings: Vec<String>) -> Self {
        let mut game = Game::new();
        game.startup(&mut state.console);
        for warning in startup_warnings {
            state.console.warn(warning);
        }
        Self { state, game }
    }

    /// Draw one frame.
    fn render_frame(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.key_pressed(TOGGLE_KEY)) {
            self.state.console.toggle_visibility();
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Export Log").clicked() {
                        self.state.apply(ConsoleAction::ExportCustom);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("View", |ui| {
                    let mut shown = self.state.console.is_visible();
                    let label = format!("{} (F12)", constants::CONSOLE_TITLE);
                    if ui.checkbox(&mut shown, label).changed() {
                        self.state.console.toggle_visibility();
                        ui.close_menu();
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(ui::theme::STATUS_BAR_HEIGHT)
            .show(ctx, |ui| {
                ui::panels::status::render(ui, &self.state, self.game.turn());
            });

        // Game area
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(constants::APP_NAME);
            ui.label(format!("Turn {}", self.game.turn() + 1));
            if ui.button("End Turn").clicked() {
                self.game.end_of_turn(&mut self.state.console);
            }
        });

        ui::panels::console::render(ctx, &mut self.state);
    }
}

impl eframe::App for GameLogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_frame(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Severity;
    use crate::platform::config::AppConfig;

    fn make_app(warnings: Vec<String>) -> GameLogApp {
        let state = AppState::new(&AppConfig::default(), false);
        GameLogApp::new(state, warnings)
    }

    #[test]
    fn test_new_runs_startup_then_replays_config_warnings() {
        let app = make_app(vec!["w".into()]);

        let got: Vec<(Severity, &str)> = app
            .state
            .console
            .entries()
            .map(|e| (e.severity(), e.message()))
            .collect();
        assert_eq!(
            got,
            vec![
                (Severity::Info, "Game started successfully"),
                (Severity::Info, "Application initialized"),
                (Severity::Warning, "w"),
            ]
        );
        assert!(app.game.is_started());
        assert_eq!(app.game.turn(), 0);
    }

    #[test]
    fn test_headless_frame_keeps_state() {
        let mut app = make_app(Vec::new());
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| app.render_frame(ctx));

        assert_eq!(app.state.console.len(), 2);
        assert!(app.state.console.is_visible());
        assert_eq!(app.game.turn(), 0);
    }

    #[test]
    fn test_headless_frame_with_hidden_console() {
        let mut app = make_app(Vec::new());
        app.state.console.toggle_visibility();
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| app.render_frame(ctx));

        assert!(!app.state.console.is_visible());
        assert_eq!(app.state.console.len(), 2);
    }
}
