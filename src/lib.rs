// GameLog - lib.rs
//
// Library entry point, exposing the console model, its egui panel, and the
// supporting layers for integration testing and embedding in other hosts.
//
// The eframe host (`gui` module) lives in `main.rs` and is not part of the
// library surface.

pub mod app;
pub mod core;
pub mod platform;
pub mod ui;
pub mod util;
