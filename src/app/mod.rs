// GameLog - app/mod.rs
//
// Application layer: state ownership, console actions, game lifecycle.
// Dependencies: core layer.
// Must NOT depend on: ui.

pub mod game;
pub mod state;
