// GameLog - core/mod.rs
//
// Core business logic layer: the console data model, its filtered view,
// and text export.
// Must NOT depend on: ui, platform, app.

pub mod export;
pub mod filter;
pub mod model;
pub mod store;
