// GameLog - ui/panels/mod.rs

pub mod console;
pub mod status;
