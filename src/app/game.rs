// GameLog - app/game.rs
//
// Game lifecycle stub hosting the console. The host calls `startup` once
// before the first frame and `end_of_turn` whenever a turn finishes; the
// per-frame render hook lives in the GUI layer.

use crate::core::store::LogStore;

/// Turn bookkeeping for the hosted game.
#[derive(Debug, Default)]
pub struct Game {
    started: bool,
    turn: u32,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    /// One-time initialisation before the first frame.
    ///
    /// Calling it again is a no-op.
    pub fn startup(&mut self, console: &mut LogStore) {
        if self.started {
            return;
        }
        self.started = true;
        console.info("Game started successfully");
        console.info("Application initialized");
        tracing::info!("Game started");
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Number of completed turns.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Close the current turn.
    ///
    /// This is where a winner check belongs; the stub has no rules, so it
    /// only records the turn.
    pub fn end_of_turn(&mut self, console: &mut LogStore) {
        self.turn += 1;
        console.info(format!("Turn {} ended", self.turn));
        tracing::debug!(turn = self.turn, "End of turn");
    }
}
