#![cfg(feature = "std")]
//! Mutex-guarded engine handle for hosts with multiple dispatch threads.

use std::sync::{Arc, Mutex};

use crate::api::{GameApi, InputEvent};
use crate::common::GameError;
use crate::config::Line;
use crate::game::{GameEngine, GameState, GameStatus};
use crate::mark::{Cell, Player};

/// Cloneable handle to a single engine instance.
///
/// The engine itself is single-owner and synchronous; hosts that
/// dispatch input from more than one thread funnel every operation
/// through one of these so access stays serialized.
#[derive(Clone)]
pub struct SharedEngine {
    inner: Arc<Mutex<GameEngine>>,
}

impl SharedEngine {
    /// Wrap a fresh engine.
    pub fn new() -> Self {
        Self::from_engine(GameEngine::new())
    }

    /// Wrap an existing engine.
    pub fn from_engine(engine: GameEngine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    /// Run `f` against the engine under the lock.
    pub fn with<R>(&self, f: impl FnOnce(&mut GameEngine) -> R) -> R {
        let mut engine = self.inner.lock().unwrap();
        f(&mut engine)
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> GameState {
        self.with(|engine| engine.state())
    }

    /// Forwarded [`GameEngine::apply_move`].
    pub fn apply_move(&self, index: usize) -> Result<GameStatus, GameError> {
        self.with(|engine| engine.apply_move(index))
    }

    /// Forwarded [`GameEngine::undo`].
    pub fn undo(&self) -> Result<usize, GameError> {
        self.with(|engine| engine.undo())
    }

    /// Forwarded [`GameEngine::restart`].
    pub fn restart(&self) {
        self.with(|engine| engine.restart())
    }

    /// Forwarded [`GameEngine::can_play`].
    pub fn can_play(&self, index: usize) -> bool {
        self.with(|engine| engine.can_play(index))
    }
}

impl Default for SharedEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameApi for SharedEngine {
    fn handle_event(&mut self, event: InputEvent) {
        self.with(|engine| engine.handle_event(event))
    }

    fn cell(&self, index: usize) -> anyhow::Result<Cell> {
        self.with(|engine| GameApi::cell(engine, index))
    }

    fn status(&self) -> GameStatus {
        self.with(|engine| engine.status())
    }

    fn current_player(&self) -> Player {
        self.with(|engine| engine.current_player())
    }

    fn can_undo(&self) -> bool {
        self.with(|engine| engine.can_undo())
    }

    fn winning_line(&self) -> Option<Line> {
        self.with(|engine| engine.winning_line())
    }
}
