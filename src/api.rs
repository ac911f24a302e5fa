//! Contract between the engine and a presentation layer.

use crate::config::Line;
use crate::game::{GameEngine, GameStatus};
use crate::mark::{Cell, Player};

/// Input events a presentation layer feeds into the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The user selected the cell at the given index.
    CellSelected(usize),
    /// The user pressed the undo control.
    UndoRequested,
    /// The user pressed the restart control.
    RestartRequested,
}

/// Queries and event intake a rendering surface drives a game through.
///
/// `handle_event` is total: events that violate the rules (selecting an
/// occupied cell, playing after the game ended, undoing with no history)
/// are ignored without changing state. Surfaces that want to disable
/// controls up front use `can_undo` and the status queries instead.
pub trait GameApi {
    fn handle_event(&mut self, event: InputEvent);
    fn cell(&self, index: usize) -> anyhow::Result<Cell>;
    fn status(&self) -> GameStatus;
    fn current_player(&self) -> Player;
    fn can_undo(&self) -> bool;
    fn winning_line(&self) -> Option<Line>;
}

impl GameApi for GameEngine {
    fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::CellSelected(index) => {
                if self.can_play(index) {
                    let _ = self.apply_move(index);
                }
            }
            InputEvent::UndoRequested => {
                let _ = self.undo();
            }
            InputEvent::RestartRequested => self.restart(),
        }
    }

    fn cell(&self, index: usize) -> anyhow::Result<Cell> {
        GameEngine::cell(self, index).map_err(|e| anyhow::anyhow!(e))
    }

    fn status(&self) -> GameStatus {
        GameEngine::status(self)
    }

    fn current_player(&self) -> Player {
        GameEngine::current_player(self)
    }

    fn can_undo(&self) -> bool {
        GameEngine::can_undo(self)
    }

    fn winning_line(&self) -> Option<Line> {
        GameEngine::winning_line(self)
    }
}
