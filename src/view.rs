#![cfg(feature = "std")]
//! Pure projection of engine state for rendering surfaces.

use crate::api::GameApi;
use crate::config::{GRID_SIZE, NUM_CELLS};
use crate::game::GameStatus;
use crate::mark::Cell;
use std::fmt;

/// Everything a rendering surface needs to draw one frame: cell
/// symbols, winning-line highlights, the result banner, and whether the
/// undo control should be enabled.
///
/// A view is recomputed from engine queries after each event and holds
/// no authoritative game state of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridView {
    cells: [char; NUM_CELLS],
    highlights: [bool; NUM_CELLS],
    result_text: String,
    undo_enabled: bool,
}

impl GridView {
    /// Project the current state of `engine` into a view.
    pub fn snapshot(engine: &impl GameApi) -> Self {
        let mut cells = [' '; NUM_CELLS];
        for (index, slot) in cells.iter_mut().enumerate() {
            *slot = engine.cell(index).unwrap_or(Cell::Empty).symbol();
        }
        let mut highlights = [false; NUM_CELLS];
        if let Some(line) = engine.winning_line() {
            for index in line {
                highlights[index] = true;
            }
        }
        let result_text = match engine.status() {
            GameStatus::InProgress => String::new(),
            GameStatus::Won { player, .. } => format!("{} Wins!", player),
            GameStatus::Draw => "Draw!".to_string(),
        };
        GridView {
            cells,
            highlights,
            result_text,
            undo_enabled: engine.can_undo(),
        }
    }

    /// Symbol to render for each cell, row-major.
    pub fn cells(&self) -> &[char; NUM_CELLS] {
        &self.cells
    }

    /// Whether the cell at `index` belongs to the winning line.
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.highlights.get(index).copied().unwrap_or(false)
    }

    /// Result banner: `"X Wins!"`, `"O Wins!"`, `"Draw!"`, or empty
    /// while the game is in progress.
    pub fn result_text(&self) -> &str {
        &self.result_text
    }

    /// Whether the undo control should accept input.
    pub fn undo_enabled(&self) -> bool {
        self.undo_enabled
    }
}

impl fmt::Display for GridView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let index = row * GRID_SIZE + col;
                if self.highlights[index] {
                    write!(f, "[{}]", self.cells[index])?;
                } else {
                    write!(f, " {} ", self.cells[index])?;
                }
            }
            writeln!(f)?;
        }
        if !self.result_text.is_empty() {
            writeln!(f, "{}", self.result_text)?;
        }
        Ok(())
    }
}
