//! Game board state, tracking each player's marks in a `BitBoard`.

use crate::bitboard::BitBoard;
use crate::common::GameError;
use crate::config::{Line, GRID_SIZE, NUM_CELLS, WIN_LINES};
use crate::mark::{Cell, Player};
use core::fmt;

/// Bitboard type used to track one player's marks.
pub type MarkBoard = BitBoard<u16, GRID_SIZE>;

/// Serializable board state for mirroring or saving snapshots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardState {
    pub x_marks: u16,
    pub o_marks: u16,
}

/// Main board state: one occupancy mask per player.
pub struct Board {
    x_marks: MarkBoard,
    o_marks: MarkBoard,
}

/// Occupancy mask for a single winning line.
fn line_mask(line: Line) -> MarkBoard {
    MarkBoard::from_raw((1 << line[0]) | (1 << line[1]) | (1 << line[2]))
}

impl Board {
    /// Create an empty board (no marks placed).
    pub fn new() -> Self {
        Board {
            x_marks: MarkBoard::new(),
            o_marks: MarkBoard::new(),
        }
    }

    /// Contents of the cell at `index`.
    pub fn cell(&self, index: usize) -> Result<Cell, GameError> {
        if index >= NUM_CELLS {
            return Err(GameError::InvalidIndex);
        }
        if self.x_marks.get(index)? {
            Ok(Cell::Occupied(Player::X))
        } else if self.o_marks.get(index)? {
            Ok(Cell::Occupied(Player::O))
        } else {
            Ok(Cell::Empty)
        }
    }

    /// Place `player`'s mark at `index`.
    pub fn place(&mut self, index: usize, player: Player) -> Result<(), GameError> {
        if !self.cell(index)?.is_empty() {
            return Err(GameError::CellOccupied);
        }
        self.marks_mut(player).set(index)?;
        Ok(())
    }

    /// Remove the mark at `index`, reporting which player held it.
    pub fn clear(&mut self, index: usize) -> Result<Player, GameError> {
        let player = self.cell(index)?.player().ok_or(GameError::CellVacant)?;
        self.marks_mut(player).clear(index)?;
        Ok(player)
    }

    /// Occupancy mask of `player`'s marks.
    pub fn marks(&self, player: Player) -> MarkBoard {
        match player {
            Player::X => self.x_marks,
            Player::O => self.o_marks,
        }
    }

    fn marks_mut(&mut self, player: Player) -> &mut MarkBoard {
        match player {
            Player::X => &mut self.x_marks,
            Player::O => &mut self.o_marks,
        }
    }

    /// Occupancy mask of all marks on the board.
    pub fn occupied(&self) -> MarkBoard {
        self.x_marks | self.o_marks
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.occupied().count_ones()
    }

    /// Returns `true` when every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.occupied().is_full()
    }

    /// First winning line completed by `player`, in the fixed scan order
    /// of [`WIN_LINES`].
    pub fn line_for(&self, player: Player) -> Option<Line> {
        let marks = self.marks(player);
        for line in WIN_LINES {
            if marks.contains(line_mask(line)) {
                return Some(line);
            }
        }
        None
    }

    /// Winning player and line, if either player has completed one.
    /// X is scanned before O; in states reached through legal play at
    /// most one player can hold a complete line.
    pub fn winner(&self) -> Option<(Player, Line)> {
        for player in [Player::X, Player::O] {
            if let Some(line) = self.line_for(player) {
                return Some((player, line));
            }
        }
        None
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for row in 0..GRID_SIZE {
            write!(f, "  ")?;
            for col in 0..GRID_SIZE {
                let cell = self.cell(row * GRID_SIZE + col).unwrap_or(Cell::Empty);
                write!(f, "{} ", cell.symbol())?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}

impl From<&Board> for BoardState {
    fn from(b: &Board) -> Self {
        BoardState {
            x_marks: b.x_marks.into_raw(),
            o_marks: b.o_marks.into_raw(),
        }
    }
}

impl From<BoardState> for Board {
    fn from(state: BoardState) -> Self {
        Board {
            x_marks: MarkBoard::from_raw(state.x_marks),
            o_marks: MarkBoard::from_raw(state.o_marks),
        }
    }
}
