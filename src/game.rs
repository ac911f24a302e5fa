//! Core game engine: turn management, move validation, win and draw
//! detection, and move history with undo.

use crate::board::{Board, BoardState};
use crate::common::GameError;
use crate::config::Line;
use crate::mark::{Cell, Player};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won { player: Player, line: Line },
    Draw,
}

impl GameStatus {
    /// Returns `true` for `Won` and `Draw`, the states in which no
    /// further moves are accepted.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Serializable overall game state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub board: BoardState,
    pub current_player: Player,
    pub history: Vec<usize>,
}

/// Core game logic holding the board, the turn order, and the move
/// history.
///
/// Invariant: the history length always equals the number of occupied
/// cells, and entry `i` was placed by X when `i` is even, O when odd.
pub struct GameEngine {
    board: Board,
    current_player: Player,
    status: GameStatus,
    history: Vec<usize>,
}

impl GameEngine {
    /// Create a new engine with an empty board; X moves first.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Immutable reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Contents of the cell at `index`.
    pub fn cell(&self, index: usize) -> Result<Cell, GameError> {
        self.board.cell(index)
    }

    /// Current status of the game.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The player whose turn it is. After a win this is the winner;
    /// after a draw, whoever placed the final mark.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Cell indices in the order they were played.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Returns `true` iff the game is in progress and the cell at
    /// `index` is empty. Out-of-range indices report `false`.
    pub fn can_play(&self, index: usize) -> bool {
        self.status == GameStatus::InProgress
            && matches!(self.board.cell(index), Ok(Cell::Empty))
    }

    /// Returns `true` iff there is a move to undo.
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// The completed line of a won game, if any.
    pub fn winning_line(&self) -> Option<Line> {
        match self.status {
            GameStatus::Won { line, .. } => Some(line),
            _ => None,
        }
    }

    /// Place the current player's mark at `index` and advance the state
    /// machine.
    ///
    /// Evaluation order after placement: win scan over all 8 lines in
    /// the fixed [`crate::config::WIN_LINES`] order, then draw check,
    /// then turn handover. A win keeps the winner as current player; a
    /// draw leaves the turn untouched. Returns the resulting status.
    ///
    /// # Errors
    ///
    /// `GameOver` once the status is terminal, `InvalidIndex` for
    /// indices outside the grid, `CellOccupied` for taken cells. The
    /// state is unchanged on every error.
    pub fn apply_move(&mut self, index: usize) -> Result<GameStatus, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver);
        }
        self.board.place(index, self.current_player)?;
        self.history.push(index);
        log::debug!("{} marked cell {}", self.current_player, index);

        if let Some(line) = self.board.line_for(self.current_player) {
            self.status = GameStatus::Won {
                player: self.current_player,
                line,
            };
            log::info!("{} wins on line {:?}", self.current_player, line);
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
            log::info!("game ends in a draw");
        } else {
            self.current_player = self.current_player.opponent();
        }
        Ok(self.status)
    }

    /// Remove the most recent move, returning its cell index.
    ///
    /// The player whose move is removed becomes current again; since a
    /// winning or drawing move never hands the turn over, this also
    /// reopens terminal states with the right player to move. The
    /// status returns to `InProgress` unconditionally.
    ///
    /// # Errors
    ///
    /// `NothingToUndo` when the history is empty; the state is
    /// unchanged.
    pub fn undo(&mut self) -> Result<usize, GameError> {
        let &index = self.history.last().ok_or(GameError::NothingToUndo)?;
        let mover = self.board.clear(index)?;
        self.history.pop();
        self.current_player = mover;
        self.status = GameStatus::InProgress;
        log::debug!("undid {} at cell {}", mover, index);
        Ok(index)
    }

    /// Reset to a fresh game: empty board, empty history, X to move.
    /// Always succeeds, regardless of the current state.
    pub fn restart(&mut self) {
        self.board = Board::new();
        self.current_player = Player::X;
        self.status = GameStatus::InProgress;
        self.history.clear();
        log::debug!("game restarted");
    }

    /// Generate a serializable snapshot of the current state.
    pub fn state(&self) -> GameState {
        GameState {
            board: BoardState::from(&self.board),
            current_player: self.current_player,
            history: self.history.clone(),
        }
    }

    /// Restore an engine from a previously saved state. The status is
    /// recomputed from the board rather than trusted from the snapshot.
    pub fn from_state(state: GameState) -> Self {
        let board = Board::from(state.board);
        let status = if let Some((player, line)) = board.winner() {
            GameStatus::Won { player, line }
        } else if board.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        };
        Self {
            board,
            current_player: state.current_player,
            status,
            history: state.history,
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
