/// A winning line: three cell indices in row-major order.
pub type Line = [usize; 3];

pub const GRID_SIZE: usize = 3;
pub const NUM_CELLS: usize = GRID_SIZE * GRID_SIZE;
pub const NUM_LINES: usize = 8;

/// The 8 winning lines in their fixed scan order: rows, then columns,
/// then diagonals. Win detection reports the first matching entry.
pub const WIN_LINES: [Line; NUM_LINES] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];
