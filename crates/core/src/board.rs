//! Board module - manages the game grid
//!
//! The board is a 4x4 grid of tile values where `0` is an empty cell.
//! Coordinates: (row, col) where row ranges 0..3 (top to bottom), col ranges 0..3
//! (left to right).
//!
//! Only one merge primitive exists: [`slide_row_left`]. Every other direction is
//! expressed by mapping the grid through [`Board::transpose`] and/or
//! [`Board::reverse_rows`] before and after the left slide.

use arrayvec::ArrayVec;

use crate::types::{Direction, Grid, Pos, BOARD_SIZE, CELL_COUNT};

/// One row of tiles.
pub type Row = [u32; BOARD_SIZE];

/// Slide one row to the left and merge equal neighbours.
///
/// Zeros are squeezed out first, then the compacted row is scanned left to
/// right: an equal adjacent pair becomes one tile of double the value. A tile
/// produced by a merge is never merged again in the same pass, so
/// `[2, 2, 2, 2]` becomes `[4, 4, 0, 0]`, not `[8, 0, 0, 0]`.
///
/// Returns the score gained (the sum of all tiles created by merges).
pub fn slide_row_left(row: &mut Row) -> u32 {
    let compact: ArrayVec<u32, BOARD_SIZE> = row.iter().copied().filter(|&v| v != 0).collect();

    let mut out: Row = [0; BOARD_SIZE];
    let mut gained = 0u32;
    let mut write = 0usize;
    let mut read = 0usize;

    while read < compact.len() {
        let value = compact[read];
        if read + 1 < compact.len() && compact[read + 1] == value {
            let merged = value.saturating_mul(2);
            out[write] = merged;
            gained = gained.saturating_add(merged);
            read += 2;
        } else {
            out[write] = value;
            read += 1;
        }
        write += 1;
    }

    *row = out;
    gained
}

/// The game board - 4 rows x 4 columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: Grid,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [[0; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Build a board from explicit rows.
    pub fn from_rows(rows: Grid) -> Self {
        Self { cells: rows }
    }

    /// Borrow the raw rows.
    pub fn rows(&self) -> &Grid {
        &self.cells
    }

    /// Get cell at (row, col); `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Set cell at (row, col). Returns false if out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: u32) -> bool {
        match self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        self.cells = [[0; BOARD_SIZE]; BOARD_SIZE];
    }

    /// Swap element (r, c) with (c, r) in place.
    pub fn transpose(&mut self) {
        for r in 0..BOARD_SIZE {
            for c in (r + 1)..BOARD_SIZE {
                let tmp = self.cells[r][c];
                self.cells[r][c] = self.cells[c][r];
                self.cells[c][r] = tmp;
            }
        }
    }

    /// Reverse the element order within every row.
    pub fn reverse_rows(&mut self) {
        for row in self.cells.iter_mut() {
            row.reverse();
        }
    }

    /// Slide every row to the left, returning the score gained.
    pub fn slide_left(&mut self) -> u32 {
        self.cells.iter_mut().map(slide_row_left).sum()
    }

    /// Slide and merge tiles in `dir`. No randomness.
    ///
    /// Returns the score gained by merges. Whether anything moved is left to
    /// the caller (compare against a copy taken beforehand).
    pub fn shift(&mut self, dir: Direction) -> u32 {
        match dir {
            Direction::Left => self.slide_left(),
            Direction::Right => {
                self.reverse_rows();
                let gained = self.slide_left();
                self.reverse_rows();
                gained
            }
            Direction::Up => {
                self.transpose();
                let gained = self.slide_left();
                self.transpose();
                gained
            }
            Direction::Down => {
                self.transpose();
                self.reverse_rows();
                let gained = self.slide_left();
                self.reverse_rows();
                self.transpose();
                gained
            }
        }
    }

    /// Return the board resulting from a shift, plus the score gained.
    pub fn shifted(mut self, dir: Direction) -> (Self, u32) {
        let gained = self.shift(dir);
        (self, gained)
    }

    /// Collect the coordinates of all empty cells, row-major.
    pub fn empty_cells(&self) -> ArrayVec<Pos, CELL_COUNT> {
        let mut out = ArrayVec::new();
        for (r, row) in self.cells.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                if value == 0 {
                    out.push((r, c));
                }
            }
        }
        out
    }

    /// Number of non-empty cells.
    pub fn count_tiles(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v != 0).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&v| v != 0)
    }

    /// True if any horizontally or vertically adjacent pair holds the same
    /// non-zero value.
    pub fn has_adjacent_pair(&self) -> bool {
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                let v = self.cells[r][c];
                if v == 0 {
                    continue;
                }
                if c + 1 < BOARD_SIZE && self.cells[r][c + 1] == v {
                    return true;
                }
                if r + 1 < BOARD_SIZE && self.cells[r + 1][c] == v {
                    return true;
                }
            }
        }
        false
    }

    /// No empty cell and no mergeable neighbours: no move can change the board.
    pub fn is_terminal(&self) -> bool {
        self.is_full() && !self.has_adjacent_pair()
    }

    /// Sum of all tile values.
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().flatten().map(|&v| v as u64).sum()
    }

    /// Largest tile on the board (0 for an empty board).
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }
}

impl From<Grid> for Board {
    fn from(rows: Grid) -> Self {
        Self::from_rows(rows)
    }
}
