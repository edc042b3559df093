//! Fixed-size 2D grid for the line-up games.
//!
//! Row 0 is the top row. Cells only ever go from empty to occupied.
//!
//! Line detection scans rows with a sliding window, re-uses the same row
//! scanner for columns by rotating the grid a quarter turn, and walks the
//! two diagonal directions with explicit offsets.

use serde::{Deserialize, Serialize};

/// The two sides of a line-up game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Piece {
    /// The player who started the game.
    Challenger,
    /// The invited player, or the AI.
    Opponent,
}

impl Piece {
    /// The other side.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Challenger => Self::Opponent,
            Self::Opponent => Self::Challenger,
        }
    }
}

/// One grid cell.
pub type Cell = Option<Piece>;

/// Number of cells in `line` owned by `owner` (`None` counts empty cells).
#[must_use]
pub fn count_pieces(line: &[Cell], owner: Cell) -> usize {
    line.iter().filter(|&&c| c == owner).count()
}

/// Owner of `line` if every cell holds the same non-empty piece.
#[must_use]
pub fn line_owner(line: &[Cell]) -> Option<Piece> {
    let first = (*line.first()?)?;
    line.iter().all(|&c| c == Some(first)).then_some(first)
}

/// True iff every cell in `line` holds the same non-empty piece.
#[must_use]
pub fn lines_equal(line: &[Cell]) -> bool {
    line_owner(line).is_some()
}

/// A `width` x `height` board of cells, stored row-major from the top row.
///
/// Connect Four drops pieces with [`Grid::add_piece`]; Tic-Tac-Toe places
/// them directly with [`Grid::place`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// An empty grid.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "Grid must have at least one cell");
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell at `(row, col)`.
    ///
    /// Panics if out of range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(row < self.height && col < self.width, "Cell ({row}, {col}) out of range");
        self.cells[row * self.width + col]
    }

    /// One row, left to right.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Cell] {
        &self.cells[row * self.width..(row + 1) * self.width]
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    /// Occupy an empty cell. Returns false if it was already taken.
    pub fn place(&mut self, row: usize, col: usize, piece: Piece) -> bool {
        let idx = row * self.width + col;
        if self.cells[idx].is_some() {
            return false;
        }
        self.cells[idx] = Some(piece);
        true
    }

    /// A column is full when its top cell is occupied.
    #[must_use]
    pub fn is_column_full(&self, col: usize) -> bool {
        self.get(0, col).is_some()
    }

    /// Drop a piece into `col`; it lands in the lowest empty row.
    ///
    /// Returns the row it landed in, or `None` if the column is full.
    pub fn add_piece(&mut self, col: usize, piece: Piece) -> Option<usize> {
        let row = (0..self.height).rev().find(|&r| self.get(r, col).is_none())?;
        self.cells[row * self.width + col] = Some(piece);
        Some(row)
    }

    /// Columns that can still take a piece, left to right.
    #[must_use]
    pub fn open_columns(&self) -> Vec<usize> {
        (0..self.width).filter(|&c| !self.is_column_full(c)).collect()
    }

    /// Every cell occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Empty cells as `(row, col)`, in reading order.
    #[must_use]
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        (0..self.cells.len())
            .filter(|&i| self.cells[i].is_none())
            .map(|i| (i / self.width, i % self.width))
            .collect()
    }

    /// Rotate a quarter turn clockwise.
    ///
    /// The bottom row becomes the left column, so a row scan of the result is
    /// a column scan of the original.
    #[must_use]
    pub fn rotate(&self) -> Self {
        let mut rotated = Self::new(self.height, self.width);
        for row in 0..self.height {
            for col in 0..self.width {
                let new_row = col;
                let new_col = self.height - 1 - row;
                rotated.cells[new_row * rotated.width + new_col] = self.get(row, col);
            }
        }
        rotated
    }

    fn horizontal_line(&self, length: usize) -> Option<Piece> {
        if length > self.width {
            return None;
        }
        self.rows()
            .rev()
            .find_map(|row| row.windows(length).find_map(line_owner))
    }

    fn diagonal_line(&self, length: usize) -> Option<Piece> {
        if length > self.width || length > self.height {
            return None;
        }
        let mut line = Vec::with_capacity(length);
        for row in 0..=self.height - length {
            for col in 0..=self.width - length {
                // top-left to bottom-right
                line.clear();
                line.extend((0..length).map(|i| self.get(row + i, col + i)));
                if let Some(owner) = line_owner(&line) {
                    return Some(owner);
                }

                // bottom-left to top-right
                line.clear();
                line.extend((0..length).map(|i| self.get(row + length - 1 - i, col + i)));
                if let Some(owner) = line_owner(&line) {
                    return Some(owner);
                }
            }
        }
        None
    }

    /// Owner of any straight line of `length` equal pieces, in any of the
    /// four directions.
    #[must_use]
    pub fn find_line(&self, length: usize) -> Option<Piece> {
        self.horizontal_line(length)
            .or_else(|| self.rotate().horizontal_line(length))
            .or_else(|| self.diagonal_line(length))
    }
}
