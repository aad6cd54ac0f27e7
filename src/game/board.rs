use super::Player;
use crate::error::MoveError;

pub const DEFAULT_WIDTH: usize = 7;
pub const DEFAULT_HEIGHT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Player1,
    Player2,
}

impl Cell {
    /// The player owning this cell, if any
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Player1 => Some(Player::One),
            Cell::Player2 => Some(Player::Two),
        }
    }
}

/// A cell coordinate. Row 0 is the top of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

/// Occupancy grid, stored row-major. Pieces are never removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new empty grid
    pub fn new(width: usize, height: usize) -> Self {
        Grid {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Signed bounds check, used by the line scans that step off the grid
    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }

    /// Get the cell at a specific position
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row * self.width + pos.col]
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        self.lowest_open_row(col).is_none()
    }

    /// Lowest (highest-index) empty row in `col`, or `None` when the column is
    /// full or does not exist.
    pub fn lowest_open_row(&self, col: usize) -> Option<usize> {
        if col >= self.width {
            return None;
        }
        (0..self.height)
            .rev()
            .find(|&row| self.get(Position::new(row, col)) == Cell::Empty)
    }

    /// Record ownership of an empty cell
    pub fn place(&mut self, pos: Position, player: Player) -> Result<(), MoveError> {
        if pos.row >= self.height || pos.col >= self.width {
            return Err(MoveError::InvalidPosition {
                row: pos.row,
                col: pos.col,
            });
        }
        let idx = pos.row * self.width + pos.col;
        if self.cells[idx] != Cell::Empty {
            return Err(MoveError::CellOccupied {
                row: pos.row,
                col: pos.col,
            });
        }
        self.cells[idx] = player.to_cell();
        Ok(())
    }

    /// Drop a piece in a column, returns the position where it landed
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<Position, MoveError> {
        if col >= self.width {
            return Err(MoveError::InvalidColumn(col));
        }
        let row = self
            .lowest_open_row(col)
            .ok_or(MoveError::ColumnFull(col))?;
        let pos = Position::new(row, col);
        self.place(pos, player)?;
        Ok(pos)
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != Cell::Empty).count()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}
