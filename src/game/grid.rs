use serde::Serialize;

use super::{Direction, Player};
use crate::error::MoveError;

pub const DEFAULT_COLUMNS: usize = 7;
pub const DEFAULT_ROWS: usize = 6;

/// A cell coordinate. Row 0 is the top, row `rows - 1` the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Position { x, y }
    }
}

/// A placed piece. Never moves once it is on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Piece {
    pub position: Position,
    pub player: Player,
}

/// Fixed-size board with gravity placement, stored as a flat row-major
/// vector of cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    columns: usize,
    rows: usize,
    cells: Vec<Option<Player>>,
}

impl Grid {
    /// Create an empty grid
    pub fn new(columns: usize, rows: usize) -> Self {
        Grid {
            columns,
            rows,
            cells: vec![None; columns * rows],
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    fn index(&self, position: Position) -> usize {
        position.y * self.columns + position.x
    }

    /// Whether `(x, y)` lies on the grid
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.columns && y < self.rows
    }

    /// Owner of the cell at `(x, y)`, or `None` if it is empty
    pub fn occupant_at(&self, x: usize, y: usize) -> Result<Option<Player>, MoveError> {
        if !self.contains(x, y) {
            return Err(MoveError::OutOfBounds {
                x,
                y,
                columns: self.columns,
                rows: self.rows,
            });
        }
        Ok(self.get(Position::new(x, y)))
    }

    /// Owner of the cell at `position`.
    ///
    /// `position` must come from this grid (`neighbor`, `place`, `pieces`);
    /// an off-grid position panics.
    pub fn get(&self, position: Position) -> Option<Player> {
        assert!(
            self.contains(position.x, position.y),
            "position {:?} is outside the {}x{} grid",
            position,
            self.columns,
            self.rows
        );
        self.cells[self.index(position)]
    }

    /// The piece at `position`, if the cell is occupied
    pub fn piece_at(&self, position: Position) -> Option<Piece> {
        self.get(position).map(|player| Piece { position, player })
    }

    /// Check if a column is full. Columns off the grid count as full.
    pub fn is_column_full(&self, column: usize) -> bool {
        if column >= self.columns || self.rows == 0 {
            return true;
        }
        // Gravity keeps every column packed from the bottom, so the top
        // cell is the last one to fill.
        self.get(Position::new(column, 0)).is_some()
    }

    /// Drop a piece in a column, returns the position where it landed
    pub fn place(&mut self, column: usize, player: Player) -> Result<Position, MoveError> {
        if column >= self.columns {
            return Err(MoveError::ColumnOutOfRange {
                column,
                columns: self.columns,
            });
        }

        let landing = (0..self.rows)
            .rev()
            .map(|y| Position::new(column, y))
            .find(|&position| self.get(position).is_none())
            .ok_or(MoveError::ColumnFull { column })?;

        let index = self.index(landing);
        self.cells[index] = Some(player);
        Ok(landing)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.columns).all(|column| self.is_column_full(column))
    }

    /// Columns that can still take a piece, in ascending order
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.columns)
            .filter(|&column| !self.is_column_full(column))
            .collect()
    }

    /// The position one step away in `direction`, or `None` if that step
    /// leaves the grid.
    pub fn neighbor(&self, position: Position, direction: Direction) -> Option<Position> {
        let (dx, dy) = direction.delta();
        let x = position.x.checked_add_signed(dx)?;
        let y = position.y.checked_add_signed(dy)?;
        self.contains(x, y).then_some(Position::new(x, y))
    }

    /// Whether the next piece dropped in column `x` would land exactly on
    /// `(x, y)`: the cell is on the grid, empty, and rests on the floor or
    /// on another piece.
    pub fn is_playable(&self, x: isize, y: isize) -> bool {
        let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
            return false;
        };
        if !self.contains(x, y) || self.get(Position::new(x, y)).is_some() {
            return false;
        }
        y == self.rows - 1 || self.get(Position::new(x, y + 1)).is_some()
    }

    /// Every occupied cell, column by column from the top
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        (0..self.columns).flat_map(move |x| {
            (0..self.rows).filter_map(move |y| self.piece_at(Position::new(x, y)))
        })
    }

    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Raw row-major cell contents
    pub fn cells(&self) -> &[Option<Player>] {
        &self.cells
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(DEFAULT_COLUMNS, DEFAULT_ROWS)
    }
}
