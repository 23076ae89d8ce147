use std::{fmt::Display, ops::Index};

use itertools::Itertools;
use thiserror::Error;

/// Player marks
pub mod player;

use player::Player;

/// Length of a side of the square grid
pub const GRID_SIZE: usize = 5;

/// Total number of cells on the board
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Mark rendered for an unclaimed cell
pub const EMPTY_MARK: char = ' ';

/// Board index as `[row, col]`
pub type CellIdx = [usize; 2];

/// A single cell in the grid
///
/// A cell keeps its position for the whole lifetime of the board,
/// only its mark changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    row: usize,
    col: usize,
    /// `None`: Empty cell
    /// `Some(player)`: Cell claimed by `player`
    mark: Option<Player>,
}

impl Cell {
    const fn empty(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            mark: None,
        }
    }

    pub const fn row(&self) -> usize {
        self.row
    }

    pub const fn col(&self) -> usize {
        self.col
    }

    pub const fn idx(&self) -> CellIdx {
        [self.row, self.col]
    }

    pub const fn mark(&self) -> Option<Player> {
        self.mark
    }

    pub const fn is_empty(&self) -> bool {
        self.mark.is_none()
    }

    /// Bracketed textual form of the cell, e.g. `[x]` or `[ ]`
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.mark {
            Some(player) => write!(f, "[{player}]"),
            None => write!(f, "[{EMPTY_MARK}]"),
        }
    }
}

/// Errors that can occur when accessing the board
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum BoardError {
    #[error(
        "Invalid row or column ({row}, {col}), must be between 0 and {max}",
        max = GRID_SIZE - 1
    )]
    OutOfBounds { row: usize, col: usize },
    #[error("Invalid move: ({row}, {col}) is taken, choose a space that hasn't been chosen")]
    Occupied { row: usize, col: usize },
}

/// Square grid of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board([[Cell; GRID_SIZE]; GRID_SIZE]);

/// Board indexing
/// Panics on an index outside of the grid, use [`Board::get`] for checked access
impl Index<CellIdx> for Board {
    type Output = Cell;

    fn index(&self, [row, col]: CellIdx) -> &Self::Output {
        debug_assert!(
            row < GRID_SIZE && col < GRID_SIZE,
            "Index out of bounds: [{row}, {col}]"
        );
        &self.0[row][col]
    }
}

impl Board {
    /// New empty board
    pub fn new() -> Self {
        Self(std::array::from_fn(|row| {
            std::array::from_fn(|col| Cell::empty(row, col))
        }))
    }

    /// Returns the cell at the given position
    pub fn get(&self, row: usize, col: usize) -> Result<&Cell, BoardError> {
        self.0
            .get(row)
            .and_then(|cells| cells.get(col))
            .ok_or(BoardError::OutOfBounds { row, col })
    }

    fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut Cell, BoardError> {
        self.0
            .get_mut(row)
            .and_then(|cells| cells.get_mut(col))
            .ok_or(BoardError::OutOfBounds { row, col })
    }

    /// Claims the cell at the given position for `player`
    ///
    /// Occupied cells are never overwritten.
    pub fn set(&mut self, row: usize, col: usize, player: Player) -> Result<(), BoardError> {
        let cell = self.get_mut(row, col)?;
        match cell.mark {
            // Cell is already claimed
            Some(_) => Err(BoardError::Occupied { row, col }),
            // Cell is empty, claim it
            None => {
                cell.mark = Some(player);
                Ok(())
            }
        }
    }

    /// Reverts every cell to its empty state
    pub fn reset(&mut self) {
        self.0
            .iter_mut()
            .flatten()
            .for_each(|cell| cell.mark = None);
    }

    /// Iterate over all cells, row by row
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.0.iter().flatten()
    }

    /// Iterate over the indices of the unclaimed cells
    pub fn available_cells(&self) -> impl Iterator<Item = CellIdx> {
        self.cells()
            .filter(|cell| cell.is_empty())
            .map(Cell::idx)
    }

    /// Check whether every cell has been claimed
    pub fn is_full(&self) -> bool {
        self.cells().all(|cell| !cell.is_empty())
    }

    /// Human readable grid with row and column headers
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Board display
impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "   {}", (0..GRID_SIZE).join("  "))?;
        for (row, cells) in self.0.iter().enumerate() {
            writeln!(f, "{row} {}", cells.iter().join(""))?;
        }
        Ok(())
    }
}
