//! The 3x3 grid.

use super::position::Position;
use super::types::{Cell, Player};

/// Side length of the board.
pub const SIZE: usize = 3;

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.col()]
    }

    /// Writes a cell. Only `GameState` mutates the board.
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row()][pos.col()] = cell;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.occupied_count() == SIZE * SIZE
    }

    /// Iterates over every position with its cell, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        Position::ALL.iter().map(|pos| (*pos, self.get(*pos)))
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let symbol = match cell {
                    Cell::Empty => '.',
                    Cell::Occupied(Player::One) => '1',
                    Cell::Occupied(Player::Two) => '2',
                };
                result.push(symbol);
                if col < SIZE - 1 {
                    result.push('|');
                }
            }
            if row < SIZE - 1 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}
