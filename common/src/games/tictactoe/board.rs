use std::fmt;

use super::types::{CELL_COUNT, GRID_SIZE, Mark};
use super::win_detector::check_win_at;

/// 3x3 board indexed 0..9 in row-major order.
///
/// The winner is tracked incrementally: each applied move checks only the
/// lines through its own cell.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
    winner: Option<Mark>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self {
            cells,
            winner: super::win_detector::check_win(&cells),
        }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Mark::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn num_empty_squares(&self) -> usize {
        self.cells.iter().filter(|cell| **cell == Mark::Empty).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| *cell != Mark::Empty)
    }

    /// Returns `false` without touching the board when the cell is taken or out of range.
    pub fn apply_move(&mut self, index: usize, mark: Mark) -> bool {
        if mark == Mark::Empty {
            return false;
        }
        match self.cells.get(index) {
            Some(Mark::Empty) => {}
            _ => return false,
        }

        self.cells[index] = mark;
        if check_win_at(&self.cells, index) == Some(mark) {
            self.winner = Some(mark);
        }
        true
    }

    /// Undoes a move made during search.
    pub(crate) fn rollback(&mut self, index: usize, previous_winner: Option<Mark>) {
        self.cells[index] = Mark::Empty;
        self.winner = previous_winner;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(GRID_SIZE).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, cell) in cells.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}
