use super::types::{CELL_COUNT, GRID_SIZE, Mark};

pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

const DIAGONALS: [[usize; 3]; 2] = [[0, 4, 8], [2, 4, 6]];

/// Row and column through `index`, plus both diagonals when `index` is even.
pub fn lines_through(index: usize) -> impl Iterator<Item = [usize; 3]> {
    let row = index / GRID_SIZE;
    let col = index % GRID_SIZE;
    let row_line = [row * GRID_SIZE, row * GRID_SIZE + 1, row * GRID_SIZE + 2];
    let col_line = [col, col + GRID_SIZE, col + 2 * GRID_SIZE];
    let diagonals: &'static [[usize; 3]] = if index % 2 == 0 { &DIAGONALS } else { &[] };

    [row_line, col_line].into_iter().chain(diagonals.iter().copied())
}

/// Checks only the lines through the last played cell.
pub fn check_win_at(cells: &[Mark; CELL_COUNT], index: usize) -> Option<Mark> {
    let mark = cells[index];
    if mark == Mark::Empty {
        return None;
    }

    for line in lines_through(index) {
        if line.iter().all(|&i| cells[i] == mark) {
            return Some(mark);
        }
    }

    None
}

pub fn check_win(cells: &[Mark; CELL_COUNT]) -> Option<Mark> {
    for line in WINNING_LINES {
        let mark = cells[line[0]];
        if mark != Mark::Empty && line.iter().all(|&i| cells[i] == mark) {
            return Some(mark);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_through_odd_index_has_no_diagonal() {
        let lines: Vec<_> = lines_through(1).collect();
        assert_eq!(lines, vec![[0, 1, 2], [1, 4, 7]]);
    }

    #[test]
    fn test_lines_through_center_has_both_diagonals() {
        let lines: Vec<_> = lines_through(4).collect();
        assert_eq!(lines, vec![[3, 4, 5], [1, 4, 7], [0, 4, 8], [2, 4, 6]]);
    }

    #[test]
    fn test_lines_through_corner_checks_both_diagonals() {
        let lines: Vec<_> = lines_through(6).collect();
        assert_eq!(lines.len(), 4);
        assert!(lines.contains(&[2, 4, 6]));
        assert!(lines.contains(&[0, 4, 8]));
    }

    #[test]
    fn test_every_winning_line_goes_through_each_of_its_cells() {
        for line in WINNING_LINES {
            for index in line {
                assert!(
                    lines_through(index).any(|l| l == line),
                    "line {:?} not checked from {}",
                    line,
                    index
                );
            }
        }
    }

    #[test]
    fn test_check_win_at_ignores_empty_cell() {
        let cells = [Mark::Empty; CELL_COUNT];
        assert_eq!(check_win_at(&cells, 4), None);
    }

    #[test]
    fn test_check_win_full_scan() {
        let mut cells = [Mark::Empty; CELL_COUNT];
        assert_eq!(check_win(&cells), None);
        cells[2] = Mark::O;
        cells[5] = Mark::O;
        cells[8] = Mark::O;
        assert_eq!(check_win(&cells), Some(Mark::O));
        assert_eq!(check_win_at(&cells, 5), Some(Mark::O));
        assert_eq!(check_win_at(&cells, 8), Some(Mark::O));
    }
}
