//! Four-in-a-row detection.
//!
//! The scan walks every cell in row-major order and tries the four lines that
//! start there, in the order [`Direction::ALL`]. The first line whose four
//! cells are in bounds and owned by the mover wins.

use super::{Grid, Player, Position};

/// Length of a winning run
pub const CONNECT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right along a row
    Horizontal,
    /// Top to bottom along a column
    Vertical,
    /// Down and to the right, `\`
    DiagonalDownRight,
    /// Down and to the left, `/`
    DiagonalDownLeft,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDownRight,
        Direction::DiagonalDownLeft,
    ];

    /// (row, col) step
    fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDownRight => (1, 1),
            Direction::DiagonalDownLeft => (1, -1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinLine {
    pub player: Player,
    pub direction: Direction,
    pub cells: [Position; CONNECT],
}

impl WinLine {
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }
}

/// Find the first winning line for `mover`, if any.
pub fn find_win(grid: &Grid, mover: Player) -> Option<WinLine> {
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            for direction in Direction::ALL {
                if let Some(cells) = line_from(grid, mover, row, col, direction) {
                    return Some(WinLine {
                        player: mover,
                        direction,
                        cells,
                    });
                }
            }
        }
    }
    None
}

/// The four cells starting at (row, col) along `direction`, if all of them
/// exist and belong to `mover`.
fn line_from(
    grid: &Grid,
    mover: Player,
    row: usize,
    col: usize,
    direction: Direction,
) -> Option<[Position; CONNECT]> {
    let (dr, dc) = direction.step();
    let mut cells = [Position::new(row, col); CONNECT];

    for (k, slot) in cells.iter_mut().enumerate() {
        let r = row as isize + dr * k as isize;
        let c = col as isize + dc * k as isize;
        if !grid.in_bounds(r, c) {
            return None;
        }
        let pos = Position::new(r as usize, c as usize);
        if grid.get(pos).owner() != Some(mover) {
            return None;
        }
        *slot = pos;
    }

    Some(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(pieces: &[(usize, usize, Player)]) -> Grid {
        let mut grid = Grid::default();
        for &(row, col, player) in pieces {
            grid.place(Position::new(row, col), player).unwrap();
        }
        grid
    }

    #[test]
    fn test_empty_grid_has_no_win() {
        let grid = Grid::default();
        assert_eq!(find_win(&grid, Player::One), None);
        assert_eq!(find_win(&grid, Player::Two), None);
    }

    #[test]
    fn test_horizontal_win() {
        let grid = grid_with(&[
            (5, 2, Player::One),
            (5, 3, Player::One),
            (5, 4, Player::One),
            (5, 5, Player::One),
        ]);
        let line = find_win(&grid, Player::One).unwrap();
        assert_eq!(line.direction, Direction::Horizontal);
        assert_eq!(line.player, Player::One);
        assert_eq!(line.cells[0], Position::new(5, 2));
        assert_eq!(line.cells[3], Position::new(5, 5));
    }

    #[test]
    fn test_vertical_win() {
        let grid = grid_with(&[
            (2, 6, Player::Two),
            (3, 6, Player::Two),
            (4, 6, Player::Two),
            (5, 6, Player::Two),
        ]);
        let line = find_win(&grid, Player::Two).unwrap();
        assert_eq!(line.direction, Direction::Vertical);
        assert_eq!(line.cells[0], Position::new(2, 6));
        assert!(line.contains(Position::new(5, 6)));
    }

    #[test]
    fn test_diagonal_down_right_win() {
        let grid = grid_with(&[
            (2, 0, Player::One),
            (3, 1, Player::One),
            (4, 2, Player::One),
            (5, 3, Player::One),
        ]);
        let line = find_win(&grid, Player::One).unwrap();
        assert_eq!(line.direction, Direction::DiagonalDownRight);
        assert_eq!(line.cells[0], Position::new(2, 0));
    }

    #[test]
    fn test_diagonal_down_left_win() {
        let grid = grid_with(&[
            (2, 6, Player::Two),
            (3, 5, Player::Two),
            (4, 4, Player::Two),
            (5, 3, Player::Two),
        ]);
        let line = find_win(&grid, Player::Two).unwrap();
        assert_eq!(line.direction, Direction::DiagonalDownLeft);
        assert_eq!(line.cells[3], Position::new(5, 3));
    }

    #[test]
    fn test_only_mover_is_checked() {
        let grid = grid_with(&[
            (5, 0, Player::Two),
            (5, 1, Player::Two),
            (5, 2, Player::Two),
            (5, 3, Player::Two),
        ]);
        assert_eq!(find_win(&grid, Player::One), None);
        assert!(find_win(&grid, Player::Two).is_some());
    }

    #[test]
    fn test_three_is_not_a_win() {
        let grid = grid_with(&[
            (5, 0, Player::One),
            (5, 1, Player::One),
            (5, 2, Player::One),
            (5, 3, Player::Two),
        ]);
        assert_eq!(find_win(&grid, Player::One), None);
    }

    #[test]
    fn test_lines_do_not_wrap_rows() {
        // end of row 4 plus start of row 5 is contiguous in storage only
        let grid = grid_with(&[
            (4, 5, Player::One),
            (4, 6, Player::One),
            (5, 0, Player::One),
            (5, 1, Player::One),
        ]);
        assert_eq!(find_win(&grid, Player::One), None);
    }

    #[test]
    fn test_first_line_in_scan_order_wins() {
        // vertical from (2, 0) and horizontal from (5, 0) both win; row-major
        // order reaches (2, 0) first
        let grid = grid_with(&[
            (2, 0, Player::One),
            (3, 0, Player::One),
            (4, 0, Player::One),
            (5, 0, Player::One),
            (5, 1, Player::One),
            (5, 2, Player::One),
            (5, 3, Player::One),
        ]);
        let line = find_win(&grid, Player::One).unwrap();
        assert_eq!(line.direction, Direction::Vertical);
        assert_eq!(line.cells[0], Position::new(2, 0));
    }

    #[test]
    fn test_longer_run_still_wins() {
        let grid = grid_with(&[
            (5, 1, Player::One),
            (5, 2, Player::One),
            (5, 3, Player::One),
            (5, 4, Player::One),
            (5, 5, Player::One),
        ]);
        let line = find_win(&grid, Player::One).unwrap();
        assert_eq!(line.cells[0], Position::new(5, 1));
    }

    #[test]
    fn test_small_grid_never_wins() {
        let mut grid = Grid::new(3, 3);
        for col in 0..3 {
            for _ in 0..3 {
                grid.drop_piece(col, Player::One).unwrap();
            }
        }
        assert_eq!(find_win(&grid, Player::One), None);
    }
}
