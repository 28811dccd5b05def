//! Board cells and the pixel → cell mapping

use std::fmt;

/// Squares along one side of the board.
pub const BOARD_SIZE: u8 = 8;

/// A square on the board as (row, col). Row 0 is rank 8 (top of the
/// window), col 0 is file a.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    /// `None` unless both coordinates are on the board.
    pub fn new(row: u8, col: u8) -> Option<Self> {
        (row < BOARD_SIZE && col < BOARD_SIZE).then_some(Self { row, col })
    }

    pub fn row(&self) -> u8 { self.row }
    pub fn col(&self) -> u8 { self.col }

    /// Every cell, row by row from the top-left.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Cell { row, col }))
    }
}

impl fmt::Display for Cell {
    /// Algebraic name, e.g. `e2`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, BOARD_SIZE - self.row)
    }
}

/// Map a pixel inside the board area to the cell under it.
///
/// Uses floor division, so pixels left of or above the board map outside it.
/// Returns `None` for anything outside `[0, dimension)` on either axis.
pub fn map_pixel(x: i32, y: i32, square_size: u32, dimension: u32) -> Option<Cell> {
    if square_size == 0 {
        return None;
    }
    let size = i64::from(square_size);
    let row = i64::from(y).div_euclid(size);
    let col = i64::from(x).div_euclid(size);
    let dim = i64::from(dimension);
    if !(0..dim).contains(&row) || !(0..dim).contains(&col) {
        return None;
    }
    Cell::new(u8::try_from(row).ok()?, u8::try_from(col).ok()?)
}
