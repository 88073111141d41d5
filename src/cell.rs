/*
  Draughtsman, a draughts rules engine.
  Copyright (C) 2022 The Draughtsman Authors.

  Draughtsman is free software: you can redistribute it and/or modify
  it under the terms of the GNU General Public License as published by
  the Free Software Foundation, either version 3 of the License, or
  (at your option) any later version.

  Draughtsman is distributed in the hope that it will be useful,
  but WITHOUT ANY WARRANTY; without even the implied warranty of
  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
  GNU General Public License for more details.

  You should have received a copy of the GNU General Public License
  along with this program.  If not, see <http://www.gnu.org/licenses/>.
*/

//! Cells, which are positions on a board.

use super::Direction;

use std::{
    fmt::{Display, Formatter},
    ops::Add,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// A cell: a coordinate `(x, y)` which may or may not lie on the 8x8 board.
///
/// Off-board cells exist so that a pointer dropped outside the board can
/// still be expressed, and rejected, as a destination. Sorting orders cells
/// by row, then by column.
pub struct Cell {
    y: i8,
    x: i8,
}

impl Cell {
    /// The width and height of the board.
    pub const SIZE: i8 = 8;

    /// The number of cells on the board.
    pub const NUM: usize = 64;

    #[inline(always)]
    #[must_use]
    /// Create a cell from a column `x` and a row `y`. The result may be off
    /// the board.
    pub const fn new(x: i8, y: i8) -> Cell {
        Cell { y, x }
    }

    #[inline(always)]
    #[must_use]
    /// Get the column of this cell.
    pub const fn x(self) -> i8 {
        self.x
    }

    #[inline(always)]
    #[must_use]
    /// Get the row of this cell.
    pub const fn y(self) -> i8 {
        self.y
    }

    #[inline(always)]
    #[must_use]
    /// Does this cell lie on the board?
    pub const fn is_on_board(self) -> bool {
        0 <= self.x && self.x < Cell::SIZE && 0 <= self.y && self.y < Cell::SIZE
    }

    #[inline(always)]
    #[must_use]
    /// Is this a dark square, which is the only kind a piece may stand on?
    pub const fn is_playable(self) -> bool {
        self.is_on_board() && (self.x + self.y) % 2 == 1
    }

    #[inline(always)]
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    /// Get the index of this cell in row-major order, or `None` if it is off
    /// the board.
    pub const fn index(self) -> Option<usize> {
        if self.is_on_board() {
            Some((self.y * Cell::SIZE + self.x) as usize)
        } else {
            None
        }
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    /// Get the cell with the given row-major index.
    pub const fn from_index(i: usize) -> Option<Cell> {
        if i < Cell::NUM {
            Some(Cell::new((i % 8) as i8, (i / 8) as i8))
        } else {
            None
        }
    }

    /// Iterate over every cell on the board in row-major order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..Cell::SIZE).flat_map(|y| (0..Cell::SIZE).map(move |x| Cell::new(x, y)))
    }

    /// Iterate over every playable cell on the board in row-major order.
    pub fn playable() -> impl Iterator<Item = Cell> {
        Cell::all().filter(|c| c.is_playable())
    }

    #[inline(always)]
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    /// Get the cell `dist` steps away in direction `dir`.
    pub fn offset(self, dir: Direction, dist: u8) -> Cell {
        let (dx, dy) = (dist as i8) * dir;
        Cell::new(self.x + dx, self.y + dy)
    }

    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    /// If `to` is on a diagonal with this cell, get the direction toward it and
    /// the number of steps needed to get there.
    pub fn diagonal_to(self, to: Cell) -> Option<(Direction, u8)> {
        let dx = to.x - self.x;
        let dy = to.y - self.y;
        if dx.abs() != dy.abs() {
            return None;
        }
        Direction::from_signs(dx, dy).map(|dir| (dir, dx.unsigned_abs()))
    }
}

impl Add<Direction> for Cell {
    type Output = Cell;
    #[inline(always)]
    fn add(self, rhs: Direction) -> Self::Output {
        self.offset(rhs, 1)
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
