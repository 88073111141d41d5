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

//! Diagonal directions, which are the only way anything moves in draughts.

use super::Cell;

use std::ops::{Add, Mul, Neg};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// A unit step along one of the four diagonals.
///
/// "North" is toward row 7, which is the direction Dark men travel.
pub struct Direction {
    dx: i8,
    dy: i8,
}

impl Direction {
    /// A `Direction` corresponding to a step toward row 7 and column 7.
    pub const NORTHEAST: Direction = Direction { dx: 1, dy: 1 };
    /// A `Direction` corresponding to a step toward row 7 and column 0.
    pub const NORTHWEST: Direction = Direction { dx: -1, dy: 1 };
    /// A `Direction` corresponding to a step toward row 0 and column 7.
    pub const SOUTHEAST: Direction = Direction { dx: 1, dy: -1 };
    /// A `Direction` corresponding to a step toward row 0 and column 0.
    pub const SOUTHWEST: Direction = Direction { dx: -1, dy: -1 };

    /// All four diagonal directions.
    pub const DIAGONALS: [Direction; 4] = [
        Direction::NORTHEAST,
        Direction::NORTHWEST,
        Direction::SOUTHEAST,
        Direction::SOUTHWEST,
    ];

    #[inline(always)]
    #[must_use]
    /// Create the diagonal direction whose column and row steps have the signs
    /// of `dx` and `dy`. Returns `None` if either is zero.
    pub const fn from_signs(dx: i8, dy: i8) -> Option<Direction> {
        if dx == 0 || dy == 0 {
            return None;
        }
        Some(Direction {
            dx: dx.signum(),
            dy: dy.signum(),
        })
    }

    #[inline(always)]
    #[must_use]
    /// Get the column difference of one step.
    pub const fn dx(self) -> i8 {
        self.dx
    }

    #[inline(always)]
    #[must_use]
    /// Get the row difference of one step.
    pub const fn dy(self) -> i8 {
        self.dy
    }
}

impl Neg for Direction {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Direction {
            dx: -self.dx,
            dy: -self.dy,
        }
    }
}

/// The displacement of `self` steps in a direction, as a column and row delta.
impl Mul<Direction> for i8 {
    type Output = (i8, i8);
    fn mul(self, rhs: Direction) -> (i8, i8) {
        (self * rhs.dx, self * rhs.dy)
    }
}

impl Add<Cell> for Direction {
    type Output = Cell;
    fn add(self, rhs: Cell) -> Self::Output {
        rhs + self
    }
}
