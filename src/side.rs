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

//! Representation of the two sides of a game.

use std::{
    fmt::{Display, Formatter},
    ops::{Not, RangeInclusive},
};

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// An enum representing the side that a piece or player belongs to.
pub enum Side {
    /// The light player. Starts on rows 5 through 7 and moves toward row 0.
    Light = 0,
    /// The dark player. Starts on rows 0 through 2 and moves toward row 7.
    Dark = 1,
}

impl Side {
    /// Both sides, in index order.
    pub const ALL: [Side; 2] = [Side::Light, Side::Dark];

    #[inline(always)]
    #[must_use]
    /// Get the row delta of a forward step for a man of this side.
    pub const fn forward(self) -> i8 {
        match self {
            Side::Light => -1,
            Side::Dark => 1,
        }
    }

    #[inline(always)]
    #[must_use]
    /// Get the row on which a man of this side is promoted to a king.
    pub const fn promotion_row(self) -> i8 {
        match self {
            Side::Light => 0,
            Side::Dark => 7,
        }
    }

    #[must_use]
    /// Get the rows occupied by this side in the standard starting position.
    pub const fn home_rows(self) -> RangeInclusive<i8> {
        match self {
            Side::Light => 5..=7,
            Side::Dark => 0..=2,
        }
    }

    #[must_use]
    /// Get the name of this side, in lowercase.
    pub const fn name(self) -> &'static str {
        match self {
            Side::Light => "light",
            Side::Dark => "dark",
        }
    }
}

impl Not for Side {
    type Output = Self;
    #[inline(always)]
    fn not(self) -> Side {
        match self {
            Side::Light => Side::Dark,
            Side::Dark => Side::Light,
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
