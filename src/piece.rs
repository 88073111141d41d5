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

//! Pieces, their ranks, and the ids which name them.

use super::{Cell, Side};

use std::fmt::{Display, Formatter, Result};

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// The rank of a piece. Promotion from `Man` to `King` never reverses.
pub enum Rank {
    /// An ordinary piece, which steps only forward.
    Man = 0,
    /// A promoted piece, which moves along all four diagonals.
    King = 1,
}

impl Rank {
    /// Both ranks, in index order.
    pub const ALL: [Rank; 2] = [Rank::Man, Rank::King];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// A stable name for a piece on a board. Ids are handed out when pieces are
/// placed and are never reused, so an id keeps naming the same piece through
/// relocation and promotion until it is captured.
pub struct PieceId(pub(crate) u8);

impl PieceId {
    #[inline(always)]
    #[must_use]
    /// Get the index of this id in its board's piece arena.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

// `PieceId` hashes as a single `u8`, which is all that `nohash_hasher` needs.
impl nohash_hasher::IsEnabled for PieceId {}

impl Display for PieceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// A piece standing on a board.
pub struct Piece {
    /// The side this piece plays for.
    pub side: Side,
    /// Whether this piece has been promoted.
    pub rank: Rank,
    /// The cell this piece currently stands on.
    pub cell: Cell,
}

impl Piece {
    #[inline(always)]
    #[must_use]
    /// Is this piece a king?
    pub fn is_king(&self) -> bool {
        self.rank == Rank::King
    }

    #[inline(always)]
    #[must_use]
    /// Would a man of this piece's side be promoted on landing at `cell`?
    pub fn promotes_at(&self, cell: Cell) -> bool {
        self.rank == Rank::Man && cell.y() == self.side.promotion_row()
    }

    /// Get the character used to draw this piece in a board diagram.
    /// Men are lowercase and kings are uppercase.
    pub const fn code(&self) -> char {
        match (self.side, self.rank) {
            (Side::Light, Rank::Man) => 'l',
            (Side::Light, Rank::King) => 'L',
            (Side::Dark, Rank::Man) => 'd',
            (Side::Dark, Rank::King) => 'D',
        }
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let rank = match self.rank {
            Rank::Man => "man",
            Rank::King => "king",
        };
        write!(f, "{} {rank} at {}", self.side, self.cell)
    }
}
