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

//! Hash key generation for boards.

use super::{Cell, Piece, Rank, Side};

use once_cell::sync::Lazy;

/// The seed for the key generator. Keys must be identical between runs so
/// that position hashes are reproducible.
const KEY_SEED: u64 = 12345;

/// Zobrist keys for every (side, rank, cell) triple, plus one key that is
/// mixed in when Dark is to move.
struct Keys {
    cells: [[[u64; Cell::NUM]; 2]; 2],
    dark_to_move: u64,
}

static KEYS: Lazy<Keys> = Lazy::new(|| {
    let rng = fastrand::Rng::with_seed(KEY_SEED);
    let mut cells = [[[0; Cell::NUM]; 2]; 2];
    for side in &mut cells {
        for rank in side.iter_mut() {
            for key in rank.iter_mut() {
                *key = rng.u64(..);
            }
        }
    }
    Keys {
        cells,
        dark_to_move: rng.u64(..),
    }
});

#[inline(always)]
#[must_use]
/// Get the Zobrist key for a piece of the given side and rank on `cell`.
/// Off-board cells have a key of zero.
pub fn piece_key(side: Side, rank: Rank, cell: Cell) -> u64 {
    cell.index()
        .map_or(0, |i| KEYS.cells[side as usize][rank as usize][i])
}

#[inline(always)]
#[must_use]
/// Get the key of a piece standing where it currently stands.
pub fn key_of(piece: &Piece) -> u64 {
    piece_key(piece.side, piece.rank, piece.cell)
}

#[inline(always)]
#[must_use]
/// Get the key to mix into a board hash for the side to move.
pub fn side_key(side: Side) -> u64 {
    match side {
        Side::Light => 0,
        Side::Dark => KEYS.dark_to_move,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// Test that no two keys in the table collide.
    fn keys_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for side in Side::ALL {
            for rank in Rank::ALL {
                for cell in Cell::all() {
                    assert!(seen.insert(piece_key(side, rank, cell)));
                }
            }
        }
        assert!(seen.insert(side_key(Side::Dark)));
    }

    #[test]
    fn off_board_key_is_zero() {
        assert_eq!(piece_key(Side::Light, Rank::Man, Cell::new(9, 9)), 0);
    }
}
