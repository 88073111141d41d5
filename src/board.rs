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

//! State representations of boards, which contain piece positions but neither
//! turn state nor history.

use super::{zobrist, Cell, Piece, PieceId, Rank, SetupError, Side};

use std::{
    default::Default,
    fmt::{Display, Formatter},
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// A representation of a position. Does not know whose turn it is.
///
/// Pieces live in a fixed arena indexed by `PieceId`, and the grid stores ids
/// rather than pieces, so there is exactly one copy of each piece's state.
pub struct Board {
    /// The id of the piece on each cell, in row-major order.
    cells: [Option<PieceId>; Cell::NUM],
    /// The arena of pieces. A slot is `None` once its piece is captured.
    pieces: [Option<Piece>; Board::MAX_PIECES],
    /// The number of ids handed out so far.
    next_id: u8,
    /// A saved internal hash. If the board is valid, this value must ALWAYS
    /// be equal to the output of `Board::fresh_hash()`.
    hash: u64,
}

impl Board {
    /// The largest number of pieces a board can hold: one per playable cell.
    pub const MAX_PIECES: usize = 32;

    #[must_use]
    /// Create a board with no pieces on it.
    pub const fn empty() -> Board {
        Board {
            cells: [None; Cell::NUM],
            pieces: [None; Board::MAX_PIECES],
            next_id: 0,
            hash: 0,
        }
    }

    #[must_use]
    /// Create a board in the standard starting position: every playable cell
    /// of rows 0 through 2 holds a Dark man, and every playable cell of rows 5
    /// through 7 holds a Light man.
    pub fn new() -> Board {
        let mut board = Board::empty();
        for cell in Cell::playable() {
            for side in Side::ALL {
                if side.home_rows().contains(&cell.y()) {
                    let placed = board.place(side, Rank::Man, cell);
                    // 24 men on distinct playable cells always fit
                    debug_assert!(placed.is_ok());
                }
            }
        }
        board
    }

    /// Create a board holding exactly the given pieces. Ids are handed out in
    /// the order the pieces are listed.
    ///
    /// # Errors
    ///
    /// This function will return an `Err` if any of the pieces could not be
    /// placed. See `Board::place`.
    pub fn from_pieces(pieces: &[(Side, Rank, Cell)]) -> Result<Board, SetupError> {
        let mut board = Board::empty();
        for &(side, rank, cell) in pieces {
            board.place(side, rank, cell)?;
        }
        Ok(board)
    }

    /// Put a new piece on the board. This is only used for setting up
    /// positions: no move ever creates a piece.
    ///
    /// # Errors
    ///
    /// Returns an `Err` if `cell` is not playable or already occupied, if a man
    /// would be placed on its own promotion row, or if the arena is full.
    pub fn place(&mut self, side: Side, rank: Rank, cell: Cell) -> Result<PieceId, SetupError> {
        let Some(i) = cell.index().filter(|_| cell.is_playable()) else {
            return Err(SetupError::UnplayableCell(cell));
        };
        if self.cells[i].is_some() {
            return Err(SetupError::OccupiedCell(cell));
        }
        let piece = Piece { side, rank, cell };
        if piece.promotes_at(cell) {
            return Err(SetupError::ManOnPromotionRow(side));
        }
        if self.next_id as usize >= Board::MAX_PIECES {
            return Err(SetupError::TooManyPieces(Board::MAX_PIECES));
        }

        let id = PieceId(self.next_id);
        self.next_id += 1;
        self.pieces[id.index()] = Some(piece);
        self.cells[i] = Some(id);
        self.hash ^= zobrist::key_of(&piece);
        Ok(id)
    }

    /// Remove whatever piece stands on `cell`, and return it.
    pub fn remove(&mut self, cell: Cell) -> Option<Piece> {
        let id = self.piece_at(cell)?;
        self.remove_piece(id)
    }

    /// Remove the piece with the given id from the board.
    pub(crate) fn remove_piece(&mut self, id: PieceId) -> Option<Piece> {
        let piece = self.pieces.get_mut(id.index())?.take()?;
        if let Some(i) = piece.cell.index() {
            self.cells[i] = None;
        }
        self.hash ^= zobrist::key_of(&piece);
        Some(piece)
    }

    /// Move a piece to `to`, which must be an empty playable cell (or the cell
    /// the piece already stands on). No legality checking is done here.
    pub(crate) fn relocate(&mut self, id: PieceId, to: Cell) {
        let (Some(Some(piece)), Some(to_index)) = (self.pieces.get_mut(id.index()), to.index())
        else {
            return;
        };
        debug_assert!(self.cells[to_index].is_none() || self.cells[to_index] == Some(id));

        self.hash ^= zobrist::key_of(piece);
        if let Some(from_index) = piece.cell.index() {
            self.cells[from_index] = None;
        }
        piece.cell = to;
        self.cells[to_index] = Some(id);
        self.hash ^= zobrist::key_of(piece);
    }

    /// Crown the piece with the given id.
    pub(crate) fn promote(&mut self, id: PieceId) {
        if let Some(Some(piece)) = self.pieces.get_mut(id.index()) {
            self.hash ^= zobrist::key_of(piece);
            piece.rank = Rank::King;
            self.hash ^= zobrist::key_of(piece);
        }
    }

    #[inline(always)]
    #[must_use]
    /// Get the id of the piece on `cell`, if any. Off-board cells are always
    /// empty.
    pub fn piece_at(&self, cell: Cell) -> Option<PieceId> {
        cell.index().and_then(|i| self.cells[i])
    }

    #[inline(always)]
    #[must_use]
    /// Get the current state of the piece with the given id. Returns `None` if
    /// the piece has been captured or never existed.
    pub fn piece(&self, id: PieceId) -> Option<Piece> {
        self.pieces.get(id.index()).copied().flatten()
    }

    #[inline(always)]
    #[must_use]
    /// Get the id and state of the piece on `cell`, if any.
    pub fn piece_on(&self, cell: Cell) -> Option<(PieceId, Piece)> {
        let id = self.piece_at(cell)?;
        self.piece(id).map(|p| (id, p))
    }

    #[inline(always)]
    #[must_use]
    /// Can a piece ever stand on `cell`?
    pub const fn is_playable(cell: Cell) -> bool {
        cell.is_playable()
    }

    #[allow(clippy::cast_possible_truncation)]
    /// Iterate over every piece still on the board, in id order.
    pub fn pieces(&self) -> impl Iterator<Item = (PieceId, Piece)> + '_ {
        self.pieces
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.map(|p| (PieceId(i as u8), p)))
    }

    /// Iterate over the pieces of one side, in id order.
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = (PieceId, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.side == side)
    }

    #[must_use]
    /// Count the pieces a side has left.
    pub fn count(&self, side: Side) -> usize {
        self.pieces_of(side).count()
    }

    #[inline(always)]
    #[must_use]
    /// Get the Zobrist hash of the piece placement.
    pub const fn hash(&self) -> u64 {
        self.hash
    }

    #[must_use]
    /// Compute the hash of this board from scratch.
    pub fn fresh_hash(&self) -> u64 {
        self.pieces()
            .fold(0, |hash, (_, piece)| hash ^ zobrist::key_of(&piece))
    }

    #[must_use]
    /// Check if the state of this board is valid. Returns false if any piece
    /// stands off a playable cell, if the grid and the arena disagree, or if
    /// the saved hash is stale.
    ///
    /// A man may stand on its promotion row here: with late crowning, a chain
    /// can pass over that row. `Game::is_valid` checks crowning.
    pub fn is_valid(&self) -> bool {
        for (id, piece) in self.pieces() {
            if !piece.cell.is_playable() || self.piece_at(piece.cell) != Some(id) {
                return false;
            }
        }
        for cell in Cell::all() {
            if let Some(id) = self.piece_at(cell) {
                if self.piece(id).map(|p| p.cell) != Some(cell) {
                    return false;
                }
            }
        }

        self.hash == self.fresh_hash()
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

impl Display for Board {
    /// Draw the board with row 0 at the top. Dark squares that are empty are
    /// drawn as `.`; light squares are left blank.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for y in 0..Cell::SIZE {
            for x in 0..Cell::SIZE {
                let cell = Cell::new(x, y);
                let c = match self.piece_on(cell) {
                    Some((_, piece)) => piece.code(),
                    None if cell.is_playable() => '.',
                    None => ' ',
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// Test that the starting position has twelve men per side on the right
    /// rows, and that it is valid.
    fn start_position() {
        let b = Board::new();
        assert!(b.is_valid());
        assert_eq!(b.count(Side::Light), 12);
        assert_eq!(b.count(Side::Dark), 12);
        for (_, piece) in b.pieces() {
            assert_eq!(piece.rank, Rank::Man);
            assert!(piece.side.home_rows().contains(&piece.cell.y()));
        }
        for y in 3..=4 {
            for x in 0..8 {
                assert!(b.piece_at(Cell::new(x, y)).is_none());
            }
        }
    }

    #[test]
    /// Test that a piece cannot be placed on a light square or on top of
    /// another piece.
    fn place_refuses_bad_cells() {
        let mut b = Board::empty();
        assert_eq!(
            b.place(Side::Light, Rank::Man, Cell::new(0, 0)),
            Err(SetupError::UnplayableCell(Cell::new(0, 0)))
        );
        assert_eq!(
            b.place(Side::Light, Rank::Man, Cell::new(9, 0)),
            Err(SetupError::UnplayableCell(Cell::new(9, 0)))
        );
        b.place(Side::Light, Rank::Man, Cell::new(1, 4)).unwrap();
        assert_eq!(
            b.place(Side::Dark, Rank::King, Cell::new(1, 4)),
            Err(SetupError::OccupiedCell(Cell::new(1, 4)))
        );
        assert_eq!(
            b.place(Side::Dark, Rank::Man, Cell::new(0, 7)),
            Err(SetupError::ManOnPromotionRow(Side::Dark))
        );
        assert!(b.place(Side::Dark, Rank::King, Cell::new(0, 7)).is_ok());
    }

    #[test]
    /// Test that relocating, promoting, and removing keep the incremental hash
    /// in step with a fresh one, and that ids survive all of it.
    fn mutation_keeps_board_valid() {
        let mut b = Board::empty();
        let id = b.place(Side::Dark, Rank::Man, Cell::new(2, 5)).unwrap();
        let other = b.place(Side::Light, Rank::Man, Cell::new(4, 5)).unwrap();
        b.relocate(id, Cell::new(3, 6));
        assert!(b.is_valid());
        assert_eq!(b.piece_at(Cell::new(2, 5)), None);
        assert_eq!(b.piece_at(Cell::new(3, 6)), Some(id));

        b.relocate(id, Cell::new(2, 7));
        b.promote(id);
        assert!(b.is_valid());
        assert_eq!(b.piece(id).unwrap().rank, Rank::King);

        assert_eq!(b.remove(Cell::new(4, 5)).map(|p| p.side), Some(Side::Light));
        assert_eq!(b.piece(other), None);
        assert!(b.is_valid());
        assert_eq!(b.hash(), b.fresh_hash());
    }

    #[test]
    /// Test that a man passing over its promotion row partway through a chain
    /// still leaves a structurally valid board.
    fn uncrowned_man_on_far_row() {
        let mut b = Board::empty();
        let id = b.place(Side::Dark, Rank::Man, Cell::new(2, 5)).unwrap();
        b.relocate(id, Cell::new(4, 7));
        assert_eq!(b.piece(id).unwrap().rank, Rank::Man);
        assert!(b.is_valid());
    }

    #[test]
    /// Test that removing an empty cell does nothing.
    fn remove_empty_cell() {
        let mut b = Board::new();
        let before = b;
        assert!(b.remove(Cell::new(1, 4)).is_none());
        assert_eq!(b, before);
    }

    #[test]
    fn start_position_diagram() {
        let expected = concat!(
            " d d d d\n",
            "d d d d \n",
            " d d d d\n",
            ". . . . \n",
            " . . . .\n",
            "l l l l \n",
            " l l l l\n",
            "l l l l \n",
        );
        assert_eq!(Board::new().to_string(), expected);
    }
}
