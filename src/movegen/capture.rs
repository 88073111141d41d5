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

//! Enumeration of capture chains and the maximum capture rule.
//!
//! The search is a depth-first recursion over board values. Each branch takes
//! its own copy of the board, removes the captured piece, moves the capturing
//! piece to its landing cell, and recurses from there. The board passed in by
//! the caller is never modified.

use super::{jumps_toward, reach};

use crate::{Board, Cell, Direction, PieceId, Rules};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A single capture hop available to a piece.
pub struct CaptureHop {
    /// The piece which is jumped and removed.
    pub captured: PieceId,
    /// The cell on which the capturing piece lands.
    pub landing: Cell,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
/// A chain of consecutive capture hops made by one piece in one turn.
pub struct CaptureSequence {
    /// The capturing piece.
    pub piece: PieceId,
    /// The cells visited, starting with the cell the piece started on. There is
    /// one more cell than there are captured pieces.
    pub path: Vec<Cell>,
    /// The captured pieces, in the order they were jumped.
    pub captured: Vec<PieceId>,
}

impl CaptureSequence {
    #[must_use]
    /// Get the number of pieces this sequence captures.
    pub fn len(&self) -> usize {
        self.captured.len()
    }

    #[must_use]
    /// Does this sequence capture nothing?
    pub fn is_empty(&self) -> bool {
        self.captured.is_empty()
    }

    #[must_use]
    /// Get the cell the chain starts from.
    pub fn start(&self) -> Option<Cell> {
        self.path.first().copied()
    }

    #[must_use]
    /// Get the cell the chain ends on.
    pub fn landing(&self) -> Option<Cell> {
        self.path.last().copied()
    }

    #[must_use]
    /// Get the cells the piece lands on, in order, leaving out the start.
    pub fn landings(&self) -> &[Cell] {
        self.path.get(1..).unwrap_or(&[])
    }

    /// Iterate over the hops of this sequence.
    pub fn hops(&self) -> impl Iterator<Item = CaptureHop> + '_ {
        self.captured
            .iter()
            .zip(self.landings())
            .map(|(&captured, &landing)| CaptureHop { captured, landing })
    }
}

#[must_use]
/// Get every single capture hop the piece `id` can make from where it stands.
/// A hop jumps exactly one enemy piece with nothing else on the ray between
/// start and landing.
pub fn capture_hops(board: &Board, id: PieceId, rules: &Rules) -> Vec<CaptureHop> {
    let mut hops = Vec::new();
    let Some(piece) = board.piece(id) else {
        return hops;
    };
    let reach = reach(&piece, rules);

    'dirs: for dir in Direction::DIAGONALS {
        if !jumps_toward(&piece, dir, rules) {
            continue;
        }

        // walk over empty cells until the first piece on the ray
        let mut victim = None;
        for step in 1..=reach {
            let cell = piece.cell.offset(dir, step);
            if !cell.is_on_board() {
                continue 'dirs;
            }
            if let Some((other_id, other)) = board.piece_on(cell) {
                if other.side == piece.side {
                    continue 'dirs;
                }
                victim = Some((other_id, cell));
                break;
            }
        }
        let Some((captured, victim_cell)) = victim else {
            continue;
        };

        // every empty cell behind the victim, up to the next obstacle
        for step in 1..=reach {
            let landing = victim_cell.offset(dir, step);
            if !landing.is_on_board() || board.piece_at(landing).is_some() {
                break;
            }
            hops.push(CaptureHop { captured, landing });
        }
    }

    hops
}

#[must_use]
/// Does the piece `id` have any capture available?
pub fn has_capture(board: &Board, id: PieceId, rules: &Rules) -> bool {
    !capture_hops(board, id, rules).is_empty()
}

#[must_use]
/// Get the board after the piece `id` makes `hop` on `board`. The piece is
/// crowned on landing on its promotion row if `rules` promote mid-chain.
pub(crate) fn after_hop(board: &Board, id: PieceId, hop: CaptureHop, rules: &Rules) -> Board {
    let mut next = *board;
    next.remove_piece(hop.captured);
    next.relocate(id, hop.landing);
    if rules.promote_mid_chain && next.piece(id).is_some_and(|p| p.promotes_at(hop.landing)) {
        next.promote(id);
    }
    next
}

/// Extend the chain in `path` and `captured` in every possible way, pushing
/// each complete chain onto `out`.
fn extend_chain(
    board: &Board,
    id: PieceId,
    rules: &Rules,
    path: &mut Vec<Cell>,
    captured: &mut Vec<PieceId>,
    out: &mut Vec<CaptureSequence>,
) {
    let hops = capture_hops(board, id, rules);
    if hops.is_empty() {
        if !captured.is_empty() {
            out.push(CaptureSequence {
                piece: id,
                path: path.clone(),
                captured: captured.clone(),
            });
        }
        return;
    }

    for hop in hops {
        let next = after_hop(board, id, hop, rules);
        path.push(hop.landing);
        captured.push(hop.captured);
        extend_chain(&next, id, rules, path, captured, out);
        path.pop();
        captured.pop();
    }
}

#[must_use]
/// Get every complete capture chain available to the piece `id`, whether or
/// not it is maximal. A chain is complete when no further hop exists from its
/// landing cell.
pub fn all_sequences(board: &Board, id: PieceId, rules: &Rules) -> Vec<CaptureSequence> {
    let mut out = Vec::new();
    let Some(piece) = board.piece(id) else {
        return out;
    };
    extend_chain(
        board,
        id,
        rules,
        &mut vec![piece.cell],
        &mut Vec::new(),
        &mut out,
    );
    out
}

#[must_use]
/// Get every capture chain available to the piece `id` which captures as many
/// pieces as possible. All returned sequences have the same length. The list
/// is empty if the piece has no capture.
///
/// # Examples
///
/// ```
/// use draughtsman::{movegen::capture::maximal_sequences, Board, Cell, Rank, Rules, Side};
///
/// // a light man can take one dark man, or two in a row the other way
/// let board = Board::from_pieces(&[
///     (Side::Light, Rank::Man, Cell::new(3, 4)),
///     (Side::Dark, Rank::Man, Cell::new(2, 3)),
///     (Side::Dark, Rank::Man, Cell::new(4, 3)),
///     (Side::Dark, Rank::Man, Cell::new(4, 1)),
/// ])
/// .unwrap();
/// let mover = board.piece_at(Cell::new(3, 4)).unwrap();
/// let best = maximal_sequences(&board, mover, &Rules::new());
/// assert_eq!(best.len(), 1);
/// assert_eq!(best[0].path, vec![Cell::new(3, 4), Cell::new(5, 2), Cell::new(3, 0)]);
/// ```
pub fn maximal_sequences(board: &Board, id: PieceId, rules: &Rules) -> Vec<CaptureSequence> {
    let mut sequences = all_sequences(board, id, rules);
    let longest = sequences.iter().map(CaptureSequence::len).max().unwrap_or(0);
    sequences.retain(|s| s.len() == longest);
    sequences
}
