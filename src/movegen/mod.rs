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

//! Generation and verification of legal hops in a position.
//!
//! This module decides single hops: a simple move of one piece, or one jump
//! over one enemy piece. Whole capture chains, and the maximum capture rule,
//! live in [`capture`].

pub mod capture;

#[cfg(test)]
mod tests;

use super::{Board, Cell, Direction, MoveError, Piece, PieceId, Rank, Rules};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// The kind of a legal hop.
pub enum Hop {
    /// A move to an empty cell which captures nothing.
    Simple,
    /// A jump which captures the given piece.
    Capture(PieceId),
}

#[inline(always)]
/// Get the largest number of steps a piece may travel along one diagonal in
/// one hop, not counting the piece it jumps.
fn reach(piece: &Piece, rules: &Rules) -> u8 {
    if piece.is_king() && rules.flying_kings {
        7
    } else {
        1
    }
}

#[inline(always)]
/// May `piece` move in `dir` without capturing?
fn steps_toward(piece: &Piece, dir: Direction) -> bool {
    piece.is_king() || dir.dy() == piece.side.forward()
}

#[inline(always)]
/// May `piece` capture in `dir`?
pub(crate) fn jumps_toward(piece: &Piece, dir: Direction, rules: &Rules) -> bool {
    piece.is_king() || rules.men_capture_backward || dir.dy() == piece.side.forward()
}

/// Decide whether moving the piece `id` to `to` is a legal hop, and if so
/// which kind.
///
/// `capture_pending` must be true whenever the side to move is obliged to
/// capture: either some piece of that side has a capture available, or a
/// capture chain is open. Simple moves are refused in that case.
///
/// This does not check whose turn it is, nor whether a capture belongs to a
/// maximal sequence; that is the job of the game.
///
/// # Errors
///
/// Returns the first rule the hop breaks.
///
/// # Examples
///
/// ```
/// use draughtsman::{movegen::{classify, Hop}, Board, Cell, Rules};
///
/// let board = Board::new();
/// let id = board.piece_at(Cell::new(0, 5)).unwrap();
/// assert_eq!(classify(&board, id, Cell::new(1, 4), &Rules::new(), false), Ok(Hop::Simple));
/// assert!(classify(&board, id, Cell::new(0, 4), &Rules::new(), false).is_err());
/// ```
pub fn classify(
    board: &Board,
    id: PieceId,
    to: Cell,
    rules: &Rules,
    capture_pending: bool,
) -> Result<Hop, MoveError> {
    let piece = board.piece(id).ok_or(MoveError::UnknownPiece(id))?;
    let from = piece.cell;

    if !to.is_on_board() {
        return Err(MoveError::OutOfBounds(to));
    }
    if !to.is_playable() {
        return Err(MoveError::UnplayableDestination(to));
    }
    if board.piece_at(to).is_some() {
        return Err(MoveError::OccupiedDestination(to));
    }
    let (dir, dist) = from
        .diagonal_to(to)
        .ok_or(MoveError::NonDiagonalMove { from, to })?;

    if dist == 1 {
        if !steps_toward(&piece, dir) {
            return Err(MoveError::WrongDirectionForMan { from, to });
        }
        if capture_pending {
            return Err(MoveError::MandatoryCaptureViolation { from, to });
        }
        return Ok(Hop::Simple);
    }

    // a piece that cannot fly jumps only to the cell right behind its victim
    if dist > reach(&piece, rules) + 1 {
        return Err(MoveError::HopTooLong { from, to });
    }

    let mut victim = None;
    for step in 1..dist {
        let cell = from.offset(dir, step);
        if let Some((other_id, other)) = board.piece_on(cell) {
            if other.side == piece.side || victim.is_some() {
                return Err(MoveError::AmbiguousOrBlockedCapturePath { from, to });
            }
            victim = Some(other_id);
        }
    }

    match victim {
        Some(captured) => {
            if !jumps_toward(&piece, dir, rules) {
                return Err(MoveError::WrongDirectionForMan { from, to });
            }
            Ok(Hop::Capture(captured))
        }
        None if piece.rank == Rank::King && rules.flying_kings => {
            if capture_pending {
                return Err(MoveError::MandatoryCaptureViolation { from, to });
            }
            Ok(Hop::Simple)
        }
        None => Err(MoveError::NoCaptureAlongPath { from, to }),
    }
}

#[must_use]
/// Get every cell the piece `id` could reach with a simple move, ignoring
/// whether a capture is mandatory. Returns an empty list for a missing piece.
pub fn simple_destinations(board: &Board, id: PieceId, rules: &Rules) -> Vec<Cell> {
    let mut destinations = Vec::new();
    let Some(piece) = board.piece(id) else {
        return destinations;
    };

    let reach = reach(&piece, rules);
    for dir in Direction::DIAGONALS {
        if !steps_toward(&piece, dir) {
            continue;
        }
        for step in 1..=reach {
            let cell = piece.cell.offset(dir, step);
            if !cell.is_on_board() || board.piece_at(cell).is_some() {
                break;
            }
            destinations.push(cell);
        }
    }

    destinations
}

#[must_use]
/// Can the piece `id` make any simple move?
pub fn has_simple_move(board: &Board, id: PieceId) -> bool {
    let Some(piece) = board.piece(id) else {
        return false;
    };
    // the nearest cell along a diagonal is empty whenever any cell along it is
    // reachable
    Direction::DIAGONALS.into_iter().any(|dir| {
        let cell = piece.cell + dir;
        steps_toward(&piece, dir) && cell.is_on_board() && board.piece_at(cell).is_none()
    })
}
