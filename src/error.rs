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

//! Reasons that a move or a board setup can be refused.
//!
//! Every rejection is an ordinary value. Validation always finishes before a
//! board is touched, so receiving one of these errors means nothing changed.

use super::{Cell, PieceId, Side};

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
/// A reason for refusing a submitted move.
pub enum MoveError {
    #[error("destination {0} is off the board")]
    OutOfBounds(Cell),
    #[error("destination {0} is a light square")]
    UnplayableDestination(Cell),
    #[error("destination {0} is occupied")]
    OccupiedDestination(Cell),
    #[error("{from} to {to} is not a diagonal move")]
    NonDiagonalMove { from: Cell, to: Cell },
    #[error("a man cannot move from {from} to {to} against its forward direction")]
    WrongDirectionForMan { from: Cell, to: Cell },
    #[error("a capture is mandatory, so {from} to {to} is not allowed")]
    MandatoryCaptureViolation { from: Cell, to: Cell },
    #[error("{from} to {to} is too long a hop for this piece")]
    HopTooLong { from: Cell, to: Cell },
    #[error("there is no piece to capture between {from} and {to}")]
    NoCaptureAlongPath { from: Cell, to: Cell },
    #[error("the path from {from} to {to} is blocked or holds more than one piece")]
    AmbiguousOrBlockedCapturePath { from: Cell, to: Cell },
    #[error("capturing from {from} to {to} does not lead to a maximal capture")]
    NotMaximalCapture { from: Cell, to: Cell },
    #[error("piece {given} cannot move while piece {expected} is partway through a capture")]
    WrongPieceContinuingChain { expected: PieceId, given: PieceId },
    #[error("piece {0} is not on the board")]
    UnknownPiece(PieceId),
    #[error("piece {piece} belongs to {side}, who is not to move")]
    NotYourTurn { piece: PieceId, side: Side },
    #[error("the game is already over")]
    MoveAfterGameOver,
    #[error("the turn is not one of the legal turns in this position")]
    IllegalTurn,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
/// A reason for refusing to place a piece while setting up a board.
pub enum SetupError {
    #[error("{0} is not a playable cell")]
    UnplayableCell(Cell),
    #[error("{0} already holds a piece")]
    OccupiedCell(Cell),
    #[error("a {0} man cannot start on its own promotion row")]
    ManOnPromotionRow(Side),
    #[error("a board holds at most {0} pieces")]
    TooManyPieces(usize),
}
