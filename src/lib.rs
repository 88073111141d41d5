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

//! A rules engine for draughts on an 8x8 board.
//!
//! The engine validates single moves, resolves capture chains under the
//! maximum capture rule, and runs games from the first move to a win or a
//! draw. It draws nothing and knows nothing about input devices: a front end
//! submits `(piece, destination)` pairs to a [`Game`] and reads back what
//! happened.
//!
//! ```
//! use draughtsman::{Cell, Game, Side, TurnState};
//!
//! let mut game = Game::new();
//! let id = game.board().piece_at(Cell::new(2, 5)).unwrap();
//! let report = game.submit_move(id, Cell::new(3, 4)).unwrap();
//! assert_eq!(report.state, TurnState::AwaitingMove(Side::Dark));
//! ```

#![warn(clippy::pedantic)]

// Many module elements are re-exported to make names more ergonomic to access.

mod board;
pub use board::Board;

mod cell;
pub use cell::Cell;

mod direction;
pub use direction::Direction;

mod error;
pub use error::{MoveError, SetupError};

pub mod game;
pub use game::{Game, GameResult, MoveOutcome, MoveReport, Turn, TurnState};

pub mod movegen;

pub mod perft;

mod piece;
pub use piece::{Piece, PieceId, Rank};

mod rules;
pub use rules::Rules;

mod side;
pub use side::Side;

mod zobrist;
