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

use super::Side;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Configuration options for the rules of a game.
pub struct Rules {
    /// Whether kings may move and capture along a whole diagonal. If this is
    /// false, kings step and jump exactly like men, but in every direction.
    pub flying_kings: bool,
    /// Whether men may capture backward as well as forward.
    pub men_capture_backward: bool,
    /// Whether a man that lands on its promotion row partway through a capture
    /// chain is crowned immediately and continues the chain as a king. If this
    /// is false, it is only crowned if the chain ends there.
    pub promote_mid_chain: bool,
    /// The number of times a position (with the same side to move) must occur
    /// for the game to be drawn. `None` disables repetition draws.
    pub repetition_limit: Option<u8>,
    /// The number of consecutive plies without a capture or a man move after
    /// which the game is drawn. `None` disables this rule.
    pub quiet_move_limit: Option<u16>,
    /// The side which moves first from the starting position.
    pub first_to_move: Side,
}

impl Rules {
    #[must_use]
    pub const fn new() -> Rules {
        Rules {
            flying_kings: true,
            men_capture_backward: true,
            promote_mid_chain: true,
            repetition_limit: Some(3),
            quiet_move_limit: None,
            first_to_move: Side::Light,
        }
    }
}

impl Default for Rules {
    fn default() -> Rules {
        Rules::new()
    }
}
