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

//! Performance testing, or "perft." Perft counts the leaves of the tree of
//! whole turns to a fixed depth. It is used for verifying the correctness of
//! move generation and for benchmarking the speed of playing turns.

use std::time::Instant;

use log::{debug, error, info};

use super::Game;

/// Count the number of leaves of the turn tree of `game` which are `depth`
/// turns deep, and log how long it took. A game which ends before `depth`
/// turns adds no leaves.
pub fn perft(game: &Game, depth: u8) -> u64 {
    let tic = Instant::now();
    let num_nodes = perft_search(game, depth, true);
    let time = tic.elapsed();
    #[allow(clippy::cast_precision_loss)]
    let speed = (num_nodes as f64) / time.as_secs_f64();
    info!(
        "perft depth {depth}: time {:.2} secs, num nodes {num_nodes}: {speed:.0} nodes/sec",
        time.as_secs_f64()
    );

    num_nodes
}

/// The core search algorithm for perft.
fn perft_search(game: &Game, depth: u8, divide: bool) -> u64 {
    if depth == 0 {
        return 1;
    }
    let turns = game.legal_turns();
    if turns.is_empty() {
        return 0;
    }
    let mut total = 0;
    for turn in turns {
        let mut gcopy = game.clone();
        if let Err(e) = gcopy.play_turn(&turn) {
            error!("legal turn {turn} was refused: {e}");
            continue;
        }
        let perft_count = perft_search(&gcopy, depth - 1, false);
        if divide {
            debug!("{turn}, {perft_count}");
        }
        total += perft_count;
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Cell, Rank, Rules, Side};

    #[test]
    /// Test the perft values for the starting position.
    fn perft_start_position() {
        perft_assistant(&Game::new(), &[1, 7, 49, 302]);
    }

    #[test]
    /// Test that a capture chain counts as one turn no matter how many hops it
    /// has.
    fn perft_chain_is_one_turn() {
        let board = Board::from_pieces(&[
            (Side::Light, Rank::Man, Cell::new(0, 7)),
            (Side::Dark, Rank::Man, Cell::new(1, 6)),
            (Side::Dark, Rank::Man, Cell::new(3, 4)),
            (Side::Dark, Rank::Man, Cell::new(7, 0)),
        ])
        .unwrap();
        let game = Game::from_board(board, Side::Light, Rules::new());
        // the chain, then the only step of the last dark man
        perft_assistant(&game, &[1, 1, 1]);
    }

    #[test]
    /// Test that a finished game has no children.
    fn perft_finished_game() {
        let board = Board::from_pieces(&[(Side::Light, Rank::King, Cell::new(3, 4))]).unwrap();
        let game = Game::from_board(board, Side::Dark, Rules::new());
        perft_assistant(&game, &[1, 0, 0]);
    }

    fn perft_assistant(game: &Game, node_counts: &[u64]) {
        for (i, num) in node_counts.iter().enumerate() {
            assert_eq!(*num, perft(game, u8::try_from(i).unwrap()));
        }
    }
}
