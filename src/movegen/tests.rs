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

//! Tests for single hops and capture chains.

use super::{
    capture::{all_sequences, capture_hops, has_capture, maximal_sequences, CaptureSequence},
    *,
};

use crate::Side;

/// Build a board from a list of pieces.
fn board_of(pieces: &[(Side, Rank, Cell)]) -> Board {
    Board::from_pieces(pieces).unwrap()
}

/// Get the id of the piece on `(x, y)`.
fn at(board: &Board, x: i8, y: i8) -> PieceId {
    board.piece_at(Cell::new(x, y)).unwrap()
}

#[test]
/// Test that the front men can step forward from the starting position, and
/// the back men cannot step at all.
fn start_position_steps() {
    let board = Board::new();
    let rules = Rules::new();
    assert_eq!(
        simple_destinations(&board, at(&board, 0, 5), &rules),
        vec![Cell::new(1, 4)]
    );
    assert_eq!(simple_destinations(&board, at(&board, 6, 5), &rules).len(), 2);
    assert!(has_simple_move(&board, at(&board, 0, 5)));
    assert!(!has_simple_move(&board, at(&board, 1, 6)));
    assert_eq!(
        classify(&board, at(&board, 1, 6), Cell::new(0, 5), &rules, false),
        Err(MoveError::OccupiedDestination(Cell::new(0, 5)))
    );
}

#[test]
/// Test that a man jumping an adjacent enemy onto an empty cell is a capture
/// of that enemy.
fn man_captures_forward() {
    let board = board_of(&[
        (Side::Light, Rank::Man, Cell::new(2, 5)),
        (Side::Dark, Rank::Man, Cell::new(3, 4)),
    ]);
    let victim = at(&board, 3, 4);
    assert_eq!(
        classify(&board, at(&board, 2, 5), Cell::new(4, 3), &Rules::new(), true),
        Ok(Hop::Capture(victim))
    );
}

#[test]
/// Test that men capture backward only when the rules allow it.
fn man_captures_backward() {
    let board = board_of(&[
        (Side::Light, Rank::Man, Cell::new(2, 3)),
        (Side::Dark, Rank::Man, Cell::new(3, 4)),
    ]);
    let mover = at(&board, 2, 3);
    let victim = at(&board, 3, 4);
    let to = Cell::new(4, 5);
    assert_eq!(
        classify(&board, mover, to, &Rules::new(), true),
        Ok(Hop::Capture(victim))
    );
    assert!(has_capture(&board, mover, &Rules::new()));

    let forward_only = Rules {
        men_capture_backward: false,
        ..Rules::new()
    };
    assert_eq!(
        classify(&board, mover, to, &forward_only, true),
        Err(MoveError::WrongDirectionForMan {
            from: Cell::new(2, 3),
            to
        })
    );
    assert!(!has_capture(&board, mover, &forward_only));
}

#[test]
/// Test that a man may not jump over its own side or over nothing.
fn man_jumps_need_an_enemy() {
    let board = board_of(&[
        (Side::Light, Rank::Man, Cell::new(2, 5)),
        (Side::Light, Rank::Man, Cell::new(3, 4)),
        (Side::Light, Rank::Man, Cell::new(6, 5)),
    ]);
    let rules = Rules::new();
    assert_eq!(
        classify(&board, at(&board, 2, 5), Cell::new(4, 3), &rules, false),
        Err(MoveError::AmbiguousOrBlockedCapturePath {
            from: Cell::new(2, 5),
            to: Cell::new(4, 3)
        })
    );
    assert_eq!(
        classify(&board, at(&board, 6, 5), Cell::new(4, 3), &rules, false),
        Err(MoveError::NoCaptureAlongPath {
            from: Cell::new(6, 5),
            to: Cell::new(4, 3)
        })
    );
}

#[test]
/// Test that a simple move is refused when a capture is pending, for men and
/// flying kings alike.
fn simple_move_with_capture_pending() {
    let board = board_of(&[
        (Side::Light, Rank::Man, Cell::new(0, 5)),
        (Side::Light, Rank::King, Cell::new(7, 6)),
    ]);
    let rules = Rules::new();
    assert_eq!(
        classify(&board, at(&board, 0, 5), Cell::new(1, 4), &rules, true),
        Err(MoveError::MandatoryCaptureViolation {
            from: Cell::new(0, 5),
            to: Cell::new(1, 4)
        })
    );
    assert_eq!(
        classify(&board, at(&board, 7, 6), Cell::new(4, 3), &rules, true),
        Err(MoveError::MandatoryCaptureViolation {
            from: Cell::new(7, 6),
            to: Cell::new(4, 3)
        })
    );
    assert_eq!(
        classify(&board, at(&board, 7, 6), Cell::new(4, 3), &rules, false),
        Ok(Hop::Simple)
    );
}

#[test]
/// Test that a flying king captures a distant piece and may land on any empty
/// cell behind it, but never jumps two pieces at once.
fn flying_king_captures() {
    let board = board_of(&[
        (Side::Light, Rank::King, Cell::new(0, 7)),
        (Side::Dark, Rank::Man, Cell::new(3, 4)),
    ]);
    let king = at(&board, 0, 7);
    let victim = at(&board, 3, 4);
    let rules = Rules::new();
    let landings: Vec<Cell> = capture_hops(&board, king, &rules)
        .into_iter()
        .map(|h| h.landing)
        .collect();
    assert_eq!(
        landings,
        vec![Cell::new(4, 3), Cell::new(5, 2), Cell::new(6, 1), Cell::new(7, 0)]
    );
    assert_eq!(
        classify(&board, king, Cell::new(6, 1), &rules, true),
        Ok(Hop::Capture(victim))
    );

    let mut crowded = board;
    crowded.place(Side::Dark, Rank::Man, Cell::new(5, 2)).unwrap();
    assert_eq!(
        classify(&crowded, king, Cell::new(6, 1), &rules, true),
        Err(MoveError::AmbiguousOrBlockedCapturePath {
            from: Cell::new(0, 7),
            to: Cell::new(6, 1)
        })
    );
    assert_eq!(
        classify(&crowded, king, Cell::new(4, 3), &rules, true),
        Ok(Hop::Capture(victim))
    );
}

#[test]
/// Test that without flying kings, a king steps and jumps like a man which
/// can go both ways.
fn short_kings() {
    let board = board_of(&[(Side::Light, Rank::King, Cell::new(0, 7))]);
    let king = at(&board, 0, 7);
    let rules = Rules {
        flying_kings: false,
        ..Rules::new()
    };
    assert_eq!(simple_destinations(&board, king, &rules), vec![Cell::new(1, 6)]);
    assert_eq!(
        classify(&board, king, Cell::new(2, 5), &rules, false),
        Err(MoveError::NoCaptureAlongPath {
            from: Cell::new(0, 7),
            to: Cell::new(2, 5)
        })
    );
    assert_eq!(
        classify(&board, king, Cell::new(3, 4), &rules, false),
        Err(MoveError::HopTooLong {
            from: Cell::new(0, 7),
            to: Cell::new(3, 4)
        })
    );
}

#[test]
/// Test that every complete chain is enumerated, and that only the longest
/// survive the maximum capture rule.
fn longest_chains_only() {
    let board = board_of(&[
        (Side::Light, Rank::Man, Cell::new(3, 4)),
        (Side::Dark, Rank::Man, Cell::new(2, 3)),
        (Side::Dark, Rank::Man, Cell::new(4, 3)),
        (Side::Dark, Rank::Man, Cell::new(4, 1)),
    ]);
    let mover = at(&board, 3, 4);
    let rules = Rules::new();
    let all = all_sequences(&board, mover, &rules);
    assert_eq!(all.len(), 2);
    let best = maximal_sequences(&board, mover, &rules);
    assert_eq!(best.len(), 1);
    assert_eq!(best[0].len(), 2);
    assert_eq!(
        best[0].captured,
        vec![at(&board, 4, 3), at(&board, 4, 1)]
    );
    assert_eq!(best[0].start(), Some(Cell::new(3, 4)));
    assert_eq!(best[0].landing(), Some(Cell::new(3, 0)));
}

#[test]
/// Test that a man crowned partway through a chain keeps capturing as a king
/// only if the rules say so.
fn crowning_during_a_chain() {
    let board = board_of(&[
        (Side::Dark, Rank::Man, Cell::new(2, 5)),
        (Side::Light, Rank::Man, Cell::new(3, 6)),
        (Side::Light, Rank::Man, Cell::new(6, 5)),
        (Side::Light, Rank::Man, Cell::new(0, 7)),
    ]);
    let mover = at(&board, 2, 5);
    let best = maximal_sequences(&board, mover, &Rules::new());
    assert_eq!(best.len(), 1);
    assert_eq!(
        best[0].path,
        vec![Cell::new(2, 5), Cell::new(4, 7), Cell::new(7, 4)]
    );

    let late_crowning = Rules {
        promote_mid_chain: false,
        ..Rules::new()
    };
    let best = maximal_sequences(&board, mover, &late_crowning);
    assert_eq!(best.len(), 1);
    assert_eq!(best[0].path, vec![Cell::new(2, 5), Cell::new(4, 7)]);
}

#[test]
/// Test that the resolver leaves the board it was given alone.
fn resolver_does_not_mutate() {
    let board = board_of(&[
        (Side::Light, Rank::Man, Cell::new(0, 7)),
        (Side::Dark, Rank::Man, Cell::new(1, 6)),
        (Side::Dark, Rank::Man, Cell::new(3, 4)),
    ]);
    let before = board;
    let best = maximal_sequences(&board, at(&board, 0, 7), &Rules::new());
    assert_eq!(best.len(), 1);
    assert_eq!(best[0].len(), 2);
    assert_eq!(board, before);
    assert!(board.is_valid());
}

#[test]
/// Test that a piece with no capture has no sequences.
fn no_capture_no_sequences() {
    let board = Board::new();
    for (id, _) in board.pieces() {
        assert!(!has_capture(&board, id, &Rules::new()));
        assert!(maximal_sequences(&board, id, &Rules::new()).is_empty());
    }
}

#[test]
/// Test that of the five landings behind a flying king's first victim, only
/// the one which opens a second capture survives the maximum capture rule.
fn flying_king_chain_through_one_landing() {
    let board = board_of(&[
        (Side::Light, Rank::King, Cell::new(0, 7)),
        (Side::Dark, Rank::Man, Cell::new(2, 5)),
        (Side::Dark, Rank::Man, Cell::new(5, 6)),
        (Side::Dark, Rank::Man, Cell::new(1, 0)),
    ]);
    let king = at(&board, 0, 7);
    let rules = Rules::new();
    assert_eq!(capture_hops(&board, king, &rules).len(), 5);
    assert_eq!(all_sequences(&board, king, &rules).len(), 5);

    let best = maximal_sequences(&board, king, &rules);
    assert_eq!(best.len(), 1);
    assert_eq!(
        best[0].path,
        vec![Cell::new(0, 7), Cell::new(3, 4), Cell::new(6, 7)]
    );
    assert_eq!(
        best[0].captured,
        vec![at(&board, 2, 5), at(&board, 5, 6)]
    );
}

#[test]
/// Test that a sequence built with no path has no hops or landings.
fn empty_sequence_has_no_hops() {
    let seq = CaptureSequence {
        piece: at(&Board::new(), 0, 5),
        path: Vec::new(),
        captured: Vec::new(),
    };
    assert!(seq.is_empty());
    assert!(seq.landings().is_empty());
    assert_eq!(seq.hops().count(), 0);
    assert_eq!(seq.start(), None);
}
