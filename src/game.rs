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

//! Full games: turn order, capture chains in progress, and the end of the
//! game.

use super::{
    movegen::{
        capture::{has_capture, maximal_sequences, CaptureSequence},
        classify, has_simple_move, simple_destinations, Hop,
    },
    zobrist, Board, Cell, MoveError, PieceId, Rank, Rules, Side,
};

use log::{debug, info, trace};
use nohash_hasher::{IntMap, IntSet};

use std::fmt::{Display, Formatter};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// How a game ended.
pub enum GameResult {
    /// The given side won, because its opponent had no pieces or no moves.
    Win(Side),
    /// Neither side won.
    Draw,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Whose move it is, and what they may do.
pub enum TurnState {
    /// The given side may move any piece it is allowed to.
    AwaitingMove(Side),
    /// `piece` is partway through a capture chain and must keep capturing.
    Continuing { side: Side, piece: PieceId },
    /// The game is over.
    Terminal(GameResult),
}

impl TurnState {
    #[must_use]
    /// Get the side to move, or `None` if the game is over.
    pub const fn side_to_move(self) -> Option<Side> {
        match self {
            TurnState::AwaitingMove(side) | TurnState::Continuing { side, .. } => Some(side),
            TurnState::Terminal(_) => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// What happened when a move was accepted.
pub struct MoveReport {
    /// The piece that moved.
    pub piece: PieceId,
    /// The cells the piece visited, starting where it started.
    pub path: Vec<Cell>,
    /// The pieces captured and removed from the board, in order.
    pub captured: Vec<PieceId>,
    /// Whether the moving piece was crowned.
    pub promoted: bool,
    /// The state of the game after the move.
    pub state: TurnState,
    /// How the game ended, if this move ended it. A game reports its result
    /// exactly once.
    pub result: Option<GameResult>,
}

/// The result of submitting a move to a game.
pub type MoveOutcome = Result<MoveReport, MoveError>;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
/// A whole turn for one piece.
pub enum Turn {
    /// A move which captures nothing.
    Simple {
        piece: PieceId,
        from: Cell,
        to: Cell,
    },
    /// A complete maximal capture chain.
    Capture(CaptureSequence),
}

impl Turn {
    #[must_use]
    /// Get the piece which makes this turn.
    pub fn piece(&self) -> PieceId {
        match self {
            Turn::Simple { piece, .. } => *piece,
            Turn::Capture(seq) => seq.piece,
        }
    }

    #[must_use]
    /// Get the cells at which the game must be told about this turn: the
    /// destination of a simple move, or each landing of a capture chain.
    pub fn landings(&self) -> &[Cell] {
        match self {
            Turn::Simple { to, .. } => std::slice::from_ref(to),
            Turn::Capture(seq) => seq.landings(),
        }
    }
}

impl Display for Turn {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Turn::Simple { piece, from, to } => write!(f, "{piece} {from}-{to}"),
            Turn::Capture(seq) => {
                write!(f, "{}", seq.piece)?;
                for (i, cell) in seq.path.iter().enumerate() {
                    let sep = if i == 0 { " " } else { "x" };
                    write!(f, "{sep}{cell}")?;
                }
                Ok(())
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A game of draughts in progress. The game owns its board and is the only
/// thing which mutates it.
pub struct Game {
    /// The current position.
    board: Board,
    /// Whose move it is.
    state: TurnState,
    /// The rules in force.
    rules: Rules,
    /// The pieces of the side to move which have a capture available. While a
    /// chain is open, this holds only the chaining piece.
    captures: IntSet<PieceId>,
    /// The number of times each position has been reached at the start of a
    /// turn since the last irreversible move. The keys are Zobrist hashes with
    /// the side to move mixed in.
    repetitions: IntMap<u64, u8>,
    /// The number of plies since the last capture or man move.
    quiet_plies: u16,
}

impl Game {
    #[must_use]
    /// Construct a new `Game` in the standard starting position with the
    /// default rules.
    pub fn new() -> Game {
        Game::with_rules(Rules::default())
    }

    #[must_use]
    /// Construct a new `Game` in the standard starting position.
    pub fn with_rules(rules: Rules) -> Game {
        Game::from_board(Board::new(), rules.first_to_move, rules)
    }

    #[must_use]
    /// Construct a `Game` from an arbitrary position with `side` to move. If
    /// `side` has already lost in that position, the game starts out over.
    pub fn from_board(board: Board, side: Side, rules: Rules) -> Game {
        let mut game = Game {
            board,
            state: TurnState::AwaitingMove(side),
            rules,
            captures: IntSet::default(),
            repetitions: IntMap::default(),
            quiet_plies: 0,
        };
        game.begin_turn(side);
        game
    }

    #[inline(always)]
    #[must_use]
    /// Get the current position.
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline(always)]
    #[must_use]
    /// Get the current turn state.
    pub fn state(&self) -> TurnState {
        self.state
    }

    #[inline(always)]
    #[must_use]
    /// Get the rules this game is played under.
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    #[must_use]
    /// Get how the game ended, or `None` if it is still going.
    pub fn result(&self) -> Option<GameResult> {
        match self.state {
            TurnState::Terminal(result) => Some(result),
            _ => None,
        }
    }

    #[must_use]
    /// Check the crowning invariant on top of `Board::is_valid`: no man may
    /// stand on its promotion row, except the piece partway through a chain
    /// when crowning waits for the end of the chain.
    pub fn is_valid(&self) -> bool {
        let chaining = match self.state {
            TurnState::Continuing { piece, .. } => Some(piece),
            _ => None,
        };
        self.board.is_valid()
            && self
                .board
                .pieces()
                .all(|(id, p)| !p.promotes_at(p.cell) || Some(id) == chaining)
    }

    #[must_use]
    /// Get the pieces of the side to move which have a capture available,
    /// and so are the only pieces allowed to move.
    pub fn pieces_with_captures(&self) -> &IntSet<PieceId> {
        &self.captures
    }

    /// Submit a move of the piece `id` to the cell `to`.
    ///
    /// If `id` has a capture available, `to` may be any landing cell of any of
    /// its maximal capture sequences. The game applies the chain up to the
    /// earliest such landing, and keeps the same side to move if the chain is
    /// not finished. Otherwise `to` must be the destination of a simple move.
    ///
    /// # Errors
    ///
    /// This function will return an `Err` describing why the move is illegal.
    /// The game is unchanged in that case.
    pub fn submit_move(&mut self, id: PieceId, to: Cell) -> MoveOutcome {
        let outcome = self.try_submit(id, to);
        match &outcome {
            Ok(report) => {
                debug!(
                    "piece {id} moved along {:?}, capturing {:?}",
                    report.path, report.captured
                );
                trace!("position after move:\n{}", self.board);
            }
            Err(e) => debug!("rejected move of piece {id} to {to}: {e}"),
        }
        outcome
    }

    /// The body of `submit_move`, without logging.
    fn try_submit(&mut self, id: PieceId, to: Cell) -> MoveOutcome {
        let side = match self.state {
            TurnState::Terminal(_) => return Err(MoveError::MoveAfterGameOver),
            TurnState::Continuing { piece, .. } if piece != id => {
                return Err(MoveError::WrongPieceContinuingChain {
                    expected: piece,
                    given: id,
                })
            }
            TurnState::AwaitingMove(side) | TurnState::Continuing { side, .. } => side,
        };
        let piece = self.board.piece(id).ok_or(MoveError::UnknownPiece(id))?;
        if piece.side != side {
            return Err(MoveError::NotYourTurn {
                piece: id,
                side: piece.side,
            });
        }

        if self.captures.contains(&id) {
            let sequences = maximal_sequences(&self.board, id, &self.rules);
            // the earliest landing on `to` across all maximal sequences
            let chosen = sequences
                .iter()
                .filter_map(|s| s.landings().iter().position(|&c| c == to).map(|i| (s, i + 1)))
                .min_by_key(|&(_, hops)| hops);
            if let Some((seq, hops)) = chosen {
                return Ok(self.apply_capture(side, seq, hops));
            }
        }

        match classify(&self.board, id, to, &self.rules, !self.captures.is_empty())? {
            Hop::Simple => Ok(self.apply_simple(side, id, to)),
            Hop::Capture(_) => Err(MoveError::NotMaximalCapture {
                from: piece.cell,
                to,
            }),
        }
    }

    /// Crown the piece `id` if it is a man standing on its promotion row.
    /// Returns whether it was crowned.
    fn promote_if_due(&mut self, id: PieceId) -> bool {
        let due = self
            .board
            .piece(id)
            .is_some_and(|p| p.promotes_at(p.cell));
        if due {
            self.board.promote(id);
        }
        due
    }

    /// Apply a simple move, which must already have been validated.
    fn apply_simple(&mut self, side: Side, id: PieceId, to: Cell) -> MoveReport {
        let before = self.board.piece(id);
        let from = before.map_or(to, |p| p.cell);
        self.board.relocate(id, to);
        let promoted = self.promote_if_due(id);

        if before.is_some_and(|p| p.rank == Rank::Man) {
            self.irreversible();
        } else {
            self.quiet_plies = self.quiet_plies.saturating_add(1);
        }
        let result = self.begin_turn(!side);

        MoveReport {
            piece: id,
            path: vec![from, to],
            captured: Vec::new(),
            promoted,
            state: self.state,
            result,
        }
    }

    /// Apply the first `hops` hops of the maximal sequence `seq`.
    fn apply_capture(&mut self, side: Side, seq: &CaptureSequence, hops: usize) -> MoveReport {
        let id = seq.piece;
        let mut promoted = false;
        for hop in seq.hops().take(hops) {
            self.board.remove_piece(hop.captured);
            self.board.relocate(id, hop.landing);
            if self.rules.promote_mid_chain {
                promoted |= self.promote_if_due(id);
            }
        }
        self.irreversible();

        let result = if has_capture(&self.board, id, &self.rules) {
            self.state = TurnState::Continuing { side, piece: id };
            self.captures.clear();
            self.captures.insert(id);
            None
        } else {
            promoted |= self.promote_if_due(id);
            self.begin_turn(!side)
        };

        MoveReport {
            piece: id,
            path: seq.path[..=hops].to_vec(),
            captured: seq.captured[..hops].to_vec(),
            promoted,
            state: self.state,
            result,
        }
    }

    /// Note that the last move can never be undone by later moves, so no
    /// earlier position can repeat.
    fn irreversible(&mut self) {
        self.repetitions.clear();
        self.quiet_plies = 0;
    }

    /// Hand the move to `side`: recompute the mandatory captures, and check
    /// whether the game is over. Returns the result if the game just ended.
    fn begin_turn(&mut self, side: Side) -> Option<GameResult> {
        self.captures = self
            .board
            .pieces_of(side)
            .filter(|&(id, _)| has_capture(&self.board, id, &self.rules))
            .map(|(id, _)| id)
            .collect();

        let key = self.board.hash() ^ zobrist::side_key(side);
        let seen = self.repetitions.entry(key).or_insert(0);
        *seen = seen.saturating_add(1);
        let seen = *seen;

        let can_move = !self.captures.is_empty()
            || self
                .board
                .pieces_of(side)
                .any(|(id, _)| has_simple_move(&self.board, id));

        let result = if !can_move {
            Some(GameResult::Win(!side))
        } else if self.rules.repetition_limit.is_some_and(|n| seen >= n) {
            Some(GameResult::Draw)
        } else if self
            .rules
            .quiet_move_limit
            .is_some_and(|n| self.quiet_plies >= n)
        {
            Some(GameResult::Draw)
        } else {
            None
        };

        match result {
            Some(r) => {
                info!("game over: {r}");
                self.state = TurnState::Terminal(r);
                self.captures.clear();
            }
            None => self.state = TurnState::AwaitingMove(side),
        }
        result
    }

    /// Get the mover for queries about the piece `id`, or `None` if `id` may
    /// not move now.
    fn movable(&self, id: PieceId) -> Option<Side> {
        let side = match self.state {
            TurnState::Terminal(_) => return None,
            TurnState::Continuing { piece, .. } if piece != id => return None,
            TurnState::AwaitingMove(side) | TurnState::Continuing { side, .. } => side,
        };
        let piece = self.board.piece(id)?;
        if piece.side != side || (!self.captures.is_empty() && !self.captures.contains(&id)) {
            return None;
        }
        Some(side)
    }

    #[must_use]
    /// Get every cell that `submit_move` would accept as a destination for the
    /// piece `id`, sorted. Empty if the piece may not move.
    pub fn legal_destinations(&self, id: PieceId) -> Vec<Cell> {
        if self.movable(id).is_none() {
            return Vec::new();
        }
        let mut cells: Vec<Cell> = if self.captures.is_empty() {
            simple_destinations(&self.board, id, &self.rules)
        } else {
            maximal_sequences(&self.board, id, &self.rules)
                .iter()
                .flat_map(|s| s.landings().iter().copied())
                .collect()
        };
        cells.sort_unstable();
        cells.dedup();
        cells
    }

    #[must_use]
    /// Get every (piece, destination) pair that `submit_move` would accept.
    pub fn legal_moves(&self) -> Vec<(PieceId, Cell)> {
        let Some(side) = self.state.side_to_move() else {
            return Vec::new();
        };
        self.board
            .pieces_of(side)
            .flat_map(|(id, _)| {
                self.legal_destinations(id)
                    .into_iter()
                    .map(move |cell| (id, cell))
            })
            .collect()
    }

    #[must_use]
    /// Get every whole turn the side to move could play. While a chain is open,
    /// these are the possible completions of the chain.
    pub fn legal_turns(&self) -> Vec<Turn> {
        let Some(side) = self.state.side_to_move() else {
            return Vec::new();
        };
        let mut turns = Vec::new();
        for (id, piece) in self.board.pieces_of(side) {
            if self.movable(id).is_none() {
                continue;
            }
            if self.captures.is_empty() {
                turns.extend(
                    simple_destinations(&self.board, id, &self.rules)
                        .into_iter()
                        .map(|to| Turn::Simple {
                            piece: id,
                            from: piece.cell,
                            to,
                        }),
                );
            } else {
                turns.extend(
                    maximal_sequences(&self.board, id, &self.rules)
                        .into_iter()
                        .map(Turn::Capture),
                );
            }
        }
        turns
    }

    /// Play a whole turn. The turn is applied completely or not at all.
    ///
    /// # Errors
    ///
    /// This function will return an `Err` if the turn is not one of the turns
    /// in `legal_turns()`. The game is unchanged in that case.
    pub fn play_turn(&mut self, turn: &Turn) -> MoveOutcome {
        if !self.legal_turns().contains(turn) {
            return Err(match self.state {
                TurnState::Terminal(_) => MoveError::MoveAfterGameOver,
                _ => MoveError::IllegalTurn,
            });
        }

        let mut trial = self.clone();
        let id = turn.piece();
        let mut combined: Option<MoveReport> = None;
        for &landing in turn.landings() {
            let report = trial.submit_move(id, landing)?;
            combined = Some(match combined {
                None => report,
                Some(mut so_far) => {
                    so_far.path.extend_from_slice(report.path.get(1..).unwrap_or(&[]));
                    so_far.captured.extend(report.captured);
                    so_far.promoted |= report.promoted;
                    so_far.state = report.state;
                    so_far.result = report.result;
                    so_far
                }
            });
        }

        let report = combined.ok_or(MoveError::IllegalTurn)?;
        if matches!(trial.state, TurnState::Continuing { .. }) {
            return Err(MoveError::IllegalTurn);
        }
        *self = trial;
        Ok(report)
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl Display for GameResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Win(side) => write!(f, "{side} wins"),
            GameResult::Draw => write!(f, "draw"),
        }
    }
}
