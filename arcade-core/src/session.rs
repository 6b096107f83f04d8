//! Game session controller.
//!
//! A [`GameSession`] owns the authoritative board for one game and is the
//! only thing that mutates it. The host applies human moves through
//! [`GameSession::apply_move`] and, when the configured AI seat holds the
//! turn, calls [`GameSession::maybe_run_ai`]; both paths run the same
//! validation, terminal detection, and event reporting. Any AI "thinking"
//! delay is a presentation concern the host applies around these calls.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::GameError;
use crate::search::{self, Difficulty};
use crate::{Board, Player};

/// Session status. Terminal states are absorbing.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Status {
    Playing,
    Won(Player),
    Draw,
}

impl Status {
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != Status::Playing
    }
}

/// What the rules decide after a move has been applied.
#[derive(Clone, Copy, Debug)]
pub enum TurnOutcome {
    /// Game over with the final status.
    Over(Status),
    /// Play continues with this player to move.
    Next(Player),
    /// The named player is stuck; the turn returns to the mover without
    /// consuming a round.
    Pass { stuck: Player },
}

/// Variant-specific game rules behind one session controller.
///
/// Implementations must validate before mutating: a rejected `apply`
/// leaves the board untouched.
pub trait Rules {
    /// The move shape for this variant (a column index, a coordinate, ...).
    type Move: Copy + Eq + std::fmt::Debug;

    fn initial_board(&self) -> Board;

    fn legal_moves(&self, board: &Board, player: Player) -> Vec<Self::Move>;

    fn apply(&self, board: &mut Board, mv: Self::Move, player: Player) -> Result<(), GameError>;

    /// Resolve terminal conditions and the next player after `mover` moved.
    fn resolve_turn(&self, board: &Board, mover: Player) -> TurnOutcome;

    /// Pick a move for an AI-controlled player, or `None` if it has no
    /// legal move.
    fn choose_ai_move<R: Rng + ?Sized>(
        &self,
        board: &Board,
        player: Player,
        difficulty: Difficulty,
        max_depth: u32,
        rng: &mut R,
    ) -> Option<Self::Move>;
}

/// Session configuration supplied by the host at creation.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Whether one seat is AI-controlled.
    pub ai_enabled: bool,
    /// Which seat the AI plays.
    pub ai_player: Player,
    pub difficulty: Difficulty,
    /// Depth limit for the medium tier.
    pub search_depth: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            ai_enabled: false,
            ai_player: Player::Two,
            difficulty: Difficulty::default(),
            search_depth: search::DEFAULT_DEPTH,
        }
    }
}

/// Events surfaced to the host after each applied move.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum GameEvent {
    MoveApplied { player: Player },
    TurnPassed { stuck: Player },
    GameOver { status: Status },
}

/// Result of one applied move.
#[derive(Clone, Debug, PartialEq)]
pub struct MoveOutcome {
    pub status: Status,
    pub current_player: Player,
    pub events: Vec<GameEvent>,
}

/// One game in progress: board, player to move, status, and configuration.
#[derive(Clone, Debug)]
pub struct GameSession<G: Rules> {
    rules: G,
    config: SessionConfig,
    board: Board,
    current: Player,
    status: Status,
}

impl<G: Rules> GameSession<G> {
    /// Start a fresh game: initial board, PlayerOne to move.
    pub fn new(rules: G, config: SessionConfig) -> GameSession<G> {
        let board = rules.initial_board();
        GameSession {
            rules,
            config,
            board,
            current: Player::One,
            status: Status::Playing,
        }
    }

    /// Start from an arbitrary position, e.g. for analysis or tests.
    pub fn from_position(
        rules: G,
        config: SessionConfig,
        board: Board,
        to_move: Player,
    ) -> GameSession<G> {
        GameSession {
            rules,
            config,
            board,
            current: to_move,
            status: Status::Playing,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn current_player(&self) -> Player {
        self.current
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    #[inline]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Legal moves for the player to move.
    pub fn legal_moves(&self) -> Vec<G::Move> {
        self.rules.legal_moves(&self.board, self.current)
    }

    /// Live piece counts as (player one, player two).
    pub fn scores(&self) -> (usize, usize) {
        (self.board.count(Player::One), self.board.count(Player::Two))
    }

    /// Apply a move for the player to move.
    ///
    /// Rejected moves (illegal, out of range, or after the game ended)
    /// surface an error and leave the session unchanged.
    pub fn apply_move(&mut self, mv: G::Move) -> Result<MoveOutcome, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver);
        }

        let mover = self.current;
        self.rules.apply(&mut self.board, mv, mover)?;

        let mut events = vec![GameEvent::MoveApplied { player: mover }];
        match self.rules.resolve_turn(&self.board, mover) {
            TurnOutcome::Over(status) => {
                self.status = status;
                events.push(GameEvent::GameOver { status });
            }
            TurnOutcome::Next(player) => {
                self.current = player;
            }
            TurnOutcome::Pass { stuck } => {
                events.push(GameEvent::TurnPassed { stuck });
            }
        }

        debug!(?mover, ?mv, status = ?self.status, "move applied");
        Ok(MoveOutcome {
            status: self.status,
            current_player: self.current,
            events,
        })
    }

    /// Run the AI if it is enabled and holds the turn. Returns `None`
    /// when there is nothing for the AI to do.
    pub fn maybe_run_ai<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Option<MoveOutcome>, GameError> {
        if !self.config.ai_enabled
            || self.status.is_terminal()
            || self.current != self.config.ai_player
        {
            return Ok(None);
        }

        let mv = self.rules.choose_ai_move(
            &self.board,
            self.current,
            self.config.difficulty,
            self.config.search_depth,
            rng,
        );
        match mv {
            Some(mv) => self.apply_move(mv).map(Some),
            None => {
                trace!(player = ?self.current, "ai has no legal move");
                Ok(None)
            }
        }
    }

    /// Start over: fresh board, PlayerOne to move, status Playing.
    pub fn reset(&mut self) {
        self.board = self.rules.initial_board();
        self.current = Player::One;
        self.status = Status::Playing;
    }
}
