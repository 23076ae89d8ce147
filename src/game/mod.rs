//! Turn controller
//! Alternates the active player, enforces move legality and detects the end of the game

use std::fmt::Display;

use thiserror::Error;

use crate::{
    board::{Board, BoardError, CELL_COUNT, CellIdx, player::Player},
    detector::{self, Outcome},
};

/// Last turn that can be played, one per cell
pub const MAX_TURNS: usize = CELL_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Victory { player: Player },
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Game is ongoing, `turn` is 1-indexed
    Playing { player: Player, turn: usize },
    /// Game finished
    Finished(GameResult),
}

impl GameStatus {
    /// Opening state of every game
    pub const fn initial() -> Self {
        GameStatus::Playing {
            player: Player::Cross,
            turn: 1,
        }
    }
}

/// Errors that can occur when making a move
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error("The game is already finished")]
    GameFinished,
}

#[derive(Debug, Clone)]
pub struct Game {
    /// Board state
    board: Board,
    /// Game status
    status: GameStatus,
    /// Accepted moves in the order they were played
    history: Vec<CellIdx>,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            status: GameStatus::initial(),
            history: Vec::with_capacity(MAX_TURNS),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn history(&self) -> &[CellIdx] {
        &self.history
    }

    /// Start over on the same board
    pub fn reset(&mut self) {
        self.board.reset();
        self.status = GameStatus::initial();
        self.history.clear();
    }

    /// Claim the cell `[row, col]` for the current player
    ///
    /// An illegal move leaves the game untouched.
    pub fn make_move(&mut self, [row, col]: CellIdx) -> Result<GameStatus, GameError> {
        match self.status {
            GameStatus::Finished(_) => Err(GameError::GameFinished),
            GameStatus::Playing { player, turn } => {
                self.board.set(row, col, player)?;
                self.history.push([row, col]);
                self.status = self.next_status(player, turn);
                log::debug!(
                    "Player '{player}' claimed ({row}, {col}) on turn {turn}: {status:?}",
                    status = self.status
                );
                Ok(self.status)
            }
        }
    }

    /// Status following a move by `player` on `turn`
    fn next_status(&self, player: Player, turn: usize) -> GameStatus {
        match detector::evaluate(&self.board) {
            Outcome::Winner { player, family } => {
                log::debug!("Player '{player}' connected four along {family:?}");
                GameStatus::Finished(GameResult::Victory { player })
            }
            Outcome::NoWinner if turn + 1 > MAX_TURNS => GameStatus::Finished(GameResult::Draw),
            Outcome::NoWinner => GameStatus::Playing {
                player: player.opponent(),
                turn: turn + 1,
            },
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status {
            GameStatus::Playing { player, .. } => {
                writeln!(f, "Current player: '{player}'")?;
                writeln!(f)?;
            }
            GameStatus::Finished(GameResult::Draw) => writeln!(f, "Game Over: It's a draw!")?,
            GameStatus::Finished(GameResult::Victory { player }) => {
                writeln!(f, "Game Over:")?;
                writeln!(f, "Player '{player}' has won!")?;
            }
        }
        write!(f, "{}", self.board)
    }
}
