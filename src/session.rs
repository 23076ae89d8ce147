//! Terminal session
//! Reads moves line by line, reports errors back to the player and renders the board

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::{
    board::player::Player,
    game::{Game, GameResult, GameStatus},
    input::{Separator, parse_move},
};

/// Session settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Separator between row and column in typed moves
    pub separator: Separator,
    /// Offer another game once one is over
    pub rematch: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            separator: Separator::Space,
            rematch: true,
        }
    }
}

/// Fatal session errors, the game cannot go on
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Input stream closed in the middle of a game")]
    InputClosed,
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Interactive game session over a line based input and a text output
#[derive(Debug)]
pub struct Session<R, W> {
    input: R,
    output: W,
    config: Config,
    game: Game,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: Config) -> Self {
        Self {
            input,
            output,
            config,
            game: Game::new(),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Play games until the players stop asking for a rematch
    pub fn run(&mut self) -> Result<Vec<GameResult>, SessionError> {
        let mut results = Vec::new();
        loop {
            let result = self.play_game()?;
            results.push(result);
            if !self.config.rematch || !self.ask_rematch()? {
                break;
            }
            self.game.reset();
        }
        log::info!("Session finished after {n} game(s)", n = results.len());
        Ok(results)
    }

    /// Play the current game until it is won or drawn
    pub fn play_game(&mut self) -> Result<GameResult, SessionError> {
        log::info!("Starting game");
        loop {
            match self.game.status() {
                GameStatus::Playing { .. } => {
                    writeln!(self.output, "{}", self.game)?;
                    self.take_turn()?;
                }
                GameStatus::Finished(result) => {
                    writeln!(self.output, "\n{}", self.game)?;
                    self.output.flush()?;
                    log::info!("Game finished with result: {result:?}");
                    log::debug!("Moves played: {:?}", self.game.history());
                    return Ok(result);
                }
            }
        }
    }

    /// Read lines until the current player makes a legal move
    ///
    /// Rejected lines are reported and the same player is asked again.
    pub fn take_turn(&mut self) -> Result<GameStatus, SessionError> {
        let GameStatus::Playing { player, turn } = self.game.status() else {
            return Ok(self.game.status());
        };
        log::trace!("Turn {turn} board:\n{}", self.game.board());

        loop {
            self.prompt(player)?;
            let line = self.read_line()?.ok_or(SessionError::InputClosed)?;

            let idx = match parse_move(&line, self.config.separator) {
                Ok(idx) => idx,
                Err(e) => {
                    log::warn!("Player '{player}' sent an invalid command {line:?}: {e}");
                    writeln!(self.output, "{e}")?;
                    continue;
                }
            };

            match self.game.make_move(idx) {
                Ok(status) => return Ok(status),
                Err(e) => {
                    log::warn!("Player '{player}' made an invalid move {idx:?}: {e}");
                    writeln!(self.output, "{e}")?;
                }
            }
        }
    }

    fn prompt(&mut self, player: Player) -> io::Result<()> {
        write!(
            self.output,
            "Player '{player}', enter row and column (e.g. \"0{sep}1\"): ",
            sep = self.config.separator.char()
        )?;
        self.output.flush()
    }

    /// Ask whether to play again, end of input counts as a no
    fn ask_rematch(&mut self) -> Result<bool, SessionError> {
        write!(self.output, "Play again? [y/N] ")?;
        self.output.flush()?;
        let answer = self.read_line()?.unwrap_or_default();
        let rematch = matches!(answer.trim().to_lowercase().as_str(), "y" | "yes");
        log::debug!("Rematch: {rematch}");
        Ok(rematch)
    }

    /// Next line of input, `None` at end of input
    ///
    /// Invalid UTF-8 is replaced rather than failing, the move parser rejects the line.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}
