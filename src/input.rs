use std::fmt::Display;

use itertools::Itertools;
use thiserror::Error;

use crate::board::CellIdx;

/// Character expected between row and column in a typed move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Separator {
    /// `"0 1"`
    #[default]
    Space,
    /// `"0,1"`
    Comma,
}

impl Separator {
    pub const fn char(&self) -> char {
        match self {
            Separator::Space => ' ',
            Separator::Comma => ',',
        }
    }
}

impl Display for Separator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}'", self.char())
    }
}

/// Errors produced when a line of text is not a move
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Command must contain a {separator} between row and column")]
    MissingSeparator { separator: Separator },
    #[error("Command must contain exactly a row and a column, found {0} values")]
    WrongArity(usize),
    #[error("'{token}' is not a valid row or column number")]
    NotAnInteger { token: String },
}

/// Parse a move such as `"0 1"` into `[row, col]`
///
/// Coordinates are not checked against the board here.
pub fn parse_move(text: &str, separator: Separator) -> Result<CellIdx, ParseError> {
    let text = text.trim();

    if !text.contains(separator.char()) {
        return Err(ParseError::MissingSeparator { separator });
    }

    let tokens = match separator {
        Separator::Space => text.split_whitespace().collect_vec(),
        Separator::Comma => text.split(',').map(str::trim).collect_vec(),
    };

    let [row, col] = tokens[..] else {
        return Err(ParseError::WrongArity(tokens.len()));
    };

    Ok([parse_coordinate(row)?, parse_coordinate(col)?])
}

fn parse_coordinate(token: &str) -> Result<usize, ParseError> {
    token.parse().map_err(|_| ParseError::NotAnInteger {
        token: token.to_owned(),
    })
}
