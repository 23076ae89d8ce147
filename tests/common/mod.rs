#![allow(dead_code)]

use anyhow::{Context, Result, anyhow};
use std::io::Write;
use std::process::{Command, Output, Stdio};

use four_in_a_row::board::CellIdx;

/// Cells for player one that, together with `DRAW_NOUGHT`, fill the board with no winner
/// x x o o x
/// o o x x o
/// x x o o x
/// o o x x o
/// x x o o x
pub const DRAW_CROSS: [CellIdx; 13] = [
    [0, 0],
    [0, 1],
    [0, 4],
    [1, 2],
    [1, 3],
    [2, 0],
    [2, 1],
    [2, 4],
    [3, 2],
    [3, 3],
    [4, 0],
    [4, 1],
    [4, 4],
];

pub const DRAW_NOUGHT: [CellIdx; 12] = [
    [0, 2],
    [0, 3],
    [1, 0],
    [1, 1],
    [1, 4],
    [2, 2],
    [2, 3],
    [3, 0],
    [3, 1],
    [3, 4],
    [4, 2],
    [4, 3],
];

/// Moves alternating between both players, player one first
pub fn alternate(cross: &[CellIdx], nought: &[CellIdx]) -> Vec<CellIdx> {
    let mut moves = Vec::with_capacity(cross.len() + nought.len());
    let mut nought = nought.iter();
    for &idx in cross {
        moves.push(idx);
        moves.extend(nought.next());
    }
    moves.extend(nought);
    moves
}

/// Lines of input typing the given moves, space separated
pub fn script(moves: &[CellIdx]) -> String {
    moves
        .iter()
        .map(|[row, col]| format!("{row} {col}\n"))
        .collect()
}

/// Run the game binary with `input` piped to its standard input
pub fn run_binary(input: &str) -> Result<Output> {
    let path = env!("CARGO_BIN_EXE_four-in-a-row");
    let mut process = Command::new(path)
        .env("RUST_LOG", "debug")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .context("Failed to spawn game")?;

    process
        .stdin
        .take()
        .ok_or(anyhow!("Game standard input unavailable"))?
        .write_all(input.as_bytes())
        .context("Failed to write moves")?;

    process
        .wait_with_output()
        .context("Failed to wait for game")
}
