use crate::board::{Board, CellIdx, GRID_SIZE, player::Player};

/// Number of contiguous marks forming a winning line
pub const WIN_LENGTH: usize = 4;

/// Families of lines scanned for a winning run
///
/// Only the two corner-to-corner diagonals are winning lines,
/// shorter diagonals never count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineFamily {
    /// Each row, left to right
    Row,
    /// Each column, top to bottom
    Column,
    /// From `[0, 0]` down to `[4, 4]`
    MainDiagonal,
    /// From `[0, 4]` down to `[4, 0]`
    AntiDiagonal,
}

/// A scanned line, indices in scan order
pub type Line = [CellIdx; GRID_SIZE];

impl LineFamily {
    /// List all line families in scan order
    pub const fn variants() -> [LineFamily; 4] {
        [
            LineFamily::Row,
            LineFamily::Column,
            LineFamily::MainDiagonal,
            LineFamily::AntiDiagonal,
        ]
    }

    /// All lines belonging to this family
    pub fn lines(&self) -> Vec<Line> {
        match self {
            LineFamily::Row => (0..GRID_SIZE)
                .map(|row| std::array::from_fn(|col| [row, col]))
                .collect(),
            LineFamily::Column => (0..GRID_SIZE)
                .map(|col| std::array::from_fn(|row| [row, col]))
                .collect(),
            LineFamily::MainDiagonal => vec![std::array::from_fn(|i| [i, i])],
            LineFamily::AntiDiagonal => vec![std::array::from_fn(|i| [i, GRID_SIZE - 1 - i])],
        }
    }
}

/// Result of scanning a board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    NoWinner,
    Winner { player: Player, family: LineFamily },
}

impl Outcome {
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::NoWinner => None,
            Outcome::Winner { player, .. } => Some(*player),
        }
    }
}

/// Check a single line for `WIN_LENGTH` contiguous marks of `player`
fn has_contiguous_run(board: &Board, line: &Line, player: Player) -> bool {
    let mut contiguous_count = 0;
    for &idx in line {
        if board[idx].mark() == Some(player) {
            contiguous_count += 1;
            if contiguous_count == WIN_LENGTH {
                return true;
            }
        } else {
            contiguous_count = 0;
        }
    }
    false
}

/// First line family in which `player` has four connected marks
pub fn four_connected(board: &Board, player: Player) -> Option<LineFamily> {
    LineFamily::variants().into_iter().find(|family| {
        family
            .lines()
            .iter()
            .any(|line| has_contiguous_run(board, line, player))
    })
}

/// Scan the board for a winner
///
/// Player one's lines are all scanned before player two's.
pub fn evaluate(board: &Board) -> Outcome {
    Player::variants()
        .into_iter()
        .find_map(|player| {
            four_connected(board, player).map(|family| Outcome::Winner { player, family })
        })
        .unwrap_or(Outcome::NoWinner)
}
