use std::fmt::Display;

/// Number of players in a game
pub const PLAYER_COUNT: usize = 2;

/// Players, identified by the mark they place on the board
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Player {
    /// Player one, always opens the game
    Cross,
    /// Player two
    Nought,
}

impl Player {
    /// List all player variants in turn order
    pub const fn variants() -> [Player; PLAYER_COUNT] {
        [Player::Cross, Player::Nought]
    }

    pub const fn opponent(&self) -> Self {
        match self {
            Player::Cross => Player::Nought,
            Player::Nought => Player::Cross,
        }
    }

    /// Character placed on the board for this player
    pub const fn mark(&self) -> char {
        match self {
            Player::Cross => 'x',
            Player::Nought => 'o',
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mark())
    }
}
