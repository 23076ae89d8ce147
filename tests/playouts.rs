use rand::{Rng, seq::IndexedRandom};
use rand_xoshiro::{Xoshiro256PlusPlus, rand_core::SeedableRng};

use four_in_a_row::{
    board::{CellIdx, GRID_SIZE},
    detector::{self, Outcome},
    game::{Game, GameError, GameResult, GameStatus, MAX_TURNS},
};

const PLAYOUTS: u64 = 500;

/// Play random legal moves until the game ends
fn playout(rng: &mut Xoshiro256PlusPlus) -> Game {
    let mut game = Game::new();
    while let GameStatus::Playing { player, turn } = game.status() {
        assert_eq!(turn, game.history().len() + 1);
        assert!(turn <= MAX_TURNS);

        // Throw in some illegal attempts, they must not change anything
        let wild: CellIdx = [
            rng.random_range(0..GRID_SIZE + 2),
            rng.random_range(0..GRID_SIZE + 2),
        ];
        let before = game.status();
        match game.make_move(wild) {
            Ok(_) => {
                assert_eq!(game.board()[wild].mark(), Some(player));
                continue;
            }
            Err(GameError::Board(_)) => assert_eq!(game.status(), before),
            Err(GameError::GameFinished) => panic!("Game is still playing"),
        }

        let available = game.board().available_cells().collect::<Vec<_>>();
        let idx = *available.choose(rng).expect("Board can't be full while playing");
        game.make_move(idx).expect("Available cell is a legal move");
    }
    game
}

#[test]
fn test_random_playouts_terminate_consistently() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(0x5eed);
    let mut draws = 0;

    for _ in 0..PLAYOUTS {
        let game = playout(&mut rng);
        assert!(game.history().len() <= MAX_TURNS);

        match game.status() {
            GameStatus::Finished(GameResult::Draw) => {
                draws += 1;
                assert_eq!(game.history().len(), MAX_TURNS);
                assert!(game.board().is_full());
                assert_eq!(detector::evaluate(game.board()), Outcome::NoWinner);
            }
            GameStatus::Finished(GameResult::Victory { player }) => {
                assert_eq!(detector::evaluate(game.board()).winner(), Some(player));
                // The winner made the last move
                let last = *game.history().last().expect("At least one move");
                assert_eq!(game.board()[last].mark(), Some(player));
            }
            GameStatus::Playing { .. } => panic!("Playout stopped early"),
        }
    }

    assert!(draws < PLAYOUTS, "Some random games should be won");
}

#[test]
fn test_moves_after_the_end_are_rejected() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
    let mut game = playout(&mut rng);
    let history = game.history().to_vec();

    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            assert_eq!(game.make_move([row, col]), Err(GameError::GameFinished));
        }
    }
    assert_eq!(game.history(), &history[..]);
}
