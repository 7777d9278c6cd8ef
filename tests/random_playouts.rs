use chessgame::{Color, Game, GameStatus, Move, Square};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const SEED: u64 = 42;
const GAMES: usize = 6;
const MAX_PLIES: usize = 80;

fn random_square(rng: &mut impl Rng) -> Square {
    Square::new(rng.gen_range(1..=8), rng.gen_range(1..=8))
}

/// Plays random legal moves and checks the game invariants after every ply.
#[test]
fn random_games_keep_invariants() {
    let rng = &mut SmallRng::seed_from_u64(SEED);

    for _ in 0..GAMES {
        let mut g = Game::standard_setup();

        for _ in 0..MAX_PLIES {
            let side = g.side_to_move();
            let mate = g.is_in_checkmate(side).unwrap();
            let stale = g.is_in_stalemate(side).unwrap();
            assert!(!(mate && stale), "both mate and stalemate:\n{}", g);

            let moves = g.all_valid_moves(side);
            assert_eq!(moves.is_empty(), mate || stale);
            if moves.is_empty() {
                break;
            }

            // Promotions always come in fours.
            for m in moves.iter().filter(|m| m.promotion.is_some()) {
                let siblings = moves
                    .iter()
                    .filter(|o| o.from == m.from && o.to == m.to)
                    .count();
                assert_eq!(siblings, 4);
            }

            // A random pair of squares is either legal or leaves the game untouched.
            let probe = Move::new(random_square(rng), random_square(rng));
            let before = g.clone();
            let mut scratch = g.clone();
            match scratch.make_move(&probe) {
                Ok(()) => assert!(moves.contains(&probe)),
                Err(_) => assert_eq!(scratch, before),
            }

            let chosen = moves.choose(rng).unwrap().clone();
            g.make_move(&chosen).unwrap();
            assert_eq!(g.side_to_move(), side.opposite());
            // Nobody may end their own move in check.
            assert!(!g.is_in_check(side).unwrap(), "{} left in check:\n{}", side, g);
        }

        let status = g.status().unwrap();
        if status == GameStatus::Checkmate {
            assert!(g.is_in_check(g.side_to_move()).unwrap());
        }
    }
}

#[test]
fn both_colors_see_the_same_moves_from_the_start() {
    let g = Game::standard_setup();
    let mut black = g.clone();
    black.set_side_to_move(Color::Black);
    assert_eq!(
        g.all_valid_moves(Color::White).len(),
        black.all_valid_moves(Color::Black).len()
    );
}
