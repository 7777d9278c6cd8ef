use crate::chess_errors::*;
use crate::game_state::*;
use crate::moves::Move;
use crate::pieces::Color;
use std::fmt;
use tracing::{debug, info};

/// An agent is an object that can play chess by choosing moves appropriate to a
/// current game state.
pub trait Agent {
    /// Picks the next move for the side to move. `None` abandons the game.
    fn play_move(&mut self, game: &Game) -> ChessResult<Option<Move>>;

    /// Called when the game refused the chosen move. Returning `Ok` asks again.
    fn rejected(&mut self, err: &ChessError) -> ChessResult<()> {
        Err(err.clone())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Checkmate { winner: Color },
    Stalemate,
    Abandoned { by: Color },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Checkmate { winner } => write!(f, "Checkmate, {} wins", winner),
            Outcome::Stalemate => write!(f, "Stalemate"),
            Outcome::Abandoned { by } => write!(f, "{} left the game", by),
        }
    }
}

/// Two agents taking turns on one game until it ends.
pub struct Match<A1: Agent, A2: Agent> {
    white: A1,
    black: A2,
    game: Game,
}

impl<A1: Agent, A2: Agent> Match<A1, A2> {
    pub fn new(white: A1, black: A2) -> Match<A1, A2> {
        Match::from_game(Game::standard_setup(), white, black)
    }

    pub fn from_game(game: Game, white: A1, black: A2) -> Match<A1, A2> {
        Match { white, black, game }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn play(&mut self) -> ChessResult<Outcome> {
        loop {
            let side = self.game.side_to_move();
            match self.game.status()? {
                GameStatus::Checkmate => {
                    let outcome = Outcome::Checkmate {
                        winner: side.opposite(),
                    };
                    info!(%outcome, "game over");
                    return Ok(outcome);
                }
                GameStatus::Stalemate => {
                    info!(outcome = %Outcome::Stalemate, "game over");
                    return Ok(Outcome::Stalemate);
                }
                GameStatus::Check | GameStatus::InProgress => {}
            }

            let agent: &mut dyn Agent = match side {
                Color::White => &mut self.white,
                Color::Black => &mut self.black,
            };
            let mv = match agent.play_move(&self.game)? {
                Some(mv) => mv,
                None => {
                    info!(%side, "game abandoned");
                    return Ok(Outcome::Abandoned { by: side });
                }
            };

            match self.game.make_move(&mv) {
                Ok(()) => debug!(%side, %mv, "turn played"),
                Err(err @ ChessError::InvalidMove { .. }) => agent.rejected(&err)?,
                Err(err) => return Err(err),
            }
        }
    }
}
