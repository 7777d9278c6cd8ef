use crate::attacks::*;
use crate::boards::*;
use crate::chess_errors::*;
use crate::moves::*;
use crate::pieces::*;
use crate::positions::*;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use tracing::{debug, trace};

// -------------------------------------
// Game
// ------------------------------------

/// A Game owns the board and the side to move.
/// Implements legal move generation, move execution and check, checkmate and
/// stalemate detection. A Game must not be mutated from two threads at once;
/// callers serialize access per game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    side_to_move: Color,
}

/// Where the side to move stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Check,
    Checkmate,
    Stalemate,
}

impl Default for Game {
    fn default() -> Self {
        Game::standard_setup()
    }
}

// Public Interface
impl Game {
    /// Returns a game with the pieces placed on standard chess starting squares, white to move.
    pub fn standard_setup() -> Game {
        Game {
            board: Board::standard(),
            side_to_move: Color::White,
        }
    }

    /// Resumes a game from an arbitrary position.
    pub fn from_board(board: Board, side_to_move: Color) -> Game {
        Game {
            board,
            side_to_move,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    /// Legal moves of the piece on `from`. `None` if the square is empty,
    /// `Some(vec![])` if the piece has nowhere to go.
    pub fn valid_moves(&self, from: Square) -> Option<Vec<Move>> {
        let piece = self.board.piece_at(from)?;
        let moves = candidate_moves(&self.board, from)
            .into_iter()
            .filter(|mv| {
                let exposes = leaves_king_attacked(&self.board, mv, piece.color);
                if exposes {
                    trace!(%mv, "candidate leaves own king attacked");
                }
                !exposes
            })
            .collect();
        Some(moves)
    }

    /// Every legal move of `color`, regardless of whose turn it is.
    pub fn all_valid_moves(&self, color: Color) -> Vec<Move> {
        self.board
            .pieces()
            .filter(|(_, p)| p.color == color)
            .filter_map(|(sq, _)| self.valid_moves(sq))
            .flatten()
            .collect()
    }

    /// Executes a move if legal and passes the turn. On error the game is untouched.
    pub fn make_move(&mut self, mv: &Move) -> ChessResult<()> {
        let piece = self
            .board
            .piece_at(mv.from)
            .ok_or_else(|| ChessError::invalid_move(mv, InvalidMoveReason::NoPiece))?;
        if piece.color != self.side_to_move {
            return Err(ChessError::invalid_move(mv, InvalidMoveReason::WrongTurn));
        }

        let legal = self.valid_moves(mv.from).unwrap_or_default();
        if !legal.contains(mv) {
            return Err(ChessError::invalid_move(mv, self.rejection_reason(mv, &legal)));
        }

        let applied = self.board.apply(mv);
        debug_assert!(applied, "legal move {} from an empty square", mv);
        self.side_to_move = self.side_to_move.opposite();
        debug!(%mv, next = %self.side_to_move, "move applied");
        Ok(())
    }

    /// Whether any enemy piece could capture the king of `color` right now.
    pub fn is_in_check(&self, color: Color) -> ChessResult<bool> {
        let king = self
            .board
            .king_square(color)
            .ok_or(ChessError::MissingKing(color))?;
        Ok(threatens(&self.board, king, color.opposite()))
    }

    pub fn is_in_checkmate(&self, color: Color) -> ChessResult<bool> {
        Ok(self.is_in_check(color)? && !self.has_any_valid_move(color))
    }

    pub fn is_in_stalemate(&self, color: Color) -> ChessResult<bool> {
        Ok(!self.is_in_check(color)? && !self.has_any_valid_move(color))
    }

    /// Status of the side to move.
    pub fn status(&self) -> ChessResult<GameStatus> {
        let color = self.side_to_move;
        let check = self.is_in_check(color)?;
        let can_move = self.has_any_valid_move(color);
        Ok(match (check, can_move) {
            (true, false) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check,
            (false, true) => GameStatus::InProgress,
        })
    }

    pub fn to_json(&self) -> ChessResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(s: &str) -> ChessResult<Game> {
        Ok(serde_json::from_str(s)?)
    }
}

// Legality helpers
impl Game {
    fn has_any_valid_move(&self, color: Color) -> bool {
        self.board
            .pieces()
            .filter(|(_, p)| p.color == color)
            .any(|(sq, _)| self.valid_moves(sq).map_or(false, |m| !m.is_empty()))
    }

    /// Tells a bad promotion apart from a plain impossible move.
    fn rejection_reason(&self, mv: &Move, legal: &[Move]) -> InvalidMoveReason {
        let same_squares = legal.iter().any(|m| m.from == mv.from && m.to == mv.to);
        let bad_choice = mv.promotion.map_or(false, |p| !p.is_promotion_choice());
        if same_squares || bad_choice {
            InvalidMoveReason::InvalidPromotion
        } else {
            InvalidMoveReason::NotValid
        }
    }
}

/// Plays `mv` on a scratch copy and tests whether `color`'s king is then attacked.
/// A side without a king cannot be exposed.
fn leaves_king_attacked(board: &Board, mv: &Move, color: Color) -> bool {
    let mut scratch = board.clone();
    let applied = scratch.apply(mv);
    debug_assert!(applied, "candidate {} from an empty square", mv);
    scratch
        .king_square(color)
        .map_or(false, |king| threatens(&scratch, king, color.opposite()))
}

impl Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "To move: {}\n{}", self.side_to_move, self.board)
    }
}
