use crate::moves::Move;
use crate::pieces::Color;
use std::fmt;

// ---------------------------------------------
// Error Handling
// ---------------------------------------------

/// Why `Game::make_move` refused a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveReason {
    NoPiece,
    WrongTurn,
    NotValid,
    InvalidPromotion,
}

impl fmt::Display for InvalidMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use InvalidMoveReason::*;
        let text = match self {
            NoPiece => "no piece on the start square",
            WrongTurn => "it is not that side's turn",
            NotValid => "not a valid move for that piece",
            InvalidPromotion => "invalid promotion",
        };
        write!(f, "{}", text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    #[error("Invalid move {mv}: {reason}")]
    InvalidMove { mv: Move, reason: InvalidMoveReason },

    /// The queried side has no king. Only happens on hand-built positions.
    #[error("Malformed position: no {0} king on the board")]
    MissingKing(Color),

    #[error("Invalid chess square {0:?}")]
    InvalidSquare(String),

    #[error("Invalid move notation {0:?}")]
    InvalidNotation(String),

    #[error("Invalid board diagram: {0}")]
    InvalidDiagram(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),
}

pub type ChessResult<T> = std::result::Result<T, ChessError>;

impl ChessError {
    pub fn invalid_move(mv: &Move, reason: InvalidMoveReason) -> ChessError {
        ChessError::InvalidMove {
            mv: mv.clone(),
            reason,
        }
    }
}

impl From<serde_json::Error> for ChessError {
    fn from(e: serde_json::Error) -> ChessError {
        ChessError::Serialization(e.to_string())
    }
}
