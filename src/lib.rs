//! Chess rules: legal move generation, move execution and check, checkmate
//! and stalemate detection on a standard 8x8 board.
//!
//! No castling, en passant or draw rules.
#[macro_use]
extern crate impl_ops;

pub mod agents;
pub mod attacks;
pub mod boards;
pub mod chess_errors;
pub mod config;
pub mod game;
pub mod game_state;
pub mod moves;
pub mod pieces;
pub mod positions;
pub mod utils;

pub use boards::Board;
pub use chess_errors::{ChessError, ChessResult, InvalidMoveReason};
pub use game_state::{Game, GameStatus};
pub use moves::Move;
pub use pieces::{Color, Piece, PieceType};
pub use positions::Square;
