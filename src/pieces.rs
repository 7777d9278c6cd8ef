use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

// ---------------------------------------------
// Pieces
// ---------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Color {
    White,
    Black,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// A piece is a plain value. Replacing a piece on the board means placing a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub piece_type: PieceType,
}

/// How a board is drawn on a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphStyle {
    Unicode,
    Ascii,
}

impl Color {
    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a forward pawn step.
    pub fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank from which a pawn may double step.
    pub fn pawn_home_row(self) -> u8 {
        match self {
            Color::White => 2,
            Color::Black => 7,
        }
    }

    /// Rank on which a pawn promotes.
    pub fn promotion_row(self) -> u8 {
        match self {
            Color::White => 8,
            Color::Black => 1,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

impl PieceType {
    /// Lowercase letter used in move and diagram notation.
    pub fn letter(self) -> char {
        use PieceType::*;
        match self {
            Pawn => 'p',
            Knight => 'n',
            Bishop => 'b',
            Rook => 'r',
            Queen => 'q',
            King => 'k',
        }
    }

    pub fn from_letter(c: char) -> Option<PieceType> {
        use PieceType::*;
        match c.to_ascii_lowercase() {
            'p' => Some(Pawn),
            'n' => Some(Knight),
            'b' => Some(Bishop),
            'r' => Some(Rook),
            'q' => Some(Queen),
            'k' => Some(King),
            _ => None,
        }
    }

    /// Pieces a pawn may turn into.
    pub fn is_promotion_choice(self) -> bool {
        !matches!(self, PieceType::Pawn | PieceType::King)
    }
}

impl Piece {
    pub const fn new(color: Color, piece_type: PieceType) -> Piece {
        Piece { color, piece_type }
    }

    /// Diagram letter: uppercase for white, lowercase for black.
    pub fn to_char(self) -> char {
        let c = self.piece_type.letter();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn from_char(c: char) -> Option<Piece> {
        let piece_type = PieceType::from_letter(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(color, piece_type))
    }

    pub fn glyph(self, style: GlyphStyle) -> char {
        use Color::*;
        use PieceType::*;

        if style == GlyphStyle::Ascii {
            return self.to_char();
        }
        match (self.color, self.piece_type) {
            (White, King) => '\u{2654}',
            (White, Queen) => '\u{2655}',
            (White, Rook) => '\u{2656}',
            (White, Bishop) => '\u{2657}',
            (White, Knight) => '\u{2658}',
            (White, Pawn) => '\u{2659}',
            (Black, King) => '\u{265a}',
            (Black, Queen) => '\u{265b}',
            (Black, Rook) => '\u{265c}',
            (Black, Bishop) => '\u{265d}',
            (Black, Knight) => '\u{265e}',
            (Black, Pawn) => '\u{265f}',
        }
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph(GlyphStyle::Unicode))
    }
}
