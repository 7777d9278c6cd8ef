use crate::chess_errors::*;
use crate::moves::Move;
use crate::pieces::*;
use crate::positions::*;
use array_init::array_init;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

// ---------------------------------------------
// Board Types
// ---------------------------------------------

type Grid = [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize];

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

lazy_static! {
    static ref STANDARD_BOARD: Board = Board {
        squares: array_init(|r| array_init(|c| standard_piece(r as u8 + 1, c as u8 + 1))),
    };
}

fn standard_piece(row: u8, col: u8) -> Option<Piece> {
    let back = BACK_RANK[(col - 1) as usize];
    match row {
        1 => Some(Piece::new(Color::White, back)),
        2 => Some(Piece::new(Color::White, PieceType::Pawn)),
        7 => Some(Piece::new(Color::Black, PieceType::Pawn)),
        8 => Some(Piece::new(Color::Black, back)),
        _ => None,
    }
}

/// Piece placement on an 8x8 board, without turn information.
/// Cloning yields an independent grid; pieces are plain values.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    // Indexed [row - 1][col - 1]
    squares: Grid,
}

impl Board {
    pub fn empty() -> Board {
        Board {
            squares: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }

    /// Returns a board with the pieces placed on the standard chess starting squares.
    pub fn standard() -> Board {
        STANDARD_BOARD.clone()
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[(sq.row() - 1) as usize][(sq.col() - 1) as usize]
    }

    /// Puts a piece on a square, replacing whatever stood there.
    pub fn place(&mut self, sq: Square, piece: Piece) {
        self.squares[(sq.row() - 1) as usize][(sq.col() - 1) as usize] = Some(piece);
    }

    pub fn clear(&mut self, sq: Square) {
        self.squares[(sq.row() - 1) as usize][(sq.col() - 1) as usize] = None;
    }

    /// All occupied squares with their pieces, a1 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all_squares().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, p)| p.color == color && p.piece_type == PieceType::King)
            .map(|(sq, _)| sq)
    }

    /// Moves a piece on the board. Does NOT check whether the move is legal.
    /// A promotion places a fresh piece of the chosen type and the mover's color.
    /// Returns false (and leaves the board untouched) if the start square is empty.
    pub fn apply(&mut self, mv: &Move) -> bool {
        let piece = match self.piece_at(mv.from) {
            Some(p) => p,
            None => return false,
        };
        let landed = match mv.promotion {
            Some(piece_type) => Piece::new(piece.color, piece_type),
            None => piece,
        };
        self.clear(mv.from);
        self.place(mv.to, landed);
        true
    }

    /// Compact diagram, rank 8 first, `.` for empty squares. Parses back with `FromStr`.
    pub fn to_diagram(&self) -> String {
        let mut res = String::with_capacity(72);
        for row in (1..=BOARD_SIZE).rev() {
            for col in 1..=BOARD_SIZE {
                res.push(self.piece_at(Square::new(row, col)).map_or('.', Piece::to_char));
            }
            res.push('\n');
        }
        res
    }

    pub fn display_with(&self, style: GlyphStyle) -> BoardDisplay<'_> {
        BoardDisplay { board: self, style }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

/// Reads a diagram of 8 ranks, rank 8 first. Uppercase letters are white,
/// lowercase black, `.` is empty. Whitespace inside a rank is ignored.
impl FromStr for Board {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ranks: Vec<Vec<char>> = s
            .lines()
            .map(|l| l.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|l| !l.is_empty())
            .collect();
        if ranks.len() != BOARD_SIZE as usize {
            return Err(ChessError::InvalidDiagram(format!(
                "expected 8 ranks, found {}",
                ranks.len()
            )));
        }

        let mut board = Board::empty();
        for (i, rank) in ranks.iter().enumerate() {
            let row = BOARD_SIZE - i as u8;
            if rank.len() != BOARD_SIZE as usize {
                return Err(ChessError::InvalidDiagram(format!(
                    "rank {} has {} squares",
                    row,
                    rank.len()
                )));
            }
            for (j, c) in rank.iter().enumerate() {
                if *c == '.' {
                    continue;
                }
                let piece = Piece::from_char(*c).ok_or_else(|| {
                    ChessError::InvalidDiagram(format!("unknown piece {:?} on rank {}", c, row))
                })?;
                board.place(Square::new(row, j as u8 + 1), piece);
            }
        }
        Ok(board)
    }
}

pub struct BoardDisplay<'a> {
    board: &'a Board,
    style: GlyphStyle,
}

// Displays the board in a chessboard style:
//
//   a b c d e f g h
// 8 r n b q k b n r 8
// 7 ....
//
fn display_chessboard_style(
    board: &Board,
    style: GlyphStyle,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    write!(f, " ")?;
    for c in 'a'..='h' {
        write!(f, " {}", c)?;
    }
    for row in (1..=BOARD_SIZE).rev() {
        write!(f, "\n{} ", row)?;
        for col in 1..=BOARD_SIZE {
            let glyph = board
                .piece_at(Square::new(row, col))
                .map_or('.', |p| p.glyph(style));
            write!(f, "{} ", glyph)?;
        }
        write!(f, "{}", row)?;
    }
    write!(f, "\n ")?;
    for c in 'a'..='h' {
        write!(f, " {}", c)?;
    }
    Ok(())
}

impl Display for BoardDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_chessboard_style(self.board, self.style, f)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_chessboard_style(self, GlyphStyle::Unicode, f)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n{}", self.to_diagram())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_standard_setup() {
        let b = Board::standard();
        assert_eq!(
            b.to_diagram(),
            "rnbqkbnr\npppppppp\n........\n........\n........\n........\nPPPPPPPP\nRNBQKBNR\n"
        );
        assert_eq!(b.pieces().count(), 32);
        assert_eq!(b.king_square(Color::White), Some(sq("e1")));
        assert_eq!(b.king_square(Color::Black), Some(sq("e8")));
        assert_eq!(
            b.piece_at(sq("d8")),
            Some(Piece::new(Color::Black, PieceType::Queen))
        );
    }

    #[test]
    fn test_place_and_clear() {
        let mut b = Board::empty();
        let rook = Piece::new(Color::White, PieceType::Rook);
        b.place(sq("c3"), rook);
        assert_eq!(b.piece_at(sq("c3")), Some(rook));
        let queen = Piece::new(Color::Black, PieceType::Queen);
        b.place(sq("c3"), queen);
        assert_eq!(b.piece_at(sq("c3")), Some(queen));
        b.clear(sq("c3"));
        assert_eq!(b.piece_at(sq("c3")), None);
        assert_eq!(b, Board::empty());
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Board::standard();
        let mut scratch = original.clone();
        scratch.clear(sq("e2"));
        assert_ne!(scratch, original);
        assert!(original.piece_at(sq("e2")).is_some());
    }

    #[test]
    fn test_apply_promotion() {
        let mut b: Board = "
            ........
            P.......
            ........
            ........
            ........
            ........
            ........
            ........"
            .parse()
            .unwrap();
        assert!(b.apply(&"a7a8r".parse().unwrap()));
        assert_eq!(
            b.piece_at(sq("a8")),
            Some(Piece::new(Color::White, PieceType::Rook))
        );
        assert_eq!(b.piece_at(sq("a7")), None);
        assert!(!b.apply(&"a7a8".parse().unwrap()));
    }

    #[test]
    fn test_apply_from_empty_square_changes_nothing() {
        let mut b = Board::standard();
        assert!(!b.apply(&"e4e5".parse().unwrap()));
        assert_eq!(b, Board::standard());
    }

    #[test]
    fn test_diagram_roundtrip() {
        let b = Board::standard();
        let parsed: Board = b.to_diagram().parse().unwrap();
        assert_eq!(parsed, b);
    }

    #[test]
    fn test_bad_diagrams() {
        assert!("rnbqkbnr".parse::<Board>().is_err());
        let eight_bad = "rnbqkbnx\n".repeat(8);
        assert!(eight_bad.parse::<Board>().is_err());
        let short_rank = "rnbqkbn\n".repeat(8);
        assert!(short_rank.parse::<Board>().is_err());
    }

    #[test]
    fn test_display_ascii() {
        let b = Board::standard();
        let text = b.display_with(GlyphStyle::Ascii).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "  a b c d e f g h");
        assert_eq!(lines[1], "8 r n b q k b n r 8");
        assert_eq!(lines[8], "1 R N B Q K B N R 1");
    }
}
