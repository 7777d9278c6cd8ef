use crate::chess_errors::*;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt::{self, Display};
use std::ops;
use std::str::FromStr;

// Squares on a 8x8 board, addressed by (row, col), both 1-based.
// Row 1 is white's back rank, col 1 is the a-file:
//
//     a  b  c  d  e  f  g  h
//   ---------------------------
// 8 | (8,1)  ...        (8,8) | 8
// . |                         | .
// 1 | (1,1)  ...        (1,8) | 1
//   ---------------------------
//    a  b  c  d  e  f  g  h
//
// ---------------------------------------------
// Squares
// ---------------------------------------------

pub const BOARD_SIZE: u8 = 8;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Square {
    row: u8,
    col: u8,
}

/// A (row, col) displacement, used for piece direction and step tables.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Offset {
    pub rows: i8,
    pub cols: i8,
}

impl Offset {
    pub const fn new(rows: i8, cols: i8) -> Offset {
        Offset { rows, cols }
    }
}

impl Square {
    /// Panics unless row and col lie in 1..=8. Use `try_new` for unchecked input.
    pub fn new(row: u8, col: u8) -> Square {
        assert!(
            Square::in_board(row as i8, col as i8),
            "Invalid square ({}, {})",
            row,
            col
        );
        Square { row, col }
    }

    /// Returns None for coordinates off the board.
    pub fn try_new(row: i8, col: i8) -> Option<Square> {
        if Square::in_board(row, col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    pub const fn in_board(row: i8, col: i8) -> bool {
        row >= 1 && col >= 1 && row <= BOARD_SIZE as i8 && col <= BOARD_SIZE as i8
    }

    pub const fn row(self) -> u8 {
        self.row
    }

    pub const fn col(self) -> u8 {
        self.col
    }

    /// Allows to iterate over all squares on the board, a1, b1, ..., h8.
    pub fn all_squares() -> SquareIterator {
        SquareIterator(0)
    }
}

// Adding an offset walks off the board into None instead of wrapping.
impl_op_ex!(+ |a: &Square, b: &Offset| -> Option<Square> {
    Square::try_new(a.row as i8 + b.rows, a.col as i8 + b.cols)
});

pub struct SquareIterator(u8);

impl Iterator for SquareIterator {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 >= BOARD_SIZE * BOARD_SIZE {
            None
        } else {
            let i = self.0;
            self.0 += 1;
            Some(Square::new(i / BOARD_SIZE + 1, i % BOARD_SIZE + 1))
        }
    }
}

impl FromStr for Square {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ChessError::InvalidSquare(s.to_string());
        let mut chars = s.chars();

        let file = chars.next().ok_or_else(err)?;
        let rank = chars
            .next()
            .and_then(|r| r.to_digit(10))
            .ok_or_else(err)?;
        if chars.next().is_some() || !('a'..='h').contains(&file) {
            return Err(err());
        }

        let col = (file as u8 - b'a' + 1) as i8;
        Square::try_new(rank as i8, col).ok_or_else(err)
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col - 1) as char, self.row)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({},{})", self, self.row, self.col)
    }
}

impl From<Square> for String {
    fn from(sq: Square) -> String {
        sq.to_string()
    }
}

impl TryFrom<String> for Square {
    type Error = ChessError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
