use crate::moves::Move;
use crate::positions::Square;
use std::collections::BTreeSet;

// For testing purposes: Easily creates a set of squares from algebraic names.
// Panics on a bad name.
#[macro_export]
macro_rules! squares {
    ( $( $x:expr ),* ) => {
        {
            #[allow(unused_mut)]
            let mut base = std::collections::BTreeSet::<$crate::positions::Square>::new();
            $(
                base.insert($x.parse::<$crate::positions::Square>().expect("Invalid square in squares!"));
            )*
            base
        }
    };
}

/// Destination squares of a list of moves. Promotion variants collapse into one square.
pub fn destinations(moves: &[Move]) -> BTreeSet<Square> {
    moves.iter().map(|m| m.to).collect()
}
