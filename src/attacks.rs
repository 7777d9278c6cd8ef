use crate::boards::*;
use crate::moves::*;
use crate::pieces::*;
use crate::positions::*;

// Piece geometry: where a piece could go, ignoring whether the move exposes
// its own king. Off-board destinations are dropped silently.

const BISHOP_DIRECTIONS: [Offset; 4] = [
    Offset::new(1, 1),
    Offset::new(-1, 1),
    Offset::new(-1, -1),
    Offset::new(1, -1),
];

const ROOK_DIRECTIONS: [Offset; 4] = [
    Offset::new(1, 0),
    Offset::new(-1, 0),
    Offset::new(0, 1),
    Offset::new(0, -1),
];

const QUEEN_DIRECTIONS: [Offset; 8] = [
    Offset::new(1, 1),
    Offset::new(-1, 1),
    Offset::new(-1, -1),
    Offset::new(1, -1),
    Offset::new(1, 0),
    Offset::new(-1, 0),
    Offset::new(0, 1),
    Offset::new(0, -1),
];

const KING_OFFSETS: [Offset; 8] = QUEEN_DIRECTIONS;

const KNIGHT_OFFSETS: [Offset; 8] = [
    Offset::new(1, 2),
    Offset::new(2, 1),
    Offset::new(-1, 2),
    Offset::new(2, -1),
    Offset::new(1, -2),
    Offset::new(-2, 1),
    Offset::new(-1, -2),
    Offset::new(-2, -1),
];

/// Pieces a pawn may promote to, in the order promotion moves are generated.
pub const PROMOTION_CHOICES: [PieceType; 4] = [
    PieceType::Queen,
    PieceType::Rook,
    PieceType::Bishop,
    PieceType::Knight,
];

/// The two movement archetypes shared between pieces, plus the pawn special case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveShape {
    /// Walks along each direction until blocked.
    Sliding(&'static [Offset]),
    /// Looks at each offset exactly once.
    Stepping(&'static [Offset]),
    Pawn,
}

impl PieceType {
    pub fn move_shape(self) -> MoveShape {
        use PieceType::*;
        match self {
            Bishop => MoveShape::Sliding(&BISHOP_DIRECTIONS),
            Rook => MoveShape::Sliding(&ROOK_DIRECTIONS),
            Queen => MoveShape::Sliding(&QUEEN_DIRECTIONS),
            King => MoveShape::Stepping(&KING_OFFSETS),
            Knight => MoveShape::Stepping(&KNIGHT_OFFSETS),
            Pawn => MoveShape::Pawn,
        }
    }
}

/// Candidate moves of the piece standing on `from`. Empty if the square is empty.
pub fn candidate_moves(board: &Board, from: Square) -> Vec<Move> {
    let mut res = Vec::new();
    if let Some(piece) = board.piece_at(from) {
        match piece.piece_type.move_shape() {
            MoveShape::Sliding(dirs) => sliding_moves(board, from, piece.color, dirs, &mut res),
            MoveShape::Stepping(offsets) => {
                stepping_moves(board, from, piece.color, offsets, &mut res)
            }
            MoveShape::Pawn => pawn_moves(board, from, piece.color, &mut res),
        }
    }
    res
}

/// True if any piece of color `by` has a candidate move landing on `target`.
/// Pure attack detection: the attacker's own king safety is not considered.
/// `target` is expected to hold a piece of the other color, otherwise pawn
/// pushes onto it count as well.
pub fn threatens(board: &Board, target: Square, by: Color) -> bool {
    board
        .pieces()
        .filter(|(_, p)| p.color == by)
        .any(|(sq, _)| candidate_moves(board, sq).iter().any(|m| m.to == target))
}

/// Empty squares are moves, enemy squares are captures, friendly squares block.
/// Returns whether the walk may continue past `to`.
fn push_if_reachable(
    board: &Board,
    from: Square,
    to: Square,
    color: Color,
    res: &mut Vec<Move>,
) -> bool {
    match board.piece_at(to) {
        None => {
            res.push(Move::new(from, to));
            true
        }
        Some(p) if p.color != color => {
            res.push(Move::new(from, to));
            false
        }
        Some(_) => false,
    }
}

fn sliding_moves(
    board: &Board,
    from: Square,
    color: Color,
    dirs: &[Offset],
    res: &mut Vec<Move>,
) {
    for dir in dirs {
        let mut next = from + dir;
        while let Some(to) = next {
            if !push_if_reachable(board, from, to, color, res) {
                break;
            }
            next = to + dir;
        }
    }
}

fn stepping_moves(
    board: &Board,
    from: Square,
    color: Color,
    offsets: &[Offset],
    res: &mut Vec<Move>,
) {
    for to in offsets.iter().filter_map(|off| from + off) {
        push_if_reachable(board, from, to, color, res);
    }
}

/// Adds the plain move, or all four promotion moves when landing on the last rank.
fn push_pawn_move(from: Square, to: Square, color: Color, res: &mut Vec<Move>) {
    if to.row() == color.promotion_row() {
        res.extend(
            PROMOTION_CHOICES
                .iter()
                .map(|p| Move::with_promotion(from, to, *p)),
        );
    } else {
        res.push(Move::new(from, to));
    }
}

fn pawn_moves(board: &Board, from: Square, color: Color, res: &mut Vec<Move>) {
    let dir = color.pawn_direction();

    if let Some(one) = from + Offset::new(dir, 0) {
        if board.piece_at(one).is_none() {
            push_pawn_move(from, one, color, res);

            if from.row() == color.pawn_home_row() {
                if let Some(two) = one + Offset::new(dir, 0) {
                    if board.piece_at(two).is_none() {
                        push_pawn_move(from, two, color, res);
                    }
                }
            }
        }
    }

    for side in [-1, 1] {
        if let Some(to) = from + Offset::new(dir, side) {
            match board.piece_at(to) {
                Some(p) if p.color != color => push_pawn_move(from, to, color, res),
                _ => {}
            }
        }
    }
}
