use crate::prelude::*;

pub use quickcheck_macros::quickcheck;

pub const EASY_SCRAMBLE: &str = "U R F D L";
pub const MEDIUM_SCRAMBLE: &str = "U R F' L2 D B R' U2 F";
pub const HARD_SCRAMBLE: &str = "U R F' L2 D B R' U2 F D' L' R F2 D2 L";

pub fn cube_with_moves(moves: &str) -> Cube {
    Cube::solved().apply_all(Move::parse_sequence(moves).unwrap())
}
