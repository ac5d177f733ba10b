use crate::prelude::*;

/// Cubie-level cube state: who sits in each slot, and how it is turned.
///
/// Corner slots are ordered URF, UFL, ULB, UBR, DFR, DLF, DBL, DRB; edge
/// slots UR, UF, UL, UB, DR, DF, DL, DB, FR, FL, BL, BR. Slot `i` of a
/// permutation array holds the identity of the cubie occupying it;
/// orientations are twists mod 3 (corners) and flips mod 2 (edges).
///
/// States produced by composing moves onto [`CubeLike::solved`] keep the
/// permutation arrays bijections and the orientations bounded. A caller
/// assembling a cube from external input owes the same invariant; nothing
/// here re-validates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubieCube {
    pub(crate) corner_perm: [u8; 8],
    pub(crate) corner_orient: [u8; 8],
    pub(crate) edge_perm: [u8; 12],
    pub(crate) edge_orient: [u8; 12],
}

impl super::CubeLike for CubieCube {
    fn solved() -> Self {
        CubieCube {
            corner_perm: core::array::from_fn(|i| i as u8),
            corner_orient: [0; 8],
            edge_perm: core::array::from_fn(|i| i as u8),
            edge_orient: [0; 12],
        }
    }

    fn apply(mut self, move_: Move) -> Self {
        let delta = &FACE_DELTAS[move_.face as usize];
        for _ in 0..move_.direction.turns() {
            self.multiply(delta);
        }
        self
    }
}

impl CubieCube {
    pub fn is_solved(&self) -> bool {
        let corners_home = (0..8).all(|i| self.corner_perm[i] as usize == i)
            && self.corner_orient.iter().all(|&o| o == 0);
        let edges_home = (0..12).all(|i| self.edge_perm[i] as usize == i)
            && self.edge_orient.iter().all(|&o| o == 0);
        corners_home && edges_home
    }

    /// Composes `delta` onto this state: slot `i` receives the cubie that
    /// `delta` routes into it, orientations adding mod 3 / mod 2.
    fn multiply(&mut self, delta: &CubieCube) {
        let mut corner_perm = [0; 8];
        let mut corner_orient = [0; 8];
        for i in 0..8 {
            let from = delta.corner_perm[i] as usize;
            corner_perm[i] = self.corner_perm[from];
            corner_orient[i] = (self.corner_orient[from] + delta.corner_orient[i]) % 3;
        }

        let mut edge_perm = [0; 12];
        let mut edge_orient = [0; 12];
        for i in 0..12 {
            let from = delta.edge_perm[i] as usize;
            edge_perm[i] = self.edge_perm[from];
            edge_orient[i] = (self.edge_orient[from] + delta.edge_orient[i]) % 2;
        }

        *self = CubieCube {
            corner_perm,
            corner_orient,
            edge_perm,
            edge_orient,
        };
    }
}

// One row per face, in Face declaration order (Front, Left, Right, Back, Up,
// Down). Each row is the state a single clockwise quarter turn of that face
// produces from solved; half and counter-clockwise turns come from composing
// it two or three times.
const CORNER_CYCLES: [[u8; 8]; 6] = [
    [1, 5, 2, 3, 0, 4, 6, 7],
    [0, 2, 6, 3, 4, 1, 5, 7],
    [4, 1, 2, 0, 7, 5, 6, 3],
    [0, 1, 3, 7, 4, 5, 2, 6],
    [3, 0, 1, 2, 4, 5, 6, 7],
    [0, 1, 2, 3, 5, 6, 7, 4],
];

const CORNER_TWISTS: [[u8; 8]; 6] = [
    [1, 2, 0, 0, 2, 1, 0, 0],
    [0, 1, 2, 0, 0, 2, 1, 0],
    [2, 0, 0, 1, 1, 0, 0, 2],
    [0, 0, 1, 2, 0, 0, 2, 1],
    [0; 8],
    [0; 8],
];

const EDGE_CYCLES: [[u8; 12]; 6] = [
    [0, 9, 2, 3, 4, 8, 6, 7, 1, 5, 10, 11],
    [0, 1, 10, 3, 4, 5, 9, 7, 8, 2, 6, 11],
    [8, 1, 2, 3, 11, 5, 6, 7, 4, 9, 10, 0],
    [0, 1, 2, 11, 4, 5, 6, 10, 8, 9, 3, 7],
    [3, 0, 1, 2, 4, 5, 6, 7, 8, 9, 10, 11],
    [0, 1, 2, 3, 5, 6, 7, 4, 8, 9, 10, 11],
];

const EDGE_FLIPS: [[u8; 12]; 6] = [
    [0, 1, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0],
    [0; 12],
    [0; 12],
    [0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 1],
    [0; 12],
    [0; 12],
];

lazy_static::lazy_static! {
    static ref FACE_DELTAS: [CubieCube; 6] = core::array::from_fn(|face| CubieCube {
        corner_perm: CORNER_CYCLES[face],
        corner_orient: CORNER_TWISTS[face],
        edge_perm: EDGE_CYCLES[face],
        edge_orient: EDGE_FLIPS[face],
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_turns_have_order_four() {
        for face in enum_iterator::all::<Face>() {
            let quarter = Move {
                face,
                direction: Direction::Single,
            };
            let mut cube = Cube::solved();
            for turns in 1..=4 {
                cube = cube.apply(quarter);
                assert_eq!(cube.is_solved(), turns == 4, "{} x{}", quarter, turns);
            }
        }
    }

    #[test]
    fn half_turns_have_order_two() {
        for face in enum_iterator::all::<Face>() {
            let half = Move {
                face,
                direction: Direction::Double,
            };
            assert!(Cube::solved().apply(half).apply(half).is_solved());
        }
    }

    #[test]
    fn every_move_undone_by_its_reverse() {
        let scrambled = cube_with_moves("U R F' L2 D B R' U2 F");
        for move_ in Move::all() {
            let round_trip = scrambled.clone().apply(move_).apply(move_.reverse());
            assert_eq!(round_trip, scrambled, "{}", move_);
        }
    }

    #[test]
    fn turn_order_matters() {
        assert_ne!(cube_with_moves("U R"), cube_with_moves("R U"));
    }

    #[quickcheck]
    fn scramble_then_inverse_is_identity(moves: Vec<Move>) -> bool {
        let inverse = moves.iter().rev().map(|m| m.reverse());
        Cube::solved().apply_all(moves.clone()).apply_all(inverse) == Cube::solved()
    }

    #[quickcheck]
    fn permutations_stay_bijections(moves: Vec<Move>) -> bool {
        let cube = Cube::solved().apply_all(moves);

        let mut corners = cube.corner_perm;
        corners.sort_unstable();
        let mut edges = cube.edge_perm;
        edges.sort_unstable();

        corners == core::array::from_fn(|i| i as u8)
            && edges == core::array::from_fn(|i| i as u8)
            && cube.corner_orient.iter().all(|&o| o < 3)
            && cube.edge_orient.iter().all(|&o| o < 2)
    }
}
