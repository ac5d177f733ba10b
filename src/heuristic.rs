use crate::prelude::*;

/// Scaling divisors turning raw mismatch masses into move estimates. A
/// quarter turn relocates four corners and four edges, so one move changes
/// at most 16 misplaced/misoriented counters and at most 18 units of
/// Manhattan mass; dividing by these keeps each estimate at or below the
/// number of moves actually remaining.
pub const MISPLACED_DIVISOR: u32 = 16;
pub const MANHATTAN_DIVISOR: u32 = 18;

/// Lower-bound estimators of moves remaining to the solved state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heuristic {
    /// Counts misplaced and misoriented cubies.
    Misplaced,
    /// Sums per-cubie slot distances for displaced cubies.
    Manhattan,
    /// Pointwise max of the other two; the max of two lower bounds is
    /// itself a lower bound.
    Korf,
}

impl Heuristic {
    pub fn estimate(self, cube: &Cube) -> u32 {
        match self {
            Heuristic::Misplaced => misplaced(cube),
            Heuristic::Manhattan => manhattan(cube),
            Heuristic::Korf => misplaced(cube).max(manhattan(cube)),
        }
    }
}

impl core::fmt::Display for Heuristic {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Heuristic::Misplaced => "misplaced",
            Heuristic::Manhattan => "manhattan",
            Heuristic::Korf => "korf",
        })
    }
}

fn misplaced(cube: &Cube) -> u32 {
    let mut mass = 0;
    for slot in 0..8 {
        if cube.corner_perm[slot] as usize != slot {
            mass += 1;
        }
        if cube.corner_orient[slot] != 0 {
            mass += 1;
        }
    }
    for slot in 0..12 {
        if cube.edge_perm[slot] as usize != slot {
            mass += 1;
        }
        if cube.edge_orient[slot] != 0 {
            mass += 1;
        }
    }
    mass / MISPLACED_DIVISOR
}

fn manhattan(cube: &Cube) -> u32 {
    let mut mass = 0;
    for slot in 0..8 {
        let cubie = cube.corner_perm[slot] as usize;
        if cubie != slot {
            mass += CORNER_DISTANCE[slot][cubie];
        }
        if cube.corner_orient[slot] != 0 {
            mass += 1;
        }
    }
    for slot in 0..12 {
        let cubie = cube.edge_perm[slot] as usize;
        if cubie != slot {
            mass += EDGE_DISTANCE[slot][cubie];
        }
        if cube.edge_orient[slot] != 0 {
            mass += 1;
        }
    }
    mass / MANHATTAN_DIVISOR
}

// Hand-derived minimum face-turn distances between a corner slot's home and
// the slot its occupant belongs to.
const CORNER_DISTANCE: [[u32; 8]; 8] = [
    [0, 2, 2, 2, 1, 2, 3, 2],
    [2, 0, 2, 2, 2, 1, 2, 3],
    [2, 2, 0, 2, 3, 2, 1, 2],
    [2, 2, 2, 0, 2, 3, 2, 1],
    [1, 2, 3, 2, 0, 2, 2, 2],
    [2, 1, 2, 3, 2, 0, 2, 2],
    [3, 2, 1, 2, 2, 2, 0, 2],
    [2, 3, 2, 1, 2, 2, 2, 0],
];

// Same for edge slots.
const EDGE_DISTANCE: [[u32; 12]; 12] = [
    [0, 1, 1, 1, 2, 2, 2, 2, 1, 2, 2, 1],
    [1, 0, 1, 1, 2, 2, 2, 2, 1, 1, 2, 2],
    [1, 1, 0, 1, 2, 2, 2, 2, 2, 1, 1, 2],
    [1, 1, 1, 0, 2, 2, 2, 2, 2, 2, 1, 1],
    [2, 2, 2, 2, 0, 1, 1, 1, 1, 2, 2, 1],
    [2, 2, 2, 2, 1, 0, 1, 1, 1, 1, 2, 2],
    [2, 2, 2, 2, 1, 1, 0, 1, 2, 1, 1, 2],
    [2, 2, 2, 2, 1, 1, 1, 0, 2, 2, 1, 1],
    [1, 1, 2, 2, 1, 1, 2, 2, 0, 2, 2, 1],
    [2, 1, 1, 2, 2, 1, 1, 2, 2, 0, 1, 2],
    [2, 2, 1, 1, 2, 2, 1, 1, 2, 1, 0, 2],
    [1, 2, 2, 1, 1, 2, 2, 1, 1, 2, 2, 0],
];

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Heuristic; 3] = [Heuristic::Misplaced, Heuristic::Manhattan, Heuristic::Korf];

    #[test]
    fn solved_estimates_zero() {
        for heuristic in ALL {
            assert_eq!(heuristic.estimate(&Cube::solved()), 0, "{}", heuristic);
        }
    }

    #[test]
    fn single_front_turn_estimates_one() {
        let cube = cube_with_moves("F");
        assert_eq!(Heuristic::Misplaced.estimate(&cube), 1);
        assert_eq!(Heuristic::Manhattan.estimate(&cube), 1);
        assert_eq!(Heuristic::Korf.estimate(&cube), 1);
    }

    #[test]
    fn estimates_never_exceed_known_scramble_length() {
        for scramble in [EASY_SCRAMBLE, MEDIUM_SCRAMBLE, HARD_SCRAMBLE] {
            let moves = Move::parse_sequence(scramble).unwrap();
            let mut cube = Cube::solved();
            for (applied, &move_) in moves.iter().take(6).enumerate() {
                cube = cube.apply(move_);
                let depth = applied as u32 + 1;
                for heuristic in ALL {
                    assert!(
                        heuristic.estimate(&cube) <= depth,
                        "{} after {} moves of {:?}",
                        heuristic,
                        depth,
                        scramble,
                    );
                }
            }
        }
    }

    #[quickcheck]
    fn korf_is_max_of_both(moves: Vec<Move>) -> bool {
        let cube = Cube::solved().apply_all(moves);
        Heuristic::Korf.estimate(&cube)
            == Heuristic::Misplaced
                .estimate(&cube)
                .max(Heuristic::Manhattan.estimate(&cube))
    }
}
