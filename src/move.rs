use crate::cube::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub face: Face,
    pub direction: Direction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, enum_iterator::Sequence)]
pub enum Direction {
    Single,
    Double,
    Reverse,
}

impl Direction {
    /// How many quarter turns of the base face delta this power composes.
    pub(crate) fn turns(self) -> usize {
        match self {
            Direction::Single => 1,
            Direction::Double => 2,
            Direction::Reverse => 3,
        }
    }
}

impl Move {
    pub fn all() -> impl Iterator<Item = Move> {
        enum_iterator::all::<Face>().flat_map(|face| {
            enum_iterator::all::<Direction>().map(move |direction| Move { face, direction })
        })
    }

    /// The move undoing this one: X and X' swap, X2 undoes itself.
    #[allow(unused)]
    pub fn reverse(self) -> Move {
        let direction = match self.direction {
            Direction::Single => Direction::Reverse,
            Direction::Double => Direction::Double,
            Direction::Reverse => Direction::Single,
        };
        Move {
            face: self.face,
            direction,
        }
    }

    /// Two consecutive turns of one face always collapse into a single turn
    /// or a no-op, so a move may not follow another on the same face.
    pub fn could_follow(&self, last: &Move) -> bool {
        self.face != last.face
    }

    pub fn parse_sequence(s: &str) -> anyhow::Result<Vec<Move>> {
        s.split(' ').map(|s| s.parse()).collect()
    }

    pub fn format_sequence(moves: &[Move]) -> String {
        moves
            .iter()
            .map(Move::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl core::str::FromStr for Move {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Move> {
        let mut chars = s.chars();
        let face_char = match chars.next() {
            Some(c) => c,
            None => return Err(anyhow::anyhow!("No face for move")),
        };

        let face = match face_char {
            'F' | 'f' => Face::Front,
            'R' | 'r' => Face::Right,
            'U' | 'u' => Face::Up,
            'L' | 'l' => Face::Left,
            'B' | 'b' => Face::Back,
            'D' | 'd' => Face::Down,
            _ => return Err(anyhow::anyhow!("Unrecognized face {}", face_char)),
        };

        let direction = match chars.next() {
            None => Direction::Single,
            Some('\'') => Direction::Reverse,
            Some('2') => Direction::Double,
            Some(c) => return Err(anyhow::anyhow!("Unrecognized direction {}", c)),
        };

        Ok(Move { face, direction })
    }
}

impl core::fmt::Display for Move {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let letter = match self.face {
            Face::Front => 'F',
            Face::Left => 'L',
            Face::Right => 'R',
            Face::Back => 'B',
            Face::Up => 'U',
            Face::Down => 'D',
        };
        match self.direction {
            Direction::Single => write!(f, "{}", letter),
            Direction::Double => write!(f, "{}2", letter),
            Direction::Reverse => write!(f, "{}'", letter),
        }
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Move {
    fn arbitrary<G: quickcheck::Gen>(g: &mut G) -> Move {
        use rand::Rng;

        let nth = g.gen_range(0usize, 18);
        Move::all().nth(nth).unwrap()
    }
}
