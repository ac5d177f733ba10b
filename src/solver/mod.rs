use crate::prelude::*;

mod best_first;
mod ida;

/// Search strategies competing on the same scrambled cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    IdaStar,
    AStar,
    Greedy,
}

impl Algorithm {
    /// Stock budgets sized for a benchmark run.
    pub fn default_budget(self) -> Budget {
        match self {
            Algorithm::IdaStar => Budget {
                timeout: Duration::from_secs(20),
                node_cap: 50_000_000,
            },
            Algorithm::AStar | Algorithm::Greedy => Budget {
                timeout: Duration::from_secs(30),
                node_cap: 100_000_000,
            },
        }
    }
}

impl core::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Algorithm::IdaStar => "IDA*",
            Algorithm::AStar => "A*",
            Algorithm::Greedy => "Greedy",
        })
    }
}

/// Hard limits on one engine run. Hitting either ends the search with a
/// failed [`SolveResult`]; that is a normal outcome, not an error.
#[derive(Debug, Clone, Copy)]
pub struct Budget {
    pub timeout: Duration,
    pub node_cap: u64,
}

/// Immutable record of one engine run.
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub label: String,
    pub solution: Vec<Move>,
    pub elapsed: Duration,
    pub nodes: u64,
    pub solved: bool,
}

impl SolveResult {
    pub fn moves(&self) -> usize {
        self.solution.len()
    }

    pub fn solution_string(&self) -> String {
        Move::format_sequence(&self.solution)
    }
}

/// Runs one algorithm/heuristic pairing against `cube` within `budget`.
pub fn solve(
    cube: &Cube,
    algorithm: Algorithm,
    heuristic: Heuristic,
    budget: &Budget,
) -> SolveResult {
    let label = format!("{} + {}", algorithm, heuristic);

    let result = match algorithm {
        Algorithm::IdaStar => ida::search(label, cube, heuristic, budget),
        Algorithm::AStar => best_first::search(label, cube, heuristic, budget, false),
        Algorithm::Greedy => best_first::search(label, cube, heuristic, budget, true),
    };

    log::info!(
        "{}: {} in {:?}, {} nodes",
        result.label,
        if result.solved { "solved" } else { "gave up" },
        result.elapsed,
        result.nodes,
    );
    result
}

pub(crate) struct Successor {
    pub cube: Cube,
    pub move_: Move,
}

/// One-move expansions of `cube`, skipping moves on the face just turned.
pub(crate) fn successors(cube: &Cube, last_move: Option<Move>) -> SmallVec<[Successor; 18]> {
    Move::all()
        .filter(|move_| match last_move {
            None => true,
            Some(last) => move_.could_follow(&last),
        })
        .map(|move_| Successor {
            cube: cube.clone().apply(move_),
            move_,
        })
        .collect()
}
