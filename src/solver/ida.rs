use crate::prelude::*;

use super::{successors, Successor};
use std::time::Instant;

/// Iterative-deepening A*: depth-first passes that prune once `g + h`
/// exceeds the current bound, with the bound raised to the smallest excess
/// seen before the next pass.
pub(super) fn search(
    label: String,
    start: &Cube,
    heuristic: Heuristic,
    budget: &Budget,
) -> SolveResult {
    let started = Instant::now();

    if start.is_solved() {
        return SolveResult {
            label,
            solution: Vec::new(),
            elapsed: started.elapsed(),
            nodes: 1,
            solved: true,
        };
    }

    let mut dfs = Dfs {
        heuristic,
        budget,
        started,
        nodes: 0,
        path: Vec::new(),
        solution: None,
    };

    let mut bound = heuristic.estimate(start);
    loop {
        log::debug!("{}: searching within bound {}", label, bound);
        match dfs.explore(start, 0, bound, None) {
            Pass::Found => {
                let solution = dfs.solution.take().unwrap_or_default();
                return SolveResult {
                    label,
                    solution,
                    elapsed: started.elapsed(),
                    nodes: dfs.nodes,
                    solved: true,
                };
            }
            Pass::Aborted => {
                return SolveResult {
                    label,
                    solution: Vec::new(),
                    elapsed: started.elapsed(),
                    nodes: dfs.nodes,
                    solved: false,
                };
            }
            Pass::Over(next) => bound = next,
        }
    }
}

enum Pass {
    /// A solved node was reached; the move path is recorded.
    Found,
    /// Budget ran out mid-pass.
    Aborted,
    /// No solution within the bound; carries the smallest `f` seen beyond it.
    Over(u32),
}

struct Dfs<'a> {
    heuristic: Heuristic,
    budget: &'a Budget,
    started: Instant,
    nodes: u64,
    path: Vec<Move>,
    solution: Option<Vec<Move>>,
}

impl Dfs<'_> {
    fn explore(&mut self, cube: &Cube, depth: u32, bound: u32, last_move: Option<Move>) -> Pass {
        if self.started.elapsed() > self.budget.timeout || self.nodes > self.budget.node_cap {
            return Pass::Aborted;
        }

        let estimate = depth + self.heuristic.estimate(cube);
        if estimate > bound {
            return Pass::Over(estimate);
        }
        self.nodes += 1;

        if cube.is_solved() {
            self.solution = Some(self.path.clone());
            return Pass::Found;
        }

        let mut next_bound = u32::MAX;
        for Successor { cube, move_ } in successors(cube, last_move) {
            self.path.push(move_);
            let pass = self.explore(&cube, depth + 1, bound, Some(move_));
            self.path.pop();

            match pass {
                Pass::Found | Pass::Aborted => return pass,
                Pass::Over(excess) => next_bound = next_bound.min(excess),
            }
        }
        Pass::Over(next_bound)
    }
}
