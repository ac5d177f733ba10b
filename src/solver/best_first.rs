use crate::prelude::*;

use super::{successors, Successor};
use core::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Instant;

/// Frontier search over an open set ordered by `g + h` (A*) or `h` alone
/// (greedy). No closed set: states may re-enter the frontier along
/// different paths, and the node cap is what bounds memory.
pub(super) fn search(
    label: String,
    start: &Cube,
    heuristic: Heuristic,
    budget: &Budget,
    greedy: bool,
) -> SolveResult {
    let started = Instant::now();
    let mut nodes = 0;
    let mut tickets = 0;

    let mut arena = vec![Node {
        cube: start.clone(),
        depth: 0,
        move_: None,
        parent: None,
    }];
    let mut open = BinaryHeap::new();
    open.push(Open {
        priority: heuristic.estimate(start),
        ticket: next_ticket(&mut tickets),
        index: 0,
    });

    loop {
        if started.elapsed() > budget.timeout || nodes > budget.node_cap {
            break;
        }
        let Some(Open { index, .. }) = open.pop() else {
            break;
        };
        nodes += 1;

        if arena[index].cube.is_solved() {
            return SolveResult {
                label,
                solution: path_to_root(&arena, index),
                elapsed: started.elapsed(),
                nodes,
                solved: true,
            };
        }

        let depth = arena[index].depth + 1;
        for Successor { cube, move_ } in successors(&arena[index].cube, arena[index].move_) {
            let estimate = heuristic.estimate(&cube);
            let priority = if greedy { estimate } else { depth + estimate };

            arena.push(Node {
                cube,
                depth,
                move_: Some(move_),
                parent: Some(index),
            });
            open.push(Open {
                priority,
                ticket: next_ticket(&mut tickets),
                index: arena.len() - 1,
            });
        }
    }

    SolveResult {
        label,
        solution: Vec::new(),
        elapsed: started.elapsed(),
        nodes,
        solved: false,
    }
}

struct Node {
    cube: Cube,
    depth: u32,
    move_: Option<Move>,
    parent: Option<usize>,
}

/// Frontier entry. The reversed ordering turns the max-heap into a min-heap
/// on priority, with insertion order breaking ties so runs are
/// deterministic.
struct Open {
    priority: u32,
    ticket: u64,
    index: usize,
}

fn next_ticket(tickets: &mut u64) -> u64 {
    let ticket = *tickets;
    *tickets += 1;
    ticket
}

impl Ord for Open {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.ticket.cmp(&self.ticket))
    }
}

impl PartialOrd for Open {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Open {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Open {}

fn path_to_root(arena: &[Node], index: usize) -> Vec<Move> {
    let mut solution = Vec::new();
    let mut node = &arena[index];
    while let (Some(move_), Some(parent)) = (node.move_, node.parent) {
        solution.push(move_);
        node = &arena[parent];
    }
    solution.reverse();
    solution
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roomy_budget() -> Budget {
        Budget {
            timeout: Duration::from_secs(60),
            node_cap: 100_000,
        }
    }

    fn astar(cube: &Cube, heuristic: Heuristic, budget: &Budget) -> SolveResult {
        search("A* under test".to_string(), cube, heuristic, budget, false)
    }

    fn greedy(cube: &Cube, heuristic: Heuristic, budget: &Budget) -> SolveResult {
        search("greedy under test".to_string(), cube, heuristic, budget, true)
    }

    #[test]
    fn already_solved_pops_a_single_node() {
        let result = astar(&Cube::solved(), Heuristic::Manhattan, &roomy_budget());
        assert!(result.solved);
        assert_eq!(result.moves(), 0);
        assert_eq!(result.nodes, 1);
    }

    #[test]
    fn astar_finds_an_optimal_solution() {
        let scrambled = cube_with_moves(EASY_SCRAMBLE);
        let result = astar(&scrambled, Heuristic::Manhattan, &roomy_budget());

        assert!(result.solved);
        assert!(result.moves() <= 5, "found {}", result.solution_string());
        assert!(scrambled.apply_all(result.solution).is_solved());
    }

    #[test]
    fn astar_with_misplaced_solves_a_short_scramble() {
        let scrambled = cube_with_moves("U R F D");
        let result = astar(&scrambled, Heuristic::Misplaced, &roomy_budget());

        assert!(result.solved);
        assert!(result.moves() <= 4);
        assert!(scrambled.apply_all(result.solution).is_solved());
    }

    #[test]
    fn greedy_reaches_solved_without_length_guarantee() {
        let scrambled = cube_with_moves("U R F D");
        let result = greedy(&scrambled, Heuristic::Misplaced, &roomy_budget());

        assert!(result.solved);
        assert!(scrambled.apply_all(result.solution).is_solved());
    }

    #[test]
    fn node_cap_stops_the_search() {
        let budget = Budget {
            timeout: Duration::from_secs(60),
            node_cap: 1_000,
        };
        let result = astar(
            &cube_with_moves(HARD_SCRAMBLE),
            Heuristic::Manhattan,
            &budget,
        );

        assert!(!result.solved);
        assert_eq!(result.solution_string(), "");
        assert!(result.nodes <= budget.node_cap + 1);
    }

    #[test]
    fn reruns_are_deterministic() {
        let scrambled = cube_with_moves(EASY_SCRAMBLE);
        let first = astar(&scrambled, Heuristic::Manhattan, &roomy_budget());
        let second = astar(&scrambled, Heuristic::Manhattan, &roomy_budget());

        assert_eq!(first.nodes, second.nodes);
        assert_eq!(first.solution, second.solution);
    }
}
