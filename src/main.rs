mod cube;
mod heuristic;
mod r#move;
mod solver;
#[cfg(test)]
mod test;

mod prelude;
use prelude::*;

/// Composite-score weights: one second costs ten points, ten thousand
/// expanded nodes cost one.
const ALPHA_TIME: f64 = 10.0;
const BETA_NODES: f64 = 1.0 / 10_000.0;

/// Every algorithm/heuristic pairing entered into the benchmark.
const LINEUP: [(Algorithm, Heuristic); 6] = [
    (Algorithm::IdaStar, Heuristic::Korf),
    (Algorithm::IdaStar, Heuristic::Misplaced),
    (Algorithm::IdaStar, Heuristic::Manhattan),
    (Algorithm::AStar, Heuristic::Manhattan),
    (Algorithm::AStar, Heuristic::Misplaced),
    (Algorithm::Greedy, Heuristic::Misplaced),
];

fn main() -> anyhow::Result<()> {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()?;

    let scramble = match std::env::args().nth(1).as_deref() {
        None | Some("easy") => "U R F D L",
        Some("medium") => "U R F' L2 D B R' U2 F",
        Some("hard") => "U R F' L2 D B R' U2 F D' L' R F2 D2 L",
        Some(other) => anyhow::bail!("unknown difficulty {:?} (want easy, medium or hard)", other),
    };

    println!("Scramble: {}", scramble);
    let cube = Cube::solved().apply_all(Move::parse_sequence(scramble)?);

    let results: Vec<SolveResult> = LINEUP
        .into_iter()
        .map(|(algorithm, heuristic)| {
            solve(&cube, algorithm, heuristic, &algorithm.default_budget())
        })
        .collect();

    report(&results);
    Ok(())
}

fn score(result: &SolveResult) -> f64 {
    result.moves() as f64
        + result.elapsed.as_secs_f64() * ALPHA_TIME
        + result.nodes as f64 * BETA_NODES
}

fn report(results: &[SolveResult]) {
    println!();
    for result in results.iter().filter(|r| !r.solved) {
        println!(
            "{}: no solution within budget ({} nodes expanded)",
            result.label, result.nodes
        );
    }

    let mut ranked: Vec<&SolveResult> = results.iter().filter(|r| r.solved).collect();
    if ranked.is_empty() {
        println!("No algorithm solved the cube within its budget.");
        return;
    }
    ranked.sort_by(|a, b| score(a).total_cmp(&score(b)));

    println!(
        "{:<5} {:<22} {:>5} {:>9} {:>10}  solution",
        "rank", "algorithm", "moves", "time", "nodes"
    );
    for (position, result) in ranked.iter().enumerate() {
        println!(
            "{:<5} {:<22} {:>5} {:>8.3}s {:>10}  {}",
            position + 1,
            result.label,
            result.moves(),
            result.elapsed.as_secs_f64(),
            result.nodes,
            result.solution_string(),
        );
    }

    let fastest = ranked.iter().min_by_key(|r| r.elapsed).unwrap();
    let frugal = ranked.iter().min_by_key(|r| r.nodes).unwrap();
    let shortest = ranked.iter().min_by_key(|r| r.moves()).unwrap();
    println!();
    println!("Fastest:        {}", fastest.label);
    println!("Fewest nodes:   {}", frugal.label);
    println!("Shortest path:  {}", shortest.label);
    println!("Best composite: {}", ranked[0].label);
}
