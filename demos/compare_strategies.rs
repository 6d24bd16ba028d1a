use maze_search::{Grid, SearchOptions, Strategy};
use rand::prelude::*;
use std::env;

// Generates one random maze and runs every strategy on it, reporting path length, explored
// cells and expansions. Usage:
//
//     cargo run --example compare_strategies -- [rows] [cols] [density] [seed]

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let arg = |i: usize, default: &str| args.get(i).cloned().unwrap_or(default.to_owned());
    let rows: usize = arg(0, "20").parse().expect("rows must be a number");
    let cols: usize = arg(1, "40").parse().expect("cols must be a number");
    let density: f64 = arg(2, "0.3").parse().expect("density must be a number");
    let seed: u64 = arg(3, "0").parse().expect("seed must be a number");

    let mut rng = StdRng::seed_from_u64(seed);
    let mut grid = match Grid::with_rng(rows, cols, density, &mut rng) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };
    println!("{}", grid);
    let (start, target) = (grid.start(), grid.target());
    println!(
        "Start row {}, col {}; target row {}, col {}; reachable: {}",
        start.y,
        start.x,
        target.y,
        target.x,
        grid.reachable(start, target)
    );
    for strategy in Strategy::ALL {
        let mut searcher = strategy
            .searcher(&mut grid, start, target, &SearchOptions::default())
            .unwrap();
        searcher.run();
        let report = searcher.report();
        let length = report
            .path
            .map_or("-".to_owned(), |path| path.len().to_string());
        println!(
            "{:>6}: path {:>5}, visited {:>5}, steps {:>5}",
            strategy, length, report.visited, report.steps
        );
        grid.reset();
    }
}
