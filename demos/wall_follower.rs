use maze_search::{Grid, Heading, SearchOptions, SearchStatus, Strategy};

// In this example the wall follower is stepped through a 4x5 grid with shape
//  _____
// |S..#.|
// |.#.#.|
// |.#...|
// |...#G|
//  _____
// printing the walker's position and the explored cells after every move.
// It starts facing south and prefers going forward, then right, back and left.

fn main() {
    let mut grid: Grid = "S..#.\n.#.#.\n.#...\n...#G".parse().unwrap();
    let (start, target) = (grid.start(), grid.target());
    let options = SearchOptions {
        heading: Heading::South,
        ..Default::default()
    };
    let mut walker = Strategy::WallFollower
        .searcher(&mut grid, start, target, &options)
        .unwrap();
    while walker.step() == SearchStatus::Running {
        if let Some(p) = walker.current_cell() {
            println!("Step {}: at row {}, col {}", walker.steps(), p.y, p.x);
        }
        println!("{}", walker.grid());
    }
    match walker.path() {
        Some(path) => println!("Reached the target in {} cells", path.len()),
        None => println!("Got stuck after {} steps", walker.steps()),
    }
}
