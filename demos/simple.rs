use maze_search::{run_search, Grid, Strategy};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S# |
// | # |
// |  G|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - G marks the target
//
// Cells have a 4-neighborhood

fn main() {
    let mut grid = Grid::from_layout(3, 3, &[(0, 1), (1, 1)], (0, 0), (2, 2)).unwrap();
    let (start, target) = (grid.start(), grid.target());
    let path = run_search(Strategy::BreadthFirst, &mut grid, start, target)
        .unwrap()
        .unwrap();
    println!("{}", grid);
    println!("Path (target first):");
    for p in path {
        println!("row {}, col {}", p.y, p.x);
    }
}
