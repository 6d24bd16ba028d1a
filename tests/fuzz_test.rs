/// Fuzzes the search strategies by checking on many random grids that the complete strategies
/// find a path exactly when start and target share a connected component, that the optimal ones
/// agree on its length, and that the wall follower never claims a path it could not have walked.
use grid_util::point::Point;
use maze_search::{
    is_connected_path, run_search, run_search_with, Grid, GridError, Heading, SearchOptions,
    Strategy,
};
use rand::prelude::*;

fn random_grids(rows: usize, cols: usize, density: f64, n: usize, rng: &mut StdRng) -> Vec<Grid> {
    let mut grids = Vec::new();
    while grids.len() < n {
        match Grid::with_rng(rows, cols, density, rng) {
            Ok(grid) => grids.push(grid),
            Err(GridError::NotEnoughFreeCells(_)) => continue,
            Err(e) => panic!("{e}"),
        }
    }
    grids
}

fn visualize_grid(grid: &Grid, path: Option<&[Point]>) {
    let on_path = |p: Point| path.map_or(false, |path| path.contains(&p));
    for cell in grid.iter() {
        let p = cell.point();
        if p == grid.start() {
            print!("S");
        } else if p == grid.target() {
            print!("G");
        } else if cell.is_obstacle() {
            print!("#");
        } else if on_path(p) {
            print!("*");
        } else {
            print!(".");
        }
        if cell.col() + 1 == grid.cols() {
            println!();
        }
    }
}

fn check_path(grid: &Grid, path: &[Point]) {
    assert_eq!(path.first(), Some(&grid.target()));
    assert_eq!(path.last(), Some(&grid.start()));
    assert!(is_connected_path(path));
    assert!(path.iter().all(|&p| grid.is_free(p)));
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    for density in [0.2, 0.4] {
        for mut grid in random_grids(N, N, density, N_GRIDS, &mut rng) {
            let (start, target) = (grid.start(), grid.target());
            let reachable = grid.reachable(start, target);
            for strategy in Strategy::ALL.into_iter().filter(|s| s.is_complete()) {
                let path = run_search(strategy, &mut grid, start, target).unwrap();
                // Show the grid if a path is not found
                if path.is_some() != reachable {
                    visualize_grid(&grid, None);
                }
                assert_eq!(path.is_some(), reachable, "{strategy}");
                if let Some(path) = path {
                    check_path(&grid, &path);
                }
                grid.reset();
                assert_eq!(grid.count_visited(), 0);
            }
        }
    }
}

#[test]
fn fuzz_distance() {
    const N: usize = 8;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(1);
    for mut grid in random_grids(N, N, 0.3, N_GRIDS, &mut rng) {
        let (start, target) = (grid.start(), grid.target());
        let mut lengths = Vec::new();
        for strategy in [Strategy::AStar, Strategy::BreadthFirst, Strategy::DepthFirst] {
            let path = run_search(strategy, &mut grid, start, target).unwrap();
            lengths.push(path.map(|p| p.len()));
            grid.reset();
        }
        let (astar, bfs, dfs) = (lengths[0], lengths[1], lengths[2]);
        if astar != bfs {
            visualize_grid(&grid, None);
        }
        assert_eq!(astar, bfs);
        if let (Some(bfs), Some(dfs)) = (bfs, dfs) {
            assert!(bfs <= dfs);
        }
    }
}

#[test]
fn fuzz_indexed_heap() {
    const N: usize = 12;
    const N_GRIDS: usize = 500;
    let mut rng = StdRng::seed_from_u64(2);
    let indexed = SearchOptions {
        indexed_heap: true,
        ..Default::default()
    };
    for mut grid in random_grids(N, N, 0.3, N_GRIDS, &mut rng) {
        let (start, target) = (grid.start(), grid.target());
        let plain = run_search(Strategy::AStar, &mut grid, start, target).unwrap();
        let plain_visited = grid.count_visited();
        grid.reset();
        let fast = run_search_with(Strategy::AStar, &mut grid, start, target, &indexed).unwrap();
        assert_eq!(plain, fast);
        assert_eq!(plain_visited, grid.count_visited());
        grid.reset();
    }
}

#[test]
fn fuzz_wall_follower() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(3);
    for mut grid in random_grids(N, N, 0.3, N_GRIDS, &mut rng) {
        let (start, target) = (grid.start(), grid.target());
        let free = grid.iter().filter(|c| !c.is_obstacle()).count();
        let heading = Heading::ALL[rng.gen_range(0..4)];
        let options = SearchOptions {
            heading,
            ..Default::default()
        };
        let mut walker = Strategy::WallFollower
            .searcher(&mut grid, start, target, &options)
            .unwrap();
        let path = walker.run();
        assert!(walker.steps() <= free);
        if let Some(path) = path {
            check_path(walker.grid(), &path);
            assert!(walker.grid().reachable(start, target));
            // The walk never branches, so every visited cell is on the path.
            assert_eq!(path.len(), walker.grid().count_visited());
        }
    }
}
