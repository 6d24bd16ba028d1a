//! # maze_search
//!
//! Search strategies over randomly generated obstacle grids. One generic search loop is driven
//! by interchangeable frontiers:
//! - [depth-first](Strategy::DepthFirst) with a stack,
//! - [breadth-first](Strategy::BreadthFirst) with a queue,
//! - [A*](Strategy::AStar) with a binary [heap](heap::Heap) keyed by backpointer chain length
//!   plus Manhattan distance,
//!
//! next to a [wall follower](Strategy::WallFollower), a local heading-based walker with a
//! single-cell frontier that does not use the generic loop.
//!
//! Searches record how every cell was reached as a backpointer inside the [Grid]; a path is the
//! backpointer chain from the target back to the start. Grids are 4-connected with uniform
//! cost. Depth-first and wall-following paths are not shortest paths, and the wall follower
//! may fail on reachable targets.
//!
//! ```
//! use maze_search::{run_search, Grid, Strategy};
//!
//! let mut grid: Grid = "S.#\n..#\n..G".parse().unwrap();
//! let (start, target) = (grid.start(), grid.target());
//! let path = run_search(Strategy::BreadthFirst, &mut grid, start, target).unwrap();
//! assert_eq!(path.map(|p| p.len()), Some(5));
//! ```
pub mod error;
pub mod frontier;
pub mod grid;
pub mod heap;
pub mod search;
pub mod wall_follower;

use core::fmt;
use grid_util::point::Point;
use itertools::Itertools;
use std::str::FromStr;

pub use crate::error::{GridError, ParseHeadingError, ParseStrategyError, SearchError};
pub use crate::frontier::{AnyFrontier, Frontier, Heading};
pub use crate::grid::{Cell, CellType, Grid};
pub use crate::search::{Search, SearchReport, SearchStatus};
pub use crate::wall_follower::WallFollower;

use crate::error::SearchResult;
use crate::frontier::{AstarFrontier, QueueFrontier, StackFrontier};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    DepthFirst,
    BreadthFirst,
    AStar,
    WallFollower,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::DepthFirst,
        Strategy::BreadthFirst,
        Strategy::AStar,
        Strategy::WallFollower,
    ];

    /// Whether the strategy always finds a path when the target is reachable.
    pub fn is_complete(self) -> bool {
        self != Strategy::WallFollower
    }

    /// Whether found paths are always shortest paths on a uniform-cost grid.
    pub fn is_optimal(self) -> bool {
        matches!(self, Strategy::BreadthFirst | Strategy::AStar)
    }

    /// Seeds `grid` with the start cell and returns a searcher ready to step. Fails without
    /// touching the grid if an endpoint is off the grid, blocked, or both are the same cell,
    /// or if the grid still holds backpointers from an earlier search.
    pub fn searcher<'g>(
        self,
        grid: &'g mut Grid,
        start: Point,
        target: Point,
        options: &SearchOptions,
    ) -> SearchResult<Searcher<'g>> {
        let frontier = match self {
            Strategy::DepthFirst => AnyFrontier::DepthFirst(StackFrontier::new()),
            Strategy::BreadthFirst => AnyFrontier::BreadthFirst(QueueFrontier::new()),
            Strategy::AStar if options.indexed_heap => {
                AnyFrontier::AstarIndexed(AstarFrontier::indexed(target))
            }
            Strategy::AStar => AnyFrontier::Astar(AstarFrontier::new(target)),
            Strategy::WallFollower => {
                return WallFollower::new(grid, start, target, options.heading)
                    .map(Searcher::WallFollower)
            }
        };
        Search::new(grid, frontier, start, target).map(Searcher::Template)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Strategy::DepthFirst => "dfs",
            Strategy::BreadthFirst => "bfs",
            Strategy::AStar => "astar",
            Strategy::WallFollower => "wall",
        };
        f.pad(name)
    }
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseStrategyError(s.to_owned()))
    }
}

/// Knobs that do not change what a strategy is, only how it runs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Back the A* frontier with [IndexedHeap](heap::IndexedHeap) so priority updates do not
    /// scan the frontier. Expansion order is the same either way.
    pub indexed_heap: bool,
    /// Initial heading of the wall follower.
    pub heading: Heading,
}

/// A running search of any strategy, for callers that poll between steps.
#[derive(Debug)]
pub enum Searcher<'g> {
    Template(Search<'g, AnyFrontier>),
    WallFollower(WallFollower<'g>),
}

impl<'g> Searcher<'g> {
    pub fn step(&mut self) -> SearchStatus {
        match self {
            Searcher::Template(s) => s.step(),
            Searcher::WallFollower(s) => s.step(),
        }
    }
    /// Steps to completion and returns the path, target first.
    pub fn run(&mut self) -> Option<Vec<Point>> {
        match self {
            Searcher::Template(s) => s.run(),
            Searcher::WallFollower(s) => s.run(),
        }
    }
    pub fn path(&self) -> Option<Vec<Point>> {
        match self {
            Searcher::Template(s) => s.path(),
            Searcher::WallFollower(s) => s.path(),
        }
    }
    pub fn report(&self) -> SearchReport {
        match self {
            Searcher::Template(s) => s.report(),
            Searcher::WallFollower(s) => s.report(),
        }
    }
    pub fn current_cell(&self) -> Option<Point> {
        match self {
            Searcher::Template(s) => s.current_cell(),
            Searcher::WallFollower(s) => s.current_cell(),
        }
    }
    pub fn remaining(&self) -> usize {
        match self {
            Searcher::Template(s) => s.remaining(),
            Searcher::WallFollower(s) => s.remaining(),
        }
    }
    pub fn status(&self) -> SearchStatus {
        match self {
            Searcher::Template(s) => s.status(),
            Searcher::WallFollower(s) => s.status(),
        }
    }
    pub fn is_done(&self) -> bool {
        self.status() != SearchStatus::Running
    }
    pub fn steps(&self) -> usize {
        match self {
            Searcher::Template(s) => s.steps(),
            Searcher::WallFollower(s) => s.steps(),
        }
    }
    pub fn grid(&self) -> &Grid {
        match self {
            Searcher::Template(s) => s.grid(),
            Searcher::WallFollower(s) => s.grid(),
        }
    }
}

/// Runs `strategy` from `start` to `target` with default options. `Ok(None)` means the search
/// ended without reaching the target; the explored backpointers stay on the grid either way.
pub fn run_search(
    strategy: Strategy,
    grid: &mut Grid,
    start: Point,
    target: Point,
) -> SearchResult<Option<Vec<Point>>> {
    run_search_with(strategy, grid, start, target, &SearchOptions::default())
}

pub fn run_search_with(
    strategy: Strategy,
    grid: &mut Grid,
    start: Point,
    target: Point,
    options: &SearchOptions,
) -> SearchResult<Option<Vec<Point>>> {
    Ok(strategy.searcher(grid, start, target, options)?.run())
}

/// Checks that consecutive cells of `path` are 4-adjacent.
pub fn is_connected_path(path: &[Point]) -> bool {
    path.iter()
        .tuple_windows()
        .all(|(a, b)| a.manhattan_distance(b) == 1)
}
