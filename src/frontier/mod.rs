//! The discovered-but-unexpanded cell sets that give each strategy its expansion order.
//!
//! A frontier only ever sees the grid read-only: it may look at backpointers to rank cells,
//! but writing them is the engine's job.
use crate::grid::Grid;
use crate::heap::IndexedHeap;
use grid_util::point::Point;

pub mod astar;
pub mod queue;
pub mod stack;
pub mod wall;

pub use astar::{AstarFrontier, ScoredCell};
pub use queue::QueueFrontier;
pub use stack::StackFrontier;
pub use wall::{Heading, WallFollowerFrontier};

pub trait Frontier {
    /// Adds a newly discovered cell.
    fn add(&mut self, grid: &Grid, cell: Point);
    /// Removes and returns the next cell to expand, [None] when exhausted.
    fn remove_next(&mut self, grid: &Grid) -> Option<Point>;
    /// Called after the backpointer of an already discovered cell was replaced by a shorter
    /// one. Cells that are no longer enqueued are ignored.
    fn update_priority(&mut self, grid: &Grid, cell: Point);
    fn remaining(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.remaining() == 0
    }
}

/// The frontiers the generic search loop can be driven with.
#[derive(Clone, Debug)]
pub enum AnyFrontier {
    DepthFirst(StackFrontier),
    BreadthFirst(QueueFrontier),
    Astar(AstarFrontier),
    AstarIndexed(AstarFrontier<IndexedHeap<ScoredCell>>),
}

impl Frontier for AnyFrontier {
    fn add(&mut self, grid: &Grid, cell: Point) {
        match self {
            AnyFrontier::DepthFirst(f) => f.add(grid, cell),
            AnyFrontier::BreadthFirst(f) => f.add(grid, cell),
            AnyFrontier::Astar(f) => f.add(grid, cell),
            AnyFrontier::AstarIndexed(f) => f.add(grid, cell),
        }
    }
    fn remove_next(&mut self, grid: &Grid) -> Option<Point> {
        match self {
            AnyFrontier::DepthFirst(f) => f.remove_next(grid),
            AnyFrontier::BreadthFirst(f) => f.remove_next(grid),
            AnyFrontier::Astar(f) => f.remove_next(grid),
            AnyFrontier::AstarIndexed(f) => f.remove_next(grid),
        }
    }
    fn update_priority(&mut self, grid: &Grid, cell: Point) {
        match self {
            AnyFrontier::DepthFirst(f) => f.update_priority(grid, cell),
            AnyFrontier::BreadthFirst(f) => f.update_priority(grid, cell),
            AnyFrontier::Astar(f) => f.update_priority(grid, cell),
            AnyFrontier::AstarIndexed(f) => f.update_priority(grid, cell),
        }
    }
    fn remaining(&self) -> usize {
        match self {
            AnyFrontier::DepthFirst(f) => f.remaining(),
            AnyFrontier::BreadthFirst(f) => f.remaining(),
            AnyFrontier::Astar(f) => f.remaining(),
            AnyFrontier::AstarIndexed(f) => f.remaining(),
        }
    }
}
