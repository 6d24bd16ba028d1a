use grid_util::point::Point;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::{
    frontier::Frontier,
    grid::Grid,
    heap::{Heap, IndexedHeap, PriorityQueue},
};

/// A cell with the `f = g + h` it was ranked with. Identity is the cell alone, so an updated
/// score replaces the enqueued entry for the same cell.
#[derive(Clone, Copy, Debug, Eq)]
pub struct ScoredCell {
    pub f: usize,
    pub cell: Point,
}

impl PartialEq for ScoredCell {
    fn eq(&self, other: &Self) -> bool {
        self.cell == other.cell
    }
}

impl Hash for ScoredCell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.cell.hash(state);
    }
}

type CostOrder = fn(&ScoredCell, &ScoredCell) -> Ordering;

/// Smallest `f` first.
pub fn by_cost(a: &ScoredCell, b: &ScoredCell) -> Ordering {
    a.f.cmp(&b.f)
}

/// Ranks cells by `g + h`, where `g` is the length of the backpointer chain back to the start
/// and `h` the Manhattan distance to the target. The score is taken when a cell is added and
/// again when the engine reports a shorter backpointer.
///
/// With the default [Heap] every priority update scans the whole frontier, which is the
/// scalability ceiling of this frontier on large open grids. [AstarFrontier::indexed] trades
/// a hash map of slots for O(log n) updates.
#[derive(Clone, Debug)]
pub struct AstarFrontier<Q = Heap<ScoredCell>> {
    queue: Q,
    target: Point,
}

impl AstarFrontier {
    pub fn new(target: Point) -> AstarFrontier {
        AstarFrontier {
            queue: Heap::new(by_cost as CostOrder),
            target,
        }
    }
}

impl AstarFrontier<IndexedHeap<ScoredCell>> {
    pub fn indexed(target: Point) -> AstarFrontier<IndexedHeap<ScoredCell>> {
        AstarFrontier {
            queue: IndexedHeap::new(by_cost as CostOrder),
            target,
        }
    }
}

impl<Q> AstarFrontier<Q> {
    pub fn target(&self) -> Point {
        self.target
    }

    fn score(&self, grid: &Grid, cell: Point) -> ScoredCell {
        ScoredCell {
            f: grid.trace_len(cell) + cell.manhattan_distance(&self.target) as usize,
            cell,
        }
    }
}

impl<Q: PriorityQueue<ScoredCell>> Frontier for AstarFrontier<Q> {
    fn add(&mut self, grid: &Grid, cell: Point) {
        let scored = self.score(grid, cell);
        self.queue.push(scored);
    }
    fn remove_next(&mut self, _grid: &Grid) -> Option<Point> {
        self.queue.pop().map(|s| s.cell)
    }
    fn update_priority(&mut self, grid: &Grid, cell: Point) {
        let scored = self.score(grid, cell);
        self.queue.update_priority(scored);
    }
    fn remaining(&self) -> usize {
        self.queue.len()
    }
}
