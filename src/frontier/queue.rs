use grid_util::point::Point;
use std::collections::VecDeque;

use crate::{frontier::Frontier, grid::Grid};

/// First in, first out: the breadth-first frontier.
#[derive(Clone, Debug, Default)]
pub struct QueueFrontier {
    queue: VecDeque<Point>,
}

impl QueueFrontier {
    pub fn new() -> QueueFrontier {
        QueueFrontier::default()
    }
}

impl Frontier for QueueFrontier {
    fn add(&mut self, _grid: &Grid, cell: Point) {
        self.queue.push_back(cell);
    }
    fn remove_next(&mut self, _grid: &Grid) -> Option<Point> {
        self.queue.pop_front()
    }
    fn update_priority(&mut self, _grid: &Grid, _cell: Point) {}
    fn remaining(&self) -> usize {
        self.queue.len()
    }
}
