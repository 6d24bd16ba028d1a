use grid_util::point::Point;

use crate::{frontier::Frontier, grid::Grid};

/// Last in, first out: the depth-first frontier.
#[derive(Clone, Debug, Default)]
pub struct StackFrontier {
    stack: Vec<Point>,
}

impl StackFrontier {
    pub fn new() -> StackFrontier {
        StackFrontier::default()
    }
}

impl Frontier for StackFrontier {
    fn add(&mut self, _grid: &Grid, cell: Point) {
        self.stack.push(cell);
    }
    fn remove_next(&mut self, _grid: &Grid) -> Option<Point> {
        self.stack.pop()
    }
    /// Depth-first order does not depend on path length.
    fn update_priority(&mut self, _grid: &Grid, _cell: Point) {}
    fn remaining(&self) -> usize {
        self.stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn most_recent_first() {
        let grid = Grid::from_layout(1, 2, &[], (0, 0), (0, 1)).unwrap();
        let mut frontier = StackFrontier::new();
        for x in 0..3 {
            frontier.add(&grid, Point::new(x, 0));
        }
        frontier.update_priority(&grid, Point::new(0, 0));
        assert_eq!(frontier.remaining(), 3);
        assert_eq!(frontier.remove_next(&grid), Some(Point::new(2, 0)));
        assert_eq!(frontier.remove_next(&grid), Some(Point::new(1, 0)));
        assert_eq!(frontier.remove_next(&grid), Some(Point::new(0, 0)));
        assert_eq!(frontier.remove_next(&grid), None);
        assert!(frontier.is_empty());
    }
}
