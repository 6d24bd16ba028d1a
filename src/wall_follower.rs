//! A local, non-backtracking walker. It keeps a compass heading and, at every step, moves to
//! the first free, unvisited cell found looking forward, right, back and left, turning to
//! face the way it moved. It has no view of the grid beyond the current cell's neighbours and
//! stops for good when all four are blocked or already visited, so it can miss targets that
//! are reachable.
use grid_util::point::Point;
use log::{debug, info};

use crate::error::SearchResult;
use crate::frontier::{Frontier, Heading, WallFollowerFrontier};
use crate::grid::Grid;
use crate::search::{check_endpoints, log_exhausted, SearchReport, SearchStatus};

#[derive(Debug)]
pub struct WallFollower<'g> {
    grid: &'g mut Grid,
    frontier: WallFollowerFrontier,
    start: Point,
    target: Point,
    current: Option<Point>,
    status: SearchStatus,
    steps: usize,
}

impl<'g> WallFollower<'g> {
    pub fn new(
        grid: &'g mut Grid,
        start: Point,
        target: Point,
        heading: Heading,
    ) -> SearchResult<WallFollower<'g>> {
        check_endpoints(grid, start, target)?;
        let mut frontier = WallFollowerFrontier::new(heading);
        grid.set_prev(start, start);
        frontier.add(grid, start);
        debug!(
            "Following walls from {:?} to {:?}, facing {}",
            start, target, heading
        );
        Ok(WallFollower {
            grid,
            frontier,
            start,
            target,
            current: None,
            status: SearchStatus::Running,
            steps: 0,
        })
    }

    /// Moves one cell. Every step either visits a new cell or ends the walk, so a walk takes at
    /// most as many steps as there are free cells.
    pub fn step(&mut self) -> SearchStatus {
        if self.status != SearchStatus::Running {
            return self.status;
        }
        let Some(current) = self.frontier.remove_next(self.grid) else {
            self.status = SearchStatus::Exhausted;
            log_exhausted(self.grid, self.start, self.target, false);
            return self.status;
        };
        self.current = Some(current);
        self.steps += 1;
        let next = self
            .frontier
            .heading()
            .scan_order()
            .into_iter()
            .filter_map(|heading| Some((heading, heading.advance(current)?)))
            .find(|&(_, p)| self.grid.is_free(p) && !self.grid.is_visited(p));
        if let Some((heading, next)) = next {
            self.grid.set_prev(next, current);
            self.frontier.turn_to(heading);
            self.frontier.add(self.grid, next);
            if next == self.target {
                self.status = SearchStatus::Found;
                info!(
                    "Wall follower reached {:?} after {} steps",
                    self.target, self.steps
                );
            }
        }
        self.status
    }

    pub fn run(&mut self) -> Option<Vec<Point>> {
        while self.step() == SearchStatus::Running {}
        self.path()
    }

    /// The cells from target back to start, once the target was found.
    pub fn path(&self) -> Option<Vec<Point>> {
        match self.status {
            SearchStatus::Found => self.grid.traceback(self.target),
            _ => None,
        }
    }

    pub fn report(&self) -> SearchReport {
        SearchReport {
            path: self.path(),
            visited: self.grid.count_visited(),
            steps: self.steps,
        }
    }

    pub fn current_cell(&self) -> Option<Point> {
        self.current
    }
    /// Zero or one.
    pub fn remaining(&self) -> usize {
        self.frontier.remaining()
    }
    pub fn heading(&self) -> Heading {
        self.frontier.heading()
    }
    pub fn is_done(&self) -> bool {
        self.status != SearchStatus::Running
    }
    pub fn status(&self) -> SearchStatus {
        self.status
    }
    pub fn steps(&self) -> usize {
        self.steps
    }
    pub fn grid(&self) -> &Grid {
        self.grid
    }
}
