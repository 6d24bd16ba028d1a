//! The generic search loop shared by the depth-first, breadth-first and A* strategies.
//!
//! Starting from the start cell, whose backpointer points to itself, every step removes the
//! next cell from the frontier and looks at its neighbours:
//! - an unvisited neighbour gets the current cell as backpointer and joins the frontier;
//! - a visited neighbour is re-pointed to the current cell only if that makes its chain to
//!   the start strictly shorter, after which the frontier is told to re-rank it. Equal-length
//!   alternatives never replace the first backpointer found;
//! - reaching the target as a neighbour ends the search.
//!
//! Chain lengths are re-walked on every comparison rather than cached.
use grid_util::point::Point;
use log::{debug, info, warn};

use crate::error::{GridError, SearchError, SearchResult};
use crate::frontier::Frontier;
use crate::grid::Grid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchStatus {
    Running,
    /// The target was reached; a path is available.
    Found,
    /// The frontier ran dry before reaching the target.
    Exhausted,
}

/// What a batch caller keeps from a finished search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchReport {
    /// Target first, start last.
    pub path: Option<Vec<Point>>,
    /// Cells holding a backpointer when the search stopped.
    pub visited: usize,
    /// Number of cells expanded.
    pub steps: usize,
}

/// Rejects endpoints that are off the grid, blocked or equal, and grids still carrying
/// backpointers from an earlier search. Nothing is written to the grid.
pub(crate) fn check_endpoints(grid: &Grid, start: Point, target: Point) -> SearchResult<()> {
    for point in [start, target] {
        let cell = grid.cell(point)?;
        if cell.is_obstacle() {
            return Err(GridError::BlockedEndpoint {
                row: cell.row(),
                col: cell.col(),
            }
            .into());
        }
    }
    if start == target {
        return Err(GridError::SameEndpoints {
            row: start.y as usize,
            col: start.x as usize,
        }
        .into());
    }
    let visited = grid.count_visited();
    if visited > 0 {
        return Err(SearchError::StaleGrid { visited });
    }
    Ok(())
}

pub(crate) fn log_exhausted(grid: &Grid, start: Point, target: Point, complete: bool) {
    if complete && grid.reachable(start, target) {
        warn!(
            "Frontier exhausted although {:?} is reachable from {:?}",
            target, start
        );
    } else {
        info!(
            "No path from {:?} to {:?}, {} cells visited",
            start,
            target,
            grid.count_visited()
        );
    }
}

/// A search in progress over a borrowed grid. Drive it with [Search::step] to observe each
/// expansion, or with [Search::run] to completion.
#[derive(Debug)]
pub struct Search<'g, F> {
    grid: &'g mut Grid,
    frontier: F,
    start: Point,
    target: Point,
    current: Option<Point>,
    status: SearchStatus,
    steps: usize,
}

impl<'g, F: Frontier> Search<'g, F> {
    pub fn new(
        grid: &'g mut Grid,
        mut frontier: F,
        start: Point,
        target: Point,
    ) -> SearchResult<Search<'g, F>> {
        check_endpoints(grid, start, target)?;
        grid.set_prev(start, start);
        frontier.add(grid, start);
        debug!("Searching from {:?} to {:?}", start, target);
        Ok(Search {
            grid,
            frontier,
            start,
            target,
            current: None,
            status: SearchStatus::Running,
            steps: 0,
        })
    }

    /// Expands one cell. Once the search is done this returns the final status without
    /// touching anything.
    pub fn step(&mut self) -> SearchStatus {
        if self.status != SearchStatus::Running {
            return self.status;
        }
        let Some(current) = self.frontier.remove_next(self.grid) else {
            self.status = SearchStatus::Exhausted;
            log_exhausted(self.grid, self.start, self.target, true);
            return self.status;
        };
        self.current = Some(current);
        self.steps += 1;
        for neighbor in self.grid.neighbors(current) {
            if !self.grid.is_visited(neighbor) {
                self.grid.set_prev(neighbor, current);
                self.frontier.add(self.grid, neighbor);
            } else if self.grid.trace_len(current) + 1 < self.grid.trace_len(neighbor) {
                self.grid.set_prev(neighbor, current);
                self.frontier.update_priority(self.grid, neighbor);
            }
            if neighbor == self.target {
                self.status = SearchStatus::Found;
                info!(
                    "Found {:?} after {} expansions, {} cells visited",
                    self.target,
                    self.steps,
                    self.grid.count_visited()
                );
                break;
            }
        }
        self.status
    }

    /// Steps until the target is found or the frontier is exhausted.
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

    /// The cell expanded by the latest step.
    pub fn current_cell(&self) -> Option<Point> {
        self.current
    }
    pub fn remaining(&self) -> usize {
        self.frontier.remaining()
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
    pub fn start(&self) -> Point {
        self.start
    }
    pub fn target(&self) -> Point {
        self.target
    }
    pub fn grid(&self) -> &Grid {
        self.grid
    }
    pub fn frontier(&self) -> &F {
        &self.frontier
    }
}
