use crate::error::{GridError, GridResult};
use core::fmt;
use grid_util::grid::{BoolGrid, SimpleValueGrid, ValueGrid};
use grid_util::point::Point;
use itertools::Itertools;
use log::debug;
use petgraph::unionfind::UnionFind;
use rand::Rng;
use smallvec::SmallVec;
use std::str::FromStr;

/// Row and column offsets of the 4-neighbourhood in the order [Grid::neighbors] reports them:
/// up, down, right, left. Traversal order of the depth-first and breadth-first searches
/// depends on it.
pub const NEIGHBOR_STEPS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, 1), (0, -1)];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellType {
    Free,
    Obstacle,
}

/// A snapshot of a single lattice cell. The type is fixed at construction; the backpointer is
/// the only state that changes, and only the search engine writes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    row: usize,
    col: usize,
    kind: CellType,
    prev: Option<Point>,
}

impl Cell {
    pub fn row(&self) -> usize {
        self.row
    }
    pub fn col(&self) -> usize {
        self.col
    }
    pub fn kind(&self) -> CellType {
        self.kind
    }
    pub fn is_obstacle(&self) -> bool {
        self.kind == CellType::Obstacle
    }
    /// The position of this cell, with `x` the column and `y` the row.
    pub fn point(&self) -> Point {
        Point::new(self.col as i32, self.row as i32)
    }
    /// The cell this one was reached from. The root of a search points to itself.
    pub fn prev(&self) -> Option<Point> {
        self.prev
    }
    pub fn is_visited(&self) -> bool {
        self.prev.is_some()
    }
}

/// One step from `point` by `(dr, dc)`, or [None] if the coordinates would overflow.
pub(crate) fn step_from(point: Point, dr: i32, dc: i32) -> Option<Point> {
    Some(Point::new(point.x.checked_add(dc)?, point.y.checked_add(dr)?))
}

/// A fixed `rows x cols` lattice with a distinct free start and target. Obstacles live in a
/// [BoolGrid] (`true` is blocked) and backpointers in a parallel [SimpleValueGrid]. Connected
/// components of the free cells are computed once, as the obstacle layout never changes after
/// construction.
#[derive(Clone, Debug)]
pub struct Grid {
    obstacles: BoolGrid,
    prev: SimpleValueGrid<Option<Point>>,
    density: f64,
    start: Point,
    target: Point,
    components: UnionFind<usize>,
}

fn checked_len(rows: usize, cols: usize) -> GridResult<usize> {
    let fits = |n: usize| n > 0 && n <= i32::MAX as usize;
    match rows.checked_mul(cols) {
        Some(len) if fits(rows) && fits(cols) => Ok(len),
        _ => Err(GridError::InvalidDimensions { rows, cols }),
    }
}

impl Grid {
    /// Generates a random grid where every cell independently is an obstacle with probability
    /// `density`. Start and target are drawn uniformly from the free cells.
    pub fn new(rows: usize, cols: usize, density: f64) -> GridResult<Grid> {
        Grid::with_rng(rows, cols, density, &mut rand::thread_rng())
    }

    /// Same as [Grid::new] but draws from the given generator, which makes mazes reproducible.
    pub fn with_rng<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        density: f64,
        rng: &mut R,
    ) -> GridResult<Grid> {
        checked_len(rows, cols)?;
        if !(0.0..=1.0).contains(&density) {
            return Err(GridError::InvalidDensity(density));
        }
        let mut obstacles = BoolGrid::new(cols, rows, false);
        let mut free = Vec::new();
        for y in 0..rows as i32 {
            for x in 0..cols as i32 {
                let blocked = rng.gen_bool(density);
                obstacles.set(x, y, blocked);
                if !blocked {
                    free.push(Point::new(x, y));
                }
            }
        }
        if free.len() < 2 {
            return Err(GridError::NotEnoughFreeCells(free.len()));
        }
        // Two distinct draws: the second skips over the slot taken by the first.
        let first = rng.gen_range(0..free.len());
        let mut second = rng.gen_range(0..free.len() - 1);
        if second >= first {
            second += 1;
        }
        let (start, target) = (free[first], free[second]);
        debug!(
            "Generated {}x{} grid with density {}: {} free cells, start {:?}, target {:?}",
            rows,
            cols,
            density,
            free.len(),
            start,
            target
        );
        Ok(Grid::assemble(obstacles, density, start, target))
    }

    /// Builds a grid with a fixed obstacle layout. Obstacles, start and target are given as
    /// `(row, col)` pairs.
    pub fn from_layout(
        rows: usize,
        cols: usize,
        obstacles: &[(usize, usize)],
        start: (usize, usize),
        target: (usize, usize),
    ) -> GridResult<Grid> {
        let len = checked_len(rows, cols)?;
        let mut grid = BoolGrid::new(cols, rows, false);
        let point = |(row, col): (usize, usize)| {
            if row < rows && col < cols {
                Ok(Point::new(col as i32, row as i32))
            } else {
                Err(GridError::OutOfBounds {
                    row: row as i64,
                    col: col as i64,
                    rows,
                    cols,
                })
            }
        };
        for &obstacle in obstacles {
            grid.set_point(point(obstacle)?, true);
        }
        let start_point = point(start)?;
        let target_point = point(target)?;
        for (p, (row, col)) in [(start_point, start), (target_point, target)] {
            if grid.get_point(p) {
                return Err(GridError::BlockedEndpoint { row, col });
            }
        }
        if start_point == target_point {
            return Err(GridError::SameEndpoints {
                row: start.0,
                col: start.1,
            });
        }
        let blocked = (0..rows as i32)
            .cartesian_product(0..cols as i32)
            .filter(|&(y, x)| grid.get(x, y))
            .count();
        let density = blocked as f64 / len as f64;
        Ok(Grid::assemble(grid, density, start_point, target_point))
    }

    fn assemble(obstacles: BoolGrid, density: f64, start: Point, target: Point) -> Grid {
        let (width, height) = (obstacles.width(), obstacles.height());
        let mut grid = Grid {
            obstacles,
            prev: SimpleValueGrid::new(width, height, None),
            density,
            start,
            target,
            components: UnionFind::new(width * height),
        };
        grid.generate_components();
        grid
    }

    /// Links every free cell to its free right and lower neighbours.
    fn generate_components(&mut self) {
        for y in 0..self.rows() as i32 {
            for x in 0..self.cols() as i32 {
                if self.obstacles.get(x, y) {
                    continue;
                }
                let p_ix = self.obstacles.compute_ix(x, y);
                for n in [Point::new(x + 1, y), Point::new(x, y + 1)] {
                    if self.is_free(n) {
                        self.components
                            .union(p_ix, self.obstacles.get_ix_point(&n));
                    }
                }
            }
        }
    }

    pub fn rows(&self) -> usize {
        self.obstacles.height()
    }
    pub fn cols(&self) -> usize {
        self.obstacles.width()
    }
    /// Number of cells, always `rows * cols`.
    pub fn len(&self) -> usize {
        self.rows() * self.cols()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Obstacle probability the grid was generated with, or the obstacle fraction for fixed
    /// layouts.
    pub fn density(&self) -> f64 {
        self.density
    }
    pub fn start(&self) -> Point {
        self.start
    }
    pub fn target(&self) -> Point {
        self.target
    }

    pub fn in_bounds(&self, point: Point) -> bool {
        self.obstacles.point_in_bounds(point)
    }

    /// Whether `point` lies on the grid and is not an obstacle.
    pub fn is_free(&self, point: Point) -> bool {
        self.in_bounds(point) && !self.obstacles.get_point(point)
    }

    /// Caller checks bounds.
    fn snapshot(&self, point: Point) -> Cell {
        Cell {
            row: point.y as usize,
            col: point.x as usize,
            kind: if self.obstacles.get_point(point) {
                CellType::Obstacle
            } else {
                CellType::Free
            },
            prev: self.prev.get_point(point),
        }
    }

    pub fn cell_at(&self, row: usize, col: usize) -> GridResult<Cell> {
        if row < self.rows() && col < self.cols() {
            Ok(self.snapshot(Point::new(col as i32, row as i32)))
        } else {
            Err(GridError::OutOfBounds {
                row: row as i64,
                col: col as i64,
                rows: self.rows(),
                cols: self.cols(),
            })
        }
    }

    pub fn cell(&self, point: Point) -> GridResult<Cell> {
        if self.in_bounds(point) {
            Ok(self.snapshot(point))
        } else {
            Err(GridError::OutOfBounds {
                row: point.y as i64,
                col: point.x as i64,
                rows: self.rows(),
                cols: self.cols(),
            })
        }
    }

    /// Iterates all cells row by row.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows() as i32)
            .cartesian_product(0..self.cols() as i32)
            .map(move |(y, x)| self.snapshot(Point::new(x, y)))
    }

    /// The in-bounds, non-obstacle cells adjacent to `point`, in the order up, down, right, left.
    pub fn neighbors(&self, point: Point) -> SmallVec<[Point; 4]> {
        NEIGHBOR_STEPS
            .iter()
            .filter_map(|&(dr, dc)| step_from(point, dr, dc))
            .filter(|&p| self.is_free(p))
            .collect()
    }

    /// Clears every backpointer. Obstacles, start and target are left as they are.
    pub fn reset(&mut self) {
        self.prev = SimpleValueGrid::new(self.cols(), self.rows(), None);
    }

    /// Number of cells holding a backpointer.
    pub fn count_visited(&self) -> usize {
        self.iter().filter(|c| c.is_visited()).count()
    }

    pub fn is_visited(&self, point: Point) -> bool {
        self.prev(point).is_some()
    }

    pub fn prev(&self, point: Point) -> Option<Point> {
        if self.in_bounds(point) {
            self.prev.get_point(point)
        } else {
            None
        }
    }

    pub(crate) fn set_prev(&mut self, point: Point, prev: Point) {
        if self.in_bounds(point) {
            self.prev.set_point(point, Some(prev));
        }
    }

    /// Walks the backpointer chain from `point` up to and including its root.
    fn chain(&self, point: Point) -> impl Iterator<Item = Point> + '_ {
        std::iter::successors(Some(point), move |&p| {
            self.prev(p).filter(|&prev| prev != p)
        })
    }

    /// Number of cells on the backpointer chain from `point` to the root, both included, or 0
    /// for an unvisited cell. The chain is walked on every call.
    pub fn trace_len(&self, point: Point) -> usize {
        if self.is_visited(point) {
            self.chain(point).count()
        } else {
            0
        }
    }

    /// The backpointer chain from `point` back to the root, `point` first. [None] if `point`
    /// was never reached.
    pub fn traceback(&self, point: Point) -> Option<Vec<Point>> {
        if self.is_visited(point) {
            Some(self.chain(point).collect())
        } else {
            None
        }
    }

    /// Checks if `a` and `b` are free cells of the same connected component.
    pub fn reachable(&self, a: Point, b: Point) -> bool {
        self.is_free(a)
            && self.is_free(b)
            && self.components.equiv(
                self.obstacles.get_ix_point(&a),
                self.obstacles.get_ix_point(&b),
            )
    }

    fn symbol(&self, cell: Cell) -> char {
        let p = cell.point();
        if cell.is_obstacle() {
            '#'
        } else if p == self.start {
            'S'
        } else if p == self.target {
            'G'
        } else if cell.is_visited() {
            'o'
        } else {
            '.'
        }
    }
}

/// One line per row: `#` obstacle, `S` start, `G` target, `o` visited, `.` free.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.rows() as i32 {
            let line = (0..self.cols() as i32)
                .map(|x| self.symbol(self.snapshot(Point::new(x, y))))
                .join("");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Parses the format written by [Display](fmt::Display). Visited markers are read as free
/// cells; blank lines are skipped.
impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect::<Vec<&str>>();
        let rows = lines.len();
        let cols = lines.first().map_or(0, |l| l.chars().count());
        let mut obstacles = Vec::new();
        let mut start = None;
        let mut target = None;
        for (row, line) in lines.iter().enumerate() {
            if line.chars().count() != cols {
                return Err(GridError::Parse(format!(
                    "row {} has {} cells, expected {}",
                    row,
                    line.chars().count(),
                    cols
                )));
            }
            for (col, symbol) in line.chars().enumerate() {
                let slot = match symbol {
                    '.' | 'o' => None,
                    '#' => {
                        obstacles.push((row, col));
                        None
                    }
                    'S' => Some(&mut start),
                    'G' => Some(&mut target),
                    other => {
                        return Err(GridError::Parse(format!(
                            "unexpected symbol {:?} at ({}, {})",
                            other, row, col
                        )))
                    }
                };
                if let Some(slot) = slot {
                    if slot.replace((row, col)).is_some() {
                        return Err(GridError::Parse(format!(
                            "more than one {:?} marker",
                            symbol
                        )));
                    }
                }
            }
        }
        let start = start.ok_or_else(|| GridError::Parse("missing start marker S".into()))?;
        let target = target.ok_or_else(|| GridError::Parse("missing target marker G".into()))?;
        Grid::from_layout(rows, cols, &obstacles, start, target)
    }
}
