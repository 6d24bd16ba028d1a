use core::fmt;
use grid_util::point::Point;
use std::str::FromStr;

use crate::{
    error::ParseHeadingError,
    frontier::Frontier,
    grid::{step_from, Grid},
};

/// Compass heading of the wall follower. North is towards row 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Heading {
    North,
    #[default]
    East,
    South,
    West,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    pub fn turn_right(self) -> Heading {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
        }
    }

    /// Row and column offset of one step in this heading.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Heading::North => (-1, 0),
            Heading::East => (0, 1),
            Heading::South => (1, 0),
            Heading::West => (0, -1),
        }
    }

    /// The cell one step ahead, or [None] if its coordinates would overflow.
    pub fn advance(self, point: Point) -> Option<Point> {
        let (dr, dc) = self.offset();
        step_from(point, dr, dc)
    }

    /// Forward, right, back, left relative to this heading.
    pub fn scan_order(self) -> [Heading; 4] {
        let right = self.turn_right();
        let back = right.turn_right();
        [self, right, back, back.turn_right()]
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Heading::North => "north",
            Heading::East => "east",
            Heading::South => "south",
            Heading::West => "west",
        };
        f.pad(name)
    }
}

impl FromStr for Heading {
    type Err = ParseHeadingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Heading::ALL
            .into_iter()
            .find(|h| {
                let name = h.to_string();
                s.eq_ignore_ascii_case(&name) || s.eq_ignore_ascii_case(&name[..1])
            })
            .ok_or_else(|| ParseHeadingError(s.to_owned()))
    }
}

/// Holds at most one cell: the one the wall follower committed to. Adding a cell replaces the
/// held one.
#[derive(Clone, Debug, Default)]
pub struct WallFollowerFrontier {
    slot: Option<Point>,
    heading: Heading,
}

impl WallFollowerFrontier {
    pub fn new(heading: Heading) -> WallFollowerFrontier {
        WallFollowerFrontier {
            slot: None,
            heading,
        }
    }
    pub fn heading(&self) -> Heading {
        self.heading
    }
    pub fn turn_to(&mut self, heading: Heading) {
        self.heading = heading;
    }
}

impl Frontier for WallFollowerFrontier {
    fn add(&mut self, _grid: &Grid, cell: Point) {
        self.slot = Some(cell);
    }
    fn remove_next(&mut self, _grid: &Grid) -> Option<Point> {
        self.slot.take()
    }
    fn update_priority(&mut self, _grid: &Grid, _cell: Point) {}
    fn remaining(&self) -> usize {
        self.slot.is_some() as usize
    }
}
