//! # grid_pathgen
//!
//! Randomized path generation on square grids of passability codes. Instead of
//! searching for an optimal route, the generator grows a path from the start
//! cell with random forward steps and random 45° diagonal runs, and after
//! every move tries to close the remaining gap to the goal with a single
//! [Bresenham](https://en.wikipedia.org/wiki/Bresenham%27s_line_algorithm)
//! line. Attempts are cheap and independent, so failed ones are simply
//! discarded and retried up to a fixed budget.
//!
//! Cell codes: `0` is blocked, any other code is passable. The strict
//! diagonal fallback used at the end of an attempt additionally requires code
//! `1` exactly, so cells carrying other codes can be crossed by ordinary moves
//! but not by that final slide.
pub mod bresenham;
mod generator;
mod validator;

pub use crate::generator::{generate_path, GenerationExhausted, MAX_ATTEMPTS};
pub use crate::validator::validate_path;

use core::fmt;
use grid_util::grid::{Grid, SimpleGrid};
use grid_util::point::Point;

/// Square grid of passability codes together with the start and end cells a
/// path should connect. Wraps a [SimpleGrid] for the raw values; `start` and
/// `end` are plain fields and can be repositioned freely before generating.
/// Generation never mutates the grid.
#[derive(Clone, Debug)]
pub struct PathGrid {
    pub cells: SimpleGrid<u8>,
    pub start: Point,
    pub end: Point,
}

impl PathGrid {
    /// Creates a `dimension`×`dimension` grid filled with `default_code`.
    /// `start` defaults to the origin and `end` to the opposite corner.
    pub fn new(dimension: usize, default_code: u8) -> PathGrid {
        PathGrid {
            cells: SimpleGrid::new(dimension, dimension, default_code),
            start: Point::new(0, 0),
            end: Point::new(dimension as i32 - 1, dimension as i32 - 1),
        }
    }
    pub fn dimension(&self) -> usize {
        self.cells.width
    }
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.cells.get(x, y)
    }
    pub fn set(&mut self, x: usize, y: usize, code: u8) {
        self.cells.set(x, y, code);
    }
    pub fn get_point(&self, pos: Point) -> u8 {
        self.cells.get_point(pos)
    }
    pub fn set_point(&mut self, pos: Point, code: u8) {
        self.cells.set_point(pos, code);
    }
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.cells.width && (y as usize) < self.cells.height
    }
    /// A cell can be moved onto if it lies on the grid and its code is nonzero.
    pub fn passable(&self, pos: Point) -> bool {
        self.in_bounds(pos.x, pos.y) && self.cells.get_point(pos) != 0
    }
}

impl fmt::Display for PathGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid ({} -> {}):", self.start, self.end)?;
        for y in 0..self.cells.height {
            let values = (0..self.cells.width)
                .map(|x| self.cells.get(x, y) as i32)
                .collect::<Vec<i32>>();
            writeln!(f, "{:?}", values)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoints_span_the_grid() {
        let grid = PathGrid::new(5, 1);
        assert_eq!(grid.dimension(), 5);
        assert_eq!(grid.start, Point::new(0, 0));
        assert_eq!(grid.end, Point::new(4, 4));
    }

    #[test]
    fn passable_checks_bounds_and_code() {
        let mut grid = PathGrid::new(3, 1);
        grid.set(1, 2, 0);
        grid.set(2, 0, 7);
        assert!(grid.passable(Point::new(0, 0)));
        assert!(grid.passable(Point::new(2, 0)));
        assert!(!grid.passable(Point::new(1, 2)));
        assert!(!grid.passable(Point::new(-1, 0)));
        assert!(!grid.passable(Point::new(0, 3)));
    }
}
