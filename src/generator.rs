//! Randomized incremental path construction.
//!
//! Each attempt starts at `grid.start` and alternates a random forward step
//! (`+x` or `+y`) with a random slide along one of the two 45° diagonal rays
//! through the new cell. After every move the remaining gap to `grid.end` is
//! rasterized with [bresenham::line] and accepted as the closing segment if
//! every cell on it is passable. An attempt that walks into a dead end is
//! discarded; attempts repeat up to [MAX_ATTEMPTS] before generation reports
//! failure.
use crate::bresenham;
use crate::validator::validate_path;
use crate::PathGrid;
use core::fmt;
use grid_util::point::Point;
use itertools::iterate;
use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::Rng;

/// Number of independent attempts made before generation gives up.
pub const MAX_ATTEMPTS: usize = 10_000;

/// All attempts within the budget failed. The grid may genuinely admit no
/// path, or the random walks may just have been unlucky; the caller decides
/// whether to change the grid or retry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationExhausted {
    pub attempts: usize,
}

impl fmt::Display for GenerationExhausted {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "no valid path found after {} attempts", self.attempts)
    }
}

impl std::error::Error for GenerationExhausted {}

/// Generates a random path from `grid.start` to `grid.end`.
///
/// On success the returned points begin at `start`, finish at `end`, and every
/// consecutive pair is an orthogonal or diagonal unit step. All randomness is
/// drawn from `rng`, so a seeded generator reproduces the same path.
pub fn generate_path<R: Rng>(
    grid: &PathGrid,
    rng: &mut R,
) -> Result<Vec<Point>, GenerationExhausted> {
    for attempt in 1..=MAX_ATTEMPTS {
        if let Some(points) = try_path(grid, rng) {
            debug!(
                "found a {}-point path from {} to {} on attempt {}",
                points.len(),
                grid.start,
                grid.end,
                attempt
            );
            return Ok(points);
        }
    }
    warn!(
        "no path from {} to {} after {} attempts",
        grid.start, grid.end, MAX_ATTEMPTS
    );
    Err(GenerationExhausted {
        attempts: MAX_ATTEMPTS,
    })
}

/// A single attempt. Returns [None] when the walk dead-ends or the step
/// budget runs out without reaching the goal.
fn try_path<R: Rng>(grid: &PathGrid, rng: &mut R) -> Option<Vec<Point>> {
    let goal = grid.end;
    let mut points = vec![grid.start];
    // Manhattan diameter of the grid, an upper bound on the forward steps
    // needed to cross it.
    for _ in 0..2 * grid.dimension().saturating_sub(1) {
        let current = *points.last().unwrap();
        let next = *forward_steps(grid, current).choose(rng)?;
        points.push(next);

        let target = *diagonal_run_candidates(grid, next).choose(rng).unwrap();
        push_diagonal_run(&mut points, target);

        let tail = *points.last().unwrap();
        let closing = bresenham::line(tail, goal);
        if validate_path(grid, &closing) {
            points.extend(closing.into_iter().skip(1));
            return Some(points);
        }
    }

    let tail = *points.last().unwrap();
    if !on_diagonal(tail, goal) || !clear_diagonal(grid, tail, goal) {
        return None;
    }
    push_diagonal_run(&mut points, goal);
    Some(points)
}

/// The passable forward neighbours of `current`, at most `(x+1, y)` and
/// `(x, y+1)`. An empty result means the walk is stuck.
fn forward_steps(grid: &PathGrid, current: Point) -> Vec<Point> {
    [
        Point::new(current.x + 1, current.y),
        Point::new(current.x, current.y + 1),
    ]
    .into_iter()
    .filter(|&pos| grid.passable(pos))
    .collect()
}

/// Every cell reachable from `origin` along its two 45° rays, walking
/// `(-1, +1)` and `(+1, -1)` while the cells stay passable. `origin` itself is
/// always a candidate, so staying put carries the same weight as any slide.
fn diagonal_run_candidates(grid: &PathGrid, origin: Point) -> Vec<Point> {
    let mut candidates = vec![origin];
    for step in [Point::new(-1, 1), Point::new(1, -1)] {
        candidates.extend(
            iterate(origin + step, move |&pos| pos + step).take_while(|&pos| grid.passable(pos)),
        );
    }
    candidates
}

/// Extends the path from its last point to `target`, one diagonal step at a
/// time, `target` inclusive. Run targets are diagonal by construction;
/// anything else is a bug in the search itself, not a property of the grid.
fn push_diagonal_run(points: &mut Vec<Point>, target: Point) {
    let last = *points.last().unwrap();
    if last == target {
        return;
    }
    assert!(
        on_diagonal(last, target),
        "diagonal run from {} to {} is not a 45° line",
        last,
        target
    );
    let step = Point::new((target.x - last.x).signum(), (target.y - last.y).signum());
    let mut current = last;
    while current != target {
        current = current + step;
        points.push(current);
    }
}

fn on_diagonal(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() == (a.y - b.y).abs()
}

/// Strict reachability along a down-right/up-left diagonal, symmetric in its
/// arguments. Every step landing between the lower-x endpoint and the
/// higher-x endpoint (the latter included) must hold code 1 exactly; cells
/// with other nonzero codes count as passable elsewhere but block this slide.
fn clear_diagonal(grid: &PathGrid, a: Point, b: Point) -> bool {
    if a == b {
        return true;
    }
    let (from, to) = if a.x < b.x { (a, b) } else { (b, a) };
    if from.x == to.x || from.y - to.y != to.x - from.x {
        return false;
    }
    (1..=to.x - from.x).all(|i| grid.get_point(Point::new(from.x + i, from.y - i)) == 1)
}
