//! Integer line rasterization using
//! [Bresenham's algorithm](https://en.wikipedia.org/wiki/Bresenham%27s_line_algorithm),
//! generalized to all octants. Lines are canonicalized before rasterizing so
//! that swapping the endpoints yields the exact same cells in reverse order.
use grid_util::point::Point;

/// Rasterizes the straight segment between two points, endpoints inclusive.
/// The result advances exactly one cell per step of the dominant axis, with
/// no gaps or duplicates; `line(p, p)` is the single-point sequence `[p]`.
pub fn line(from: Point, to: Point) -> Vec<Point> {
    if (to.x, to.y) < (from.x, from.y) {
        let mut points = line(to, from);
        points.reverse();
        return points;
    }
    let dx = (to.x - from.x).abs();
    let dy = -(to.y - from.y).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };
    let mut err = dx + dy;
    let mut current = from;
    let mut points = Vec::with_capacity(dx.max(-dy) as usize + 1);
    loop {
        points.push(current);
        if current == to {
            return points;
        }
        let doubled = 2 * err;
        if doubled >= dy {
            err += dy;
            current.x += sx;
        }
        if doubled <= dx {
            err += dx;
            current.y += sy;
        }
    }
}
