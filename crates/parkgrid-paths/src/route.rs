//! The Manhattan metric and axis-aligned route construction.

use parkgrid_core::Point;

/// Manhattan (L1) distance between two points.
///
/// Total over all integer inputs, in range or not.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Build the axis-aligned route from `from` to `to`, rows first.
///
/// Walks one spot at a time toward `to`, eliminating the row difference
/// before touching the column difference. The result includes both
/// endpoints, so its length is always `manhattan(from, to) + 1` (a lone
/// `from` when the two coincide). Every step reduces the remaining
/// distance by exactly one, which bounds the walk.
pub fn axis_route(from: Point, to: Point) -> Vec<Point> {
    let mut route = Vec::with_capacity(manhattan(from, to) as usize + 1);
    let mut cur = from;
    while cur != to {
        route.push(cur);
        if cur.y < to.y {
            cur = cur.shift(0, 1);
        } else if cur.y > to.y {
            cur = cur.shift(0, -1);
        } else if cur.x < to.x {
            cur = cur.shift(1, 0);
        } else {
            cur = cur.shift(-1, 0);
        }
    }
    route.push(to);
    route
}
