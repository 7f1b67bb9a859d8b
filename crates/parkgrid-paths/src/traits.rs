use parkgrid_core::Point;

/// Neighbor enumeration — the seam between a scan and the map feeding it.
///
/// Implementations decide which cells count as adjacent (bounds, walls,
/// one-way aisles); the scan itself stays agnostic of the map's rules.
pub trait Pather {
    /// Append the neighbors of `p` into `buf`. The caller clears `buf`
    /// before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}
