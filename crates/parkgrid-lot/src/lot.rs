//! The parking lot engine: owns the occupancy grid and answers
//! nearest-spot queries over it.

use parkgrid_core::{Grid, Point, Spot};
use parkgrid_paths::{Pather, ScanRange, axis_route, manhattan};
use rand::Rng;

use crate::lotgen::{ConfigError, LotGen};

/// A parking lot: the occupancy grid plus the scan state used to answer
/// nearest-spot queries.
///
/// Apart from the grid the lot carries no state between queries — the
/// scan buffers are a pure allocation cache, reset on every call. Access
/// is single-threaded; callers serialize queries.
pub struct ParkingLot {
    grid: Grid,
    scan: ScanRange,
}

impl ParkingLot {
    /// Generate a lot with `floor(rows * columns * occupancy)` spots
    /// taken, drawing spot positions from `rng`.
    pub fn generate<R: Rng>(
        rows: i32,
        columns: i32,
        occupancy: f64,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        let grid = LotGen::new(rng).random_lot(rows, columns, occupancy)?;
        Ok(Self::from_grid(grid))
    }

    /// Wrap an existing grid.
    ///
    /// This is the load operation test harnesses use to install a
    /// hand-built layout; dimensions travel with the grid value, so the
    /// lot and its grid can never disagree about shape.
    pub fn from_grid(grid: Grid) -> Self {
        let scan = ScanRange::new(grid.bounds());
        Self { grid, scan }
    }

    /// Replace the grid wholesale, resizing the scan state to match.
    /// Subsequent queries derive everything from the new grid's contents.
    pub fn load(&mut self, grid: Grid) {
        self.scan.set_range(grid.bounds());
        self.grid = grid;
    }

    /// Re-scatter occupancy on the current dimensions.
    pub fn regenerate<R: Rng>(&mut self, occupancy: f64, rng: &mut R) -> Result<(), ConfigError> {
        let grid = LotGen::new(rng).random_lot(self.rows(), self.columns(), occupancy)?;
        self.load(grid);
        Ok(())
    }

    /// The current occupancy grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of rows.
    pub fn rows(&self) -> i32 {
        self.grid.height()
    }

    /// Number of columns.
    pub fn columns(&self) -> i32 {
        self.grid.width()
    }

    /// Whether all four cardinal neighbours of `p` exist and are empty.
    ///
    /// A spot on the lot boundary is never fully surrounded: at least one
    /// of its neighbours falls outside the grid.
    pub fn fully_surrounded(&self, p: Point) -> bool {
        p.neighbors_4()
            .into_iter()
            .all(|n| self.grid.at(n) == Some(Spot::Empty))
    }

    /// Find the empty spot nearest to `start` by Manhattan distance.
    ///
    /// Returns `None` when `start` lies outside the grid, and `None` when
    /// no empty spot is reachable. When `start` is fully surrounded the
    /// spot directly below it is returned without searching; a fully
    /// surrounded spot is never on the boundary, so the spot below always
    /// exists and is one of its four empty neighbours.
    ///
    /// The scan expands neighbours in the fixed order up, right, down,
    /// left and visits the whole reachable component; occupied spots do
    /// not block traversal, they are merely not candidates. Among empty
    /// spots at equal distance the earliest-discovered one wins.
    pub fn nearest_empty(&mut self, start: Point) -> Option<Point> {
        if !self.grid.contains(start) {
            return None;
        }
        if self.fully_surrounded(start) {
            log::debug!("start {start} is fully surrounded, taking the spot below");
            return Some(start.shift(0, 1));
        }
        let grid = &self.grid;
        self.scan
            .nearest_match(&Drivable { grid }, start, |p| grid.at(p) == Some(Spot::Empty))
    }

    /// Manhattan distance between two spots.
    pub fn distance(&self, a: Point, b: Point) -> i32 {
        manhattan(a, b)
    }

    /// Ordered spot-to-spot route from `from` to `to`, rows first; both
    /// endpoints included.
    pub fn route(&self, from: Point, to: Point) -> Vec<Point> {
        axis_route(from, to)
    }
}

/// Cardinal pather over the whole lot. Occupied spots do not block
/// traversal; occupancy only decides which spot a scan may pick.
struct Drivable<'a> {
    grid: &'a Grid,
}

impl Pather for Drivable<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.neighbors_4() {
            if self.grid.contains(n) {
                buf.push(n);
            }
        }
    }
}
