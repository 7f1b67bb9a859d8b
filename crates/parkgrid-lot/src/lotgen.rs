//! Random lot generation.

use parkgrid_core::{Grid, Spot};
use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;

/// Configuration rejected at generation time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Rows and columns must both be positive.
    InvalidDimensions { rows: i32, columns: i32 },
    /// Occupancy must lie in `[0, 1]`.
    InvalidOccupancy(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { rows, columns } => {
                write!(f, "lot dimensions must be positive, got {rows}x{columns}")
            }
            Self::InvalidOccupancy(rate) => {
                write!(f, "occupancy must lie in [0, 1], got {rate}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Random occupancy generator for parking lots.
///
/// Owns the random source, so callers decide where entropy comes from;
/// tests pass a seeded generator and get reproducible layouts.
pub struct LotGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> LotGen<R> {
    /// Create a new generator drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a `rows` x `columns` lot in which exactly
    /// `floor(rows * columns * occupancy)` spots are occupied, placed
    /// uniformly at random.
    ///
    /// Fails fast on non-positive dimensions or an occupancy outside
    /// `[0, 1]` — a malformed lot cannot be meaningfully searched.
    pub fn random_lot(
        &mut self,
        rows: i32,
        columns: i32,
        occupancy: f64,
    ) -> Result<Grid, ConfigError> {
        if rows <= 0 || columns <= 0 {
            return Err(ConfigError::InvalidDimensions { rows, columns });
        }
        if !(0.0..=1.0).contains(&occupancy) {
            return Err(ConfigError::InvalidOccupancy(occupancy));
        }

        let total = (rows as usize) * (columns as usize);
        let taken = (total as f64 * occupancy) as usize;

        // Scatter: a flat run of occupied markers padded with empties,
        // shuffled, then reshaped row-major.
        let mut flat = vec![Spot::Occupied; taken];
        flat.resize(total, Spot::Empty);
        flat.shuffle(&mut self.rng);

        let mut grid = Grid::new(columns, rows);
        let bounds = grid.bounds();
        for (p, spot) in bounds.iter().zip(flat) {
            grid.set(p, spot);
        }

        log::debug!("generated {rows}x{columns} lot with {taken} occupied spots");
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn occupied_count_is_exact() {
        let mut lotgen = LotGen::new(StdRng::seed_from_u64(7));
        let grid = lotgen.random_lot(20, 20, 0.6).unwrap();
        assert_eq!(grid.size(), parkgrid_core::Point::new(20, 20));
        assert_eq!(grid.count(Spot::Occupied), 240);
    }

    #[test]
    fn occupied_count_floors() {
        // 3 * 3 * 0.5 = 4.5 -> 4, never rounded up.
        let mut lotgen = LotGen::new(StdRng::seed_from_u64(7));
        let grid = lotgen.random_lot(3, 3, 0.5).unwrap();
        assert_eq!(grid.count(Spot::Occupied), 4);
    }

    #[test]
    fn extreme_occupancies() {
        let mut lotgen = LotGen::new(StdRng::seed_from_u64(1));
        let empty = lotgen.random_lot(4, 5, 0.0).unwrap();
        assert_eq!(empty.count(Spot::Occupied), 0);
        let full = lotgen.random_lot(4, 5, 1.0).unwrap();
        assert_eq!(full.count(Spot::Occupied), 20);
    }

    #[test]
    fn same_seed_same_layout() {
        let a = LotGen::new(StdRng::seed_from_u64(42))
            .random_lot(8, 8, 0.4)
            .unwrap();
        let b = LotGen::new(StdRng::seed_from_u64(42))
            .random_lot(8, 8, 0.4)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_bad_dimensions() {
        let mut lotgen = LotGen::new(StdRng::seed_from_u64(0));
        assert_eq!(
            lotgen.random_lot(0, 5, 0.5),
            Err(ConfigError::InvalidDimensions {
                rows: 0,
                columns: 5,
            })
        );
        assert!(lotgen.random_lot(-2, 5, 0.5).is_err());
    }

    #[test]
    fn rejects_bad_occupancy() {
        let mut lotgen = LotGen::new(StdRng::seed_from_u64(0));
        assert_eq!(
            lotgen.random_lot(5, 5, 1.5),
            Err(ConfigError::InvalidOccupancy(1.5))
        );
        assert!(lotgen.random_lot(5, 5, -0.1).is_err());
        assert!(lotgen.random_lot(5, 5, f64::NAN).is_err());
    }
}
