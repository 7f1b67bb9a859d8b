//! **parkgrid-core** — Core types for the parkgrid crates.
//!
//! Provides the geometry primitives ([`Point`], [`Range`]) and the
//! occupancy grid ([`Grid`], [`Spot`]) that the search and lot crates
//! build on. Everything here is plain value data with no I/O.

pub mod geom;
pub mod grid;

pub use geom::{Point, Range, RangeIter};
pub use grid::{Grid, LayoutError, Spot};
