//! Search primitives for grid lots.
//!
//! This crate provides the pieces a lot query is built from:
//!
//! - **Nearest-match scan** ([`ScanRange::nearest_match`]) — breadth-first
//!   traversal that picks the matching cell nearest by Manhattan distance
//! - **Manhattan metric** ([`manhattan`])
//! - **Route construction** ([`axis_route`]) — the deterministic rows-first
//!   walk between two cells
//!
//! Scans operate through [`ScanRange`], which owns its internal caches so
//! that repeated queries reuse allocations, and see the map only through
//! the [`Pather`] neighbor-enumeration trait.

mod route;
mod scan;
mod traits;

pub use route::{axis_route, manhattan};
pub use scan::ScanRange;
pub use traits::Pather;
