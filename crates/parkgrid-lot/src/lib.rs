//! Parking lot domain: random occupancy generation and nearest-spot
//! queries over a [`parkgrid_core::Grid`].

pub mod lot;
pub mod lotgen;

pub use lot::ParkingLot;
pub use lotgen::{ConfigError, LotGen};
