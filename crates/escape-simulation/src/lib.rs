//! # Atmospheric Escape Simulation
//!
//! Builds a particle atmosphere around a body and steps it frame by frame,
//! producing snapshots for a renderer.

pub mod error;
pub mod params;
pub mod population;
pub mod simulation;
pub mod snapshot;

pub use error::*;
pub use params::*;
pub use population::{initialize, Placement};
pub use simulation::*;
pub use snapshot::*;
