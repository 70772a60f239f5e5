//! # Atmospheric Escape Physics
//!
//! Particle records and per-tick physics for a toy model of a planetary
//! atmosphere losing gas: central gravity, surface collisions, thermal
//! escape and solar-wind escape on the dayside.

pub mod constants;
pub mod escape;
pub mod geometry;
pub mod integrator;
pub mod particle;
pub mod vector;

pub use constants::*;
pub use escape::*;
pub use geometry::*;
pub use integrator::*;
pub use particle::*;
pub use vector::*;
