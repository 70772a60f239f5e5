//! Model constants for the atmospheric escape simulation
//!
//! These are heuristic values tuned for visual pacing, not calibrated escape
//! rates. Distances are in planet-radius units (the body radius is 2.0) and
//! velocities in distance per tick.

/// Radius of the solid body
pub const BODY_RADIUS: f32 = 2.0;

/// Radial extent of the gas envelope above the surface (30% of the radius)
pub const ATMOSPHERE_THICKNESS: f32 = 0.6;

/// Radial extent of the outer shell, measured inward from the top of the atmosphere
pub const EXOSPHERE_THICKNESS: f32 = 0.2;

/// Fraction of the atmosphere thickness above which the upper-atmosphere escape gates open
pub const UPPER_ATMOSPHERE_FRACTION: f32 = 0.9;

/// Species weights (hydrogen, helium)
pub const HYDROGEN_WEIGHT: f32 = 0.98;
pub const HELIUM_WEIGHT: f32 = 0.02;

/// Share of particles placed in the exosphere shell at start
pub const EXOSPHERE_FRACTION: f32 = 0.9;

/// Speed range for particles starting above the exosphere inner boundary
pub const EXOSPHERE_SPEED: (f32, f32) = (0.02, 0.08);

/// Speed range for particles starting in the lower atmosphere
pub const LOWER_SPEED: (f32, f32) = (0.005, 0.02);

/// Upper bound of the per-particle spread used by isotropic velocity sampling
pub const ISOTROPIC_SPREAD: f32 = 0.1;

/// Gravity strength in the plane
pub const PLANAR_GRAVITY: f32 = 0.0005;

/// Gravity strength in 3D
pub const SPHERICAL_GRAVITY: f32 = 0.01;

/// Multiple of the inward normal velocity removed on a surface hit (> 1 bounces)
pub const RESTITUTION: f32 = 1.8;

/// Particles pushed out of the body land this factor above the surface
pub const SURFACE_OFFSET: f32 = 1.01;

/// Outward velocity added on a surface hit in 3D
pub const SPHERICAL_OUTWARD_KICK: f32 = 0.01;

/// Per-tick thermal escape chance above the exosphere boundary (planar)
pub const PLANAR_THERMAL_PROBABILITY: f32 = 0.05;

/// Thermal escape in 3D only fires above this speed
pub const SPHERICAL_ESCAPE_SPEED: f32 = 0.15;

/// Per-tick thermal escape chance in 3D (hydrogen, helium)
pub const SPHERICAL_THERMAL_PROBABILITY: (f32, f32) = (0.10, 0.01);

/// Dayside energy gain per tick is `rate * u`, `u` uniform in [0, 1)
pub const PLANAR_ACCUMULATION_RATE: f32 = 0.01;

/// Energy above which solar-wind escape is drawn (planar)
pub const PLANAR_ENERGY_THRESHOLD: f32 = 0.25;

/// Solar-wind escape chance once over threshold (planar, both species)
pub const PLANAR_SOLAR_PROBABILITY: f32 = 0.1;

/// Chance per tick that a dayside particle receives an energy kick (3D)
pub const SPHERICAL_ACCUMULATION_CHANCE: f32 = 0.02;

/// Largest energy kick in 3D
pub const SPHERICAL_MAX_INCREMENT: f32 = 0.5;

/// Energy above which solar-wind escape is drawn (3D)
pub const SPHERICAL_ENERGY_THRESHOLD: f32 = 0.3;

/// Solar-wind escape chance once over threshold in 3D (hydrogen, helium)
pub const SPHERICAL_SOLAR_PROBABILITY: (f32, f32) = (0.2, 0.05);

/// Particle counts of the two reference runs
pub const PLANAR_PARTICLE_COUNT: usize = 400;
pub const SPHERICAL_PARTICLE_COUNT: usize = 150;

/// Frames the reference animations run for
pub const PLANAR_FRAMES: u32 = 300;
pub const SPHERICAL_FRAMES: u32 = 200;

// Marker sizes for renderers
/// Marker size in the planar plots
pub const PLANAR_MARKER_SIZE: f32 = 10.0;

/// Marker size in the 3D plots
pub const SPHERICAL_MARKER_SIZE: f32 = 5.0;

/// Dayside markers grow by `energy * gain` in 3D
pub const SPHERICAL_ENERGY_SIZE_GAIN: f32 = 10.0;
