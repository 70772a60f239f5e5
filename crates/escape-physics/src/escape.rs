//! Thermal and solar-wind escape sampling
//!
//! Runs after `integrate` on the same tick. The thermal check is evaluated
//! first; when it fires, the solar-wind step is skipped for that tick.

use crate::constants::*;
use crate::geometry::BodyGeometry;
use crate::particle::{EscapeState, Particle, SpeciesTable};
use crate::vector::SpaceVector;
use rand::Rng;

/// Thermal (Jeans-type) escape gate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermalEscape {
    /// Only particles strictly above this radius may escape
    pub min_radius: f32,
    /// Only particles strictly faster than this may escape (0 disables the gate)
    pub min_speed: f32,
    /// Per-tick escape chance once both gates pass
    pub probability: SpeciesTable<f32>,
}

impl ThermalEscape {
    /// Fixed chance for every particle above the exosphere inner boundary
    pub fn planar(geometry: &BodyGeometry) -> Self {
        Self {
            min_radius: geometry.exosphere_inner(),
            min_speed: 0.0,
            probability: SpeciesTable::uniform(PLANAR_THERMAL_PROBABILITY),
        }
    }

    /// Fast particles in the upper atmosphere, hydrogen far more likely than helium
    pub fn spherical(geometry: &BodyGeometry) -> Self {
        let (hydrogen, helium) = SPHERICAL_THERMAL_PROBABILITY;
        Self {
            min_radius: geometry.upper_atmosphere(),
            min_speed: SPHERICAL_ESCAPE_SPEED,
            probability: SpeciesTable::new(hydrogen, helium),
        }
    }
}

/// How dayside particles pick up energy from the solar wind
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Accumulation {
    /// Every tick: `energy += rate * u`, `u` uniform in [0, 1)
    Continuous { rate: f32 },
    /// With probability `chance`: `energy += uniform(0, max_increment)`
    Stochastic { chance: f32, max_increment: f32 },
}

impl Accumulation {
    /// Energy gained this tick (never negative)
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f32 {
        match *self {
            Accumulation::Continuous { rate } => rate * rng.random::<f32>(),
            Accumulation::Stochastic {
                chance,
                max_increment,
            } => {
                if rng.random::<f32>() < chance {
                    max_increment * rng.random::<f32>()
                } else {
                    0.0
                }
            }
        }
    }
}

/// Solar-wind (dayside) escape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarWindEscape {
    pub accumulation: Accumulation,
    /// Energy is only gained strictly above this radius
    pub accumulation_min_radius: f32,
    /// Escape is drawn once energy is strictly above this
    pub energy_threshold: f32,
    /// ...and the particle is strictly above this radius
    pub min_radius: f32,
    pub probability: SpeciesTable<f32>,
}

impl SolarWindEscape {
    /// Steady energy gain above the exosphere boundary
    pub fn planar(geometry: &BodyGeometry) -> Self {
        Self {
            accumulation: Accumulation::Continuous {
                rate: PLANAR_ACCUMULATION_RATE,
            },
            accumulation_min_radius: geometry.exosphere_inner(),
            energy_threshold: PLANAR_ENERGY_THRESHOLD,
            min_radius: geometry.exosphere_inner(),
            probability: SpeciesTable::uniform(PLANAR_SOLAR_PROBABILITY),
        }
    }

    /// Rare, large energy kicks anywhere on the dayside
    pub fn spherical(geometry: &BodyGeometry) -> Self {
        let (hydrogen, helium) = SPHERICAL_SOLAR_PROBABILITY;
        Self {
            accumulation: Accumulation::Stochastic {
                chance: SPHERICAL_ACCUMULATION_CHANCE,
                max_increment: SPHERICAL_MAX_INCREMENT,
            },
            accumulation_min_radius: 0.0,
            energy_threshold: SPHERICAL_ENERGY_THRESHOLD,
            min_radius: geometry.upper_atmosphere(),
            probability: SpeciesTable::new(hydrogen, helium),
        }
    }
}

/// Decide whether a freshly integrated particle escapes this tick.
///
/// Returns the particle's state after the tick. Escaped particles are
/// returned unchanged without drawing from `rng`.
pub fn classify<V: SpaceVector, R: Rng>(
    particle: &mut Particle<V>,
    thermal: &ThermalEscape,
    solar_wind: &SolarWindEscape,
    rng: &mut R,
) -> EscapeState {
    if !particle.is_bound() {
        return particle.escape_state;
    }

    let r = particle.radius();

    let fast_enough = thermal.min_speed <= 0.0 || particle.speed() > thermal.min_speed;
    if r > thermal.min_radius && fast_enough {
        let chance = thermal.probability.get(particle.species);
        if rng.random::<f32>() < chance {
            particle.escape_state = EscapeState::EscapedThermal;
            return particle.escape_state;
        }
    }

    if !particle.is_dayside() {
        return particle.escape_state;
    }

    if r > solar_wind.accumulation_min_radius {
        particle.energy += solar_wind.accumulation.sample(rng);
    }

    if particle.energy > solar_wind.energy_threshold && r > solar_wind.min_radius {
        let chance = solar_wind.probability.get(particle.species);
        if rng.random::<f32>() < chance {
            particle.escape_state = EscapeState::EscapedSolarWind;
        }
    }

    particle.escape_state
}
