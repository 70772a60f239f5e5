//! Initial particle placement
//!
//! Most particles start in a thin exospheric shell; the rest sit in the lower
//! atmosphere, biased toward the surface.

use crate::error::{ConfigError, ConfigResult};
use crate::params::{PopulationConfig, VelocityScheme};
use escape_physics::{BodyGeometry, Particle, SpaceVector, Species};
use rand::Rng;

/// Layer a particle was placed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Radius uniform in `[R + A - E, R + A]`
    Exosphere,
    /// Radius `R + (A - E) * u^2`
    LowerAtmosphere,
}

impl Placement {
    fn sample<R: Rng>(exosphere_fraction: f32, rng: &mut R) -> Self {
        if rng.random::<f32>() < exosphere_fraction {
            Placement::Exosphere
        } else {
            Placement::LowerAtmosphere
        }
    }

    fn radius<R: Rng>(self, geometry: &BodyGeometry, rng: &mut R) -> f32 {
        match self {
            Placement::Exosphere => {
                rng.random_range(geometry.exosphere_inner()..=geometry.exosphere_outer())
            }
            Placement::LowerAtmosphere => {
                let u = rng.random::<f32>();
                let depth = geometry.atmosphere_thickness - geometry.exosphere_thickness;
                geometry.body_radius + depth * u * u
            }
        }
    }
}

/// Build the starting population.
///
/// Fails only on invalid configuration; any particle count (including zero)
/// is accepted.
pub fn initialize<V: SpaceVector, R: Rng>(
    config: &PopulationConfig,
    rng: &mut R,
) -> ConfigResult<Vec<Particle<V>>> {
    config.validate()?;
    if config.dimensionality != V::DIMENSIONALITY {
        return Err(ConfigError::DimensionMismatch {
            configured: config.dimensionality,
            actual: V::DIMENSIONALITY,
        });
    }

    let hydrogen_share = config.hydrogen_share();
    let mut particles = Vec::with_capacity(config.particle_count);
    let mut in_exosphere = 0usize;

    for _ in 0..config.particle_count {
        let placement = Placement::sample(config.exosphere_fraction, rng);
        if placement == Placement::Exosphere {
            in_exosphere += 1;
        }
        particles.push(spawn(config, placement, hydrogen_share, rng));
    }

    log::info!(
        "Initialized {} particles in {}D ({} exosphere, {} lower atmosphere)",
        particles.len(),
        config.dimensionality.components(),
        in_exosphere,
        particles.len() - in_exosphere
    );
    log::debug!(
        "  geometry: R={:.2}, exosphere [{:.2}, {:.2}]",
        config.geometry.body_radius,
        config.geometry.exosphere_inner(),
        config.geometry.exosphere_outer()
    );

    Ok(particles)
}

fn spawn<V: SpaceVector, R: Rng>(
    config: &PopulationConfig,
    placement: Placement,
    hydrogen_share: f32,
    rng: &mut R,
) -> Particle<V> {
    let r = placement.radius(&config.geometry, rng);
    let position = V::random_unit(rng) * r;

    let velocity = match config.velocity {
        VelocityScheme::RegimeRanges { exosphere, lower } => {
            let (low, high) = if r > config.geometry.exosphere_inner() {
                exosphere
            } else {
                lower
            };
            let speed = rng.random_range(low..=high);
            V::random_unit(rng) * speed
        }
        VelocityScheme::Isotropic { max_spread } => {
            let spread = max_spread * rng.random::<f32>();
            V::random_isotropic(rng, spread)
        }
    };

    let species = if rng.random::<f32>() < hydrogen_share {
        Species::Hydrogen
    } else {
        Species::Helium
    };

    Particle::new(position, velocity, species)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Profile;
    use escape_physics::{
        EscapeState, SpeciesTable, EXOSPHERE_SPEED, LOWER_SPEED, SPHERICAL_ESCAPE_SPEED,
    };
    use glam::{Vec2, Vec3};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_planar_population_shape() {
        let config = Profile::Planar.population();
        let mut rng = StdRng::seed_from_u64(42);
        let particles: Vec<Particle<Vec2>> = initialize(&config, &mut rng).unwrap();

        assert_eq!(particles.len(), config.particle_count);
        let g = config.geometry;
        for p in &particles {
            let r = p.radius();
            assert!(r >= g.body_radius - EPS && r <= g.exosphere_outer() + EPS);
            assert_eq!(p.escape_state, EscapeState::Bound);
            assert_eq!(p.energy, 0.0);

            let (low, high) = if r > g.exosphere_inner() + EPS {
                EXOSPHERE_SPEED
            } else if r < g.exosphere_inner() - EPS {
                LOWER_SPEED
            } else {
                continue;
            };
            assert!(p.speed() >= low - EPS && p.speed() <= high + EPS);
        }

        // Roughly 90% in the shell
        let shell = particles
            .iter()
            .filter(|p| p.radius() >= g.exosphere_inner() - EPS)
            .count();
        assert!(shell > 300);
    }

    #[test]
    fn test_spherical_population_in_shell() {
        let config = Profile::Spherical.population();
        let mut rng = StdRng::seed_from_u64(7);
        let particles: Vec<Particle<Vec3>> = initialize(&config, &mut rng).unwrap();

        assert_eq!(particles.len(), config.particle_count);
        for p in &particles {
            let r = p.radius();
            assert!(r >= config.geometry.exosphere_inner() - EPS);
            assert!(r <= config.geometry.exosphere_outer() + EPS);
            assert!(p.speed().is_finite());
        }

        // Gaussian tails put part of the shell above the thermal speed gate
        let fast = particles
            .iter()
            .filter(|p| p.speed() > SPHERICAL_ESCAPE_SPEED)
            .count();
        assert!(fast > 0);
        assert!(fast < particles.len() / 2);
    }

    #[test]
    fn test_species_weights() {
        let mut config = Profile::Planar.population();
        config.particle_count = 50;
        config.species_weights = SpeciesTable::new(0.0, 1.0);
        let mut rng = StdRng::seed_from_u64(1);
        let particles: Vec<Particle<Vec2>> = initialize(&config, &mut rng).unwrap();
        assert!(particles.iter().all(|p| p.species == Species::Helium));

        config.species_weights = SpeciesTable::new(1.0, 0.0);
        let particles: Vec<Particle<Vec2>> = initialize(&config, &mut rng).unwrap();
        assert!(particles.iter().all(|p| p.species == Species::Hydrogen));
    }

    #[test]
    fn test_lower_atmosphere_only() {
        let mut config = Profile::Planar.population();
        config.exosphere_fraction = 0.0;
        let mut rng = StdRng::seed_from_u64(9);
        let particles: Vec<Particle<Vec2>> = initialize(&config, &mut rng).unwrap();
        assert!(particles
            .iter()
            .all(|p| p.radius() <= config.geometry.exosphere_inner() + EPS));
    }

    #[test]
    fn test_empty_population() {
        let mut config = Profile::Planar.population();
        config.particle_count = 0;
        let mut rng = StdRng::seed_from_u64(0);
        let particles: Vec<Particle<Vec2>> = initialize(&config, &mut rng).unwrap();
        assert!(particles.is_empty());
    }

    #[test]
    fn test_dimension_mismatch() {
        let config = Profile::Planar.population();
        let mut rng = StdRng::seed_from_u64(0);
        let result: ConfigResult<Vec<Particle<Vec3>>> = initialize(&config, &mut rng);
        assert!(matches!(result, Err(ConfigError::DimensionMismatch { .. })));
    }

    #[test]
    fn test_invalid_config_fails_fast() {
        let mut config = Profile::Planar.population();
        config.geometry.exosphere_thickness = 1.0;
        let mut rng = StdRng::seed_from_u64(0);
        let result: ConfigResult<Vec<Particle<Vec2>>> = initialize(&config, &mut rng);
        assert!(result.is_err());
    }
}
