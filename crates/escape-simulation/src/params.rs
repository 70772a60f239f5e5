//! Population and physics parameters, plus the two reference profiles

use crate::error::{ConfigError, ConfigResult};
use escape_physics::{
    constants::*, Accumulation, BodyGeometry, CollisionParams, Dimensionality, SolarWindEscape,
    SpeciesTable, ThermalEscape,
};

/// How initial velocities are drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VelocityScheme {
    /// Speed uniform in a range chosen by starting height, direction uniform
    RegimeRanges {
        /// Used when the start radius is above the exosphere inner boundary
        exosphere: (f32, f32),
        /// Used otherwise
        lower: (f32, f32),
    },
    /// Per-particle spread uniform in `[0, max_spread)`, then every component
    /// drawn independently from N(0, spread²)
    Isotropic { max_spread: f32 },
}

/// Everything needed to build the starting population
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopulationConfig {
    pub particle_count: usize,
    pub geometry: BodyGeometry,
    pub dimensionality: Dimensionality,
    /// Relative draw weights (need not sum to 1)
    pub species_weights: SpeciesTable<f32>,
    /// Chance a particle starts in the exosphere shell rather than the lower atmosphere
    pub exosphere_fraction: f32,
    pub velocity: VelocityScheme,
}

impl PopulationConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        validate_geometry(&self.geometry)?;

        let SpeciesTable { hydrogen, helium } = self.species_weights;
        let weights_ok = hydrogen >= 0.0
            && helium >= 0.0
            && (hydrogen + helium).is_finite()
            && hydrogen + helium > 0.0;
        if !weights_ok {
            return Err(ConfigError::SpeciesWeights { hydrogen, helium });
        }

        check_probability("exosphere fraction", self.exosphere_fraction)?;

        match self.velocity {
            VelocityScheme::RegimeRanges { exosphere, lower } => {
                check_speed_range("exosphere", exosphere)?;
                check_speed_range("lower atmosphere", lower)?;
            }
            VelocityScheme::Isotropic { max_spread } => {
                check_non_negative("isotropic spread", max_spread)?;
            }
        }
        Ok(())
    }

    /// Probability of drawing hydrogen
    pub fn hydrogen_share(&self) -> f32 {
        let SpeciesTable { hydrogen, helium } = self.species_weights;
        hydrogen / (hydrogen + helium)
    }
}

/// Physics applied on every tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsParams {
    pub gravity_constant: f32,
    pub collision: CollisionParams,
    pub thermal: ThermalEscape,
    pub solar_wind: SolarWindEscape,
}

impl PhysicsParams {
    pub fn validate(&self) -> ConfigResult<()> {
        check_non_negative("gravity constant", self.gravity_constant)?;
        check_non_negative("restitution", self.collision.restitution)?;
        check_non_negative("outward kick", self.collision.outward_kick)?;
        if !(self.collision.surface_offset >= 1.0 && self.collision.surface_offset.is_finite()) {
            return Err(ConfigError::SurfaceOffset(self.collision.surface_offset));
        }

        check_non_negative("thermal escape speed", self.thermal.min_speed)?;
        for chance in self.thermal.probability.values() {
            check_probability("thermal escape probability", chance)?;
        }

        match self.solar_wind.accumulation {
            Accumulation::Continuous { rate } => {
                check_non_negative("accumulation rate", rate)?;
            }
            Accumulation::Stochastic {
                chance,
                max_increment,
            } => {
                check_probability("accumulation chance", chance)?;
                check_non_negative("accumulation increment", max_increment)?;
            }
        }
        check_non_negative("energy threshold", self.solar_wind.energy_threshold)?;
        for chance in self.solar_wind.probability.values() {
            check_probability("solar-wind escape probability", chance)?;
        }
        Ok(())
    }
}

/// Marker sizes handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStyle {
    pub base_size: f32,
    /// Dayside markers are `base_size + energy * energy_size_gain`
    pub energy_size_gain: f32,
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self {
            base_size: PLANAR_MARKER_SIZE,
            energy_size_gain: 0.0,
        }
    }
}

/// The two reference runs: the planar and the 3D model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Steady dayside energy gain, fixed thermal chance above the exosphere
    Planar,
    /// Rare energy kicks, speed-gated species-dependent thermal escape
    Spherical,
}

impl Profile {
    pub fn dimensionality(self) -> Dimensionality {
        match self {
            Profile::Planar => Dimensionality::Planar,
            Profile::Spherical => Dimensionality::Spherical,
        }
    }

    pub fn population(self) -> PopulationConfig {
        let species_weights = SpeciesTable::new(HYDROGEN_WEIGHT, HELIUM_WEIGHT);
        match self {
            Profile::Planar => PopulationConfig {
                particle_count: PLANAR_PARTICLE_COUNT,
                geometry: BodyGeometry::default(),
                dimensionality: Dimensionality::Planar,
                species_weights,
                exosphere_fraction: EXOSPHERE_FRACTION,
                velocity: VelocityScheme::RegimeRanges {
                    exosphere: EXOSPHERE_SPEED,
                    lower: LOWER_SPEED,
                },
            },
            Profile::Spherical => PopulationConfig {
                particle_count: SPHERICAL_PARTICLE_COUNT,
                geometry: BodyGeometry::default(),
                dimensionality: Dimensionality::Spherical,
                species_weights,
                // The whole 3D population starts in the exosphere shell
                exosphere_fraction: 1.0,
                velocity: VelocityScheme::Isotropic {
                    max_spread: ISOTROPIC_SPREAD,
                },
            },
        }
    }

    pub fn physics(self, geometry: &BodyGeometry) -> PhysicsParams {
        match self {
            Profile::Planar => PhysicsParams {
                gravity_constant: PLANAR_GRAVITY,
                collision: CollisionParams::default(),
                thermal: ThermalEscape::planar(geometry),
                solar_wind: SolarWindEscape::planar(geometry),
            },
            Profile::Spherical => PhysicsParams {
                gravity_constant: SPHERICAL_GRAVITY,
                collision: CollisionParams {
                    outward_kick: SPHERICAL_OUTWARD_KICK,
                    ..CollisionParams::default()
                },
                thermal: ThermalEscape::spherical(geometry),
                solar_wind: SolarWindEscape::spherical(geometry),
            },
        }
    }

    pub fn style(self) -> FrameStyle {
        match self {
            Profile::Planar => FrameStyle::default(),
            Profile::Spherical => FrameStyle {
                base_size: SPHERICAL_MARKER_SIZE,
                energy_size_gain: SPHERICAL_ENERGY_SIZE_GAIN,
            },
        }
    }

    /// Number of frames the reference animation runs for
    pub fn frames(self) -> u32 {
        match self {
            Profile::Planar => PLANAR_FRAMES,
            Profile::Spherical => SPHERICAL_FRAMES,
        }
    }
}

pub(crate) fn validate_geometry(geometry: &BodyGeometry) -> ConfigResult<()> {
    let BodyGeometry {
        body_radius,
        atmosphere_thickness,
        exosphere_thickness,
    } = *geometry;

    if !(body_radius > 0.0 && body_radius.is_finite()) {
        return Err(ConfigError::BodyRadius(body_radius));
    }
    for (name, value) in [
        ("atmosphere", atmosphere_thickness),
        ("exosphere", exosphere_thickness),
    ] {
        if !(value >= 0.0 && value.is_finite()) {
            return Err(ConfigError::Thickness { name, value });
        }
    }
    if exosphere_thickness > atmosphere_thickness {
        return Err(ConfigError::ExosphereThickerThanAtmosphere {
            exosphere: exosphere_thickness,
            atmosphere: atmosphere_thickness,
        });
    }
    Ok(())
}

fn check_probability(name: &'static str, value: f32) -> ConfigResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Probability { name, value })
    }
}

fn check_non_negative(name: &'static str, value: f32) -> ConfigResult<()> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonNegative { name, value })
    }
}

fn check_speed_range(name: &'static str, (low, high): (f32, f32)) -> ConfigResult<()> {
    if low >= 0.0 && low <= high && high.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::SpeedRange { name, low, high })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_validate() {
        for profile in [Profile::Planar, Profile::Spherical] {
            let population = profile.population();
            assert_eq!(population.dimensionality, profile.dimensionality());
            assert!(population.validate().is_ok());
            assert!(profile.physics(&population.geometry).validate().is_ok());
        }
    }

    #[test]
    fn test_rejects_bad_geometry() {
        let mut config = Profile::Planar.population();
        config.geometry.body_radius = -1.0;
        assert_eq!(config.validate(), Err(ConfigError::BodyRadius(-1.0)));

        let mut config = Profile::Planar.population();
        config.geometry.exosphere_thickness = 0.8;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ExosphereThickerThanAtmosphere { .. })
        ));

        let mut config = Profile::Planar.population();
        config.geometry.atmosphere_thickness = f32::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Thickness { name: "atmosphere", .. })
        ));
    }

    #[test]
    fn test_rejects_bad_weights_and_fractions() {
        let mut config = Profile::Planar.population();
        config.species_weights = SpeciesTable::uniform(0.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SpeciesWeights { .. })
        ));

        let mut config = Profile::Planar.population();
        config.exosphere_fraction = 1.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Probability { .. })
        ));

        let mut config = Profile::Planar.population();
        config.velocity = VelocityScheme::RegimeRanges {
            exosphere: (0.08, 0.02),
            lower: LOWER_SPEED,
        };
        assert!(matches!(config.validate(), Err(ConfigError::SpeedRange { .. })));
    }

    #[test]
    fn test_rejects_bad_physics() {
        let geometry = BodyGeometry::default();
        let mut physics = Profile::Planar.physics(&geometry);
        physics.thermal.probability.helium = -0.1;
        assert!(matches!(
            physics.validate(),
            Err(ConfigError::Probability { .. })
        ));

        let mut physics = Profile::Spherical.physics(&geometry);
        physics.collision.surface_offset = 0.9;
        assert_eq!(physics.validate(), Err(ConfigError::SurfaceOffset(0.9)));
    }

    #[test]
    fn test_hydrogen_share() {
        let config = Profile::Planar.population();
        assert!((config.hydrogen_share() - 0.98).abs() < 1e-6);
    }
}
