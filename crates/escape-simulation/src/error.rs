//! Configuration errors, raised when a simulation is created

use escape_physics::Dimensionality;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("body radius must be positive and finite, got {0}")]
    BodyRadius(f32),
    #[error("{name} thickness must be non-negative and finite, got {value}")]
    Thickness { name: &'static str, value: f32 },
    #[error("exosphere thickness {exosphere} exceeds atmosphere thickness {atmosphere}")]
    ExosphereThickerThanAtmosphere { exosphere: f32, atmosphere: f32 },
    #[error("species weights must be non-negative with a positive sum, got {hydrogen}/{helium}")]
    SpeciesWeights { hydrogen: f32, helium: f32 },
    #[error("{name} must lie in [0, 1], got {value}")]
    Probability { name: &'static str, value: f32 },
    #[error("{name} speed range [{low}, {high}] is inverted or negative")]
    SpeedRange {
        name: &'static str,
        low: f32,
        high: f32,
    },
    #[error("{name} must be non-negative and finite, got {value}")]
    NonNegative { name: &'static str, value: f32 },
    #[error("surface offset must be at least 1 so bounced particles land outside the body, got {0}")]
    SurfaceOffset(f32),
    #[error("config is {configured:?} but the simulation runs {actual:?}")]
    DimensionMismatch {
        configured: Dimensionality,
        actual: Dimensionality,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
