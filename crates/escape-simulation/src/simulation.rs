//! Simulation state and the per-frame step
//!
//! `Simulation` owns the population and is its only writer. Each call to
//! `step` integrates and classifies every bound particle once and returns the
//! frame snapshot; escaped particles are only counted.

use crate::error::ConfigResult;
use crate::params::{validate_geometry, FrameStyle, PhysicsParams, PopulationConfig};
use crate::population;
use crate::snapshot::FrameSnapshot;
use escape_physics::{
    classify, integrate, BodyGeometry, EscapeState, Motion, Particle, SpaceVector,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Advance a population by one tick and classify it for rendering.
///
/// `tick` is only recorded in the snapshot; stepping is the same on every tick.
pub fn step_population<V: SpaceVector, R: Rng>(
    particles: &mut [Particle<V>],
    tick: u64,
    geometry: &BodyGeometry,
    physics: &PhysicsParams,
    style: &FrameStyle,
    rng: &mut R,
) -> FrameSnapshot<V> {
    let mut snapshot = FrameSnapshot::new(tick, particles.len());

    for (index, particle) in particles.iter_mut().enumerate() {
        match particle.escape_state {
            EscapeState::EscapedThermal => {
                snapshot.escaped_thermal_count += 1;
                continue;
            }
            EscapeState::EscapedSolarWind => {
                snapshot.escaped_solar_count += 1;
                continue;
            }
            EscapeState::Bound => {}
        }

        let motion = integrate(
            particle,
            physics.gravity_constant,
            geometry.body_radius,
            &physics.collision,
        );
        if motion == Some(Motion::Collided) {
            snapshot.collision_count += 1;
        }

        match classify(particle, &physics.thermal, &physics.solar_wind, rng) {
            EscapeState::Bound => snapshot.push_bound(particle, style),
            EscapeState::EscapedThermal => {
                log::trace!("tick {}: particle {} escaped thermally", tick, index);
                snapshot.escaped_thermal_count += 1;
            }
            EscapeState::EscapedSolarWind => {
                log::trace!(
                    "tick {}: particle {} escaped via solar wind (energy {:.3})",
                    tick,
                    index,
                    particle.energy
                );
                snapshot.escaped_solar_count += 1;
            }
        }
    }

    snapshot.finish();
    snapshot
}

/// A running escape simulation in `V`-dimensional space
pub struct Simulation<V: SpaceVector> {
    particles: Vec<Particle<V>>,
    geometry: BodyGeometry,
    physics: PhysicsParams,
    style: FrameStyle,
    rng: StdRng,
    tick: u64,
}

impl<V: SpaceVector> Simulation<V> {
    /// Build a simulation seeded from the operating system
    pub fn new(
        config: &PopulationConfig,
        physics: PhysicsParams,
        style: FrameStyle,
    ) -> ConfigResult<Self> {
        Self::with_rng(config, physics, style, StdRng::from_os_rng())
    }

    /// Build a reproducible simulation
    pub fn with_seed(
        config: &PopulationConfig,
        physics: PhysicsParams,
        style: FrameStyle,
        seed: u64,
    ) -> ConfigResult<Self> {
        Self::with_rng(config, physics, style, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        config: &PopulationConfig,
        physics: PhysicsParams,
        style: FrameStyle,
        mut rng: StdRng,
    ) -> ConfigResult<Self> {
        physics.validate()?;
        let particles = population::initialize(config, &mut rng)?;

        Ok(Self {
            particles,
            geometry: config.geometry,
            physics,
            style,
            rng,
            tick: 0,
        })
    }

    /// Run on a hand-built population (scenario setups, replays)
    pub fn from_particles(
        particles: Vec<Particle<V>>,
        geometry: BodyGeometry,
        physics: PhysicsParams,
        style: FrameStyle,
        seed: u64,
    ) -> ConfigResult<Self> {
        validate_geometry(&geometry)?;
        physics.validate()?;

        Ok(Self {
            particles,
            geometry,
            physics,
            style,
            rng: StdRng::seed_from_u64(seed),
            tick: 0,
        })
    }

    /// Advance one tick and return the frame for the renderer
    pub fn step(&mut self) -> FrameSnapshot<V> {
        self.tick += 1;
        let snapshot = step_population(
            &mut self.particles,
            self.tick,
            &self.geometry,
            &self.physics,
            &self.style,
            &mut self.rng,
        );

        log::debug!(
            "tick {}: remaining {}, thermal {}, solar wind {}, collisions {}",
            snapshot.tick,
            snapshot.remaining_count,
            snapshot.escaped_thermal_count,
            snapshot.escaped_solar_count,
            snapshot.collision_count
        );
        snapshot
    }

    /// Step `frames` times, returning the last snapshot
    pub fn run(&mut self, frames: u32) -> Option<FrameSnapshot<V>> {
        let mut last = None;
        for _ in 0..frames {
            last = Some(self.step());
        }
        last
    }

    pub fn particles(&self) -> &[Particle<V>] {
        &self.particles
    }

    /// Ticks advanced so far
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn geometry(&self) -> &BodyGeometry {
        &self.geometry
    }

    pub fn physics(&self) -> &PhysicsParams {
        &self.physics
    }

    /// Replace the physics between frames
    pub fn update_physics(&mut self, physics: PhysicsParams) -> ConfigResult<()> {
        physics.validate()?;
        self.physics = physics;
        Ok(())
    }

    pub fn style(&self) -> &FrameStyle {
        &self.style
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }
}
