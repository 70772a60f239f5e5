//! Per-tick motion update: explicit Euler advance, surface collision, central gravity
//!
//! One tick is one unit time step. The collision correction runs before the
//! gravity kick so a particle is never pulled from inside the body.

use crate::constants::{RESTITUTION, SURFACE_OFFSET};
use crate::particle::Particle;
use crate::vector::SpaceVector;

/// Response of a particle that has penetrated the surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionParams {
    /// Multiple of the inward normal velocity removed (1 stops it, 2 is elastic)
    pub restitution: f32,
    /// Speed added along the outward normal on every hit
    pub outward_kick: f32,
    /// Corrected position is `body_radius * surface_offset` along the normal
    pub surface_offset: f32,
}

impl Default for CollisionParams {
    fn default() -> Self {
        Self {
            restitution: RESTITUTION,
            outward_kick: 0.0,
            surface_offset: SURFACE_OFFSET,
        }
    }
}

/// What happened to a particle during `integrate`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// Pushed back out of the body
    Collided,
    /// Pulled toward the center
    Attracted,
    /// Exactly on the surface: no correction and no pull
    Resting,
}

/// Inverse-square pull toward the center, `-g * position / r^3`.
/// Zero at `r = 0`, where the direction is undefined.
#[inline]
pub fn gravity_acceleration<V: SpaceVector>(position: V, gravity: f32) -> V {
    let r = position.length();
    if r <= 0.0 || !r.is_finite() {
        return V::ZERO;
    }
    position * (-gravity / (r * r * r))
}

/// Push a particle found inside the body back above the surface and bounce
/// its velocity off the outward normal.
pub fn resolve_collision<V: SpaceVector>(
    particle: &mut Particle<V>,
    body_radius: f32,
    collision: &CollisionParams,
) {
    let normal = particle.position.normalize_or(V::X);
    particle.position = normal * (body_radius * collision.surface_offset);

    let normal_speed = particle.velocity.dot(normal);
    if normal_speed < 0.0 {
        particle.velocity -= normal * (collision.restitution * normal_speed);
    }
    particle.velocity += normal * collision.outward_kick;
}

/// Advance a bound particle by one tick.
///
/// 1. `position += velocity`
/// 2. `r = |position|`
/// 3. `r < R`: collision correction
/// 4. `r > R`: gravity kick on the velocity
///
/// Escaped particles are left untouched.
pub fn integrate<V: SpaceVector>(
    particle: &mut Particle<V>,
    gravity: f32,
    body_radius: f32,
    collision: &CollisionParams,
) -> Option<Motion> {
    if !particle.is_bound() {
        return None;
    }

    particle.position += particle.velocity;
    let r = particle.radius();

    let motion = if r < body_radius {
        resolve_collision(particle, body_radius, collision);
        Motion::Collided
    } else if r > body_radius {
        particle.velocity += gravity_acceleration(particle.position, gravity);
        Motion::Attracted
    } else {
        Motion::Resting
    };

    Some(motion)
}
