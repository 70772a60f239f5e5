//! Per-frame output handed to renderers
//!
//! A snapshot is a read-only copy: renderers draw from it and never touch the
//! particle population itself.

use crate::params::FrameStyle;
use bytemuck::{Pod, Zeroable};
use escape_physics::{Particle, SpaceVector};

/// GPU-ready marker (matches a WGSL `vec3<f32>, f32, f32` + padding layout)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ParticleInstance {
    /// Position, z = 0 for planar runs
    pub position: [f32; 3],
    /// Scalar fed to the color map
    pub color: f32,
    pub size: f32,
    pub _padding: [f32; 3],
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot<V: SpaceVector> {
    /// Tick this snapshot was produced on (1 for the first step)
    pub tick: u64,

    // All bound particles, colored by species
    pub bound_positions: Vec<V>,
    pub bound_colors: Vec<f32>,
    pub bound_sizes: Vec<f32>,

    // Bound particles on the dayside, colored by accumulated energy
    pub dayside_positions: Vec<V>,
    pub dayside_colors: Vec<f32>,
    pub dayside_sizes: Vec<f32>,

    pub total_count: usize,
    pub remaining_count: usize,
    pub escaped_thermal_count: usize,
    pub escaped_solar_count: usize,
    /// Bound particles that hit the surface this tick
    pub collision_count: usize,
}

impl<V: SpaceVector> FrameSnapshot<V> {
    pub(crate) fn new(tick: u64, total_count: usize) -> Self {
        Self {
            tick,
            bound_positions: Vec::with_capacity(total_count),
            bound_colors: Vec::with_capacity(total_count),
            bound_sizes: Vec::with_capacity(total_count),
            dayside_positions: Vec::new(),
            dayside_colors: Vec::new(),
            dayside_sizes: Vec::new(),
            total_count,
            remaining_count: total_count,
            escaped_thermal_count: 0,
            escaped_solar_count: 0,
            collision_count: 0,
        }
    }

    /// Record a particle that is still bound after this tick
    pub(crate) fn push_bound(&mut self, particle: &Particle<V>, style: &FrameStyle) {
        self.bound_positions.push(particle.position);
        self.bound_colors.push(particle.species.color_code());
        self.bound_sizes.push(style.base_size);

        if particle.is_dayside() {
            self.dayside_positions.push(particle.position);
            self.dayside_colors.push(particle.energy);
            self.dayside_sizes
                .push(style.base_size + particle.energy * style.energy_size_gain);
        }
    }

    pub(crate) fn finish(&mut self) {
        self.remaining_count =
            self.total_count - self.escaped_thermal_count - self.escaped_solar_count;
        debug_assert_eq!(self.remaining_count, self.bound_positions.len());
    }

    pub fn escaped_count(&self) -> usize {
        self.escaped_thermal_count + self.escaped_solar_count
    }

    /// True once every particle has escaped
    pub fn is_depleted(&self) -> bool {
        self.remaining_count == 0
    }

    pub fn bound_instances(&self) -> Vec<ParticleInstance> {
        instances(&self.bound_positions, &self.bound_colors, &self.bound_sizes)
    }

    pub fn dayside_instances(&self) -> Vec<ParticleInstance> {
        instances(
            &self.dayside_positions,
            &self.dayside_colors,
            &self.dayside_sizes,
        )
    }
}

fn instances<V: SpaceVector>(
    positions: &[V],
    colors: &[f32],
    sizes: &[f32],
) -> Vec<ParticleInstance> {
    positions
        .iter()
        .zip(colors)
        .zip(sizes)
        .map(|((position, &color), &size)| ParticleInstance {
            position: position.to_xyz(),
            color,
            size,
            _padding: [0.0; 3],
        })
        .collect()
}
