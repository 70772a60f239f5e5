//! Dimension-generic vector math
//!
//! The planar and spherical models share every rule; only the vector type
//! differs. `SpaceVector` is the small surface of `glam` the physics needs.

use glam::{Vec2, Vec3};
use rand::Rng;
use std::f32::consts::TAU;
use std::fmt::Debug;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// Number of spatial dimensions a model runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimensionality {
    /// Two components, directions sampled on the unit circle
    Planar,
    /// Three components, directions sampled on the unit sphere
    Spherical,
}

impl Dimensionality {
    pub fn components(self) -> usize {
        match self {
            Dimensionality::Planar => 2,
            Dimensionality::Spherical => 3,
        }
    }
}

/// Sample N(0, std_dev²) with the Box-Muller transform
pub fn gaussian<R: Rng>(rng: &mut R, std_dev: f32) -> f32 {
    // u1 in (0, 1] keeps the log finite
    let u1 = 1.0 - rng.random::<f32>();
    let u2: f32 = rng.random();
    let z = (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos();
    std_dev * z
}

/// Fixed-size vector used for particle position and velocity
pub trait SpaceVector:
    Copy
    + Debug
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<f32, Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
{
    const DIMENSIONALITY: Dimensionality;
    const ZERO: Self;
    /// Unit vector along the first axis (the sunward direction)
    const X: Self;

    fn length(self) -> f32;
    fn dot(self, other: Self) -> f32;

    /// First spatial coordinate; positive values are on the dayside
    fn first(self) -> f32;

    /// Unit vector, or `fallback` when the length is zero or not finite
    fn normalize_or(self, fallback: Self) -> Self;

    /// Direction drawn uniformly on the unit circle / unit sphere
    fn random_unit<R: Rng>(rng: &mut R) -> Self;

    /// Each component drawn independently from N(0, spread²)
    fn random_isotropic<R: Rng>(rng: &mut R, spread: f32) -> Self;

    /// Pad to three components for render layouts (z = 0 in the plane)
    fn to_xyz(self) -> [f32; 3];
}

impl SpaceVector for Vec2 {
    const DIMENSIONALITY: Dimensionality = Dimensionality::Planar;
    const ZERO: Self = Vec2::ZERO;
    const X: Self = Vec2::X;

    #[inline]
    fn length(self) -> f32 {
        Vec2::length(self)
    }

    #[inline]
    fn dot(self, other: Self) -> f32 {
        Vec2::dot(self, other)
    }

    #[inline]
    fn first(self) -> f32 {
        self.x
    }

    #[inline]
    fn normalize_or(self, fallback: Self) -> Self {
        Vec2::normalize_or(self, fallback)
    }

    fn random_unit<R: Rng>(rng: &mut R) -> Self {
        let angle = rng.random_range(0.0..TAU);
        Vec2::new(angle.cos(), angle.sin())
    }

    fn random_isotropic<R: Rng>(rng: &mut R, spread: f32) -> Self {
        Vec2::new(gaussian(rng, spread), gaussian(rng, spread))
    }

    fn to_xyz(self) -> [f32; 3] {
        [self.x, self.y, 0.0]
    }
}

impl SpaceVector for Vec3 {
    const DIMENSIONALITY: Dimensionality = Dimensionality::Spherical;
    const ZERO: Self = Vec3::ZERO;
    const X: Self = Vec3::X;

    #[inline]
    fn length(self) -> f32 {
        Vec3::length(self)
    }

    #[inline]
    fn dot(self, other: Self) -> f32 {
        Vec3::dot(self, other)
    }

    #[inline]
    fn first(self) -> f32 {
        self.x
    }

    #[inline]
    fn normalize_or(self, fallback: Self) -> Self {
        Vec3::normalize_or(self, fallback)
    }

    fn random_unit<R: Rng>(rng: &mut R) -> Self {
        // Uniform azimuth and uniform cos(polar) give a uniform sphere
        let theta = rng.random_range(0.0..TAU);
        let cos_phi: f32 = rng.random_range(-1.0..=1.0);
        let sin_phi = (1.0 - cos_phi * cos_phi).max(0.0).sqrt();
        Vec3::new(sin_phi * theta.cos(), sin_phi * theta.sin(), cos_phi)
    }

    fn random_isotropic<R: Rng>(rng: &mut R, spread: f32) -> Self {
        Vec3::new(
            gaussian(rng, spread),
            gaussian(rng, spread),
            gaussian(rng, spread),
        )
    }

    fn to_xyz(self) -> [f32; 3] {
        self.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_unit_is_normalized() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert!((<Vec2 as SpaceVector>::random_unit(&mut rng).length() - 1.0).abs() < 1e-5);
            assert!((<Vec3 as SpaceVector>::random_unit(&mut rng).length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_sphere_directions_cover_both_poles() {
        let mut rng = StdRng::seed_from_u64(11);
        let samples: Vec<Vec3> = (0..500)
            .map(|_| <Vec3 as SpaceVector>::random_unit(&mut rng))
            .collect();
        // Uniform on the sphere: mean z near zero, both hemispheres populated
        let mean_z = samples.iter().map(|v| v.z).sum::<f32>() / samples.len() as f32;
        assert!(mean_z.abs() < 0.1);
        assert!(samples.iter().any(|v| v.z > 0.9));
        assert!(samples.iter().any(|v| v.z < -0.9));
    }

    #[test]
    fn test_normalize_or_zero_falls_back() {
        assert_eq!(<Vec2 as SpaceVector>::normalize_or(Vec2::ZERO, Vec2::X), Vec2::X);
        assert_eq!(<Vec3 as SpaceVector>::normalize_or(Vec3::ZERO, Vec3::X), Vec3::X);
    }

    #[test]
    fn test_gaussian_moments() {
        let mut rng = StdRng::seed_from_u64(5);
        let n = 10_000;
        let samples: Vec<f32> = (0..n).map(|_| gaussian(&mut rng, 0.05)).collect();
        let mean = samples.iter().sum::<f32>() / n as f32;
        let var = samples.iter().map(|x| (x - mean).powi(2)).sum::<f32>() / n as f32;

        assert!(samples.iter().all(|x| x.is_finite()));
        assert!(mean.abs() < 0.005);
        assert!((var.sqrt() - 0.05).abs() < 0.005);
    }

    #[test]
    fn test_isotropic_has_gaussian_tails() {
        let mut rng = StdRng::seed_from_u64(3);
        let samples: Vec<Vec3> = (0..1000)
            .map(|_| <Vec3 as SpaceVector>::random_isotropic(&mut rng, 0.05))
            .collect();
        // About a third of N(0, s) lands beyond one sigma
        let wide = samples
            .iter()
            .flat_map(|v| v.to_array())
            .filter(|c| c.abs() > 0.05)
            .count();
        assert!(wide > 600 && wide < 1300);
        assert_eq!(<Vec2 as SpaceVector>::random_isotropic(&mut rng, 0.0), Vec2::ZERO);
    }

    #[test]
    fn test_planar_pads_to_xyz() {
        assert_eq!(Vec2::new(1.0, 2.0).to_xyz(), [1.0, 2.0, 0.0]);
        assert_eq!(Dimensionality::Planar.components(), 2);
        assert_eq!(Dimensionality::Spherical.components(), 3);
    }
}
