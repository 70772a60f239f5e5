//! Body and atmosphere layer geometry

use crate::constants::{
    ATMOSPHERE_THICKNESS, BODY_RADIUS, EXOSPHERE_THICKNESS, UPPER_ATMOSPHERE_FRACTION,
};

/// Physical regime a radius falls in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    /// Below the surface
    Interior,
    /// Between the surface and the exosphere inner boundary
    Atmosphere,
    /// Inside the collisionless outer shell
    Exosphere,
    /// Above the top of the atmosphere
    Beyond,
}

/// Spherical body with a layered atmosphere
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyGeometry {
    /// Radius of the solid body (R)
    pub body_radius: f32,
    /// Radial extent of the gas envelope (A)
    pub atmosphere_thickness: f32,
    /// Radial extent of the outermost shell, measured inward from R + A (E)
    pub exosphere_thickness: f32,
}

impl BodyGeometry {
    pub fn new(body_radius: f32, atmosphere_thickness: f32, exosphere_thickness: f32) -> Self {
        Self {
            body_radius,
            atmosphere_thickness,
            exosphere_thickness,
        }
    }

    /// `R + A - E`
    #[inline]
    pub fn exosphere_inner(&self) -> f32 {
        self.body_radius + self.atmosphere_thickness - self.exosphere_thickness
    }

    /// `R + A`
    #[inline]
    pub fn exosphere_outer(&self) -> f32 {
        self.body_radius + self.atmosphere_thickness
    }

    /// Radius beyond 90% of the atmosphere thickness
    #[inline]
    pub fn upper_atmosphere(&self) -> f32 {
        self.body_radius + self.atmosphere_thickness * UPPER_ATMOSPHERE_FRACTION
    }

    pub fn regime(&self, radius: f32) -> Regime {
        if radius < self.body_radius {
            Regime::Interior
        } else if radius <= self.exosphere_inner() {
            Regime::Atmosphere
        } else if radius <= self.exosphere_outer() {
            Regime::Exosphere
        } else {
            Regime::Beyond
        }
    }

    /// Radii of the boundary circles drawn by the plots: exosphere inner and
    /// outer boundary, then the 110% R and 145% R markers.
    pub fn reference_shells(&self) -> [f32; 4] {
        [
            self.exosphere_inner(),
            self.exosphere_outer(),
            self.body_radius * 1.10,
            self.body_radius * 1.45,
        ]
    }
}

impl Default for BodyGeometry {
    fn default() -> Self {
        Self::new(BODY_RADIUS, ATMOSPHERE_THICKNESS, EXOSPHERE_THICKNESS)
    }
}
