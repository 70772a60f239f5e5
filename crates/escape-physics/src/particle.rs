//! Particle record and the enumerations it carries

use crate::vector::SpaceVector;

/// Gas species, fixed at creation
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    Hydrogen = 0,
    Helium = 1,
}

impl Species {
    /// Scalar used as the species color in renderer groups
    pub fn color_code(self) -> f32 {
        self as u32 as f32
    }
}

/// Escape status of a particle. Escaped states are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EscapeState {
    #[default]
    Bound,
    EscapedThermal,
    EscapedSolarWind,
}

impl EscapeState {
    #[inline]
    pub fn is_bound(self) -> bool {
        self == EscapeState::Bound
    }
}

/// A value per species (probabilities, weights)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeciesTable<T> {
    pub hydrogen: T,
    pub helium: T,
}

impl<T: Copy> SpeciesTable<T> {
    pub const fn new(hydrogen: T, helium: T) -> Self {
        Self { hydrogen, helium }
    }

    /// Same value for every species
    pub const fn uniform(value: T) -> Self {
        Self {
            hydrogen: value,
            helium: value,
        }
    }

    #[inline]
    pub fn get(&self, species: Species) -> T {
        match species {
            Species::Hydrogen => self.hydrogen,
            Species::Helium => self.helium,
        }
    }

    pub fn values(&self) -> [T; 2] {
        [self.hydrogen, self.helium]
    }
}

/// One simulated gas particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle<V: SpaceVector> {
    /// Position in planet-radius units
    pub position: V,
    /// Velocity in distance per tick
    pub velocity: V,
    pub species: Species,
    /// Energy picked up from the solar wind while bound
    pub energy: f32,
    pub escape_state: EscapeState,
}

impl<V: SpaceVector> Particle<V> {
    /// Create a bound particle with no accumulated energy
    pub fn new(position: V, velocity: V, species: Species) -> Self {
        Self {
            position,
            velocity,
            species,
            energy: 0.0,
            escape_state: EscapeState::Bound,
        }
    }

    /// Distance from the body center, always derived from the current position
    #[inline]
    pub fn radius(&self) -> f32 {
        self.position.length()
    }

    #[inline]
    pub fn is_bound(&self) -> bool {
        self.escape_state.is_bound()
    }

    /// On the sunward hemisphere (first coordinate > 0)
    #[inline]
    pub fn is_dayside(&self) -> bool {
        self.position.first() > 0.0
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_new_particle_is_bound() {
        let p = Particle::new(Vec2::new(3.0, 4.0), Vec2::ZERO, Species::Helium);
        assert!(p.is_bound());
        assert_eq!(p.energy, 0.0);
        assert_eq!(p.radius(), 5.0);
        assert!(p.is_dayside());
    }

    #[test]
    fn test_species_table_lookup() {
        let table = SpeciesTable::new(0.1, 0.01);
        assert_eq!(table.get(Species::Hydrogen), 0.1);
        assert_eq!(table.get(Species::Helium), 0.01);
        assert_eq!(SpeciesTable::uniform(3).values(), [3, 3]);
        assert_eq!(Species::Helium.color_code(), 1.0);
    }
}
