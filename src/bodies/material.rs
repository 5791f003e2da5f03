use crate::error::SimError;
use crate::Result;

/// Material properties of a falling body
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Material {
    /// Mass of the body (kg)
    pub weight: f32,

    /// Coefficient of restitution (bounciness), 0-1
    pub restitution: f32,
}

impl Material {
    /// Creates a new material with the specified properties
    pub fn new(weight: f32, restitution: f32) -> Result<Self> {
        if !weight.is_finite() || weight <= 0.0 {
            return Err(SimError::InvalidParameter(format!(
                "weight must be finite and positive, got {}",
                weight
            )));
        }
        if !restitution.is_finite() || !(0.0..=1.0).contains(&restitution) {
            return Err(SimError::InvalidParameter(format!(
                "restitution must be in [0, 1], got {}",
                restitution
            )));
        }
        Ok(Self { weight, restitution })
    }

    /// Creates a material for a rubber ball (light, high restitution)
    pub fn rubber() -> Self {
        Self {
            weight: 0.5,
            restitution: 0.8,
        }
    }

    /// Creates a material for a steel ball (heavy, medium restitution)
    pub fn steel() -> Self {
        Self {
            weight: 7.8,
            restitution: 0.55,
        }
    }

    /// Creates a material for a clay lump (light, nearly inelastic)
    pub fn clay() -> Self {
        Self {
            weight: 1.2,
            restitution: 0.05,
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            weight: 1.0,      // 1 kg
            restitution: 0.3, // Slight bounce
        }
    }
}
