use crate::error::SimError;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Configuration parameters for the simulation
///
/// Gravity and the time step are scaled for pixel-per-tick units rather than
/// real-world meters per second; the defaults reproduce the tuned constants
/// the simulator was calibrated with.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SimulationConfig {
    /// Gravitational acceleration (px-per-tick units, scaled from 9.81)
    pub gravity: f32,

    /// Air density used in the terminal-velocity computation (kg/m^3)
    pub air_density: f32,

    /// The fixed time step for the simulation (~120 Hz)
    pub time_step: f32,

    /// Drag coefficient applied to every shape
    pub drag_coefficient: f32,

    /// Fraction of terminal velocity below which a floor contact stalls the
    /// body instead of bouncing it
    pub stall_threshold: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravity: 0.981,
            air_density: 1.225,
            time_step: 0.0083,
            drag_coefficient: 0.5,
            stall_threshold: 0.04,
        }
    }
}

impl SimulationConfig {
    /// Checks that every parameter is finite and in range
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("gravity", self.gravity),
            ("air_density", self.air_density),
            ("time_step", self.time_step),
            ("drag_coefficient", self.drag_coefficient),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SimError::InvalidParameter(format!(
                    "{} must be finite and positive, got {}",
                    name, value
                )));
            }
        }
        if !self.stall_threshold.is_finite() || !(0.0..1.0).contains(&self.stall_threshold) {
            return Err(SimError::InvalidParameter(format!(
                "stall_threshold must be in [0, 1), got {}",
                self.stall_threshold
            )));
        }
        Ok(())
    }
}
