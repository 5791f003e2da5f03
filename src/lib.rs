pub mod shapes;
pub mod bodies;
pub mod core;

/// Re-export common types for easier usage
pub use crate::core::{FallWorld, SimulationConfig, ResetSignal, BodyEvent};
pub use crate::bodies::{FallingBody, Material, MotionPhase};
pub use crate::shapes::Shape;

/// Error types for the simulator
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum SimError {
        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),
    }
}

/// Result type for simulator operations
pub type Result<T> = std::result::Result<T, error::SimError>;

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
