pub mod config;
pub mod events;
pub mod reset;
pub mod world;

pub use self::config::SimulationConfig;
pub use self::events::{BodyEvent, EventQueue};
pub use self::reset::ResetSignal;
pub use self::world::FallWorld;
