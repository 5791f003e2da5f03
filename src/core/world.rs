use crate::bodies::{FallingBody, Material};
use crate::core::{BodyEvent, EventQueue, ResetSignal, SimulationConfig};
use crate::error::SimError;
use crate::shapes::Shape;
use crate::Result;

use log::{debug, trace};

/// The world driving a single falling body
///
/// Owns the body, the simulation configuration, and the window dimensions,
/// and advances the body once per fixed tick. A [`ResetSignal`] handle can be
/// shared with an input task; the pending raise is consumed at the start of
/// each tick.
pub struct FallWorld {
    /// The single simulated body
    body: FallingBody,

    /// Configuration for the simulation
    config: SimulationConfig,

    /// Width of the window the body falls in (px)
    window_width: f32,

    /// Height of the window the body falls in (px)
    window_height: f32,

    /// Queue of simulation events
    events: EventQueue,

    /// Shared reset flag consumed once per tick
    reset: ResetSignal,

    /// Number of ticks advanced so far
    ticks: u64,
}

impl FallWorld {
    /// Creates a new world with default settings
    pub fn new(
        shape: Shape,
        material: Material,
        window_width: f32,
        window_height: f32,
    ) -> Result<Self> {
        Self::with_config(
            shape,
            material,
            window_width,
            window_height,
            SimulationConfig::default(),
        )
    }

    /// Creates a new world with the given configuration
    pub fn with_config(
        shape: Shape,
        material: Material,
        window_width: f32,
        window_height: f32,
        config: SimulationConfig,
    ) -> Result<Self> {
        for (name, value) in [("window_width", window_width), ("window_height", window_height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SimError::InvalidParameter(format!(
                    "{} must be finite and positive, got {}",
                    name, value
                )));
            }
        }

        let body = FallingBody::new(shape, material, window_width, window_height, &config)?;

        Ok(Self {
            body,
            config,
            window_width,
            window_height,
            events: EventQueue::new(),
            reset: ResetSignal::new(),
            ticks: 0,
        })
    }

    /// Returns a reference to the simulation configuration
    pub fn get_config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Returns a reference to the simulated body
    pub fn get_body(&self) -> &FallingBody {
        &self.body
    }

    /// Returns the window dimensions as (width, height)
    pub fn get_window_size(&self) -> (f32, f32) {
        (self.window_width, self.window_height)
    }

    /// Returns the number of ticks advanced so far
    pub fn get_ticks(&self) -> u64 {
        self.ticks
    }

    /// Returns the total elapsed simulation time
    pub fn get_time(&self) -> f32 {
        self.ticks as f32 * self.config.time_step
    }

    /// Returns a handle to the shared reset signal
    ///
    /// Hand the clone to the input task; raising it resets the body at the
    /// start of the next tick.
    pub fn reset_signal(&self) -> ResetSignal {
        self.reset.clone()
    }

    /// Advances the simulation by one fixed tick
    pub fn step(&mut self) {
        if self.reset.take() {
            self.reset();
        }

        if let Some(event) = self.body.advance(self.window_height, &self.config) {
            match event {
                BodyEvent::Bounced { impact_speed } => {
                    trace!("bounce at tick {} (impact speed {:.3})", self.ticks, impact_speed);
                }
                BodyEvent::Stalled => {
                    debug!("body stalled at tick {}", self.ticks);
                }
                BodyEvent::Reset => {}
            }
            self.events.add_event(event);
        }

        self.ticks += 1;
    }

    /// Resets the body to its centered starting position immediately
    pub fn reset(&mut self) {
        self.body.reset(self.window_width, self.window_height);
        self.events.add_event(BodyEvent::Reset);
        debug!("body reset at tick {}", self.ticks);
    }

    /// Gets the next simulation event from the queue
    pub fn next_event(&mut self) -> Option<BodyEvent> {
        self.events.next_event()
    }

    /// Returns whether there are any pending simulation events
    pub fn has_events(&self) -> bool {
        self.events.has_events()
    }
}
