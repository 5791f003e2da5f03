use std::collections::VecDeque;

/// An event produced by the body during a simulation tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BodyEvent {
    /// The body hit the floor and rebounded
    Bounced {
        /// The descent speed just before the bounce (px per tick)
        impact_speed: f32,
    },

    /// The body hit the floor below the stall threshold and came to rest
    Stalled,

    /// The body was re-centered and put back into free fall
    Reset,
}

/// A queue of simulation events
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<BodyEvent>,
}

impl EventQueue {
    /// Creates a new empty event queue
    pub fn new() -> Self {
        Self {
            events: VecDeque::new(),
        }
    }

    /// Adds an event to the queue
    pub fn add_event(&mut self, event: BodyEvent) {
        self.events.push_back(event);
    }

    /// Gets the next event from the queue
    pub fn next_event(&mut self) -> Option<BodyEvent> {
        self.events.pop_front()
    }

    /// Returns whether there are any events in the queue
    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }

    /// Clears all events from the queue
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
