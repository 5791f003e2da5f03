use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared one-shot reset flag between an input task and the simulation task
///
/// The input task calls [`raise`](Self::raise) when the user asks for a
/// reset; the simulation task calls [`take`](Self::take) once per tick,
/// which reads and clears the flag in a single atomic swap so a raise is
/// consumed exactly once.
#[derive(Debug, Clone, Default)]
pub struct ResetSignal {
    flag: Arc<AtomicBool>,
}

impl ResetSignal {
    /// Creates a new, un-raised reset signal
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises the signal; the next `take` returns true
    pub fn raise(&self) {
        self.flag.store(true, Ordering::Release);
    }

    /// Consumes the signal, returning whether it was raised
    pub fn take(&self) -> bool {
        self.flag.swap(false, Ordering::AcqRel)
    }

    /// Returns whether the signal is currently raised, without consuming it
    pub fn is_raised(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}
