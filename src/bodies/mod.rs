mod falling_body;
mod material;

pub use self::falling_body::FallingBody;
pub use self::material::Material;

/// Flags for tracking the bounce phase of a body
pub mod motion_flags {
    use bitflags::bitflags;

    bitflags! {
        /// Flags describing where a body is in its bounce cycle
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct MotionFlags: u32 {
            /// Body is rebounding upward after a floor contact
            const RISING = 0x01;

            /// Body is at rest on the floor; terminal until a reset
            const STALLED = 0x02;
        }
    }
}

/// The phase of the bounce state machine
///
/// A body cycles Descending -> Rising -> Descending on each bounce, losing
/// speed to restitution, until a floor contact below the stall threshold
/// drops it into `Stalled`. Only a reset leaves `Stalled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionPhase {
    /// Falling under gravity toward the floor
    Descending,

    /// Rebounding upward after a bounce
    Rising,

    /// At rest on the floor until a reset
    Stalled,
}
