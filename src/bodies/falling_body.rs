use crate::bodies::motion_flags::MotionFlags;
use crate::bodies::{Material, MotionPhase};
use crate::core::{BodyEvent, SimulationConfig};
use crate::shapes::Shape;
use crate::Result;

/// A single body falling under gravity in window pixel space
///
/// The body integrates vertical velocity once per fixed tick, clamps descent
/// speed to its terminal velocity, loses speed to restitution on each floor
/// contact, and stalls once a contact happens below the stall threshold.
/// Position is the top-left corner of the shape's bounding extents.
#[derive(Debug, Clone)]
pub struct FallingBody {
    /// The body's cross-section shape
    shape: Shape,

    /// The body's material properties
    material: Material,

    /// Horizontal position of the top-left corner (px)
    x: f32,

    /// Vertical position of the top-left corner (px, grows downward)
    y: f32,

    /// Current vertical speed (px per tick, always >= 0; direction is
    /// carried by the motion flags)
    velocity: f32,

    /// Cached cross-sectional area used in the drag term
    cross_section: f32,

    /// Drag coefficient used in the terminal-velocity computation
    drag_coefficient: f32,

    /// Maximum descent speed, fixed at construction
    terminal_velocity: f32,

    /// The body's bounce-phase flags
    flags: MotionFlags,
}

impl FallingBody {
    /// Creates a new body centered in a window of the given dimensions
    ///
    /// The terminal velocity is derived once from the shape's cross-section,
    /// the material weight, and the config's gravity, air density, and drag
    /// coefficient. It is never recomputed afterwards.
    pub fn new(
        shape: Shape,
        material: Material,
        window_width: f32,
        window_height: f32,
        config: &SimulationConfig,
    ) -> Result<Self> {
        config.validate()?;
        // Enum variant fields are public, so re-check the ranges here
        let shape = match shape {
            Shape::Circle { radius } => Shape::circle(radius)?,
            Shape::Rectangle { width, height } => Shape::rectangle(width, height)?,
            Shape::Triangle { width, height } => Shape::triangle(width, height)?,
        };
        let material = Material::new(material.weight, material.restitution)?;

        let cross_section = shape.cross_section();
        let drag_coefficient = config.drag_coefficient;
        let terminal_velocity = (2.0 * material.weight * config.gravity
            / (config.air_density * cross_section * drag_coefficient))
            .sqrt();

        let mut body = Self {
            shape,
            material,
            x: 0.0,
            y: 0.0,
            velocity: 0.0,
            cross_section,
            drag_coefficient,
            terminal_velocity,
            flags: MotionFlags::empty(),
        };
        body.reset(window_width, window_height);

        Ok(body)
    }

    /// Returns the body's shape
    pub fn get_shape(&self) -> &Shape {
        &self.shape
    }

    /// Returns the body's material
    pub fn get_material(&self) -> &Material {
        &self.material
    }

    /// Returns the body's top-left position as (x, y)
    pub fn get_position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    /// Returns the body's current vertical speed (px per tick)
    pub fn get_velocity(&self) -> f32 {
        self.velocity
    }

    /// Returns the body's terminal velocity (px per tick)
    pub fn get_terminal_velocity(&self) -> f32 {
        self.terminal_velocity
    }

    /// Returns the cached cross-sectional area
    pub fn get_cross_section(&self) -> f32 {
        self.cross_section
    }

    /// Returns the drag coefficient the terminal velocity was derived with
    pub fn get_drag_coefficient(&self) -> f32 {
        self.drag_coefficient
    }

    /// Returns the body's current bounce phase
    pub fn phase(&self) -> MotionPhase {
        if self.flags.contains(MotionFlags::STALLED) {
            MotionPhase::Stalled
        } else if self.flags.contains(MotionFlags::RISING) {
            MotionPhase::Rising
        } else {
            MotionPhase::Descending
        }
    }

    /// Returns whether the body is at rest on the floor
    pub fn is_stalled(&self) -> bool {
        self.flags.contains(MotionFlags::STALLED)
    }

    /// Advances the body by one fixed tick
    ///
    /// Returns the event produced by this tick, if any: a floor contact
    /// either bounces the body (`Bounced`, carrying the pre-bounce speed) or
    /// stalls it (`Stalled`). Regular integration ticks return `None`.
    pub fn advance(&mut self, window_height: f32, config: &SimulationConfig) -> Option<BodyEvent> {
        match self.phase() {
            MotionPhase::Descending => {
                self.y += self.velocity;
                self.velocity += config.gravity * config.time_step;

                if self.velocity >= self.terminal_velocity {
                    self.velocity = self.terminal_velocity;
                }

                let floor = window_height - self.shape.height();
                if self.y >= floor {
                    // Snap onto the floor line before deciding the outcome
                    self.y = floor;

                    if self.velocity <= config.stall_threshold * self.terminal_velocity {
                        self.flags.insert(MotionFlags::STALLED);
                        self.velocity = 0.0;
                        return Some(BodyEvent::Stalled);
                    }

                    let impact_speed = self.velocity;
                    self.flags.insert(MotionFlags::RISING);
                    self.velocity *= self.material.restitution;
                    return Some(BodyEvent::Bounced { impact_speed });
                }
            }
            MotionPhase::Rising => {
                self.y -= self.velocity;
                self.velocity -= config.gravity * config.time_step;

                if self.velocity <= 0.0 {
                    // Rebound exhausted; next tick resumes descent from here
                    self.velocity = 0.0;
                    self.flags.remove(MotionFlags::RISING);
                }
            }
            MotionPhase::Stalled => {}
        }

        None
    }

    /// Re-centers the body in the window and puts it back into free fall
    ///
    /// Velocity is zeroed and the phase flags cleared. Shape, material, and
    /// terminal velocity are left untouched.
    pub fn reset(&mut self, window_width: f32, window_height: f32) {
        self.x = window_width / 2.0 - self.shape.half_width();
        self.y = window_height / 2.0 - self.shape.half_height();
        self.velocity = 0.0;
        self.flags = MotionFlags::empty();
    }
}
