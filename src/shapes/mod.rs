use crate::error::SimError;
use crate::Result;

/// Pi truncated to five decimals. The default tuning constants in
/// `SimulationConfig` were calibrated against this value, so it is kept
/// instead of `std::f32::consts::PI`.
pub const PI: f32 = 3.14159;

/// Cross-section shape of a falling body
///
/// The shape determines the frontal area used in the drag-force term of the
/// terminal-velocity computation, and the bounding extents used for centering
/// and floor contact.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    /// A circle described by its radius, in centimeters
    Circle {
        /// The radius of the circle (cm)
        radius: f32,
    },

    /// An axis-aligned rectangle
    Rectangle {
        /// The width of the rectangle
        width: f32,

        /// The height of the rectangle
        height: f32,
    },

    /// An upright triangle bounded by the given extents
    Triangle {
        /// The base width of the triangle
        width: f32,

        /// The height of the triangle
        height: f32,
    },
}

impl Shape {
    /// Creates a circle shape with the given radius in centimeters
    pub fn circle(radius: f32) -> Result<Self> {
        validate_extent("radius", radius)?;
        Ok(Self::Circle { radius })
    }

    /// Creates a rectangle shape with the given dimensions
    pub fn rectangle(width: f32, height: f32) -> Result<Self> {
        validate_extent("width", width)?;
        validate_extent("height", height)?;
        Ok(Self::Rectangle { width, height })
    }

    /// Creates a triangle shape with the given base width and height
    pub fn triangle(width: f32, height: f32) -> Result<Self> {
        validate_extent("width", width)?;
        validate_extent("height", height)?;
        Ok(Self::Triangle { width, height })
    }

    /// Returns the type name of the shape
    pub fn shape_type(&self) -> &'static str {
        match self {
            Self::Circle { .. } => "Circle",
            Self::Rectangle { .. } => "Rectangle",
            Self::Triangle { .. } => "Triangle",
        }
    }

    /// Returns the cross-sectional (frontal) area used for drag
    ///
    /// The circle radius is given in centimeters and converted to meters, so
    /// its area comes out in square meters. Rectangle and triangle extents
    /// are used as-is.
    pub fn cross_section(&self) -> f32 {
        match self {
            Self::Circle { radius } => PI * (radius / 100.0).powi(2),
            Self::Rectangle { width, height } => width * height,
            Self::Triangle { width, height } => 0.5 * width * height,
        }
    }

    /// Returns the width of the shape's bounding extents, in pixels
    pub fn width(&self) -> f32 {
        match self {
            Self::Circle { radius } => radius * 2.0,
            Self::Rectangle { width, .. } | Self::Triangle { width, .. } => *width,
        }
    }

    /// Returns the height of the shape's bounding extents, in pixels
    pub fn height(&self) -> f32 {
        match self {
            Self::Circle { radius } => radius * 2.0,
            Self::Rectangle { height, .. } | Self::Triangle { height, .. } => *height,
        }
    }

    /// Returns half the bounding width, used to center the body horizontally
    pub fn half_width(&self) -> f32 {
        match self {
            Self::Circle { radius } => *radius,
            _ => self.width() / 2.0,
        }
    }

    /// Returns half the bounding height, used to center the body vertically
    pub fn half_height(&self) -> f32 {
        match self {
            Self::Circle { radius } => *radius,
            _ => self.height() / 2.0,
        }
    }
}

/// Rejects non-finite and non-positive extents so the cross-section, and with
/// it the terminal velocity, is always strictly positive.
fn validate_extent(name: &str, value: f32) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(SimError::InvalidParameter(format!(
            "{} must be finite and positive, got {}",
            name, value
        )));
    }
    Ok(())
}
