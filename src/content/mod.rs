//! Module for text placement geometry.
mod area;
mod point;
mod size;

pub use area::Area;
pub use point::Point;
pub use size::Size;

use thiserror::Error;

/// Error for content
#[derive(Debug, Error)]
pub enum ContentError {
    /// Indicate an invalid bounding box Area
    /// Example: If at least one coordinate value of `max` point is inferior or equal to `min` point.
    #[error("Invalid bounding box for Area: {min} -> {max}")]
    InvalidAreaBounding {
        /// Requested top-left corner.
        min: Point,
        /// Requested bottom-right corner (exclusive).
        max: Point,
    },

    /// An image dimension that can't be expressed as a signed coordinate.
    #[error("Image dimension '{0}' is too large to be used as a coordinate")]
    DimensionOverflow(u32),
}
