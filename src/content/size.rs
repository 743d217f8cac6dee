use image::GenericImageView;

use super::{ContentError, Point};

/// The dimensions of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    /// Width in pixels.
    pub w: u32,
    /// Height in pixels.
    pub h: u32,
}

impl Size {
    /// Create a `Size` from a width and a height.
    #[must_use]
    pub const fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }

    /// The dimensions of `image`.
    #[must_use]
    pub fn of<I: GenericImageView>(image: &I) -> Self {
        let (w, h) = image.dimensions();
        Self { w, h }
    }

    /// The bottom-right corner of a frame of this size, as an exclusive coordinate.
    ///
    /// # Errors
    /// Will return `DimensionOverflow` if a dimension doesn't fit in an `i32`.
    pub fn corner(self) -> Result<Point, ContentError> {
        let x = cast::i32(self.w).map_err(|_| ContentError::DimensionOverflow(self.w))?;
        let y = cast::i32(self.h).map_err(|_| ContentError::DimensionOverflow(self.h))?;
        Ok(Point::new(x, y))
    }

    /// The middle of the frame, rounded toward the top-left.
    ///
    /// # Errors
    /// Will return `DimensionOverflow` if a dimension doesn't fit in an `i32`.
    pub fn center(self) -> Result<Point, ContentError> {
        let corner = self.corner()?;
        Ok(Point::new(corner.x / 2, corner.y / 2))
    }
}
