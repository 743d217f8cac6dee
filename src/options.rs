//! Settings of the overlay pipeline.

use image::Rgba;

use crate::{image::DEFAULT_JPEG_QUALITY, layout::DEFAULT_LINE_SPACING};

/// How the color of the text is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextColor {
    /// Complement of the average color of the image under the text.
    #[default]
    Complement,
    /// Always the same color.
    Fixed(Rgba<u8>),
}

/// Settings of an [`Overlay`](crate::Overlay).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayOptions {
    /// Space between two lines, as a ratio of the point size.
    pub line_spacing: f32,
    /// Color of the text.
    pub color: TextColor,
    /// Quality of the saved `JPEG`, from 1 to 100.
    pub jpeg_quality: u8,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            line_spacing: DEFAULT_LINE_SPACING,
            color: TextColor::Complement,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl OverlayOptions {
    /// Set the space between lines, as a ratio of the point size.
    #[must_use]
    pub const fn with_line_spacing(mut self, ratio: f32) -> Self {
        self.line_spacing = ratio;
        self
    }

    /// Draw the text with `color` instead of the complement of the background.
    #[must_use]
    pub const fn with_color(mut self, color: Rgba<u8>) -> Self {
        self.color = TextColor::Fixed(color);
        self
    }

    /// Set the quality of saved `JPEG` files, clamped to `1..=100`.
    #[must_use]
    pub fn with_jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality.clamp(1, 100);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = OverlayOptions::default();
        assert!((options.line_spacing - 0.5).abs() < f32::EPSILON);
        assert_eq!(options.color, TextColor::Complement);
        assert_eq!(options.jpeg_quality, 90);
    }

    #[test]
    fn builder() {
        let options = OverlayOptions::default()
            .with_line_spacing(1.)
            .with_color(Rgba([1, 2, 3, 255]))
            .with_jpeg_quality(0);
        assert!((options.line_spacing - 1.).abs() < f32::EPSILON);
        assert_eq!(options.color, TextColor::Fixed(Rgba([1, 2, 3, 255])));
        assert_eq!(options.jpeg_quality, 1);
    }
}
