//! Measure and place the lines of a text block.
//!
//! Each line is rasterized on a scratch canvas to find its real pixel extent
//! ([`find_bounding_box`]), then the lines are stacked and centered in the frame
//! ([`layout`]). [`TextBlock`] runs both steps for a whole multi-line text.

mod bounding_box;
mod origins;

pub use bounding_box::find_bounding_box;
pub use origins::{layout, layout_with_spacing, spacing_px, DEFAULT_LINE_SPACING};

use origins::block_height;

use log::{debug, trace};
use thiserror::Error;

use crate::{
    content::{Area, ContentError, Point, Size},
    font::{Rasterizer, RenderError},
};

/// Error for text block layout.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// A line don't produce any visible pixel once rasterized.
    #[error("Line {text:?} renders no visible pixel")]
    EmptyBoundingBox {
        /// Text of the line
        text: String,
    },

    /// Rasterization of a line failed.
    #[error("Line rasterization failed")]
    Render(#[from] RenderError),

    /// Frame geometry error.
    #[error("Invalid frame")]
    Content(#[from] ContentError),

    /// The space between lines is not a usable pixel value.
    #[error("Invalid line spacing '{0}'")]
    InvalidSpacing(f32),

    /// Too many lines to compute the layout.
    #[error("Too many lines: {0}")]
    TooManyLines(usize),

    /// The stacked lines are too high to be placed with `i32` coordinates.
    #[error("Block of {count} lines spaced by {spacing}px is too high")]
    BlockTooHigh {
        /// Number of lines
        count: i32,
        /// Space between lines in pixels
        spacing: i32,
    },
}

/// Split a text in lines on `'\n'`, ignoring the `'\r'` of `"\r\n"` line ends.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// A measured and placed line of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    text: String,
    area: Area,
    origin: Point,
    placed: Area,
}

impl Line {
    /// Text of the line.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Pixel area of the line, as measured on the scratch canvas.
    #[must_use]
    pub const fn area(&self) -> Area {
        self.area
    }

    /// Where to draw the line: left of the text, on the baseline.
    #[must_use]
    pub const fn origin(&self) -> Point {
        self.origin
    }

    /// Pixel area of the line once drawn at its origin.
    #[must_use]
    pub const fn placed_area(&self) -> Area {
        self.placed
    }
}

/// Lines of a text, measured and placed to be centered in a frame.
#[derive(Debug, Clone)]
pub struct TextBlock {
    lines: Vec<Line>,
    spacing: i32,
    height: i32,
}

impl TextBlock {
    /// Split `text` in lines, measure each of them with `rasterizer`, and compute
    /// their origins to center the block in `frame`.
    /// Lines are separated by `spacing_ratio` times the point size.
    ///
    /// # Errors
    /// Will return `EmptyBoundingBox` if a line is blank (this include an empty `text`),
    /// and forward rasterization and layout errors.
    #[profiling::function]
    pub fn measure<R>(
        rasterizer: &R,
        frame: Size,
        text: &str,
        spacing_ratio: f32,
    ) -> Result<Self, LayoutError>
    where
        R: Rasterizer + ?Sized,
    {
        let spacing = spacing_px(rasterizer.point_size(), spacing_ratio)?;
        let measured = split_lines(text)
            .enumerate()
            .map(|(idx, line)| {
                let area = find_bounding_box(rasterizer, frame, line)?;
                trace!("line {idx}: {line:?} -> {area:?}");
                Ok((line, area))
            })
            .collect::<Result<Vec<_>, LayoutError>>()?;

        let areas = measured.iter().map(|(_, area)| *area).collect::<Vec<_>>();
        let origins = layout_with_spacing(frame, &areas, spacing)?;
        let count = cast::i32(areas.len()).map_err(|_| LayoutError::TooManyLines(areas.len()))?;
        let height = block_height(&areas, spacing, count)?;
        // Lines were measured with their baseline-left at (0, ascent).
        let scratch_origin = Point::new(0, rasterizer.ascent_px());
        let lines = measured
            .into_iter()
            .zip(origins)
            .map(|((text, area), origin)| Line {
                text: text.into(),
                area,
                origin,
                placed: area.translate(origin - scratch_origin),
            })
            .collect::<Vec<_>>();
        debug!("text block of {} lines in {frame:?}", lines.len());

        Ok(Self {
            lines,
            spacing,
            height,
        })
    }

    /// Lines of the block, in reading order.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Measured area of each line.
    pub fn areas(&self) -> impl Iterator<Item = Area> + '_ {
        self.lines.iter().map(Line::area)
    }

    /// Area of each line at its final place in the frame.
    pub fn placed_areas(&self) -> impl Iterator<Item = Area> + '_ {
        self.lines.iter().map(Line::placed_area)
    }

    /// Space between two lines in pixels.
    #[must_use]
    pub const fn spacing(&self) -> i32 {
        self.spacing
    }

    /// Height of the whole block: the line heights and the spaces between them.
    #[must_use]
    pub const fn total_height(&self) -> i32 {
        self.height
    }

    /// Union of the measured areas of all lines, in scratch canvas coordinates.
    /// See [`TextBlock::placed_areas`] for the region covered in the frame.
    #[must_use]
    pub fn union(&self) -> Area {
        self.areas().collect()
    }
}
