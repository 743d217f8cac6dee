//! The text overlay pipeline.

use image::{Rgba, RgbaImage};
use log::debug;
use std::path::Path;

use crate::{
    color::complement_color,
    content::Size,
    errors::TempelnaError,
    font::{FontFace, Rasterizer},
    image::{compose, decode, save_jpeg},
    layout::TextBlock,
    options::{OverlayOptions, TextColor},
    source::ImageSource,
};

/// Draw `text` centered on a copy of `source`, in the complement of the
/// average color under the text, with the default line spacing.
///
/// # Errors
/// See [`add_centered_text_with`].
pub fn add_centered_text(
    source: &RgbaImage,
    text: &str,
    face: &FontFace,
) -> Result<RgbaImage, TempelnaError> {
    add_centered_text_with(source, text, face, &OverlayOptions::default())
}

/// Draw `text` centered on a copy of `source` with `rasterizer` and `options`.
///
/// Lines are split on `'\n'`, measured, stacked and centered. Unless a fixed
/// color is requested, the color is sampled on `source` under the lines before
/// any text is drawn.
///
/// # Errors
/// Will return `Layout` if a line is blank or can't be measured, `Color` if the
/// text covers no pixel of the image, and `Render` if a line can't be drawn.
#[profiling::function]
pub fn add_centered_text_with<R>(
    source: &RgbaImage,
    text: &str,
    rasterizer: &R,
    options: &OverlayOptions,
) -> Result<RgbaImage, TempelnaError>
where
    R: Rasterizer + ?Sized,
{
    let frame = Size::of(source);
    let block = TextBlock::measure(rasterizer, frame, text, options.line_spacing)?;
    let paint = text_paint(source, &block, options.color)?;
    debug!(
        "drawing {} lines in {frame:?} with {paint:?}",
        block.lines().len()
    );
    Ok(compose(source, &block, rasterizer, paint)?)
}

fn text_paint(
    source: &RgbaImage,
    block: &TextBlock,
    color: TextColor,
) -> Result<Rgba<u8>, TempelnaError> {
    match color {
        TextColor::Complement => Ok(complement_color(source, block.placed_areas())?),
        TextColor::Fixed(paint) => Ok(paint),
    }
}

/// A font face and the settings to overlay text with it.
#[derive(Debug, Clone)]
pub struct Overlay {
    face: FontFace,
    options: OverlayOptions,
}

impl Overlay {
    /// Create an overlay drawing with `face`.
    #[must_use]
    pub const fn new(face: FontFace, options: OverlayOptions) -> Self {
        Self { face, options }
    }

    /// Create an overlay with the font file at `path`, drawn at `point_size`.
    ///
    /// # Errors
    /// Forward the font loading error.
    pub fn from_font_file<P: AsRef<Path>>(
        path: P,
        point_size: f32,
        options: OverlayOptions,
    ) -> Result<Self, TempelnaError> {
        let face = FontFace::open(path, point_size)?;
        Ok(Self::new(face, options))
    }

    /// The font face used to draw.
    #[must_use]
    pub const fn face(&self) -> &FontFace {
        &self.face
    }

    /// The overlay settings.
    #[must_use]
    pub const fn options(&self) -> &OverlayOptions {
        &self.options
    }

    /// Draw `text` centered on a copy of `source`.
    ///
    /// # Errors
    /// See [`add_centered_text_with`].
    pub fn add_centered_text(
        &self,
        source: &RgbaImage,
        text: &str,
    ) -> Result<RgbaImage, TempelnaError> {
        add_centered_text_with(source, text, &self.face, &self.options)
    }

    /// Fetch an image from `source`, draw `text` centered on it, and save
    /// the result as a `JPEG` file at `outfile`.
    ///
    /// # Errors
    /// Will return `Source` if the image can't be fetched, `Decode` if it can't be
    /// decoded, `Save` if the result can't be written, and the errors of
    /// [`add_centered_text_with`].
    #[profiling::function]
    pub fn render_to_file<S, P>(&self, source: &S, text: &str, outfile: P) -> Result<(), TempelnaError>
    where
        S: ImageSource + ?Sized,
        P: AsRef<Path>,
    {
        let data = source.fetch_image()?;
        let image = decode(&data)?;
        let result = self.add_centered_text(&image, text)?;
        save_jpeg(&result, outfile, self.options.jpeg_quality)?;
        Ok(())
    }
}
