//! Font loading and single line rasterization.
//!
//! A [`FontFace`] bundles a parsed `TrueType`/`OpenType` font with the point size used
//! for the whole overlay. The same face is used to measure lines and to draw them,
//! so both passes produce the same glyph shapes.
//!
//! Point sizes follow a 72 DPI convention: one point is one pixel, and one `em`
//! of the font is `point_size` pixels tall.

mod raster;

#[cfg(test)]
pub(crate) use raster::blend;
pub use raster::{Rasterizer, RenderError};

use ab_glyph::{Font as _, FontArc, InvalidFont, PxScale};
use log::debug;
use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Error for font loading.
#[derive(Debug, Error)]
pub enum FontError {
    /// We could not read a font file.
    #[error("Could not read font file '{}'", path.display())]
    Io {
        /// Source error
        source: io::Error,
        /// Path of the file we tried to read
        path: PathBuf,
    },

    /// Font data are malformed.
    #[error("Could not parse font data")]
    Parse(#[source] InvalidFont),

    /// The point size is not a finite, strictly positive value.
    #[error("Invalid point size '{0}'")]
    InvalidPointSize(f32),

    /// The font don't provide a usable units per em value, it can't be scaled.
    #[error("Font has no usable units per em value")]
    MissingUnitsPerEm,
}

/// A parsed font face with a fixed point size.
///
/// Cloning is cheap, the font data are shared.
#[derive(Clone)]
pub struct FontFace {
    font: FontArc,
    point_size: f32,
    scale: PxScale,
    ascent_px: i32,
}

impl FontFace {
    /// Open a font file and parse it.
    ///
    /// # Errors
    /// Will return `FontError::Io` if the file can't be read, otherwise see [`FontFace::from_bytes`].
    #[profiling::function]
    pub fn open<P: AsRef<Path>>(path: P, point_size: f32) -> Result<Self, FontError> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|source| FontError::Io {
            source,
            path: path.into(),
        })?;
        Self::from_bytes(data, point_size)
    }

    /// Parse font data and prepare it for drawing at `point_size`.
    ///
    /// # Errors
    /// Will return `InvalidPointSize` if `point_size` is not finite and strictly positive,
    /// `Parse` if the data are not a valid font, and `MissingUnitsPerEm` if the font can't be scaled.
    pub fn from_bytes(data: Vec<u8>, point_size: f32) -> Result<Self, FontError> {
        if !point_size.is_finite() || point_size <= 0. {
            return Err(FontError::InvalidPointSize(point_size));
        }
        let ascent_px = cast::i32(point_size.round())
            .map_err(|_| FontError::InvalidPointSize(point_size))?;

        let font = FontArc::try_from_vec(data).map_err(FontError::Parse)?;

        // `PxScale` is relative to the font height (ascent - descent), not to the em.
        let units_per_em = font.units_per_em().ok_or(FontError::MissingUnitsPerEm)?;
        let scale = PxScale::from(point_size * font.height_unscaled() / units_per_em);
        debug!(
            "font loaded: {} glyphs, {units_per_em} units per em, {point_size}pt -> {scale:?}",
            font.glyph_count()
        );

        Ok(Self {
            font,
            point_size,
            scale,
            ascent_px,
        })
    }
}

impl fmt::Debug for FontFace {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("FontFace")
            .field("point_size", &self.point_size)
            .field("scale", &self.scale)
            .field("ascent_px", &self.ascent_px)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::FONT_PATH;

    #[test]
    fn open_font() {
        let face = FontFace::open(FONT_PATH, 72.).unwrap();
        assert!((face.point_size() - 72.).abs() < f32::EPSILON);
        assert_eq!(face.ascent_px(), 72);
    }

    #[test]
    fn missing_font_file() {
        let err = FontFace::open("./fixtures/no-such-font.ttf", 12.).unwrap_err();
        assert!(matches!(err, FontError::Io { .. }));
    }

    #[test]
    fn malformed_font() {
        let err = FontFace::from_bytes(b"definitely not a font".to_vec(), 12.).unwrap_err();
        assert!(matches!(err, FontError::Parse(_)));
    }

    #[test]
    fn reject_invalid_point_size() {
        let data = fs::read(FONT_PATH).unwrap();
        for size in [0., -3., f32::NAN, f32::INFINITY] {
            let err = FontFace::from_bytes(data.clone(), size).unwrap_err();
            assert!(matches!(err, FontError::InvalidPointSize(_)));
        }
    }
}
