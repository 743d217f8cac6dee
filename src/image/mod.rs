//! Module for `Image` decoding, compositing and persistence.
mod compose;
mod utils;

pub use compose::compose;
pub use utils::{save_jpeg, write_jpeg, SaveError, DEFAULT_JPEG_QUALITY};

use image::{ImageError, ImageFormat, RgbaImage};
use log::debug;
use thiserror::Error;

/// Error for source image decoding.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Data don't start with the signature of a supported format.
    #[error("Unrecognized image format ({size} bytes)")]
    UnknownFormat {
        /// Size of the data
        size: usize,
        /// Error source
        source: ImageError,
    },

    /// Data are recognized but could not be decoded.
    #[error("Could not decode {format:?} image")]
    Image {
        /// Guessed format of the data
        format: ImageFormat,
        /// Error source
        source: ImageError,
    },
}

/// Decode an encoded image, whatever its color type, into 8 bits `RGBA`.
///
/// # Errors
/// Will return `UnknownFormat` if the format can't be guessed from the data,
/// or `Image` if the decoding failed.
#[profiling::function]
pub fn decode(data: &[u8]) -> Result<RgbaImage, DecodeError> {
    let format = image::guess_format(data).map_err(|source| DecodeError::UnknownFormat {
        size: data.len(),
        source,
    })?;
    let img = image::load_from_memory_with_format(data, format)
        .map_err(|source| DecodeError::Image { format, source })?;
    debug!(
        "decoded {format:?} image: {}x{} {:?}",
        img.width(),
        img.height(),
        img.color()
    );
    Ok(img.into_rgba8())
}
