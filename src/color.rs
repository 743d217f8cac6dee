//! Pick a text color contrasting with the image under the text.
//!
//! The region covered by all text lines is averaged on the source image, and
//! the complement of the average is used to draw the text.
//!
//! ## Channel depth
//!
//! Every computation is done on 8 bits channels: images of other depths are
//! converted to [`image::RgbaImage`] when decoded. The average of a channel is
//! the floor of `sum / count`, and its complement is `255 - average`.
//! The alpha channel of the source is not taken into account.

use image::{GenericImageView as _, Rgb, Rgba, RgbaImage};
use log::{debug, warn};
use thiserror::Error;

use crate::content::{Area, Size};

/// Error for color selection.
#[derive(Debug, Error)]
pub enum ColorError {
    /// There is no text area to sample.
    #[error("No text area to sample a color from")]
    NoRegions,

    /// The region to sample contains no pixel of the image.
    #[error("Sampling region {area:?} contains no pixel of the image")]
    InvalidRegion {
        /// Union of the text areas
        area: Area,
    },
}

/// Average color of the pixels of `source` inside `region`.
///
/// `region` is clipped to the image bounds before sampling.
///
/// # Errors
/// Will return `InvalidRegion` if the clipped region has no pixel.
#[profiling::function]
pub fn average_color(source: &RgbaImage, region: Area) -> Result<Rgb<u8>, ColorError> {
    let invalid = || ColorError::InvalidRegion { area: region };

    let bounds = Area::from_size(Size::of(source)).map_err(|_| invalid())?;
    let clipped = region.intersect(bounds);
    if clipped.is_empty() {
        return Err(invalid());
    }
    if clipped != region {
        warn!("sampling region {region:?} clipped to {clipped:?}");
    }

    let (Ok(x), Ok(y), Ok(w), Ok(h)) = (
        cast::u32(clipped.min().x),
        cast::u32(clipped.min().y),
        cast::u32(clipped.width()),
        cast::u32(clipped.height()),
    ) else {
        return Err(invalid());
    };

    let mut sums = [0_u64; 3];
    for (_, _, px) in source.view(x, y, w, h).pixels() {
        for (sum, channel) in sums.iter_mut().zip(px.0) {
            *sum += u64::from(channel);
        }
    }
    // Non-zero, the clipped region is not empty.
    let count = u64::from(w) * u64::from(h);
    let mean = sums.map(|sum| cast::u8(sum / count).unwrap_or(u8::MAX));
    debug!("average color of {clipped:?} on {count} pixels: {mean:?}");

    Ok(Rgb(mean))
}

/// Channel-wise complement of `color`, fully opaque.
#[must_use]
pub fn complement(color: Rgb<u8>) -> Rgba<u8> {
    let Rgb([r, g, b]) = color;
    Rgba([u8::MAX - r, u8::MAX - g, u8::MAX - b, u8::MAX])
}

/// Complement of the average color of `source` under the union of `areas`.
///
/// `areas` must be sampled on the original image, not on an image already
/// carrying the text.
///
/// # Errors
/// Will return `NoRegions` if `areas` is empty, and `InvalidRegion` if their
/// union has no pixel inside the image.
pub fn complement_color<I>(source: &RgbaImage, areas: I) -> Result<Rgba<u8>, ColorError>
where
    I: IntoIterator<Item = Area>,
{
    let mut areas = areas.into_iter().peekable();
    if areas.peek().is_none() {
        return Err(ColorError::NoRegions);
    }
    let region: Area = areas.collect();
    let average = average_color(source, region)?;
    Ok(complement(average))
}
