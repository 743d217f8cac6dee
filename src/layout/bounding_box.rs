use image::{Rgba, RgbaImage};
use log::trace;

use super::LayoutError;
use crate::{
    content::{Area, ContentError, Point, Size},
    font::Rasterizer,
};

/// Paint used for the measurement pass, any non-zero red would do.
const MEASURE_PAINT: Rgba<u8> = Rgba([0xff, 0xff, 0xff, 0xff]);

/// Find the tight pixel area covered by `text` once rasterized.
///
/// The line is drawn with its baseline at `(0, ascent)` on a transparent scratch
/// canvas of the frame size, then every pixel with a non-zero red channel is
/// added to the result.
///
/// # Errors
/// Will return `EmptyBoundingBox` if the line don't produce any visible pixel,
/// and forward rasterization errors.
#[profiling::function]
pub fn find_bounding_box<R>(rasterizer: &R, frame: Size, text: &str) -> Result<Area, LayoutError>
where
    R: Rasterizer + ?Sized,
{
    let mut scratch = RgbaImage::new(frame.w, frame.h);
    let origin = Point::new(0, rasterizer.ascent_px());
    rasterizer.draw_line(text, origin, MEASURE_PAINT, &mut scratch)?;

    // Track the bounds in pixel space, converted once at the end.
    let bounds = scratch
        .enumerate_pixels()
        .filter(|(_, _, px)| px[0] != 0)
        .fold(None, |acc: Option<[u32; 4]>, (x, y, _)| {
            Some(acc.map_or([x, y, x, y], |[x1, y1, x2, y2]| {
                [x1.min(x), y1.min(y), x2.max(x), y2.max(y)]
            }))
        });
    let Some([x1, y1, x2, y2]) = bounds else {
        return Err(LayoutError::EmptyBoundingBox { text: text.into() });
    };

    let coord = |v: u32| cast::i32(v).map_err(|_| ContentError::DimensionOverflow(v));
    let area = Area::pixel(coord(x1)?, coord(y1)?).union(Area::pixel(coord(x2)?, coord(y2)?));
    trace!("bounding box of {text:?}: {area:?}");
    Ok(area)
}
