use image::{Rgba, RgbaImage};
use log::debug;

use crate::{
    font::{Rasterizer, RenderError},
    layout::TextBlock,
};

/// Draw the lines of `block` on a copy of `source`, all with `paint`.
///
/// `source` is left untouched, the returned image has the same dimensions.
///
/// # Errors
/// Forward the rasterization error of the first line that failed to draw.
#[profiling::function]
pub fn compose<R>(
    source: &RgbaImage,
    block: &TextBlock,
    rasterizer: &R,
    paint: Rgba<u8>,
) -> Result<RgbaImage, RenderError>
where
    R: Rasterizer + ?Sized,
{
    let mut composite = source.clone();
    for line in block.lines() {
        rasterizer.draw_line(line.text(), line.origin(), paint, &mut composite)?;
    }
    debug!("{} lines drawn with {paint:?}", block.lines().len());
    Ok(composite)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{content::Size, test_utils::BlockRasterizer};

    #[test]
    fn draw_on_copy() {
        let source = RgbaImage::from_pixel(200, 100, Rgba([255, 255, 255, 255]));
        let raster = BlockRasterizer::new(20.);
        let block = TextBlock::measure(&raster, Size::of(&source), "ab\ncd", 0.5).unwrap();
        let paint = Rgba([0, 0, 0, 255]);

        let composite = compose(&source, &block, &raster, paint).unwrap();
        assert_eq!(composite.dimensions(), source.dimensions());
        assert!(source.pixels().all(|px| *px == Rgba([255; 4])));

        // Every measured area is fully painted at its final place.
        for line in block.lines() {
            let area = line.area();
            let origin = line.origin();
            let left = origin.x + area.min().x;
            let top = origin.y - raster.ascent_px() + area.min().y;
            for y in top..top + area.height() {
                for x in left..left + area.width() {
                    let inked = (x - left) % raster.advance != raster.advance - 2
                        && (x - left) % raster.advance != raster.advance - 1;
                    if inked {
                        let px = composite.get_pixel(x.try_into().unwrap(), y.try_into().unwrap());
                        assert_eq!(*px, paint, "pixel ({x}, {y})");
                    }
                }
            }
        }
        let painted = composite.pixels().filter(|px| **px == paint).count();
        assert_eq!(painted, 4 * 8 * 20);
    }
}
