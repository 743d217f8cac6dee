use ab_glyph::{point, Font as _, GlyphId, ScaleFont as _};
use image::{Rgba, RgbaImage};
use log::trace;
use thiserror::Error;

use super::FontFace;
use crate::content::Point;

/// Errors of single line rasterization.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Only a single line can be drawn at once.
    #[error("Text contains a line break at byte {0}, a single line is expected")]
    LineBreak(usize),

    /// The face has no glyph for a visible character.
    #[error("No glyph for character {0:?} in the font face")]
    MissingGlyph(char),
}

/// Capability to draw one line of text into a bitmap.
///
/// Layout and color selection only rely on this trait, any rasterization backend
/// able to produce the same shapes for a measurement pass and a draw pass can be used.
pub trait Rasterizer {
    /// Font size used for drawing, in points.
    fn point_size(&self) -> f32;

    /// Distance in pixels from the top of a line to its baseline.
    /// Drawing at `(0, ascent_px)` keeps the glyphs away from the top edge.
    fn ascent_px(&self) -> i32;

    /// Draw `text` with its baseline starting at `origin`, blending `paint` over `canvas`
    /// proportionally to the glyph coverage. Pixels outside the canvas are clipped.
    ///
    /// # Errors
    /// Will return `LineBreak` if `text` is not a single line, or `MissingGlyph`
    /// if a character can't be drawn. Nothing is drawn in case of error.
    fn draw_line(
        &self,
        text: &str,
        origin: Point,
        paint: Rgba<u8>,
        canvas: &mut RgbaImage,
    ) -> Result<(), RenderError>;
}

impl Rasterizer for FontFace {
    fn point_size(&self) -> f32 {
        self.point_size
    }

    fn ascent_px(&self) -> i32 {
        self.ascent_px
    }

    #[profiling::function]
    fn draw_line(
        &self,
        text: &str,
        origin: Point,
        paint: Rgba<u8>,
        canvas: &mut RgbaImage,
    ) -> Result<(), RenderError> {
        if let Some(pos) = text.find('\n') {
            return Err(RenderError::LineBreak(pos));
        }
        let glyph_ids = text
            .chars()
            .map(|ch| {
                let id = self.font.glyph_id(ch);
                if id == GlyphId(0) && !ch.is_whitespace() && !ch.is_control() {
                    Err(RenderError::MissingGlyph(ch))
                } else {
                    Ok(id)
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        trace!("draw {text:?} at {origin} with {paint:?}");

        let scaled = self.font.as_scaled(self.scale);
        let baseline = cast::f32(origin.y);
        let mut caret = cast::f32(origin.x);
        let mut prev = None;
        for id in glyph_ids {
            if let Some(prev) = prev {
                caret += scaled.kern(prev, id);
            }
            let glyph = id.with_scale_and_position(self.scale, point(caret, baseline));
            caret += scaled.h_advance(id);
            prev = Some(id);

            // Whitespace has no outline.
            let Some(outlined) = self.font.outline_glyph(glyph) else {
                continue;
            };
            let bounds = outlined.px_bounds();
            let (Ok(left), Ok(top)) = (cast::i64(bounds.min.x), cast::i64(bounds.min.y)) else {
                continue;
            };
            outlined.draw(|x, y, coverage| {
                blend(
                    canvas,
                    left + i64::from(x),
                    top + i64::from(y),
                    paint,
                    coverage,
                );
            });
        }
        Ok(())
    }
}

/// Blend `paint` over the pixel at `(x, y)`: `dst = paint * a + dst * (1 - a)`,
/// with `a` the coverage weighted by the paint alpha.
pub(crate) fn blend(canvas: &mut RgbaImage, x: i64, y: i64, paint: Rgba<u8>, coverage: f32) {
    let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
        return;
    };
    if x >= canvas.width() || y >= canvas.height() {
        return;
    }
    let alpha = coverage.clamp(0., 1.) * f32::from(paint[3]) / 255.;
    if alpha <= 0. {
        return;
    }

    let dst = canvas.get_pixel_mut(x, y);
    for c in 0..3 {
        dst[c] = to_channel(f32::from(paint[c]) * alpha + f32::from(dst[c]) * (1. - alpha));
    }
    dst[3] = to_channel(255. * alpha + f32::from(dst[3]) * (1. - alpha));
}

fn to_channel(value: f32) -> u8 {
    cast::u8(value.round().clamp(0., 255.)).unwrap_or(u8::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{font_face, init_logger};

    fn inked(canvas: &RgbaImage) -> usize {
        canvas.pixels().filter(|px| px[0] != 0).count()
    }

    #[test]
    fn draw_single_line() {
        init_logger();
        let face = font_face(48.);
        let mut canvas = RgbaImage::new(200, 80);
        face.draw_line("Hi", Point::new(10, face.ascent_px()), Rgba([255; 4]), &mut canvas)
            .unwrap();
        assert!(inked(&canvas) > 0);
        // Nothing above the top of the glyphs.
        assert!(canvas.rows().next().unwrap().all(|px| px[0] == 0));
    }

    #[test]
    fn draw_is_clipped() {
        let face = font_face(48.);
        let mut canvas = RgbaImage::new(20, 20);
        face.draw_line("WWWWWW", Point::new(-30, 10), Rgba([255; 4]), &mut canvas)
            .unwrap();
        assert_eq!(canvas.dimensions(), (20, 20));
    }

    #[test]
    fn reject_line_break() {
        let face = font_face(24.);
        let mut canvas = RgbaImage::new(100, 100);
        let err = face
            .draw_line("Top\nBottom", Point::new(0, 24), Rgba([255; 4]), &mut canvas)
            .unwrap_err();
        assert!(matches!(err, RenderError::LineBreak(3)));
        assert_eq!(inked(&canvas), 0);
    }

    #[test]
    fn reject_missing_glyph() {
        let face = font_face(24.);
        let mut canvas = RgbaImage::new(100, 100);
        let err = face
            .draw_line("A\u{10FFFD}", Point::new(0, 24), Rgba([255; 4]), &mut canvas)
            .unwrap_err();
        assert!(matches!(err, RenderError::MissingGlyph('\u{10FFFD}')));
        assert_eq!(inked(&canvas), 0);
    }

    #[test]
    fn blend_opaque_and_partial() {
        let mut canvas = RgbaImage::from_pixel(2, 1, Rgba([100, 100, 100, 255]));
        blend(&mut canvas, 0, 0, Rgba([0, 0, 0, 255]), 1.);
        blend(&mut canvas, 1, 0, Rgba([200, 0, 0, 255]), 0.5);
        blend(&mut canvas, -1, 0, Rgba([0, 0, 0, 255]), 1.);
        assert_eq!(canvas.get_pixel(0, 0), &Rgba([0, 0, 0, 255]));
        assert_eq!(canvas.get_pixel(1, 0), &Rgba([150, 50, 50, 255]));
    }
}
