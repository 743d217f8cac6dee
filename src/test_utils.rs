//! Shared helpers for unit tests.

use image::{Rgba, RgbaImage};

use crate::{
    content::Point,
    font::{blend, FontFace, Rasterizer, RenderError},
};

pub const FONT_PATH: &str = "./fixtures/DejaVuSans.ttf";
pub const CATALOG_PATH: &str = "./fixtures/texts.json";

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn font_face(point_size: f32) -> FontFace {
    FontFace::open(FONT_PATH, point_size).unwrap()
}

/// Deterministic rasterizer drawing each visible character as a solid block.
///
/// Every character advances by `advance` pixels. Its ink covers `advance - 2`
/// pixels horizontally, from `ascent` above the baseline down to the baseline,
/// or `descent` below it for `g`, `j`, `p`, `q` and `y`.
pub struct BlockRasterizer {
    pub point_size: f32,
    pub advance: i32,
    pub ascent: i32,
    pub descent: i32,
}

impl BlockRasterizer {
    pub const fn new(point_size: f32) -> Self {
        Self {
            point_size,
            advance: 10,
            ascent: 20,
            descent: 6,
        }
    }
}

impl Rasterizer for BlockRasterizer {
    fn point_size(&self) -> f32 {
        self.point_size
    }

    fn ascent_px(&self) -> i32 {
        self.ascent
    }

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
        let mut x = origin.x;
        for ch in text.chars() {
            if !ch.is_whitespace() {
                let bottom = if "gjpqy".contains(ch) {
                    origin.y + self.descent
                } else {
                    origin.y
                };
                for py in origin.y - self.ascent..bottom {
                    for px in x + 1..x + self.advance - 1 {
                        blend(canvas, px.into(), py.into(), paint, 1.);
                    }
                }
            }
            x += self.advance;
        }
        Ok(())
    }
}
