use log::trace;

use super::LayoutError;
use crate::content::{Area, Point, Size};

/// Ratio of the point size used as space between two lines.
pub const DEFAULT_LINE_SPACING: f32 = 0.5;

/// Pixel space between two lines for a font size and a spacing ratio.
/// The value is truncated toward zero.
///
/// # Errors
/// Will return `InvalidSpacing` if the result is negative, not finite, or too large.
pub fn spacing_px(point_size: f32, ratio: f32) -> Result<i32, LayoutError> {
    let spacing = ratio * point_size;
    match cast::i32(spacing.trunc()) {
        Ok(px) if px >= 0 => Ok(px),
        _ => Err(LayoutError::InvalidSpacing(spacing)),
    }
}

/// Compute the drawing origin of each line, with the default line spacing.
///
/// See [`layout_with_spacing`].
///
/// # Errors
/// Same as [`layout_with_spacing`], or `InvalidSpacing` if the point size is unusable.
pub fn layout(frame: Size, boxes: &[Area], point_size: f32) -> Result<Vec<Point>, LayoutError> {
    let spacing = spacing_px(point_size, DEFAULT_LINE_SPACING)?;
    layout_with_spacing(frame, boxes, spacing)
}

/// Compute the drawing origin of each line so that the text block is centered in `frame`.
///
/// Each line is centered horizontally on its own. Vertically the lines are
/// stacked, separated by `spacing` pixels, and the whole block is centered.
/// The origin `y` is the baseline, at the bottom of the line box.
/// Origins are returned in the order of `boxes`.
///
/// # Errors
/// Will return `Content` if the frame is too large for `i32` coordinates,
/// `TooManyLines` if the line count doesn't fit in an `i32`, and `BlockTooHigh`
/// if the lines and their spacing don't fit in `i32` coordinates.
#[profiling::function]
pub fn layout_with_spacing(
    frame: Size,
    boxes: &[Area],
    spacing: i32,
) -> Result<Vec<Point>, LayoutError> {
    let center = frame.center()?;
    let count = cast::i32(boxes.len()).map_err(|_| LayoutError::TooManyLines(boxes.len()))?;

    let total_height = block_height(boxes, spacing, count)?;
    let top = center.y - total_height / 2;
    trace!("block of {count} lines, {total_height}px high, top at {top}");

    let mut line_top = top;
    boxes
        .iter()
        .map(|area| {
            let baseline = line_top
                .checked_add(area.height())
                .ok_or(LayoutError::BlockTooHigh { count, spacing })?;
            // Past the last line the next top may not fit, it is never used.
            line_top = baseline.saturating_add(spacing);
            Ok(Point::new(center.x - area.width() / 2, baseline))
        })
        .collect()
}

/// Sum of the line heights plus the space between consecutive lines.
///
/// # Errors
/// Will return `BlockTooHigh` if the height doesn't fit in an `i32`.
pub(super) fn block_height(boxes: &[Area], spacing: i32, count: i32) -> Result<i32, LayoutError> {
    let too_high = || LayoutError::BlockTooHigh { count, spacing };
    let gaps = spacing.checked_mul((count - 1).max(0)).ok_or_else(too_high)?;
    boxes
        .iter()
        .try_fold(gaps, |height, area| height.checked_add(area.height()))
        .ok_or_else(too_high)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_box(width: i32, height: i32) -> Area {
        Area::try_from((Point::new(3, 7), Point::new(3 + width, 7 + height))).unwrap()
    }

    #[test]
    fn spacing_truncates() {
        assert_eq!(spacing_px(40., 0.5).unwrap(), 20);
        assert_eq!(spacing_px(45., 0.5).unwrap(), 22);
        assert_eq!(spacing_px(128., 0.5).unwrap(), 64);
        assert!(matches!(
            spacing_px(f32::NAN, 0.5),
            Err(LayoutError::InvalidSpacing(_))
        ));
        assert!(matches!(
            spacing_px(10., -1.),
            Err(LayoutError::InvalidSpacing(_))
        ));
    }

    #[test]
    fn single_line_is_centered() {
        let frame = Size::new(400, 300);
        let area = line_box(120, 52);
        let origins = layout(frame, &[area], 72.).unwrap();
        assert_eq!(origins.len(), 1);
        let origin = origins[0];
        assert!((origin.x + area.width() / 2 - 200).abs() <= 1);
        // No spacing for a single line: top = 150 - 26, baseline = top + 52.
        assert_eq!(origin, Point::new(140, 176));
    }

    #[test]
    fn odd_width_rounding() {
        let origins = layout(Size::new(101, 51), &[line_box(11, 5)], 10.).unwrap();
        let origin = origins[0];
        assert!((origin.x + 11 / 2 - 101 / 2).abs() <= 1);
        assert_eq!(origin, Point::new(45, 28));
    }

    #[test]
    fn lines_are_stacked_and_centered() {
        let frame = Size::new(800, 600);
        let height = 30;
        let spacing = spacing_px(40., DEFAULT_LINE_SPACING).unwrap();
        let boxes = [line_box(200, height), line_box(90, height), line_box(310, height)];
        let origins = layout(frame, &boxes, 40.).unwrap();
        assert_eq!(origins.len(), 3);

        // Each line is centered on its own.
        for (origin, area) in origins.iter().zip(&boxes) {
            assert!((origin.x + area.width() / 2 - 400).abs() <= 1);
        }

        // Baselines are one line plus spacing apart.
        for pair in origins.windows(2) {
            assert_eq!(pair[1].y - pair[0].y, height + spacing);
        }

        // Block span and vertical centering.
        let first_top = origins[0].y - height;
        let last_bottom = origins[2].y;
        let span = last_bottom - first_top;
        assert_eq!(span, 3 * height + 2 * spacing);
        assert!((first_top + span / 2 - 300).abs() <= 1);
    }

    #[test]
    fn uses_each_line_height() {
        let frame = Size::new(200, 200);
        let boxes = [line_box(50, 10), line_box(50, 40)];
        let origins = layout_with_spacing(frame, &boxes, 4).unwrap();
        // total = 10 + 40 + 4 = 54, top = 100 - 27 = 73
        assert_eq!(origins[0].y, 73 + 10);
        assert_eq!(origins[1].y, 73 + 10 + 4 + 40);
    }

    #[test]
    fn no_line() {
        let origins = layout(Size::new(10, 10), &[], 12.).unwrap();
        assert!(origins.is_empty());
    }

    #[test]
    fn overflowing_text_goes_negative() {
        let origins = layout_with_spacing(Size::new(100, 20), &[line_box(300, 60)], 0).unwrap();
        assert_eq!(origins[0], Point::new(-100, 40));
    }

    #[test]
    fn block_height_overflow() {
        let boxes = [Area::pixel(0, 0); 3];
        let err = layout_with_spacing(Size::new(10, 10), &boxes, i32::MAX / 2 + 1).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::BlockTooHigh { count: 3, .. }
        ));
        assert!(layout_with_spacing(Size::new(10, 10), &boxes, i32::MAX / 4).is_ok());
    }
}
