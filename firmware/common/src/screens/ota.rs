//! Firmware update progress: status line, percent and a progress bar.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::config::{
    BODY_BUDGET,
    PROGRESS_INNER_WIDTH,
    PROGRESS_INSET,
    PROGRESS_TRACK_HEIGHT,
    PROGRESS_TRACK_Y,
    SCREEN_WIDTH,
};
use crate::frame::Frame;
use crate::styles::FontSize;
use crate::text::line;

const HEADER_POS: Point = Point::new(0, 0);
const STATUS_POS: Point = Point::new(0, 16);
const PERCENT_POS: Point = Point::new(0, 32);

/// Fill width for `percent` of the inner track.
///
/// Integer arithmetic, truncating. `percent` is 0..=100 by contract and is not
/// clamped here.
pub const fn fill_width(percent: u8) -> u32 { percent as u32 * PROGRESS_INNER_WIDTH / 100 }

pub fn ota_frame(
    status: &str,
    percent: u8,
) -> Frame {
    debug_assert!(percent <= 100, "OTA percent out of range");

    let mut frame = Frame::new();
    frame.text(HEADER_POS, FontSize::Small, "-- UPDATING --", BODY_BUDGET);
    frame.text(STATUS_POS, FontSize::Small, status, BODY_BUDGET);
    frame.text(PERCENT_POS, FontSize::Small, &line(format_args!("{percent}%")), BODY_BUDGET);

    frame.rect(Rectangle::new(
        Point::new(0, PROGRESS_TRACK_Y),
        Size::new(SCREEN_WIDTH, PROGRESS_TRACK_HEIGHT),
    ));
    frame.fill_rect(Rectangle::new(
        Point::new(PROGRESS_INSET as i32, PROGRESS_TRACK_Y + PROGRESS_INSET as i32),
        Size::new(fill_width(percent), PROGRESS_TRACK_HEIGHT - 2 * PROGRESS_INSET),
    ));
    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::DrawOp;

    #[test]
    fn test_fill_width_bounds() {
        assert_eq!(fill_width(0), 0);
        assert_eq!(fill_width(100), PROGRESS_INNER_WIDTH);
    }

    #[test]
    fn test_fill_width_half() {
        assert_eq!(fill_width(50), 62, "50 * 124 / 100");
    }

    #[test]
    fn test_fill_width_monotonic() {
        for p in 0..100u8 {
            assert!(fill_width(p) <= fill_width(p + 1), "fill shrank at {p}%");
        }
    }

    #[test]
    fn test_ota_frame_layout() {
        let frame = ota_frame("Downloading", 50);
        assert!(frame.contains_text("-- UPDATING --"));
        assert!(frame.contains_text("Downloading"));
        assert!(frame.contains_text("50%"));

        let fill = frame.ops().iter().find_map(|op| match op {
            DrawOp::FillRect { area } => Some(*area),
            _ => None,
        });
        assert_eq!(fill, Some(Rectangle::new(Point::new(2, 50), Size::new(62, 6))));
        assert!(matches!(frame.ops()[3], DrawOp::Rect { .. }), "track outline drawn before fill");
    }

    #[test]
    fn test_ota_zero_percent_has_no_fill() {
        let frame = ota_frame("Starting", 0);
        assert!(!frame.ops().iter().any(|op| matches!(op, DrawOp::FillRect { .. })));
    }
}
