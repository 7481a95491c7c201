//! Live consumption screen, the one the customer looks at.
//!
//! ```text
//! V:230.1        A:4.35
//!
//!       1500 W
//!
//! ▂▄█ Cloud:✓     PF:0.98
//! ```
//!
//! Without any telemetry yet every value shows as `--`, the signal icon is
//! weak and the cloud glyph shows offline.

use embedded_graphics::prelude::*;

use crate::config::{BODY_BUDGET, DisplayConfig, POWER_BUDGET, SCREEN_WIDTH, VOLTAGE_BUDGET};
use crate::frame::Frame;
use crate::glyphs::SignalIcon;
use crate::styles::FontSize;
use crate::telemetry::TelemetrySnapshot;
use crate::text::line;

const VOLTAGE_POS: Point = Point::new(0, 0);
// VOLTAGE_BUDGET small columns end before this
const CURRENT_POS: Point = Point::new(70, 0);
const POWER_Y: i32 = 12;
const UNIT_Y: i32 = 28;
const UNIT_GAP: i32 = 5;
const STATUS_Y: i32 = 54;
const SIGNAL_POS: Point = Point::new(0, STATUS_Y + 1);
const CLOUD_LABEL_POS: Point = Point::new(14, STATUS_Y);
const PF_POS: Point = Point::new(86, STATUS_Y);

/// Placeholder for a value that has never been read.
pub const PLACEHOLDER: &str = "--";

/// Compose the consumption screen.
pub fn consumption_frame(
    telemetry: Option<&TelemetrySnapshot>,
    config: &DisplayConfig,
) -> Frame {
    let mut frame = Frame::new();

    // Secondary readings
    let (voltage, current, power, pf) = match telemetry {
        Some(t) => (
            line(format_args!("V:{:.1}", t.voltage_rms)),
            line(format_args!("A:{:.2}", t.current_rms)),
            line(format_args!("{:.0}", t.active_power)),
            line(format_args!("PF:{:.2}", t.power_factor())),
        ),
        None => (
            line(format_args!("V:{PLACEHOLDER}")),
            line(format_args!("A:{PLACEHOLDER}")),
            line(format_args!("{PLACEHOLDER}")),
            line(format_args!("PF:{PLACEHOLDER}")),
        ),
    };
    frame.text(VOLTAGE_POS, FontSize::Small, &voltage, VOLTAGE_BUDGET);
    frame.text(CURRENT_POS, FontSize::Small, &current, BODY_BUDGET);

    // Power, large and centered
    let power_x = centered_x(FontSize::Huge, power.chars().count().min(POWER_BUDGET));
    let power_end = frame.text(Point::new(power_x, POWER_Y), FontSize::Huge, &power, POWER_BUDGET);
    frame.text(Point::new(power_end + UNIT_GAP, UNIT_Y), FontSize::Small, "W", 1);

    // Status row
    let rssi = telemetry.map_or(0, |t| t.signal_strength_dbm);
    let cloud = telemetry.is_some_and(|t| t.cloud_connected);
    frame.glyph(SIGNAL_POS, SignalIcon::from_rssi(rssi).glyph());
    let cloud_end = frame.text(CLOUD_LABEL_POS, FontSize::Small, "Cloud:", BODY_BUDGET);
    frame.glyph(Point::new(cloud_end + 1, STATUS_Y + 1), config.cloud_glyphs.for_link(cloud));
    frame.text(PF_POS, FontSize::Small, &pf, BODY_BUDGET);

    frame
}

/// Left edge that centers `chars` characters of `font` on the screen.
pub fn centered_x(
    font: FontSize,
    chars: usize,
) -> i32 {
    let width = font.text_width(chars);
    (SCREEN_WIDTH.saturating_sub(width) / 2) as i32
}
