//! Payment-due notice.
//!
//! Exactly two branches once the grace count is known: days remaining shows a
//! warning with the count, zero days shows the suspended-service message.

use embedded_graphics::prelude::*;

use crate::config::{BODY_BUDGET, DisplayConfig};
use crate::frame::Frame;
use crate::screens::consumption::PLACEHOLDER;
use crate::styles::FontSize;
use crate::telemetry::TelemetrySnapshot;
use crate::text::line;

const HEADER_POS: Point = Point::new(0, 0);

const WARNING_LINES: [Point; 4] = [Point::new(0, 16), Point::new(0, 26), Point::new(0, 40), Point::new(0, 50)];

const SUSPENDED_POS: Point = Point::new(0, 20);
const CONTACT_LABEL_POS: Point = Point::new(0, 36);
const CONTACT_POS: Point = Point::new(0, 46);

pub fn payment_due_frame(
    telemetry: Option<&TelemetrySnapshot>,
    config: &DisplayConfig,
) -> Frame {
    let mut frame = Frame::new();
    frame.text(HEADER_POS, FontSize::Small, "-- PAYMENT DUE --", BODY_BUDGET);

    let Some(t) = telemetry else {
        frame.text(SUSPENDED_POS, FontSize::Small, PLACEHOLDER, BODY_BUDGET);
        return frame;
    };

    if t.grace_period_days_remaining > 0 {
        let days = line(format_args!("{} day(s).", t.grace_period_days_remaining));
        let lines = ["Service expires in", days.as_str(), "Pay now to keep", "your data."];
        for (pos, text) in WARNING_LINES.iter().zip(lines) {
            frame.text(*pos, FontSize::Small, text, BODY_BUDGET);
        }
    } else {
        frame.text(SUSPENDED_POS, FontSize::Small, "Service suspended.", BODY_BUDGET);
        frame.text(CONTACT_LABEL_POS, FontSize::Small, "Contact", BODY_BUDGET);
        frame.text(CONTACT_POS, FontSize::Small, config.support_contact, BODY_BUDGET);
    }
    frame
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grace(days: u16) -> TelemetrySnapshot {
        let mut t = TelemetrySnapshot::new();
        t.set_account(false, true, days);
        t
    }

    #[test]
    fn test_warning_branch_shows_count() {
        let frame = payment_due_frame(Some(&grace(3)), &DisplayConfig::default());
        assert!(frame.contains_text("3 day(s)."));
        assert!(frame.contains_text("Service expires in"));
        assert!(!frame.contains_text("suspended"));
    }

    #[test]
    fn test_suspended_branch() {
        let frame = payment_due_frame(Some(&grace(0)), &DisplayConfig::default());
        assert!(frame.contains_text("Service suspended."));
        assert!(frame.contains_text("Luz en tu Espacio"));
        assert!(!frame.contains_text("expires"));
    }

    #[test]
    fn test_every_count_hits_one_branch() {
        for days in [0u16, 1, 2, 30, u16::MAX] {
            let frame = payment_due_frame(Some(&grace(days)), &DisplayConfig::default());
            let warning = frame.contains_text("Service expires in");
            let suspended = frame.contains_text("Service suspended.");
            assert!(warning != suspended, "exactly one branch for {days} days");
            assert_eq!(suspended, days == 0);
        }
    }

    #[test]
    fn test_without_telemetry_shows_placeholder() {
        let frame = payment_due_frame(None, &DisplayConfig::default());
        let texts: std::vec::Vec<&str> = frame.texts().collect();
        assert_eq!(texts, ["-- PAYMENT DUE --", "--"]);
    }
}
