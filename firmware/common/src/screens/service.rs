//! Account and firmware information.
//!
//! Normally shows the plan state and the next payment date. While a payment is
//! overdue and grace days remain, the plan lines give way to a large
//! "EXPIRES IN / n DAY(S)" countdown. The firmware version is stamped at the
//! bottom either way.

use embedded_graphics::prelude::*;

use crate::config::{BODY_BUDGET, DisplayConfig, TITLE_BUDGET};
use crate::frame::Frame;
use crate::screens::consumption::PLACEHOLDER;
use crate::styles::FontSize;
use crate::telemetry::TelemetrySnapshot;
use crate::text::{labelled, line};

const HEADER_POS: Point = Point::new(0, 0);
const COUNTDOWN_POS: Point = Point::new(0, 14);
const COUNTDOWN_DAYS_POS: Point = Point::new(0, 34);
const PLAN_POS: Point = Point::new(0, 14);
const NEXT_LABEL_POS: Point = Point::new(0, 26);
const NEXT_VALUE_POS: Point = Point::new(0, 36);
const FIRMWARE_POS: Point = Point::new(0, 54);

pub fn service_frame(
    telemetry: Option<&TelemetrySnapshot>,
    config: &DisplayConfig,
) -> Frame {
    let mut frame = Frame::new();
    frame.text(HEADER_POS, FontSize::Small, "-- MY SERVICE --", BODY_BUDGET);

    match telemetry {
        Some(t) if t.payment_overdue && t.grace_period_days_remaining > 0 => {
            frame.text(COUNTDOWN_POS, FontSize::Large, "EXPIRES IN", TITLE_BUDGET);
            frame.text(
                COUNTDOWN_DAYS_POS,
                FontSize::Large,
                &line(format_args!("{} DAY(S)", t.grace_period_days_remaining)),
                TITLE_BUDGET,
            );
        }
        Some(t) => {
            let plan = if t.subscription_active { "Active" } else { "Inactive" };
            frame.text(PLAN_POS, FontSize::Small, &labelled("Plan: ", plan, BODY_BUDGET), BODY_BUDGET);
            frame.text(NEXT_LABEL_POS, FontSize::Small, "Next payment:", BODY_BUDGET);
            let label = if t.next_payment_label.is_empty() {
                PLACEHOLDER
            } else {
                t.next_payment_label.as_str()
            };
            frame.text(NEXT_VALUE_POS, FontSize::Small, label, BODY_BUDGET);
        }
        None => {
            frame.text(PLAN_POS, FontSize::Small, &labelled("Plan: ", PLACEHOLDER, BODY_BUDGET), BODY_BUDGET);
            frame.text(NEXT_LABEL_POS, FontSize::Small, "Next payment:", BODY_BUDGET);
            frame.text(NEXT_VALUE_POS, FontSize::Small, PLACEHOLDER, BODY_BUDGET);
        }
    }

    frame.text(
        FIRMWARE_POS,
        FontSize::Small,
        &line(format_args!("Firmware: v{}", config.firmware_version)),
        BODY_BUDGET,
    );
    frame
}
