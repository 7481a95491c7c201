//! Boot screen: product name and a one-line status.

use embedded_graphics::prelude::*;

use crate::config::{BODY_BUDGET, DisplayConfig, TITLE_BUDGET};
use crate::frame::Frame;
use crate::styles::FontSize;

const TITLE_POS: Point = Point::new(5, 15);
const STATUS_POS: Point = Point::new(0, 50);

pub fn boot_frame(
    status: &str,
    config: &DisplayConfig,
) -> Frame {
    let mut frame = Frame::new();
    frame.text(TITLE_POS, FontSize::Large, config.title, TITLE_BUDGET);
    frame.text(STATUS_POS, FontSize::Small, status, BODY_BUDGET);
    frame
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boot_title_and_status() {
        let frame = boot_frame("Joining Wi-Fi...", &DisplayConfig::default());
        let texts: std::vec::Vec<&str> = frame.texts().collect();
        assert_eq!(texts, ["Cuentatron", "Joining Wi-Fi..."]);
    }

    #[test]
    fn test_boot_status_cut_to_body_budget() {
        let frame = boot_frame("Waiting for NTP time sync from pool", &DisplayConfig::default());
        assert_eq!(frame.texts().nth(1), Some("Waiting for NTP time "));
    }
}
