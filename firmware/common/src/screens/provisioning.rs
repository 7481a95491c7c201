//! Setup-mode screen shown while the configuration access point is up.

use embedded_graphics::prelude::*;

use crate::config::{BODY_BUDGET, DisplayConfig, TITLE_BUDGET};
use crate::frame::Frame;
use crate::styles::FontSize;
use crate::text::labelled;

const HEADER_POS: Point = Point::new(0, 0);
const PROMPT_POS: Point = Point::new(0, 12);
const AP_NAME_POS: Point = Point::new(0, 25);
const PORTAL_POS: Point = Point::new(0, 50);

pub fn provisioning_frame(
    ap_name: &str,
    config: &DisplayConfig,
) -> Frame {
    let mut frame = Frame::new();
    frame.text(HEADER_POS, FontSize::Small, "-- SETUP MODE --", BODY_BUDGET);
    frame.text(PROMPT_POS, FontSize::Small, "Join network:", BODY_BUDGET);
    frame.text(AP_NAME_POS, FontSize::Large, ap_name, TITLE_BUDGET);
    frame.text(
        PORTAL_POS,
        FontSize::Small,
        &labelled("Open ", config.portal_address, BODY_BUDGET - 5),
        BODY_BUDGET,
    );
    frame
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provisioning_lines() {
        let frame = provisioning_frame("Cuentatron-Setup", &DisplayConfig::default());
        let texts: std::vec::Vec<&str> = frame.texts().collect();
        assert_eq!(texts, ["-- SETUP MODE --", "Join network:", "Cuentatron", "Open 192.168.4.1"]);
    }
}
