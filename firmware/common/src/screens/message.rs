//! Generic two-line message (errors, portal prompts, one-off notices).

use embedded_graphics::prelude::*;

use crate::config::{BODY_BUDGET, TITLE_BUDGET};
use crate::frame::Frame;
use crate::styles::FontSize;

const HEADLINE_POS: Point = Point::new(0, 10);
const DETAIL_POS: Point = Point::new(0, 40);

/// Large headline over a small detail line, each cut to its own budget.
pub fn message_frame(
    headline: &str,
    detail: &str,
) -> Frame {
    let mut frame = Frame::new();
    frame.text(HEADLINE_POS, FontSize::Large, headline, TITLE_BUDGET);
    frame.text(DETAIL_POS, FontSize::Small, detail, BODY_BUDGET);
    frame
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_cut_independently() {
        let frame = message_frame("Connection lost", "Retrying in 30 seconds, please wait");
        let texts: std::vec::Vec<&str> = frame.texts().collect();
        assert_eq!(texts, ["Connection", "Retrying in 30 second"]);
    }

    #[test]
    fn test_short_lines_unchanged() {
        let frame = message_frame("Error", "Sensor fault");
        let texts: std::vec::Vec<&str> = frame.texts().collect();
        assert_eq!(texts, ["Error", "Sensor fault"]);
    }

    #[test]
    fn test_accented_body_keeps_first_characters() {
        let frame = message_frame("Aviso", "Año: señal débil, sí, está ahí");
        let texts: std::vec::Vec<&str> = frame.texts().collect();
        assert_eq!(texts, ["Aviso", "Año: señal débil, sí,"]);
    }
}
