//! Frames: the ordered draw operations of one screen.
//!
//! Screens never touch the panel. They push [`DrawOp`]s into a [`Frame`], and
//! the dispatcher presents the finished frame in one go:
//!
//! 1. clear the whole buffer
//! 2. replay every op in push order
//! 3. commit once
//!
//! Text ops are cut to their field budget and to the columns left before the
//! right edge when they are pushed, so a frame can never hold text that would
//! spill into a neighbouring field.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use heapless::Vec;

use crate::config::{SCREEN_WIDTH, TEXT_CAPACITY};
use crate::glyphs::Glyph;
use crate::styles::{FontSize, TOP_LEFT};
use crate::text::{Line, push_fitting};

/// Maximum number of ops in one frame.
pub const MAX_OPS: usize = 16;

/// One draw primitive.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Text with its top-left corner at `at`.
    Text { at: Point, font: FontSize, text: Line },
    /// 1px outline.
    Rect { area: Rectangle },
    /// Solid fill.
    FillRect { area: Rectangle },
    /// Icon cell with its top-left corner at `at`.
    Glyph { at: Point, glyph: Glyph },
}

impl DrawOp {
    /// Replay this op onto a draw target.
    pub fn draw<D>(
        &self,
        display: &mut D,
    ) where
        D: DrawTarget<Color = BinaryColor>,
    {
        match self {
            Self::Text { at, font, text } => {
                Text::with_text_style(text, *at, font.style(), TOP_LEFT)
                    .draw(display)
                    .ok();
            }
            Self::Rect { area } => {
                area.into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
                    .draw(display)
                    .ok();
            }
            Self::FillRect { area } => {
                area.into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
                    .draw(display)
                    .ok();
            }
            Self::Glyph { at, glyph } => glyph.draw(display, *at),
        }
    }
}

/// The complete content of one screen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    ops: Vec<DrawOp, MAX_OPS>,
}

impl Frame {
    pub const fn new() -> Self { Self { ops: Vec::new() } }

    /// Push text, cut to `budget` characters and to the columns left on the row.
    ///
    /// Returns the x coordinate just past the drawn text.
    pub fn text(
        &mut self,
        at: Point,
        font: FontSize,
        text: &str,
        budget: usize,
    ) -> i32 {
        let fit = budget.min(TEXT_CAPACITY).min(font.columns_from(at.x, SCREEN_WIDTH));

        let mut line = Line::new();
        let drawn = push_fitting(&mut line, text, fit);
        let end = at.x + font.text_width(drawn) as i32;

        self.push(DrawOp::Text { at, font, text: line });
        end
    }

    /// Push a 1px rectangle outline.
    pub fn rect(
        &mut self,
        area: Rectangle,
    ) {
        self.push(DrawOp::Rect { area });
    }

    /// Push a filled rectangle. Zero-sized areas are skipped.
    pub fn fill_rect(
        &mut self,
        area: Rectangle,
    ) {
        if area.size.width == 0 || area.size.height == 0 {
            return;
        }
        self.push(DrawOp::FillRect { area });
    }

    pub fn glyph(
        &mut self,
        at: Point,
        glyph: Glyph,
    ) {
        self.push(DrawOp::Glyph { at, glyph });
    }

    fn push(
        &mut self,
        op: DrawOp,
    ) {
        // Screens stay well under MAX_OPS; tests pin every layout
        debug_assert!(!self.ops.is_full(), "frame overflow");
        self.ops.push(op).ok();
    }

    /// Ops in draw order.
    pub fn ops(&self) -> &[DrawOp] { &self.ops }

    /// Text of every text op, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Whether any text op contains `needle`.
    pub fn contains_text(
        &self,
        needle: &str,
    ) -> bool {
        self.texts().any(|t| t.contains(needle))
    }

    /// Clear `display` and replay every op. Does not commit.
    pub fn render<D>(
        &self,
        display: &mut D,
    ) where
        D: DrawTarget<Color = BinaryColor>,
    {
        display.clear(BinaryColor::Off).ok();
        for op in &self.ops {
            op.draw(display);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BODY_BUDGET, TITLE_BUDGET};

    #[test]
    fn test_text_cut_to_budget() {
        let mut frame = Frame::new();
        frame.text(Point::zero(), FontSize::Large, "Cuentatron Plus", TITLE_BUDGET);
        assert_eq!(frame.texts().next(), Some("Cuentatron"));
    }

    #[test]
    fn test_text_cut_to_right_edge() {
        let mut frame = Frame::new();
        // 38 px left at x=90 -> 6 small columns
        frame.text(Point::new(90, 0), FontSize::Small, "PF:0.98x", BODY_BUDGET);
        assert_eq!(frame.texts().next(), Some("PF:0.9"));
    }

    #[test]
    fn test_multibyte_text_cut_by_characters() {
        let mut frame = Frame::new();
        let end = frame.text(Point::zero(), FontSize::Small, "Año: señal débil, sí, está ahí", BODY_BUDGET);
        assert_eq!(frame.texts().next(), Some("Año: señal débil, sí,"));
        assert_eq!(end, FontSize::Small.text_width(BODY_BUDGET) as i32);
    }

    #[test]
    fn test_text_returns_end_x() {
        let mut frame = Frame::new();
        let end = frame.text(Point::new(4, 0), FontSize::Small, "abc", BODY_BUDGET);
        assert_eq!(end, 4 + 18);
    }

    #[test]
    fn test_zero_width_fill_skipped() {
        let mut frame = Frame::new();
        frame.fill_rect(Rectangle::new(Point::new(2, 50), Size::new(0, 6)));
        assert!(frame.ops().is_empty());
    }

    #[test]
    fn test_ops_keep_push_order() {
        let mut frame = Frame::new();
        frame.text(Point::zero(), FontSize::Small, "first", BODY_BUDGET);
        frame.glyph(Point::new(0, 20), Glyph::Check);
        frame.text(Point::new(0, 40), FontSize::Small, "second", BODY_BUDGET);

        let texts: std::vec::Vec<&str> = frame.texts().collect();
        assert_eq!(texts, ["first", "second"]);
        assert!(matches!(frame.ops()[1], DrawOp::Glyph { glyph: Glyph::Check, .. }));
    }
}
