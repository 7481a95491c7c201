//! Pre-computed text styles for the monochrome panel.
//!
//! All text is placed by its top-left corner (`Baseline::Top`), the same way a
//! cursor-based display library positions text, so layout constants read as
//! "row starts at y".
//!
//! The small and large fonts carry the ISO 8859-1 glyph set, so Spanish
//! labels (`ñ`, `á`, `¿`) render as themselves rather than `?`.

use embedded_graphics::mono_font::iso_8859_1::{FONT_6X10, FONT_10X20};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};
use profont::PROFONT_24_POINT;

/// Top-left anchored, left-aligned text.
pub const TOP_LEFT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

/// Font scale of a text field.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontSize {
    /// 6x10, 21 columns. Body text and labels.
    Small,
    /// 10x20, 12 columns. Titles and two-line messages.
    Large,
    /// `ProFont` 24pt. Power readout only.
    Huge,
}

const SMALL_STYLE: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
const LARGE_STYLE: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(&FONT_10X20, BinaryColor::On);
const HUGE_STYLE: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(&PROFONT_24_POINT, BinaryColor::On);

impl FontSize {
    pub fn font(self) -> &'static MonoFont<'static> {
        match self {
            Self::Small => &FONT_6X10,
            Self::Large => &FONT_10X20,
            Self::Huge => &PROFONT_24_POINT,
        }
    }

    pub fn style(self) -> MonoTextStyle<'static, BinaryColor> {
        match self {
            Self::Small => SMALL_STYLE,
            Self::Large => LARGE_STYLE,
            Self::Huge => HUGE_STYLE,
        }
    }

    /// Horizontal advance per character in pixels.
    pub fn advance(self) -> u32 {
        let font = self.font();
        font.character_size.width + font.character_spacing
    }

    /// Rendered width of `chars` characters in pixels.
    pub fn text_width(
        self,
        chars: usize,
    ) -> u32 {
        if chars == 0 {
            return 0;
        }
        let font = self.font();
        chars as u32 * font.character_size.width + (chars as u32 - 1) * font.character_spacing
    }

    /// Number of whole characters that fit between `x` and the right edge.
    pub fn columns_from(
        self,
        x: i32,
        screen_width: u32,
    ) -> usize {
        if x < 0 || x as u32 >= screen_width {
            return 0;
        }
        let space = screen_width - x as u32;
        let advance = self.advance();
        // the last character needs no trailing spacing
        ((space + self.font().character_spacing) / advance) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_font_fits_21_columns() {
        assert_eq!(FontSize::Small.columns_from(0, 128), 21);
    }

    #[test]
    fn test_large_font_fits_title_budget() {
        assert!(FontSize::Large.columns_from(0, 128) >= crate::config::TITLE_BUDGET);
    }

    #[test]
    fn test_columns_offscreen() {
        assert_eq!(FontSize::Small.columns_from(128, 128), 0);
        assert_eq!(FontSize::Small.columns_from(-1, 128), 0);
    }

    #[test]
    fn test_accented_glyphs_present() {
        use embedded_graphics::mono_font::mapping::GlyphMapping;

        for size in [FontSize::Small, FontSize::Large] {
            let mapping = size.font().glyph_mapping;
            let fallback = mapping.index('?');
            for c in ['ñ', 'á', 'é', 'í', 'ó', 'ú', 'Ñ', '¿'] {
                assert_ne!(mapping.index(c), fallback, "{size:?} has no glyph for {c:?}");
            }
        }
    }

    #[test]
    fn test_text_width() {
        assert_eq!(FontSize::Small.text_width(0), 0);
        assert_eq!(FontSize::Small.text_width(3), 18);
        assert_eq!(FontSize::Large.text_width(10), 100);
    }
}
