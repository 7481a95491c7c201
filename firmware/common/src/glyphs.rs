//! Status icons drawn with primitives.
//!
//! The panel fonts are plain ASCII, so icons are built from lines, rectangles
//! and circles inside an 8x8 cell anchored at its top-left corner.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle};

/// Edge length of a glyph cell in pixels.
pub const GLYPH_SIZE: u32 = 8;

const STROKE: PrimitiveStyle<BinaryColor> = PrimitiveStyle::with_stroke(BinaryColor::On, 1);
const FILL: PrimitiveStyle<BinaryColor> = PrimitiveStyle::with_fill(BinaryColor::On);

// =============================================================================
// Signal Strength
// =============================================================================

/// Wi-Fi signal bands shown in the status row.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SignalIcon {
    Full,
    Medium,
    Weak,
}

impl SignalIcon {
    /// Icon for an RSSI reading in dBm.
    ///
    /// 0 means "no reading" and shows as weak, like anything below -85 dBm.
    /// Otherwise the strongest band is checked first: above -70 is full, above
    /// -80 is medium, and everything else falls through to weak.
    pub const fn from_rssi(rssi_dbm: i16) -> Self {
        if rssi_dbm == 0 || rssi_dbm < -85 {
            return Self::Weak;
        }
        if rssi_dbm > -70 {
            return Self::Full;
        }
        if rssi_dbm > -80 {
            return Self::Medium;
        }
        Self::Weak
    }

    pub const fn glyph(self) -> Glyph {
        match self {
            Self::Full => Glyph::SignalFull,
            Self::Medium => Glyph::SignalMedium,
            Self::Weak => Glyph::SignalWeak,
        }
    }
}

// =============================================================================
// Glyphs
// =============================================================================

/// Every icon the screens can place.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Glyph {
    /// Three rising bars.
    SignalFull,
    /// Two rising bars.
    SignalMedium,
    /// One bar.
    SignalWeak,
    /// Tick mark.
    Check,
    /// Diagonal cross.
    Cross,
    /// Filled dot.
    Bullet,
}

impl Glyph {
    /// Draw the glyph with its cell's top-left corner at `origin`.
    pub fn draw<D>(
        self,
        display: &mut D,
        origin: Point,
    ) where
        D: DrawTarget<Color = BinaryColor>,
    {
        match self {
            Self::SignalFull => draw_bars(display, origin, 3),
            Self::SignalMedium => draw_bars(display, origin, 2),
            Self::SignalWeak => draw_bars(display, origin, 1),
            Self::Check => {
                Line::new(origin + Point::new(0, 4), origin + Point::new(3, 7))
                    .into_styled(STROKE)
                    .draw(display)
                    .ok();
                Line::new(origin + Point::new(3, 7), origin + Point::new(7, 0))
                    .into_styled(STROKE)
                    .draw(display)
                    .ok();
            }
            Self::Cross => {
                Line::new(origin + Point::new(1, 1), origin + Point::new(6, 6))
                    .into_styled(STROKE)
                    .draw(display)
                    .ok();
                Line::new(origin + Point::new(6, 1), origin + Point::new(1, 6))
                    .into_styled(STROKE)
                    .draw(display)
                    .ok();
            }
            Self::Bullet => {
                Circle::new(origin + Point::new(2, 2), 4)
                    .into_styled(FILL)
                    .draw(display)
                    .ok();
            }
        }
    }
}

/// Bars are 2px wide with 1px gaps, heights 3/5/8 from left to right.
fn draw_bars<D>(
    display: &mut D,
    origin: Point,
    count: usize,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    const HEIGHTS: [u32; 3] = [3, 5, 8];
    for (i, height) in HEIGHTS.iter().take(count).enumerate() {
        let x = origin.x + (i as i32 * 3);
        let y = origin.y + (GLYPH_SIZE - height) as i32;
        Rectangle::new(Point::new(x, y), Size::new(2, *height))
            .into_styled(FILL)
            .draw(display)
            .ok();
    }
}

// =============================================================================
// Cloud Link
// =============================================================================

/// Boolean-to-glyph mapping for the cloud link indicator.
///
/// Offline is a cross by default; some builds prefer a bullet.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CloudGlyphs {
    pub online: Glyph,
    pub offline: Glyph,
}

impl CloudGlyphs {
    pub const fn new() -> Self {
        Self {
            online: Glyph::Check,
            offline: Glyph::Cross,
        }
    }

    #[inline]
    pub const fn for_link(
        &self,
        connected: bool,
    ) -> Glyph {
        if connected { self.online } else { self.offline }
    }
}

impl Default for CloudGlyphs {
    fn default() -> Self { Self::new() }
}
