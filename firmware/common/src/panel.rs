//! Display sink abstraction.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

/// A monochrome frame buffer that can be brought up once and flipped.
///
/// Drawing goes through [`DrawTarget`]; nothing reaches the glass until
/// [`commit`](Panel::commit).
pub trait Panel: DrawTarget<Color = BinaryColor> {
    /// Bring up the hardware. Called exactly once.
    fn init(&mut self) -> Result<(), Self::Error>;

    /// Push the frame buffer to the display.
    fn commit(&mut self) -> Result<(), Self::Error>;
}

/// Whether a working display was found at startup.
///
/// Decided once from [`Panel::init`] and never revisited. `Absent` is the
/// normal headless mode, not an error.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayCapability {
    Present,
    Absent,
}

impl DisplayCapability {
    /// Probe `panel` and record the outcome.
    pub fn probe<P: Panel>(panel: &mut P) -> Self {
        match panel.init() {
            Ok(()) => Self::Present,
            Err(_) => Self::Absent,
        }
    }

    #[inline]
    pub const fn is_present(self) -> bool { matches!(self, Self::Present) }
}
