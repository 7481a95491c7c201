//! Display layout, text budgets and runtime display configuration.
//!
//! # Pre-computed Layout Constants
//!
//! Everything the screens need to place text on the 128x64 panel is a `const`
//! here, so composing a frame never does layout arithmetic beyond centering the
//! power readout.

use embassy_time::Duration;

use crate::glyphs::CloudGlyphs;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (SSD1306 128x64 OLED).
pub const SCREEN_WIDTH: u32 = 128;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 64;

// =============================================================================
// Text Budgets
// =============================================================================
// A budget is the maximum number of characters a field may render without
// running into its neighbour. Strings above budget are cut to the first N
// characters, never wrapped or ellipsized.

/// Title fields in the large font (10x20 -> 12 columns, 10 reserved).
pub const TITLE_BUDGET: usize = 10;

/// Body lines in the small font (6x10 -> 21 columns).
pub const BODY_BUDGET: usize = 21;

/// Labelled values (network name, address) printed after a short prefix.
pub const LABEL_BUDGET: usize = 17;

/// Power readout in the huge font.
pub const POWER_BUDGET: usize = 7;

/// Voltage readout, left of the current field (11 small columns up to x=70).
pub const VOLTAGE_BUDGET: usize = 11;

/// Capacity of a single text draw operation, in characters.
///
/// Every budget above must fit, checked at compile time below.
pub const TEXT_CAPACITY: usize = 24;

/// Worst-case UTF-8 width of one character.
pub const MAX_CHAR_BYTES: usize = 4;

/// Byte capacity backing a [`TEXT_CAPACITY`] character line.
pub const TEXT_BYTES: usize = TEXT_CAPACITY * MAX_CHAR_BYTES;

/// Capacity of the next-payment label held in the shared store, in characters.
///
/// Producers hand over free text of any length; the store keeps this many
/// characters and the service screen cuts it again to [`BODY_BUDGET`].
pub const PAYMENT_LABEL_CAPACITY: usize = 32;

/// Byte capacity backing the next-payment label.
pub const PAYMENT_LABEL_BYTES: usize = PAYMENT_LABEL_CAPACITY * MAX_CHAR_BYTES;

const _: () = assert!(TITLE_BUDGET <= TEXT_CAPACITY);
const _: () = assert!(BODY_BUDGET <= TEXT_CAPACITY);
const _: () = assert!(LABEL_BUDGET <= TEXT_CAPACITY);
const _: () = assert!(POWER_BUDGET <= TEXT_CAPACITY);
const _: () = assert!(VOLTAGE_BUDGET <= TEXT_CAPACITY);
const _: () = assert!(BODY_BUDGET <= PAYMENT_LABEL_CAPACITY);

// =============================================================================
// Telemetry Lock
// =============================================================================

/// Longest time a render waits for the telemetry lock.
pub const TELEMETRY_LOCK_TIMEOUT_MS: u64 = 50;

// =============================================================================
// Screen Rotation
// =============================================================================

/// How long each screen of the unattended rotation stays up.
pub const ROTATION_PERIOD_MS: u64 = 5_000;

// =============================================================================
// OTA Progress Track
// =============================================================================

/// Top edge of the progress bar outline.
pub const PROGRESS_TRACK_Y: i32 = 48;

/// Height of the progress bar outline.
pub const PROGRESS_TRACK_HEIGHT: u32 = 10;

/// Gap between the outline and the fill on every side.
pub const PROGRESS_INSET: u32 = 2;

/// Width available to the fill (track width minus inset on both sides).
pub const PROGRESS_INNER_WIDTH: u32 = SCREEN_WIDTH - 2 * PROGRESS_INSET;

// =============================================================================
// Runtime Configuration
// =============================================================================

/// Presentation settings that may differ between product builds.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayConfig {
    /// Product name shown on the boot screen (large font).
    pub title: &'static str,
    /// Firmware version appended to the service screen as `Firmware: v<version>`.
    pub firmware_version: &'static str,
    /// Who to call once the service is suspended.
    pub support_contact: &'static str,
    /// Address of the provisioning portal while in setup mode.
    pub portal_address: &'static str,
    /// Glyphs for the cloud link indicator.
    pub cloud_glyphs: CloudGlyphs,
    /// Bounded wait for the telemetry lock.
    pub lock_timeout: Duration,
}

impl DisplayConfig {
    pub const fn new() -> Self {
        Self {
            title: "Cuentatron",
            firmware_version: env!("CARGO_PKG_VERSION"),
            support_contact: "Luz en tu Espacio",
            portal_address: "192.168.4.1",
            cloud_glyphs: CloudGlyphs::new(),
            lock_timeout: Duration::from_millis(TELEMETRY_LOCK_TIMEOUT_MS),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_inner_width() {
        assert_eq!(PROGRESS_INNER_WIDTH, 124, "128px track with 2px inset on each side");
    }

    #[test]
    fn test_default_title_fits_budget() {
        assert!(DisplayConfig::default().title.chars().count() <= TITLE_BUDGET);
    }

    #[test]
    fn test_default_lock_timeout() {
        assert_eq!(DisplayConfig::default().lock_timeout, Duration::from_millis(50));
    }
}
