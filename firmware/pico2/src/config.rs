//! Firmware configuration.
//!
//! Panel wiring, task cadences, the boot sequence and the demo identity used
//! until the radio stack provides real values. Layout lives in `meter_display_common::config`.

use meter_display_common::Screen;

// =============================================================================
// OLED Wiring
// =============================================================================
// SSD1306 128x64 on I2C0: SDA=GP4, SCL=GP5 (pins are picked in main.rs).

/// I2C bus clock. The SSD1306 is rated for fast mode.
pub const I2C_FREQUENCY_HZ: u32 = 400_000;

/// 7-bit OLED address (0x3C for SA0 low, 0x3D for SA0 high).
pub const OLED_I2C_ADDRESS: u8 = 0x3C;

// =============================================================================
// Task Cadence
// =============================================================================

/// Render loop period. Every tick puts exactly one frame on the panel.
pub const RENDER_PERIOD_MS: u64 = 50;

/// Electrical readings refresh period.
pub const ACQUISITION_PERIOD_MS: u64 = 200;

/// Link and account state refresh period.
pub const LINK_PERIOD_MS: u64 = 1_000;

/// How long each boot screen stays up before the rotation starts.
pub const BOOT_HOLD_MS: u64 = 1_500;

// =============================================================================
// Demo Identity
// =============================================================================

pub const DEMO_MAC: [u8; 6] = [0x24, 0x6F, 0x28, 0xA1, 0x0B, 0xFE];

pub const DEMO_NETWORK_NAME: &str = "MeterNet";

pub const DEMO_LOCAL_ADDRESS: [u8; 4] = [192, 168, 1, 40];

/// Access point name shown on the setup screen.
pub const DEMO_AP_NAME: &str = "Cuentatron";

// =============================================================================
// Boot Sequence
// =============================================================================

/// Screens shown in order before the rotation starts, each for [`BOOT_HOLD_MS`].
///
/// None of them reads telemetry, so the producers can still be idle.
pub const BOOT_SEQUENCE: [Screen<'static>; 5] = [
    Screen::Boot { status: "Starting..." },
    Screen::Provisioning { ap_name: DEMO_AP_NAME },
    Screen::Boot { status: "Joining network..." },
    Screen::GenericMessage {
        line1: "Connected",
        line2: DEMO_NETWORK_NAME,
    },
    Screen::OtaProgress {
        status: "Firmware up to date",
        percent: 100,
    },
];

#[cfg(test)]
mod tests {
    use meter_display_common::config::ROTATION_PERIOD_MS;

    use super::*;

    #[test]
    fn test_rotation_spans_many_renders() {
        assert!(ROTATION_PERIOD_MS >= 10 * RENDER_PERIOD_MS, "a screen must stay up for several renders");
    }

    #[test]
    fn test_producers_outpace_rotation() {
        assert!(ACQUISITION_PERIOD_MS < ROTATION_PERIOD_MS);
        assert!(LINK_PERIOD_MS < ROTATION_PERIOD_MS);
    }

    #[test]
    fn test_boot_sequence_shows_setup_screen() {
        assert!(
            BOOT_SEQUENCE.contains(&Screen::Provisioning { ap_name: DEMO_AP_NAME }),
            "setup screen names the demo access point"
        );
        assert!(BOOT_SEQUENCE.iter().any(|s| matches!(s, Screen::OtaProgress { percent: 100, .. })));
    }

    #[test]
    fn test_boot_sequence_needs_no_telemetry() {
        for screen in &BOOT_SEQUENCE {
            assert!(!screen.kind().needs_telemetry(), "{:?} would wait on the store", screen.kind());
        }
    }
}
