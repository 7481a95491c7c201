//! Keyboard controls.
//!
//! | Key | Action |
//! |-----|--------|
//! | 1-8 | Pin a screen (Boot, OTA, Consumption, Diagnostics, Service, Payment, Message, Setup) |
//! | R | Resume the automatic rotation |
//! | C | Toggle the cloud link |
//! | P | Cycle the account state (active, overdue, suspended) |
//! | Up / Down | OTA percent +/- 10 |
//! | L | Hold the telemetry lock in the producer (shows the fallback path) |

use embedded_graphics_simulator::sdl2::Keycode;
use meter_display_common::ScreenKind;

const OTA_STEP: u8 = 10;

/// A key press the simulator understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Pin(ScreenKind),
    Rotate,
    ToggleCloud,
    CycleAccount,
    OtaUp,
    OtaDown,
    ToggleLockHog,
}

impl Action {
    pub fn from_key(keycode: Keycode) -> Option<Self> {
        let action = match keycode {
            Keycode::Num1 => Self::Pin(ScreenKind::Boot),
            Keycode::Num2 => Self::Pin(ScreenKind::OtaProgress),
            Keycode::Num3 => Self::Pin(ScreenKind::Consumption),
            Keycode::Num4 => Self::Pin(ScreenKind::Diagnostics),
            Keycode::Num5 => Self::Pin(ScreenKind::ServiceStatus),
            Keycode::Num6 => Self::Pin(ScreenKind::PaymentDue),
            Keycode::Num7 => Self::Pin(ScreenKind::GenericMessage),
            Keycode::Num8 => Self::Pin(ScreenKind::Provisioning),
            Keycode::R => Self::Rotate,
            Keycode::C => Self::ToggleCloud,
            Keycode::P => Self::CycleAccount,
            Keycode::Up => Self::OtaUp,
            Keycode::Down => Self::OtaDown,
            Keycode::L => Self::ToggleLockHog,
            _ => return None,
        };
        Some(action)
    }
}

/// What the render loop shows.
#[derive(Clone, Copy, Debug)]
pub struct View {
    /// `None` while the rotation runs.
    pub pinned: Option<ScreenKind>,
    pub ota_percent: u8,
}

impl View {
    pub const fn new() -> Self {
        Self {
            pinned: None,
            ota_percent: 40,
        }
    }

    /// Apply the view part of `action`. Producer knobs are handled by the caller.
    pub fn apply(
        &mut self,
        action: Action,
    ) {
        match action {
            Action::Pin(kind) => self.pinned = Some(kind),
            Action::Rotate => self.pinned = None,
            Action::OtaUp => self.ota_percent = self.ota_percent.saturating_add(OTA_STEP).min(100),
            Action::OtaDown => self.ota_percent = self.ota_percent.saturating_sub(OTA_STEP),
            Action::ToggleCloud | Action::CycleAccount | Action::ToggleLockHog => {}
        }
    }
}
