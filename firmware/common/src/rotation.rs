//! Screen rotation for the unattended display.
//!
//! The data screens cycle on a fixed period:
//!
//! ```text
//! Consumption -> [PaymentDue] -> Diagnostics -> ServiceStatus -> Consumption
//! ```
//!
//! `PaymentDue` is only inserted while the account needs attention. Time is
//! passed in as milliseconds since boot, so the firmware (embassy `Instant`)
//! and the simulator (`std::time::Instant`) drive it the same way.

use crate::config::ROTATION_PERIOD_MS;
use crate::screens::{Screen, ScreenKind};
use crate::telemetry::TelemetrySnapshot;

/// Whether the payment notice belongs in the rotation.
///
/// True while a payment is overdue, or once the grace period has run out on
/// an inactive subscription.
pub fn payment_due(telemetry: &TelemetrySnapshot) -> bool {
    telemetry.payment_overdue || (telemetry.grace_period_days_remaining == 0 && !telemetry.subscription_active)
}

/// Screen that follows `current`.
pub const fn next_kind(
    current: ScreenKind,
    payment_due: bool,
) -> ScreenKind {
    match current {
        ScreenKind::Consumption if payment_due => ScreenKind::PaymentDue,
        ScreenKind::Consumption | ScreenKind::PaymentDue => ScreenKind::Diagnostics,
        ScreenKind::Diagnostics => ScreenKind::ServiceStatus,
        _ => ScreenKind::Consumption,
    }
}

/// Parameter-free screen for a rotation slot.
///
/// `None` for kinds that need call-site parameters; the rotation never
/// produces those.
pub const fn screen_for(kind: ScreenKind) -> Option<Screen<'static>> {
    match kind {
        ScreenKind::Consumption => Some(Screen::Consumption),
        ScreenKind::Diagnostics => Some(Screen::Diagnostics),
        ScreenKind::ServiceStatus => Some(Screen::ServiceStatus),
        ScreenKind::PaymentDue => Some(Screen::PaymentDue),
        _ => None,
    }
}

/// Tracks which screen is up and when it went up.
#[derive(Clone, Copy, Debug)]
pub struct ScreenRotation {
    current: ScreenKind,
    shown_since_ms: u64,
    period_ms: u64,
}

impl ScreenRotation {
    /// Start the rotation on the consumption screen, [`ROTATION_PERIOD_MS`]
    /// per screen.
    pub const fn new(now_ms: u64) -> Self { Self::with_period(now_ms, ROTATION_PERIOD_MS) }

    pub const fn with_period(
        now_ms: u64,
        period_ms: u64,
    ) -> Self {
        Self {
            current: ScreenKind::Consumption,
            shown_since_ms: now_ms,
            period_ms,
        }
    }

    #[inline]
    pub const fn current(&self) -> ScreenKind { self.current }

    /// Advance if the current screen has been up for a full period.
    ///
    /// `telemetry` is the latest snapshot the renderer holds; without one the
    /// payment notice is skipped.
    pub fn tick(
        &mut self,
        now_ms: u64,
        telemetry: Option<&TelemetrySnapshot>,
    ) -> ScreenKind {
        if now_ms.saturating_sub(self.shown_since_ms) >= self.period_ms {
            let due = telemetry.is_some_and(payment_due);
            self.current = next_kind(self.current, due);
            self.shown_since_ms = now_ms;
        }
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(
        active: bool,
        overdue: bool,
        grace: u16,
    ) -> TelemetrySnapshot {
        let mut t = TelemetrySnapshot::new();
        t.set_account(active, overdue, grace);
        t
    }

    #[test]
    fn test_cycle_without_payment_notice() {
        let paid = account(true, false, 0);
        let mut rotation = ScreenRotation::new(0);
        let mut seen = [ScreenKind::Consumption; 4];
        for (i, slot) in seen.iter_mut().enumerate() {
            *slot = rotation.tick((i as u64 + 1) * ROTATION_PERIOD_MS, Some(&paid));
        }
        assert_eq!(
            seen,
            [
                ScreenKind::Diagnostics,
                ScreenKind::ServiceStatus,
                ScreenKind::Consumption,
                ScreenKind::Diagnostics
            ]
        );
    }

    #[test]
    fn test_payment_notice_after_consumption() {
        let overdue = account(true, true, 3);
        let mut rotation = ScreenRotation::new(0);
        assert_eq!(rotation.tick(ROTATION_PERIOD_MS, Some(&overdue)), ScreenKind::PaymentDue);
        assert_eq!(rotation.tick(2 * ROTATION_PERIOD_MS, Some(&overdue)), ScreenKind::Diagnostics);
    }

    #[test]
    fn test_holds_until_period_elapses() {
        let mut rotation = ScreenRotation::new(1_000);
        assert_eq!(rotation.tick(1_000 + ROTATION_PERIOD_MS - 1, None), ScreenKind::Consumption);
        assert_eq!(rotation.tick(1_000 + ROTATION_PERIOD_MS, None), ScreenKind::Diagnostics);
    }

    #[test]
    fn test_custom_period() {
        let mut rotation = ScreenRotation::with_period(0, 100);
        assert_eq!(rotation.tick(99, None), ScreenKind::Consumption);
        assert_eq!(rotation.tick(100, None), ScreenKind::Diagnostics);
        assert_eq!(rotation.tick(150, None), ScreenKind::Diagnostics, "period restarts on advance");
    }

    #[test]
    fn test_clock_going_backwards_does_not_advance() {
        let mut rotation = ScreenRotation::new(10_000);
        assert_eq!(rotation.tick(0, None), ScreenKind::Consumption);
    }

    #[test]
    fn test_payment_due_rules() {
        assert!(payment_due(&account(true, true, 5)), "overdue with grace left");
        assert!(payment_due(&account(false, false, 0)), "suspended");
        assert!(!payment_due(&account(true, false, 0)), "paid up");
        assert!(!payment_due(&account(false, false, 4)), "inactive but still in grace");
    }

    #[test]
    fn test_rotation_kinds_map_to_screens() {
        for kind in [
            ScreenKind::Consumption,
            ScreenKind::Diagnostics,
            ScreenKind::ServiceStatus,
            ScreenKind::PaymentDue,
        ] {
            let screen = screen_for(kind).unwrap();
            assert_eq!(screen.kind(), kind);
        }
        assert!(screen_for(ScreenKind::Boot).is_none());
    }
}
