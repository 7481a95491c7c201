//! Synthetic meter readings for running without a metering front end.
//!
//! Values follow slow sine waves (micromath) so every screen field moves and
//! the signal icon walks through all of its bands.

use micromath::F32;

/// Nominal line voltage.
pub const NOMINAL_VOLTAGE: f32 = 127.0;

/// One set of electrical readings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DemoReadings {
    pub voltage_rms: f32,
    pub current_rms: f32,
    pub active_power: f32,
}

/// Readings at `elapsed_ms` since boot.
pub fn readings(elapsed_ms: u32) -> DemoReadings {
    let t = elapsed_ms as f32 / 1000.0;

    let voltage_rms = NOMINAL_VOLTAGE + 3.0 * F32(t * 0.2).sin().0;
    let current_rms = 0.5 + 7.5 * F32(t * 0.1).sin().0.abs();
    let power_factor = 0.85 + 0.1 * F32(t * 0.05).sin().0;

    DemoReadings {
        voltage_rms,
        current_rms,
        active_power: voltage_rms * current_rms * power_factor,
    }
}

/// RSSI in dBm at `elapsed_ms`, sweeping -55 to -95.
pub fn rssi(elapsed_ms: u32) -> i16 {
    let t = elapsed_ms as f32 / 1000.0;
    (-55.0 - 40.0 * F32(t * 0.08).sin().0.abs()) as i16
}

/// Account phase of the demo, one per minute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccountPhase {
    Active,
    Overdue { grace_days: u16 },
    Suspended,
}

impl AccountPhase {
    const PERIOD_MS: u32 = 60_000;

    pub const fn at(elapsed_ms: u32) -> Self {
        match (elapsed_ms / Self::PERIOD_MS) % 4 {
            0 | 1 => Self::Active,
            2 => Self::Overdue { grace_days: 3 },
            _ => Self::Suspended,
        }
    }

    /// `(subscription_active, payment_overdue, grace_period_days_remaining)`.
    pub const fn flags(self) -> (bool, bool, u16) {
        match self {
            Self::Active => (true, false, 0),
            Self::Overdue { grace_days } => (true, true, grace_days),
            Self::Suspended => (false, true, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readings_stay_in_range() {
        for ms in (0..600_000).step_by(250) {
            let r = readings(ms);
            assert!((123.9..=130.1).contains(&r.voltage_rms), "voltage {} at {ms}", r.voltage_rms);
            assert!((0.49..=8.1).contains(&r.current_rms), "current {} at {ms}", r.current_rms);
            let pf = r.active_power / (r.voltage_rms * r.current_rms);
            assert!((0.74..=0.96).contains(&pf), "power factor {pf} at {ms}");
        }
    }

    #[test]
    fn test_rssi_sweeps_every_band() {
        let samples: std::vec::Vec<i16> = (0..120_000).step_by(100).map(rssi).collect();
        assert!(samples.iter().any(|&r| r > -70), "never full");
        assert!(samples.iter().any(|&r| (-79..=-70).contains(&r)), "never medium");
        assert!(samples.iter().any(|&r| r < -85), "never weak");
        assert!(samples.iter().all(|&r| r < 0), "0 dBm means no reading");
    }

    #[test]
    fn test_account_phases() {
        assert_eq!(AccountPhase::at(0), AccountPhase::Active);
        assert_eq!(AccountPhase::at(120_000), AccountPhase::Overdue { grace_days: 3 });
        assert_eq!(AccountPhase::at(180_000).flags(), (false, true, 0));
        assert_eq!(AccountPhase::at(240_000), AccountPhase::Active, "cycle repeats");
    }
}
