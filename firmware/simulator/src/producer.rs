//! Telemetry producer thread.
//!
//! Stands in for the acquisition and link tasks of the firmware: it writes
//! fake readings into the shared store while the main thread renders, so the
//! lock is contended the same way it is on hardware.

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Instant;

use embassy_futures::block_on;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use meter_display_common::TelemetryStore;

use crate::timing::{LOCK_HOLD, PRODUCER_PERIOD};

pub type Store = TelemetryStore<CriticalSectionRawMutex>;

const NEXT_PAYMENT_LABEL: &str = "15 Nov 2026";

// =============================================================================
// Account State
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccountState {
    Active,
    Overdue,
    Suspended,
}

impl AccountState {
    pub const fn next(self) -> Self {
        match self {
            Self::Active => Self::Overdue,
            Self::Overdue => Self::Suspended,
            Self::Suspended => Self::Active,
        }
    }

    /// `(subscription_active, payment_overdue, grace_period_days_remaining)`.
    const fn flags(self) -> (bool, bool, u16) {
        match self {
            Self::Active => (true, false, 0),
            Self::Overdue => (true, true, 3),
            Self::Suspended => (false, true, 0),
        }
    }

    const fn from_u8(value: u8) -> Self {
        match value {
            1 => Self::Overdue,
            2 => Self::Suspended,
            _ => Self::Active,
        }
    }

    const fn as_u8(self) -> u8 {
        match self {
            Self::Active => 0,
            Self::Overdue => 1,
            Self::Suspended => 2,
        }
    }
}

// =============================================================================
// Controls
// =============================================================================

/// Knobs the keyboard turns while the producer runs.
pub struct ProducerControls {
    cloud_online: AtomicBool,
    account: AtomicU8,
    hog_lock: AtomicBool,
}

impl ProducerControls {
    pub const fn new() -> Self {
        Self {
            cloud_online: AtomicBool::new(true),
            account: AtomicU8::new(0),
            hog_lock: AtomicBool::new(false),
        }
    }

    /// Flip the cloud link. Returns the new state.
    pub fn toggle_cloud(&self) -> bool { !self.cloud_online.fetch_xor(true, Ordering::Relaxed) }

    /// Flip lock hogging. Returns the new state.
    pub fn toggle_lock_hog(&self) -> bool { !self.hog_lock.fetch_xor(true, Ordering::Relaxed) }

    pub fn cycle_account(&self) -> AccountState {
        let next = self.account().next();
        self.account.store(next.as_u8(), Ordering::Relaxed);
        next
    }

    fn account(&self) -> AccountState { AccountState::from_u8(self.account.load(Ordering::Relaxed)) }
}

// =============================================================================
// Producer Thread
// =============================================================================

pub fn spawn(
    store: &'static Store,
    controls: &'static ProducerControls,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let start = Instant::now();
        loop {
            let t = start.elapsed().as_secs_f32();

            let voltage = fake_signal(t, 124.0, 130.0, 0.2);
            let current = fake_signal(t, 0.5, 8.0, 0.1);
            let power = voltage * current * fake_signal(t, 0.75, 0.95, 0.05);
            let rssi = fake_signal(t, -95.0, -55.0, 0.08) as i16;
            let cloud = controls.cloud_online.load(Ordering::Relaxed);
            let (active, overdue, grace) = controls.account().flags();
            let hog = controls.hog_lock.load(Ordering::Relaxed);

            block_on(store.update(|snapshot| {
                snapshot.set_readings(voltage, current, power);
                snapshot.signal_strength_dbm = rssi;
                snapshot.cloud_connected = cloud;
                snapshot.set_account(active, overdue, grace);
                snapshot.set_next_payment_label(NEXT_PAYMENT_LABEL);
                if hog {
                    // a slow writer; the renderer has to fall back meanwhile
                    thread::sleep(LOCK_HOLD);
                }
            }));

            thread::sleep(PRODUCER_PERIOD);
        }
    })
}

fn fake_signal(
    t: f32,
    min: f32,
    max: f32,
    freq: f32,
) -> f32 {
    let normalized = (t * freq).sin().mul_add(0.5, 0.5);
    min + normalized * (max - min)
}
