//! Shared telemetry store.
//!
//! One [`TelemetryStore`] lives for the whole process. The acquisition task
//! writes electrical readings into it, the network task writes link and account
//! flags, and the renderer copies everything out in a single critical section.
//!
//! # Locking
//!
//! Both sides hold the lock only long enough to copy values in or out:
//!
//! ```ignore
//! // producer
//! TELEMETRY.update(|t| t.set_readings(vrms, irms, watts)).await;
//!
//! // renderer
//! if let Some(snapshot) = TELEMETRY.snapshot(Duration::from_millis(50)).await {
//!     // lock already released here
//! }
//! ```
//!
//! The renderer never waits longer than the timeout it passes in; on timeout it
//! gets `None` and falls back to whatever it retained from an earlier render.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::mutex::Mutex;
use embassy_time::{Duration, with_timeout};
use heapless::String;

use crate::config::{PAYMENT_LABEL_BYTES, PAYMENT_LABEL_CAPACITY};
use crate::text::push_fitting;

// =============================================================================
// Snapshot
// =============================================================================

/// Latest electrical readings and status flags.
///
/// The store holds the live copy; every read hands out a clone, so a value of
/// this type never changes once the renderer has it.
#[derive(Clone, Debug, PartialEq)]
pub struct TelemetrySnapshot {
    /// RMS voltage in volts.
    pub voltage_rms: f32,
    /// RMS current in amps.
    pub current_rms: f32,
    /// Active power in watts.
    pub active_power: f32,
    /// Whether the cloud link (MQTT session) is up.
    pub cloud_connected: bool,
    pub subscription_active: bool,
    /// Payment is late; the account runs on its grace period.
    pub payment_overdue: bool,
    /// Free text handed over by the account service, e.g. `"15 Nov 2026"`.
    pub next_payment_label: String<PAYMENT_LABEL_BYTES>,
    /// Days left before a suspended account is terminated. 0 means suspended.
    pub grace_period_days_remaining: u16,
    /// Radio RSSI in dBm. 0 means no reading (radio down).
    pub signal_strength_dbm: i16,
}

impl TelemetrySnapshot {
    /// Cold-start state: no readings, nothing connected.
    pub const fn new() -> Self {
        Self {
            voltage_rms: 0.0,
            current_rms: 0.0,
            active_power: 0.0,
            cloud_connected: false,
            subscription_active: false,
            payment_overdue: false,
            next_payment_label: String::new(),
            grace_period_days_remaining: 0,
            signal_strength_dbm: 0,
        }
    }

    /// Store a new set of electrical readings.
    pub fn set_readings(
        &mut self,
        voltage_rms: f32,
        current_rms: f32,
        active_power: f32,
    ) {
        self.voltage_rms = voltage_rms;
        self.current_rms = current_rms;
        self.active_power = active_power;
    }

    /// Store the account state reported by the service.
    pub fn set_account(
        &mut self,
        subscription_active: bool,
        payment_overdue: bool,
        grace_period_days_remaining: u16,
    ) {
        self.subscription_active = subscription_active;
        self.payment_overdue = payment_overdue;
        self.grace_period_days_remaining = grace_period_days_remaining;
    }

    /// Replace the next-payment label, keeping at most
    /// [`PAYMENT_LABEL_CAPACITY`] characters.
    pub fn set_next_payment_label(
        &mut self,
        label: &str,
    ) {
        self.next_payment_label.clear();
        push_fitting(&mut self.next_payment_label, label, PAYMENT_LABEL_CAPACITY);
    }

    /// Apparent-power based power factor, see [`power_factor`].
    #[inline]
    pub fn power_factor(&self) -> f32 { power_factor(self.active_power, self.voltage_rms, self.current_rms) }
}

impl Default for TelemetrySnapshot {
    fn default() -> Self { Self::new() }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TelemetrySnapshot {
    fn format(
        &self,
        f: defmt::Formatter,
    ) {
        defmt::write!(
            f,
            "Telemetry {{ V: {}, A: {}, W: {}, cloud: {}, sub: {}, overdue: {}, grace: {}, rssi: {} }}",
            self.voltage_rms,
            self.current_rms,
            self.active_power,
            self.cloud_connected,
            self.subscription_active,
            self.payment_overdue,
            self.grace_period_days_remaining,
            self.signal_strength_dbm,
        );
    }
}

/// Power factor `P / (V * I)`.
///
/// Defined as `0` when the apparent power is zero (cold start, no load), so the
/// consumption screen never divides by zero.
pub fn power_factor(
    active_power: f32,
    voltage_rms: f32,
    current_rms: f32,
) -> f32 {
    let apparent = voltage_rms * current_rms;
    if apparent > 0.0 { active_power / apparent } else { 0.0 }
}

// =============================================================================
// Store
// =============================================================================

/// Lock-guarded telemetry shared between producers and the renderer.
///
/// Generic over the raw mutex so firmware can use `CriticalSectionRawMutex`
/// while single-executor builds may pick `NoopRawMutex`.
pub struct TelemetryStore<M: RawMutex> {
    pub(crate) inner: Mutex<M, TelemetrySnapshot>,
}

impl<M: RawMutex> TelemetryStore<M> {
    /// Create a store in the cold-start state. `const`, so it can back a `static`.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(TelemetrySnapshot::new()),
        }
    }

    /// Copy all fields out under the lock, waiting at most `timeout`.
    ///
    /// Returns `None` when the lock could not be taken in time. The guard is
    /// dropped before this returns.
    pub async fn snapshot(
        &self,
        timeout: Duration,
    ) -> Option<TelemetrySnapshot> {
        match with_timeout(timeout, self.inner.lock()).await {
            Ok(guard) => Some(guard.clone()),
            Err(_) => None,
        }
    }

    /// Copy all fields out if the lock is free right now.
    pub fn try_snapshot(&self) -> Option<TelemetrySnapshot> { self.inner.try_lock().ok().map(|guard| guard.clone()) }

    /// Mutate the shared values under the lock.
    ///
    /// Keep `f` to plain field copies; the renderer may be waiting.
    pub async fn update<F>(
        &self,
        f: F,
    ) where
        F: FnOnce(&mut TelemetrySnapshot),
    {
        let mut guard = self.inner.lock().await;
        f(&mut guard);
    }

    /// Mutate the shared values if the lock is free right now.
    ///
    /// Returns `false` (and does not call `f`) when the lock is held.
    pub fn try_update<F>(
        &self,
        f: F,
    ) -> bool
    where
        F: FnOnce(&mut TelemetrySnapshot),
    {
        match self.inner.try_lock() {
            Ok(mut guard) => {
                f(&mut guard);
                true
            }
            Err(_) => false,
        }
    }
}

impl<M: RawMutex> Default for TelemetryStore<M> {
    fn default() -> Self { Self::new() }
}
