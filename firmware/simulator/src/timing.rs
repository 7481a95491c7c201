//! Timing constants for the simulator.
//!
//! These constants use `std::time::Duration` which is not available in `no_std`
//! environments, so they are defined here rather than in the common crate.

use std::time::Duration;

/// Render period, same cadence as the firmware render loop.
pub const FRAME_TIME: Duration = Duration::from_millis(50);

/// How often the producer thread publishes readings.
pub const PRODUCER_PERIOD: Duration = Duration::from_millis(200);

/// How long the producer keeps the lock while lock hogging is on.
///
/// Longer than the renderer's lock timeout, so every data screen falls back.
pub const LOCK_HOLD: Duration = Duration::from_millis(400);

/// How long each boot screen stays up.
pub const BOOT_HOLD: Duration = Duration::from_millis(1_200);
