//! Screen dispatcher: the one entry point that puts a screen on the panel.
//!
//! [`StatusDisplay`] owns the panel and decides at construction whether a
//! display is there at all. Every [`show`](StatusDisplay::show) then runs the
//! same sequence:
//!
//! 1. capability gate (no display -> return, nothing drawn, nothing committed)
//! 2. snapshot the telemetry store if the screen reads it, bounded by
//!    [`DisplayConfig::lock_timeout`]
//! 3. compose the frame from the snapshot, or from the last good one when the
//!    lock timed out
//! 4. clear, replay, commit once
//!
//! A lock timeout or a failed commit degrades one render and is counted; it is
//! never an error for the caller.

use embassy_sync::blocking_mutex::raw::RawMutex;

use crate::config::DisplayConfig;
use crate::network::NetworkInfo;
use crate::panel::{DisplayCapability, Panel};
use crate::screens::Screen;
use crate::telemetry::{TelemetrySnapshot, TelemetryStore};

pub struct StatusDisplay<'a, M, P, N>
where
    M: RawMutex,
    P: Panel,
    N: NetworkInfo,
{
    panel: P,
    capability: DisplayCapability,
    telemetry: &'a TelemetryStore<M>,
    network: N,
    config: DisplayConfig,
    /// Most recent snapshot that was read successfully.
    last_snapshot: Option<TelemetrySnapshot>,
    missed_snapshots: u32,
    failed_commits: u32,
}

impl<'a, M, P, N> StatusDisplay<'a, M, P, N>
where
    M: RawMutex,
    P: Panel,
    N: NetworkInfo,
{
    /// Take ownership of `panel` and initialize it once.
    ///
    /// A failed init leaves the dispatcher in headless mode for good.
    pub fn new(
        mut panel: P,
        telemetry: &'a TelemetryStore<M>,
        network: N,
        config: DisplayConfig,
    ) -> Self {
        let capability = DisplayCapability::probe(&mut panel);
        Self {
            panel,
            capability,
            telemetry,
            network,
            config,
            last_snapshot: None,
            missed_snapshots: 0,
            failed_commits: 0,
        }
    }

    /// Render `screen` and commit exactly one frame.
    ///
    /// Waits at most the configured lock timeout, and only for screens that
    /// read telemetry.
    pub async fn show(
        &mut self,
        screen: &Screen<'_>,
    ) {
        if !self.capability.is_present() {
            return;
        }

        if screen.kind().needs_telemetry() {
            self.refresh_snapshot().await;
        }

        let frame = screen.compose(self.last_snapshot.as_ref(), &self.network, &self.config);
        frame.render(&mut self.panel);
        if self.panel.commit().is_err() {
            self.failed_commits = self.failed_commits.wrapping_add(1);
        }
    }

    /// Snapshot the store, or keep the previous snapshot on timeout.
    async fn refresh_snapshot(&mut self) {
        match self.telemetry.snapshot(self.config.lock_timeout).await {
            Some(snapshot) => self.last_snapshot = Some(snapshot),
            None => self.missed_snapshots = self.missed_snapshots.wrapping_add(1),
        }
    }

    #[inline]
    pub const fn capability(&self) -> DisplayCapability { self.capability }

    /// Snapshot the next data screen will fall back to.
    pub const fn last_snapshot(&self) -> Option<&TelemetrySnapshot> { self.last_snapshot.as_ref() }

    /// Renders that had to fall back because the lock was busy.
    #[inline]
    pub const fn missed_snapshots(&self) -> u32 { self.missed_snapshots }

    #[inline]
    pub const fn failed_commits(&self) -> u32 { self.failed_commits }

    pub const fn panel(&self) -> &P { &self.panel }

    pub fn panel_mut(&mut self) -> &mut P { &mut self.panel }
}
