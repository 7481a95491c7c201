//! Radio, cloud and account state producer.

use defmt::info;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_time::{Instant, Timer};
use meter_display_common::TelemetryStore;
use meter_display_pico2::config::LINK_PERIOD_MS;
use meter_display_pico2::demo::{self, AccountPhase};

const NEXT_PAYMENT_LABEL: &str = "15 Nov 2026";

/// Publish link and account state every [`LINK_PERIOD_MS`].
#[embassy_executor::task]
pub async fn link_task(
    store: &'static TelemetryStore<CriticalSectionRawMutex>,
    start: Instant,
) {
    info!("Link task started");

    let mut last_phase = None;
    loop {
        let elapsed_ms = start.elapsed().as_millis() as u32;
        let rssi = demo::rssi(elapsed_ms);
        let phase = AccountPhase::at(elapsed_ms);
        let (active, overdue, grace) = phase.flags();

        store
            .update(|t| {
                t.signal_strength_dbm = rssi;
                // the demo cloud drops out whenever the signal is weak
                t.cloud_connected = rssi > -85;
                t.set_account(active, overdue, grace);
                t.set_next_payment_label(NEXT_PAYMENT_LABEL);
            })
            .await;

        if last_phase != Some(phase) {
            info!("Account: active={} overdue={} grace={}", active, overdue, grace);
            last_phase = Some(phase);
        }

        Timer::after_millis(LINK_PERIOD_MS).await;
    }
}
