//! Electrical readings producer.

use defmt::info;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_time::{Instant, Timer};
use meter_display_common::TelemetryStore;
use meter_display_pico2::config::ACQUISITION_PERIOD_MS;
use meter_display_pico2::demo;

/// Publish a new set of readings every [`ACQUISITION_PERIOD_MS`].
#[embassy_executor::task]
pub async fn acquisition_task(
    store: &'static TelemetryStore<CriticalSectionRawMutex>,
    start: Instant,
) {
    info!("Acquisition task started");

    loop {
        let reading = demo::readings(start.elapsed().as_millis() as u32);
        store
            .update(|t| t.set_readings(reading.voltage_rms, reading.current_rms, reading.active_power))
            .await;

        Timer::after_millis(ACQUISITION_PERIOD_MS).await;
    }
}
