//! Energy meter status display for Raspberry Pi Pico 2 (RP2350).
//!
//! Drives an SSD1306 128x64 OLED over I2C0 (SDA=GP4, SCL=GP5).
//!
//! # Architecture
//!
//! - Producer tasks copy readings and account state into the shared
//!   [`TelemetryStore`]
//! - Main task renders one screen every [`RENDER_PERIOD_MS`], rotating through
//!   the data screens every [`ROTATION_PERIOD_MS`]
//!
//! A missing or broken panel is detected once at startup; the firmware then
//! keeps running headless.

#![no_std]
#![no_main]
// Crate-level lints (match lib.rs for consistency)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod panel;
mod tasks;

use core::net::Ipv4Addr;

use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_rp::i2c::{self, I2c};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_time::{Duration, Instant, Ticker, Timer};
use meter_display_common::config::ROTATION_PERIOD_MS;
use meter_display_common::rotation::screen_for;
use meter_display_common::{DisplayConfig, ScreenRotation, StaticNetworkInfo, StatusDisplay, TelemetryStore};
use meter_display_pico2::config::{
    BOOT_HOLD_MS,
    BOOT_SEQUENCE,
    DEMO_LOCAL_ADDRESS,
    DEMO_MAC,
    DEMO_NETWORK_NAME,
    I2C_FREQUENCY_HZ,
    OLED_I2C_ADDRESS,
    RENDER_PERIOD_MS,
};
use {defmt_rtt as _, panic_probe as _};

use crate::panel::OledPanel;
use crate::tasks::{acquisition_task, link_task};

/// Shared telemetry, written by the producer tasks and read by the renderer.
static TELEMETRY: TelemetryStore<CriticalSectionRawMutex> = TelemetryStore::new();

// Program metadata for `picotool info`
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"meter-display"),
    embassy_rp::binary_info::rp_program_description!(c"Energy meter status display on SSD1306 OLED"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Meter display starting...");

    let p = embassy_rp::init(Default::default());

    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = I2C_FREQUENCY_HZ;
    let bus = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, i2c_config);

    let network = StaticNetworkInfo {
        mac: DEMO_MAC,
        network_name: DEMO_NETWORK_NAME,
        local_address: Ipv4Addr::from(DEMO_LOCAL_ADDRESS),
    };
    let mut display = StatusDisplay::new(
        OledPanel::new(bus, OLED_I2C_ADDRESS),
        &TELEMETRY,
        network,
        DisplayConfig::default(),
    );

    // Reported once; there is no retry
    if display.capability().is_present() {
        info!("Display initialized");
    } else {
        warn!("No display found, running headless");
    }

    // Boot sequence
    for screen in &BOOT_SEQUENCE {
        display.show(screen).await;
        Timer::after_millis(BOOT_HOLD_MS).await;
    }

    let start = Instant::now();
    spawner.spawn(acquisition_task(&TELEMETRY, start)).unwrap();
    spawner.spawn(link_task(&TELEMETRY, start)).unwrap();
    info!("Producer tasks spawned");

    info!("Render loop starting ({} ms, rotation {} ms)", RENDER_PERIOD_MS, ROTATION_PERIOD_MS);

    let mut rotation = ScreenRotation::new(0);
    let mut ticker = Ticker::every(Duration::from_millis(RENDER_PERIOD_MS));
    let mut reported_misses = 0u32;
    let mut reported_commit_failures = 0u32;

    loop {
        let previous = rotation.current();
        let kind = rotation.tick(start.elapsed().as_millis(), display.last_snapshot());
        if kind != previous {
            info!("Screen: {}", kind);
        }

        if let Some(screen) = screen_for(kind) {
            display.show(&screen).await;
        }

        let misses = display.missed_snapshots();
        if misses != reported_misses {
            warn!("Telemetry lock busy, {} renders used stale values", misses);
            reported_misses = misses;
        }
        let failures = display.failed_commits();
        if failures != reported_commit_failures {
            warn!("Display flush failed ({} total)", failures);
            reported_commit_failures = failures;
        }

        ticker.next().await;
    }
}
