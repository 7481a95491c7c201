//! Energy meter status display simulator for desktop.
//!
//! Runs the same dispatcher and screens as the firmware against a simulated
//! 128x64 OLED. A producer thread writes fake telemetry while the main thread
//! renders every [`FRAME_TIME`]; see [`controls`] for the keyboard.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod controls;
mod panel;
mod producer;
mod timing;

use std::net::Ipv4Addr;
use std::thread;
use std::time::{Duration, Instant};

use embassy_futures::block_on;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embedded_graphics_simulator::{BinaryColorTheme, OutputSettingsBuilder, SimulatorEvent, Window};
use meter_display_common::rotation::screen_for;
use meter_display_common::{DisplayConfig, Screen, ScreenKind, ScreenRotation, StaticNetworkInfo, StatusDisplay};

use crate::controls::{Action, View};
use crate::panel::SimPanel;
use crate::producer::{ProducerControls, Store};
use crate::timing::{BOOT_HOLD, FRAME_TIME};

static TELEMETRY: Store = Store::new();
static PRODUCER: ProducerControls = ProducerControls::new();

const NETWORK: StaticNetworkInfo<'static> = StaticNetworkInfo {
    mac: [0x24, 0x6F, 0x28, 0xA1, 0x0B, 0xFE],
    network_name: "SimNet",
    local_address: Ipv4Addr::new(192, 168, 1, 40),
};

const AP_NAME: &str = "Cuentatron";

type Display = StatusDisplay<'static, CriticalSectionRawMutex, SimPanel, StaticNetworkInfo<'static>>;

fn main() {
    let output_settings = OutputSettingsBuilder::new()
        .theme(BinaryColorTheme::OledBlue)
        .scale(4)
        .build();
    let window = Window::new("Cuentatron Display Sim", &output_settings);
    let mut display = StatusDisplay::new(SimPanel::new(window), &TELEMETRY, NETWORK, DisplayConfig::default());

    for status in ["Starting...", "Joining network..."] {
        block_on(display.show(&Screen::Boot { status }));
        if !hold(&mut display, BOOT_HOLD) {
            return;
        }
    }

    producer::spawn(&TELEMETRY, &PRODUCER);
    println!("1-8 pin a screen, R rotate, C cloud, P account, Up/Down OTA, L hold lock");

    let start = Instant::now();
    let mut rotation = ScreenRotation::new(0);
    let mut view = View::new();
    let mut reported_misses = 0u32;

    loop {
        let frame_start = Instant::now();

        // Handle events
        let events: Vec<SimulatorEvent> = display.panel_mut().events().collect();
        for ev in events {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    if let Some(action) = Action::from_key(keycode) {
                        apply(action, &mut view);
                    }
                }
                _ => {}
            }
        }

        let kind = match view.pinned {
            Some(kind) => kind,
            None => rotation.tick(start.elapsed().as_millis() as u64, display.last_snapshot()),
        };
        block_on(display.show(&screen(kind, &view)));

        let misses = display.missed_snapshots();
        if misses != reported_misses {
            println!("telemetry lock busy, {misses} renders used stale values");
            reported_misses = misses;
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            thread::sleep(FRAME_TIME - elapsed);
        }
    }
}

fn apply(
    action: Action,
    view: &mut View,
) {
    match action {
        Action::ToggleCloud => {
            let online = PRODUCER.toggle_cloud();
            println!("cloud: {}", if online { "online" } else { "offline" });
        }
        Action::CycleAccount => println!("account: {:?}", PRODUCER.cycle_account()),
        Action::ToggleLockHog => {
            let hog = PRODUCER.toggle_lock_hog();
            println!("lock hog: {}", if hog { "ON" } else { "OFF" });
        }
        _ => view.apply(action),
    }
}

/// Screen for `kind`, filling in the parameters the simulator owns.
fn screen(
    kind: ScreenKind,
    view: &View,
) -> Screen<'static> {
    match kind {
        ScreenKind::Boot => Screen::Boot { status: "Simulator ready" },
        ScreenKind::OtaProgress => Screen::OtaProgress {
            status: "Downloading v0.2.0",
            percent: view.ota_percent,
        },
        ScreenKind::GenericMessage => Screen::GenericMessage {
            line1: "Hello",
            line2: "Press R to rotate",
        },
        ScreenKind::Provisioning => Screen::Provisioning { ap_name: AP_NAME },
        other => screen_for(other).unwrap_or(Screen::Consumption),
    }
}

/// Keep the current frame up for `duration` while pumping window events.
///
/// Returns false if the window was closed.
fn hold(
    display: &mut Display,
    duration: Duration,
) -> bool {
    let until = Instant::now() + duration;
    while Instant::now() < until {
        if display.panel_mut().events().any(|ev| matches!(ev, SimulatorEvent::Quit)) {
            return false;
        }
        thread::sleep(FRAME_TIME);
    }
    true
}
