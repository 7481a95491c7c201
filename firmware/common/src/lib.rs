//! Status display core for the single-phase energy meter.
//!
//! This crate contains platform-agnostic code shared between the simulator
//! and the Pico 2 firmware:
//!
//! - [`telemetry`]: shared telemetry store and snapshots
//! - [`dispatcher`]: capability gate, snapshot fallback and frame commit
//! - [`screens`]: screen variants and their pure composers
//! - [`rotation`]: unattended screen rotation
//! - [`frame`]: draw operations of one screen
//! - [`panel`]: display sink trait and capability probe
//! - [`glyphs`]: signal and cloud icons
//! - [`styles`]: font scales and text styles
//! - [`text`]: text budgeting
//! - [`network`]: device identity and network details
//! - [`config`]: layout constants and runtime display settings
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` outside of tests. Tests run on the host with the
//! `embassy-time` std driver.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod config;
pub mod dispatcher;
pub mod frame;
pub mod glyphs;
pub mod network;
pub mod panel;
pub mod rotation;
pub mod screens;
pub mod styles;
pub mod telemetry;
pub mod text;

// Re-export commonly used items
pub use config::DisplayConfig;
pub use dispatcher::StatusDisplay;
pub use frame::{DrawOp, Frame};
pub use glyphs::{CloudGlyphs, Glyph, SignalIcon};
pub use network::{NetworkInfo, StaticNetworkInfo};
pub use panel::{DisplayCapability, Panel};
pub use rotation::ScreenRotation;
pub use screens::{Screen, ScreenKind};
pub use telemetry::{TelemetrySnapshot, TelemetryStore};
