//! Telemetry producer tasks.
//!
//! - `acquisition`: electrical readings
//! - `link`: radio, cloud and account state
//!
//! Both only copy values into the shared store; neither touches the panel.

pub mod acquisition;
pub mod link;

pub use acquisition::acquisition_task;
pub use link::link_task;
