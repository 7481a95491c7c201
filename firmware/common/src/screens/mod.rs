//! Screen variants and their composers.
//!
//! Every screen is one variant of [`Screen`]; [`Screen::compose`] is the single
//! place that maps a variant to its frame. Composers are pure: they take the
//! snapshot (if the screen needs one) and return a [`Frame`] without touching
//! the panel.

pub mod boot;
pub mod consumption;
pub mod diagnostics;
pub mod message;
pub mod ota;
pub mod payment;
pub mod provisioning;
pub mod service;

use crate::config::DisplayConfig;
use crate::frame::Frame;
use crate::network::NetworkInfo;
use crate::telemetry::TelemetrySnapshot;

/// One complete screen, with its call-site parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen<'a> {
    /// Product title and a startup status line.
    Boot { status: &'a str },
    /// Firmware update in progress. `percent` is 0..=100 by contract.
    OtaProgress { status: &'a str, percent: u8 },
    /// Live readings.
    Consumption,
    /// Identity, network and signal strength.
    Diagnostics,
    /// Subscription state and firmware version.
    ServiceStatus,
    /// Overdue-payment warning or suspension notice.
    PaymentDue,
    /// Two free-text lines.
    GenericMessage { line1: &'a str, line2: &'a str },
    /// Configuration access point is up.
    Provisioning { ap_name: &'a str },
}

/// Parameter-free tag of a [`Screen`], for scheduling and logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScreenKind {
    Boot,
    OtaProgress,
    Consumption,
    Diagnostics,
    ServiceStatus,
    PaymentDue,
    GenericMessage,
    Provisioning,
}

impl ScreenKind {
    /// Whether rendering this screen reads the telemetry store.
    pub const fn needs_telemetry(self) -> bool {
        matches!(
            self,
            Self::Consumption | Self::Diagnostics | Self::ServiceStatus | Self::PaymentDue
        )
    }
}

impl Screen<'_> {
    pub const fn kind(&self) -> ScreenKind {
        match self {
            Self::Boot { .. } => ScreenKind::Boot,
            Self::OtaProgress { .. } => ScreenKind::OtaProgress,
            Self::Consumption => ScreenKind::Consumption,
            Self::Diagnostics => ScreenKind::Diagnostics,
            Self::ServiceStatus => ScreenKind::ServiceStatus,
            Self::PaymentDue => ScreenKind::PaymentDue,
            Self::GenericMessage { .. } => ScreenKind::GenericMessage,
            Self::Provisioning { .. } => ScreenKind::Provisioning,
        }
    }

    /// Build the frame for this screen.
    ///
    /// `telemetry` is `None` when no snapshot is available at all; screens that
    /// read it then show placeholders.
    pub fn compose<N>(
        &self,
        telemetry: Option<&TelemetrySnapshot>,
        network: &N,
        config: &DisplayConfig,
    ) -> Frame
    where
        N: NetworkInfo + ?Sized,
    {
        match *self {
            Self::Boot { status } => boot::boot_frame(status, config),
            Self::OtaProgress { status, percent } => ota::ota_frame(status, percent),
            Self::Consumption => consumption::consumption_frame(telemetry, config),
            Self::Diagnostics => diagnostics::diagnostics_frame(telemetry, network),
            Self::ServiceStatus => service::service_frame(telemetry, config),
            Self::PaymentDue => payment::payment_due_frame(telemetry, config),
            Self::GenericMessage { line1, line2 } => message::message_frame(line1, line2),
            Self::Provisioning { ap_name } => provisioning::provisioning_frame(ap_name, config),
        }
    }
}

#[cfg(test)]
mod tests {
    use core::net::Ipv4Addr;

    use embedded_graphics::prelude::*;
    use embedded_graphics::primitives::Rectangle;

    use super::*;
    use crate::config::SCREEN_WIDTH;
    use crate::frame::DrawOp;
    use crate::network::StaticNetworkInfo;

    const LONG: &str = "An unreasonably long status line that no field could hold";

    fn network() -> StaticNetworkInfo<'static> {
        StaticNetworkInfo {
            mac: [0xAA; 6],
            network_name: LONG,
            local_address: Ipv4Addr::new(10, 0, 0, 2),
        }
    }

    fn busy_snapshot() -> TelemetrySnapshot {
        let mut t = TelemetrySnapshot::new();
        t.set_readings(250.55, 99.99, 9_999_999.0);
        t.set_account(true, false, 12);
        t.set_next_payment_label(LONG);
        t.signal_strength_dbm = -100;
        t
    }

    fn all_screens() -> [Screen<'static>; 8] {
        [
            Screen::Boot { status: LONG },
            Screen::OtaProgress { status: LONG, percent: 100 },
            Screen::Consumption,
            Screen::Diagnostics,
            Screen::ServiceStatus,
            Screen::PaymentDue,
            Screen::GenericMessage { line1: LONG, line2: LONG },
            Screen::Provisioning { ap_name: LONG },
        ]
    }

    #[test]
    fn test_text_never_crosses_right_edge() {
        let snapshot = busy_snapshot();
        let config = DisplayConfig::default();
        for screen in all_screens() {
            for telemetry in [Some(&snapshot), None] {
                let frame = screen.compose(telemetry, &network(), &config);
                for op in frame.ops() {
                    if let DrawOp::Text { at, font, text } = op {
                        let right = at.x + font.text_width(text.chars().count()) as i32;
                        assert!(
                            right <= SCREEN_WIDTH as i32,
                            "{:?}: {text:?} ends at x={right}",
                            screen.kind()
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_text_fields_never_overlap() {
        let mut snapshot = busy_snapshot();
        snapshot.set_readings(123_456_789.0, 123_456.0, 9_999_999.0);
        let config = DisplayConfig::default();
        for screen in all_screens() {
            for telemetry in [Some(&snapshot), None] {
                let frame = screen.compose(telemetry, &network(), &config);
                let boxes: std::vec::Vec<(Rectangle, &str)> = frame
                    .ops()
                    .iter()
                    .filter_map(|op| match op {
                        DrawOp::Text { at, font, text } if !text.is_empty() => {
                            let size = Size::new(
                                font.text_width(text.chars().count()),
                                font.font().character_size.height,
                            );
                            Some((Rectangle::new(*at, size), text.as_str()))
                        }
                        _ => None,
                    })
                    .collect();
                for (i, (a, a_text)) in boxes.iter().enumerate() {
                    for (b, b_text) in &boxes[i + 1..] {
                        assert!(
                            a.intersection(b).is_zero_sized(),
                            "{:?}: {a_text:?} overlaps {b_text:?}",
                            screen.kind()
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_needs_telemetry() {
        let reading: std::vec::Vec<ScreenKind> = all_screens()
            .iter()
            .map(Screen::kind)
            .filter(|kind| kind.needs_telemetry())
            .collect();
        assert_eq!(
            reading,
            [
                ScreenKind::Consumption,
                ScreenKind::Diagnostics,
                ScreenKind::ServiceStatus,
                ScreenKind::PaymentDue
            ]
        );
    }

    #[test]
    fn test_every_screen_draws_something() {
        let config = DisplayConfig::default();
        for screen in all_screens() {
            let frame = screen.compose(None, &network(), &config);
            assert!(!frame.ops().is_empty(), "{:?} composed an empty frame", screen.kind());
        }
    }
}
