//! Diagnostics screen for technical support.
//!
//! Shows the device ID (MAC without separators), the joined network, the
//! radio signal and the station address.

use embedded_graphics::prelude::*;

use crate::config::{BODY_BUDGET, LABEL_BUDGET};
use crate::frame::Frame;
use crate::network::{NetworkInfo, device_id};
use crate::styles::FontSize;
use crate::telemetry::TelemetrySnapshot;
use crate::text::{labelled, line};

const HEADER_POS: Point = Point::new(0, 0);
const ID_LABEL_POS: Point = Point::new(0, 12);
const ID_POS: Point = Point::new(0, 22);
const NETWORK_POS: Point = Point::new(0, 32);
const SIGNAL_POS: Point = Point::new(0, 42);
const ADDRESS_POS: Point = Point::new(0, 52);

pub fn diagnostics_frame<N>(
    telemetry: Option<&TelemetrySnapshot>,
    network: &N,
) -> Frame
where
    N: NetworkInfo + ?Sized,
{
    let mut frame = Frame::new();
    frame.text(HEADER_POS, FontSize::Small, "-- DIAGNOSTICS --", BODY_BUDGET);

    frame.text(ID_LABEL_POS, FontSize::Small, "Device ID:", BODY_BUDGET);
    frame.text(ID_POS, FontSize::Small, &device_id(network.mac_address()), BODY_BUDGET);

    frame.text(
        NETWORK_POS,
        FontSize::Small,
        &labelled("Net:", network.network_name(), LABEL_BUDGET),
        BODY_BUDGET,
    );

    let signal = match telemetry {
        Some(t) => line(format_args!("Signal: {} dBm", t.signal_strength_dbm)),
        None => line(format_args!("Signal: --")),
    };
    frame.text(SIGNAL_POS, FontSize::Small, &signal, BODY_BUDGET);

    let address = line(format_args!("{}", network.local_address()));
    frame.text(ADDRESS_POS, FontSize::Small, &labelled("IP: ", &address, LABEL_BUDGET), BODY_BUDGET);

    frame
}

#[cfg(test)]
mod tests {
    use core::net::Ipv4Addr;

    use super::*;
    use crate::network::StaticNetworkInfo;

    const NETWORK: StaticNetworkInfo<'static> = StaticNetworkInfo {
        mac: [0x24, 0x6F, 0x28, 0xA1, 0x0B, 0xFE],
        network_name: "INFINITUM-5G-CASA-GARCIA",
        local_address: Ipv4Addr::new(192, 168, 100, 27),
    };

    #[test]
    fn test_diagnostics_lines() {
        let mut t = TelemetrySnapshot::new();
        t.signal_strength_dbm = -67;
        let frame = diagnostics_frame(Some(&t), &NETWORK);

        let texts: std::vec::Vec<&str> = frame.texts().collect();
        assert_eq!(
            texts,
            [
                "-- DIAGNOSTICS --",
                "Device ID:",
                "246F28A10BFE",
                "Net:INFINITUM-5G-CASA",
                "Signal: -67 dBm",
                "IP: 192.168.100.27",
            ]
        );
    }

    #[test]
    fn test_diagnostics_without_telemetry() {
        let frame = diagnostics_frame(None, &NETWORK);
        assert!(frame.contains_text("Signal: --"));
        assert!(frame.contains_text("246F28A10BFE"), "identity does not need telemetry");
    }
}
