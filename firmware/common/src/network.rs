//! Device identity and network details for the diagnostics screen.
//!
//! These come straight from the radio stack and are not part of the telemetry
//! store; reading them never takes the telemetry lock.

use core::net::Ipv4Addr;

use heapless::String;

/// Read-only view of the network stack.
pub trait NetworkInfo {
    /// Station MAC address.
    fn mac_address(&self) -> [u8; 6];

    /// Name of the joined network, empty when not joined.
    fn network_name(&self) -> &str;

    /// Address assigned to the station, `0.0.0.0` when not joined.
    fn local_address(&self) -> Ipv4Addr;
}

/// Fixed network details, for builds without a radio and for tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StaticNetworkInfo<'a> {
    pub mac: [u8; 6],
    pub network_name: &'a str,
    pub local_address: Ipv4Addr,
}

impl NetworkInfo for StaticNetworkInfo<'_> {
    fn mac_address(&self) -> [u8; 6] { self.mac }

    fn network_name(&self) -> &str { self.network_name }

    fn local_address(&self) -> Ipv4Addr { self.local_address }
}

impl<N: NetworkInfo + ?Sized> NetworkInfo for &N {
    fn mac_address(&self) -> [u8; 6] { (**self).mac_address() }

    fn network_name(&self) -> &str { (**self).network_name() }

    fn local_address(&self) -> Ipv4Addr { (**self).local_address() }
}

/// Device identifier: the MAC as 12 upper-case hex digits, no separators.
///
/// This is the ID the account service knows the unit by.
pub fn device_id(mac: [u8; 6]) -> String<12> {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    let mut id = String::new();
    for byte in mac {
        id.push(HEX[(byte >> 4) as usize] as char).ok();
        id.push(HEX[(byte & 0x0F) as usize] as char).ok();
    }
    id
}
