//! Arp protocol.
//!
//! Covers the Ethernet-framed ARP request frames exchanged during IPv4
//! address-conflict detection (RFC 5227): probes, announcements, and the
//! parsing of whatever ARP traffic arrives while a claim is pending.

use crate::ether::ETHER_HEADER_LEN;

/// Hardware type of the arp protocol.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct Hardware(u16);

impl Hardware {
    /// The contained hardware address is Ethernet address.
    pub const ETHERNET: Self = Self(1);

    /// Get the raw value.
    pub fn raw(&self) -> u16 {
        self.0
    }
}

impl From<u16> for Hardware {
    #[inline]
    fn from(value: u16) -> Hardware {
        Hardware(value)
    }
}

impl From<Hardware> for u16 {
    #[inline]
    fn from(value: Hardware) -> u16 {
        value.0
    }
}

/// Operation type of the arp protocol.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct Operation(u16);

impl Operation {
    /// Arp request.
    pub const REQUEST: Self = Self(1);
    /// Arp response.
    pub const REPLY: Self = Self(2);

    /// Get the raw value.
    pub fn raw(&self) -> u16 {
        self.0
    }
}

impl From<u16> for Operation {
    #[inline]
    fn from(value: u16) -> Operation {
        Operation(value)
    }
}

impl From<Operation> for u16 {
    #[inline]
    fn from(value: Operation) -> u16 {
        value.0
    }
}

/// A constant that defines the fixed byte length of the Arp protocol header.
pub const ARP_HEADER_LEN: usize = 28;

/// The fixed byte length of a complete Ethernet-framed Arp packet.
pub const ETHER_ARP_FRAME_LEN: usize = ETHER_HEADER_LEN + ARP_HEADER_LEN;

mod packet;
pub use packet::{
    build_arp_announcement, build_arp_packet, build_arp_probe, parse_arp_packet, ArpPacket,
    ArpParseError,
};
