//! Ipv4 protocol.

pub use core::net::Ipv4Addr;

/// The byte length of an Ipv4 address on the wire.
pub const IPV4_ADDR_LEN: usize = 4;
