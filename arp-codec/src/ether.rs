//! Ethernet framing types.

use core::fmt;

/// A constant that defines the fixed byte length of the Ethernet frame header.
pub const ETHER_HEADER_LEN: usize = 14;

/// The byte length of an Ethernet hardware address.
pub const ETHER_ADDR_LEN: usize = 6;

/// An enum-like type for representing Ethertype in Ethernet frame.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct EtherType(u16);

impl EtherType {
    /// Frame payload is Arp protocol.
    pub const ARP: Self = Self(0x0806);
    /// Frame payload is Ipv4 protocol.
    pub const IPV4: Self = Self(0x0800);

    /// Get the raw value.
    pub fn raw(&self) -> u16 {
        self.0
    }
}

impl From<u16> for EtherType {
    #[inline]
    fn from(value: u16) -> EtherType {
        EtherType(value)
    }
}

impl From<EtherType> for u16 {
    #[inline]
    fn from(value: EtherType) -> u16 {
        value.0
    }
}

/// A six-octet Ethernet II address.
#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Default)]
pub struct EtherAddr(pub [u8; 6]);

impl EtherAddr {
    /// The broadcast address.
    pub const BROADCAST: EtherAddr = EtherAddr([0xff; 6]);

    /// The all-zero address, used as the target hardware address of probe
    /// and announcement frames.
    pub const ZERO: EtherAddr = EtherAddr([0x00; 6]);

    /// Construct an Ethernet address from a sequence of octets, in big-endian.
    ///
    /// # Panics
    /// The function panics if `data` is not six octets long.
    pub fn from_bytes(data: &[u8]) -> EtherAddr {
        let mut bytes = [0; ETHER_ADDR_LEN];
        bytes.copy_from_slice(data);
        EtherAddr(bytes)
    }

    /// Return an Ethernet address as a sequence of octets, in big-endian.
    pub const fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Query whether the address is an unicast address.
    pub fn is_unicast(&self) -> bool {
        !(self.is_broadcast() || self.is_multicast())
    }

    /// Query whether this address is the broadcast address.
    pub fn is_broadcast(&self) -> bool {
        *self == Self::BROADCAST
    }

    /// Query whether the 'multicast' bit in the OUI is set.
    pub const fn is_multicast(&self) -> bool {
        self.0[0] & 0x01 != 0
    }

    /// Query whether the 'locally administered' bit in the OUI is set.
    pub const fn is_local(&self) -> bool {
        self.0[0] & 0x02 != 0
    }

    /// Parse a string with the form 'Aa:0b:Cc:11:02:33' into `EtherAddr`.
    pub fn parse_from<T: AsRef<str>>(s: T) -> Option<Self> {
        let mut bytes = [0; ETHER_ADDR_LEN];
        let mut groups = s.as_ref().split(':');
        for byte in bytes.iter_mut() {
            let group = groups.next()?;
            if group.len() != 2 {
                return None;
            }
            *byte = u8::from_str_radix(group, 16).ok()?;
        }
        if groups.next().is_some() {
            return None;
        }
        Some(EtherAddr(bytes))
    }
}

impl fmt::Display for EtherAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.0;
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5]
        )
    }
}
