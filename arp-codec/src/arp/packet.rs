// Ethernet-framed Arp packet layout, all multi-byte fields big-endian:
//
//   0..6    Ethernet destination address
//   6..12   Ethernet source address
//   12..14  Ethertype, always 0x0806
//   14..16  hardware type, always 1 (Ethernet)
//   16..18  protocol type, always 0x0800 (Ipv4)
//   18      hardware address length, always 6
//   19      protocol address length, always 4
//   20..22  operation
//   22..28  sender hardware address
//   28..32  sender protocol address
//   32..38  target hardware address
//   38..42  target protocol address

use bytes::{BufMut, Bytes, BytesMut};
use thiserror::Error;

use crate::ether::{EtherAddr, EtherType, ETHER_ADDR_LEN};
use crate::ipv4::{Ipv4Addr, IPV4_ADDR_LEN};

use super::{Hardware, Operation, ETHER_ARP_FRAME_LEN};

// Offset one past the operation field, i.e. the smallest window that still
// contains every fixed header field of the frame.
const ARP_OPER_END: usize = 22;

/// Errors returned by [`parse_arp_packet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArpParseError {
    /// The declared length cannot hold every fixed-offset field of an
    /// Ethernet-framed Arp packet.
    #[error("truncated arp frame: need {needed} bytes, got {got}")]
    Truncated {
        /// Byte length the rejected read required.
        needed: usize,
        /// Significant bytes actually available.
        got: usize,
    },
    /// The Ethertype field is not 0x0806.
    #[error("unexpected ethertype 0x{0:04x}")]
    EtherType(u16),
    /// The hardware type field is not 1 (Ethernet).
    #[error("unsupported hardware type {0}")]
    HardwareType(u16),
    /// The protocol type field is not 0x0800 (Ipv4).
    #[error("unsupported protocol type 0x{0:04x}")]
    ProtocolType(u16),
    /// The address length octets are not 6 and 4.
    #[error("unexpected address lengths: hardware {hardware}, protocol {protocol}")]
    AddrLen {
        /// Value of the hardware address length octet.
        hardware: u8,
        /// Value of the protocol address length octet.
        protocol: u8,
    },
}

/// An Arp packet parsed from an Ethernet frame.
///
/// Only the Arp payload fields are retained. The Ethernet destination and
/// source addresses and the Ethertype are framing; they are validated during
/// parsing and then discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArpPacket {
    /// Arp operation.
    pub operation: Operation,
    /// Sender hardware address.
    pub sender_hardware_addr: EtherAddr,
    /// Sender protocol address.
    pub sender_protocol_addr: Ipv4Addr,
    /// Target hardware address.
    pub target_hardware_addr: EtherAddr,
    /// Target protocol address.
    pub target_protocol_addr: Ipv4Addr,
}

impl ArpPacket {
    /// Query whether this packet is an address probe: a request whose sender
    /// protocol address is unspecified and whose target protocol address is
    /// not (RFC 5227 2.1.1).
    pub fn is_probe(&self) -> bool {
        self.operation == Operation::REQUEST
            && self.sender_protocol_addr.is_unspecified()
            && !self.target_protocol_addr.is_unspecified()
    }

    /// Query whether this packet is an address announcement: a request whose
    /// sender protocol address equals its target protocol address (RFC 5227
    /// 2.3).
    pub fn is_announcement(&self) -> bool {
        self.operation == Operation::REQUEST
            && !self.sender_protocol_addr.is_unspecified()
            && self.sender_protocol_addr == self.target_protocol_addr
    }
}

/// Build an Ethernet-framed Arp packet from the supplied field values.
///
/// The output is always exactly [`ETHER_ARP_FRAME_LEN`] bytes, with no
/// padding and no frame check sequence. `sender_mac` is written both as the
/// Ethernet source address and as the sender hardware address of the Arp
/// payload. The address fields are copied as-is; in particular `target_mac`
/// is not forced to [`EtherAddr::ZERO`] even though probe and announcement
/// frames conventionally carry it.
pub fn build_arp_packet(
    dest_mac: EtherAddr,
    sender_mac: EtherAddr,
    target_ip: Ipv4Addr,
    target_mac: EtherAddr,
    sender_ip: Ipv4Addr,
    operation: Operation,
) -> Bytes {
    let mut buf = BytesMut::with_capacity(ETHER_ARP_FRAME_LEN);
    buf.put_slice(dest_mac.as_bytes());
    buf.put_slice(sender_mac.as_bytes());
    buf.put_u16(EtherType::ARP.raw());
    buf.put_u16(Hardware::ETHERNET.raw());
    buf.put_u16(EtherType::IPV4.raw());
    buf.put_u8(ETHER_ADDR_LEN as u8);
    buf.put_u8(IPV4_ADDR_LEN as u8);
    buf.put_u16(operation.raw());
    buf.put_slice(sender_mac.as_bytes());
    buf.put_slice(&sender_ip.octets());
    buf.put_slice(target_mac.as_bytes());
    buf.put_slice(&target_ip.octets());
    buf.freeze()
}

/// Build an Arp probe for `target_ip` (RFC 5227 2.1): a broadcast request
/// with an unspecified sender protocol address and an all-zero target
/// hardware address.
pub fn build_arp_probe(sender_mac: EtherAddr, target_ip: Ipv4Addr) -> Bytes {
    build_arp_packet(
        EtherAddr::BROADCAST,
        sender_mac,
        target_ip,
        EtherAddr::ZERO,
        Ipv4Addr::UNSPECIFIED,
        Operation::REQUEST,
    )
}

/// Build an Arp announcement for `ip` (RFC 5227 2.3): a broadcast request
/// with sender and target protocol addresses both set to the claimed
/// address.
pub fn build_arp_announcement(sender_mac: EtherAddr, ip: Ipv4Addr) -> Bytes {
    build_arp_packet(
        EtherAddr::BROADCAST,
        sender_mac,
        ip,
        EtherAddr::ZERO,
        ip,
        Operation::REQUEST,
    )
}

/// Parse an Ethernet-framed Arp packet from the first `length` bytes of
/// `data`.
///
/// `length` states how many leading bytes of `data` are significant; the
/// caller may pass a receive buffer longer than the frame it holds. Every
/// field read is bounds-checked against both `length` and the physical
/// buffer, so a declared length that overstates the buffer is rejected as
/// truncation rather than read past.
///
/// The framing constants (Ethertype, hardware and protocol types, address
/// length octets) are checked strictly; an [`ArpPacket`] is returned only
/// when every fixed-offset field could be read.
pub fn parse_arp_packet(data: &[u8], length: usize) -> Result<ArpPacket, ArpParseError> {
    let frame = &data[..length.min(data.len())];

    if frame.len() < ARP_OPER_END {
        return Err(ArpParseError::Truncated {
            needed: ARP_OPER_END,
            got: frame.len(),
        });
    }

    let ethertype = u16::from_be_bytes((&frame[12..14]).try_into().unwrap());
    if EtherType::from(ethertype) != EtherType::ARP {
        return Err(ArpParseError::EtherType(ethertype));
    }
    let hardware = u16::from_be_bytes((&frame[14..16]).try_into().unwrap());
    if Hardware::from(hardware) != Hardware::ETHERNET {
        return Err(ArpParseError::HardwareType(hardware));
    }
    let protocol = u16::from_be_bytes((&frame[16..18]).try_into().unwrap());
    if EtherType::from(protocol) != EtherType::IPV4 {
        return Err(ArpParseError::ProtocolType(protocol));
    }
    if frame[18] != ETHER_ADDR_LEN as u8 || frame[19] != IPV4_ADDR_LEN as u8 {
        return Err(ArpParseError::AddrLen {
            hardware: frame[18],
            protocol: frame[19],
        });
    }

    if frame.len() < ETHER_ARP_FRAME_LEN {
        return Err(ArpParseError::Truncated {
            needed: ETHER_ARP_FRAME_LEN,
            got: frame.len(),
        });
    }

    let operation = Operation::from(u16::from_be_bytes((&frame[20..22]).try_into().unwrap()));
    let sender_protocol_addr: [u8; IPV4_ADDR_LEN] = (&frame[28..32]).try_into().unwrap();
    let target_protocol_addr: [u8; IPV4_ADDR_LEN] = (&frame[38..42]).try_into().unwrap();

    Ok(ArpPacket {
        operation,
        sender_hardware_addr: EtherAddr::from_bytes(&frame[22..28]),
        sender_protocol_addr: Ipv4Addr::from(sender_protocol_addr),
        target_hardware_addr: EtherAddr::from_bytes(&frame[32..38]),
        target_protocol_addr: Ipv4Addr::from(target_protocol_addr),
    })
}
