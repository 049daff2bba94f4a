mod common;
use common::file_to_packet;

use arp_codec::arp::*;
use arp_codec::ether::*;
use arp_codec::ipv4::Ipv4Addr;

#[test]
fn arp_probe_packet_parsing() {
    let packet = file_to_packet("ArpProbePacket.dat");

    let arp_pkt = parse_arp_packet(&packet, packet.len()).unwrap();
    assert_eq!(arp_pkt.operation, Operation::REQUEST);
    assert_eq!(
        arp_pkt.sender_hardware_addr,
        EtherAddr::parse_from("00:1a:11:22:33:33").unwrap()
    );
    assert_eq!(arp_pkt.sender_protocol_addr, Ipv4Addr::UNSPECIFIED);
    assert_eq!(arp_pkt.target_hardware_addr, EtherAddr::ZERO);
    assert_eq!(arp_pkt.target_protocol_addr, Ipv4Addr::new(192, 168, 1, 2));
    assert!(arp_pkt.is_probe());
    assert!(!arp_pkt.is_announcement());
}

#[test]
fn arp_probe_packet_creation() {
    let packet = file_to_packet("ArpProbePacket.dat");

    let built = build_arp_probe(
        EtherAddr::parse_from("00:1a:11:22:33:33").unwrap(),
        Ipv4Addr::new(192, 168, 1, 2),
    );
    assert_eq!(built.len(), ETHER_ARP_FRAME_LEN);
    assert_eq!(&built[..], &packet[..]);
}

#[test]
fn arp_announcement_packet_creation() {
    let packet = file_to_packet("ArpAnnouncementPacket.dat");

    let built = build_arp_announcement(
        EtherAddr::parse_from("00:1a:11:22:33:33").unwrap(),
        Ipv4Addr::new(192, 168, 1, 2),
    );
    assert_eq!(&built[..], &packet[..]);

    let arp_pkt = parse_arp_packet(&built, built.len()).unwrap();
    assert!(arp_pkt.is_announcement());
    assert_eq!(arp_pkt.sender_protocol_addr, arp_pkt.target_protocol_addr);
}

#[test]
fn arp_reply_packet_parsing() {
    let packet = file_to_packet("ArpReplyPacket.dat");

    let arp_pkt = parse_arp_packet(&packet, packet.len()).unwrap();
    assert_eq!(arp_pkt.operation, Operation::REPLY);
    assert_eq!(
        arp_pkt.sender_hardware_addr,
        EtherAddr::parse_from("30:46:9a:23:fb:fa").unwrap()
    );
    assert_eq!(arp_pkt.sender_protocol_addr, Ipv4Addr::new(10, 0, 0, 138));
    assert_eq!(
        arp_pkt.target_hardware_addr,
        EtherAddr::parse_from("6c:f0:49:b2:de:6e").unwrap()
    );
    assert_eq!(arp_pkt.target_protocol_addr, Ipv4Addr::new(10, 0, 0, 1));
    assert!(!arp_pkt.is_probe());
    assert!(!arp_pkt.is_announcement());
}

#[test]
fn truncated_capture_is_rejected() {
    let packet = file_to_packet("ArpProbePacket.dat");

    for length in [0, 15, 21, 27, 41] {
        let res = parse_arp_packet(&packet, length);
        assert!(matches!(res, Err(ArpParseError::Truncated { .. })));
    }

    // A declared length past the end of the capture is truncation too, not a
    // read past the buffer.
    let res = parse_arp_packet(&packet[..27], packet.len());
    assert!(matches!(
        res,
        Err(ArpParseError::Truncated {
            needed: 42,
            got: 27
        })
    ));
}
