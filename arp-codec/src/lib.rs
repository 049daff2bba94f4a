#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]

//! Provide utilities for building and parsing the ARP frames used by IPv4
//! address-conflict detection.
//!
//! Before an IPv4 stack claims an address it sends ARP *probes* (requests
//! with an unspecified sender address) to check whether the address is
//! already taken, and ARP *announcements* (requests with sender address
//! equal to target address) to assert ownership afterwards, as described in
//! RFC 5227. This crate covers exactly the wire side of that exchange: it
//! serializes an Ethernet-framed ARP request into its fixed 42-byte layout
//! and parses received frames back into an [`arp::ArpPacket`], rejecting
//! truncated or malformed input.
//!
//! Both operations are pure and stateless; transmitting the bytes and
//! deciding when to probe or announce belong to the caller.

pub mod arp;
pub mod ether;
pub mod ipv4;
