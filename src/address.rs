//! Node address validation and renaming.
//!
//! mgen identifies endpoints by dotted-quad IPv4 addresses; the D3.js graph
//! wants flat node names. A valid `a.b.c.d` becomes `mgen.a-b-c-d`.

use std::net::Ipv4Addr;

/// Canonical node identifier in the output graph, `mgen.a-b-c-d` form
pub type NodeName = String;

/// Check that a string is a valid dotted-quad IPv4 address: exactly four
/// dot-separated decimal components, each in 0-255, no extra characters.
pub fn is_valid_node_address(addr: &str) -> bool {
    addr.parse::<Ipv4Addr>().is_ok()
}

/// Convert a validated `nnn.nnn.nnn.nnn` address to its `mgen.nnn-nnn-nnn-nnn`
/// node name. Returns `None` if the address is not a valid dotted quad.
///
/// The transform is deterministic and injective over valid addresses: every
/// distinct IP maps to a distinct name.
pub fn node_name(addr: &str) -> Option<NodeName> {
    let ip: Ipv4Addr = addr.parse().ok()?;
    let [a, b, c, d] = ip.octets();
    Some(format!("mgen.{}-{}-{}-{}", a, b, c, d))
}
