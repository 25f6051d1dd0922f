//! Reverse-DNS representer
//!
//! Converts an IPv4/IPv6 literal to its canonical `in-addr.arpa` /
//! `ip6.arpa` reverse name, used both to decide whether a dictionary
//! outer key is an address (PTR owner) and to compute the stored owner
//! name for it.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::error::ReverseNameError;

/// True if `s` parses as an IPv4 or IPv6 literal.
pub fn is_ip_literal(s: &str) -> bool {
    s.parse::<IpAddr>().is_ok()
}

/// Compute the canonical reverse-arpa name for an IPv4/IPv6 literal.
///
/// Unchanged if `addr` is already itself a reverse-arpa literal is not
/// attempted here: callers only ever pass a raw address literal, per the
/// dictionary builder's owner-normalization step.
pub fn reverse_name(addr: &str) -> Result<String, ReverseNameError> {
    match addr.parse::<IpAddr>() {
        Ok(IpAddr::V4(v4)) => Ok(reverse_v4(v4)),
        Ok(IpAddr::V6(v6)) => Ok(reverse_v6(v6)),
        Err(_) => Err(ReverseNameError::InvalidIpAddress(addr.to_string())),
    }
}

fn reverse_v4(addr: Ipv4Addr) -> String {
    let [a, b, c, d] = addr.octets();
    format!("{}.{}.{}.{}.in-addr.arpa", d, c, b, a)
}

fn reverse_v6(addr: Ipv6Addr) -> String {
    let mut nibbles = String::with_capacity(63);
    for byte in addr.octets().iter().rev() {
        nibbles.push_str(&format!("{:x}.{:x}.", byte & 0x0f, byte >> 4));
    }
    nibbles.push_str("ip6.arpa");
    nibbles
}
