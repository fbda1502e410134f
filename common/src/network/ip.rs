//! # Node IP Literals
//!
//! Interpretation of the individual tokens found in node IP settings.
//!
//! Both the `--node-ip` argument and the provided-node-IP annotation are
//! comma-separated lists of IP literals. This module owns what a single
//! literal may look like:
//! * Canonical IPv4 (`1.2.3.4`) and IPv6 (`abcd::ef01`).
//! * IPv4 octets with leading zeros, read as decimal (`01.2.3.004`).
//! * IPv6 groups with leading zeros (`abcd:0abc:00ab::1`).
//! * IPv6 with an embedded dotted quad tail (`::ffff:010.0.0.1`).
//!
//! IPv4-mapped IPv6 addresses are returned in their IPv4 form.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use tracing::trace;

/// Address family of a node IP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpFamily {
    V4,
    V6,
}

impl fmt::Display for IpFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpFamily::V4 => f.write_str("IPv4"),
            IpFamily::V6 => f.write_str("IPv6"),
        }
    }
}

pub fn ip_family(ip: &IpAddr) -> IpFamily {
    match ip {
        IpAddr::V4(_) => IpFamily::V4,
        IpAddr::V6(_) => IpFamily::V6,
    }
}

/// `0.0.0.0` or `::`.
pub fn is_unspecified(ip: &IpAddr) -> bool {
    ip.is_unspecified()
}

/// True when the two addresses belong to different families.
pub fn is_dual_stack_pair(first: &IpAddr, second: &IpAddr) -> bool {
    ip_family(first) != ip_family(second)
}

/// Splits a node IP setting on commas. Tokens are returned untouched.
pub fn split_tokens(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',')
}

/// Interprets a single token as an IP address.
///
/// Surrounding whitespace is not tolerated here; callers that accept it trim
/// before calling. Returns `None` for anything that is not an IP literal,
/// including CIDR blocks and zoned addresses.
pub fn parse_ip_sloppy(token: &str) -> Option<IpAddr> {
    let ip = if token.contains(':') {
        IpAddr::V6(parse_ipv6_sloppy(token)?)
    } else {
        IpAddr::V4(parse_ipv4_sloppy(token)?)
    };

    Some(ip.to_canonical())
}

fn parse_ipv4_sloppy(s: &str) -> Option<Ipv4Addr> {
    let mut octets = [0u8; 4];
    let mut parts = s.split('.');

    for octet in octets.iter_mut() {
        *octet = parse_octet(parts.next()?)?;
    }

    if parts.next().is_some() {
        return None;
    }

    Some(Ipv4Addr::from(octets))
}

/// Decimal octet, leading zeros allowed.
fn parse_octet(s: &str) -> Option<u8> {
    if s.is_empty() {
        return None;
    }

    s.bytes().try_fold(0u8, |acc, b| {
        if !b.is_ascii_digit() {
            return None;
        }
        acc.checked_mul(10)?.checked_add(b - b'0')
    })
}

fn parse_ipv6_sloppy(s: &str) -> Option<Ipv6Addr> {
    if let Ok(addr) = s.parse::<Ipv6Addr>() {
        return Some(addr);
    }

    // std rejects leading zeros in an embedded dotted quad, so rewrite it.
    let (head, tail) = s.rsplit_once(':')?;
    if !tail.contains('.') {
        return None;
    }

    let v4 = parse_ipv4_sloppy(tail)?;
    let rewritten = format!("{head}:{v4}");
    trace!(original = s, rewritten = %rewritten, "normalized embedded IPv4 tail");

    rewritten.parse::<Ipv6Addr>().ok()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
