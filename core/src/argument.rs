//! # `--node-ip` Argument
//!
//! Parses the value an operator passes on the command line.
//!
//! The value is human-typed, so it is forgiving: whitespace around entries
//! is trimmed and entries that are not IP addresses are skipped. What is left
//! must be a single address or a dual-stack (IPv4 + IPv6) pair, and a pair is
//! only accepted when the cloud provider policy allows it.

use std::net::IpAddr;

use nodeip_common::config::DualStackPolicy;
use nodeip_common::network::ip;
use tracing::debug;

use crate::error::{NodeIpError, NodeIpSource};

const ORIGIN: NodeIpSource = NodeIpSource::Argument;

/// Parses a `--node-ip` value for the given cloud provider name.
///
/// Returns zero, one or two addresses in the order they appear in `raw`.
pub fn parse_node_ip_argument(
    raw: &str,
    cloud_provider: &str,
    allow_cloud_dual_stack: bool,
) -> Result<Vec<IpAddr>, NodeIpError> {
    let policy = DualStackPolicy::new(cloud_provider, allow_cloud_dual_stack);
    parse_node_ip_argument_with_policy(raw, &policy)
}

/// Same as [`parse_node_ip_argument`] with an already built policy.
pub fn parse_node_ip_argument_with_policy(
    raw: &str,
    policy: &DualStackPolicy,
) -> Result<Vec<IpAddr>, NodeIpError> {
    if raw.is_empty() {
        return Ok(Vec::new());
    }

    let ips: Vec<IpAddr> = ip::split_tokens(raw)
        .map(str::trim)
        .filter_map(|token| {
            let parsed = ip::parse_ip_sloppy(token);
            if parsed.is_none() {
                debug!(token, "ignoring --node-ip entry that is not an IP address");
            }
            parsed
        })
        .collect();

    match ips.len() {
        0 | 1 => {}
        2 => validate_dual_stack(raw, &ips[0], &ips[1], policy)?,
        _ => return Err(NodeIpError::invalid_arity(ORIGIN, raw)),
    }

    debug!(?ips, cloud_provider = %policy.cloud_provider, "parsed --node-ip");
    Ok(ips)
}

/// The policy check runs before the unspecified check, so a refused pair
/// reports the policy rather than its contents.
fn validate_dual_stack(
    raw: &str,
    first: &IpAddr,
    second: &IpAddr,
    policy: &DualStackPolicy,
) -> Result<(), NodeIpError> {
    if !ip::is_dual_stack_pair(first, second) {
        return Err(NodeIpError::invalid_arity(ORIGIN, raw));
    }

    if !policy.dual_stack_supported() {
        return Err(NodeIpError::dual_stack_unsupported(ORIGIN, raw));
    }

    if ip::is_unspecified(first) || ip::is_unspecified(second) {
        return Err(NodeIpError::unspecified_not_allowed(ORIGIN, raw));
    }

    Ok(())
}
