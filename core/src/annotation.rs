//! # Provided Node IP Annotation
//!
//! Parses the node IP recorded on the node object. The annotation is written
//! by the node agent itself, so anything unexpected is an error rather than
//! something to skip over.

use std::net::IpAddr;

use nodeip_common::network::ip;
use tracing::debug;

use crate::error::{NodeIpError, NodeIpSource};

/// Annotation key under which the node agent records its `--node-ip`.
pub const PROVIDED_NODE_IP_ANNOTATION: &str = "alpha.kubernetes.io/provided-node-ip";

const ORIGIN: NodeIpSource = NodeIpSource::Annotation;

/// Parses a provided-node-IP annotation value into its single address.
///
/// Every comma-separated entry must be an exact IP literal (no surrounding
/// whitespace). Dual-stack pairs are never accepted, but they get their own
/// error so a hand-edited annotation is easy to diagnose.
pub fn parse_node_ip_annotation(raw: &str) -> Result<IpAddr, NodeIpError> {
    let ips = ip::split_tokens(raw)
        .map(|token| {
            ip::parse_ip_sloppy(token).ok_or_else(|| NodeIpError::parse_error(ORIGIN, raw))
        })
        .collect::<Result<Vec<IpAddr>, _>>()?;

    match ips.as_slice() {
        [ip] => {
            debug!(%ip, "parsed node IP annotation");
            Ok(*ip)
        }
        [first, second] if ip::is_dual_stack_pair(first, second) => {
            Err(NodeIpError::dual_stack_unsupported(ORIGIN, raw))
        }
        _ => Err(NodeIpError::invalid_arity(ORIGIN, raw)),
    }
}
