use std::fmt;

/// Where a node IP setting came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeIpSource {
    /// The `--node-ip` command line argument.
    Argument,
    /// The provided-node-IP node annotation.
    Annotation,
}

impl fmt::Display for NodeIpSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeIpSource::Argument => f.write_str("--node-ip"),
            NodeIpSource::Annotation => f.write_str("node IP annotation"),
        }
    }
}

/// Rejection of a node IP setting. `value` is always the raw, unsplit input.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NodeIpError {
    /// Too many addresses, or two addresses of the same family.
    #[error("invalid {origin} {value:?}: must contain either a single IP or a dual-stack pair of IPs")]
    InvalidArity { origin: NodeIpSource, value: String },
    /// A dual-stack pair containing `0.0.0.0` or `::`.
    #[error("dual-stack {origin} {value:?} cannot include '0.0.0.0' or '::'")]
    UnspecifiedNotAllowed { origin: NodeIpSource, value: String },
    /// A well-formed dual-stack pair that the current policy refuses.
    #[error("dual-stack {origin} {value:?} not supported in this configuration")]
    DualStackUnsupported { origin: NodeIpSource, value: String },
    /// A token that is not an IP address.
    #[error("could not parse {origin} {value:?} as an IP address")]
    ParseError { origin: NodeIpSource, value: String },
}

impl NodeIpError {
    pub(crate) fn invalid_arity(origin: NodeIpSource, value: &str) -> Self {
        NodeIpError::InvalidArity {
            origin,
            value: value.to_string(),
        }
    }

    pub(crate) fn unspecified_not_allowed(origin: NodeIpSource, value: &str) -> Self {
        NodeIpError::UnspecifiedNotAllowed {
            origin,
            value: value.to_string(),
        }
    }

    pub(crate) fn dual_stack_unsupported(origin: NodeIpSource, value: &str) -> Self {
        NodeIpError::DualStackUnsupported {
            origin,
            value: value.to_string(),
        }
    }

    pub(crate) fn parse_error(origin: NodeIpSource, value: &str) -> Self {
        NodeIpError::ParseError {
            origin,
            value: value.to_string(),
        }
    }

    pub fn origin(&self) -> NodeIpSource {
        match self {
            NodeIpError::InvalidArity { origin, .. }
            | NodeIpError::UnspecifiedNotAllowed { origin, .. }
            | NodeIpError::DualStackUnsupported { origin, .. }
            | NodeIpError::ParseError { origin, .. } => *origin,
        }
    }
}
