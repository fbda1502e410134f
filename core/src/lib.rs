pub mod annotation;
pub mod argument;
pub mod error;

pub use annotation::{PROVIDED_NODE_IP_ANNOTATION, parse_node_ip_annotation};
pub use argument::{parse_node_ip_argument, parse_node_ip_argument_with_policy};
pub use error::{NodeIpError, NodeIpSource};
