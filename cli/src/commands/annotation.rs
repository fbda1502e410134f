use anyhow::Context;
use nodeip_common::config::Config;
use nodeip_core::{PROVIDED_NODE_IP_ANNOTATION, parse_node_ip_annotation};

use crate::terminal::print;

pub fn annotation(value: &str, cfg: &Config) -> anyhow::Result<()> {
    let ip = parse_node_ip_annotation(value)
        .with_context(|| format!("invalid {PROVIDED_NODE_IP_ANNOTATION} annotation"))?;

    print::header("annotated node ip", cfg.quiet);
    print::addresses(&[ip]);
    Ok(())
}
