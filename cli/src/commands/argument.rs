use anyhow::Context;
use nodeip_common::config::{Config, DualStackPolicy};
use nodeip_core::parse_node_ip_argument_with_policy;
use tracing::{debug, info};

use crate::terminal::print;

pub fn argument(value: &str, policy: &DualStackPolicy, cfg: &Config) -> anyhow::Result<()> {
    debug!(
        cloud_provider = %policy.cloud_provider,
        allow_cloud_dual_stack = policy.allow_cloud_dual_stack,
        dual_stack_supported = policy.dual_stack_supported(),
        "checking --node-ip"
    );

    let ips = parse_node_ip_argument_with_policy(value, policy).with_context(|| {
        format!("rejected --node-ip for cloud provider {}", policy.cloud_provider)
    })?;

    if ips.is_empty() {
        if cfg.quiet == 0 {
            info!("No usable address in --node-ip, the node IP will be auto-detected");
        }
        return Ok(());
    }

    print::header("node ip", cfg.quiet);
    print::addresses(&ips);

    if ips.len() == 2 && cfg.quiet == 0 {
        info!("Dual-stack node IPs accepted");
    }
    Ok(())
}
