use std::fmt;

/// Cloud provider name meaning "no cloud provider".
pub const CLOUD_PROVIDER_NONE: &str = "";
/// Cloud provider name for an out-of-tree (external) cloud controller.
pub const CLOUD_PROVIDER_EXTERNAL: &str = "external";

/// The cloud provider a node is configured with.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CloudProvider {
    /// No cloud provider at all.
    #[default]
    None,
    /// Node addresses are managed by an external cloud controller.
    External,
    /// Any other, legacy in-tree, provider (e.g. `gce`).
    Legacy(String),
}

impl From<&str> for CloudProvider {
    fn from(name: &str) -> Self {
        match name {
            CLOUD_PROVIDER_NONE => CloudProvider::None,
            CLOUD_PROVIDER_EXTERNAL => CloudProvider::External,
            other => CloudProvider::Legacy(other.to_string()),
        }
    }
}

impl fmt::Display for CloudProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CloudProvider::None => f.write_str("<none>"),
            CloudProvider::External => f.write_str(CLOUD_PROVIDER_EXTERNAL),
            CloudProvider::Legacy(name) => f.write_str(name),
        }
    }
}

/// Decides whether a dual-stack `--node-ip` is acceptable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DualStackPolicy {
    pub cloud_provider: CloudProvider,
    /// Operator override allowing dual-stack with any cloud provider.
    pub allow_cloud_dual_stack: bool,
}

impl DualStackPolicy {
    pub fn new(cloud_provider: &str, allow_cloud_dual_stack: bool) -> Self {
        Self {
            cloud_provider: CloudProvider::from(cloud_provider),
            allow_cloud_dual_stack,
        }
    }

    pub fn dual_stack_supported(&self) -> bool {
        match self.cloud_provider {
            CloudProvider::None | CloudProvider::External => true,
            CloudProvider::Legacy(_) => self.allow_cloud_dual_stack,
        }
    }
}

pub struct Config {
    /// Suppresses headers and summaries. Parsed addresses are always printed.
    pub quiet: u8,
    pub no_color: bool,
}
