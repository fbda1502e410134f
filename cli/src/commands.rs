pub mod annotation;
pub mod argument;

use clap::{ArgAction, Parser, Subcommand};
use nodeip_common::config::CLOUD_PROVIDER_NONE;

#[derive(Parser)]
#[command(name = "nodeip")]
#[command(about = "Check node IP settings the way the node agent reads them.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Hide headers and notes, print addresses only
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a --node-ip argument value
    #[command(aliases = ["arg", "a"])]
    Argument {
        /// Comma-separated IP list, e.g. "10.0.0.5,fd00::5"
        value: String,
        /// Cloud provider the node runs with ("" for none, "external", or a legacy name)
        #[arg(long, default_value = CLOUD_PROVIDER_NONE)]
        cloud_provider: String,
        /// Allow dual-stack node IPs with legacy cloud providers
        #[arg(long)]
        allow_cloud_dual_stack: bool,
    },
    /// Parse a provided-node-IP annotation value
    #[command(aliases = ["ann", "n"])]
    Annotation { value: String },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
