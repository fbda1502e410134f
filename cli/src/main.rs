mod commands;
mod terminal;

use commands::{CommandLine, Commands, annotation, argument};
use nodeip_common::config::{Config, DualStackPolicy};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose)?;

    let cfg = Config {
        quiet: commands.quiet,
        no_color: commands.no_color,
    };
    print::initialize(cfg.no_color);

    match commands.command {
        Commands::Argument {
            value,
            cloud_provider,
            allow_cloud_dual_stack,
        } => {
            let policy = DualStackPolicy::new(&cloud_provider, allow_cloud_dual_stack);
            argument::argument(&value, &policy, &cfg)
        }
        Commands::Annotation { value } => annotation::annotation(&value, &cfg),
    }
}
