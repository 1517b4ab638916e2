use super::args::{Cli, Commands};
use super::handlers;
use super::handlers::split::SplitOptions;
use crate::config::Config;
use anyhow::Result;
use tracing::debug;

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Split {
            input,
            output_dir,
            output_format,
            categories,
            skip_empty,
        } => {
            let config = Config::load(cli.config.as_deref())?;
            debug!(?config, "loaded config");

            handlers::split::handle(
                &input,
                SplitOptions {
                    output_dir,
                    output_format,
                    categories,
                    skip_empty,
                },
                &config,
                cli.format,
            )
        }

        Commands::Inspect { input, lines } => handlers::inspect::handle(&input, lines, cli.format),
    }
}
