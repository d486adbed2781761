use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use greetly::config::{self, Config};
use greetly::logging;
use greetly::ui::runtime;

/// Three-screen greeting demo for the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Path to the config file (defaults to the platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the UI tick cadence in milliseconds.
    #[arg(long)]
    tick_rate: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match cli.config.clone().or_else(config::default_path) {
        Some(path) => config::load_from(&path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(tick_rate) = cli.tick_rate {
        config.tick_rate_ms = tick_rate;
    }

    logging::init(config.log_filter.as_deref());
    tracing::info!(tick_rate_ms = config.tick_rate_ms, "starting");

    runtime::run(&config).context("terminal UI failed")?;

    tracing::info!("clean exit");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn tick_rate_override_parses() {
        let cli = Cli::parse_from(["greetly", "--tick-rate", "100"]);
        assert_eq!(cli.tick_rate, Some(100));
        assert_eq!(cli.config, None);
    }
}
