//! ontocheck CLI main entry point

use anyhow::Result;
use clap::Parser;
use ontocheck_cli::{Cli, CommandExecutor};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let executor = CommandExecutor::new();
    let result = executor.execute(cli.command)?;

    if result.success {
        std::process::exit(0);
    } else {
        std::process::exit(1);
    }
}
