mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use veil_config::Config;

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();
    let config = Config::load()?;
    let redactor = commands::build_redactor(&cli.options, &config)?;

    match cli.command {
        cli::Commands::Redact { path, json, strict } => {
            commands::redact::handle(&redactor, path, json, strict)
        }
        cli::Commands::Batch { paths } => commands::redact::batch(&redactor, paths),
        cli::Commands::Rules { all } => commands::rules::list(&redactor, all),
        cli::Commands::Export { path } => commands::rules::export(&redactor, &path),
    }
}
