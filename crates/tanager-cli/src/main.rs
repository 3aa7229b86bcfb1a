use anyhow::Context;
use clap::Parser;

mod cli;

fn main() {
    if let Err(error) = run() {
        eprintln!("tanager error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    let config = tanager_config::TanagerConfig::load_with_overrides(&cli.dir, cli.debug)
        .context("failed to load tanager configuration")?;
    init_tracing(config.server.debug)?;

    if !config.data.root.is_dir() {
        tracing::warn!(
            root = %config.data.root.display(),
            "data directory does not exist; the project list will be empty"
        );
    }

    tanager_web::serve(&config).context("dashboard server failed")
}

fn init_tracing(debug: bool) -> anyhow::Result<()> {
    let level = if debug { "debug" } else { "info" };

    let filter = tracing_subscriber::EnvFilter::try_from_env("TANAGER_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
