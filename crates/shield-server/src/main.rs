use anyhow::Context;
use clap::Parser;
use shield_config::ShieldConfig;
use shield_server::cli::{Cli, Commands};
use shield_server::{commands, config_warnings};

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("shield error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = ShieldConfig::load_with_dotenv().context("failed to load configuration")?;
    init_tracing(cli.quiet, cli.verbose, &config.general.log_level)?;
    config_warnings::warn_unconfigured(&config);

    match cli.command {
        Commands::Serve(args) => commands::serve::handle(&args, config).await,
        Commands::Analyze(args) => commands::analyze::handle(&args, &config).await,
    }
}

fn init_tracing(quiet: bool, verbose: bool, default_level: &str) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        default_level
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("SHIELD_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))
}
