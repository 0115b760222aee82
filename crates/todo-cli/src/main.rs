use anyhow::Context;
use clap::Parser;

use todo_config::TodoConfig;
use todo_db::service::TaskService;

mod cli;
mod shell;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("todo error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = TodoConfig::load_with_dotenv().context("failed to load configuration")?;
    let service = TaskService::open(&config.database)
        .await
        .context("error connecting to database")?;
    tracing::info!(remote = service.db().is_remote(), "storage ready");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    shell::Shell::new(service, stdin.lock(), stdout.lock())
        .run()
        .await
}

/// Logs go to stderr so they never interleave with the menu on stdout.
fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("TODO_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
