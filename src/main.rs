use clap::Parser;
use tracing::error;

use ordercast::cli::{self, output, CheckCommand, Cli, Commands};
use ordercast::config::LoggingConfig;
use ordercast::error::Error;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let guard = match logging.init() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            std::process::exit(1);
        }
    };

    let result = match &cli.command {
        Commands::Place(args) => cli::place::execute(args).await,
        Commands::Check(CheckCommand::Config) => cli::check::execute_config(),
        Commands::Check(CheckCommand::Connection) => cli::check::execute_connection().await,
    };

    let code = match result {
        Ok(()) => 0,
        Err(Error::Validation(err)) => {
            error!(%err, "validation failed");
            output::error(&format!("Validation error: {err}"));
            1
        }
        Err(err) => {
            error!(%err, "command failed");
            output::error(&err.to_string());
            output::note(&format!(
                "Check {} for details",
                logging.dir.join("ordercast.*.log").display()
            ));
            1
        }
    };

    // Dropping the guard flushes buffered log writes before the process
    // exits; process::exit would otherwise skip it.
    drop(guard);
    std::process::exit(code);
}
