//! csvscope CLI - explore CSV files in the terminal or the browser.

mod cli;
mod commands;
mod server;
mod web;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let config = cli.thresholds.explorer_config();

    let result = match cli.command {
        Commands::Serve {
            file,
            port,
            no_open,
            max_upload_mb,
        } => commands::serve::run(file, port, no_open, max_upload_mb, config),

        Commands::Inspect { file, json, rows } => {
            commands::inspect::run(file, json, rows, config, cli.verbose)
        }

        Commands::Columns { file, json } => commands::columns::run(file, json, config),

        Commands::Plot {
            file,
            kind,
            x,
            y,
            output,
        } => commands::plot::run(file, kind, x, y, output, config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr. `RUST_LOG` wins over `--verbose`.
fn setup_logging(verbose: bool) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("csvscope={level},csvscope_cli={level}")));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}
