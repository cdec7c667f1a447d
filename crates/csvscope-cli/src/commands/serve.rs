//! Serve command - open the web UI for interactive exploration.

use std::path::PathBuf;

use colored::Colorize;
use csvscope::{Explorer, ExplorerConfig};

use crate::server::{app, state::AppState};

const BYTES_PER_MB: usize = 1024 * 1024;

pub fn run(
    file: Option<PathBuf>,
    port: u16,
    no_open: bool,
    max_upload_mb: usize,
    config: ExplorerConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let explorer = Explorer::with_config(config);
    let max_upload_bytes = max_upload_mb.saturating_mul(BYTES_PER_MB);

    // Preload the file given on the command line, if any
    let state = match &file {
        Some(path) => {
            let loaded = explorer.load_file(path)?;
            AppState::with_dataset(explorer, loaded, max_upload_bytes)
        }
        None => AppState::new(explorer, max_upload_bytes),
    };

    let url = format!("http://localhost:{}", port);
    println!();
    println!(
        "{} {}",
        "Starting csvscope at".cyan().bold(),
        url.white().bold()
    );
    println!();
    match &file {
        Some(path) => println!("  File: {}", path.display()),
        None => println!("  File: {}", "none, upload one in the browser".dimmed()),
    }
    println!("  Upload limit: {} MB", max_upload_mb);
    println!();
    println!("Press {} to stop the server", "Ctrl+C".yellow().bold());
    println!();

    if !no_open {
        if let Err(e) = open::that(&url) {
            eprintln!("{} Could not open browser: {}", "Warning:".yellow(), e);
        }
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(app::run_server(state, port))?;

    println!("{}", "Shutting down...".yellow());
    Ok(())
}
