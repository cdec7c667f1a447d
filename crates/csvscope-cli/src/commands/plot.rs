//! Plot command - build one chart figure and write it as JSON.

use std::path::PathBuf;

use colored::Colorize;
use csvscope::{ChartKind, ChartRequest, Explorer, ExplorerConfig};

pub fn run(
    file: PathBuf,
    kind: ChartKind,
    x: Option<String>,
    y: Option<String>,
    output: Option<PathBuf>,
    config: ExplorerConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let explorer = Explorer::with_config(config);
    let loaded = explorer.load_file(&file)?;

    let request = ChartRequest { kind, x, y };
    let Some(figure) = explorer.plot(&loaded.dataset, &request)? else {
        eprintln!(
            "{} {} needs {} from the offered columns; nothing drawn. See 'csvscope columns {}'.",
            "Skipped:".yellow(),
            kind.label(),
            if kind.requires_y() { "an X and a Y column" } else { "an X column" },
            file.display()
        );
        return Ok(());
    };

    let json = serde_json::to_string_pretty(&figure)?;
    match output {
        Some(path) => {
            std::fs::write(&path, json)?;
            println!(
                "{} {} -> {}",
                "Wrote".green(),
                figure.title,
                path.display()
            );
        }
        None => println!("{}", json),
    }

    Ok(())
}
