//! Columns command - classification and per-chart axis options.

use std::path::PathBuf;

use colored::Colorize;
use csvscope::{Explorer, ExplorerConfig};

pub fn run(
    file: PathBuf,
    json_output: bool,
    config: ExplorerConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let explorer = Explorer::with_config(config);
    let loaded = explorer.load_file(&file)?;
    let classification = explorer.classify(&loaded.dataset);
    let options = explorer.axis_options(&loaded.dataset);

    if json_output {
        let output = serde_json::json!({
            "file": loaded.source.file,
            "classification": classification,
            "charts": options,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let thresholds = explorer.config().classifier;
    println!(
        "{} {} (categorical < {}, cardinal > {})",
        "Columns of".cyan().bold(),
        loaded.source.file.white(),
        thresholds.categorical_threshold,
        thresholds.cardinal_threshold
    );
    println!();
    println!("  {:<12} {}", "Categorical:".green(), list(&classification.categorical));
    println!("  {:<12} {}", "Numeric:".blue(), list(&classification.numeric));
    println!("  {:<12} {}", "Cardinal:".yellow(), list(&classification.cardinal));
    println!();

    println!("{}", "Chart axes".bold());
    for option in &options {
        print!("  {:<14} x: {}", option.kind.label(), list(&option.x));
        if let Some(y) = &option.y {
            print!("  y: {}", list(y));
        }
        println!();
    }

    Ok(())
}

fn list(names: &[String]) -> String {
    if names.is_empty() {
        "-".to_string()
    } else {
        names.join(", ")
    }
}
