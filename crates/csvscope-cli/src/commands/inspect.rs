//! Inspect command - head, column information and statistics of a CSV file.

use std::path::PathBuf;

use colored::Colorize;
use csvscope::{Explorer, ExplorerConfig, Value};

pub fn run(
    file: PathBuf,
    json_output: bool,
    rows: usize,
    config: ExplorerConfig,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let explorer = Explorer::with_config(ExplorerConfig {
        head_rows: rows,
        ..config
    });
    let loaded = explorer.load_file(&file)?;
    let report = explorer.report(&loaded);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Inspecting".cyan().bold(),
        report.source.file.white()
    );
    println!(
        "  {} rows x {} columns",
        report.source.row_count, report.source.column_count
    );
    if verbose {
        println!("  SHA-256: {}", report.source.hash);
        println!("  Size: {} bytes", report.source.size_bytes);
    }
    println!();

    // Head
    println!("{}", "Data preview".bold());
    println!("  {}", report.preview.headers.join("\t").dimmed());
    for row in &report.preview.rows {
        let cells: Vec<String> = row.iter().map(cell).collect();
        println!("  {}", cells.join("\t"));
    }
    if report.preview.truncated {
        println!(
            "  {}",
            format!("... {} more rows", report.preview.total_rows - report.preview.rows.len())
                .dimmed()
        );
    }
    println!();

    // Column information
    println!("{}", "Column information".bold());
    println!(
        "  {:<24} {:>8} {:>8} {:>8}  {}",
        "column", "missing", "ratio", "distinct", "type"
    );
    for row in &report.columns {
        let line = format!(
            "  {:<24} {:>8} {:>8} {:>8}  {}",
            row.name,
            row.missing_count,
            row.missing_ratio.to_string(),
            row.distinct_count,
            row.declared_type
        );
        if row.missing_count > 0 {
            println!("{}", line.yellow());
        } else {
            println!("{}", line);
        }
    }
    println!();

    // Statistics
    if report.statistics.is_empty() {
        println!("{}", "No numeric columns.".dimmed());
        return Ok(());
    }
    println!("{}", "Descriptive statistics".bold());
    println!(
        "  {:<24} {:>6} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "column", "count", "mean", "std", "min", "25%", "50%", "75%", "max"
    );
    for stat in &report.statistics {
        println!(
            "  {:<24} {:>6} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10}",
            stat.column,
            stat.count,
            number(stat.mean),
            number(stat.std),
            number(stat.min),
            number(stat.q1),
            number(stat.median),
            number(stat.q3),
            number(stat.max),
        );
    }

    Ok(())
}

fn cell(value: &Value) -> String {
    value.display().unwrap_or_else(|| "NaN".to_string())
}

fn number(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.4}", v))
        .unwrap_or_else(|| "NaN".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_cells_render_as_nan() {
        assert_eq!(cell(&Value::Null), "NaN");
        assert_eq!(cell(&Value::Integer(3)), "3");
        assert_eq!(number(None), "NaN");
        assert_eq!(number(Some(2.5)), "2.5000");
    }
}
