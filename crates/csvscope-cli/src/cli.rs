//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use csvscope::{ChartKind, ClassifierConfig, ExplorerConfig};

/// csvscope: explore a CSV file in the terminal or in the browser
#[derive(Parser)]
#[command(name = "csvscope")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub thresholds: Thresholds,
}

/// Column classification thresholds.
#[derive(Args, Clone, Debug)]
pub struct Thresholds {
    /// Non-text columns with fewer distinct values are categorical
    #[arg(long, global = true, default_value = "10", allow_negative_numbers = true)]
    pub categorical_threshold: i64,

    /// Text columns with more distinct values are cardinal
    #[arg(long, global = true, default_value = "20", allow_negative_numbers = true)]
    pub cardinal_threshold: i64,
}

impl Thresholds {
    pub fn explorer_config(&self) -> ExplorerConfig {
        ExplorerConfig {
            classifier: ClassifierConfig {
                categorical_threshold: self.categorical_threshold,
                cardinal_threshold: self.cardinal_threshold,
            },
            ..ExplorerConfig::default()
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web UI
    Serve {
        /// CSV file to load on startup
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Port for web server
        #[arg(short, long, default_value = "8501")]
        port: u16,

        /// Don't automatically open browser
        #[arg(long)]
        no_open: bool,

        /// Largest accepted upload, in megabytes
        #[arg(long, default_value = "200")]
        max_upload_mb: usize,
    },

    /// Show the head, column information and statistics of a CSV file
    Inspect {
        /// Path to the CSV file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Number of preview rows
        #[arg(short, long, default_value = "5")]
        rows: usize,
    },

    /// Show the column classification and the columns each chart offers
    Columns {
        /// Path to the CSV file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build a chart figure and write it as JSON
    Plot {
        /// Path to the CSV file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Chart type (line, scatter, histogram, distribution, boxplot, violinplot, pie)
        #[arg(short, long)]
        kind: ChartKind,

        /// X axis column
        #[arg(short, long)]
        x: Option<String>,

        /// Y axis column
        #[arg(short, long)]
        y: Option<String>,

        /// Output path for the figure (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
