//! Chart types and their axis contracts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Selectable chart type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Line,
    Scatter,
    Histogram,
    Distribution,
    Boxplot,
    Violinplot,
    Pie,
}

/// Which columns a chart type offers for its axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnSource {
    /// Every column of the dataset.
    All,
    /// Categorical and numeric columns; cardinal columns are left out.
    CategoricalAndNumeric,
    /// Categorical columns only.
    Categorical,
}

impl ChartKind {
    pub const ALL: [ChartKind; 7] = [
        ChartKind::Line,
        ChartKind::Scatter,
        ChartKind::Histogram,
        ChartKind::Distribution,
        ChartKind::Boxplot,
        ChartKind::Violinplot,
        ChartKind::Pie,
    ];

    /// Whether a Y column must be selected in addition to X.
    pub fn requires_y(&self) -> bool {
        matches!(
            self,
            ChartKind::Line | ChartKind::Scatter | ChartKind::Boxplot | ChartKind::Violinplot
        )
    }

    /// Columns offered for the axes of this chart type.
    pub fn column_source(&self) -> ColumnSource {
        match self {
            ChartKind::Line | ChartKind::Scatter | ChartKind::Boxplot | ChartKind::Violinplot => {
                ColumnSource::All
            }
            ChartKind::Histogram | ChartKind::Distribution => ColumnSource::CategoricalAndNumeric,
            ChartKind::Pie => ColumnSource::Categorical,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Scatter => "scatter",
            ChartKind::Histogram => "histogram",
            ChartKind::Distribution => "distribution",
            ChartKind::Boxplot => "boxplot",
            ChartKind::Violinplot => "violinplot",
            ChartKind::Pie => "pie",
        }
    }

    /// Label shown in chart pickers.
    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::Line => "Line",
            ChartKind::Scatter => "Scatter",
            ChartKind::Histogram => "Histogram",
            ChartKind::Distribution => "Distribution",
            ChartKind::Boxplot => "Boxplot",
            ChartKind::Violinplot => "Violinplot",
            ChartKind::Pie => "Pie",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "line" => Ok(ChartKind::Line),
            "scatter" => Ok(ChartKind::Scatter),
            "histogram" | "hist" => Ok(ChartKind::Histogram),
            "distribution" | "dist" => Ok(ChartKind::Distribution),
            "boxplot" | "box" => Ok(ChartKind::Boxplot),
            "violinplot" | "violin" => Ok(ChartKind::Violinplot),
            "pie" => Ok(ChartKind::Pie),
            _ => Err(format!(
                "Unknown chart type: {}. Use line, scatter, histogram, distribution, boxplot, violinplot or pie.",
                s
            )),
        }
    }
}
