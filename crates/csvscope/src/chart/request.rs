//! Chart requests, axis option lists and request validation.
//!
//! A request is drawable only when every axis its chart type requires names
//! a column offered for that type. Anything else is skipped without error.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::kind::{ChartKind, ColumnSource};
use crate::dataset::Dataset;
use crate::profile::Classification;

/// A user's chart selection. Unset axes are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartRequest {
    pub kind: ChartKind,
    #[serde(default)]
    pub x: Option<String>,
    #[serde(default)]
    pub y: Option<String>,
}

impl ChartRequest {
    pub fn new(kind: ChartKind) -> Self {
        Self {
            kind,
            x: None,
            y: None,
        }
    }

    pub fn with_x(mut self, column: impl Into<String>) -> Self {
        self.x = Some(column.into());
        self
    }

    pub fn with_y(mut self, column: impl Into<String>) -> Self {
        self.y = Some(column.into());
        self
    }

    /// Resolve the request against the offered columns. `None` means the
    /// request is incomplete and nothing should be drawn.
    pub fn validate(
        &self,
        dataset: &Dataset,
        classification: &Classification,
    ) -> Option<ValidatedChart> {
        let options = AxisOptions::for_kind(self.kind, dataset, classification);

        let x = self.x.as_deref().filter(|x| options.x.iter().any(|c| c == *x));
        let y = match &options.y {
            Some(offered) => self
                .y
                .as_deref()
                .filter(|y| offered.iter().any(|c| c == *y))
                .map(Some),
            None => Some(None),
        };

        match (x, y) {
            (Some(x), Some(y)) => Some(ValidatedChart {
                kind: self.kind,
                x: x.to_string(),
                y: y.map(str::to_string),
            }),
            _ => {
                debug!(kind = %self.kind, x = ?self.x, y = ?self.y, "chart request skipped");
                None
            }
        }
    }
}

/// A chart request whose axes are all set and offered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedChart {
    pub kind: ChartKind,
    pub x: String,
    /// Present exactly when the chart type requires a Y axis.
    pub y: Option<String>,
}

/// Columns offered for each axis of a chart type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AxisOptions {
    pub kind: ChartKind,
    pub x: Vec<String>,
    /// `None` for single-axis charts.
    pub y: Option<Vec<String>>,
}

impl AxisOptions {
    pub fn for_kind(kind: ChartKind, dataset: &Dataset, classification: &Classification) -> Self {
        let offered: Vec<String> = match kind.column_source() {
            ColumnSource::All => dataset
                .column_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
            ColumnSource::CategoricalAndNumeric => dataset
                .column_names()
                .into_iter()
                .filter(|name| {
                    classification.is_categorical(name) || classification.is_numeric(name)
                })
                .map(str::to_string)
                .collect(),
            ColumnSource::Categorical => classification.categorical.clone(),
        };

        let y = kind.requires_y().then(|| offered.clone());
        Self {
            kind,
            x: offered,
            y,
        }
    }

    /// Options for every chart type, in picker order.
    pub fn all(dataset: &Dataset, classification: &Classification) -> Vec<Self> {
        ChartKind::ALL
            .iter()
            .map(|kind| Self::for_kind(*kind, dataset, classification))
            .collect()
    }
}
