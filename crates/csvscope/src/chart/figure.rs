//! Figure construction: turns a validated chart into drawable series data.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::density::KernelDensity;
use super::kind::ChartKind;
use super::request::ValidatedChart;
use crate::dataset::{Column, Dataset, Value};
use crate::error::{CsvscopeError, Result};
use crate::profile::stats::{quantile, sorted};

/// Whisker reach in interquartile ranges.
const WHISKER_IQR: f64 = 1.5;

/// Figure construction settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FigureConfig {
    /// Bins for histogram charts.
    pub histogram_bins: usize,
    /// Bins for distribution charts.
    pub distribution_bins: usize,
    /// Points sampled along each density curve.
    pub density_points: usize,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            histogram_bins: 50,
            distribution_bins: 30,
            density_points: 100,
        }
    }
}

/// A drawable chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub kind: ChartKind,
    pub title: String,
    pub x_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_label: Option<String>,
    pub data: FigureData,
}

/// Series data, shaped per chart family.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FigureData {
    /// `(x, y)` pairs in row order.
    Points { points: Vec<(Value, Value)> },
    /// Equal-width bins with an optional density curve scaled to counts.
    Bins {
        bins: Vec<Bin>,
        #[serde(skip_serializing_if = "Option::is_none")]
        density: Option<Vec<(f64, f64)>>,
    },
    /// Counts per category, most frequent first.
    Categories { labels: Vec<String>, counts: Vec<usize> },
    /// One box (and optionally one violin) per X group.
    Groups { groups: Vec<BoxGroup> },
    /// Pie slices, largest first.
    Slices { slices: Vec<Slice> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxGroup {
    pub label: String,
    pub count: usize,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub lower_whisker: f64,
    pub upper_whisker: f64,
    pub outliers: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub density: Option<Vec<(f64, f64)>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice {
    pub label: String,
    pub count: usize,
    pub percent: f64,
    /// Percentage label, one decimal place.
    pub text: String,
}

/// Builds [`Figure`]s from a dataset.
#[derive(Debug, Clone, Default)]
pub struct FigureBuilder {
    config: FigureConfig,
}

impl FigureBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: FigureConfig) -> Self {
        Self { config }
    }

    pub fn build(&self, dataset: &Dataset, chart: &ValidatedChart) -> Result<Figure> {
        let x = lookup(dataset, chart, &chart.x)?;
        let y = match &chart.y {
            Some(name) => Some(lookup(dataset, chart, name)?),
            None => None,
        };

        let figure = match (chart.kind, y) {
            (ChartKind::Line, Some(y)) => Figure {
                kind: chart.kind,
                title: format!("{} vs {}", y.name, x.name),
                x_label: x.name.clone(),
                y_label: Some(y.name.clone()),
                data: points(x, y),
            },
            (ChartKind::Scatter, Some(y)) => Figure {
                kind: chart.kind,
                title: format!("Scatter Plot: {} vs {}", y.name, x.name),
                x_label: x.name.clone(),
                y_label: Some(y.name.clone()),
                data: points(x, y),
            },
            (ChartKind::Histogram, _) => Figure {
                kind: chart.kind,
                title: format!("Histogram of {}", x.name),
                x_label: x.name.clone(),
                y_label: Some("Count".to_string()),
                data: self.histogram(x, self.config.histogram_bins, false),
            },
            (ChartKind::Distribution, _) => Figure {
                kind: chart.kind,
                title: format!("Distribution of {}", x.name),
                x_label: x.name.clone(),
                y_label: Some("Count".to_string()),
                data: self.histogram(x, self.config.distribution_bins, true),
            },
            (ChartKind::Boxplot, Some(y)) => Figure {
                kind: chart.kind,
                title: format!("Boxplot of {} by {}", y.name, x.name),
                x_label: x.name.clone(),
                y_label: Some(y.name.clone()),
                data: self.groups(chart, x, y, false)?,
            },
            (ChartKind::Violinplot, Some(y)) => Figure {
                kind: chart.kind,
                title: format!("Violin Plot of {} by {}", y.name, x.name),
                x_label: x.name.clone(),
                y_label: Some(y.name.clone()),
                data: self.groups(chart, x, y, true)?,
            },
            (ChartKind::Pie, _) => Figure {
                kind: chart.kind,
                title: format!("Pie Chart of {}", x.name),
                x_label: x.name.clone(),
                y_label: None,
                data: slices(x),
            },
            (kind, None) => {
                return Err(CsvscopeError::Render {
                    chart: kind.to_string(),
                    message: "a Y column is required".to_string(),
                });
            }
        };

        Ok(figure)
    }

    fn histogram(&self, column: &Column, bins: usize, with_density: bool) -> FigureData {
        if !column.dtype.is_numeric() {
            return categories(column);
        }

        let values = column.numeric_values();
        let bins = bin_values(&values, bins.max(1));

        let density = if with_density {
            KernelDensity::fit(&values).map(|kde| {
                let ordered = sorted(&values);
                let (lo, hi) = (ordered[0], ordered[ordered.len() - 1]);
                let width = bins.first().map(|b| b.end - b.start).unwrap_or(1.0);
                let scale = values.len() as f64 * width;
                kde.curve(lo, hi, self.config.density_points)
                    .into_iter()
                    .map(|(x, d)| (x, d * scale))
                    .collect()
            })
        } else {
            None
        };

        FigureData::Bins { bins, density }
    }

    fn groups(
        &self,
        chart: &ValidatedChart,
        x: &Column,
        y: &Column,
        with_density: bool,
    ) -> Result<FigureData> {
        if !y.dtype.is_numeric() {
            return Err(CsvscopeError::Render {
                chart: chart.kind.to_string(),
                message: format!("column '{}' is not numeric", y.name),
            });
        }

        let mut grouped: IndexMap<String, Vec<f64>> = IndexMap::new();
        for (xv, yv) in x.values.iter().zip(&y.values) {
            if let (Some(label), Some(value)) = (xv.display(), yv.as_f64()) {
                grouped.entry(label).or_default().push(value);
            }
        }

        let groups = grouped
            .into_iter()
            .map(|(label, values)| self.box_group(label, &values, with_density))
            .collect();

        Ok(FigureData::Groups { groups })
    }

    fn box_group(&self, label: String, values: &[f64], with_density: bool) -> BoxGroup {
        let ordered = sorted(values);
        let q1 = quantile(&ordered, 0.25).unwrap_or(0.0);
        let median = quantile(&ordered, 0.5).unwrap_or(0.0);
        let q3 = quantile(&ordered, 0.75).unwrap_or(0.0);
        let iqr = q3 - q1;
        let (low_fence, high_fence) = (q1 - WHISKER_IQR * iqr, q3 + WHISKER_IQR * iqr);

        let inside: Vec<f64> = ordered
            .iter()
            .copied()
            .filter(|v| *v >= low_fence && *v <= high_fence)
            .collect();
        let outliers = ordered
            .iter()
            .copied()
            .filter(|v| *v < low_fence || *v > high_fence)
            .collect();

        let density = if with_density {
            KernelDensity::fit(values).map(|kde| {
                let cut = 2.0 * kde.bandwidth();
                kde.curve(
                    ordered[0] - cut,
                    ordered[ordered.len() - 1] + cut,
                    self.config.density_points,
                )
            })
        } else {
            None
        };

        BoxGroup {
            label,
            count: values.len(),
            q1,
            median,
            q3,
            lower_whisker: inside.first().copied().unwrap_or(q1),
            upper_whisker: inside.last().copied().unwrap_or(q3),
            outliers,
            density,
        }
    }
}

fn lookup<'a>(dataset: &'a Dataset, chart: &ValidatedChart, name: &str) -> Result<&'a Column> {
    dataset.column(name).ok_or_else(|| CsvscopeError::Render {
        chart: chart.kind.to_string(),
        message: format!("column '{}' not found", name),
    })
}

fn points(x: &Column, y: &Column) -> FigureData {
    let points = x
        .values
        .iter()
        .zip(&y.values)
        .filter(|(xv, yv)| !xv.is_null() && !yv.is_null())
        .map(|(xv, yv)| (xv.clone(), yv.clone()))
        .collect();
    FigureData::Points { points }
}

fn categories(column: &Column) -> FigureData {
    let (labels, counts) = column.value_counts().into_iter().unzip();
    FigureData::Categories { labels, counts }
}

fn slices(column: &Column) -> FigureData {
    let counts = column.value_counts();
    let total: usize = counts.values().sum();
    let slices = counts
        .into_iter()
        .map(|(label, count)| {
            let percent = count as f64 / total as f64 * 100.0;
            Slice {
                label,
                count,
                percent,
                text: format!("{:.1}%", percent),
            }
        })
        .collect();
    FigureData::Slices { slices }
}

/// Split values into `bins` equal-width bins over their range. The last bin
/// is closed on the right. A zero-width range is widened by 0.5 each side.
fn bin_values(values: &[f64], bins: usize) -> Vec<Bin> {
    if values.is_empty() {
        return Vec::new();
    }

    let (mut lo, mut hi) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(*v), hi.max(*v))
        });
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / bins as f64;
    let mut out: Vec<Bin> = (0..bins)
        .map(|i| Bin {
            start: lo + width * i as f64,
            end: if i + 1 == bins { hi } else { lo + width * (i + 1) as f64 },
            count: 0,
        })
        .collect();

    for v in values {
        let idx = (((v - lo) / width).floor() as usize).min(bins - 1);
        out[idx].count += 1;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::DataType;

    fn floats(name: &str, values: &[f64]) -> Column {
        Column::new(
            name,
            DataType::Float,
            values.iter().map(|v| Value::Float(*v)).collect(),
        )
    }

    fn texts(name: &str, values: &[&str]) -> Column {
        Column::new(
            name,
            DataType::Text,
            values.iter().map(|v| Value::Text(v.to_string())).collect(),
        )
    }

    fn chart(kind: ChartKind, x: &str, y: Option<&str>) -> ValidatedChart {
        ValidatedChart {
            kind,
            x: x.to_string(),
            y: y.map(str::to_string),
        }
    }

    #[test]
    fn test_bins_cover_all_values() {
        let bins = bin_values(&[0.0, 1.0, 2.0, 3.0, 4.0, 10.0], 5);
        assert_eq!(bins.len(), 5);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 6);
        assert_eq!(bins[0].start, 0.0);
        assert_eq!(bins[4].end, 10.0);
        assert_eq!(bins[4].count, 1);
    }

    #[test]
    fn test_constant_values_get_one_unit_range() {
        let bins = bin_values(&[3.0, 3.0], 2);
        assert_eq!(bins[0].start, 2.5);
        assert_eq!(bins[1].end, 3.5);
        assert_eq!(bins[1].count, 2);
    }

    #[test]
    fn test_line_skips_null_pairs() {
        let ds = Dataset::new(vec![
            floats("x", &[1.0, 2.0, 3.0]),
            Column::new(
                "y",
                DataType::Integer,
                vec![Value::Integer(5), Value::Null, Value::Integer(7)],
            ),
        ])
        .unwrap();

        let fig = FigureBuilder::new()
            .build(&ds, &chart(ChartKind::Line, "x", Some("y")))
            .unwrap();
        assert_eq!(fig.title, "y vs x");
        match fig.data {
            FigureData::Points { points } => assert_eq!(points.len(), 2),
            other => panic!("unexpected data: {other:?}"),
        }
    }

    #[test]
    fn test_pie_percentages() {
        let ds = Dataset::new(vec![texts("segment", &["a", "b", "a", "a"])]).unwrap();
        let fig = FigureBuilder::new()
            .build(&ds, &chart(ChartKind::Pie, "segment", None))
            .unwrap();

        assert_eq!(fig.title, "Pie Chart of segment");
        match fig.data {
            FigureData::Slices { slices } => {
                assert_eq!(slices[0].label, "a");
                assert_eq!(slices[0].text, "75.0%");
                assert_eq!(slices[1].text, "25.0%");
            }
            other => panic!("unexpected data: {other:?}"),
        }
    }

    #[test]
    fn test_histogram_of_text_counts_categories() {
        let ds = Dataset::new(vec![texts("segment", &["a", "b", "a"])]).unwrap();
        let fig = FigureBuilder::new()
            .build(&ds, &chart(ChartKind::Histogram, "segment", None))
            .unwrap();
        assert_eq!(
            fig.data,
            FigureData::Categories {
                labels: vec!["a".into(), "b".into()],
                counts: vec![2, 1]
            }
        );
    }

    #[test]
    fn test_distribution_has_density() {
        let values: Vec<f64> = (0..100).map(|i| (i % 17) as f64).collect();
        let ds = Dataset::new(vec![floats("v", &values)]).unwrap();
        let fig = FigureBuilder::new()
            .build(&ds, &chart(ChartKind::Distribution, "v", None))
            .unwrap();

        match fig.data {
            FigureData::Bins { bins, density } => {
                assert_eq!(bins.len(), 30);
                assert_eq!(density.map(|d| d.len()), Some(100));
            }
            other => panic!("unexpected data: {other:?}"),
        }
    }

    #[test]
    fn test_boxplot_groups_and_outliers() {
        let ds = Dataset::new(vec![
            texts("g", &["a", "a", "a", "a", "a", "b", "b"]),
            floats("v", &[1.0, 2.0, 3.0, 4.0, 100.0, 5.0, 6.0]),
        ])
        .unwrap();

        let fig = FigureBuilder::new()
            .build(&ds, &chart(ChartKind::Boxplot, "g", Some("v")))
            .unwrap();
        match fig.data {
            FigureData::Groups { groups } => {
                assert_eq!(groups.len(), 2);
                let a = &groups[0];
                assert_eq!(a.label, "a");
                assert_eq!(a.median, 3.0);
                assert_eq!(a.outliers, vec![100.0]);
                assert_eq!(a.upper_whisker, 4.0);
                assert!(a.density.is_none());
            }
            other => panic!("unexpected data: {other:?}"),
        }
    }

    #[test]
    fn test_violin_with_text_y_is_render_error() {
        let ds = Dataset::new(vec![texts("g", &["a"]), texts("h", &["b"])]).unwrap();
        let err = FigureBuilder::new()
            .build(&ds, &chart(ChartKind::Violinplot, "g", Some("h")))
            .unwrap_err();
        assert!(matches!(err, CsvscopeError::Render { .. }));
    }
}
