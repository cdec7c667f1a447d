//! Main Explorer struct and public API.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::chart::{AxisOptions, ChartRequest, Figure, FigureBuilder, FigureConfig};
use crate::dataset::{Dataset, Preview};
use crate::error::Result;
use crate::input::{DataTable, Parser, ParserConfig, SourceMetadata};
use crate::profile::{
    describe, Classification, ClassifierConfig, ColumnClassifier, ColumnSummary,
    NumericDescription, SummaryReporter,
};

/// Configuration for an [`Explorer`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplorerConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
    /// Classification thresholds.
    pub classifier: ClassifierConfig,
    /// Figure construction settings.
    pub figure: FigureConfig,
    /// Rows shown in the preview.
    pub head_rows: usize,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            classifier: ClassifierConfig::default(),
            figure: FigureConfig::default(),
            head_rows: 5,
        }
    }
}

/// A parsed upload together with its metadata.
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub source: SourceMetadata,
    pub dataset: Dataset,
}

/// Everything the data preview view shows.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetReport {
    pub source: SourceMetadata,
    pub preview: Preview,
    pub columns: Vec<ColumnSummary>,
    pub statistics: Vec<NumericDescription>,
    pub classification: Classification,
}

/// Loads uploads and answers preview, profiling and chart requests.
#[derive(Debug, Clone)]
pub struct Explorer {
    config: ExplorerConfig,
    parser: Parser,
    classifier: ColumnClassifier,
    reporter: SummaryReporter,
    figures: FigureBuilder,
}

impl Explorer {
    /// Create an explorer with default configuration.
    pub fn new() -> Self {
        Self::with_config(ExplorerConfig::default())
    }

    /// Create an explorer with custom configuration.
    pub fn with_config(config: ExplorerConfig) -> Self {
        Self {
            parser: Parser::with_config(config.parser.clone()),
            classifier: ColumnClassifier::with_config(config.classifier),
            reporter: SummaryReporter::new(),
            figures: FigureBuilder::with_config(config.figure.clone()),
            config,
        }
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    /// Parse and type uploaded bytes. No partial dataset is returned on error.
    pub fn load_bytes(&self, name: &str, bytes: &[u8]) -> Result<LoadedDataset> {
        let (table, source) = self.parser.parse_bytes(name, bytes)?;
        self.finish_load(table, source)
    }

    /// Parse and type a file from disk.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<LoadedDataset> {
        let (table, source) = self.parser.parse_file(path)?;
        self.finish_load(table, source)
    }

    fn finish_load(&self, table: DataTable, source: SourceMetadata) -> Result<LoadedDataset> {
        let dataset = Dataset::from_table(&table)?;
        info!(
            file = %source.file,
            rows = dataset.row_count(),
            columns = dataset.column_count(),
            "dataset loaded"
        );
        Ok(LoadedDataset { source, dataset })
    }

    /// The first `head_rows` rows.
    pub fn preview(&self, dataset: &Dataset) -> Preview {
        dataset.head(self.config.head_rows)
    }

    /// The column information table.
    pub fn summary(&self, dataset: &Dataset) -> Vec<ColumnSummary> {
        self.reporter.report(dataset)
    }

    /// Descriptive statistics of the numeric columns.
    pub fn describe(&self, dataset: &Dataset) -> Vec<NumericDescription> {
        describe(dataset)
    }

    pub fn classify(&self, dataset: &Dataset) -> Classification {
        self.classifier.classify(dataset)
    }

    /// Axis options for every chart type.
    pub fn axis_options(&self, dataset: &Dataset) -> Vec<AxisOptions> {
        AxisOptions::all(dataset, &self.classify(dataset))
    }

    /// Build the requested figure. `Ok(None)` when the request is incomplete.
    pub fn plot(&self, dataset: &Dataset, request: &ChartRequest) -> Result<Option<Figure>> {
        let classification = self.classify(dataset);
        let Some(chart) = request.validate(dataset, &classification) else {
            return Ok(None);
        };

        let figure = self.figures.build(dataset, &chart)?;
        debug!(kind = %chart.kind, title = %figure.title, "figure built");
        Ok(Some(figure))
    }

    /// Preview, column information, statistics and classification in one go.
    pub fn report(&self, loaded: &LoadedDataset) -> DatasetReport {
        let dataset = &loaded.dataset;
        DatasetReport {
            source: loaded.source.clone(),
            preview: self.preview(dataset),
            columns: self.summary(dataset),
            statistics: self.describe(dataset),
            classification: self.classify(dataset),
        }
    }
}

impl Default for Explorer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartKind;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_file() {
        let file = create_test_file("id,flag\n1,0\n2,1\n3,0\n");
        let explorer = Explorer::new();
        let loaded = explorer.load_file(file.path()).unwrap();

        assert_eq!(loaded.source.row_count, 3);
        assert_eq!(loaded.dataset.column_count(), 2);
    }

    #[test]
    fn test_report() {
        let explorer = Explorer::new();
        let loaded = explorer
            .load_bytes("t.csv", b"id,flag\n1,0\n2,1\n3,0\n")
            .unwrap();
        let report = explorer.report(&loaded);

        assert_eq!(report.preview.rows.len(), 3);
        assert_eq!(report.columns.len(), 2);
        assert_eq!(report.statistics.len(), 2);
        assert_eq!(report.classification.categorical, vec!["id", "flag"]);
    }

    #[test]
    fn test_plot_incomplete_request_is_none() {
        let explorer = Explorer::new();
        let loaded = explorer.load_bytes("t.csv", b"a,b\n1,2\n3,4\n").unwrap();

        let request = ChartRequest::new(ChartKind::Line).with_x("a");
        assert!(explorer.plot(&loaded.dataset, &request).unwrap().is_none());
    }

    #[test]
    fn test_custom_head_rows() {
        let explorer = Explorer::with_config(ExplorerConfig {
            head_rows: 1,
            ..ExplorerConfig::default()
        });
        let loaded = explorer.load_bytes("t.csv", b"a\n1\n2\n").unwrap();
        assert_eq!(explorer.preview(&loaded.dataset).rows.len(), 1);
    }
}
