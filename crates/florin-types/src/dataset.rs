//! Dataset catalog definitions.

use serde::{Deserialize, Serialize};

/// Column positions and header count for a CSV source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvLayout {
    /// Zero-based index of the date column.
    pub date_column: usize,
    /// Zero-based index of the value column.
    pub value_column: usize,
    /// Number of leading rows to skip before data starts.
    pub header_rows: usize,
}

impl CsvLayout {
    /// Creates a new CSV layout.
    #[must_use]
    pub const fn new(date_column: usize, value_column: usize, header_rows: usize) -> Self {
        Self {
            date_column,
            value_column,
            header_rows,
        }
    }
}

/// Where and how a dataset's raw rows are retrieved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Source {
    /// ONS time-series CSV export, parameterized by series and dataset code.
    Ons {
        /// Series identifier (e.g., "l522").
        series: String,
        /// Dataset identifier (e.g., "mm23").
        dataset: String,
        /// Column layout of the export.
        layout: CsvLayout,
    },
    /// Land Registry UK House Price Index CSV export for one region.
    LandRegistry {
        /// Region path segment (e.g., "london", "shetland-islands").
        region: String,
        /// Column layout of the export.
        layout: CsvLayout,
    },
    /// Bank of England rate table scraped from an HTML page.
    ///
    /// The table has no fixed column positions; cells are identified by
    /// their `align` attribute instead (left = date, right = value).
    BoeScrape,
}

impl Source {
    /// Returns the source kind as a string identifier.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Ons { .. } => "ons",
            Self::LandRegistry { .. } => "land-registry",
            Self::BoeScrape => "boe-scrape",
        }
    }

    /// Returns the CSV column layout, if this is a CSV source.
    #[must_use]
    pub const fn layout(&self) -> Option<CsvLayout> {
        match self {
            Self::Ons { layout, .. } | Self::LandRegistry { layout, .. } => Some(*layout),
            Self::BoeScrape => None,
        }
    }
}

/// One entry in the dataset catalog: a remote series and its output names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Unique identifier (e.g., "uk-cpi", "london").
    id: String,
    /// Human-readable description.
    description: String,
    /// Output file stem for the fetched (nominal) series.
    output: String,
    /// Output file stem for the inflation-adjusted series, if one is derived.
    adjusted_output: Option<String>,
    /// Where the raw rows come from.
    source: Source,
}

impl Dataset {
    /// Creates a new dataset entry.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        output: impl Into<String>,
        adjusted_output: Option<String>,
        source: Source,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            output: output.into(),
            adjusted_output,
            source,
        }
    }

    /// Returns the dataset identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the human-readable description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the output file stem for the nominal series.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Returns the output file stem for the adjusted series, if any.
    #[must_use]
    pub fn adjusted_output(&self) -> Option<&str> {
        self.adjusted_output.as_deref()
    }

    /// Returns the dataset source.
    #[must_use]
    pub const fn source(&self) -> &Source {
        &self.source
    }

    /// Returns true if this dataset derives an inflation-adjusted variant.
    #[must_use]
    pub const fn is_adjusted(&self) -> bool {
        self.adjusted_output.is_some()
    }

    /// Returns true if this is the consumer price index dataset.
    ///
    /// The CPI series is the reference index every adjustment rebases
    /// against, so the pipeline computes it before anything else.
    #[must_use]
    pub const fn is_index(&self) -> bool {
        matches!(self.source, Source::Ons { .. })
    }
}

impl std::fmt::Display for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.description, self.id)
    }
}
