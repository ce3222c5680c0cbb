//! Dataset pipeline execution.

use florin_datasets::DatasetRegistry;
use florin_fetch::{Fetch, FetchClient, url};
use florin_format::CsvFormatter;
use florin_parse::{parse_csv, parse_rate_table};
use florin_transform::{adjust_for_inflation, densify};
use florin_types::{Dataset, FlorinError, Record, Result, Source};
use futures::stream::{self, StreamExt};
use std::path::PathBuf;

use crate::{DatasetOutcome, RunReport};

/// Configuration for a pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Directory the output CSV files are written into.
    pub output_dir: PathBuf,
    /// Maximum number of datasets fetched concurrently.
    pub concurrency: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("records"),
            concurrency: 4,
        }
    }
}

/// Runs datasets end to end: fetch, parse, densify, adjust, write.
///
/// Generic over the fetch transport; [`FetchClient`] is the production
/// default.
#[derive(Debug)]
pub struct Pipeline<C = FetchClient> {
    client: C,
    config: PipelineConfig,
}

impl<C: Fetch> Pipeline<C> {
    /// Creates a new pipeline.
    #[must_use]
    pub const fn new(client: C, config: PipelineConfig) -> Self {
        Self { client, config }
    }

    /// Returns the pipeline configuration.
    #[must_use]
    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Runs the given datasets and reports one outcome per dataset.
    ///
    /// The consumer price index series is computed (and, if selected,
    /// written) before anything else: every adjustment rebases against it,
    /// so no house-price dataset starts until it is fully densified. The
    /// remaining datasets then run concurrently, each isolated - one
    /// failure never stops the others. `on_outcome` is invoked as each
    /// dataset finishes, before the final sorted report is returned.
    ///
    /// # Errors
    ///
    /// Returns an error only if the output directory cannot be created;
    /// per-dataset failures are reported through the [`RunReport`].
    pub async fn run<F>(&self, datasets: Vec<&Dataset>, mut on_outcome: F) -> Result<RunReport>
    where
        F: FnMut(&DatasetOutcome),
    {
        std::fs::create_dir_all(&self.config.output_dir)?;
        let mut report = RunReport::new();

        let needs_index = datasets.iter().any(|d| d.is_adjusted());
        let selected_index = datasets.iter().copied().find(|d| d.is_index());

        // Barrier: the index series is complete before any adjustment runs
        let mut index_series: Option<Vec<Record>> = None;
        if needs_index || selected_index.is_some() {
            let dataset =
                selected_index.unwrap_or_else(|| DatasetRegistry::global().price_index());
            match self.build_series(dataset).await {
                Ok(dense) => {
                    if selected_index.is_some() {
                        let outcome = self.finish_run(dataset, dense.clone(), None);
                        on_outcome(&outcome);
                        report.push(outcome);
                    }
                    index_series = Some(dense);
                }
                Err(e) => {
                    // Adjusted datasets still run; each reports its own
                    // failure to derive a real series
                    if selected_index.is_some() {
                        let outcome = DatasetOutcome::failed(
                            dataset.id(),
                            dataset.description(),
                            e.to_string(),
                        );
                        on_outcome(&outcome);
                        report.push(outcome);
                    }
                }
            }
        }

        let index_ref = index_series.as_deref();
        let remaining: Vec<&Dataset> = datasets.into_iter().filter(|d| !d.is_index()).collect();

        let mut outcomes = stream::iter(remaining)
            .map(|dataset| self.run_dataset(dataset, index_ref))
            .buffer_unordered(self.config.concurrency.max(1));
        while let Some(outcome) = outcomes.next().await {
            on_outcome(&outcome);
            report.push(outcome);
        }

        report.sort();
        Ok(report)
    }

    /// Runs a single dataset, converting any error into a failed outcome.
    pub async fn run_dataset(
        &self,
        dataset: &Dataset,
        index: Option<&[Record]>,
    ) -> DatasetOutcome {
        match self.build_series(dataset).await {
            Ok(dense) => self.finish_run(dataset, dense, index),
            Err(e) => DatasetOutcome::failed(dataset.id(), dataset.description(), e.to_string()),
        }
    }

    /// Fetches, parses, and densifies one dataset's series.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch or parse fails, or the source yields
    /// no records at all.
    pub async fn build_series(&self, dataset: &Dataset) -> Result<Vec<Record>> {
        let raw = self.fetch_records(dataset).await?;
        if raw.is_empty() {
            return Err(FlorinError::NoDataAvailable {
                dataset: dataset.id().to_string(),
            });
        }
        Ok(densify(raw))
    }

    /// Fetches one dataset's raw bytes and parses them into records.
    async fn fetch_records(&self, dataset: &Dataset) -> Result<Vec<Record>> {
        match dataset.source() {
            Source::Ons {
                series,
                dataset: code,
                layout,
            } => {
                let body = self
                    .client
                    .fetch_bytes(&url::ons_csv_url(series, code))
                    .await
                    .map_err(|e| FlorinError::Http(e.to_string()))?;
                parse_csv(&body, layout).map_err(|e| FlorinError::Parse(e.to_string()))
            }
            Source::LandRegistry { region, layout } => {
                let body = self
                    .client
                    .fetch_bytes(&url::land_registry_url(region))
                    .await
                    .map_err(|e| FlorinError::Http(e.to_string()))?;
                parse_csv(&body, layout).map_err(|e| FlorinError::Parse(e.to_string()))
            }
            Source::BoeScrape => {
                let body = self
                    .client
                    .fetch_bytes(url::BOE_BANK_RATE_URL)
                    .await
                    .map_err(|e| FlorinError::Http(e.to_string()))?;
                let html = String::from_utf8_lossy(&body);
                parse_rate_table(&html).map_err(|e| FlorinError::Parse(e.to_string()))
            }
        }
    }

    /// Writes a dataset's outputs from its densified series.
    ///
    /// The nominal series is written first; if the dataset derives a real
    /// variant, the series is rebased against `index` and written too. A
    /// failure after the nominal write produces a failed outcome that
    /// still lists the rows and files already on disk.
    fn finish_run(
        &self,
        dataset: &Dataset,
        dense: Vec<Record>,
        index: Option<&[Record]>,
    ) -> DatasetOutcome {
        let formatter = CsvFormatter::new();

        let nominal_path = self.output_path(dataset.output());
        if let Err(e) = formatter.write_to_path(&dense, &nominal_path) {
            return DatasetOutcome::failed(
                dataset.id(),
                dataset.description(),
                FlorinError::Format(e.to_string()).to_string(),
            );
        }
        let mut rows = dense.len() as u64;
        let mut outputs = vec![nominal_path];

        if let Some(adjusted) = dataset.adjusted_output() {
            match derive_real(dense, index) {
                Ok(real) => {
                    let path = self.output_path(adjusted);
                    if let Err(e) = formatter.write_to_path(&real, &path) {
                        return DatasetOutcome::failed_after(
                            dataset.id(),
                            dataset.description(),
                            rows,
                            outputs,
                            FlorinError::Format(e.to_string()).to_string(),
                        );
                    }
                    rows += real.len() as u64;
                    outputs.push(path);
                }
                Err(e) => {
                    return DatasetOutcome::failed_after(
                        dataset.id(),
                        dataset.description(),
                        rows,
                        outputs,
                        e.to_string(),
                    );
                }
            }
        }

        DatasetOutcome::completed(dataset.id(), dataset.description(), rows, outputs)
    }

    /// Returns the output file path for the given file stem.
    fn output_path(&self, stem: &str) -> PathBuf {
        self.config.output_dir.join(format!("{stem}.csv"))
    }
}

/// Rebases a densified nominal series against the shared index series.
fn derive_real(dense: Vec<Record>, index: Option<&[Record]>) -> Result<Vec<Record>> {
    let index = index.ok_or_else(|| {
        FlorinError::Precondition("index series unavailable, cannot derive real series".to_string())
    })?;
    adjust_for_inflation(dense, index).map_err(|e| FlorinError::Precondition(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use chrono::NaiveDate;
    use florin_fetch::FetchError;
    use florin_types::{CsvLayout, Record};
    use std::collections::HashMap;
    use std::future::{Future, ready};

    /// Serves canned bodies by URL; any other URL gets a 503.
    #[derive(Debug, Default)]
    struct ScriptedFetch {
        bodies: HashMap<String, &'static str>,
    }

    impl ScriptedFetch {
        fn with(mut self, url: String, body: &'static str) -> Self {
            self.bodies.insert(url, body);
            self
        }
    }

    impl Fetch for ScriptedFetch {
        fn fetch_bytes(
            &self,
            url: &str,
        ) -> impl Future<Output = std::result::Result<Bytes, FetchError>> + Send {
            let result = self.bodies.get(url).map_or(
                Err(FetchError::Status {
                    status: 503,
                    reason: "Service Unavailable".to_string(),
                }),
                |body| Ok(Bytes::from_static(body.as_bytes())),
            );
            ready(result)
        }
    }

    fn test_config(output_dir: PathBuf) -> PipelineConfig {
        PipelineConfig {
            output_dir,
            ..Default::default()
        }
    }

    fn test_pipeline(output_dir: PathBuf) -> Pipeline {
        Pipeline::new(
            FetchClient::with_defaults().unwrap(),
            test_config(output_dir),
        )
    }

    fn series(start: (i32, u32, u32), values: &[f64]) -> Vec<Record> {
        let mut day = NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap();
        values
            .iter()
            .map(|&v| {
                let record = Record::new(day, v);
                day = day.succ_opt().unwrap();
                record
            })
            .collect()
    }

    fn cpi_dataset() -> Dataset {
        Dataset::new(
            "uk-cpi",
            "UK consumer price index",
            "UK_Consumer_Price_Index",
            None,
            Source::Ons {
                series: "l522".to_string(),
                dataset: "mm23".to_string(),
                layout: CsvLayout::new(0, 1, 0),
            },
        )
    }

    fn house_dataset() -> Dataset {
        Dataset::new(
            "london",
            "London average house prices",
            "Nominal_London_Average_House_Prices",
            Some("Real_London_Average_House_Prices".to_string()),
            Source::LandRegistry {
                region: "london".to_string(),
                layout: CsvLayout::new(3, 6, 1),
            },
        )
    }

    fn rates_dataset() -> Dataset {
        Dataset::new(
            "boe-base-rate",
            "Bank of England official base rate",
            "BOEBaseRates",
            None,
            Source::BoeScrape,
        )
    }

    const CPI_BODY: &str = "2020-01-01,50.0\n2020-01-02,100.0\n2020-01-03,100.0\n";
    const HOUSE_BODY: &str = "h,h,h,h,h,h,h\n\
                              x,y,z,2020-01-01,a,b,100.0\n\
                              x,y,z,2020-01-02,a,b,100.0\n\
                              x,y,z,2020-01-03,a,b,100.0\n";
    const RATES_BODY: &str = "<table id=\"stats-table\"><tbody>\
         <tr><td align=\"left\">2020-01-01</td><td align=\"right\">0.75</td></tr>\
         <tr><td align=\"left\">2020-01-02</td><td align=\"right\">0.10</td></tr>\
         </tbody></table>";

    #[tokio::test]
    async fn test_run_computes_index_before_adjusted_datasets() {
        let dir = tempfile::tempdir().unwrap();
        let fetch = ScriptedFetch::default()
            .with(url::ons_csv_url("l522", "mm23"), CPI_BODY)
            .with(url::land_registry_url("london"), HOUSE_BODY);
        let pipeline = Pipeline::new(fetch, test_config(dir.path().to_path_buf()));

        let cpi = cpi_dataset();
        let house = house_dataset();
        let mut finished = Vec::new();
        let report = pipeline
            .run(vec![&house, &cpi], |o| finished.push(o.dataset_id.clone()))
            .await
            .unwrap();

        assert!(report.all_completed());
        // The index finishes before the adjusted dataset even starts
        assert_eq!(finished, vec!["uk-cpi", "london"]);

        let index =
            std::fs::read_to_string(dir.path().join("UK_Consumer_Price_Index.csv")).unwrap();
        assert_eq!(index, "2020-01-01,50.00\n2020-01-02,100.00\n");

        // Rebased against the densified index: 100 * (100 / 50), then flat
        let real = std::fs::read_to_string(
            dir.path().join("Real_London_Average_House_Prices.csv"),
        )
        .unwrap();
        assert_eq!(real, "2020-01-01,200.00\n2020-01-02,100.00\n");
    }

    #[tokio::test]
    async fn test_run_isolates_failures_per_dataset() {
        let dir = tempfile::tempdir().unwrap();
        // No CPI body: its fetch fails with a 503
        let fetch = ScriptedFetch::default()
            .with(url::land_registry_url("london"), HOUSE_BODY)
            .with(url::BOE_BANK_RATE_URL.to_string(), RATES_BODY);
        let pipeline = Pipeline::new(fetch, test_config(dir.path().to_path_buf()));

        let cpi = cpi_dataset();
        let house = house_dataset();
        let rates = rates_dataset();
        let report = pipeline
            .run(vec![&cpi, &house, &rates], |_| {})
            .await
            .unwrap();

        assert_eq!(report.completed(), 1);
        assert_eq!(report.failed(), 2);

        // Sorted report order: boe-base-rate, london, uk-cpi
        let outcomes = report.outcomes();
        assert_eq!(outcomes[0].dataset_id, "boe-base-rate");
        assert!(!outcomes[0].is_failed());

        // The adjusted dataset still ran, wrote its nominal series, and
        // failed only the derivation step
        assert_eq!(outcomes[1].dataset_id, "london");
        assert!(outcomes[1].is_failed());
        assert!(
            outcomes[1]
                .error
                .as_deref()
                .unwrap()
                .contains("index series unavailable")
        );
        assert_eq!(outcomes[1].rows_written, 2);
        assert!(
            dir.path()
                .join("Nominal_London_Average_House_Prices.csv")
                .exists()
        );
        assert!(
            !dir.path()
                .join("Real_London_Average_House_Prices.csv")
                .exists()
        );

        assert_eq!(outcomes[2].dataset_id, "uk-cpi");
        assert!(outcomes[2].error.as_deref().unwrap().contains("503"));
    }

    #[test]
    fn test_finish_run_writes_nominal_and_real() {
        let dir = tempfile::tempdir().unwrap();
        let pipeline = test_pipeline(dir.path().to_path_buf());

        let dense = series((2020, 1, 1), &[100.0, 100.0]);
        let index = series((2020, 1, 1), &[50.0, 100.0]);

        let outcome = pipeline.finish_run(&house_dataset(), dense, Some(&index));

        assert!(!outcome.is_failed());
        assert_eq!(outcome.rows_written, 4);
        assert_eq!(outcome.outputs.len(), 2);

        let nominal = std::fs::read_to_string(
            dir.path().join("Nominal_London_Average_House_Prices.csv"),
        )
        .unwrap();
        assert_eq!(nominal, "2020-01-01,100.00\n2020-01-02,100.00\n");

        let real = std::fs::read_to_string(
            dir.path().join("Real_London_Average_House_Prices.csv"),
        )
        .unwrap();
        assert_eq!(real, "2020-01-01,200.00\n2020-01-02,100.00\n");
    }

    #[test]
    fn test_finish_run_without_index_reports_partial_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let pipeline = test_pipeline(dir.path().to_path_buf());

        let dense = series((2020, 1, 1), &[100.0, 100.0]);
        let outcome = pipeline.finish_run(&house_dataset(), dense, None);

        assert!(outcome.is_failed());
        assert!(
            outcome
                .error
                .as_deref()
                .unwrap()
                .contains("index series unavailable")
        );
        // The nominal file written before the failure is still accounted for
        let nominal_path = dir.path().join("Nominal_London_Average_House_Prices.csv");
        assert_eq!(outcome.rows_written, 2);
        assert_eq!(outcome.outputs, vec![nominal_path.clone()]);
        assert!(nominal_path.exists());
    }

    #[test]
    fn test_disjoint_index_is_a_precondition_failure() {
        let dir = tempfile::tempdir().unwrap();
        let pipeline = test_pipeline(dir.path().to_path_buf());

        let dense = series((2020, 1, 1), &[100.0, 100.0]);
        let index = series((2021, 1, 1), &[50.0, 100.0]);

        let outcome = pipeline.finish_run(&house_dataset(), dense, Some(&index));
        assert!(outcome.is_failed());
        assert!(outcome.error.as_deref().unwrap().contains("do not overlap"));
        assert_eq!(outcome.outputs.len(), 1);
    }

    #[test]
    fn test_output_path_naming() {
        let pipeline = test_pipeline(PathBuf::from("records"));
        assert_eq!(
            pipeline.output_path("BOEBaseRates"),
            PathBuf::from("records/BOEBaseRates.csv")
        );
    }
}
