//! Summary types: per-dataset ticker listings.

use serde::{Deserialize, Serialize};

/// One ticker's aggregate entry in a dataset summary.
#[derive(Serialize, Deserialize)]
pub struct TickerSummary {
    /// Stock symbol, unique within its dataset.
    pub ticker: String,

    /// Number of filings on record for this ticker.
    pub num_filings: i64,

    /// Date of the most recent filing, as reported by the backend.
    pub latest_filing_date: String,

    /// Filing numbers known at summary level. Older backends omit this field.
    #[serde(default)]
    pub filing_numbers: Vec<String>,
}

/// Aggregate state of one dataset. Replaced wholesale on each fetch.
#[derive(Serialize, Deserialize)]
pub struct DatasetSummary {
    /// Total number of source files backing the dataset.
    pub total_files: i64,

    /// All tickers present in the dataset.
    pub tickers: Vec<TickerSummary>,
}

/// Composite root for the summary page: both datasets, fetched together.
#[derive(Serialize, Deserialize)]
pub struct SummaryData {
    pub oddlots: DatasetSummary,
    pub spinoffs: DatasetSummary,
}
