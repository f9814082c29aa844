mod dataset;
pub use self::dataset::Dataset;

mod summary;
pub use self::summary::{DatasetSummary, SummaryData, TickerSummary};

mod detail;
pub use self::detail::{FilingDetails, TickerDetail};
