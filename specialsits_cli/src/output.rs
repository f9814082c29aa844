use serde::Serialize;
use specialsits_api::types::{Dataset, DatasetSummary, FilingDetails, SummaryData, TickerDetail};
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Sentinel rendered for any absent optional field.
const NOT_AVAILABLE: &str = "N/A";

#[derive(Tabled, Serialize)]
struct TickerRow {
    #[tabled(rename = "Ticker")]
    #[serde(rename = "Ticker")]
    ticker: String,
    #[tabled(rename = "Filings")]
    #[serde(rename = "Filings")]
    filings: i64,
    #[tabled(rename = "Latest")]
    #[serde(rename = "Latest")]
    latest: String,
    #[tabled(rename = "Route")]
    #[serde(rename = "Route")]
    route: String,
}

#[derive(Tabled)]
struct DetailRow {
    #[tabled(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

// -- Row builders --

fn build_ticker_rows(dataset: Dataset, summary: &DatasetSummary) -> Vec<TickerRow> {
    summary
        .tickers
        .iter()
        .map(|t| TickerRow {
            ticker: t.ticker.clone(),
            filings: t.num_filings,
            latest: t.latest_filing_date.clone(),
            route: format!("/{}/{}", dataset, t.ticker),
        })
        .collect()
}

fn build_detail_rows(detail: &TickerDetail) -> Vec<DetailRow> {
    let d = &detail.details;
    vec![
        DetailRow {
            field: "Dataset",
            value: detail.dataset.clone(),
        },
        DetailRow {
            field: "Ticker",
            value: detail.ticker.clone(),
        },
        DetailRow {
            field: "Filing Links",
            value: filing_links(d),
        },
        DetailRow {
            field: "Latest Filing Date",
            value: latest_filing_date(d),
        },
        DetailRow {
            field: "Expiration Date",
            value: or_na(&d.expiration_date),
        },
        DetailRow {
            field: "Lower Price",
            value: or_na(&d.lower_price),
        },
        DetailRow {
            field: "Currency",
            value: or_na(&d.currency),
        },
        DetailRow {
            field: "Odd Lot Priority",
            value: or_na(&d.oddlot_priority),
        },
        DetailRow {
            field: "Shareholder Requirements",
            value: or_na(&d.shareholder_requirements),
        },
        DetailRow {
            field: "Risks",
            value: or_na(&d.risks),
        },
        DetailRow {
            field: "Regulatory Approvals",
            value: or_na(&d.regulatory_approvals),
        },
        DetailRow {
            field: "Tax Consequences",
            value: or_na(&d.tax_consequences),
        },
    ]
}

fn or_na(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Ordered filing-link list, one entry per URL, labeled by filing number when
/// one is aligned with the URL and by 1-based position otherwise.
fn filing_links(details: &FilingDetails) -> String {
    match details.urls.as_deref() {
        Some(urls) => urls
            .iter()
            .enumerate()
            .map(|(i, url)| format!("{}: {}", details.filing_label(i), url))
            .collect::<Vec<_>>()
            .join("\n"),
        None => NOT_AVAILABLE.to_string(),
    }
}

fn latest_filing_date(details: &FilingDetails) -> String {
    match details.latest_filing_date() {
        Some(date) => date.to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

// -- Summary output --

pub fn print_summary(data: &SummaryData, format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(data),
        OutputFormat::Table => {
            print_dataset_card(Dataset::Oddlots, &data.oddlots);
            println!();
            print_dataset_card(Dataset::Spinoffs, &data.spinoffs);
        }
    }
}

fn print_dataset_card(dataset: Dataset, summary: &DatasetSummary) {
    let title = match dataset {
        Dataset::Oddlots => "Oddlots",
        Dataset::Spinoffs => "Spinoffs",
    };
    println!("{} (total files: {})", title, summary.total_files);
    println!("{}", Table::new(build_ticker_rows(dataset, summary)));
}

// -- Detail output --

pub fn print_detail(detail: &TickerDetail, format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(detail),
        OutputFormat::Table => println!("{}", Table::new(build_detail_rows(detail))),
    }
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}
