//! Ticker detail types: filing links and fields extracted from the filings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Full detail record for one ticker, returned by `/{dataset}/{ticker}`.
#[derive(Serialize, Deserialize)]
pub struct TickerDetail {
    /// Dataset the ticker was looked up in.
    pub dataset: String,

    /// Stock symbol.
    pub ticker: String,

    /// Extracted filing fields. Anything the pipeline did not find is absent.
    pub details: FilingDetails,
}

/// Fields extracted from a ticker's filings. Every field is optional; the
/// extraction pipeline only fills what it finds in the documents.
#[derive(Serialize, Deserialize, Default)]
pub struct FilingDetails {
    /// Links to the filing documents.
    pub urls: Option<Vec<String>>,

    /// Filing numbers, index-aligned with `urls`.
    pub filing_numbers: Option<Vec<String>>,

    /// Filing dates as `YYYY-MM-DD` strings. Not guaranteed well-formed.
    pub dates_filing: Option<Vec<String>>,

    pub expiration_date: Option<String>,
    pub lower_price: Option<String>,
    pub currency: Option<String>,
    pub oddlot_priority: Option<String>,
    pub shareholder_requirements: Option<String>,
    pub risks: Option<String>,
    pub regulatory_approvals: Option<String>,
    pub tax_consequences: Option<String>,
}

impl FilingDetails {
    /// Most recent filing date, parsed from `dates_filing`. Entries that do
    /// not parse as a calendar date never win the comparison; `None` when the
    /// list is absent, empty, or contains no valid date.
    pub fn latest_filing_date(&self) -> Option<NaiveDate> {
        self.dates_filing
            .as_deref()?
            .iter()
            .filter_map(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
            .max()
    }

    /// Label for the filing link at `index`: the matching filing number when
    /// one exists, otherwise the 1-based position in the list.
    pub fn filing_label(&self, index: usize) -> String {
        match self.filing_numbers.as_ref().and_then(|nums| nums.get(index)) {
            Some(num) => format!("Filing {}", num),
            None => format!("Filing {}", index + 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_dates(dates: &[&str]) -> FilingDetails {
        FilingDetails {
            dates_filing: Some(dates.iter().map(|s| s.to_string()).collect()),
            ..Default::default()
        }
    }

    #[test]
    fn latest_date_picks_maximum() {
        let details = with_dates(&["2023-01-01", "2023-06-15", "2022-12-31"]);
        assert_eq!(
            details.latest_filing_date().unwrap().to_string(),
            "2023-06-15"
        );
    }

    #[test]
    fn latest_date_absent_list() {
        assert_eq!(FilingDetails::default().latest_filing_date(), None);
    }

    #[test]
    fn latest_date_empty_list() {
        assert_eq!(with_dates(&[]).latest_filing_date(), None);
    }

    #[test]
    fn malformed_date_never_wins() {
        let details = with_dates(&["2023-01-01", "not-a-date", "2022-06-30"]);
        assert_eq!(
            details.latest_filing_date().unwrap().to_string(),
            "2023-01-01"
        );
    }

    #[test]
    fn all_dates_malformed() {
        let details = with_dates(&["soon", "13/45/2023"]);
        assert_eq!(details.latest_filing_date(), None);
    }

    #[test]
    fn label_uses_filing_number_when_present() {
        let details = FilingDetails {
            urls: Some(vec!["a".to_string(), "b".to_string()]),
            filing_numbers: Some(vec!["F1".to_string()]),
            ..Default::default()
        };
        assert_eq!(details.filing_label(0), "Filing F1");
        assert_eq!(details.filing_label(1), "Filing 2");
    }

    #[test]
    fn label_falls_back_without_filing_numbers() {
        assert_eq!(FilingDetails::default().filing_label(0), "Filing 1");
    }
}
