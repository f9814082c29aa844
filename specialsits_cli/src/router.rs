//! Maps client routes to views. `/` is the summary page; `/{dataset}/{ticker}`
//! is a ticker detail page. Pure mapping, no guards or redirects.

use anyhow::{bail, Result};
use specialsits_api::types::Dataset;

#[derive(Debug, PartialEq, Eq)]
pub enum Route {
    Summary,
    Ticker { dataset: Dataset, ticker: String },
}

impl Route {
    /// Parses a route path. The leading slash is optional.
    pub fn parse(path: &str) -> Result<Route> {
        let rest = path.strip_prefix('/').unwrap_or(path);
        if rest.is_empty() {
            return Ok(Route::Summary);
        }
        let segments: Vec<&str> = rest.split('/').collect();
        match segments.as_slice() {
            [dataset, ticker] if !ticker.is_empty() => Ok(Route::Ticker {
                dataset: dataset.parse()?,
                ticker: (*ticker).to_string(),
            }),
            _ => bail!("Unrecognized route: {}", path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_maps_to_summary() {
        assert_eq!(Route::parse("/").unwrap(), Route::Summary);
        assert_eq!(Route::parse("").unwrap(), Route::Summary);
    }

    #[test]
    fn dataset_and_ticker_map_to_detail() {
        assert_eq!(
            Route::parse("/oddlots/ABC").unwrap(),
            Route::Ticker {
                dataset: Dataset::Oddlots,
                ticker: "ABC".to_string(),
            }
        );
        assert_eq!(
            Route::parse("spinoffs/XYZ").unwrap(),
            Route::Ticker {
                dataset: Dataset::Spinoffs,
                ticker: "XYZ".to_string(),
            }
        );
    }

    #[test]
    fn unknown_dataset_is_an_error() {
        assert!(Route::parse("/mergers/ABC").is_err());
    }

    #[test]
    fn wrong_segment_counts_are_errors() {
        assert!(Route::parse("/oddlots").is_err());
        assert!(Route::parse("/oddlots/").is_err());
        assert!(Route::parse("/oddlots/ABC/extra").is_err());
    }
}
