//! Detail page for one ticker. Route-parameter changes restart the fetch; a
//! generation counter drops results that arrive for a superseded fetch.

use specialsits_api::types::{Dataset, TickerDetail};
use specialsits_api::{Client, Error};

use super::ViewState;
use crate::output::{self, OutputFormat};

/// Shown when the detail fetch fails.
pub const LOAD_FAILED: &str = "Failed to load ticker details. Please try again later.";

pub struct DetailView {
    generation: u64,
    state: ViewState<TickerDetail>,
}

/// Identifies one fetch started by [`DetailView::navigate`]. Resolving a
/// ticket whose generation is no longer current is a no-op.
pub struct FetchTicket {
    generation: u64,
    pub dataset: Dataset,
    pub ticker: String,
}

impl Default for DetailView {
    fn default() -> Self {
        Self::new()
    }
}

impl DetailView {
    pub fn new() -> Self {
        Self {
            generation: 0,
            state: ViewState::Loading,
        }
    }

    /// Points the view at a new dataset/ticker pair: clears any previous
    /// error or data and returns the ticket for the fetch it expects next.
    pub fn navigate(&mut self, dataset: Dataset, ticker: &str) -> FetchTicket {
        self.generation += 1;
        self.state = ViewState::Loading;
        FetchTicket {
            generation: self.generation,
            dataset,
            ticker: ticker.to_string(),
        }
    }

    /// Applies a finished fetch. A result carried by a stale ticket is
    /// discarded so an out-of-order resolution cannot overwrite newer state.
    pub fn resolve(&mut self, ticket: FetchTicket, result: Result<TickerDetail, Error>) {
        if ticket.generation != self.generation {
            tracing::debug!(
                "Dropping stale response for /{}/{}",
                ticket.dataset,
                ticket.ticker
            );
            return;
        }
        match result {
            Ok(detail) => self.state = ViewState::Loaded(detail),
            Err(e) => {
                tracing::error!("Error fetching ticker details: {}", e);
                self.state = ViewState::Failed(LOAD_FAILED.to_string());
            }
        }
    }

    pub fn state(&self) -> &ViewState<TickerDetail> {
        &self.state
    }
}

pub async fn run(client: &Client, dataset: Dataset, ticker: &str, format: &OutputFormat) {
    let mut view = DetailView::new();
    let ticket = view.navigate(dataset, ticker);
    let result = client.get_ticker_details(ticket.dataset, &ticket.ticker).await;
    view.resolve(ticket, result);
    match view.state() {
        ViewState::Loading => println!("Loading..."),
        ViewState::Failed(msg) => println!("{}", msg),
        ViewState::Loaded(detail) => output::print_detail(detail, format),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use specialsits_api::types::FilingDetails;

    fn detail_for(dataset: Dataset, ticker: &str) -> TickerDetail {
        TickerDetail {
            dataset: dataset.to_string(),
            ticker: ticker.to_string(),
            details: FilingDetails::default(),
        }
    }

    fn loaded_ticker(view: &DetailView) -> &str {
        match view.state() {
            ViewState::Loaded(detail) => &detail.ticker,
            _ => panic!("expected Loaded state"),
        }
    }

    #[test]
    fn starts_loading() {
        let view = DetailView::new();
        assert!(matches!(view.state(), ViewState::Loading));
    }

    #[test]
    fn resolve_success_loads_detail() {
        let mut view = DetailView::new();
        let ticket = view.navigate(Dataset::Oddlots, "ABC");
        view.resolve(ticket, Ok(detail_for(Dataset::Oddlots, "ABC")));
        assert_eq!(loaded_ticker(&view), "ABC");
    }

    #[test]
    fn resolve_failure_surfaces_message() {
        let mut view = DetailView::new();
        let ticket = view.navigate(Dataset::Oddlots, "ABC");
        view.resolve(ticket, Err(Error::RequestFailed));
        match view.state() {
            ViewState::Failed(msg) => assert_eq!(msg, LOAD_FAILED),
            _ => panic!("expected Failed state"),
        }
    }

    #[test]
    fn navigate_clears_previous_error() {
        let mut view = DetailView::new();
        let ticket = view.navigate(Dataset::Oddlots, "ABC");
        view.resolve(ticket, Err(Error::RequestFailed));

        let ticket = view.navigate(Dataset::Spinoffs, "XYZ");
        assert!(matches!(view.state(), ViewState::Loading));
        assert_eq!(ticket.dataset, Dataset::Spinoffs);
        assert_eq!(ticket.ticker, "XYZ");

        view.resolve(ticket, Ok(detail_for(Dataset::Spinoffs, "XYZ")));
        assert_eq!(loaded_ticker(&view), "XYZ");
    }

    #[test]
    fn stale_success_does_not_overwrite_newer_fetch() {
        let mut view = DetailView::new();
        let stale = view.navigate(Dataset::Oddlots, "ABC");
        let current = view.navigate(Dataset::Spinoffs, "XYZ");

        // The older fetch resolves after the newer one was started.
        view.resolve(stale, Ok(detail_for(Dataset::Oddlots, "ABC")));
        assert!(matches!(view.state(), ViewState::Loading));

        view.resolve(current, Ok(detail_for(Dataset::Spinoffs, "XYZ")));
        assert_eq!(loaded_ticker(&view), "XYZ");
    }

    #[test]
    fn stale_error_does_not_clobber_loaded_state() {
        let mut view = DetailView::new();
        let stale = view.navigate(Dataset::Oddlots, "ABC");
        let current = view.navigate(Dataset::Spinoffs, "XYZ");

        view.resolve(current, Ok(detail_for(Dataset::Spinoffs, "XYZ")));
        view.resolve(stale, Err(Error::RequestFailed));
        assert_eq!(loaded_ticker(&view), "XYZ");
    }
}
