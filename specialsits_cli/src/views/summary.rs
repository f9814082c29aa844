//! Summary page: both datasets fetched together, rendered as two cards.

use specialsits_api::types::SummaryData;
use specialsits_api::Client;

use super::ViewState;
use crate::output::{self, OutputFormat};

/// Shown when the summary fetch fails.
pub const LOAD_FAILED: &str = "Failed to load filing summary. Please try again later.";

pub struct SummaryView {
    state: ViewState<SummaryData>,
}

impl Default for SummaryView {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryView {
    pub fn new() -> Self {
        Self {
            state: ViewState::Loading,
        }
    }

    /// Runs the single summary fetch. Both dataset requests must succeed;
    /// a failure in either leaves the view in `Failed`.
    pub async fn load(&mut self, client: &Client) {
        match client.get_summary().await {
            Ok(data) => self.state = ViewState::Loaded(data),
            Err(e) => {
                tracing::error!("Error fetching summary data: {}", e);
                self.state = ViewState::Failed(LOAD_FAILED.to_string());
            }
        }
    }

    pub fn state(&self) -> &ViewState<SummaryData> {
        &self.state
    }
}

pub async fn run(client: &Client, format: &OutputFormat) {
    let mut view = SummaryView::new();
    view.load(client).await;
    match view.state() {
        ViewState::Loading => println!("Loading..."),
        ViewState::Failed(msg) => println!("{}", msg),
        ViewState::Loaded(data) => output::print_summary(data, format),
    }
}
