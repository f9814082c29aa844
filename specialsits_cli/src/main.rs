mod output;
mod router;
mod views;

use anyhow::Result;
use clap::{Parser, Subcommand};
use specialsits_api::types::Dataset;
use specialsits_api::Client;

use crate::output::OutputFormat;
use crate::router::Route;

#[derive(Parser)]
#[command(name = "specialsits")]
#[command(about = "Browse special-situations filing data (oddlots and spinoffs)")]
struct Cli {
    /// Output format: table or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Base URL of the filings API
    #[arg(long, default_value = "http://localhost:8000/api/v1", global = true)]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show ticker summaries for both datasets
    Summary,
    /// Show one ticker's filing details
    Ticker {
        /// Dataset name: oddlots or spinoffs
        dataset: Dataset,
        /// Ticker symbol
        ticker: String,
    },
    /// Open a client route, e.g. "/" or "/oddlots/ABC"
    Open {
        /// Route path
        path: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("specialsits=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    let client = Client::with_base_url(&cli.api_url);

    let route = match cli.command {
        Commands::Summary => Route::Summary,
        Commands::Ticker { dataset, ticker } => Route::Ticker { dataset, ticker },
        Commands::Open { path } => Route::parse(&path)?,
    };

    match route {
        Route::Summary => views::summary::run(&client, &format).await,
        Route::Ticker { dataset, ticker } => {
            views::detail::run(&client, dataset, &ticker, &format).await
        }
    }

    Ok(())
}
