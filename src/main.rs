use anyhow::Result;
use clap::Parser;

use currency_converter_tui::api::{DEFAULT_BASE_URL, IndicatorApi};
use currency_converter_tui::app::App;
use currency_converter_tui::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging (written to stderr)
    #[arg(short, long)]
    verbose: bool,

    /// Base URL of the indicator API
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    api_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let api = IndicatorApi::new(&cli.api_url);
    let mut app = App::new(api);
    app.load_rates().await;

    let result = app.run().await;
    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
