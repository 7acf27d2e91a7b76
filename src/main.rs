use staffgraph::chart;
use staffgraph::config::{self, AppConfig};
use staffgraph::exporter;
use staffgraph::report::ConsoleReporter;
use staffgraph::scraper::{HttpFetcher, scrape_employees};

use std::path::Path;
use tracing::info;

const CONFIG_FILE: &str = "config.json";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("😱 Panic occurred: {panic_info:?}");
    }));

    // Fixed URL and output file unless config.json overrides them.
    let config = if Path::new(CONFIG_FILE).exists() {
        config::load_config(CONFIG_FILE)?
    } else {
        AppConfig::default()
    };

    let reporter = ConsoleReporter;
    let fetcher = HttpFetcher::new()?;

    info!("Fetching employee data from {}...", config.source_url);
    let records = scrape_employees(&fetcher, &config.source_url, &reporter)?.unwrap_or_default();

    info!("Saving {} records...", records.len());
    exporter::save_to_csv(&records, &config.output_file, &reporter)?;

    info!("Rendering summary charts...");
    chart::visualize(&records, &reporter)?;

    Ok(())
}
