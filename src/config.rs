use serde::Deserialize;
use std::fs;

/// Default scrape target and output file. Overridable via `config.json`
/// in the working directory; no CLI flags or environment variables.
pub const DEFAULT_SOURCE_URL: &str = "http://darkmind.uk/SCRAPESITE/employees.html";
pub const DEFAULT_OUTPUT_FILE: &str = "employees.csv";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub source_url: String,
    pub output_file: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
        }
    }
}

pub fn load_config(path: &str) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}
