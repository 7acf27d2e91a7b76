// Fetch + parse stage. Expected page problems (bad status, missing
// table) become diagnostics and an absent result; transport and
// residual parse failures propagate to the caller.

pub mod fetcher;

pub use fetcher::{HttpFetcher, PageFetcher};

use crate::model::{EmployeeRecord, ParseError, ScrapeError};
use crate::parser::{EmployeeTableParser, TableParser};
use crate::report::Reporter;
use tracing::debug;

pub fn scrape_employees(
    fetcher: &dyn PageFetcher,
    url: &str,
    reporter: &dyn Reporter,
) -> Result<Option<Vec<EmployeeRecord>>, ScrapeError> {
    let html = match fetcher.fetch(url) {
        Ok(html) => html,
        Err(ScrapeError::Status(code)) => {
            reporter.failure(&format!(
                "Failed to retrieve the page. Status Code: {}",
                code.as_u16()
            ));
            return Ok(None);
        }
        Err(e) => return Err(e),
    };

    debug!(url, bytes = html.len(), "Page fetched, parsing table");

    match EmployeeTableParser::new().parse(&html) {
        Ok(records) => {
            debug!(count = records.len(), "Rows accepted");
            Ok(Some(records))
        }
        Err(ParseError::NoTable) => {
            reporter.failure("No table found on the webpage.");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}
