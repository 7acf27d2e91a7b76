// Chart module: aggregation rendering and interactive display.

pub mod renderer;
pub mod window;

pub use renderer::{FIGURE_HEIGHT, FIGURE_WIDTH, render_dashboard};

use crate::analyzer;
use crate::model::{ChartError, EmployeeRecord};
use crate::report::Reporter;
use tracing::debug;

/// Aggregates the records and shows the two-panel summary figure.
/// The window blocks until it is closed; nothing is written to disk.
pub fn visualize(records: &[EmployeeRecord], reporter: &dyn Reporter) -> Result<(), ChartError> {
    if records.is_empty() {
        reporter.failure("No data to analyze.");
        return Ok(());
    }

    let summary = analyzer::summarize(records);
    debug!(
        departments = summary.department_counts.len(),
        job_titles = summary.job_title_counts.len(),
        "Summary computed, rendering figure"
    );

    let mut buffer = vec![0u8; FIGURE_WIDTH * FIGURE_HEIGHT * 3];
    render_dashboard(
        &summary,
        &mut buffer,
        (FIGURE_WIDTH as u32, FIGURE_HEIGHT as u32),
    )?;

    window::present("Employee Summary", &buffer, FIGURE_WIDTH, FIGURE_HEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct CapturingReporter {
        failures: RefCell<Vec<String>>,
    }

    impl Reporter for CapturingReporter {
        fn success(&self, _message: &str) {}

        fn failure(&self, message: &str) {
            self.failures.borrow_mut().push(message.to_string());
        }
    }

    #[test]
    fn empty_records_skip_the_figure_with_a_diagnostic() {
        let reporter = CapturingReporter::default();
        visualize(&[], &reporter).unwrap();
        assert_eq!(
            reporter.failures.borrow().as_slice(),
            ["No data to analyze."]
        );
    }
}
