// Analyzer module: frequency breakdowns of the scraped records.

pub mod frequency;

pub use frequency::count_values;

use crate::model::EmployeeRecord;

/// The two aggregations the summary figure is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkforceSummary {
    pub department_counts: Vec<(String, usize)>,
    pub job_title_counts: Vec<(String, usize)>,
}

pub fn summarize(records: &[EmployeeRecord]) -> WorkforceSummary {
    WorkforceSummary {
        department_counts: count_values(records.iter().map(|r| r.department.as_str())),
        job_title_counts: count_values(records.iter().map(|r| r.job_title.as_str())),
    }
}
