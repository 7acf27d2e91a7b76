// Core structs: EmployeeRecord, per-stage errors
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One accepted row of the employee table. Field order matches the
/// column order of the source table and of the exported CSV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    #[serde(rename = "Employee Name")]
    pub name: String,
    #[serde(rename = "Job Title")]
    pub job_title: String,
    #[serde(rename = "Department")]
    pub department: String,
    #[serde(rename = "Email Address")]
    pub email: String,
}

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status code: {0}")]
    Status(reqwest::StatusCode),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid selector: {0}")]
    Selector(String),
    #[error("no table element in document")]
    NoTable,
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv write failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("file write failed: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("chart rendering failed: {0}")]
    Draw(String),
    #[error("window error: {0}")]
    Window(#[from] minifb::Error),
}
