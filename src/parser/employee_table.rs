// Employee-directory HTML parsing
use crate::model::{EmployeeRecord, ParseError};
use scraper::{Html, Selector};

pub trait TableParser {
    fn parse(&self, html: &str) -> Result<Vec<EmployeeRecord>, ParseError>;
}

/// Extracts the first `<table>` of the page. The first `<tr>` is assumed
/// to be a header and is always discarded, even on a single-row table.
pub struct EmployeeTableParser;

impl EmployeeTableParser {
    pub fn new() -> Self {
        Self
    }
}

impl TableParser for EmployeeTableParser {
    fn parse(&self, html: &str) -> Result<Vec<EmployeeRecord>, ParseError> {
        let document = Html::parse_document(html);

        let table_selector =
            Selector::parse("table").map_err(|e| ParseError::Selector(e.to_string()))?;
        let row_selector = Selector::parse("tr").unwrap();
        let cell_selector = Selector::parse("td").unwrap();

        let table = document
            .select(&table_selector)
            .next()
            .ok_or(ParseError::NoTable)?;

        let mut records = Vec::new();

        for row in table.select(&row_selector).skip(1) {
            let cells: Vec<String> = row
                .select(&cell_selector)
                .map(|cell| cell.text().collect::<String>().trim().to_string())
                .collect();

            // Rows with any other cell count are dropped silently.
            if let [name, job_title, department, email] = cells.as_slice() {
                records.push(EmployeeRecord {
                    name: name.clone(),
                    job_title: job_title.clone(),
                    department: department.clone(),
                    email: email.clone(),
                });
            }
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(table_body: &str) -> String {
        format!("<html><body><h1>Staff</h1><table>{table_body}</table></body></html>")
    }

    #[test]
    fn no_table_is_reported_as_missing() {
        let parser = EmployeeTableParser::new();
        let result = parser.parse("<html><body><p>nothing here</p></body></html>");
        assert!(matches!(result, Err(ParseError::NoTable)));
    }

    #[test]
    fn rows_are_extracted_in_document_order_with_trimming() {
        let html = page(
            "<tr><th>Name</th><th>Title</th><th>Dept</th><th>Email</th></tr>\
             <tr><td> Alice </td><td>Engineer</td><td>R&amp;D</td><td>a@x.com</td></tr>\
             <tr><td>Bob</td><td>\n Manager </td><td>Sales</td><td>b@x.com</td></tr>",
        );

        let records = EmployeeTableParser::new().parse(&html).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Alice");
        assert_eq!(records[0].department, "R&D");
        assert_eq!(records[1].name, "Bob");
        assert_eq!(records[1].job_title, "Manager");
    }

    #[test]
    fn rows_with_wrong_cell_count_are_dropped() {
        let html = page(
            "<tr><th>h</th></tr>\
             <tr><td>Three</td><td>Cells</td><td>Only</td></tr>\
             <tr><td>Alice</td><td>Engineer</td><td>R&amp;D</td><td>a@x.com</td></tr>\
             <tr><td>Five</td><td>Cells</td><td>In</td><td>This</td><td>Row</td></tr>",
        );

        let records = EmployeeTableParser::new().parse(&html).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Alice");
    }

    #[test]
    fn first_row_is_discarded_even_when_it_is_data() {
        let html = page("<tr><td>Only</td><td>Row</td><td>Of</td><td>Data</td></tr>");
        let records = EmployeeTableParser::new().parse(&html).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn only_the_first_table_is_read() {
        let html = "<html><body>\
             <table><tr><th>h</th></tr>\
             <tr><td>Alice</td><td>Engineer</td><td>R&amp;D</td><td>a@x.com</td></tr></table>\
             <table><tr><th>h</th></tr>\
             <tr><td>Zoe</td><td>Intern</td><td>Ops</td><td>z@x.com</td></tr></table>\
             </body></html>";

        let records = EmployeeTableParser::new().parse(html).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Alice");
    }

    #[test]
    fn nested_cell_markup_is_flattened_into_text() {
        let html = page(
            "<tr><th>h</th></tr>\
             <tr><td><b>Alice</b></td><td><span>Engineer</span></td>\
             <td>R&amp;D</td><td><a href=\"mailto:a@x.com\">a@x.com</a></td></tr>",
        );

        let records = EmployeeTableParser::new().parse(&html).unwrap();
        assert_eq!(records[0].name, "Alice");
        assert_eq!(records[0].email, "a@x.com");
    }
}
