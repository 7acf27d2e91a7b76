pub mod employee_table;

pub use employee_table::{EmployeeTableParser, TableParser};
