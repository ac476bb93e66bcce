//! Output formatting for subnet data.
//!
//! This module handles formatting and outputting subnet data:
//! - [`csv`] - CSV output of child subnets
//! - [`json`] - JSON report
//! - [`terminal`] - Terminal output with colors

mod csv;
mod json;
mod terminal;

pub use csv::{csv_header, csv_row, subnet_print};
pub use json::to_json;
pub use terminal::{facts_rows, format_field, host_range_text, print_report, truncation_notice};
