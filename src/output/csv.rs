//! CSV output formatting for child subnets.

use crate::models::ChildSubnetFacts;
use crate::processing::ChildListing;
use colored::Colorize;
use itertools::Itertools;

use super::terminal::{format_field, truncation_notice};

const HEADER: [&str; 7] = [
    "cnt",
    "subnet_cidr",
    "broadcast",
    "first_host",
    "last_host",
    "total",
    "usable",
];

/// CSV header line.
pub fn csv_header() -> String {
    HEADER.iter().map(|h| format!("\"{h}\"")).join(",")
}

/// A single CSV row; `j` is the 1-based row counter.
pub fn csv_row(j: usize, row: &ChildSubnetFacts) -> String {
    format!(
        r#"{j},{subnet_cidr},{broadcast},{first},{last},{total},{usable}"#,
        j = format_field(j, 6),
        subnet_cidr = format_field(row.cidr(), 18),
        broadcast = format_field(row.broadcast_str(), 17),
        first = format_field(row.first_host_str().unwrap_or_else(|| "None".to_string()), 17),
        last = format_field(row.last_host_str().unwrap_or_else(|| "None".to_string()), 17),
        total = format_field(row.total_hosts, 12),
        usable = format_field(row.usable_hosts, 12),
    )
}

/// Print child subnet data as CSV to stdout.
pub fn subnet_print(listing: &ChildListing) {
    log::info!("# Got child subnet count = {}", listing.subnets.len());

    println!("{}", csv_header());
    for (i, row) in listing.subnets.iter().enumerate() {
        println!("{}", csv_row(i + 1, row));
    }

    if let Some(notice) = truncation_notice(listing) {
        eprintln!("#{}# {notice}", "NOTE".on_red());
    }
}
