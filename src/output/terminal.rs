//! Terminal output utilities.
//!
//! Labelled key/value report for a single subnet and a compact listing of
//! its child subnets.

use crate::models::{ChildSubnetFacts, SubnetFacts};
use crate::processing::ChildListing;
use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// `first – last`, or `(none)` for /31 and /32.
pub fn host_range_text(first: Option<String>, last: Option<String>) -> String {
    match (first, last) {
        (Some(first), Some(last)) => format!("{first} – {last}"),
        _ => "(none)".to_string(),
    }
}

/// Label/value pairs in display order.
pub fn facts_rows(facts: &SubnetFacts) -> Vec<(&'static str, String)> {
    vec![
        ("IP Address", facts.ip_str()),
        ("Network Class", facts.classful.to_string()),
        ("Prefix Length", format!("/{}", facts.prefix)),
        ("Subnet Mask", facts.mask_str()),
        ("Wildcard Mask", facts.wildcard_str()),
        ("Network Address", facts.network_str()),
        ("Broadcast Address", facts.broadcast_str()),
        ("Total Hosts", facts.total_hosts.to_string()),
        ("Usable Hosts", facts.usable_hosts.to_string()),
        (
            "Host Address Range",
            host_range_text(facts.first_host_str(), facts.last_host_str()),
        ),
    ]
}

fn child_line(child: &ChildSubnetFacts) -> String {
    format!(
        "{cidr:<19} bc {broadcast:<16} hosts {range} ({usable} usable)",
        cidr = child.cidr().to_string(),
        broadcast = child.broadcast_str(),
        range = host_range_text(child.first_host_str(), child.last_host_str()),
        usable = child.usable_hosts
    )
}

/// "Showing N of M subnets" when the listing hit the cap.
pub fn truncation_notice(listing: &ChildListing) -> Option<String> {
    listing.is_truncated().then(|| {
        format!(
            "Showing {shown} of {total} subnets",
            shown = listing.subnets.len(),
            total = listing.total
        )
    })
}

/// Print the subnet report and, when given, its child subnets to stdout.
pub fn print_report(facts: &SubnetFacts, children: Option<&ChildListing>) {
    for (label, value) in facts_rows(facts) {
        println!("{:>20}: {}", label.bold(), value);
    }

    let Some(listing) = children else {
        return;
    };
    let child_prefix = listing
        .subnets
        .first()
        .map(|c| format!("/{}", c.prefix))
        .unwrap_or_else(|| "-".to_string());
    println!();
    println!(
        "Parent Network: {} split into {}",
        facts.network_cidr().to_string().on_blue(),
        child_prefix
    );
    if listing.subnets.is_empty() {
        println!(
            "{} choose a prefix >= /{} to subdivide the parent network",
            "Tip:".yellow(),
            facts.prefix
        );
        return;
    }
    for child in &listing.subnets {
        println!("  {}", child_line(child));
    }
    if let Some(notice) = truncation_notice(listing) {
        println!("#{}# {notice}", "NOTE".on_red());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::calculate;

    #[test]
    fn test_format_field_subnet_values() {
        let facts = calculate("172.16.5.9/23").unwrap();
        assert_eq!(
            format_field(facts.network_cidr(), 18),
            "   \"172.16.4.0/23\""
        );
        assert_eq!(format_field(facts.usable_hosts, 8), "   \"510\"");
        let wide = format_field(facts.broadcast_str(), 4);
        assert_eq!(wide, "\"172.16.5.255\"");
    }

    #[test]
    fn test_facts_rows() {
        let facts = calculate("192.168.1.10/24").unwrap();
        let rows = facts_rows(&facts);
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0], ("IP Address", "192.168.1.10".to_string()));
        assert_eq!(rows[1].1, "Class C");
        assert_eq!(rows[2].1, "/24");
        assert_eq!(rows[9].1, "192.168.1.1 – 192.168.1.254");
    }

    #[test]
    fn test_host_range_none() {
        let facts = calculate("10.0.0.0/31").unwrap();
        assert_eq!(facts_rows(&facts)[9].1, "(none)");
    }

    #[test]
    fn test_truncation_notice() {
        let facts = calculate("10.0.0.0/16").unwrap();
        let listing = ChildListing::new(facts.network, facts.prefix, 28);
        assert_eq!(
            truncation_notice(&listing).as_deref(),
            Some("Showing 1024 of 4096 subnets")
        );
        let listing = ChildListing::new(facts.network, facts.prefix, 20);
        assert_eq!(truncation_notice(&listing), None);
    }

    #[test]
    fn test_child_line() {
        let facts = calculate("192.168.1.0/24").unwrap();
        let listing = ChildListing::new(facts.network, facts.prefix, 26);
        let line = child_line(&listing.subnets[1]);
        assert!(line.starts_with("192.168.1.64/26"));
        assert!(line.contains("bc 192.168.1.127"));
        assert!(line.contains("192.168.1.65 – 192.168.1.126"));
    }
}
