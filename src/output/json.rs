//! JSON output for scripting.

use crate::models::{ChildSubnetFacts, SubnetFacts};
use crate::processing::ChildListing;
use serde::Serialize;

#[derive(Serialize)]
struct Report<'a> {
    subnet: &'a SubnetFacts,
    children: &'a [ChildSubnetFacts],
    shown: usize,
    total: u64,
}

/// Pretty JSON document with the subnet and its (capped) child list.
pub fn to_json(facts: &SubnetFacts, children: Option<&ChildListing>) -> serde_json::Result<String> {
    let report = Report {
        subnet: facts,
        children: children.map(|c| c.subnets.as_slice()).unwrap_or(&[]),
        shown: children.map(|c| c.subnets.len()).unwrap_or(0),
        total: children.map(|c| c.total).unwrap_or(0),
    };
    serde_json::to_string_pretty(&report)
}
