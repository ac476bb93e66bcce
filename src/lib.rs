//! IPv4 subnet calculator.
//!
//! Computes subnet facts for a CIDR (`192.168.1.10/24`) and enumerates the
//! child subnets of a network split into a finer prefix.
//!
//! ```
//! use subnet_calc::{calculate, list_child_subnets};
//!
//! let facts = calculate("192.168.1.10/24").unwrap();
//! assert_eq!(facts.network_str(), "192.168.1.0");
//!
//! let children = list_child_subnets(facts.network, facts.prefix, 26);
//! assert_eq!(children.len(), 4);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

pub use error::SubnetError;
pub use models::{ChildSubnetFacts, Cidr, Classful, SubnetFacts};
pub use processing::{
    calculate, list_child_subnets, theoretical_child_count, ChildListing, MAX_CHILD_SUBNETS,
};
