//! Subnet calculation logic.
//!
//! This module contains the engine operating on the domain models:
//! - [`calculate`] - Facts for a single CIDR query
//! - [`children`] - Enumeration of child subnets of a parent network

mod calculate;
mod children;

// Re-export public functions
pub use calculate::{calculate, facts_for};
pub use children::{
    list_child_subnets, theoretical_child_count, ChildListing, ChildSubnets, MAX_CHILD_SUBNETS,
};
