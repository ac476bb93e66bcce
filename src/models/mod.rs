//! Domain models for the subnet calculator.
//!
//! This module contains the core data structures and address arithmetic:
//! - [`Cidr`] - IPv4 address with prefix length, plus the dotted-quad codec
//! - [`Classful`] - Legacy A-E address class
//! - [`SubnetFacts`] and [`ChildSubnetFacts`] - Computed subnet records

mod classful;
mod ipv4;
mod subnet;

// Re-export public types
pub use classful::Classful;
pub use ipv4::{
    block_size, broadcast_addr, clamp_prefix, format_address, is_valid_ipv4, mask_to_prefix,
    mask_to_string, network_addr, parse_address, prefix_to_mask, wildcard_from_mask, Cidr,
    PrefixValue, DEFAULT_PREFIX, MAX_LENGTH,
};
pub use subnet::{host_range, total_addresses, usable_hosts, ChildSubnetFacts, SubnetFacts};
