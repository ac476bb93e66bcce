//! Splitting a parent network into child subnets.
//!
//! The walk starts at the parent network address and steps by the child
//! block size until it passes the parent broadcast. At most
//! [`MAX_CHILD_SUBNETS`] records are produced.

use crate::models::{
    block_size, broadcast_addr, host_range, total_addresses, usable_hosts, ChildSubnetFacts,
    MAX_LENGTH,
};

/// Hard cap on the number of child records returned by [`list_child_subnets`].
pub const MAX_CHILD_SUBNETS: usize = 1024;

/// Lazy walk over the child blocks of a parent network.
#[derive(Debug, Clone)]
pub struct ChildSubnets {
    next: u64,
    last: u64,
    step: u64,
    prefix: u8,
}

impl ChildSubnets {
    /// Iterator over every `/child_prefix` block inside
    /// `parent_network/parent_prefix`. Empty when the child block would be
    /// larger than the parent.
    pub fn new(parent_network: u32, parent_prefix: u8, child_prefix: u8) -> ChildSubnets {
        let step = block_size(child_prefix);
        if child_prefix < parent_prefix || child_prefix > MAX_LENGTH {
            return ChildSubnets {
                next: 1,
                last: 0,
                step,
                prefix: child_prefix,
            };
        }
        let parent_broadcast = broadcast_addr(parent_network, parent_prefix);
        ChildSubnets {
            next: u64::from(parent_network),
            last: u64::from(parent_broadcast),
            step,
            prefix: child_prefix,
        }
    }
}

impl Iterator for ChildSubnets {
    type Item = ChildSubnetFacts;

    fn next(&mut self) -> Option<ChildSubnetFacts> {
        if self.next > self.last {
            return None;
        }
        let network = self.next as u32;
        // Truncation keeps the 32-bit wraparound for unaligned parents.
        let broadcast = (self.next + self.step - 1) as u32;
        self.next += self.step;

        let range = host_range(network, broadcast, self.prefix);
        log::trace!("child block {network:#010x}/{prefix}", prefix = self.prefix);
        Some(ChildSubnetFacts {
            network,
            broadcast,
            prefix: self.prefix,
            total_hosts: total_addresses(self.prefix),
            usable_hosts: usable_hosts(self.prefix),
            first_host: range.map(|(first, _)| first),
            last_host: range.map(|(_, last)| last),
        })
    }
}

/// Child subnets of `parent_network/parent_prefix` at `child_prefix`,
/// ascending by network address and capped at [`MAX_CHILD_SUBNETS`].
///
/// Returns an empty list when `child_prefix < parent_prefix`. Truncation at
/// the cap is silent; compare against [`theoretical_child_count`] to detect it.
pub fn list_child_subnets(
    parent_network: u32,
    parent_prefix: u8,
    child_prefix: u8,
) -> Vec<ChildSubnetFacts> {
    let subnets: Vec<ChildSubnetFacts> =
        ChildSubnets::new(parent_network, parent_prefix, child_prefix)
            .take(MAX_CHILD_SUBNETS)
            .collect();
    log::debug!(
        "list_child_subnets(/{parent_prefix} -> /{child_prefix}) produced {}",
        subnets.len()
    );
    subnets
}

/// Number of `/child_prefix` blocks a `/parent_prefix` holds, ignoring the cap.
pub fn theoretical_child_count(parent_prefix: u8, child_prefix: u8) -> u64 {
    if child_prefix < parent_prefix || child_prefix > MAX_LENGTH {
        0
    } else {
        1u64 << (child_prefix - parent_prefix)
    }
}

/// Capped child list together with the uncapped block count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildListing {
    pub subnets: Vec<ChildSubnetFacts>,
    pub total: u64,
}

impl ChildListing {
    pub fn new(parent_network: u32, parent_prefix: u8, child_prefix: u8) -> ChildListing {
        let listing = ChildListing {
            subnets: list_child_subnets(parent_network, parent_prefix, child_prefix),
            total: theoretical_child_count(parent_prefix, child_prefix),
        };
        if listing.is_truncated() {
            log::warn!(
                "Showing {shown} of {total} /{child_prefix} subnets",
                shown = listing.subnets.len(),
                total = listing.total
            );
        }
        listing
    }

    pub fn is_truncated(&self) -> bool {
        (self.subnets.len() as u64) < self.total
    }
}
