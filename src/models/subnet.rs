//! Computed subnet records.

use super::{block_size, format_address, Cidr, Classful, MAX_LENGTH};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Total number of addresses in a block, 2^(32 - prefix).
pub fn total_addresses(prefix: u8) -> u64 {
    block_size(prefix)
}

/// Usable hosts in a block. /31 and /32 have none.
pub fn usable_hosts(prefix: u8) -> u64 {
    if prefix >= MAX_LENGTH - 1 {
        0
    } else {
        total_addresses(prefix).saturating_sub(2)
    }
}

/// First and last usable host, or `None` for /31 and /32.
pub fn host_range(network: u32, broadcast: u32, prefix: u8) -> Option<(u32, u32)> {
    if prefix >= MAX_LENGTH - 1 {
        None
    } else {
        Some((network.wrapping_add(1), broadcast.wrapping_sub(1)))
    }
}

/// Everything known about a single CIDR query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubnetFacts {
    /// Address as supplied by the caller.
    pub address: u32,
    pub prefix: u8,
    pub classful: Classful,
    pub mask: u32,
    pub wildcard: u32,
    pub network: u32,
    pub broadcast: u32,
    /// 2^(32 - prefix); 2^32 for a /0.
    pub total_hosts: u64,
    pub usable_hosts: u64,
    pub first_host: Option<u32>,
    pub last_host: Option<u32>,
}

impl SubnetFacts {
    /// The parent block, `network/prefix`.
    pub fn network_cidr(&self) -> Cidr {
        Cidr {
            addr: self.network,
            prefix: self.prefix,
        }
    }

    pub fn ip_str(&self) -> String {
        format_address(self.address)
    }

    pub fn mask_str(&self) -> String {
        format_address(self.mask)
    }

    pub fn wildcard_str(&self) -> String {
        format_address(self.wildcard)
    }

    pub fn network_str(&self) -> String {
        format_address(self.network)
    }

    pub fn broadcast_str(&self) -> String {
        format_address(self.broadcast)
    }

    pub fn first_host_str(&self) -> Option<String> {
        self.first_host.map(format_address)
    }

    pub fn last_host_str(&self) -> Option<String> {
        self.last_host.map(format_address)
    }
}

impl Serialize for SubnetFacts {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("SubnetFacts", 15)?;
        s.serialize_field("ip", &self.ip_str())?;
        s.serialize_field("prefix", &self.prefix)?;
        s.serialize_field("classful", &self.classful)?;
        s.serialize_field("mask", &self.mask)?;
        s.serialize_field("mask_str", &self.mask_str())?;
        s.serialize_field("wildcard", &self.wildcard)?;
        s.serialize_field("wildcard_str", &self.wildcard_str())?;
        s.serialize_field("network", &self.network)?;
        s.serialize_field("network_str", &self.network_str())?;
        s.serialize_field("broadcast", &self.broadcast)?;
        s.serialize_field("broadcast_str", &self.broadcast_str())?;
        s.serialize_field("total_hosts", &self.total_hosts)?;
        s.serialize_field("usable_hosts", &self.usable_hosts)?;
        s.serialize_field("first_host_str", &self.first_host_str())?;
        s.serialize_field("last_host_str", &self.last_host_str())?;
        s.end()
    }
}

/// One block produced by splitting a parent network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildSubnetFacts {
    pub network: u32,
    pub broadcast: u32,
    pub prefix: u8,
    pub total_hosts: u64,
    pub usable_hosts: u64,
    pub first_host: Option<u32>,
    pub last_host: Option<u32>,
}

impl ChildSubnetFacts {
    pub fn cidr(&self) -> Cidr {
        Cidr {
            addr: self.network,
            prefix: self.prefix,
        }
    }

    pub fn network_str(&self) -> String {
        format_address(self.network)
    }

    pub fn broadcast_str(&self) -> String {
        format_address(self.broadcast)
    }

    pub fn first_host_str(&self) -> Option<String> {
        self.first_host.map(format_address)
    }

    pub fn last_host_str(&self) -> Option<String> {
        self.last_host.map(format_address)
    }
}

impl Serialize for ChildSubnetFacts {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("ChildSubnetFacts", 9)?;
        s.serialize_field("network", &self.network)?;
        s.serialize_field("network_str", &self.network_str())?;
        s.serialize_field("broadcast", &self.broadcast)?;
        s.serialize_field("broadcast_str", &self.broadcast_str())?;
        s.serialize_field("prefix", &self.prefix)?;
        s.serialize_field("total_hosts", &self.total_hosts)?;
        s.serialize_field("usable_hosts", &self.usable_hosts)?;
        s.serialize_field("first_host_str", &self.first_host_str())?;
        s.serialize_field("last_host_str", &self.last_host_str())?;
        s.end()
    }
}
