//! Subnet facts for a single CIDR query.

use crate::error::SubnetError;
use crate::models::{
    host_range, prefix_to_mask, total_addresses, usable_hosts, wildcard_from_mask, Cidr,
    Classful, SubnetFacts,
};

/// Compute the full [`SubnetFacts`] for `cidr`, e.g. `"192.168.1.10/24"`.
///
/// Fails on empty input, a missing or repeated `/`, or a bad address part.
/// The prefix part never fails: it goes through
/// [`clamp_prefix`](crate::models::clamp_prefix), so `"10.0.0.1/invalid"`
/// is computed as a /24.
pub fn calculate(cidr: &str) -> Result<SubnetFacts, SubnetError> {
    let parsed = Cidr::parse_lenient(cidr)?;
    let facts = facts_for(parsed);
    log::debug!(
        "calculate({cidr}) -> {network}/{prefix} usable={usable}",
        network = facts.network_str(),
        prefix = facts.prefix,
        usable = facts.usable_hosts
    );
    Ok(facts)
}

/// Build the record for an already parsed [`Cidr`].
pub fn facts_for(cidr: Cidr) -> SubnetFacts {
    let prefix = cidr.prefix;
    let mask = prefix_to_mask(prefix);
    let wildcard = wildcard_from_mask(mask);
    let network = cidr.addr & mask;
    let broadcast = network | wildcard;
    let range = host_range(network, broadcast, prefix);

    SubnetFacts {
        address: cidr.addr,
        prefix,
        classful: Classful::of(cidr.addr),
        mask,
        wildcard,
        network,
        broadcast,
        total_hosts: total_addresses(prefix),
        usable_hosts: usable_hosts(prefix),
        first_host: range.map(|(first, _)| first),
        last_host: range.map(|(_, last)| last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_24() {
        let result = calculate("192.168.1.10/24").unwrap();
        assert_eq!(result.ip_str(), "192.168.1.10");
        assert_eq!(result.network_str(), "192.168.1.0");
        assert_eq!(result.broadcast_str(), "192.168.1.255");
        assert_eq!(result.mask_str(), "255.255.255.0");
        assert_eq!(result.wildcard_str(), "0.0.0.255");
        assert_eq!(result.total_hosts, 256);
        assert_eq!(result.usable_hosts, 254);
        assert_eq!(result.first_host_str().as_deref(), Some("192.168.1.1"));
        assert_eq!(result.last_host_str().as_deref(), Some("192.168.1.254"));
        assert_eq!(result.prefix, 24);
        assert_eq!(result.classful, Classful::C);
    }

    #[test]
    fn test_calculate_16_and_8() {
        let result = calculate("172.16.50.100/16").unwrap();
        assert_eq!(result.network_str(), "172.16.0.0");
        assert_eq!(result.broadcast_str(), "172.16.255.255");
        assert_eq!(result.mask_str(), "255.255.0.0");
        assert_eq!(result.total_hosts, 65536);
        assert_eq!(result.usable_hosts, 65534);

        let result = calculate("10.20.30.40/8").unwrap();
        assert_eq!(result.network_str(), "10.0.0.0");
        assert_eq!(result.broadcast_str(), "10.255.255.255");
        assert_eq!(result.total_hosts, 16777216);
        assert_eq!(result.usable_hosts, 16777214);
    }

    #[test]
    fn test_calculate_30() {
        let result = calculate("192.168.1.5/30").unwrap();
        assert_eq!(result.network_str(), "192.168.1.4");
        assert_eq!(result.broadcast_str(), "192.168.1.7");
        assert_eq!(result.mask_str(), "255.255.255.252");
        assert_eq!(result.total_hosts, 4);
        assert_eq!(result.usable_hosts, 2);
        assert_eq!(result.first_host_str().as_deref(), Some("192.168.1.5"));
        assert_eq!(result.last_host_str().as_deref(), Some("192.168.1.6"));
    }

    #[test]
    fn test_calculate_32() {
        let result = calculate("192.168.1.1/32").unwrap();
        assert_eq!(result.network_str(), "192.168.1.1");
        assert_eq!(result.broadcast_str(), "192.168.1.1");
        assert_eq!(result.mask_str(), "255.255.255.255");
        assert_eq!(result.total_hosts, 1);
        assert_eq!(result.usable_hosts, 0);
        assert_eq!(result.first_host, None);
        assert_eq!(result.last_host, None);
    }

    #[test]
    fn test_calculate_31() {
        let result = calculate("10.0.0.0/31").unwrap();
        assert_eq!(result.network_str(), "10.0.0.0");
        assert_eq!(result.broadcast_str(), "10.0.0.1");
        assert_eq!(result.total_hosts, 2);
        assert_eq!(result.usable_hosts, 0);
        assert_eq!(result.first_host_str(), None);
        assert_eq!(result.last_host_str(), None);
    }

    #[test]
    fn test_calculate_0_and_1() {
        let result = calculate("0.0.0.0/0").unwrap();
        assert_eq!(result.network_str(), "0.0.0.0");
        assert_eq!(result.broadcast_str(), "255.255.255.255");
        assert_eq!(result.mask_str(), "0.0.0.0");
        assert_eq!(result.total_hosts, 4294967296);
        assert_eq!(result.usable_hosts, 4294967294);

        let result = calculate("128.0.0.0/1").unwrap();
        assert_eq!(result.network_str(), "128.0.0.0");
        assert_eq!(result.broadcast_str(), "255.255.255.255");
        assert_eq!(result.mask_str(), "128.0.0.0");
    }

    #[test]
    fn test_calculate_invalid() {
        assert!(matches!(
            calculate("").unwrap_err(),
            SubnetError::MalformedCidr { .. }
        ));
        assert!(matches!(
            calculate("192.168.1.1").unwrap_err(),
            SubnetError::MalformedCidr { .. }
        ));
        assert!(matches!(
            calculate("10.0.0.0/8/16").unwrap_err(),
            SubnetError::MalformedCidr { .. }
        ));
        assert!(matches!(
            calculate("invalid/24").unwrap_err(),
            SubnetError::MalformedAddress { .. }
        ));
        assert!(calculate("256.1.1.1/24").is_err());
    }

    #[test]
    fn test_calculate_lenient_prefix() {
        let result = calculate("192.168.1.1/invalid").unwrap();
        assert_eq!(result.prefix, 24);
        assert_eq!(result.network_str(), "192.168.1.0");

        let result = calculate("192.168.1.1/40").unwrap();
        assert_eq!(result.prefix, 32);
    }

    #[test]
    fn test_calculate_blank_prefix_is_whole_space() {
        let result = calculate("10.0.0.0/").unwrap();
        assert_eq!(result.prefix, 0);
        assert_eq!(result.total_hosts, 4294967296);
        assert_eq!(result.broadcast_str(), "255.255.255.255");
    }

    #[test]
    fn test_calculate_various_prefixes() {
        let cases = [
            ("192.168.1.0/25", "192.168.1.0", "192.168.1.127", 126),
            ("192.168.1.64/26", "192.168.1.64", "192.168.1.127", 62),
            ("192.168.1.32/27", "192.168.1.32", "192.168.1.63", 30),
            ("192.168.1.16/28", "192.168.1.16", "192.168.1.31", 14),
            ("192.168.1.8/29", "192.168.1.8", "192.168.1.15", 6),
        ];
        for (cidr, network, broadcast, usable) in cases {
            let result = calculate(cidr).unwrap();
            assert_eq!(result.network_str(), network, "{cidr}");
            assert_eq!(result.broadcast_str(), broadcast, "{cidr}");
            assert_eq!(result.usable_hosts, usable, "{cidr}");
        }
    }

    #[test]
    fn test_calculate_invariants() {
        for p in 0..=32u8 {
            let result = calculate(&format!("203.0.113.77/{p}")).unwrap();
            assert_eq!(result.network, result.address & result.mask);
            assert_eq!(result.broadcast, result.network | result.wildcard);
            assert_eq!(result.first_host.is_some(), p <= 30);
            if let (Some(first), Some(last)) = (result.first_host, result.last_host) {
                assert_eq!(first, result.network + 1);
                assert_eq!(last, result.broadcast - 1);
            }
        }
    }
}
