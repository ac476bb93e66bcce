//! IPv4 address and CIDR notation utilities.
//!
//! Addresses and masks are plain `u32` values in network bit order
//! (first octet in bits 31..24). Provides the dotted-quad codec, the
//! mask/prefix arithmetic and the [`Cidr`] value used by the engine.

use crate::error::SubnetError;
use serde::{Serialize, Serializer};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Prefix used when the supplied prefix cannot be read as a number.
pub const DEFAULT_PREFIX: u8 = 24;

/// Parse a dotted-quad string into a `u32`.
///
/// Requires exactly four decimal octets in `0..=255` without superfluous
/// leading zeros (`"0"` is fine, `"01"` is not).
///
/// # Examples
/// ```
/// use subnet_calc::models::parse_address;
/// assert_eq!(parse_address("192.168.1.1").unwrap(), 3232235777);
/// assert!(parse_address("192.168.001.1").is_err());
/// ```
pub fn parse_address(text: &str) -> Result<u32, SubnetError> {
    text.parse::<Ipv4Addr>()
        .map(u32::from)
        .map_err(|_| SubnetError::malformed_address(text, "expected 4 decimal octets 0-255"))
}

/// Check that `text` is a syntactically valid dotted-quad address.
pub fn is_valid_ipv4(text: &str) -> bool {
    parse_address(text).is_ok()
}

/// Render a `u32` as a dotted-quad string.
pub fn format_address(value: u32) -> String {
    Ipv4Addr::from(value).to_string()
}

/// Render a subnet or wildcard mask as a dotted-quad string.
pub fn mask_to_string(mask: u32) -> String {
    format_address(mask)
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// Prefix 0 gives an empty mask. Anything above [`MAX_LENGTH`] also gives 0,
/// callers are expected to run input through [`clamp_prefix`] first.
///
/// # Examples
/// ```
/// use subnet_calc::models::prefix_to_mask;
/// assert_eq!(prefix_to_mask(24), 0xFFFFFF00);
/// ```
pub fn prefix_to_mask(prefix: u8) -> u32 {
    if prefix > MAX_LENGTH {
        log::warn!("prefix_to_mask: prefix /{prefix} out of range, using empty mask");
        return 0;
    }
    let right_len = MAX_LENGTH - prefix;
    let all_bits = u32::MAX as u64;

    let mask = (all_bits >> right_len) << right_len;

    mask as u32
}

/// Number of set bits in `mask`. Contiguity is not checked.
pub fn mask_to_prefix(mask: u32) -> u8 {
    mask.count_ones() as u8
}

/// Host bits of a subnet mask.
pub fn wildcard_from_mask(mask: u32) -> u32 {
    !mask
}

/// Number of addresses in a block of the given prefix.
///
/// Needs 64 bits: a /0 holds 2^32 addresses.
pub fn block_size(prefix: u8) -> u64 {
    1u64 << (MAX_LENGTH - prefix.min(MAX_LENGTH))
}

/// Loosely typed prefix input, either a number or user typed text.
#[derive(Debug, Clone, PartialEq)]
pub enum PrefixValue {
    Number(f64),
    Text(String),
}

impl From<f64> for PrefixValue {
    fn from(n: f64) -> Self {
        PrefixValue::Number(n)
    }
}

impl From<i64> for PrefixValue {
    fn from(n: i64) -> Self {
        PrefixValue::Number(n as f64)
    }
}

impl From<i32> for PrefixValue {
    fn from(n: i32) -> Self {
        PrefixValue::Number(f64::from(n))
    }
}

impl From<u8> for PrefixValue {
    fn from(n: u8) -> Self {
        PrefixValue::Number(f64::from(n))
    }
}

impl From<&str> for PrefixValue {
    fn from(s: &str) -> Self {
        PrefixValue::Text(s.to_string())
    }
}

impl From<String> for PrefixValue {
    fn from(s: String) -> Self {
        PrefixValue::Text(s)
    }
}

/// Normalise any prefix input into `0..=32`.
///
/// Values that are not finite numbers become [`DEFAULT_PREFIX`]; numbers are
/// truncated toward zero and clamped. Blank text counts as 0.
///
/// # Examples
/// ```
/// use subnet_calc::models::clamp_prefix;
/// assert_eq!(clamp_prefix(24.7), 24);
/// assert_eq!(clamp_prefix(50), 32);
/// assert_eq!(clamp_prefix("invalid"), 24);
/// ```
pub fn clamp_prefix(raw: impl Into<PrefixValue>) -> u8 {
    let n = match raw.into() {
        PrefixValue::Number(n) => n,
        PrefixValue::Text(s) if s.trim().is_empty() => 0.0,
        PrefixValue::Text(s) => match s.trim().parse::<f64>() {
            Ok(n) => n,
            Err(_) => {
                log::debug!("clamp_prefix: '{s}' is not a number, using /{DEFAULT_PREFIX}");
                return DEFAULT_PREFIX;
            }
        },
    };
    if !n.is_finite() {
        return DEFAULT_PREFIX;
    }
    n.trunc().clamp(0.0, f64::from(MAX_LENGTH)) as u8
}

/// Network address for a given IP and prefix length.
pub fn network_addr(addr: u32, prefix: u8) -> u32 {
    addr & prefix_to_mask(prefix)
}

/// Broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: u32, prefix: u8) -> u32 {
    let mask = prefix_to_mask(prefix);
    (addr & mask) | wildcard_from_mask(mask)
}

/// IPv4 address with a prefix length, e.g. `10.0.0.0/24`.
#[derive(Eq, Ord, PartialEq, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Cidr {
    /// The address as given, not necessarily the network address.
    pub addr: u32,
    /// The prefix length (0-32).
    pub prefix: u8,
}

impl Cidr {
    /// Parse `a.b.c.d/p`, sending the prefix through [`clamp_prefix`].
    ///
    /// Only the address part and the single `/` separator can fail; a prefix
    /// like `"invalid"` silently becomes [`DEFAULT_PREFIX`].
    pub fn parse_lenient(text: &str) -> Result<Cidr, SubnetError> {
        let (ip_str, prefix_str) = split_cidr(text)?;
        let addr = parse_address(ip_str)?;
        let prefix = clamp_prefix(prefix_str);
        if prefix_str.trim().parse::<u8>().ok() != Some(prefix) {
            log::warn!("Prefix '{prefix_str}' in '{text}' normalised to /{prefix}");
        }
        Ok(Cidr { addr, prefix })
    }

    /// Lowest (network) address in the block.
    pub fn network(&self) -> u32 {
        network_addr(self.addr, self.prefix)
    }

    /// Highest (broadcast) address in the block.
    pub fn broadcast(&self) -> u32 {
        broadcast_addr(self.addr, self.prefix)
    }

    /// Subnet mask of the block.
    pub fn mask(&self) -> u32 {
        prefix_to_mask(self.prefix)
    }
}

fn split_cidr(text: &str) -> Result<(&str, &str), SubnetError> {
    if text.is_empty() {
        return Err(SubnetError::malformed_cidr(text, "empty input"));
    }
    let parts: Vec<&str> = text.split('/').collect();
    if parts.len() != 2 {
        return Err(SubnetError::malformed_cidr(
            text,
            "expected exactly one '/' separator",
        ));
    }
    Ok((parts[0], parts[1]))
}

impl FromStr for Cidr {
    type Err = SubnetError;

    /// Strict parse: the prefix must be an integer in `0..=32`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (ip_str, prefix_str) = split_cidr(s)?;
        let addr = parse_address(ip_str)?;
        let prefix: u8 = prefix_str
            .parse()
            .ok()
            .filter(|p| *p <= MAX_LENGTH)
            .ok_or_else(|| SubnetError::malformed_cidr(s, "prefix must be 0-32"))?;
        Ok(Cidr { addr, prefix })
    }
}

impl std::fmt::Display for Cidr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", format_address(self.addr), self.prefix)
    }
}

impl Serialize for Cidr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
