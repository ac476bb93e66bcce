//! Historical classful (A-E) labelling of IPv4 addresses.

use serde::{Serialize, Serializer};
use std::fmt;

/// Legacy address class, decided by the first octet only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classful {
    A,
    B,
    C,
    /// Multicast.
    D,
    /// Experimental.
    E,
}

impl Classful {
    /// Classify `addr` by its leading octet. The prefix plays no part.
    pub fn of(addr: u32) -> Classful {
        match (addr >> 24) & 0xFF {
            0..=127 => Classful::A,
            128..=191 => Classful::B,
            192..=223 => Classful::C,
            224..=239 => Classful::D,
            _ => Classful::E,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Classful::A => "Class A",
            Classful::B => "Class B",
            Classful::C => "Class C",
            Classful::D => "Class D (Multicast)",
            Classful::E => "Class E (Experimental)",
        }
    }
}

impl fmt::Display for Classful {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Classful {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}
