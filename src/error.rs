//! Error types for the subnet calculator.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubnetError {
    #[error("Malformed IPv4 address '{input}': {reason}")]
    MalformedAddress { input: String, reason: &'static str },

    #[error("Malformed CIDR '{input}': {reason}")]
    MalformedCidr { input: String, reason: &'static str },

    #[error("Invalid configuration {key}='{value}'")]
    Config { key: String, value: String },
}

impl SubnetError {
    pub(crate) fn malformed_address(input: &str, reason: &'static str) -> Self {
        SubnetError::MalformedAddress {
            input: input.to_string(),
            reason,
        }
    }

    pub(crate) fn malformed_cidr(input: &str, reason: &'static str) -> Self {
        SubnetError::MalformedCidr {
            input: input.to_string(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_address_message() {
        let error = SubnetError::malformed_address("1.2.3", "expected 4 octets");
        assert_eq!(
            error.to_string(),
            "Malformed IPv4 address '1.2.3': expected 4 octets"
        );
    }

    #[test]
    fn test_config_message() {
        let error = SubnetError::Config {
            key: "SUBNET_CALC_FORMAT".to_string(),
            value: "xml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration SUBNET_CALC_FORMAT='xml'"
        );
    }
}
