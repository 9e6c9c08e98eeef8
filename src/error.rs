//! Error type shared by [`Address`](crate::models::Address) and
//! [`Network`](crate::models::Network).

use thiserror::Error;

/// Errors raised while parsing or deriving IPv4 values.
///
/// Every variant is a caller-correctable input error. Nothing is retried and no
/// value is ever partially built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubnetError {
    #[error("Argument [{0}] is required")]
    MissingArgument(&'static str),

    #[error("IP not in [xxx.xxx.xxx.xxx] format: '{0}'")]
    InvalidAddressFormat(String),

    #[error("CIDR not in [xxx.xxx.xxx.xxx/xx] format: '{0}'")]
    InvalidCidrFormat(String),

    #[error("Argument [{name}] has the wrong type, expected {expected}")]
    InvalidArgumentType {
        name: &'static str,
        expected: &'static str,
    },

    #[error("Malformed JSON: {0}")]
    InvalidJson(String),

    #[error("Arguments [{first}] and [{second}] describe different networks")]
    ConflictingArguments {
        first: &'static str,
        second: &'static str,
    },

    #[error("Subnet mask {0} is not a contiguous prefix")]
    InvalidSubnetMask(String),

    #[error("Address {addr} offset by {delta} is outside the IPv4 address space")]
    AddressOverflow { addr: String, delta: i64 },

    #[error("Network {cidr} has {count} addresses, more than the eager limit of {limit}")]
    TooManyAddresses { cidr: String, count: u32, limit: u32 },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SubnetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SubnetError::MissingArgument("ip").to_string(),
            "Argument [ip] is required"
        );
        assert_eq!(
            SubnetError::InvalidAddressFormat("1.2.3".to_string()).to_string(),
            "IP not in [xxx.xxx.xxx.xxx] format: '1.2.3'"
        );
        assert_eq!(
            SubnetError::AddressOverflow {
                addr: "255.255.255.255".to_string(),
                delta: 1
            }
            .to_string(),
            "Address 255.255.255.255 offset by 1 is outside the IPv4 address space"
        );
    }
}
