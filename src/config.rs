//! Crate-wide constants and environment variable names.

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_PREFIX_LEN: u8 = 32;

/// Largest host capacity that is materialised eagerly.
///
/// Bigger networks still enumerate through [`crate::models::AddressRange`], but their
/// snapshot carries no address list and `Network::address_list()` refuses them.
pub const EAGER_ADDRESS_LIMIT: u32 = 65_536;

/// Network reported by the binary when neither an argument nor the env var is set.
pub const DEFAULT_DEMO_CIDR: &str = "192.168.10.10/24";

/// Default log4rs config file, relative to the working directory.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// Env var (or `.env` entry) with the CIDR the binary reports on.
pub const ENV_CIDR: &str = "SUBNET_CALC_CIDR";

/// Env var (or `.env` entry) overriding [`DEFAULT_LOG_CONFIG`].
pub const ENV_LOG_CONFIG: &str = "SUBNET_CALC_LOG_CONFIG";

/// Read an env var, falling back to `default` when unset or blank.
pub fn env_or(name: &str, default: &str) -> String {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => value.trim().to_string(),
        _ => default.to_string(),
    }
}
