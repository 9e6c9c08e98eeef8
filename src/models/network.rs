//! IPv4 subnet descriptor.
//!
//! A [`Network`] is built from a base address and a subnet mask (or a CIDR
//! string) and derives everything else once, at construction.

use super::address::ADDRESS_PATTERN;
use super::{mask_from_prefix, Address, AddressArg, AddressRange};
use crate::config::{EAGER_ADDRESS_LIMIT, MAX_PREFIX_LEN};
use crate::error::{Result, SubnetError};
use lazy_static::lazy_static;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};

lazy_static! {
    static ref CIDR_RE: Regex = Regex::new(&format!(
        r"^{}(?:/(?:[0-2]?[0-9]|3[0-2]))?$",
        *ADDRESS_PATTERN
    ))
    .expect("Invalid Regex?");
}

/// Read-only, serializable view of a [`Network`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NetworkSnapshot {
    /// Base address as supplied, not necessarily the network address.
    pub ip: String,
    pub subnet_mask: String,
    /// `ip/prefix_len`
    pub cidr: String,
    pub network_address: String,
    pub first_usable: String,
    pub last_usable: String,
    pub host_capacity: u32,
    pub prefix_len: u8,
    /// Every usable address, omitted above [`EAGER_ADDRESS_LIMIT`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<String>>,
}

/// Immutable IPv4 subnet with its derived metadata.
///
/// The usable range runs from network address + 1 to network address + host
/// capacity, where host capacity is the distance from the mask to
/// 255.255.255.255. For a /24 that is `.1` to `.255`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network {
    ip: Address,
    subnet_mask: Address,
    network_address: Address,
    first_usable: Address,
    last_usable: Address,
    host_capacity: u32,
    prefix_len: u8,
    cidr: String,
    snapshot: NetworkSnapshot,
}

impl Network {
    /// Build a network from an address and a subnet mask, each given as text or
    /// as an [`Address`].
    ///
    /// # Errors
    /// * [`SubnetError::MissingArgument`] if either argument is missing; checked first.
    /// * [`SubnetError::InvalidAddressFormat`] if either text does not parse.
    /// * [`SubnetError::InvalidSubnetMask`] if the mask is not a contiguous prefix.
    /// * [`SubnetError::AddressOverflow`] for 255.255.255.255/32, whose first usable
    ///   address would lie past the end of the address space.
    ///
    /// # Examples
    /// ```
    /// use ipv4_subnet_calc::Network;
    /// let nw = Network::new("192.168.10.10", "255.255.255.0").unwrap();
    /// assert_eq!(nw.network_address().to_string(), "192.168.10.0");
    /// assert_eq!(nw.cidr(), "192.168.10.10/24");
    /// ```
    pub fn new<'a, 'b>(
        ip: impl Into<AddressArg<'a>>,
        subnet_mask: impl Into<AddressArg<'b>>,
    ) -> Result<Network> {
        let (ip, subnet_mask) = (ip.into(), subnet_mask.into());
        if ip.is_missing() {
            return Err(SubnetError::MissingArgument("ip"));
        }
        if subnet_mask.is_missing() {
            return Err(SubnetError::MissingArgument("subnet_mask"));
        }
        let ip = ip.resolve("ip")?;
        let subnet_mask = subnet_mask.resolve("subnet_mask")?;
        if !subnet_mask.is_subnet_mask() {
            return Err(SubnetError::InvalidSubnetMask(subnet_mask.to_string()));
        }

        let host_capacity = subnet_mask.distance_to(&Address::BROADCAST);
        let network_address = ip.bitwise_and(subnet_mask)?;
        let first_usable = network_address.next(1)?;
        let last_usable = network_address.next(host_capacity)?;
        let prefix_len = subnet_mask.prefix_len();
        let cidr = format!("{ip}/{prefix_len}");
        log::debug!(
            "Network::new({cidr}) network={network_address} range={first_usable}..={last_usable} hosts={host_capacity}"
        );

        let addresses = if host_capacity <= EAGER_ADDRESS_LIMIT {
            Some(
                AddressRange::new(first_usable, host_capacity)
                    .map(|a| a.to_string())
                    .collect(),
            )
        } else {
            log::trace!("{cidr}: {host_capacity} hosts, snapshot carries no address list");
            None
        };
        let snapshot = NetworkSnapshot {
            ip: ip.to_string(),
            subnet_mask: subnet_mask.to_string(),
            cidr: cidr.clone(),
            network_address: network_address.to_string(),
            first_usable: first_usable.to_string(),
            last_usable: last_usable.to_string(),
            host_capacity,
            prefix_len,
            addresses,
        };

        Ok(Network {
            ip,
            subnet_mask,
            network_address,
            first_usable,
            last_usable,
            host_capacity,
            prefix_len,
            cidr,
            snapshot,
        })
    }

    /// True if `text` looks like `xxx.xxx.xxx.xxx` or `xxx.xxx.xxx.xxx/len` with
    /// `len` in 0..=32. Never fails.
    pub fn validate_cidr(text: &str) -> bool {
        CIDR_RE.is_match(text)
    }

    /// Build a network from CIDR notation, e.g. `192.168.1.10/24`.
    ///
    /// Without a `/len` suffix the network is a single-address /32.
    pub fn from_cidr(text: &str) -> Result<Network> {
        if !Network::validate_cidr(text) {
            return Err(SubnetError::InvalidCidrFormat(text.to_string()));
        }
        let (ip, prefix_len) = match text.split_once('/') {
            Some((ip, suffix)) => {
                let len: u8 = suffix
                    .parse()
                    .map_err(|_| SubnetError::InvalidCidrFormat(text.to_string()))?;
                (ip, len)
            }
            None => (text, MAX_PREFIX_LEN),
        };
        let subnet_mask = mask_from_prefix(prefix_len)?;
        Network::new(ip, subnet_mask)
    }

    /// Build a network from a JSON object with `ip` and `subnet_mask` strings, or
    /// a `cidr` string.
    ///
    /// Any other fields, such as the derived ones of a snapshot, are ignored. If
    /// both forms are given they must describe the same network.
    pub fn from_json(text: &str) -> Result<Network> {
        let value: serde_json::Value = serde_json::from_str(text).map_err(|e| {
            log::debug!("Network::from_json rejected malformed input: {e}");
            SubnetError::InvalidJson(e.to_string())
        })?;
        if !value.is_object() {
            return Err(SubnetError::InvalidArgumentType {
                name: "network",
                expected: "JSON object",
            });
        }
        let input: NetworkInput =
            serde_json::from_value(value).map_err(|e| SubnetError::InvalidJson(e.to_string()))?;
        input.into_network()
    }

    /// The snapshot as a JSON string.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.snapshot)
    }

    /// The network `n` blocks further on, with the same mask.
    ///
    /// Each block is `host_capacity + 1` addresses, so `192.168.10.0/24` steps
    /// to `192.168.11.0/24`. The new network's base address is its network address.
    pub fn next_network(&self, n: u32) -> Result<Network> {
        let step = self.block_size().saturating_mul(i64::from(n));
        Network::new(self.network_address.offset_by(step)?, self.subnet_mask)
    }

    /// The network `n` blocks back, with the same mask.
    pub fn previous_network(&self, n: u32) -> Result<Network> {
        let step = self.block_size().saturating_mul(i64::from(n));
        Network::new(self.network_address.offset_by(-step)?, self.subnet_mask)
    }

    fn block_size(&self) -> i64 {
        i64::from(self.host_capacity) + 1
    }

    /// Does the usable range contain `address`? Accepts text or an [`Address`].
    ///
    /// Comparison is numeric on the 32-bit value.
    pub fn includes<'a>(&self, address: impl Into<AddressArg<'a>>) -> Result<bool> {
        let address = address.into().resolve("address")?;
        Ok(self.contains(&address))
    }

    /// Typed form of [`Network::includes`].
    pub fn contains(&self, address: &Address) -> bool {
        self.first_usable <= *address && *address <= self.last_usable
    }

    /// Lazy walk over the usable addresses, first to last.
    pub fn addresses(&self) -> AddressRange {
        AddressRange::inclusive(self.first_usable, self.last_usable)
    }

    /// Every usable address, materialised.
    ///
    /// Refused with [`SubnetError::TooManyAddresses`] above [`EAGER_ADDRESS_LIMIT`];
    /// use [`Network::addresses`] for big networks.
    pub fn address_list(&self) -> Result<Vec<Address>> {
        if self.host_capacity > EAGER_ADDRESS_LIMIT {
            log::warn!(
                "Refusing to list {} addresses of {} (limit {})",
                self.host_capacity,
                self.cidr,
                EAGER_ADDRESS_LIMIT
            );
            return Err(SubnetError::TooManyAddresses {
                cidr: self.cidr.clone(),
                count: self.host_capacity,
                limit: EAGER_ADDRESS_LIMIT,
            });
        }
        Ok(self.addresses().collect())
    }

    pub fn ip(&self) -> Address {
        self.ip
    }

    pub fn subnet_mask(&self) -> Address {
        self.subnet_mask
    }

    pub fn network_address(&self) -> Address {
        self.network_address
    }

    pub fn first_usable(&self) -> Address {
        self.first_usable
    }

    pub fn last_usable(&self) -> Address {
        self.last_usable
    }

    /// Highest address of the block, same as [`Network::last_usable`].
    pub fn broadcast(&self) -> Address {
        self.last_usable
    }

    pub fn host_capacity(&self) -> u32 {
        self.host_capacity
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    pub fn cidr(&self) -> &str {
        &self.cidr
    }

    pub fn snapshot(&self) -> &NetworkSnapshot {
        &self.snapshot
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.cidr)
    }
}

impl std::str::FromStr for Network {
    type Err = SubnetError;

    fn from_str(s: &str) -> Result<Network> {
        Network::from_cidr(s)
    }
}

impl Serialize for Network {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        self.snapshot.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Network {
    /// Reads the same fields as [`Network::from_json`]; derived fields are recomputed.
    fn deserialize<D>(deserializer: D) -> std::result::Result<Network, D::Error>
    where
        D: Deserializer<'de>,
    {
        NetworkInput::deserialize(deserializer)?
            .into_network()
            .map_err(de::Error::custom)
    }
}

/// The fields a network is rebuilt from. Left as raw JSON so a wrong type is
/// reported per field.
#[derive(Deserialize, Debug)]
struct NetworkInput {
    #[serde(default)]
    ip: Option<serde_json::Value>,
    #[serde(default)]
    subnet_mask: Option<serde_json::Value>,
    #[serde(default)]
    cidr: Option<serde_json::Value>,
}

impl NetworkInput {
    fn into_network(self) -> Result<Network> {
        let cidr = match &self.cidr {
            None | Some(serde_json::Value::Null) => None,
            Some(serde_json::Value::String(cidr)) => Some(cidr.as_str()),
            Some(_) => {
                return Err(SubnetError::InvalidArgumentType {
                    name: "cidr",
                    expected: "CIDR string",
                })
            }
        };
        let ip = AddressArg::from_json(self.ip.as_ref(), "ip")?;
        let subnet_mask = AddressArg::from_json(self.subnet_mask.as_ref(), "subnet_mask")?;

        let Some(cidr) = cidr else {
            return Network::new(ip, subnet_mask);
        };
        let from_cidr = Network::from_cidr(cidr)?;
        if ip.is_missing() && subnet_mask.is_missing() {
            return Ok(from_cidr);
        }
        let network = Network::new(ip, subnet_mask)?;
        if network != from_cidr {
            log::warn!(
                "cidr {cidr} disagrees with ip/subnet_mask {}",
                network.cidr()
            );
            return Err(SubnetError::ConflictingArguments {
                first: "cidr",
                second: "ip/subnet_mask",
            });
        }
        Ok(network)
    }
}
