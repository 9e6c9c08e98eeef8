//! IPv4 address value type.
//!
//! Provides [`Address`], an immutable 32-bit IPv4 address with dotted-decimal
//! parsing, binary conversion and offset arithmetic, and [`AddressArg`], the
//! argument type for operations that take either text or an existing address.

use super::Network;
use crate::config::MAX_PREFIX_LEN;
use crate::error::{Result, SubnetError};
use lazy_static::lazy_static;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// One octet 0-255 without leading zeros. `\d` would also match non-ASCII digits.
const OCTET_PATTERN: &str = r"(?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])";

lazy_static! {
    /// Four octets, unanchored, for composing into larger patterns.
    pub(crate) static ref ADDRESS_PATTERN: String =
        format!(r"{OCTET_PATTERN}(?:\.{OCTET_PATTERN}){{3}}");
    static ref ADDRESS_RE: Regex =
        Regex::new(&format!("^{}$", *ADDRESS_PATTERN)).expect("Invalid Regex?");
}

/// Build the subnet mask for a CIDR prefix length.
///
/// The mask is built as `len` one-bits padded with zeros to 32 bits, then read
/// back through [`Address::from_binary`].
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::mask_from_prefix;
/// assert_eq!(mask_from_prefix(24).unwrap().to_string(), "255.255.255.0");
/// ```
pub fn mask_from_prefix(len: u8) -> Result<Address> {
    if len > MAX_PREFIX_LEN {
        return Err(SubnetError::InvalidCidrFormat(format!("/{len}")));
    }
    let bits = format!("{:0<32}", "1".repeat(usize::from(len)));
    Address::from_binary(&bits)
}

/// Immutable IPv4 address.
///
/// Ordering is numeric on the 32-bit value, so `9.0.0.0 < 10.0.0.0`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    addr: Ipv4Addr,
}

impl Address {
    /// 0.0.0.0
    pub const UNSPECIFIED: Address = Address {
        addr: Ipv4Addr::UNSPECIFIED,
    };
    /// 255.255.255.255
    pub const BROADCAST: Address = Address {
        addr: Ipv4Addr::BROADCAST,
    };

    /// Parse a dotted-decimal address such as `192.168.1.2`.
    ///
    /// Rejects anything that is not exactly four dot-separated octets 0-255,
    /// including leading zeros and surrounding whitespace.
    pub fn new(text: &str) -> Result<Address> {
        if !Address::validate_format(text) {
            return Err(SubnetError::InvalidAddressFormat(text.to_string()));
        }
        let addr = Ipv4Addr::from_str(text)
            .map_err(|_| SubnetError::InvalidAddressFormat(text.to_string()))?;
        Ok(Address { addr })
    }

    /// True if `text` is a well-formed dotted-decimal address. Never fails.
    pub fn validate_format(text: &str) -> bool {
        ADDRESS_RE.is_match(text)
    }

    pub const fn from_u32(value: u32) -> Address {
        Address {
            addr: Ipv4Addr::new(
                (value >> 24) as u8,
                (value >> 16) as u8,
                (value >> 8) as u8,
                value as u8,
            ),
        }
    }

    pub fn to_u32(&self) -> u32 {
        u32::from(self.addr)
    }

    pub fn octets(&self) -> [u8; 4] {
        self.addr.octets()
    }

    /// 32-character bit string, most significant octet first.
    ///
    /// # Examples
    /// ```
    /// use ipv4_subnet_calc::Address;
    /// let ip = Address::new("192.168.1.2").unwrap();
    /// assert_eq!(ip.to_binary(), "11000000101010000000000100000010");
    /// ```
    pub fn to_binary(&self) -> String {
        self.octets().iter().map(|o| format!("{o:08b}")).collect()
    }

    /// Inverse of [`Address::to_binary`].
    ///
    /// The input must be exactly 32 characters of `0`/`1`; it is split into four
    /// 8-bit groups and the resulting dotted-decimal text is validated again.
    pub fn from_binary(bits: &str) -> Result<Address> {
        let bad_format = || SubnetError::InvalidAddressFormat(bits.to_string());
        if bits.len() != 32 || !bits.bytes().all(|b| b == b'0' || b == b'1') {
            return Err(bad_format());
        }
        let octets = (0..4)
            .map(|i| u8::from_str_radix(&bits[i * 8..i * 8 + 8], 2).map(|o| o.to_string()))
            .collect::<std::result::Result<Vec<String>, _>>()
            .map_err(|_| bad_format())?;
        Address::new(&octets.join("."))
    }

    /// Logical AND with another address, e.g. an address and its mask give the
    /// network address.
    pub fn bitwise_and<'a>(&self, other: impl Into<AddressArg<'a>>) -> Result<Address> {
        let other = other.into().resolve("other")?;
        Ok(Address::from_u32(self.to_u32() & other.to_u32()))
    }

    /// Add a signed offset to the address.
    ///
    /// Fails with [`SubnetError::AddressOverflow`] instead of wrapping when the
    /// result leaves `0.0.0.0..=255.255.255.255`.
    pub fn offset_by(&self, delta: i64) -> Result<Address> {
        i64::from(self.to_u32())
            .checked_add(delta)
            .and_then(|value| u32::try_from(value).ok())
            .map(Address::from_u32)
            .ok_or_else(|| SubnetError::AddressOverflow {
                addr: self.to_string(),
                delta,
            })
    }

    /// The address `n` positions higher, e.g. `192.168.1.2` -> `192.168.1.3` for `n = 1`.
    pub fn next(&self, n: u32) -> Result<Address> {
        self.offset_by(i64::from(n))
    }

    /// The address `n` positions lower.
    pub fn previous(&self, n: u32) -> Result<Address> {
        self.offset_by(-i64::from(n))
    }

    /// Number of steps between two addresses, in either direction.
    pub fn distance_to(&self, other: &Address) -> u32 {
        self.to_u32().abs_diff(other.to_u32())
    }

    /// Is this address in the usable range of `network`?
    ///
    /// [`Network::includes`] decides; the address only asks.
    pub fn contained_in(&self, network: &Network) -> bool {
        network.contains(self)
    }

    /// True for a contiguous run of 1-bits followed only by 0-bits.
    pub fn is_subnet_mask(&self) -> bool {
        let bits = self.to_u32();
        bits.leading_ones() + bits.trailing_zeros() == u32::from(MAX_PREFIX_LEN)
    }

    /// Count of 1-bits, i.e. the prefix length when this is a subnet mask.
    pub fn prefix_len(&self) -> u8 {
        self.to_u32().count_ones() as u8
    }
}

impl Ord for Address {
    fn cmp(&self, other: &Address) -> Ordering {
        self.to_u32().cmp(&other.to_u32())
    }
}

impl PartialOrd for Address {
    fn partial_cmp(&self, other: &Address) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.addr)
    }
}

impl FromStr for Address {
    type Err = SubnetError;

    fn from_str(s: &str) -> Result<Address> {
        Address::new(s)
    }
}

impl From<Ipv4Addr> for Address {
    fn from(addr: Ipv4Addr) -> Address {
        Address { addr }
    }
}

impl From<Address> for Ipv4Addr {
    fn from(address: Address) -> Ipv4Addr {
        address.addr
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Address::new(&s).map_err(de::Error::custom)
    }
}

/// An address argument: raw text, an existing [`Address`], or nothing.
///
/// Operations that accept either form take `impl Into<AddressArg>` and
/// normalise once with [`AddressArg::resolve`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AddressArg<'a> {
    Missing,
    Text(&'a str),
    Value(Address),
}

impl<'a> AddressArg<'a> {
    pub fn is_missing(&self) -> bool {
        matches!(self, AddressArg::Missing)
    }

    /// Turn the argument into an [`Address`]; `name` labels a missing argument.
    pub fn resolve(self, name: &'static str) -> Result<Address> {
        match self {
            AddressArg::Missing => Err(SubnetError::MissingArgument(name)),
            AddressArg::Text(text) => Address::new(text),
            AddressArg::Value(address) => Ok(address),
        }
    }

    /// Read an argument from an optional JSON field.
    ///
    /// Absent or `null` is missing, a string is text, anything else is the wrong type.
    pub fn from_json(value: Option<&'a serde_json::Value>, name: &'static str) -> Result<Self> {
        match value {
            None | Some(serde_json::Value::Null) => Ok(AddressArg::Missing),
            Some(serde_json::Value::String(text)) => Ok(AddressArg::Text(text)),
            Some(_) => Err(SubnetError::InvalidArgumentType {
                name,
                expected: "dotted-decimal string",
            }),
        }
    }
}

impl<'a> From<&'a str> for AddressArg<'a> {
    fn from(text: &'a str) -> Self {
        AddressArg::Text(text)
    }
}

impl<'a> From<&'a String> for AddressArg<'a> {
    fn from(text: &'a String) -> Self {
        AddressArg::Text(text)
    }
}

impl From<Address> for AddressArg<'_> {
    fn from(address: Address) -> Self {
        AddressArg::Value(address)
    }
}

impl From<&Address> for AddressArg<'_> {
    fn from(address: &Address) -> Self {
        AddressArg::Value(*address)
    }
}

impl From<Ipv4Addr> for AddressArg<'_> {
    fn from(addr: Ipv4Addr) -> Self {
        AddressArg::Value(Address::from(addr))
    }
}

impl<'a, T: Into<AddressArg<'a>>> From<Option<T>> for AddressArg<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(AddressArg::Missing, Into::into)
    }
}
