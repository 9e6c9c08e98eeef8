//! IPv4 address and subnet arithmetic.
//!
//! Parses and validates dotted-decimal addresses and CIDR/subnet-mask pairs, and
//! derives network metadata: network address, usable range, host capacity,
//! address enumeration, containment and adjacent-network stepping.
//!
//! ```
//! use ipv4_subnet_calc::{Address, Network};
//!
//! let nw = Network::from_cidr("192.168.1.10/24").unwrap();
//! assert!(nw.includes(Address::new("192.168.1.200").unwrap()).unwrap());
//! assert_eq!(nw.next_network(1).unwrap().cidr(), "192.168.2.0/24");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;

pub use error::{Result, SubnetError};
pub use models::{mask_from_prefix, Address, AddressArg, AddressRange, Network, NetworkSnapshot};
