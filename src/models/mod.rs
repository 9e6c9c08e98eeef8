//! Value types for IPv4 subnet arithmetic.
//!
//! - [`Address`] - immutable 32-bit IPv4 address
//! - [`Network`] - subnet descriptor with eagerly derived metadata
//! - [`AddressRange`] - lazy walk over consecutive addresses

mod address;
mod network;
mod range;

// Re-export public types
pub use address::{mask_from_prefix, Address, AddressArg};
pub use network::{Network, NetworkSnapshot};
pub use range::AddressRange;
