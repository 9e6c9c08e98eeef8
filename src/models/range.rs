//! Lazy enumeration of consecutive addresses.

use super::Address;
use std::iter::FusedIterator;

/// Finite sequence of consecutive [`Address`] values.
///
/// Nothing is allocated up front, so even a /0 network can be walked. Cloning
/// gives an independent cursor, which makes the sequence restartable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressRange {
    // half-open [front, back), both <= 2^32
    front: u64,
    back: u64,
}

impl AddressRange {
    /// `count` addresses starting at `start`, cut short at 255.255.255.255.
    pub fn new(start: Address, count: u32) -> AddressRange {
        let front = u64::from(start.to_u32());
        let back = (front + u64::from(count)).min(1 << 32);
        AddressRange { front, back }
    }

    /// Every address from `first` to `last`, both included. Empty if `first > last`.
    pub fn inclusive(first: Address, last: Address) -> AddressRange {
        let front = u64::from(first.to_u32());
        let back = u64::from(last.to_u32()) + 1;
        AddressRange {
            front,
            back: back.max(front),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.front >= self.back
    }

    /// Number of addresses left, as a u64 so a full /0 walk still fits.
    pub fn remaining(&self) -> u64 {
        self.back - self.front
    }

    fn address_at(value: u64) -> Address {
        // callers only pass values below `back` <= 2^32
        Address::from_u32(value as u32)
    }
}

impl Iterator for AddressRange {
    type Item = Address;

    fn next(&mut self) -> Option<Address> {
        if self.is_empty() {
            return None;
        }
        let address = Self::address_at(self.front);
        self.front += 1;
        Some(address)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(len) => (len, Some(len)),
            Err(_) => (usize::MAX, None),
        }
    }

    fn nth(&mut self, n: usize) -> Option<Address> {
        self.front = self
            .front
            .saturating_add(n as u64)
            .min(self.back);
        self.next()
    }

    fn last(mut self) -> Option<Address> {
        self.next_back()
    }

    #[cfg(target_pointer_width = "64")]
    fn count(self) -> usize {
        self.size_hint().0
    }
}

impl DoubleEndedIterator for AddressRange {
    fn next_back(&mut self) -> Option<Address> {
        if self.is_empty() {
            return None;
        }
        self.back -= 1;
        Some(Self::address_at(self.back))
    }
}

// a full /0 walk is 2^32 items, more than a 32-bit usize holds
#[cfg(target_pointer_width = "64")]
impl ExactSizeIterator for AddressRange {}

impl FusedIterator for AddressRange {}
