//! An in-memory IPv4/IPv6 routing table built on a crit-bit trie.
//!
//! The [`CritBitTree`] is a binary Patricia-style radix tree over opaque
//! byte-string keys. [`RouteTable`] keeps one trie per address family,
//! encodes every CIDR prefix as address bytes followed by a prefix-length
//! byte, and answers exact lookups, longest-prefix matches for addresses
//! and prefixes, and ordered walks from an optional start route.

pub mod critbit;
pub mod rib;
pub mod types;

pub use critbit::CritBitTree;
pub use rib::RouteTable;
pub use types::{AddressFamily, IPv4, IPv6, PrefixId};
