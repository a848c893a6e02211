//! The routing table: two per-family crit-bit tries behind one
//! family-dispatching surface.

mod query;

use std::io;
use std::net::IpAddr;

use inetnum::addr::Prefix;
use log::trace;

use crate::critbit::CritBitTree;
use crate::types::{AddressFamily, IPv4, IPv6, PrefixId};

//------------ RouteTable ----------------------------------------------------

/// An IP routing table mapping CIDR prefixes to values.
///
/// One crit-bit trie per address family; every operation dispatches on the
/// family of the supplied prefix or address. Keys are the canonical
/// [`PrefixId`] byte form, so the prefix-length byte sits at the end of
/// every key and [`match_prefix`](RouteTable::match_prefix) can walk the
/// trie from most- to least-specific routes.
///
/// Not internally synchronized: any number of readers may share a table
/// only while nobody writes. Mutation takes `&mut self`.
pub struct RouteTable<V> {
    tree4: CritBitTree<V>,
    tree6: CritBitTree<V>,
}

impl<V> Default for RouteTable<V> {
    fn default() -> Self {
        RouteTable {
            tree4: CritBitTree::new(),
            tree6: CritBitTree::new(),
        }
    }
}

impl<V> RouteTable<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a route, replacing the value of an already stored one.
    pub fn insert(&mut self, pfx: &Prefix, value: V) {
        trace!("insert route {}", pfx);
        match pfx.addr() {
            IpAddr::V4(addr) => {
                let id = PrefixId::<IPv4>::new(
                    IPv4::from_ipaddr(addr),
                    pfx.len(),
                );
                self.tree4.upsert(id.as_key_bytes(), value)
            }
            IpAddr::V6(addr) => {
                let id = PrefixId::<IPv6>::new(
                    IPv6::from_ipaddr(addr),
                    pfx.len(),
                );
                self.tree6.upsert(id.as_key_bytes(), value)
            }
        }
    }

    /// Remove the route for this exact prefix, returning its value.
    pub fn remove(&mut self, pfx: &Prefix) -> Option<V> {
        trace!("remove route {}", pfx);
        match pfx.addr() {
            IpAddr::V4(addr) => {
                let id = PrefixId::<IPv4>::new(
                    IPv4::from_ipaddr(addr),
                    pfx.len(),
                );
                self.tree4.remove(id.as_key_bytes())
            }
            IpAddr::V6(addr) => {
                let id = PrefixId::<IPv6>::new(
                    IPv6::from_ipaddr(addr),
                    pfx.len(),
                );
                self.tree6.remove(id.as_key_bytes())
            }
        }
    }

    /// The value stored for this exact prefix.
    pub fn get(&self, pfx: &Prefix) -> Option<&V> {
        match pfx.addr() {
            IpAddr::V4(addr) => {
                let id = PrefixId::<IPv4>::new(
                    IPv4::from_ipaddr(addr),
                    pfx.len(),
                );
                self.tree4.get(id.as_key_bytes())
            }
            IpAddr::V6(addr) => {
                let id = PrefixId::<IPv6>::new(
                    IPv6::from_ipaddr(addr),
                    pfx.len(),
                );
                self.tree6.get(id.as_key_bytes())
            }
        }
    }

    /// The most specific stored route covering the probe prefix, i.e. the
    /// longest-prefix match among routes no more specific than the probe.
    pub fn match_prefix(&self, pfx: &Prefix) -> Option<(Prefix, &V)> {
        match pfx.addr() {
            IpAddr::V4(addr) => {
                let id = PrefixId::<IPv4>::new(
                    IPv4::from_ipaddr(addr),
                    pfx.len(),
                );
                query::lookup(&self.tree4, id.as_key_bytes())
                    .map(|(key, value)| (prefix_from_key::<IPv4>(key), value))
            }
            IpAddr::V6(addr) => {
                let id = PrefixId::<IPv6>::new(
                    IPv6::from_ipaddr(addr),
                    pfx.len(),
                );
                query::lookup(&self.tree6, id.as_key_bytes())
                    .map(|(key, value)| (prefix_from_key::<IPv6>(key), value))
            }
        }
    }

    /// The most specific stored route containing the address: a
    /// longest-prefix match with a full-length probe.
    pub fn match_addr(&self, addr: IpAddr) -> Option<(Prefix, &V)> {
        match addr {
            IpAddr::V4(addr) => {
                let id = PrefixId::<IPv4>::new(
                    IPv4::from_ipaddr(addr),
                    <IPv4 as AddressFamily>::BITS,
                );
                query::lookup(&self.tree4, id.as_key_bytes())
                    .map(|(key, value)| (prefix_from_key::<IPv4>(key), value))
            }
            IpAddr::V6(addr) => {
                let id = PrefixId::<IPv6>::new(
                    IPv6::from_ipaddr(addr),
                    <IPv6 as AddressFamily>::BITS,
                );
                query::lookup(&self.tree6, id.as_key_bytes())
                    .map(|(key, value)| (prefix_from_key::<IPv6>(key), value))
            }
        }
    }

    /// Visit routes in lexicographic key order, IPv4 before IPv6.
    ///
    /// Without a start prefix every route of both families is visited.
    /// With one, only the start's family is walked, beginning at the route
    /// equal to the start prefix; if that route is not stored the walk
    /// visits nothing and returns false. A visitor returning false aborts
    /// the whole walk.
    pub fn walk<F>(&self, start: Option<&Prefix>, mut visit: F) -> bool
    where
        F: FnMut(Prefix, &V) -> bool,
    {
        match start {
            None => {
                self.tree4.walk(None, |key, value| {
                    visit(prefix_from_key::<IPv4>(key), value)
                }) && self.tree6.walk(None, |key, value| {
                    visit(prefix_from_key::<IPv6>(key), value)
                })
            }
            Some(pfx) => match pfx.addr() {
                IpAddr::V4(addr) => {
                    let id = PrefixId::<IPv4>::new(
                        IPv4::from_ipaddr(addr),
                        pfx.len(),
                    );
                    self.tree4.walk(Some(id.as_key_bytes()), |key, value| {
                        visit(prefix_from_key::<IPv4>(key), value)
                    })
                }
                IpAddr::V6(addr) => {
                    let id = PrefixId::<IPv6>::new(
                        IPv6::from_ipaddr(addr),
                        pfx.len(),
                    );
                    self.tree6.walk(Some(id.as_key_bytes()), |key, value| {
                        visit(prefix_from_key::<IPv6>(key), value)
                    })
                }
            },
        }
    }

    /// Drop all routes of both families.
    pub fn clear(&mut self) {
        self.tree4.clear();
        self.tree6.clear();
    }

    /// The number of stored routes over both families.
    pub fn len(&self) -> usize {
        self.tree4.len() + self.tree6.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree4.is_empty() && self.tree6.is_empty()
    }

    /// Write an indented rendering of both tries. For debugging.
    pub fn dump<W: io::Write>(&self, w: &mut W) -> io::Result<()> {
        self.tree4.dump(w)?;
        self.tree6.dump(w)
    }
}

// Stored keys are produced by the codec, so failing to decode one means the
// tree is corrupt.
fn prefix_from_key<AF: AddressFamily>(key: &[u8]) -> Prefix {
    let id = PrefixId::<AF>::from_key_bytes(key)
        .expect("stored key failed to decode");
    Prefix::from(id)
}
