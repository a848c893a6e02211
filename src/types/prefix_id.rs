use inetnum::addr::Prefix;
use zerocopy::{FromBytes, IntoBytes};

use crate::types::errors::RouteTableError;
use crate::types::AddressFamily;

//------------ PrefixId ------------------------------------------------------

/// The canonical binary form of a CIDR prefix: the address bytes in network
/// order followed by a single prefix-length byte, counted in bits.
///
/// The byte image of this struct is the trie key, so all keys of one family
/// share one size (5 bytes for IPv4, 17 for IPv6) and the prefix-length
/// byte is always the final byte. The longest-prefix match relies on both
/// properties.
#[derive(
    Hash,
    Eq,
    PartialEq,
    Debug,
    Copy,
    Clone,
    zerocopy::FromBytes,
    zerocopy::IntoBytes,
    zerocopy::KnownLayout,
    zerocopy::Immutable,
    zerocopy::Unaligned,
)]
#[repr(C)]
pub struct PrefixId<AF: AddressFamily> {
    net: AF,
    len: u8,
}

impl<AF: AddressFamily> PrefixId<AF> {
    /// Create a canonical id. Bits beyond `len` are masked to zero, so any
    /// two spellings of one CIDR produce identical key bytes.
    pub fn new(net: AF, len: u8) -> Self {
        PrefixId {
            net: net.truncate_to_len(len),
            len,
        }
    }

    pub fn get_net(&self) -> AF {
        self.net
    }

    pub fn get_len(&self) -> u8 {
        self.len
    }

    /// The stored-key image of this prefix.
    pub fn as_key_bytes(&self) -> &[u8] {
        self.as_bytes()
    }

    /// Decode a stored key back into a prefix id.
    pub fn from_key_bytes(key: &[u8]) -> Result<Self, RouteTableError> {
        let id = Self::read_from_bytes(key)
            .map_err(|_| RouteTableError::KeySizeInvalid)?;
        if id.len > AF::BITS {
            return Err(RouteTableError::PrefixLengthInvalid);
        }
        Ok(id)
    }
}

impl<AF: AddressFamily> From<PrefixId<AF>> for Prefix {
    fn from(value: PrefixId<AF>) -> Self {
        Prefix::new(value.get_net().into_ipaddr(), value.get_len())
            .expect("canonical prefix id held an invalid prefix")
    }
}
