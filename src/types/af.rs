use zerocopy::{NetworkEndian, U128, U32};

//------------ AddressFamily (trait) ----------------------------------------

/// The address family of an IP address as a trait.
///
/// Each family gets its own exactly-sized type, so a stored key never holds
/// more bytes than the family needs. The routing table keeps one trie per
/// implementing type.
pub trait AddressFamily:
    std::fmt::Debug
    + std::hash::Hash
    + Eq
    + Copy
    + zerocopy::FromBytes
    + zerocopy::IntoBytes
    + zerocopy::KnownLayout
    + zerocopy::Immutable
    + zerocopy::Unaligned
{
    /// The number of bits in the byte representation of the family.
    const BITS: u8;

    /// The std::net address type that the value of self belongs to. So,
    /// [std::net::Ipv4Addr], and [std::net::Ipv6Addr] for IPv4, and IPv6
    /// respectively.
    type InnerIpAddr;

    fn from_ipaddr(ip_addr: Self::InnerIpAddr) -> Self;

    /// Turn self into a [std::net::IpAddr].
    fn into_ipaddr(self) -> std::net::IpAddr;

    /// Fill the bits after the specified len with zeros. Interpreted as an
    /// IP prefix, this means that self will be truncated to the specified
    /// len.
    fn truncate_to_len(self, len: u8) -> Self;
}

//-------------- Ipv4 Type --------------------------------------------------

/// Exactly fitting IPv4 bytes (4 octets).
pub type IPv4 = U32<NetworkEndian>;

impl AddressFamily for IPv4 {
    const BITS: u8 = 32;
    type InnerIpAddr = std::net::Ipv4Addr;

    fn from_ipaddr(ip_addr: Self::InnerIpAddr) -> Self {
        IPv4::from(ip_addr.octets())
    }

    fn into_ipaddr(self) -> std::net::IpAddr {
        std::net::IpAddr::V4(std::net::Ipv4Addr::from(u32::from(self)))
    }

    fn truncate_to_len(self, len: u8) -> Self {
        self & ((1_u32.rotate_right(len as u32)
            ^ 1_u32.saturating_sub(len as u32))
        .wrapping_sub(1)
            ^ u32::MAX)
    }
}

//-------------- Ipv6 Type --------------------------------------------------

/// Exactly fitting IPv6 bytes (16 octets).
pub type IPv6 = U128<NetworkEndian>;

impl AddressFamily for IPv6 {
    const BITS: u8 = 128;
    type InnerIpAddr = std::net::Ipv6Addr;

    fn from_ipaddr(ip_addr: Self::InnerIpAddr) -> Self {
        IPv6::from(ip_addr.octets())
    }

    fn into_ipaddr(self) -> std::net::IpAddr {
        std::net::IpAddr::V6(std::net::Ipv6Addr::from(u128::from(self)))
    }

    fn truncate_to_len(self, len: u8) -> Self {
        self & ((1_u128.rotate_right(len as u32)
            ^ 1_u128.saturating_sub(len as u128))
        .wrapping_sub(1)
            ^ u128::MAX)
    }
}
