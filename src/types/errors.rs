use std::fmt;

/// Errors returned by the key codec. Lookups, removals and walks that find
/// nothing are not errors; those return `None` or `false`.
#[derive(Debug, PartialEq, Eq)]
pub enum RouteTableError {
    /// The prefix-length byte exceeds the maximum for the address family.
    PrefixLengthInvalid,
    /// A key does not have the exact byte size of its address family.
    KeySizeInvalid,
}

impl std::error::Error for RouteTableError {}

impl fmt::Display for RouteTableError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RouteTableError::PrefixLengthInvalid => {
                write!(f, "Error: The specified prefix length is invalid.")
            }
            RouteTableError::KeySizeInvalid => {
                write!(
                    f,
                    "Error: The key size does not match the address family."
                )
            }
        }
    }
}
