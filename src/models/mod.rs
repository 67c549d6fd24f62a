//! Domain models for subnet calculation.
//!
//! - [`Family`] - IPv4 / IPv6 selector
//! - [`Ipv4`] and [`Ipv6`] - address with prefix length, non-strict about host bits
//! - [`SubnetInfo`] - the computed description of a network

mod family;
pub(crate) mod ipv4;
pub(crate) mod ipv6;
mod subnet_info;

use crate::error::InvalidReason;

// Re-export public types
pub use family::Family;
pub use ipv4::{
    broadcast_addr, cut_addr, get_cidr_mask, prefix_from_hostmask, prefix_from_netmask, Ipv4,
};
pub use ipv6::Ipv6;
pub use subnet_info::{FieldValue, SubnetInfo};

/// Split `addr[/mask]` after trimming whitespace.
pub(crate) fn split_cidr(input: &str) -> Result<(&str, Option<&str>), InvalidReason> {
    let input = input.trim();
    let mut parts = input.split('/');
    let addr = parts.next().unwrap_or_default();
    let mask = parts.next();
    if parts.next().is_some() {
        return Err(InvalidReason::TooManySlashes(input.to_string()));
    }
    if addr.is_empty() {
        return Err(InvalidReason::Empty);
    }
    Ok((addr, mask))
}

/// Parse a decimal prefix length, digits only, no larger than `max`.
pub(crate) fn parse_prefix_len(text: &str, max: u8) -> Result<u8, InvalidReason> {
    let invalid = || InvalidReason::InvalidPrefix(text.to_string());
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let len: u32 = text.parse().map_err(|_| invalid())?;
    u8::try_from(len)
        .ok()
        .filter(|len| *len <= max)
        .ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_cidr() {
        assert_eq!(split_cidr("10.0.0.0/8").unwrap(), ("10.0.0.0", Some("8")));
        assert_eq!(split_cidr(" ::1 ").unwrap(), ("::1", None));
        assert_eq!(split_cidr("").unwrap_err(), InvalidReason::Empty);
        assert_eq!(
            split_cidr("1/2/3").unwrap_err(),
            InvalidReason::TooManySlashes("1/2/3".to_string())
        );
    }

    #[test]
    fn test_parse_prefix_len() {
        assert_eq!(parse_prefix_len("0", 32).unwrap(), 0);
        assert_eq!(parse_prefix_len("024", 32).unwrap(), 24);
        assert_eq!(parse_prefix_len("128", 128).unwrap(), 128);
        assert!(parse_prefix_len("33", 32).is_err());
        assert!(parse_prefix_len("", 32).is_err());
        assert!(parse_prefix_len("-1", 32).is_err());
        assert!(parse_prefix_len(" 8", 32).is_err());
        assert!(parse_prefix_len("99999999999999999999", 128).is_err());
    }
}
