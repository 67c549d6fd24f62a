//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`Ipv4`] struct for representing IPv4 addresses with subnet masks,
//! along with utility functions for subnet calculations.

use super::{parse_prefix_len, split_cidr, Family};
use crate::error::InvalidReason;
use num_bigint::BigUint;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_calc::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, InvalidReason> {
    if len > MAX_LENGTH {
        Err(InvalidReason::InvalidPrefix(len.to_string()))
    } else {
        Ok(mask_bits(len))
    }
}

// len must already be <= MAX_LENGTH
fn mask_bits(len: u8) -> u32 {
    u32::MAX
        .checked_shl(u32::from(MAX_LENGTH - len))
        .unwrap_or(0)
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, InvalidReason> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, InvalidReason> {
    let mask = get_cidr_mask(len)?;
    let network_bits = u32::from(addr) & mask;
    Ok(Ipv4Addr::from(network_bits | !mask))
}

/// Prefix length of a netmask such as `255.255.255.0`, if the ones are contiguous.
pub fn prefix_from_netmask(netmask: Ipv4Addr) -> Option<u8> {
    let bits = u32::from(netmask);
    let ones = bits.leading_ones();
    (ones + bits.trailing_zeros() >= u32::from(MAX_LENGTH)).then_some(ones as u8)
}

/// Prefix length of a hostmask such as `0.0.0.255`, if the ones are contiguous.
pub fn prefix_from_hostmask(hostmask: Ipv4Addr) -> Option<u8> {
    let bits = u32::from(hostmask);
    let zeros = bits.leading_zeros();
    (zeros + bits.trailing_ones() >= u32::from(MAX_LENGTH)).then_some(zeros as u8)
}

/// Parse the part after `/`: a prefix length, a netmask or a hostmask.
fn parse_mask(text: &str) -> Result<u8, InvalidReason> {
    if text.bytes().all(|b| b.is_ascii_digit()) {
        return parse_prefix_len(text, MAX_LENGTH);
    }
    let mask_addr: Ipv4Addr = text
        .parse()
        .map_err(|_| InvalidReason::InvalidPrefix(text.to_string()))?;
    prefix_from_netmask(mask_addr)
        .or_else(|| prefix_from_hostmask(mask_addr))
        .ok_or_else(|| InvalidReason::InvalidPrefix(text.to_string()))
}

/// IPv4 address with CIDR notation support.
///
/// `addr` keeps whatever host bits were given; [`Ipv4::lo`] masks them off.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The subnet mask length (0-32).
    pub mask: u8,
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    ///
    /// Host bits are accepted. A missing prefix means `/32`.
    pub fn new(addr_cidr: &str) -> Result<Ipv4, InvalidReason> {
        let (addr_part, mask_part) = split_cidr(addr_cidr)?;
        let addr: Ipv4Addr = addr_part
            .parse()
            .map_err(|_| InvalidReason::MalformedAddress {
                addr: addr_part.to_string(),
                family: Family::V4,
            })?;
        let mask = match mask_part {
            Some(text) => parse_mask(text)?,
            None => MAX_LENGTH,
        };
        log::trace!("Ipv4::new({addr_cidr}) -> {addr}/{mask}");
        Ok(Ipv4 { addr, mask })
    }

    /// The containing network, host bits cleared.
    pub fn network(&self) -> Result<Ipv4, InvalidReason> {
        Ok(Ipv4 {
            addr: self.lo()?,
            mask: self.mask,
        })
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Result<Ipv4Addr, InvalidReason> {
        cut_addr(self.addr, self.mask)
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Result<Ipv4Addr, InvalidReason> {
        broadcast_addr(self.addr, self.mask)
    }

    /// Number of addresses in the subnet, `2^(32 - mask)`.
    pub fn num_addresses(&self) -> BigUint {
        BigUint::from(1u8) << usize::from(MAX_LENGTH - self.mask)
    }

    /// Address at `index` within the subnet. Negative indexes count back from
    /// the broadcast address (`-1` is the broadcast address itself).
    pub fn nth(&self, index: i64) -> Option<Ipv4Addr> {
        let host_max = u64::from(!get_cidr_mask(self.mask).ok()?);
        if index >= 0 {
            let offset = index.unsigned_abs();
            let lo = u32::from(self.lo().ok()?);
            (offset <= host_max).then(|| Ipv4Addr::from(lo + offset as u32))
        } else {
            let offset = index.unsigned_abs() - 1;
            let hi = u32::from(self.hi().ok()?);
            (offset <= host_max).then(|| Ipv4Addr::from(hi - offset as u32))
        }
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
