//! IPv6 counterpart of [`super::Ipv4`], using u128 arithmetic.

use super::{parse_prefix_len, split_cidr, Family};
use crate::error::InvalidReason;
use num_bigint::BigUint;
use std::net::Ipv6Addr;

/// Maximum length for an IPv6 prefix (128 bits).
pub const MAX_LENGTH: u8 = 128;

// len must already be <= MAX_LENGTH
fn mask_bits(len: u8) -> u128 {
    u128::MAX
        .checked_shl(u32::from(MAX_LENGTH - len))
        .unwrap_or(0)
}

/// IPv6 address with prefix length. Host bits in `addr` are kept as given.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct Ipv6 {
    pub addr: Ipv6Addr,
    /// Prefix length (0-128).
    pub mask: u8,
}

impl Ipv6 {
    /// Parse `addr/prefix`. Only decimal prefix lengths are accepted; a missing
    /// prefix means `/128`.
    pub fn new(addr_cidr: &str) -> Result<Ipv6, InvalidReason> {
        let (addr_part, mask_part) = split_cidr(addr_cidr)?;
        let addr: Ipv6Addr = addr_part
            .parse()
            .map_err(|_| InvalidReason::MalformedAddress {
                addr: addr_part.to_string(),
                family: Family::V6,
            })?;
        let mask = match mask_part {
            Some(text) => parse_prefix_len(text, MAX_LENGTH)?,
            None => MAX_LENGTH,
        };
        log::trace!("Ipv6::new({addr_cidr}) -> {addr}/{mask}");
        Ok(Ipv6 { addr, mask })
    }

    /// The containing network, host bits cleared.
    pub fn network(&self) -> Ipv6 {
        Ipv6 {
            addr: self.lo(),
            mask: self.mask,
        }
    }

    /// Lowest (network) address in the range.
    pub fn lo(&self) -> Ipv6Addr {
        Ipv6Addr::from(u128::from(self.addr) & mask_bits(self.mask))
    }

    /// Highest address in the range. IPv6 has no broadcast, this is a normal host.
    pub fn hi(&self) -> Ipv6Addr {
        Ipv6Addr::from(u128::from(self.lo()) | self.host_bits())
    }

    fn host_bits(&self) -> u128 {
        !mask_bits(self.mask)
    }

    /// Number of addresses in the range, `2^(128 - mask)`. Exceeds u128 for `/0`.
    pub fn num_addresses(&self) -> BigUint {
        BigUint::from(1u8) << usize::from(MAX_LENGTH - self.mask)
    }

    /// Address at `index` within the range, negative indexes counting back from [`Ipv6::hi`].
    pub fn nth(&self, index: i128) -> Option<Ipv6Addr> {
        let host_max = self.host_bits();
        if index >= 0 {
            let offset = index.unsigned_abs();
            (offset <= host_max).then(|| Ipv6Addr::from(u128::from(self.lo()) + offset))
        } else {
            let offset = index.unsigned_abs() - 1;
            (offset <= host_max).then(|| Ipv6Addr::from(u128::from(self.hi()) - offset))
        }
    }
}

impl std::fmt::Display for Ipv6 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
