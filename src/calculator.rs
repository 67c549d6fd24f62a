//! CIDR string in, [`SubnetInfo`] out.

use crate::error::{CalcError, InvalidReason};
use crate::models::{Family, Ipv4, Ipv6, SubnetInfo};

/// Parse `cidr` as `family` and derive the subnet description.
///
/// Host bits are masked off, so `192.168.1.5/24` describes `192.168.1.0/24`.
/// A range holding a single address (`/32`, `/128`) reports that address as
/// both first and last usable.
pub fn calculate(cidr: &str, family: Family) -> Result<SubnetInfo, CalcError> {
    log::debug!("calculate({cidr}, {family})");
    let info = match family {
        Family::V4 => calculate_ipv4(cidr)?,
        Family::V6 => calculate_ipv6(cidr)?,
    };
    log::debug!("calculate -> {}", info.input_cidr);
    Ok(info)
}

fn out_of_range(index: impl std::fmt::Display, net: impl std::fmt::Display) -> CalcError {
    CalcError::Unexpected(format!("address index {index} out of range for {net}"))
}

fn calculate_ipv4(cidr: &str) -> Result<SubnetInfo, CalcError> {
    let ipv4 = Ipv4::new(cidr).map_err(|reason| {
        log::debug!("rejected IPv4 input {cidr:?}: {reason}");
        CalcError::invalid(Family::V4, reason)
    })?;
    // mask was validated by Ipv4::new, a failure here is internal
    let unexpected = |e: InvalidReason| CalcError::Unexpected(format!("{ipv4}: {e}"));
    let network = ipv4.network().map_err(unexpected)?;
    if network.addr != ipv4.addr {
        log::info!("host bits set in {ipv4}, using {network}");
    }
    let lo = network.lo().map_err(unexpected)?;
    let broadcast = network.hi().map_err(unexpected)?;

    let (first, last) = if network.mask == Family::V4.bits() {
        (lo, lo)
    } else {
        let first = network.nth(1).ok_or_else(|| out_of_range(1, network))?;
        let last = network.nth(-2).ok_or_else(|| out_of_range(-2, network))?;
        (first, last)
    };

    Ok(SubnetInfo {
        version: Family::V4,
        input_cidr: network.to_string(),
        network_address: lo.to_string(),
        broadcast_address: Some(broadcast.to_string()),
        first_usable_address: first.to_string(),
        last_usable_address: last.to_string(),
        total_addresses: network.num_addresses(),
    })
}

fn calculate_ipv6(cidr: &str) -> Result<SubnetInfo, CalcError> {
    let ipv6 = Ipv6::new(cidr).map_err(|reason| {
        log::debug!("rejected IPv6 input {cidr:?}: {reason}");
        CalcError::invalid(Family::V6, reason)
    })?;
    let network = ipv6.network();
    if network.addr != ipv6.addr {
        log::info!("host bits set in {ipv6}, using {network}");
    }

    // No broadcast in IPv6: the top address counts as usable.
    let (first, last) = if network.mask == Family::V6.bits() {
        (network.lo(), network.lo())
    } else {
        let first = network.nth(1).ok_or_else(|| out_of_range(1, network))?;
        let last = network.nth(-1).ok_or_else(|| out_of_range(-1, network))?;
        (first, last)
    };

    Ok(SubnetInfo {
        version: Family::V6,
        input_cidr: network.to_string(),
        network_address: network.lo().to_string(),
        broadcast_address: None,
        first_usable_address: first.to_string(),
        last_usable_address: last.to_string(),
        total_addresses: network.num_addresses(),
    })
}
