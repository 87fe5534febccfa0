//! Per-VNet gap report assembly.
//!
//! Combines address counting and gap finding into the structures the output
//! layer renders.

use crate::models::{GapRecord, NetError, Prefix, VnetRecord};
use num_bigint::BigUint;

use super::find_gaps;

/// Gaps found within one of a VNet's address prefixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixGaps {
    /// The container address space.
    pub prefix: Prefix,
    /// Uncovered intervals of the container, ascending.
    pub gaps: Vec<GapRecord>,
}

/// Address count for one subnet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubnetCount {
    /// Name of the subnet.
    pub subnet_name: String,
    /// CIDR blocks allocated to the subnet.
    pub address_prefixes: Vec<Prefix>,
    /// Total addresses across the subnet's prefixes.
    pub address_count: BigUint,
}

/// Computed report for one virtual network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VnetReport {
    pub vnet_name: String,
    pub location: String,
    pub subscription_id: String,
    pub subscription_name: String,
    /// Declared address spaces.
    pub address_prefixes: Vec<Prefix>,
    /// Total addresses across all declared address spaces.
    pub address_count: BigUint,
    /// Per-subnet sizing.
    pub subnets: Vec<SubnetCount>,
    /// Per-address-space gap lists.
    pub prefix_gaps: Vec<PrefixGaps>,
}

/// Build the gap report for a single VNet.
///
/// Each declared address space is swept independently against the flattened
/// subnet prefixes; subnets belonging to a different address space of the
/// same VNet are filtered out per container by the sweep.
pub fn build_vnet_report(vnet: &VnetRecord) -> Result<VnetReport, NetError> {
    let subnet_prefixes: Vec<Prefix> = vnet
        .subnets
        .iter()
        .flat_map(|s| s.address_prefixes.iter().copied())
        .collect();

    let mut prefix_gaps = Vec::with_capacity(vnet.address_prefixes.len());
    for prefix in &vnet.address_prefixes {
        let gaps = find_gaps(prefix, &subnet_prefixes)?;
        prefix_gaps.push(PrefixGaps {
            prefix: *prefix,
            gaps,
        });
    }

    let address_count: BigUint = vnet
        .address_prefixes
        .iter()
        .map(Prefix::num_addresses)
        .sum();

    let subnets = vnet
        .subnets
        .iter()
        .map(|s| SubnetCount {
            subnet_name: s.subnet_name.clone(),
            address_prefixes: s.address_prefixes.clone(),
            address_count: s.address_prefixes.iter().map(Prefix::num_addresses).sum(),
        })
        .collect();

    log::debug!(
        "built report for vnet '{}': {} address spaces, {} subnets",
        vnet.vnet_name,
        vnet.address_prefixes.len(),
        vnet.subnets.len()
    );

    Ok(VnetReport {
        vnet_name: vnet.vnet_name.clone(),
        location: vnet.location.clone(),
        subscription_id: vnet.subscription_id.clone(),
        subscription_name: vnet.subscription_name.clone(),
        address_prefixes: vnet.address_prefixes.clone(),
        address_count,
        subnets,
        prefix_gaps,
    })
}
