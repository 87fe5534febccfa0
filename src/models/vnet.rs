//! Virtual network inventory records.
//!
//! These mirror the snapshot the cloud-inventory collaborator writes: flat
//! VNet records with their declared address prefixes and nested subnets.

use super::Prefix;
use serde::{Deserialize, Serialize};

/// A subnet inside a virtual network snapshot.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SubnetRecord {
    /// Name of the subnet.
    pub subnet_name: String,
    /// CIDR blocks allocated to the subnet.
    pub address_prefixes: Vec<Prefix>,
}

/// A virtual network record as supplied by the inventory snapshot.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct VnetRecord {
    /// Name of the virtual network.
    pub vnet_name: String,
    /// Region location.
    pub location: String,
    /// Subscription ID owning the VNet.
    pub subscription_id: String,
    /// Subscription display name.
    pub subscription_name: String,
    /// Declared address spaces of the VNet.
    pub address_prefixes: Vec<Prefix>,
    /// Subnets carved out of the address spaces.
    pub subnets: Vec<SubnetRecord>,
    /// Record index from source (for tracking/debugging).
    #[serde(default)]
    pub src_index: usize,
}

impl Default for VnetRecord {
    fn default() -> Self {
        VnetRecord {
            vnet_name: "blank".to_string(),
            location: "blank".to_string(),
            subscription_id: "blank".to_string(),
            subscription_name: "blank".to_string(),
            address_prefixes: vec![],
            subnets: vec![],
            src_index: 0,
        }
    }
}

/// Snapshot envelope read from the cache file.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct Inventory {
    /// List of VNet records.
    pub data: Vec<VnetRecord>,
    /// Count of records in the snapshot.
    pub count: i32,
}
