// cargo watch -x 'fmt' -x 'run'  // 'run -- --some-arg'

pub mod inventory;
pub mod models;
pub mod output;
pub mod processing;

use models::Inventory;
use processing::VnetReport;
use std::collections::HashSet;
use std::error::Error;

/// Read the VNet snapshot and sort records for stable reporting.
pub fn get_sorted_vnets(cache_file: Option<&str>) -> Result<Inventory, Box<dyn Error>> {
    let mut inventory = inventory::read_vnet_cache(cache_file)?;
    // Sort by vnet_name then subscription
    inventory
        .data
        .sort_by_key(|v| (v.vnet_name.clone(), v.subscription_id.clone()));
    Ok(inventory)
}

// return error if duplicate vnets found
pub fn check_for_duplicate_vnets(inventory: &Inventory) -> Result<(), Box<dyn Error>> {
    let mut seen = HashSet::new();

    for vnet in inventory.data.iter() {
        if !seen.insert((vnet.vnet_name.clone(), vnet.subscription_id.clone())) {
            return Err(format!(
                "Duplicate found: vnet '{}' subscription '{}'",
                vnet.vnet_name, vnet.subscription_id
            )
            .into());
        }
    }
    Ok(())
}

/// Build gap reports for every VNet in the inventory.
pub fn build_reports(inventory: &Inventory) -> Result<Vec<VnetReport>, Box<dyn Error>> {
    let mut reports = Vec::with_capacity(inventory.data.len());
    for vnet in inventory.data.iter() {
        reports.push(processing::build_vnet_report(vnet)?);
    }
    log::info!("Built {} vnet reports", reports.len());
    Ok(reports)
}
