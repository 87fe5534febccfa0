//! Cache management for VNet snapshot data.
//!
//! The inventory collaborator (out of scope here) writes its aggregated VNet
//! listing to a JSON snapshot; this module reads it back.

use crate::models::Inventory;
use chrono;
use std::error::Error;
use std::path::Path;

/// Read VNet inventory from a snapshot file.
///
/// # Arguments
/// * `cache_file` - Optional path to a specific snapshot. If None, uses the
///   dated default naming.
///
/// # Returns
/// * `Ok(Inventory)` - The VNet data from the snapshot
/// * `Err` - If the file does not exist or fails to parse
pub fn read_vnet_cache(cache_file: Option<&str>) -> Result<Inventory, Box<dyn Error>> {
    let now = chrono::Utc::now().with_timezone(&chrono_tz::Pacific::Auckland);

    let cache_file = match cache_file {
        Some(file) => {
            if !Path::new(file).exists() {
                return Err(format!("Cache file does not exist: {file}").into());
            }
            log::info!("Using provided cache file: {file}");
            file.to_string()
        }
        None => format!("vnet_cache_{}.json", now.format("%Y-%m-%d")),
    };

    let json = std::fs::read_to_string(&cache_file)
        .map_err(|e| format!("Error reading cache file {cache_file}: {e}"))?;
    log::info!("Reading from cache file: {cache_file}");

    let mut deserializer = serde_json::Deserializer::from_str(&json);
    let inventory: Inventory = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| format!("Error parsing cache JSON: path={} error={}", e.path(), e))?;

    if inventory.count as usize != inventory.data.len() {
        log::warn!(
            "Cache count {} does not match record count {}",
            inventory.count,
            inventory.data.len()
        );
    }

    Ok(inventory)
}
