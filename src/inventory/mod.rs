//! VNet inventory snapshot loading.
//!
//! - [`cache`] - reading the aggregated VNet listing from disk

mod cache;

// Re-export public functions
pub use cache::read_vnet_cache;
