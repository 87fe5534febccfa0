//! Report output formatting.
//!
//! - [`terminal`] - terminal rendering of VNet gap reports

mod terminal;

// Re-export public functions
pub use terminal::{format_field, print_reports, print_vnet_report};
