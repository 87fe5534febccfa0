//! Address-space processing logic.
//!
//! This module contains the computational core of the crate:
//! - [`summarize`] - range-to-CIDR summarization
//! - [`gap_finder`] - uncovered-interval sweep over a container
//! - [`report`] - per-VNet report assembly

mod gap_finder;
mod report;
mod summarize;

// Re-export public functions
pub use gap_finder::find_gaps;
pub use report::{build_vnet_report, PrefixGaps, SubnetCount, VnetReport};
pub use summarize::summarize_range;
