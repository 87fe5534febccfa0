//! Range summarization into minimal CIDR covers.
//!
//! Converts an arbitrary inclusive address range into the smallest ordered
//! list of aligned CIDR blocks that exactly covers it.

use crate::models::{AddrRange, AddrValue, NetError, Prefix};

/// Summarize an inclusive [start, end] range into its minimal CIDR cover.
///
/// Greatest-aligned-block expansion: at each step the emitted block is the
/// largest one that both starts aligned at the current position and ends at
/// or before `end`. The result is ordered ascending, pairwise disjoint, and
/// no two neighbours can be merged into a single larger aligned block.
///
/// # Errors
/// [`NetError::InvalidRange`] when start > end,
/// [`NetError::FamilyMismatch`] when the addresses are of different families.
pub fn summarize_range(start: AddrValue, end: AddrValue) -> Result<Vec<Prefix>, NetError> {
    let range = AddrRange::new(start, end)?;
    let width = u32::from(start.family().width());

    let mut blocks = Vec::new();
    let mut cur = range.start();
    loop {
        // Largest block size the alignment of `cur` allows.
        // (trailing_zeros of 0 is 128, capped to the family width)
        let align = cur.bits().trailing_zeros().min(width);

        // Largest block size that still ends at or before `end`.
        let span = end.bits() - cur.bits();
        let fit = if span == u128::MAX {
            width
        } else {
            (span + 1).ilog2().min(width)
        };

        let len = (width - align.min(fit)) as u8;
        let block = Prefix::from_parts(cur, len)?;
        let block_hi = block.hi();
        blocks.push(block);

        if block_hi >= end {
            break;
        }
        cur = match block_hi.succ() {
            Some(next) => next,
            None => break, // family maximum reached, range exhausted
        };
    }

    Ok(blocks)
}
