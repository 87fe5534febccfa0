//! Gap finding between a container prefix and its sub-allocations.
//!
//! Identifies the address ranges of a container that no sub-prefix covers,
//! and summarizes each into its minimal CIDR cover.

use crate::models::{AddrRange, GapRecord, NetError, Prefix};
use itertools::Itertools;

use super::summarize_range;

/// Find the uncovered intervals of `container`, given its sub-allocations.
///
/// `sub_ranges` may be a flat list shared by several disjoint containers:
/// entries of another family or outside this container are filtered out
/// before the sweep. Overlapping and duplicate sub-ranges are tolerated (the
/// coverage cursor only ever advances), and a sub-range reaching past the
/// container is clipped to the container's last address.
///
/// Returns one [`GapRecord`] per uncovered interval, in ascending address
/// order. An empty `sub_ranges` yields a single gap spanning the whole
/// container; full coverage yields none.
pub fn find_gaps(container: &Prefix, sub_ranges: &[Prefix]) -> Result<Vec<GapRecord>, NetError> {
    let relevant: Vec<&Prefix> = sub_ranges
        .iter()
        .filter(|s| container.overlaps(s))
        .sorted_by_key(|s| s.lo())
        .collect();

    log::debug!(
        "find_gaps({container}): {} of {} sub-ranges relevant",
        relevant.len(),
        sub_ranges.len()
    );

    let mut intervals: Vec<AddrRange> = Vec::new();
    // None once the sweep has run off the end of the family's address space.
    let mut cursor = Some(container.lo());

    for sub in relevant {
        let Some(cur) = cursor else { break };

        if sub.lo() > cur {
            if let Some(gap_end) = sub.lo().pred() {
                intervals.push(AddrRange::new(cur, gap_end)?);
            }
        }

        // Advance past the covered span, never backward, clipped to the
        // container (a sub-range may extend beyond it).
        let covered_end = sub.hi().min(container.hi());
        if covered_end >= cur {
            cursor = covered_end.succ();
        }
    }

    if let Some(cur) = cursor {
        if cur <= container.hi() {
            intervals.push(AddrRange::new(cur, container.hi())?);
        }
    }

    intervals
        .into_iter()
        .map(|range| {
            let cidrs = summarize_range(range.start(), range.end())?;
            Ok(GapRecord { range, cidrs })
        })
        .collect()
}
