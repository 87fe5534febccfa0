//! Inclusive address intervals and gap records.
//!
//! [`AddrRange`] is the ephemeral [start, end] pair used by the gap sweep and
//! range summarization. Its textual form is `"first - last"`, the shape the
//! reporting layer prints and downstream tooling parses back.

use super::{AddrValue, NetError, Prefix};
use lazy_static::lazy_static;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Inclusive [start, end] address pair. Invariant: same family, start <= end.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct AddrRange {
    start: AddrValue,
    end: AddrValue,
}

impl AddrRange {
    pub fn new(start: AddrValue, end: AddrValue) -> Result<AddrRange, NetError> {
        if start.family() != end.family() {
            return Err(NetError::FamilyMismatch(start.family(), end.family()));
        }
        if start > end {
            return Err(NetError::InvalidRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(AddrRange { start, end })
    }

    pub fn start(&self) -> AddrValue {
        self.start
    }

    pub fn end(&self) -> AddrValue {
        self.end
    }
}

impl fmt::Display for AddrRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

lazy_static! {
    static ref RANGE_RE: Regex = Regex::new(r"^\s*(\S+)\s*-\s*(\S+)\s*$").expect("Invalid Regex?");
}

impl FromStr for AddrRange {
    type Err = NetError;

    fn from_str(s: &str) -> Result<AddrRange, NetError> {
        let caps = RANGE_RE
            .captures(s)
            .ok_or_else(|| NetError::Parse(format!("invalid range format: {s}")))?;
        let start: AddrValue = caps[1].parse()?;
        let end: AddrValue = caps[2].parse()?;
        AddrRange::new(start, end)
    }
}

impl Serialize for AddrRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for AddrRange {
    fn deserialize<D>(deserializer: D) -> Result<AddrRange, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// One uncovered interval of a container plus its minimal CIDR cover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GapRecord {
    /// The uncovered interval.
    pub range: AddrRange,
    /// Minimal ordered CIDR blocks exactly covering the interval.
    pub cidrs: Vec<Prefix>,
}

impl fmt::Display for GapRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let cidrs: Vec<String> = self.cidrs.iter().map(|c| c.to_string()).collect();
        write!(f, "{} => {}", self.range, cidrs.join(", "))
    }
}
