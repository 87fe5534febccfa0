//! CIDR prefix type shared by both address families.
//!
//! Provides [`Prefix`] for representing CIDR blocks with parsing, formatting
//! and membership queries, along with address-count arithmetic.

use super::{AddrValue, Family, NetError};
use num_bigint::BigUint;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Bit pattern of the host portion for a prefix length.
fn host_mask(family: Family, len: u8) -> u128 {
    let host_bits = family.width() - len;
    if host_bits == 0 {
        0
    } else if host_bits >= 128 {
        u128::MAX
    } else {
        (1u128 << host_bits) - 1
    }
}

/// A CIDR block: canonical network address plus prefix length.
///
/// Construction clears host bits, so an input like `10.0.0.5/24` is
/// normalized to its containing network `10.0.0.0/24` rather than rejected
/// (non-strict parsing, matching how cloud inventories report prefixes).
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Prefix {
    addr: AddrValue,
    len: u8,
}

impl Prefix {
    /// Create a new [`Prefix`] from CIDR text (e.g., "10.0.0.0/24", "fd00::/64").
    pub fn new(addr_cidr: &str) -> Result<Prefix, NetError> {
        let addr_cidr = addr_cidr.trim();
        let Some((addr_part, len_part)) = addr_cidr.split_once('/') else {
            return Err(NetError::Parse(format!("invalid CIDR format: {addr_cidr}")));
        };
        let addr: AddrValue = addr_part.parse()?;
        let len: u8 = len_part
            .parse()
            .map_err(|_| NetError::Parse(format!("invalid prefix length: {len_part}")))?;
        Prefix::from_parts(addr, len)
    }

    /// Build from an address and length, clearing host bits.
    pub fn from_parts(addr: AddrValue, len: u8) -> Result<Prefix, NetError> {
        let family = addr.family();
        if len > family.width() {
            return Err(NetError::Parse(format!(
                "prefix length /{len} too long for {family}"
            )));
        }
        let network = AddrValue::new(family, addr.bits() & !host_mask(family, len));
        Ok(Prefix { addr: network, len })
    }

    pub fn family(&self) -> Family {
        self.addr.family()
    }

    pub fn prefix_len(&self) -> u8 {
        self.len
    }

    /// First (network) address of the block.
    pub fn lo(&self) -> AddrValue {
        self.addr
    }

    /// Last address of the block (all host bits set).
    pub fn hi(&self) -> AddrValue {
        AddrValue::new(
            self.family(),
            self.addr.bits() | host_mask(self.family(), self.len),
        )
    }

    /// Check if a single address falls within this block.
    pub fn contains_addr(&self, ip: AddrValue) -> bool {
        ip.family() == self.family() && ip >= self.lo() && ip <= self.hi()
    }

    /// True iff `other` is the same family and its whole range lies within this block.
    pub fn contains(&self, other: &Prefix) -> bool {
        other.family() == self.family() && other.lo() >= self.lo() && other.hi() <= self.hi()
    }

    /// True iff `other` is the same family and the two ranges intersect.
    pub fn overlaps(&self, other: &Prefix) -> bool {
        other.family() == self.family() && other.lo() <= self.hi() && self.lo() <= other.hi()
    }

    /// Total number of addresses in the block: 2^(width - prefix length).
    ///
    /// `BigUint` because an IPv6 `/0` holds 2^128 addresses, one more than
    /// `u128` can represent.
    pub fn num_addresses(&self) -> BigUint {
        BigUint::from(1u8) << (self.family().width() - self.len) as usize
    }
}

/// Address count of a CIDR block given as text.
pub fn num_addresses(addr_cidr: &str) -> Result<BigUint, NetError> {
    Ok(Prefix::new(addr_cidr)?.num_addresses())
}

impl FromStr for Prefix {
    type Err = NetError;

    fn from_str(s: &str) -> Result<Prefix, NetError> {
        Prefix::new(s)
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.len)
    }
}

impl Serialize for Prefix {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Prefix {
    fn deserialize<D>(deserializer: D) -> Result<Prefix, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Prefix::new(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical() {
        let p = Prefix::new("10.0.0.0/24").unwrap();
        assert_eq!(p.to_string(), "10.0.0.0/24");
        assert_eq!(p.family(), Family::V4);
        assert_eq!(p.prefix_len(), 24);
    }

    #[test]
    fn test_parse_normalizes_host_bits() {
        // Host bits set: normalized to the containing network, not rejected.
        let p = Prefix::new("10.0.0.5/24").unwrap();
        assert_eq!(p.to_string(), "10.0.0.0/24");

        let p6 = Prefix::new("fd00::1234/64").unwrap();
        assert_eq!(p6.to_string(), "fd00::/64");
    }

    #[test]
    fn test_parse_errors() {
        assert!(Prefix::new("10.0.0.0").is_err(), "missing /len");
        assert!(Prefix::new("10.0.0.0/33").is_err(), "V4 len out of range");
        assert!(Prefix::new("fd00::/129").is_err(), "V6 len out of range");
        assert!(Prefix::new("10.0.0.0/abc").is_err(), "bad length text");
        assert!(Prefix::new("300.0.0.0/8").is_err(), "bad address");
        assert_eq!(
            Prefix::new("10.0.0.0/33").unwrap_err(),
            NetError::Parse("prefix length /33 too long for IPv4".to_string())
        );
    }

    #[test]
    fn test_lo_hi() {
        let p = Prefix::new("192.168.1.0/24").unwrap();
        assert_eq!(p.lo().to_string(), "192.168.1.0");
        assert_eq!(p.hi().to_string(), "192.168.1.255");

        let whole = Prefix::new("0.0.0.0/0").unwrap();
        assert_eq!(whole.hi().to_string(), "255.255.255.255");

        let single = Prefix::new("10.1.2.3/32").unwrap();
        assert_eq!(single.lo(), single.hi());

        let p6 = Prefix::new("fd00::/64").unwrap();
        assert_eq!(p6.hi().to_string(), "fd00::ffff:ffff:ffff:ffff");
    }

    #[test]
    fn test_contains() {
        let vnet = Prefix::new("10.0.0.0/16").unwrap();
        let subnet = Prefix::new("10.0.10.0/24").unwrap();
        assert!(vnet.contains(&subnet));
        assert!(!subnet.contains(&vnet));
        assert!(vnet.contains(&vnet), "a prefix contains itself");

        let other = Prefix::new("172.16.0.0/24").unwrap();
        assert!(!vnet.contains(&other));
    }

    #[test]
    fn test_contains_addr() {
        let p = Prefix::new("10.0.0.0/26").unwrap();
        assert!(p.contains_addr("10.0.0.0".parse().unwrap()));
        assert!(p.contains_addr("10.0.0.63".parse().unwrap()));
        assert!(!p.contains_addr("10.0.0.64".parse().unwrap()));
    }

    #[test]
    fn test_overlaps() {
        let a = Prefix::new("10.0.0.0/24").unwrap();
        let b = Prefix::new("10.0.0.128/25").unwrap();
        let c = Prefix::new("10.0.1.0/24").unwrap();

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a), "overlap is symmetric");
        assert!(!a.overlaps(&c), "adjacent blocks do not overlap");
    }

    #[test]
    fn test_cross_family_is_disjoint() {
        let v4 = Prefix::new("0.0.0.0/0").unwrap();
        let v6 = Prefix::new("::/0").unwrap();
        assert!(!v4.overlaps(&v6));
        assert!(!v4.contains(&v6));
        assert!(!v6.contains_addr("10.0.0.1".parse().unwrap()));
    }

    #[test]
    fn test_round_trip() {
        for text in ["10.0.0.64/26", "0.0.0.0/0", "192.168.1.1/32", "fd00::/64", "::/0"] {
            let p = Prefix::new(text).unwrap();
            assert_eq!(
                Prefix::new(&p.to_string()).unwrap(),
                p,
                "parse(format({text})) should round-trip"
            );
        }
    }

    #[test]
    fn test_num_addresses() {
        assert_eq!(num_addresses("10.0.0.0/24").unwrap(), BigUint::from(256u32));
        assert_eq!(num_addresses("10.1.2.3/32").unwrap(), BigUint::from(1u32));
        assert_eq!(
            num_addresses("0.0.0.0/0").unwrap(),
            BigUint::from(1u8) << 32usize
        );
        // IPv6 /0 = 2^128, which no fixed-width integer holds.
        assert_eq!(num_addresses("::/0").unwrap(), BigUint::from(1u8) << 128usize);
        assert_eq!(num_addresses("fd00::/64").unwrap(), BigUint::from(1u8) << 64usize);

        assert!(num_addresses("not-a-cidr").is_err());
    }

    #[test]
    fn test_serde_string_codec() {
        let p = Prefix::new("10.0.0.0/26").unwrap();
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "\"10.0.0.0/26\"");
        let back: Prefix = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);

        assert!(serde_json::from_str::<Prefix>("\"10.0.0.0\"").is_err());
    }
}
