// Copyright (c) 2025 - Cowboy AI, Inc.
//! Network Value Objects with Validation Invariants

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use crate::errors::{FabricError, FabricResult};

/// IP network prefix in CIDR notation value object
///
/// Represents an IPv4 or IPv6 network such as `10.0.0.0/24`. A bare address
/// without a prefix length is accepted and treated as a host network
/// (`/32` or `/128`). This type only validates well-formedness; address
/// allocation happens elsewhere.
///
/// Invariants:
/// - Valid IP address format
/// - Prefix length 0-32 for IPv4, 0-128 for IPv6
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CidrPrefix {
    address: IpAddr,
    prefix_length: u8,
}

impl CidrPrefix {
    /// Parse a CIDR string, reporting failures against `field`
    ///
    /// The field name flows into [`FabricError::InvalidAddressFormat`] so
    /// callers validating several prefix fields can aggregate reports.
    pub fn parse(field: &str, cidr: impl AsRef<str>) -> FabricResult<Self> {
        let cidr = cidr.as_ref();
        let invalid = || FabricError::InvalidAddressFormat(vec![field.to_string()]);

        if let Some((addr_str, prefix_str)) = cidr.split_once('/') {
            let address = IpAddr::from_str(addr_str).map_err(|_| invalid())?;
            let prefix_length = prefix_str.parse::<u8>().map_err(|_| invalid())?;
            if prefix_length > Self::max_prefix(address) {
                return Err(invalid());
            }
            Ok(Self {
                address,
                prefix_length,
            })
        } else {
            let address = IpAddr::from_str(cidr).map_err(|_| invalid())?;
            Ok(Self {
                address,
                prefix_length: Self::max_prefix(address),
            })
        }
    }

    fn max_prefix(address: IpAddr) -> u8 {
        match address {
            IpAddr::V4(_) => 32,
            IpAddr::V6(_) => 128,
        }
    }

    /// Get the network address
    pub fn address(&self) -> IpAddr {
        self.address
    }

    /// Get the prefix length
    pub fn prefix_length(&self) -> u8 {
        self.prefix_length
    }

    /// Check if this is an IPv4 network
    pub fn is_ipv4(&self) -> bool {
        matches!(self.address, IpAddr::V4(_))
    }

    /// Get as CIDR notation string
    pub fn as_cidr(&self) -> String {
        format!("{}/{}", self.address, self.prefix_length)
    }
}

impl fmt::Display for CidrPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_cidr())
    }
}
