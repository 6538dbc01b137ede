//! CIDR line parsing.

use std::fmt;
use std::str::FromStr;

use crate::error::CidrParseError;

/// One input line split into its address and prefix length.
///
/// Both parts are kept verbatim: the address is not checked to be an IP
/// literal and the prefix length is not checked to be numeric.
///
/// # Examples
/// ```
/// use cidr2lsrules::CidrEntry;
///
/// let entry: CidrEntry = "10.0.0.0/8".parse().unwrap();
/// assert_eq!(entry.address, "10.0.0.0");
/// assert_eq!(entry.prefix_len, "8");
/// assert_eq!(entry.to_string(), "10.0.0.0/8");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CidrEntry {
    pub address: String,
    pub prefix_len: String,
}

impl CidrEntry {
    pub fn new(address: impl Into<String>, prefix_len: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            prefix_len: prefix_len.into(),
        }
    }
}

impl fmt::Display for CidrEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.address, self.prefix_len)
    }
}

impl FromStr for CidrEntry {
    type Err = CidrParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_cidr_line(s)
    }
}

/// Split a line on `/` into a [`CidrEntry`].
///
/// The line must contain exactly one `/`.
pub fn parse_cidr_line(line: &str) -> Result<CidrEntry, CidrParseError> {
    let mut parts = line.split('/');
    let address = parts.next().unwrap_or_default();
    let prefix_len = parts
        .next()
        .ok_or_else(|| CidrParseError::MissingSeparator(line.to_string()))?;

    if parts.next().is_some() {
        return Err(CidrParseError::TooManySeparators(line.to_string()));
    }

    Ok(CidrEntry::new(address, prefix_len))
}
