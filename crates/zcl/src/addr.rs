use std::fmt::{self, Debug, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ZclError;

/// 64-bit IEEE (EUI-64) network identity of a zigbee device
///
/// Textual form is `0x` followed by 16 lowercase hex digits, which is how
/// zigbee stacks usually name devices.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(into = "String", try_from = "String")]
pub struct IeeeAddress(u64);

impl IeeeAddress {
    #[must_use]
    pub const fn new(addr: u64) -> Self {
        Self(addr)
    }

    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// The address as 8 octets, most significant first
    #[must_use]
    pub const fn octets(&self) -> [u8; 8] {
        self.0.to_be_bytes()
    }

    /// Colon-separated octets, e.g. `00:17:88:01:02:03:04:05`
    #[must_use]
    pub fn to_colon_string(&self) -> String {
        self.octets()
            .iter()
            .map(|b| hex::encode([*b]))
            .collect::<Vec<_>>()
            .join(":")
    }
}

impl Debug for IeeeAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IeeeAddress({:016x})", self.0)
    }
}

impl Display for IeeeAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:016x}", self.0)
    }
}

impl FromStr for IeeeAddress {
    type Err = ZclError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim_start_matches("0x");
        if digits.is_empty() || digits.len() > 16 {
            return Err(ZclError::InvalidIeeeAddress(s.to_string()));
        }
        Ok(Self(u64::from_str_radix(digits, 16)?))
    }
}

impl TryFrom<String> for IeeeAddress {
    type Error = ZclError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<IeeeAddress> for String {
    fn from(value: IeeeAddress) -> Self {
        value.to_string()
    }
}

impl From<u64> for IeeeAddress {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use crate::addr::IeeeAddress;

    #[test]
    fn parse_display() {
        let addr: IeeeAddress = "0x00178801020304ab".parse().unwrap();
        assert_eq!(addr.value(), 0x0017_8801_0203_04ab);
        assert_eq!(addr.to_string(), "0x00178801020304ab");
    }

    #[test]
    fn parse_without_prefix() {
        let addr: IeeeAddress = "ff".parse().unwrap();
        assert_eq!(addr, IeeeAddress::new(0xff));
    }

    #[test]
    fn parse_invalid() {
        assert!("0x".parse::<IeeeAddress>().is_err());
        assert!("0xnothex".parse::<IeeeAddress>().is_err());
        assert!("0x00112233445566778899".parse::<IeeeAddress>().is_err());
    }

    #[test]
    fn colon_string() {
        let addr = IeeeAddress::new(0x0017_8801_0203_04ab);
        assert_eq!(addr.to_colon_string(), "00:17:88:01:02:03:04:ab");
    }

    #[test]
    fn serde_string_form() {
        let addr = IeeeAddress::new(0x1234);
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, "\"0x0000000000001234\"");
        assert_eq!(serde_json::from_str::<IeeeAddress>(&json).unwrap(), addr);
    }
}
