//! Alcatel (PEN 3041) vendor attributes
//!
//! Subscriber provisioning attributes: DNS resolver addresses for both
//! families, the service profile name, and the client hardware identifier.

use crate::registry::{DataType, DictionaryError, VendorDictionary};

/// Alcatel's IANA Private Enterprise Number
pub const VENDOR_ID: u32 = 3041;

/// Alcatel vendor attribute codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum AlcatelAttribute {
    /// Alcatel-Service-Profile (5)
    ServiceProfile = 5,
    /// Alcatel-Primary-DNS (9)
    PrimaryDns = 9,
    /// Alcatel-Secondary-DNS (10)
    SecondaryDns = 10,
    /// Alcatel-IPv6-Primary-DNS (11)
    Ipv6PrimaryDns = 11,
    /// Alcatel-IPv6-Secondary-DNS (12)
    Ipv6SecondaryDns = 12,
    /// Alcatel-Client-Hardware-Address (20)
    ClientHardwareAddress = 20,
}

impl AlcatelAttribute {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            5 => Some(AlcatelAttribute::ServiceProfile),
            9 => Some(AlcatelAttribute::PrimaryDns),
            10 => Some(AlcatelAttribute::SecondaryDns),
            11 => Some(AlcatelAttribute::Ipv6PrimaryDns),
            12 => Some(AlcatelAttribute::Ipv6SecondaryDns),
            20 => Some(AlcatelAttribute::ClientHardwareAddress),
            _ => None,
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Build the Alcatel vendor dictionary
pub fn dictionary() -> Result<VendorDictionary, DictionaryError> {
    let mut dict = VendorDictionary::new(VENDOR_ID, "Alcatel")?;
    dict.attribute(
        AlcatelAttribute::ServiceProfile.as_u8(),
        "Alcatel-Service-Profile",
        DataType::Utf8String,
    )?;
    dict.attribute(
        AlcatelAttribute::PrimaryDns.as_u8(),
        "Alcatel-Primary-DNS",
        DataType::Ipv4Address,
    )?;
    dict.attribute(
        AlcatelAttribute::SecondaryDns.as_u8(),
        "Alcatel-Secondary-DNS",
        DataType::Ipv4Address,
    )?;
    dict.attribute(
        AlcatelAttribute::Ipv6PrimaryDns.as_u8(),
        "Alcatel-IPv6-Primary-DNS",
        DataType::Ipv6Address,
    )?;
    dict.attribute(
        AlcatelAttribute::Ipv6SecondaryDns.as_u8(),
        "Alcatel-IPv6-Secondary-DNS",
        DataType::Ipv6Address,
    )?;
    dict.attribute(
        AlcatelAttribute::ClientHardwareAddress.as_u8(),
        "Alcatel-Client-Hardware-Address",
        DataType::Octets,
    )?;
    Ok(dict)
}
