//! Cisco (PEN 9) vendor attributes

use crate::registry::{DataType, DictionaryError, VendorDictionary};

/// Cisco's IANA Private Enterprise Number
pub const VENDOR_ID: u32 = 9;

/// Cisco vendor attribute codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CiscoAttribute {
    /// Cisco-AVPair (1) - free-form `name=value` pair
    AvPair = 1,
    /// Cisco-NAS-Port (2)
    NasPort = 2,
    /// Cisco-Disconnect-Cause (195)
    DisconnectCause = 195,
}

impl CiscoAttribute {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(CiscoAttribute::AvPair),
            2 => Some(CiscoAttribute::NasPort),
            195 => Some(CiscoAttribute::DisconnectCause),
            _ => None,
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Build the Cisco vendor dictionary
pub fn dictionary() -> Result<VendorDictionary, DictionaryError> {
    let mut dict = VendorDictionary::new(VENDOR_ID, "Cisco")?;
    dict.attribute(
        CiscoAttribute::AvPair.as_u8(),
        "Cisco-AVPair",
        DataType::Utf8String,
    )?;
    dict.attribute(
        CiscoAttribute::NasPort.as_u8(),
        "Cisco-NAS-Port",
        DataType::Utf8String,
    )?;
    dict.attribute(
        CiscoAttribute::DisconnectCause.as_u8(),
        "Cisco-Disconnect-Cause",
        DataType::Integer32,
    )?;
    Ok(dict)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Value;

    #[test]
    fn test_attribute_code_round_trip() {
        for code in [1, 2, 195] {
            let attr = CiscoAttribute::from_u8(code).unwrap();
            assert_eq!(attr.as_u8(), code);
        }
        assert_eq!(CiscoAttribute::from_u8(0), None);
    }

    #[test]
    fn test_avpair_encodes() {
        let dict = dictionary().unwrap();
        let vsa = dict
            .get(CiscoAttribute::AvPair.as_u8())
            .unwrap()
            .encode(Value::Text("lcp:interface-config=rate-limit input 128000"))
            .unwrap();
        assert_eq!(vsa.vendor_id(), 9);
        assert_eq!(vsa.code(), 1);
    }
}
