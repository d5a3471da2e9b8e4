use thiserror::Error;

/// Errors raised while constructing a vendor-specific attribute.
///
/// Every failure is reported synchronously at construction time, before any
/// bytes reach the packet layer. Nothing in this crate retries or degrades;
/// a call either returns complete wire-valid bytes or one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// A required value was absent (or encoded to zero bytes).
    #[error("Required attribute value is missing")]
    NullValue,
    /// An IP value was handed to the other family's encoder.
    #[error("Expected an {expected} address, got {got}")]
    WrongAddressFamily {
        expected: &'static str,
        got: &'static str,
    },
    /// Payload exceeds what a single length octet can describe.
    #[error("Payload too large: {len} bytes (max {max})")]
    PayloadTooLarge { len: usize, max: usize },
    /// Vendor attribute code 0 is reserved.
    #[error("Invalid vendor attribute code: {0}")]
    InvalidAttributeCode(u8),
    /// Vendor id 0 is not a valid Private Enterprise Number.
    #[error("Invalid vendor id: {0}")]
    InvalidVendorId(u32),
    /// The supplied value does not match the attribute's data type.
    #[error("{attribute}: expected {expected} value, got {got}")]
    TypeMismatch {
        attribute: String,
        expected: &'static str,
        got: &'static str,
    },
    /// The integer is outside an enumerated attribute's legal set.
    #[error("{attribute}: {value} is not a legal value")]
    InvalidEnumValue { attribute: String, value: u32 },
    /// No dictionary is registered for this vendor id.
    #[error("Unknown vendor id: {0}")]
    UnknownVendor(u32),
    /// The vendor's dictionary has no attribute with this code.
    #[error("Unknown attribute code {code} for vendor {vendor_id}")]
    UnknownAttribute { vendor_id: u32, code: u8 },
}

/// Vendor sub-attribute nested inside a Vendor-Specific attribute,
/// RFC 2865 Section 5.26
///
/// ```text
///  0                   1                   2
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |  Vendor-Type  | Vendor-Length |  Value ...
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorAttribute {
    /// Attribute code within the vendor's code space (1 byte, nonzero)
    vendor_type: u8,
    /// Attribute payload (1-253 bytes)
    value: Vec<u8>,
}

impl VendorAttribute {
    /// Sub-attribute header length (Vendor-Type + Vendor-Length)
    pub const HEADER_LENGTH: usize = 2;
    /// Maximum payload length the Vendor-Length octet can describe
    /// (255 minus its own 2-byte header)
    pub const MAX_VALUE_LENGTH: usize = 253;

    pub fn new(vendor_type: u8, value: Vec<u8>) -> Result<Self, EncodeError> {
        if vendor_type == 0 {
            return Err(EncodeError::InvalidAttributeCode(vendor_type));
        }
        if value.is_empty() {
            return Err(EncodeError::NullValue);
        }
        if value.len() > Self::MAX_VALUE_LENGTH {
            return Err(EncodeError::PayloadTooLarge {
                len: value.len(),
                max: Self::MAX_VALUE_LENGTH,
            });
        }
        Ok(VendorAttribute { vendor_type, value })
    }

    /// Attribute code within the vendor's code space
    pub fn vendor_type(&self) -> u8 {
        self.vendor_type
    }

    /// Attribute payload bytes
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Encoded sub-attribute length (header plus payload)
    pub fn encoded_length(&self) -> usize {
        Self::HEADER_LENGTH + self.value.len()
    }

    fn write_to(&self, buffer: &mut Vec<u8>) {
        buffer.push(self.vendor_type);
        buffer.push(self.encoded_length() as u8);
        buffer.extend_from_slice(&self.value);
    }
}

/// Vendor-Specific attribute (Type 26) as defined in RFC 2865 Section 5.26
///
/// ```text
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |     Type      |    Length     |            Vendor-Id
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
///      Vendor-Id (cont)           |  Vendor-Type  | Vendor-Length |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |  Value ...
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-
/// ```
///
/// This is the value object handed to the packet-assembly layer, which owns
/// placing it inside a RADIUS packet and transmitting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vsa {
    /// IANA Private Enterprise Number (4 bytes, nonzero)
    vendor_id: u32,
    /// Nested vendor sub-attribute
    attribute: VendorAttribute,
}

impl Vsa {
    /// Attribute type for Vendor-Specific (RFC 2865 Section 5.26)
    pub const TYPE: u8 = 26;
    /// Outer header length (Type + Length + Vendor-Id)
    pub const HEADER_LENGTH: usize = 6;
    /// Maximum encoded attribute length the Length octet can describe
    pub const MAX_LENGTH: usize = 255;
    /// Largest payload whose encoded attribute still fits [`Self::MAX_LENGTH`]
    pub const MAX_VALUE_LENGTH: usize =
        Self::MAX_LENGTH - Self::HEADER_LENGTH - VendorAttribute::HEADER_LENGTH;

    pub fn new(vendor_id: u32, attribute: VendorAttribute) -> Result<Self, EncodeError> {
        if vendor_id == 0 {
            return Err(EncodeError::InvalidVendorId(vendor_id));
        }
        Ok(Vsa {
            vendor_id,
            attribute,
        })
    }

    /// Build the complete wire bytes for one vendor attribute in a single call.
    pub fn build(vendor_id: u32, vendor_type: u8, payload: &[u8]) -> Result<Vec<u8>, EncodeError> {
        let attribute = VendorAttribute::new(vendor_type, payload.to_vec())?;
        Vsa::new(vendor_id, attribute)?.encode()
    }

    /// IANA Private Enterprise Number
    pub fn vendor_id(&self) -> u32 {
        self.vendor_id
    }

    /// Attribute code within the vendor's code space
    pub fn code(&self) -> u8 {
        self.attribute.vendor_type()
    }

    /// Attribute payload bytes
    pub fn payload(&self) -> &[u8] {
        self.attribute.value()
    }

    /// Nested vendor sub-attribute
    pub fn attribute(&self) -> &VendorAttribute {
        &self.attribute
    }

    /// Encoded attribute length (outer header plus sub-attribute)
    pub fn encoded_length(&self) -> usize {
        Self::HEADER_LENGTH + self.attribute.encoded_length()
    }

    /// Encode to wire bytes
    ///
    /// Deterministic: identical inputs always produce identical bytes. The
    /// outer Length octet covers the whole attribute, so payloads that form a
    /// valid sub-attribute can still be rejected here when the enclosing
    /// attribute would exceed 255 bytes.
    pub fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        let length = self.encoded_length();
        if length > Self::MAX_LENGTH {
            return Err(EncodeError::PayloadTooLarge {
                len: self.attribute.value().len(),
                max: Self::MAX_VALUE_LENGTH,
            });
        }

        let mut buffer = Vec::with_capacity(length);
        buffer.push(Self::TYPE);
        buffer.push(length as u8);
        buffer.extend_from_slice(&self.vendor_id.to_be_bytes());
        self.attribute.write_to(&mut buffer);
        Ok(buffer)
    }
}
