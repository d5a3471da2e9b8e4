use crate::codec;
use crate::validation::validate_value;
use crate::vsa::{EncodeError, VendorAttribute, Vsa};
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// Payload data types for vendor attributes
///
/// The data type selects the codec and, for the fixed-size types, the exact
/// payload length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DataType {
    /// 4-byte big-endian signed integer
    Integer32,
    /// 4-byte big-endian unsigned integer
    Unsigned32,
    /// UTF-8 string, no terminator
    #[serde(rename = "string")]
    Utf8String,
    /// 4-byte network-order IPv4 address
    Ipv4Address,
    /// 16-byte network-order IPv6 address
    Ipv6Address,
    /// Raw bytes, caller-defined interpretation
    Octets,
    /// 4-byte big-endian unsigned integer restricted to a closed value set
    Enumerated,
}

impl DataType {
    /// Short name used in diagnostics
    pub fn name(self) -> &'static str {
        match self {
            DataType::Integer32 => "integer32",
            DataType::Unsigned32 => "unsigned32",
            DataType::Utf8String => "string",
            DataType::Ipv4Address => "ipv4-address",
            DataType::Ipv6Address => "ipv6-address",
            DataType::Octets => "octets",
            DataType::Enumerated => "enumerated",
        }
    }

    /// Fixed payload length in bytes, if the type has one
    pub fn fixed_length(self) -> Option<usize> {
        match self {
            DataType::Integer32 | DataType::Unsigned32 | DataType::Enumerated => Some(4),
            DataType::Ipv4Address => Some(4),
            DataType::Ipv6Address => Some(16),
            DataType::Utf8String | DataType::Octets => None,
        }
    }
}

/// Application value supplied for encoding
///
/// Borrowed where the payload is variable-length; the encoders allocate their
/// own output, so a `Value` never outlives the call it is passed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value<'a> {
    /// No value supplied
    Null,
    /// Signed 32-bit integer
    Integer(i32),
    /// Unsigned 32-bit integer (also carries enumerated values)
    Unsigned(u32),
    /// UTF-8 string
    Text(&'a str),
    /// IPv4 or IPv6 address; the attribute's data type decides which family
    /// is legal
    Ip(IpAddr),
    /// Raw bytes
    Octets(&'a [u8]),
}

impl Value<'_> {
    /// Short kind name used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Integer(_) => "integer",
            Value::Unsigned(_) => "unsigned",
            Value::Text(_) => "string",
            Value::Ip(_) => "ip-address",
            Value::Octets(_) => "octets",
        }
    }
}

impl From<i32> for Value<'_> {
    fn from(value: i32) -> Self {
        Value::Integer(value)
    }
}

impl From<u32> for Value<'_> {
    fn from(value: u32) -> Self {
        Value::Unsigned(value)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(value: &'a str) -> Self {
        Value::Text(value)
    }
}

impl From<IpAddr> for Value<'_> {
    fn from(value: IpAddr) -> Self {
        Value::Ip(value)
    }
}

impl<'a> From<&'a [u8]> for Value<'a> {
    fn from(value: &'a [u8]) -> Self {
        Value::Octets(value)
    }
}

impl<'a, T> From<Option<T>> for Value<'a>
where
    T: Into<Value<'a>>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

/// Schema entry for one vendor attribute
///
/// Descriptors are reference data: created when the registry is built, never
/// mutated, shared read-only for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeDescriptor {
    /// IANA Private Enterprise Number of the owning vendor
    pub vendor_id: u32,
    /// Attribute code within the vendor's code space
    pub code: u8,
    /// Attribute name, e.g. `Acme-SIP-Status`
    pub name: String,
    /// Payload data type
    pub data_type: DataType,
    /// Legal values for [`DataType::Enumerated`] attributes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<Vec<u32>>,
}

impl AttributeDescriptor {
    pub fn new(vendor_id: u32, code: u8, name: impl Into<String>, data_type: DataType) -> Self {
        AttributeDescriptor {
            vendor_id,
            code,
            name: name.into(),
            data_type,
            allowed_values: None,
        }
    }

    /// Create a descriptor for an enumerated attribute with its legal set
    pub fn enumerated(vendor_id: u32, code: u8, name: impl Into<String>, values: &[u32]) -> Self {
        AttributeDescriptor {
            vendor_id,
            code,
            name: name.into(),
            data_type: DataType::Enumerated,
            allowed_values: Some(values.to_vec()),
        }
    }

    /// Whether `value` is in this attribute's legal set
    ///
    /// Non-enumerated attributes accept any integer.
    pub fn is_legal_value(&self, value: u32) -> bool {
        match &self.allowed_values {
            Some(values) => values.contains(&value),
            None => true,
        }
    }

    /// Validate and encode a value into a complete vendor-specific attribute
    ///
    /// This is the generic path that replaces one hand-written factory
    /// function per attribute: the descriptor's data type selects the codec,
    /// and every guard runs before any byte is produced.
    pub fn encode(&self, value: Value<'_>) -> Result<Vsa, EncodeError> {
        validate_value(self, value)?;

        let payload = match (self.data_type, value) {
            (DataType::Integer32, Value::Integer(v)) => codec::encode_integer32(v).to_vec(),
            (DataType::Unsigned32, Value::Unsigned(v))
            | (DataType::Enumerated, Value::Unsigned(v)) => codec::encode_unsigned32(v).to_vec(),
            (DataType::Utf8String, Value::Text(s)) => codec::encode_string(Some(s))?,
            (DataType::Ipv4Address, Value::Ip(addr)) => codec::encode_ipv4(addr)?.to_vec(),
            (DataType::Ipv6Address, Value::Ip(addr)) => codec::encode_ipv6(addr)?.to_vec(),
            (DataType::Octets, Value::Octets(bytes)) => codec::encode_octets(Some(bytes))?,
            (expected, got) => {
                return Err(EncodeError::TypeMismatch {
                    attribute: self.name.clone(),
                    expected: expected.name(),
                    got: got.kind(),
                })
            }
        };

        let attribute = VendorAttribute::new(self.code, payload)?;
        Vsa::new(self.vendor_id, attribute)
    }
}
