//! Value validation against attribute descriptors
//!
//! Every guard runs before any byte is produced, so an illegal value is
//! rejected at the call site rather than silently encoded into a wire-invalid
//! attribute.

use crate::registry::{AttributeDescriptor, DataType, Value};
use crate::vsa::{EncodeError, VendorAttribute};
use std::net::IpAddr;

/// Check a value against a descriptor
///
/// Rejects absent values, kind/data-type mismatches, wrong-family addresses,
/// integers outside an enumerated attribute's legal set, and variable-length
/// payloads over the sub-attribute ceiling.
pub fn validate_value(
    descriptor: &AttributeDescriptor,
    value: Value<'_>,
) -> Result<(), EncodeError> {
    match (descriptor.data_type, value) {
        (_, Value::Null) => Err(EncodeError::NullValue),
        (DataType::Integer32, Value::Integer(_)) => Ok(()),
        (DataType::Unsigned32, Value::Unsigned(_)) => Ok(()),
        (DataType::Utf8String, Value::Text(s)) => validate_length(s.len()),
        (DataType::Octets, Value::Octets(bytes)) => validate_length(bytes.len()),
        (DataType::Ipv4Address, Value::Ip(IpAddr::V4(_))) => Ok(()),
        (DataType::Ipv4Address, Value::Ip(IpAddr::V6(_))) => {
            Err(EncodeError::WrongAddressFamily {
                expected: "IPv4",
                got: "IPv6",
            })
        }
        (DataType::Ipv6Address, Value::Ip(IpAddr::V6(_))) => Ok(()),
        (DataType::Ipv6Address, Value::Ip(IpAddr::V4(_))) => {
            Err(EncodeError::WrongAddressFamily {
                expected: "IPv6",
                got: "IPv4",
            })
        }
        (DataType::Enumerated, Value::Unsigned(v)) => {
            if descriptor.is_legal_value(v) {
                Ok(())
            } else {
                Err(EncodeError::InvalidEnumValue {
                    attribute: descriptor.name.clone(),
                    value: v,
                })
            }
        }
        (expected, got) => Err(EncodeError::TypeMismatch {
            attribute: descriptor.name.clone(),
            expected: expected.name(),
            got: got.kind(),
        }),
    }
}

fn validate_length(len: usize) -> Result<(), EncodeError> {
    if len > VendorAttribute::MAX_VALUE_LENGTH {
        return Err(EncodeError::PayloadTooLarge {
            len,
            max: VendorAttribute::MAX_VALUE_LENGTH,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    fn string_descriptor() -> AttributeDescriptor {
        AttributeDescriptor::new(9148, 3, "Acme-Session-Ingress-CallId", DataType::Utf8String)
    }

    #[test]
    fn test_null_rejected_for_every_data_type() {
        for data_type in [
            DataType::Integer32,
            DataType::Unsigned32,
            DataType::Utf8String,
            DataType::Ipv4Address,
            DataType::Ipv6Address,
            DataType::Octets,
            DataType::Enumerated,
        ] {
            let descriptor = AttributeDescriptor::new(9148, 3, "attr", data_type);
            assert_eq!(
                validate_value(&descriptor, Value::Null).unwrap_err(),
                EncodeError::NullValue
            );
        }
    }

    #[test]
    fn test_string_value_accepted() {
        let descriptor = string_descriptor();
        assert!(validate_value(&descriptor, Value::Text("call-1234")).is_ok());
    }

    #[test]
    fn test_string_over_ceiling_rejected() {
        let descriptor = string_descriptor();
        let long = "x".repeat(254);
        assert_eq!(
            validate_value(&descriptor, Value::Text(&long)).unwrap_err(),
            EncodeError::PayloadTooLarge { len: 254, max: 253 }
        );
    }

    #[test]
    fn test_wrong_family_rejected_both_ways() {
        let v4_descriptor =
            AttributeDescriptor::new(3041, 9, "Alcatel-Primary-DNS", DataType::Ipv4Address);
        let v6_descriptor =
            AttributeDescriptor::new(3041, 11, "Alcatel-IPv6-Primary-DNS", DataType::Ipv6Address);

        let v4 = Value::Ip(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)));
        let v6 = Value::Ip(IpAddr::V6(Ipv6Addr::LOCALHOST));

        assert!(validate_value(&v4_descriptor, v4).is_ok());
        assert!(validate_value(&v6_descriptor, v6).is_ok());
        assert_eq!(
            validate_value(&v4_descriptor, v6).unwrap_err(),
            EncodeError::WrongAddressFamily {
                expected: "IPv4",
                got: "IPv6",
            }
        );
        assert_eq!(
            validate_value(&v6_descriptor, v4).unwrap_err(),
            EncodeError::WrongAddressFamily {
                expected: "IPv6",
                got: "IPv4",
            }
        );
    }

    #[test]
    fn test_enumerated_membership() {
        let descriptor =
            AttributeDescriptor::enumerated(9148, 60, "Acme-Session-Disposition", &[1, 2, 3]);
        assert!(validate_value(&descriptor, Value::Unsigned(1)).is_ok());
        assert_eq!(
            validate_value(&descriptor, Value::Unsigned(4)).unwrap_err(),
            EncodeError::InvalidEnumValue {
                attribute: "Acme-Session-Disposition".to_string(),
                value: 4,
            }
        );
    }

    #[test]
    fn test_kind_mismatch_rejected() {
        let descriptor = string_descriptor();
        assert_eq!(
            validate_value(&descriptor, Value::Integer(1)).unwrap_err(),
            EncodeError::TypeMismatch {
                attribute: "Acme-Session-Ingress-CallId".to_string(),
                expected: "string",
                got: "integer",
            }
        );
    }
}
