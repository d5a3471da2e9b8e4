//! Value codecs for vendor attribute payloads
//!
//! Each codec maps one application value to its on-wire form per RFC 2865
//! Section 5: 4-byte big-endian integers, UTF-8 strings without a terminator,
//! network-order IPv4/IPv6 addresses, and raw octets. The codecs are pure and
//! perform no length truncation; length ceilings are enforced where the
//! attribute is assembled.

use crate::vsa::EncodeError;
use std::net::IpAddr;

/// Encode a signed 32-bit integer as 4 big-endian two's-complement bytes.
pub fn encode_integer32(value: i32) -> [u8; 4] {
    value.to_be_bytes()
}

/// Encode an unsigned 32-bit integer as 4 big-endian bytes.
pub fn encode_unsigned32(value: u32) -> [u8; 4] {
    value.to_be_bytes()
}

/// Encode a string as its UTF-8 bytes, with no terminator.
pub fn encode_string(value: Option<&str>) -> Result<Vec<u8>, EncodeError> {
    match value {
        Some(s) => Ok(s.as_bytes().to_vec()),
        None => Err(EncodeError::NullValue),
    }
}

/// Encode an IPv4 address as its 4 network-order octets.
pub fn encode_ipv4(addr: IpAddr) -> Result<[u8; 4], EncodeError> {
    match addr {
        IpAddr::V4(v4) => Ok(v4.octets()),
        IpAddr::V6(_) => Err(EncodeError::WrongAddressFamily {
            expected: "IPv4",
            got: "IPv6",
        }),
    }
}

/// Encode an IPv6 address as its 16 network-order octets.
pub fn encode_ipv6(addr: IpAddr) -> Result<[u8; 16], EncodeError> {
    match addr {
        IpAddr::V6(v6) => Ok(v6.octets()),
        IpAddr::V4(_) => Err(EncodeError::WrongAddressFamily {
            expected: "IPv6",
            got: "IPv4",
        }),
    }
}

/// Pass raw octets through unchanged.
pub fn encode_octets(value: Option<&[u8]>) -> Result<Vec<u8>, EncodeError> {
    match value {
        Some(bytes) => Ok(bytes.to_vec()),
        None => Err(EncodeError::NullValue),
    }
}
