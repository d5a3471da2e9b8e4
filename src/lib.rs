//! RADIUS Vendor-Specific Attribute encoding
//!
//! This crate implements the Vendor-Specific Attribute (Type 26) encoding
//! engine defined in RFC 2865 Section 5.26: typed value codecs, the nested
//! TLV layout that wraps a vendor sub-attribute inside the standard
//! Vendor-Specific container, and the validation that guards both.
//!
//! Vendor attribute catalogs are data, not code: a [`VendorRegistry`] maps
//! (vendor id, attribute code) to an [`AttributeDescriptor`] whose data type
//! selects the codec, so one generic dispatch path serves every vendor.
//! Dictionaries ship built in ([`vendors`]) or are loaded from JSON files at
//! startup.
//!
//! Packet assembly (headers, authenticators, retransmission, UDP transport)
//! and decoding of attributes received from a server belong to collaborator
//! components outside this crate. The boundary object is [`Vsa`]: callers
//! encode it to wire bytes and hand those to the packet layer.
//!
//! Every operation is a pure transform over immutable inputs; the registry is
//! built once and only read afterwards, so the whole crate is safe for
//! unsynchronized concurrent use.
//!
//! # Example
//!
//! ```rust
//! use radius_vsa::{vendors, Value};
//!
//! let registry = vendors::builtin();
//!
//! // Acme-SIP-Status (vendor 9148, code 50) = 200
//! let vsa = registry.encode(9148, 50, Value::Integer(200)).unwrap();
//! let bytes = vsa.encode().unwrap();
//! assert_eq!(
//!     bytes,
//!     [0x1A, 0x0C, 0x00, 0x00, 0x23, 0xBC, 0x32, 0x06, 0x00, 0x00, 0x00, 0xC8]
//! );
//! ```

pub mod codec;
pub mod registry;
pub mod validation;
pub mod vendors;
pub mod vsa;

pub use registry::{
    AttributeDescriptor, DataType, DictionaryError, Value, VendorDictionary, VendorRegistry,
};
pub use validation::validate_value;
pub use vsa::{EncodeError, VendorAttribute, Vsa};
