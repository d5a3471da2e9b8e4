//! Vendor attribute dictionaries and the registry
//!
//! A [`VendorDictionary`] maps one vendor's attribute codes to their
//! [`AttributeDescriptor`]s; a [`VendorRegistry`] maps vendor ids to
//! dictionaries. Both are built once at startup and only read afterwards,
//! so they can be shared across threads without locking.
//!
//! The registry's [`encode`](VendorRegistry::encode) is the generic dispatch
//! path: look up the descriptor, validate the value against it, run the
//! matching codec, and return the assembled vendor-specific attribute.

mod descriptor;
mod dictionary;

pub use descriptor::{AttributeDescriptor, DataType, Value};
pub use dictionary::{AttributeEntry, DictionaryError, DictionaryFile};

use crate::vsa::{EncodeError, Vsa};
use std::collections::HashMap;

/// One vendor's attribute code space
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorDictionary {
    vendor_id: u32,
    name: String,
    attributes: HashMap<u8, AttributeDescriptor>,
}

impl VendorDictionary {
    pub fn new(vendor_id: u32, name: impl Into<String>) -> Result<Self, DictionaryError> {
        if vendor_id == 0 {
            return Err(DictionaryError::Invalid(
                "vendor id must be a nonzero Private Enterprise Number".to_string(),
            ));
        }
        Ok(VendorDictionary {
            vendor_id,
            name: name.into(),
            attributes: HashMap::new(),
        })
    }

    /// IANA Private Enterprise Number
    pub fn vendor_id(&self) -> u32 {
        self.vendor_id
    }

    /// Vendor name, e.g. `Acme`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Define an attribute in this vendor's code space
    pub fn attribute(
        &mut self,
        code: u8,
        name: &str,
        data_type: DataType,
    ) -> Result<(), DictionaryError> {
        self.insert(AttributeDescriptor::new(self.vendor_id, code, name, data_type))
    }

    /// Define an enumerated attribute with its legal value set
    pub fn enumerated(
        &mut self,
        code: u8,
        name: &str,
        values: &[u32],
    ) -> Result<(), DictionaryError> {
        self.insert(AttributeDescriptor::enumerated(
            self.vendor_id,
            code,
            name,
            values,
        ))
    }

    fn insert(&mut self, descriptor: AttributeDescriptor) -> Result<(), DictionaryError> {
        if descriptor.code == 0 {
            return Err(DictionaryError::Invalid(format!(
                "{}: attribute code 0 is reserved",
                descriptor.name
            )));
        }
        if descriptor.data_type == DataType::Enumerated
            && descriptor
                .allowed_values
                .as_ref()
                .is_none_or(|values| values.is_empty())
        {
            return Err(DictionaryError::Invalid(format!(
                "{}: enumerated attribute needs a non-empty value set",
                descriptor.name
            )));
        }
        if self.attributes.contains_key(&descriptor.code) {
            return Err(DictionaryError::Invalid(format!(
                "duplicate attribute code {} for vendor {}",
                descriptor.code, self.vendor_id
            )));
        }
        self.attributes.insert(descriptor.code, descriptor);
        Ok(())
    }

    /// Look up a descriptor by attribute code
    pub fn get(&self, code: u8) -> Option<&AttributeDescriptor> {
        self.attributes.get(&code)
    }

    /// Look up a descriptor by attribute name
    pub fn get_by_name(&self, name: &str) -> Option<&AttributeDescriptor> {
        self.attributes.values().find(|d| d.name == name)
    }

    /// Number of attributes defined for this vendor
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Iterate over all descriptors in this code space
    pub fn descriptors(&self) -> impl Iterator<Item = &AttributeDescriptor> {
        self.attributes.values()
    }
}

/// Registry of vendor dictionaries keyed by Private Enterprise Number
///
/// Built once, then read-only reference data for the process lifetime.
#[derive(Debug, Clone, Default)]
pub struct VendorRegistry {
    vendors: HashMap<u32, VendorDictionary>,
}

impl VendorRegistry {
    pub fn new() -> Self {
        VendorRegistry::default()
    }

    /// Register a vendor dictionary
    pub fn register(&mut self, dictionary: VendorDictionary) -> Result<(), DictionaryError> {
        if self.vendors.contains_key(&dictionary.vendor_id) {
            return Err(DictionaryError::Invalid(format!(
                "vendor {} is already registered",
                dictionary.vendor_id
            )));
        }
        self.vendors.insert(dictionary.vendor_id, dictionary);
        Ok(())
    }

    /// Look up a vendor's dictionary
    pub fn vendor(&self, vendor_id: u32) -> Option<&VendorDictionary> {
        self.vendors.get(&vendor_id)
    }

    /// Look up one attribute descriptor
    pub fn lookup(&self, vendor_id: u32, code: u8) -> Result<&AttributeDescriptor, EncodeError> {
        let dictionary = self
            .vendors
            .get(&vendor_id)
            .ok_or(EncodeError::UnknownVendor(vendor_id))?;
        dictionary
            .get(code)
            .ok_or(EncodeError::UnknownAttribute { vendor_id, code })
    }

    /// Encode a value for the given vendor and attribute code
    pub fn encode(
        &self,
        vendor_id: u32,
        code: u8,
        value: Value<'_>,
    ) -> Result<Vsa, EncodeError> {
        self.lookup(vendor_id, code)?.encode(value)
    }

    /// Number of registered vendors
    pub fn len(&self) -> usize {
        self.vendors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vendors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_registry() -> VendorRegistry {
        let mut dictionary = VendorDictionary::new(9148, "Acme").unwrap();
        dictionary
            .attribute(50, "Acme-SIP-Status", DataType::Integer32)
            .unwrap();
        dictionary
            .attribute(3, "Acme-Session-Ingress-CallId", DataType::Utf8String)
            .unwrap();

        let mut registry = VendorRegistry::new();
        registry.register(dictionary).unwrap();
        registry
    }

    #[test]
    fn test_dictionary_rejects_vendor_id_zero() {
        assert!(VendorDictionary::new(0, "nobody").is_err());
    }

    #[test]
    fn test_dictionary_rejects_code_zero() {
        let mut dictionary = VendorDictionary::new(9148, "Acme").unwrap();
        assert!(dictionary
            .attribute(0, "Acme-Reserved", DataType::Integer32)
            .is_err());
    }

    #[test]
    fn test_dictionary_rejects_duplicate_code() {
        let mut dictionary = VendorDictionary::new(9148, "Acme").unwrap();
        dictionary
            .attribute(50, "Acme-SIP-Status", DataType::Integer32)
            .unwrap();
        assert!(dictionary
            .attribute(50, "Acme-Other", DataType::Utf8String)
            .is_err());
    }

    #[test]
    fn test_dictionary_rejects_empty_enum_set() {
        let mut dictionary = VendorDictionary::new(9148, "Acme").unwrap();
        assert!(dictionary
            .enumerated(61, "Acme-Disconnect-Initiator", &[])
            .is_err());
    }

    #[test]
    fn test_lookup_by_name() {
        let registry = test_registry();
        let dictionary = registry.vendor(9148).unwrap();
        let descriptor = dictionary.get_by_name("Acme-SIP-Status").unwrap();
        assert_eq!(descriptor.code, 50);
        assert!(dictionary.get_by_name("Acme-Missing").is_none());
    }

    #[test]
    fn test_registry_rejects_duplicate_vendor() {
        let mut registry = test_registry();
        let dictionary = VendorDictionary::new(9148, "Acme").unwrap();
        assert!(registry.register(dictionary).is_err());
    }

    #[test]
    fn test_encode_through_registry() {
        let registry = test_registry();
        let vsa = registry.encode(9148, 50, Value::Integer(200)).unwrap();
        assert_eq!(vsa.payload(), &[0x00, 0x00, 0x00, 0xC8]);
    }

    #[test]
    fn test_unknown_vendor() {
        let registry = test_registry();
        let result = registry.encode(99999, 50, Value::Integer(200));
        assert_eq!(result.unwrap_err(), EncodeError::UnknownVendor(99999));
    }

    #[test]
    fn test_unknown_attribute() {
        let registry = test_registry();
        let result = registry.encode(9148, 200, Value::Integer(200));
        assert_eq!(
            result.unwrap_err(),
            EncodeError::UnknownAttribute {
                vendor_id: 9148,
                code: 200,
            }
        );
    }
}
