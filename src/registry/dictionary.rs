//! Dictionary file loading
//!
//! Vendor dictionaries are configuration, not code. Beyond the built-in
//! tables, a dictionary can be loaded from a JSON file:
//!
//! ```json
//! {
//!   "vendor_id": 9148,
//!   "name": "Acme",
//!   "attributes": [
//!     { "code": 50, "name": "Acme-SIP-Status", "type": "integer32" },
//!     { "code": 61, "name": "Acme-Disconnect-Initiator", "type": "enumerated",
//!       "values": [1, 2, 3] }
//!   ]
//! }
//! ```

use super::{AttributeDescriptor, DataType, VendorDictionary};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Dictionary definition or loading error
#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid dictionary: {0}")]
    Invalid(String),
}

/// On-disk dictionary model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryFile {
    pub vendor_id: u32,
    pub name: String,
    pub attributes: Vec<AttributeEntry>,
}

/// One attribute definition inside a dictionary file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeEntry {
    pub code: u8,
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: DataType,
    /// Legal values, required for `enumerated` attributes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<u32>>,
}

impl VendorDictionary {
    /// Load a vendor dictionary from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Parse a vendor dictionary from a JSON string
    pub fn from_json_str(contents: &str) -> Result<Self, DictionaryError> {
        let file: DictionaryFile = serde_json::from_str(contents)?;
        Self::try_from(file)
    }
}

impl TryFrom<DictionaryFile> for VendorDictionary {
    type Error = DictionaryError;

    fn try_from(file: DictionaryFile) -> Result<Self, DictionaryError> {
        let mut dictionary = VendorDictionary::new(file.vendor_id, file.name)?;

        for entry in file.attributes {
            if entry.data_type != DataType::Enumerated && entry.values.is_some() {
                return Err(DictionaryError::Invalid(format!(
                    "{}: value set is only valid for enumerated attributes",
                    entry.name
                )));
            }

            let mut descriptor =
                AttributeDescriptor::new(file.vendor_id, entry.code, entry.name, entry.data_type);
            descriptor.allowed_values = entry.values;
            dictionary.insert(descriptor)?;
        }

        tracing::info!(
            vendor_id = dictionary.vendor_id(),
            vendor = dictionary.name(),
            attributes = dictionary.len(),
            "loaded vendor dictionary"
        );
        Ok(dictionary)
    }
}
