//! Built-in vendor dictionaries
//!
//! Each submodule carries one vendor's attribute table as data, plus typed
//! enums for the attributes whose legal values form a closed set. Additional
//! vendors can be loaded at runtime from JSON dictionary files and registered
//! alongside these.

pub mod acme;
pub mod alcatel;
pub mod cisco;

use crate::registry::VendorRegistry;

/// Registry holding every built-in vendor dictionary
pub fn builtin() -> VendorRegistry {
    let mut registry = VendorRegistry::new();
    for dictionary in [
        acme::dictionary(),
        alcatel::dictionary(),
        cisco::dictionary(),
    ] {
        let dictionary = dictionary.expect("built-in dictionary is well-formed");
        registry
            .register(dictionary)
            .expect("built-in vendor ids are distinct");
    }
    registry
}
