//! End-to-end tests: registry lookup through codec dispatch to wire bytes.

use radius_vsa::vendors::{self, acme, alcatel};
use radius_vsa::{DataType, EncodeError, Value, VendorDictionary, Vsa};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

#[test]
fn sip_status_integer_to_wire() {
    let registry = vendors::builtin();
    let vsa = registry
        .encode(acme::VENDOR_ID, 50, Value::Integer(200))
        .unwrap();
    let bytes = vsa.encode().unwrap();
    assert_eq!(
        bytes,
        [0x1A, 0x0C, 0x00, 0x00, 0x23, 0xBC, 0x32, 0x06, 0x00, 0x00, 0x00, 0xC8]
    );
}

#[test]
fn primary_dns_ipv4_to_wire() {
    let registry = vendors::builtin();
    let vsa = registry
        .encode(
            alcatel::VENDOR_ID,
            9,
            Value::Ip(IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8))),
        )
        .unwrap();
    assert_eq!(vsa.payload(), &[8, 8, 8, 8]);

    let bytes = vsa.encode().unwrap();
    assert_eq!(bytes[1], 12);
    assert_eq!(bytes[7], 6);
    assert_eq!(&bytes[8..], &[8, 8, 8, 8]);
}

#[test]
fn null_value_rejected_for_every_string_attribute() {
    let registry = vendors::builtin();
    for vendor_id in [acme::VENDOR_ID, alcatel::VENDOR_ID, vendors::cisco::VENDOR_ID] {
        let dictionary = registry.vendor(vendor_id).unwrap();
        for descriptor in dictionary
            .descriptors()
            .filter(|d| d.data_type == DataType::Utf8String)
        {
            let result = registry.encode(vendor_id, descriptor.code, Value::Null);
            assert_eq!(result.unwrap_err(), EncodeError::NullValue);
        }
    }
}

#[test]
fn ipv6_into_ipv4_attribute_rejected() {
    let registry = vendors::builtin();
    let result = registry.encode(
        alcatel::VENDOR_ID,
        9,
        Value::Ip(IpAddr::V6(Ipv6Addr::LOCALHOST)),
    );
    assert_eq!(
        result.unwrap_err(),
        EncodeError::WrongAddressFamily {
            expected: "IPv4",
            got: "IPv6",
        }
    );
}

#[test]
fn oversized_octets_rejected_before_encoding() {
    let registry = vendors::builtin();
    let blob = vec![0xAB; 300];
    let result = registry.encode(alcatel::VENDOR_ID, 20, Value::Octets(&blob));
    assert_eq!(
        result.unwrap_err(),
        EncodeError::PayloadTooLarge { len: 300, max: 253 }
    );
}

#[test]
fn identical_inputs_produce_identical_bytes() {
    let registry = vendors::builtin();
    let first = registry
        .encode(acme::VENDOR_ID, 3, Value::Text("call-8f2a@sbc1"))
        .unwrap()
        .encode()
        .unwrap();
    let second = registry
        .encode(acme::VENDOR_ID, 3, Value::Text("call-8f2a@sbc1"))
        .unwrap()
        .encode()
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn typed_enum_value_through_registry() {
    let registry = vendors::builtin();
    let vsa = registry
        .encode(
            acme::VENDOR_ID,
            61,
            acme::DisconnectInitiator::Internal.into(),
        )
        .unwrap();
    assert_eq!(vsa.payload(), &[0, 0, 0, 3]);

    let result = registry.encode(acme::VENDOR_ID, 61, Value::Unsigned(250));
    assert_eq!(
        result.unwrap_err(),
        EncodeError::InvalidEnumValue {
            attribute: "Acme-Disconnect-Initiator".to_string(),
            value: 250,
        }
    );
}

#[test]
fn loaded_dictionary_joins_builtin_registry() {
    let json = r#"{
        "vendor_id": 2636,
        "name": "Juniper",
        "attributes": [
            { "code": 1, "name": "Juniper-Local-User-Name", "type": "string" },
            { "code": 8, "name": "Juniper-Primary-DNS", "type": "ipv4-address" }
        ]
    }"#;

    let mut registry = vendors::builtin();
    registry
        .register(VendorDictionary::from_json_str(json).unwrap())
        .unwrap();

    let vsa = registry
        .encode(2636, 1, Value::Text("operator"))
        .unwrap();
    assert_eq!(vsa.vendor_id(), 2636);
    assert_eq!(vsa.payload(), b"operator");
}

#[test]
fn wire_bytes_reparse_consistently() {
    let registry = vendors::builtin();
    let vsa = registry
        .encode(acme::VENDOR_ID, 54, Value::Unsigned(7_000_000))
        .unwrap();
    let bytes = vsa.encode().unwrap();

    assert_eq!(bytes[0], Vsa::TYPE);
    assert_eq!(bytes[1] as usize, bytes.len());
    assert_eq!(
        u32::from_be_bytes([bytes[2], bytes[3], bytes[4], bytes[5]]),
        acme::VENDOR_ID
    );
    assert_eq!(bytes[6], 54);
    assert_eq!(bytes[7] as usize, bytes.len() - 6);
    assert_eq!(
        u32::from_be_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]),
        7_000_000
    );
}

#[test]
fn sub_attribute_boundary_versus_outer_ceiling() {
    // 253 bytes is a valid sub-attribute payload, but the enclosing
    // attribute's length octet caps the value at 247.
    let exact = "x".repeat(247);
    let registry = vendors::builtin();
    let vsa = registry
        .encode(acme::VENDOR_ID, 3, Value::Text(&exact))
        .unwrap();
    assert_eq!(vsa.encode().unwrap().len(), 255);

    let over = "x".repeat(248);
    let vsa = registry
        .encode(acme::VENDOR_ID, 3, Value::Text(&over))
        .unwrap();
    assert_eq!(
        vsa.encode().unwrap_err(),
        EncodeError::PayloadTooLarge { len: 248, max: 247 }
    );
}
