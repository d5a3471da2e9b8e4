//! Acme (PEN 9148) vendor attributes
//!
//! SIP session accounting attributes emitted by Acme session border
//! controllers: call identifiers, realms, media flow addresses, and the
//! session disposition/disconnect taxonomy.

use crate::registry::{DataType, DictionaryError, Value, VendorDictionary};

/// Acme's IANA Private Enterprise Number
pub const VENDOR_ID: u32 = 9148;

/// Acme vendor attribute codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum AcmeAttribute {
    /// Acme-Session-Ingress-CallId (3)
    SessionIngressCallId = 3,
    /// Acme-Session-Egress-CallId (4)
    SessionEgressCallId = 4,
    /// Acme-Flow-In-Src-Addr (10)
    FlowInSrcAddr = 10,
    /// Acme-Flow-In-Dst-Addr (11)
    FlowInDstAddr = 11,
    /// Acme-Ingress-Realm (20)
    IngressRealm = 20,
    /// Acme-Egress-Realm (21)
    EgressRealm = 21,
    /// Acme-Session-Protocol-Type (43)
    SessionProtocolType = 43,
    /// Acme-SIP-Status (50) - final SIP response code for the session
    SipStatus = 50,
    /// Acme-CDR-Sequence-Number (54)
    CdrSequenceNumber = 54,
    /// Acme-Session-Disposition (60)
    SessionDisposition = 60,
    /// Acme-Disconnect-Initiator (61)
    DisconnectInitiator = 61,
    /// Acme-Disconnect-Cause (62)
    DisconnectCause = 62,
}

impl AcmeAttribute {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            3 => Some(AcmeAttribute::SessionIngressCallId),
            4 => Some(AcmeAttribute::SessionEgressCallId),
            10 => Some(AcmeAttribute::FlowInSrcAddr),
            11 => Some(AcmeAttribute::FlowInDstAddr),
            20 => Some(AcmeAttribute::IngressRealm),
            21 => Some(AcmeAttribute::EgressRealm),
            43 => Some(AcmeAttribute::SessionProtocolType),
            50 => Some(AcmeAttribute::SipStatus),
            54 => Some(AcmeAttribute::CdrSequenceNumber),
            60 => Some(AcmeAttribute::SessionDisposition),
            61 => Some(AcmeAttribute::DisconnectInitiator),
            62 => Some(AcmeAttribute::DisconnectCause),
            _ => None,
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Acme-Session-Disposition values
///
/// Final state the session reached before the record was cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum SessionDisposition {
    /// Answered (1) - session reached a connected state
    Answered = 1,
    /// Abandoned (2) - caller gave up before connect
    Abandoned = 2,
    /// Failed (3) - session failed before connect
    Failed = 3,
}

impl SessionDisposition {
    /// Convert from u32 value
    pub fn from_u32(value: u32) -> Option<Self> {
        match value {
            1 => Some(SessionDisposition::Answered),
            2 => Some(SessionDisposition::Abandoned),
            3 => Some(SessionDisposition::Failed),
            _ => None,
        }
    }

    /// Convert to u32 value
    pub fn as_u32(self) -> u32 {
        self as u32
    }
}

impl From<SessionDisposition> for Value<'_> {
    fn from(value: SessionDisposition) -> Self {
        Value::Unsigned(value.as_u32())
    }
}

/// Acme-Disconnect-Initiator values
///
/// Which party ended the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum DisconnectInitiator {
    /// Calling-Party (1)
    CallingParty = 1,
    /// Called-Party (2)
    CalledParty = 2,
    /// Internal (3) - the border controller itself ended the session
    Internal = 3,
}

impl DisconnectInitiator {
    /// Convert from u32 value
    pub fn from_u32(value: u32) -> Option<Self> {
        match value {
            1 => Some(DisconnectInitiator::CallingParty),
            2 => Some(DisconnectInitiator::CalledParty),
            3 => Some(DisconnectInitiator::Internal),
            _ => None,
        }
    }

    /// Convert to u32 value
    pub fn as_u32(self) -> u32 {
        self as u32
    }
}

impl From<DisconnectInitiator> for Value<'_> {
    fn from(value: DisconnectInitiator) -> Self {
        Value::Unsigned(value.as_u32())
    }
}

/// Build the Acme vendor dictionary
pub fn dictionary() -> Result<VendorDictionary, DictionaryError> {
    let mut dict = VendorDictionary::new(VENDOR_ID, "Acme")?;
    dict.attribute(
        AcmeAttribute::SessionIngressCallId.as_u8(),
        "Acme-Session-Ingress-CallId",
        DataType::Utf8String,
    )?;
    dict.attribute(
        AcmeAttribute::SessionEgressCallId.as_u8(),
        "Acme-Session-Egress-CallId",
        DataType::Utf8String,
    )?;
    dict.attribute(
        AcmeAttribute::FlowInSrcAddr.as_u8(),
        "Acme-Flow-In-Src-Addr",
        DataType::Ipv4Address,
    )?;
    dict.attribute(
        AcmeAttribute::FlowInDstAddr.as_u8(),
        "Acme-Flow-In-Dst-Addr",
        DataType::Ipv4Address,
    )?;
    dict.attribute(
        AcmeAttribute::IngressRealm.as_u8(),
        "Acme-Ingress-Realm",
        DataType::Utf8String,
    )?;
    dict.attribute(
        AcmeAttribute::EgressRealm.as_u8(),
        "Acme-Egress-Realm",
        DataType::Utf8String,
    )?;
    dict.attribute(
        AcmeAttribute::SessionProtocolType.as_u8(),
        "Acme-Session-Protocol-Type",
        DataType::Utf8String,
    )?;
    dict.attribute(
        AcmeAttribute::SipStatus.as_u8(),
        "Acme-SIP-Status",
        DataType::Integer32,
    )?;
    dict.attribute(
        AcmeAttribute::CdrSequenceNumber.as_u8(),
        "Acme-CDR-Sequence-Number",
        DataType::Unsigned32,
    )?;
    dict.enumerated(
        AcmeAttribute::SessionDisposition.as_u8(),
        "Acme-Session-Disposition",
        &[
            SessionDisposition::Answered.as_u32(),
            SessionDisposition::Abandoned.as_u32(),
            SessionDisposition::Failed.as_u32(),
        ],
    )?;
    dict.enumerated(
        AcmeAttribute::DisconnectInitiator.as_u8(),
        "Acme-Disconnect-Initiator",
        &[
            DisconnectInitiator::CallingParty.as_u32(),
            DisconnectInitiator::CalledParty.as_u32(),
            DisconnectInitiator::Internal.as_u32(),
        ],
    )?;
    dict.attribute(
        AcmeAttribute::DisconnectCause.as_u8(),
        "Acme-Disconnect-Cause",
        DataType::Integer32,
    )?;
    Ok(dict)
}
