//! Quirk customization descriptors
//!
//! A quirked device carries a description of its endpoint layout as it looked
//! before the quirk was applied. Legacy quirks call it a `signature`, v2 quirks
//! call it a `replacement`; both have the same shape.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Endpoint layout entry of a quirk signature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointDescriptor {
    pub profile_id: u16,
    pub device_type: u16,
    #[serde(default)]
    pub input_clusters: Vec<u16>,
    #[serde(default)]
    pub output_clusters: Vec<u16>,

    /// Remaining endpoint fields, passed through as-is
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// Original (pre-quirk) device signature
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuirkSignature {
    /// Endpoints keyed by endpoint ID
    #[serde(default)]
    pub endpoints: BTreeMap<u8, EndpointDescriptor>,

    /// Remaining signature fields (models info, manufacturer, ...)
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl QuirkSignature {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endpoint(mut self, id: u8, endpoint: EndpointDescriptor) -> Self {
        self.endpoints.insert(id, endpoint);
        self
    }

    /// Check if the signature carries no data at all
    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty() && self.other.is_empty()
    }
}

/// Quirk customization applied to a device
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quirk {
    /// No quirk, the device runs on its stock signature
    #[default]
    Unquirked,

    /// v2 quirk exposing a `replacement` descriptor
    Replacement(QuirkSignature),

    /// Legacy quirk exposing a `signature` descriptor
    Legacy(QuirkSignature),
}

impl Quirk {
    /// Check if the device is quirk-customized
    pub fn is_quirked(&self) -> bool {
        !matches!(self, Self::Unquirked)
    }

    /// Signature of the device before customization, if any
    pub fn original_signature(&self) -> Option<&QuirkSignature> {
        match self {
            Self::Unquirked => None,
            Self::Replacement(signature) | Self::Legacy(signature) => Some(signature),
        }
    }
}
