//! Hex rendering of quirk signatures
//!
//! Cluster details already show IDs as `0x` strings, so the original
//! signature is rendered the same way: lowercase, zero-padded to 4 digits.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use zhaexport_types::{EndpointDescriptor, QuirkSignature};

/// Format a 16-bit ID as `0x%04x`
///
/// # Examples
///
/// ```
/// use zhaexport_core::hex;
///
/// assert_eq!(hex::format_id(0x0104), "0x0104");
/// assert_eq!(hex::format_id(0xFC7E), "0xfc7e");
/// ```
pub fn format_id(id: u16) -> String {
    format!("0x{:04x}", id)
}

/// Format a list of 16-bit IDs, keeping order
pub fn format_ids(ids: &[u16]) -> Vec<String> {
    ids.iter().copied().map(format_id).collect()
}

/// Endpoint descriptor with every ID rendered as hex
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HexEndpoint {
    pub profile_id: String,
    pub device_type: String,
    pub input_clusters: Vec<String>,
    pub output_clusters: Vec<String>,

    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl From<&EndpointDescriptor> for HexEndpoint {
    fn from(endpoint: &EndpointDescriptor) -> Self {
        Self {
            profile_id: format_id(endpoint.profile_id),
            device_type: format_id(endpoint.device_type),
            input_clusters: format_ids(&endpoint.input_clusters),
            output_clusters: format_ids(&endpoint.output_clusters),
            other: endpoint.other.clone(),
        }
    }
}

/// Quirk signature with hex-rendered endpoints
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HexSignature {
    pub endpoints: BTreeMap<u8, HexEndpoint>,

    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl From<&QuirkSignature> for HexSignature {
    fn from(signature: &QuirkSignature) -> Self {
        Self {
            endpoints: signature
                .endpoints
                .iter()
                .map(|(id, endpoint)| (*id, HexEndpoint::from(endpoint)))
                .collect(),
            other: signature.other.clone(),
        }
    }
}
