//! Device snapshot structures

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::entity::PlatformEntity;
use crate::error::Result;
use crate::quirk::Quirk;

/// Point-in-time copy of everything the hub reports about one ZHA device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceSnapshot {
    /// Hub device registry ID
    pub device_id: String,

    /// Manufacturer string reported by the device
    #[serde(default)]
    pub manufacturer: Option<String>,

    /// Model string reported by the device
    #[serde(default)]
    pub model: Option<String>,

    /// Base diagnostic info, passed through to the export as-is
    #[serde(default)]
    pub device_info: Map<String, Value>,

    /// Endpoint/cluster attribute data
    #[serde(default)]
    pub cluster_details: Value,

    /// Quirk customization applied to the device
    #[serde(default)]
    pub quirk: Quirk,

    /// Platform entities in hub order
    #[serde(default)]
    pub platform_entities: Vec<PlatformEntity>,
}

impl DeviceSnapshot {
    pub fn new(
        device_id: impl Into<String>,
        manufacturer: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            device_id: device_id.into(),
            manufacturer: Some(manufacturer.into()),
            model: Some(model.into()),
            device_info: Map::new(),
            cluster_details: Value::Null,
            quirk: Quirk::Unquirked,
            platform_entities: Vec::new(),
        }
    }

    pub fn with_device_info(mut self, device_info: Map<String, Value>) -> Self {
        self.device_info = device_info;
        self
    }

    pub fn with_cluster_details(mut self, cluster_details: Value) -> Self {
        self.cluster_details = cluster_details;
        self
    }

    pub fn with_quirk(mut self, quirk: Quirk) -> Self {
        self.quirk = quirk;
        self
    }

    pub fn with_platform_entity(mut self, entity: PlatformEntity) -> Self {
        self.platform_entities.push(entity);
        self
    }

    /// Parse a JSON array of snapshots
    pub fn list_from_json(data: &[u8]) -> Result<Vec<Self>> {
        Ok(serde_json::from_slice(data)?)
    }
}

impl fmt::Display for DeviceSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Device[{}: {} {}]",
            self.device_id,
            self.manufacturer.as_deref().unwrap_or("None"),
            self.model.as_deref().unwrap_or("None")
        )
    }
}
