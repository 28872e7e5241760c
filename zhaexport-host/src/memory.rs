//! In-memory device registry

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::{Map, Value};
use tracing::trace;

use zhaexport_types::{DeviceSnapshot, PlatformEntity, Quirk};

use crate::{DeviceRegistry, Result, ZhaDevice};

impl ZhaDevice for DeviceSnapshot {
    fn device_id(&self) -> &str {
        &self.device_id
    }

    fn manufacturer(&self) -> Option<&str> {
        self.manufacturer.as_deref()
    }

    fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    fn device_info(&self) -> Map<String, Value> {
        self.device_info.clone()
    }

    fn cluster_details(&self) -> Value {
        self.cluster_details.clone()
    }

    fn quirk(&self) -> Quirk {
        self.quirk.clone()
    }

    fn platform_entities(&self) -> Vec<PlatformEntity> {
        self.platform_entities.clone()
    }
}

/// Device registry holding snapshots in memory
///
/// Devices are enumerated in insertion order.
#[derive(Debug, Default)]
pub struct MemoryRegistry {
    devices: RwLock<Vec<Arc<DeviceSnapshot>>>,
}

impl MemoryRegistry {
    pub fn new(devices: impl IntoIterator<Item = DeviceSnapshot>) -> Self {
        Self {
            devices: RwLock::new(devices.into_iter().map(Arc::new).collect()),
        }
    }

    /// Add a device, replacing any device with the same ID in place
    pub fn insert(&self, device: DeviceSnapshot) {
        let mut devices = self.devices.write();
        match devices.iter_mut().find(|d| d.device_id == device.device_id) {
            Some(existing) => *existing = Arc::new(device),
            None => devices.push(Arc::new(device)),
        }
    }

    /// Remove a device by ID, returning whether it was present
    pub fn remove(&self, device_id: &str) -> bool {
        let mut devices = self.devices.write();
        let before = devices.len();
        devices.retain(|d| d.device_id != device_id);
        devices.len() != before
    }

    pub fn len(&self) -> usize {
        self.devices.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.read().is_empty()
    }
}

#[async_trait]
impl DeviceRegistry for MemoryRegistry {
    async fn devices(&self) -> Result<Vec<Arc<dyn ZhaDevice>>> {
        let devices: Vec<Arc<dyn ZhaDevice>> = self
            .devices
            .read()
            .iter()
            .map(|d| Arc::clone(d) as Arc<dyn ZhaDevice>)
            .collect();

        trace!("Enumerated {} devices", devices.len());

        Ok(devices)
    }
}
