//! Host boundary for the ZHA device exporter
//!
//! The exporter never reaches into hub globals. Everything it reads or
//! registers goes through the traits defined here.

pub mod error;
pub mod memory;
pub mod service;
pub mod snapshot;

pub use error::{Error, Result};
pub use memory::MemoryRegistry;
pub use service::{MemoryServiceRegistry, ServiceCall, ServiceHandler, ServiceId, ServiceRegistry};
pub use snapshot::SnapshotFileRegistry;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};
use zhaexport_types::{PlatformEntity, Quirk};

/// Read-only view of one ZHA device
pub trait ZhaDevice: Send + Sync {
    /// Hub device registry ID
    fn device_id(&self) -> &str;

    fn manufacturer(&self) -> Option<&str>;

    fn model(&self) -> Option<&str>;

    /// Base diagnostic info (fresh copy per call)
    fn device_info(&self) -> Map<String, Value>;

    /// Endpoint/cluster attribute diagnostics
    fn cluster_details(&self) -> Value;

    /// Quirk customization applied to the device
    fn quirk(&self) -> Quirk;

    /// (platform, unique ID) entities in hub order
    fn platform_entities(&self) -> Vec<PlatformEntity>;
}

/// Source of the devices currently known to the hub
#[async_trait]
pub trait DeviceRegistry: Send + Sync {
    /// Enumerate current devices
    async fn devices(&self) -> Result<Vec<Arc<dyn ZhaDevice>>>;
}
