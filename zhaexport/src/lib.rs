//! # zhaexport
//!
//! Export ZHA Zigbee device diagnostics to JSON, one file per
//! manufacturer/model pair.
//!
//! ## Features
//!
//! - `zha_device_exporter.export_devices` service
//! - Quirk signatures rendered with hex IDs
//! - Platform entities grouped by platform
//! - Atomic, pretty-printed file writes
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use zhaexport::{
//!     export_service_id, setup, HostConfig, MemoryServiceRegistry, ServiceCall,
//!     SnapshotFileRegistry,
//! };
//!
//! #[tokio::main]
//! async fn main() -> zhaexport::Result<()> {
//!     let host = HostConfig::new("/config").with_domain("zha_device_exporter");
//!     let registry = Arc::new(SnapshotFileRegistry::new("/config/zha-devices.json"));
//!     let services = MemoryServiceRegistry::new();
//!
//!     // Creates /config/zha-device-export and registers the service
//!     if setup(&host, registry, &services).await {
//!         services.call(ServiceCall::new(export_service_id())).await?;
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod exporter;
pub mod setup;
pub mod writer;

// Re-exports
pub use config::{ExporterConfig, HostConfig};
pub use error::{Error, Result};
pub use exporter::{export_service_id, ExportSummary, Exporter};
pub use setup::{ensure_output_dir, setup, unload};

// Re-export host and record types
pub use zhaexport_core::{constants, ExportRecord, RecordBuilder};
pub use zhaexport_host::{
    DeviceRegistry, MemoryRegistry, MemoryServiceRegistry, ServiceCall, ServiceRegistry,
    SnapshotFileRegistry, ZhaDevice,
};
pub use zhaexport_types::{DeviceSnapshot, PlatformEntity, Quirk, QuirkSignature};
