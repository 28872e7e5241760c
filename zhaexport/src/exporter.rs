//! Device export service

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info};

use zhaexport_core::constants::{DOMAIN, SERVICE_EXPORT_DEVICES};
use zhaexport_core::{manufacturer_model_slug, ProcessedSlugs, RecordBuilder};
use zhaexport_host::{DeviceRegistry, ServiceCall, ServiceHandler, ServiceId, ZhaDevice};

use crate::config::ExporterConfig;
use crate::error::Result;
use crate::writer::write_record;

/// Address of the export service
pub fn export_service_id() -> ServiceId {
    ServiceId::new(DOMAIN, SERVICE_EXPORT_DEVICES)
}

/// Outcome of one export run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    /// Files written
    pub written: usize,

    /// Devices skipped because their model was already exported
    pub duplicates: usize,

    /// Devices whose record could not be built or written
    pub failed: usize,
}

impl ExportSummary {
    /// Number of devices seen
    pub fn total(&self) -> usize {
        self.written + self.duplicates + self.failed
    }
}

/// ZHA device exporter
///
/// Writes one JSON file per manufacturer/model pair into the output
/// directory.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use zhaexport::{Exporter, ExporterConfig, HostConfig, MemoryRegistry};
///
/// #[tokio::main]
/// async fn main() {
///     let config = ExporterConfig::from_host(&HostConfig::new("/config"));
///     let exporter = Exporter::new(config, Arc::new(MemoryRegistry::default()));
///
///     let summary = exporter.export_devices().await;
///     println!("{} files written", summary.written);
/// }
/// ```
pub struct Exporter {
    config: ExporterConfig,
    registry: Arc<dyn DeviceRegistry>,
}

impl Exporter {
    pub fn new(config: ExporterConfig, registry: Arc<dyn DeviceRegistry>) -> Self {
        Self { config, registry }
    }

    pub fn output_dir(&self) -> &Path {
        self.config.output_dir()
    }

    /// Export every device known to the registry
    ///
    /// Failures are logged; one bad device never stops the batch.
    pub async fn export_devices(&self) -> ExportSummary {
        let mut summary = ExportSummary::default();

        let devices = match self.registry.devices().await {
            Ok(devices) => devices,
            Err(e) => {
                error!("Couldn't enumerate ZHA devices: {}", e);
                return summary;
            }
        };

        info!(
            "Exporting {} ZHA devices to {}",
            devices.len(),
            self.output_dir().display()
        );

        let mut processed = ProcessedSlugs::new();

        for device in devices {
            let slug = manufacturer_model_slug(device.manufacturer(), device.model());

            if !processed.mark(&slug) {
                debug!(
                    "Skipping device {}: '{}' already exported",
                    device.device_id(),
                    slug
                );
                summary.duplicates += 1;
                continue;
            }

            match self.export_device(device.as_ref(), &slug).await {
                Ok(()) => summary.written += 1,
                Err(e) => {
                    error!("Couldn't export device {}: {}", device.device_id(), e);
                    summary.failed += 1;
                }
            }
        }

        info!(
            written = summary.written,
            duplicates = summary.duplicates,
            failed = summary.failed,
            "ZHA device export finished"
        );

        summary
    }

    async fn export_device(&self, device: &dyn ZhaDevice, slug: &str) -> Result<()> {
        let quirk = device.quirk();
        let entities = device.platform_entities();

        let record = RecordBuilder::new(device.device_info())
            .cluster_details(device.cluster_details())
            .quirk(&quirk)
            .platform_entities(&entities)
            .build()?;

        let path = write_record(self.output_dir(), slug, record).await?;

        debug!("Saved {} for device {}", path.display(), device.device_id());

        Ok(())
    }
}

#[async_trait]
impl ServiceHandler for Exporter {
    async fn call(&self, call: ServiceCall) -> zhaexport_host::Result<()> {
        if let Err(e) = call.expect_no_data() {
            error!("Rejected {} call: {}", call.id, e);
            return Err(e);
        }

        self.export_devices().await;
        Ok(())
    }
}
