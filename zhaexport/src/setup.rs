//! Integration lifecycle

use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, error, info};

use zhaexport_core::constants::DOMAIN;
use zhaexport_host::{DeviceRegistry, ServiceRegistry};

use crate::config::{ExporterConfig, HostConfig};
use crate::error::{Error, Result};
use crate::exporter::{export_service_id, Exporter};

/// Make sure the output directory exists
///
/// Creates a single directory level on a blocking worker. An existing
/// directory is left alone.
pub async fn ensure_output_dir(dir: &Path) -> Result<()> {
    let path = dir.to_path_buf();

    tokio::task::spawn_blocking(move || create_dir_if_missing(&path)).await?
}

fn create_dir_if_missing(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }

    std::fs::create_dir(path).map_err(|source: io::Error| Error::CreateDir {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Created {}", path.display());
    Ok(())
}

/// Set up the integration
///
/// Returns `false` if setup failed, in which case no service is registered.
/// Without a `zha_device_exporter` config section this is a successful no-op.
pub async fn setup(
    host: &HostConfig,
    registry: Arc<dyn DeviceRegistry>,
    services: &dyn ServiceRegistry,
) -> bool {
    if !host.contains_domain(DOMAIN) {
        debug!("{} not configured, skipping setup", DOMAIN);
        return true;
    }

    let config = ExporterConfig::from_host(host);

    if let Err(e) = ensure_output_dir(config.output_dir()).await {
        error!("{}", e);
        return false;
    }

    let id = export_service_id();
    info!(
        "Registering {} (output: {})",
        id,
        config.output_dir().display()
    );
    services.register(id, Arc::new(Exporter::new(config, registry)));

    true
}

/// Unload the integration, removing its service
pub fn unload(services: &dyn ServiceRegistry) -> bool {
    if services.unregister(&export_service_id()) {
        info!("Removed {}", export_service_id());
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use zhaexport_host::{MemoryRegistry, MemoryServiceRegistry, ServiceCall};
    use zhaexport_types::DeviceSnapshot;

    fn registry() -> Arc<dyn DeviceRegistry> {
        Arc::new(MemoryRegistry::new([
            DeviceSnapshot::new("d1", "Acme", "Widget-A"),
            DeviceSnapshot::new("d2", "Acme", "Widget-A"),
            DeviceSnapshot::new("d3", "Acme", "Widget-B"),
        ]))
    }

    #[tokio::test]
    async fn test_setup_and_call() {
        let config_dir = tempfile::tempdir().unwrap();
        let host = HostConfig::new(config_dir.path()).with_domain(DOMAIN);
        let services = MemoryServiceRegistry::new();

        assert!(setup(&host, registry(), &services).await);
        assert!(services.has_service(&export_service_id()));

        services
            .call(ServiceCall::new(export_service_id()))
            .await
            .unwrap();

        let out = config_dir.path().join("zha-device-export");
        assert!(out.join("acme-widget-a.json").is_file());
        assert!(out.join("acme-widget-b.json").is_file());
        assert_eq!(std::fs::read_dir(&out).unwrap().count(), 2);
    }

    #[tokio::test]
    async fn test_setup_is_idempotent() {
        let config_dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(config_dir.path().join("zha-device-export")).unwrap();
        let host = HostConfig::new(config_dir.path()).with_domain(DOMAIN);
        let services = MemoryServiceRegistry::new();

        assert!(setup(&host, registry(), &services).await);
        assert!(setup(&host, registry(), &services).await);
        assert_eq!(services.len(), 1);
    }

    #[tokio::test]
    async fn test_setup_without_domain() {
        let config_dir = tempfile::tempdir().unwrap();
        let host = HostConfig::new(config_dir.path());
        let services = MemoryServiceRegistry::new();

        assert!(setup(&host, registry(), &services).await);
        assert!(services.is_empty());
        assert!(!config_dir.path().join("zha-device-export").exists());
    }

    #[tokio::test]
    async fn test_setup_fails_when_dir_cannot_be_created() {
        let root = tempfile::tempdir().unwrap();
        // Parent does not exist and only one level is created
        let host = HostConfig::new(root.path().join("missing")).with_domain(DOMAIN);
        let services = MemoryServiceRegistry::new();

        assert!(!setup(&host, registry(), &services).await);
        assert!(!services.has_service(&export_service_id()));
    }

    #[tokio::test]
    async fn test_setup_fails_when_path_is_a_file() {
        let config_dir = tempfile::tempdir().unwrap();
        std::fs::write(config_dir.path().join("zha-device-export"), b"").unwrap();
        let host = HostConfig::new(config_dir.path()).with_domain(DOMAIN);
        let services = MemoryServiceRegistry::new();

        assert!(!setup(&host, registry(), &services).await);
        assert!(services.is_empty());
    }

    #[tokio::test]
    async fn test_ensure_output_dir_error() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("a").join("b");

        match ensure_output_dir(&dir).await {
            Err(Error::CreateDir { path, .. }) => assert_eq!(path, dir),
            other => panic!("expected create error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unload() {
        let config_dir = tempfile::tempdir().unwrap();
        let host = HostConfig::new(config_dir.path()).with_domain(DOMAIN);
        let services = MemoryServiceRegistry::new();
        setup(&host, registry(), &services).await;

        assert!(unload(&services));
        assert!(!services.has_service(&export_service_id()));
        // Unloading twice is harmless
        assert!(unload(&services));
    }
}
