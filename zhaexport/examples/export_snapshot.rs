//! Export devices from a snapshot file
//!
//! Usage: `export_snapshot <devices.json> [config_dir]`

use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use zhaexport::{
    export_service_id, setup, ExporterConfig, HostConfig, MemoryServiceRegistry, ServiceCall,
    SnapshotFileRegistry,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut args = std::env::args().skip(1);
    let snapshot = args
        .next()
        .ok_or_else(|| anyhow::anyhow!("usage: export_snapshot <devices.json> [config_dir]"))?;
    let config_dir = args.next().unwrap_or_else(|| ".".to_string());

    let host = HostConfig::new(config_dir).with_domain(zhaexport::constants::DOMAIN);
    let registry = Arc::new(SnapshotFileRegistry::new(snapshot));
    let services = MemoryServiceRegistry::new();

    if !setup(&host, registry, &services).await {
        anyhow::bail!("setup failed, see log for details");
    }

    services.call(ServiceCall::new(export_service_id())).await?;

    let output = ExporterConfig::from_host(&host);
    println!("Export written to {}", output.output_dir().display());

    Ok(())
}
