//! Device registry backed by a JSON snapshot file
//!
//! The file holds a JSON array of device snapshots. It is re-read on every
//! enumeration so edits show up on the next export.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use zhaexport_types::DeviceSnapshot;

use crate::{DeviceRegistry, Error, Result, ZhaDevice};

/// Snapshot file registry
#[derive(Debug, Clone)]
pub struct SnapshotFileRegistry {
    path: PathBuf,
}

impl SnapshotFileRegistry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DeviceRegistry for SnapshotFileRegistry {
    async fn devices(&self) -> Result<Vec<Arc<dyn ZhaDevice>>> {
        let data = tokio::fs::read(&self.path).await.map_err(|e| {
            Error::RegistryUnavailable(format!("{}: {}", self.path.display(), e))
        })?;

        let devices = DeviceSnapshot::list_from_json(&data)?;

        debug!(
            "Loaded {} devices from {}",
            devices.len(),
            self.path.display()
        );

        Ok(devices
            .into_iter()
            .map(|d| Arc::new(d) as Arc<dyn ZhaDevice>)
            .collect())
    }
}
