//! Host boundary errors

use std::io;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Device registry unavailable: {0}")]
    RegistryUnavailable(String),

    #[error("Service not found: {0}")]
    ServiceNotFound(crate::service::ServiceId),

    #[error("Invalid data for service {service}: {reason}")]
    InvalidServiceData {
        service: crate::service::ServiceId,
        reason: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid device snapshot: {0}")]
    Snapshot(#[from] zhaexport_types::Error),
}
