//! Type definitions for zhaexport

pub mod device;
pub mod entity;
pub mod error;
pub mod quirk;

pub use device::DeviceSnapshot;
pub use entity::{ClusterHandlerInfo, EntityInfo, PlatformEntity};
pub use error::{Error, Result};
pub use quirk::{EndpointDescriptor, Quirk, QuirkSignature};
