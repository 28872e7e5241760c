//! Service registration
//!
//! Services are addressed by `domain.service` and take a JSON object of
//! call data, mirroring the hub's service-call surface.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{Error, Result};

/// `domain.service` address
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServiceId {
    pub domain: String,
    pub service: String,
}

impl ServiceId {
    pub fn new(domain: impl Into<String>, service: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            service: service.into(),
        }
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.domain, self.service)
    }
}

/// A single service invocation
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceCall {
    pub id: ServiceId,
    pub data: Map<String, Value>,
}

impl ServiceCall {
    /// Call without data
    pub fn new(id: ServiceId) -> Self {
        Self {
            id,
            data: Map::new(),
        }
    }

    pub fn with_data(mut self, data: Map<String, Value>) -> Self {
        self.data = data;
        self
    }

    /// Reject any call data (empty schema)
    pub fn expect_no_data(&self) -> Result<()> {
        if self.data.is_empty() {
            return Ok(());
        }

        let keys: Vec<&str> = self.data.keys().map(String::as_str).collect();
        Err(Error::InvalidServiceData {
            service: self.id.clone(),
            reason: format!("extra keys not allowed: {}", keys.join(", ")),
        })
    }
}

/// Handler invoked for a registered service
#[async_trait]
pub trait ServiceHandler: Send + Sync {
    async fn call(&self, call: ServiceCall) -> Result<()>;
}

/// Hub service registry
pub trait ServiceRegistry: Send + Sync {
    /// Register (or replace) the handler for a service
    fn register(&self, id: ServiceId, handler: Arc<dyn ServiceHandler>);

    /// Remove a service, returning whether it was registered
    fn unregister(&self, id: &ServiceId) -> bool;

    fn has_service(&self, id: &ServiceId) -> bool;
}

/// In-process service registry
#[derive(Default)]
pub struct MemoryServiceRegistry {
    handlers: RwLock<HashMap<ServiceId, Arc<dyn ServiceHandler>>>,
}

impl MemoryServiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invoke a registered service
    pub async fn call(&self, call: ServiceCall) -> Result<()> {
        let handler = self
            .handlers
            .read()
            .get(&call.id)
            .cloned()
            .ok_or_else(|| Error::ServiceNotFound(call.id.clone()))?;

        debug!("Calling service {}", call.id);

        handler.call(call).await
    }

    pub fn len(&self) -> usize {
        self.handlers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.read().is_empty()
    }
}

impl ServiceRegistry for MemoryServiceRegistry {
    fn register(&self, id: ServiceId, handler: Arc<dyn ServiceHandler>) {
        debug!("Registering service {}", id);
        self.handlers.write().insert(id, handler);
    }

    fn unregister(&self, id: &ServiceId) -> bool {
        debug!("Removing service {}", id);
        self.handlers.write().remove(id).is_some()
    }

    fn has_service(&self, id: &ServiceId) -> bool {
        self.handlers.read().contains_key(id)
    }
}
