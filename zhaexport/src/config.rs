//! Host and exporter configuration

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use zhaexport_core::constants::OUTPUT_DIR_NAME;

/// What the hub hands to the integration at setup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    config_dir: PathBuf,
    domains: BTreeSet<String>,
}

impl HostConfig {
    /// Create a host config rooted at the hub's config directory
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            domains: BTreeSet::new(),
        }
    }

    /// Enable a configuration section (integration domain)
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domains.insert(domain.into());
        self
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Check if the configuration has a section for `domain`
    pub fn contains_domain(&self, domain: &str) -> bool {
        self.domains.contains(domain)
    }
}

/// Exporter settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExporterConfig {
    output_dir: PathBuf,
}

impl ExporterConfig {
    /// Default layout: `<config_dir>/zha-device-export`
    pub fn from_host(host: &HostConfig) -> Self {
        Self {
            output_dir: host.config_dir().join(OUTPUT_DIR_NAME),
        }
    }

    /// Set output directory
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}
