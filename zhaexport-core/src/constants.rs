//! Integration constants

/// Integration domain, also the config section that enables it
pub const DOMAIN: &str = "zha_device_exporter";

/// Export service name
pub const SERVICE_EXPORT_DEVICES: &str = "export_devices";

/// Output directory, relative to the host config directory
pub const OUTPUT_DIR_NAME: &str = "zha-device-export";

/// Extension of the per-model export files
pub const EXPORT_FILE_EXTENSION: &str = "json";

/// Rendering of a missing manufacturer or model in the slug source
pub const MISSING_VALUE: &str = "None";

/// File stem used when manufacturer and model slugify to nothing
pub const FALLBACK_SLUG: &str = "unknown";

/// Export record keys
pub mod keys {
    /// Endpoint/cluster attribute data
    pub const CLUSTER_DETAILS: &str = "cluster_details";

    /// Pre-quirk signature (quirked devices only)
    pub const ORIGINAL_SIGNATURE: &str = "original_signature";

    /// Platform entities grouped by platform
    pub const ZHA_LIB_ENTITIES: &str = "zha_lib_entities";

    /// Cluster field stripped from cluster handler descriptors
    pub const COMMANDS: &str = "commands";
}
