//! Export record construction
//!
//! An export record is the device's base info with three keys layered on top:
//!
//! ```text
//! {
//!   ...base device info...,
//!   "cluster_details":    <endpoint/cluster attribute data>,
//!   "original_signature": <hex signature, quirked devices only>,
//!   "zha_lib_entities":   { "<platform>": [ {"info_object": .., "state": ..}, .. ] }
//! }
//! ```

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::trace;

use zhaexport_types::{EntityInfo, PlatformEntity, Quirk};

use crate::{
    constants::keys,
    error::Result,
    hex::HexSignature,
};

/// JSON object written to one export file
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ExportRecord(Map<String, Value>);

impl ExportRecord {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    /// Encode as pretty-printed JSON (two-space indent, trailing newline)
    pub fn to_pretty_json(&self) -> Result<Vec<u8>> {
        let mut buf = serde_json::to_vec_pretty(&self.0)?;
        buf.push(b'\n');
        Ok(buf)
    }
}

#[derive(Serialize)]
struct EntityRecord<'a> {
    info_object: EntityInfo,
    state: &'a Value,
}

/// Builder for [`ExportRecord`]
///
/// # Examples
///
/// ```
/// use serde_json::{json, Map};
/// use zhaexport_core::RecordBuilder;
/// use zhaexport_types::Quirk;
///
/// let record = RecordBuilder::new(Map::new())
///     .cluster_details(json!({}))
///     .quirk(&Quirk::Unquirked)
///     .build()
///     .unwrap();
///
/// assert!(record.contains_key("cluster_details"));
/// assert!(!record.contains_key("original_signature"));
/// ```
#[derive(Debug, Clone)]
pub struct RecordBuilder<'a> {
    device_info: Map<String, Value>,
    cluster_details: Value,
    quirk: Option<&'a Quirk>,
    entities: &'a [PlatformEntity],
}

impl<'a> RecordBuilder<'a> {
    /// Start from the host's base device info
    pub fn new(device_info: Map<String, Value>) -> Self {
        Self {
            device_info,
            cluster_details: Value::Null,
            quirk: None,
            entities: &[],
        }
    }

    pub fn cluster_details(mut self, cluster_details: Value) -> Self {
        self.cluster_details = cluster_details;
        self
    }

    pub fn quirk(mut self, quirk: &'a Quirk) -> Self {
        self.quirk = Some(quirk);
        self
    }

    pub fn platform_entities(mut self, entities: &'a [PlatformEntity]) -> Self {
        self.entities = entities;
        self
    }

    /// Assemble the record
    pub fn build(self) -> Result<ExportRecord> {
        let mut record = self.device_info;

        record.insert(keys::CLUSTER_DETAILS.into(), self.cluster_details);

        // An empty signature counts as no signature
        let signature = self
            .quirk
            .and_then(Quirk::original_signature)
            .filter(|signature| !signature.is_empty());
        if let Some(signature) = signature {
            record.insert(
                keys::ORIGINAL_SIGNATURE.into(),
                serde_json::to_value(HexSignature::from(signature))?,
            );
        }

        let entities = group_entities(self.entities)?;

        trace!(
            quirked = signature.is_some(),
            platforms = entities.len(),
            entities = self.entities.len(),
            "Built export record"
        );

        record.insert(keys::ZHA_LIB_ENTITIES.into(), Value::Object(entities));

        Ok(ExportRecord(record))
    }
}

/// Group entity records by platform, keeping first-seen order
fn group_entities(entities: &[PlatformEntity]) -> Result<Map<String, Value>> {
    let mut groups = Map::new();

    for entity in entities {
        let record = serde_json::to_value(EntityRecord {
            info_object: strip_commands(&entity.info_object),
            state: &entity.state,
        })?;

        if let Some(list) = groups
            .entry(entity.platform.clone())
            .or_insert_with(|| Value::Array(Vec::new()))
            .as_array_mut()
        {
            list.push(record);
        }
    }

    Ok(groups)
}

/// Copy of the info object without cluster `commands`
fn strip_commands(info: &EntityInfo) -> EntityInfo {
    let mut info = info.clone();
    for cluster in info.clusters_mut() {
        cluster.shift_remove(keys::COMMANDS);
    }
    info
}
