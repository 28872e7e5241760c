//! Platform entity structures
//!
//! Info objects are kept as the plain mappings the ZHA library reports, so
//! key order and absent keys survive the export untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const CLUSTER_HANDLERS: &str = "cluster_handlers";
const CLUSTER: &str = "cluster";

/// Cluster handler descriptor inside an entity info object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClusterHandlerInfo(Map<String, Value>);

impl ClusterHandlerInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cluster the handler is bound to
    pub fn with_cluster(self, cluster: Map<String, Value>) -> Self {
        self.with_field(CLUSTER, Value::Object(cluster))
    }

    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.0.insert(key.into(), value);
        self
    }

    /// Cluster mapping, `None` when absent or null
    pub fn cluster(&self) -> Option<&Map<String, Value>> {
        self.0.get(CLUSTER).and_then(Value::as_object)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for ClusterHandlerInfo {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Entity info object as reported by the ZHA library
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityInfo(Map<String, Value>);

impl EntityInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.0.insert(key.into(), value);
        self
    }

    /// Append a cluster handler, creating the list on first use
    pub fn with_cluster_handler(mut self, handler: ClusterHandlerInfo) -> Self {
        let handlers = self
            .0
            .entry(CLUSTER_HANDLERS)
            .or_insert_with(|| Value::Array(Vec::new()));
        if let Some(list) = handlers.as_array_mut() {
            list.push(Value::Object(handler.0));
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Cluster handler descriptors, skipping entries that are not objects
    pub fn cluster_handlers(&self) -> impl Iterator<Item = &Map<String, Value>> {
        self.0
            .get(CLUSTER_HANDLERS)
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_object)
    }

    /// Every present, non-null `cluster` mapping of every cluster handler
    pub fn clusters_mut(&mut self) -> impl Iterator<Item = &mut Map<String, Value>> {
        self.0
            .get_mut(CLUSTER_HANDLERS)
            .and_then(Value::as_array_mut)
            .into_iter()
            .flatten()
            .filter_map(|handler| handler.get_mut(CLUSTER))
            .filter_map(Value::as_object_mut)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for EntityInfo {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// A (platform, unique ID) entity exposed by a device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformEntity {
    /// Platform name (`sensor`, `switch`, ...)
    pub platform: String,

    pub unique_id: String,

    pub info_object: EntityInfo,

    /// Current state
    #[serde(default)]
    pub state: Value,
}

impl PlatformEntity {
    pub fn new(platform: impl Into<String>, unique_id: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            unique_id: unique_id.into(),
            info_object: EntityInfo::default(),
            state: Value::Null,
        }
    }

    pub fn with_info(mut self, info_object: EntityInfo) -> Self {
        self.info_object = info_object;
        self
    }

    pub fn with_state(mut self, state: Value) -> Self {
        self.state = state;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_entity_info_from_json() {
        let info: EntityInfo = serde_json::from_value(json!({
            "unique_id": "00:11-1-6",
            "cluster_handlers": [
                {"name": "on_off", "cluster": {"id": 6, "commands": ["on", "off"]}},
                {"name": "basic", "cluster": null},
                {"name": "unbound"}
            ]
        }))
        .unwrap();

        let handlers: Vec<_> = info.cluster_handlers().collect();
        assert_eq!(handlers.len(), 3);
        assert_eq!(handlers[0].get("name"), Some(&json!("on_off")));
        assert_eq!(info.get("unique_id"), Some(&json!("00:11-1-6")));

        let handler = ClusterHandlerInfo::from(handlers[0].clone());
        assert_eq!(handler.cluster().unwrap().get("id"), Some(&json!(6)));
        assert_eq!(ClusterHandlerInfo::from(handlers[1].clone()).cluster(), None);
        assert_eq!(ClusterHandlerInfo::from(handlers[2].clone()).cluster(), None);
    }

    #[test]
    fn test_entity_info_round_trips_unchanged() {
        let source = json!({
            "name": "n",
            "cluster_handlers": [{"id": "1:0x0006"}, {"id": "1:0x0000", "cluster": null}],
            "available": true
        });

        let info: EntityInfo = serde_json::from_value(source.clone()).unwrap();
        let out = serde_json::to_value(&info).unwrap();

        assert_eq!(out, source);
        let keys: Vec<&str> = info.as_map().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["name", "cluster_handlers", "available"]);
        assert!(out["cluster_handlers"][0].get("cluster").is_none());
    }

    #[test]
    fn test_clusters_mut_skips_absent_and_null() {
        let mut info = EntityInfo::new()
            .with_cluster_handler(ClusterHandlerInfo::new().with_field("id", json!("a")))
            .with_cluster_handler(ClusterHandlerInfo::new().with_field("cluster", Value::Null))
            .with_cluster_handler(ClusterHandlerInfo::new().with_cluster(Map::new()));

        assert_eq!(info.clusters_mut().count(), 1);
    }

    #[test]
    fn test_entity_without_cluster_handlers() {
        let entity: PlatformEntity = serde_json::from_value(json!({
            "platform": "sensor",
            "unique_id": "abc",
            "info_object": {"class_name": "Battery"}
        }))
        .unwrap();

        assert_eq!(entity.info_object.cluster_handlers().count(), 0);
        assert_eq!(
            serde_json::to_value(&entity.info_object).unwrap(),
            json!({"class_name": "Battery"})
        );
        assert_eq!(entity.state, Value::Null);
    }
}
