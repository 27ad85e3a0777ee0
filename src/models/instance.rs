use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A monitored Redis server as reported by the backend.
///
/// Only `name`, `errors` and `connections` are interpreted here. Everything
/// else the backend sends (port, vip, role, memory figures, ...) lands in
/// `extra` and is serialized back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub errors: Vec<String>,
    /// Replication links; usually `{ "host": ..., "port": ... }` objects.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub connections: Vec<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Instance {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            errors: Vec::new(),
            connections: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Look up a pass-through attribute by name.
    ///
    /// The backend writes used memory under `used_memory:` (trailing colon),
    /// so a key that misses is retried with a colon appended.
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.extra
            .get(key)
            .or_else(|| self.extra.get(&format!("{}:", key)))
            .filter(|v| !v.is_null())
    }

    pub fn attribute_str(&self, key: &str) -> Option<&str> {
        self.attribute(key).and_then(|v| v.as_str())
    }

    pub fn attribute_i64(&self, key: &str) -> Option<i64> {
        self.attribute(key).and_then(|v| v.as_i64())
    }
}

/// Render a connection record as `host:port`, falling back to its JSON text.
pub fn connection_label(connection: &Value) -> String {
    let host = connection.get("host").and_then(|v| v.as_str());
    let port = connection.get("port").and_then(|v| match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    });
    match (host, port) {
        (Some(h), Some(p)) => format!("{}:{}", h, p),
        (Some(h), None) => h.to_string(),
        _ => match connection {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        },
    }
}

/// Go encodes nil slices as `null`; treat that the same as a missing field.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_fields_round_trip() {
        let raw = json!({
            "name": "cache-01",
            "errors": [],
            "connections": [{"host": "db2", "port": "6380"}],
            "port": "6379",
            "vip": "10.0.0.1",
            "used_memory:": 1536,
            "maxmemory": 0,
            "last_updated": 1700000000
        });
        let instance: Instance = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(instance.name, "cache-01");
        assert_eq!(instance.extra.len(), 5);
        assert_eq!(serde_json::to_value(&instance).unwrap(), raw);
    }

    #[test]
    fn test_null_lists_become_empty() {
        let instance: Instance =
            serde_json::from_value(json!({"name": "a", "errors": null, "connections": null})).unwrap();
        assert!(instance.errors.is_empty());
        assert!(instance.connections.is_empty());
    }

    #[test]
    fn test_missing_lists_become_empty() {
        let instance: Instance = serde_json::from_value(json!({"name": "a"})).unwrap();
        assert!(instance.errors.is_empty());
        assert!(instance.connections.is_empty());
    }

    #[test]
    fn test_attribute_falls_back_to_colon_key() {
        let instance: Instance =
            serde_json::from_value(json!({"name": "a", "used_memory:": 2048})).unwrap();
        assert_eq!(instance.attribute_i64("used_memory"), Some(2048));
        assert_eq!(instance.attribute("maxmemory"), None);
    }

    #[test]
    fn test_connection_label() {
        assert_eq!(connection_label(&json!({"host": "db2", "port": "6380"})), "db2:6380");
        assert_eq!(connection_label(&json!({"host": "db2", "port": 6380})), "db2:6380");
        assert_eq!(connection_label(&json!({"host": "db2"})), "db2");
        assert_eq!(connection_label(&json!("replica-1")), "replica-1");
        assert_eq!(connection_label(&json!([1, 2])), "[1,2]");
    }
}
