use std::cmp::Ordering;

use serde_json::Value;

use crate::models::Instance;

/// Comparable projection of one instance attribute.
///
/// Variant order is the ordering between kinds: numbers first, then text,
/// then instances that lack the attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Number(f64),
    Text(String),
    Missing,
}

impl SortKey {
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Number(n) => n.as_f64().map(SortKey::Number).unwrap_or(SortKey::Missing),
            Value::String(s) => SortKey::Text(s.clone()),
            Value::Bool(b) => SortKey::Text(b.to_string()),
            Value::Null => SortKey::Missing,
            Value::Array(a) => SortKey::Number(a.len() as f64),
            Value::Object(_) => SortKey::Text(value.to_string()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            SortKey::Number(_) => 0,
            SortKey::Text(_) => 1,
            SortKey::Missing => 2,
        }
    }

    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// Key for `field` on `instance`. List fields sort by their length.
pub fn sort_key(instance: &Instance, field: &str) -> SortKey {
    match field {
        "name" => SortKey::Text(instance.name.clone()),
        "errors" => SortKey::Number(instance.errors.len() as f64),
        "connections" => SortKey::Number(instance.connections.len() as f64),
        other => instance
            .attribute(other)
            .map(SortKey::from_value)
            .unwrap_or(SortKey::Missing),
    }
}

/// Ascending, stable ordering of `instances` by `field`. Ties keep fetch order.
pub fn sort_instances<'a>(instances: &'a [Instance], field: &str) -> Vec<&'a Instance> {
    let mut keyed: Vec<(SortKey, &Instance)> = instances
        .iter()
        .map(|i| (sort_key(i, field), i))
        .collect();
    keyed.sort_by(|a, b| a.0.compare(&b.0));
    keyed.into_iter().map(|(_, i)| i).collect()
}
