use serde::{Deserialize, Serialize};

use crate::models::instance::{null_as_empty, Instance};

/// Body of a successful `GET /api/instances`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstancesPayload {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub instances: Vec<Instance>,
    /// Problems the backend detected on its own (unreachable hosts, auth failures).
    #[serde(default, deserialize_with = "null_as_empty")]
    pub errors: Vec<String>,
}
