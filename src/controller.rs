//! View-state owner for the instance dashboard.
//!
//! The controller is built once per view, performs exactly one fetch while
//! initializing, and afterwards only answers queries from the renderer and
//! records the chosen sort field.

use crate::api::{FetchError, InstanceSource};
use crate::models::{Instance, InstancesPayload, ViewState};

const LIST_ERROR_PREFIX: &str = "Error getting instances list. ";
const API_DOWN_MESSAGE: &str = "It seems the API is not running (Error: 502)";

/// Message appended to the error list when the instance request fails.
///
/// A 502 comes from the reverse proxy in front of a backend that is not
/// running, so it gets its own wording.
pub fn fetch_failure_message(status: u16) -> String {
    let detail = if status == 502 {
        API_DOWN_MESSAGE.to_string()
    } else {
        format!("HTTP Error code {}", status)
    };
    format!("{}{}", LIST_ERROR_PREFIX, detail)
}

#[derive(Debug, Clone, Default)]
pub struct InstanceListController {
    state: ViewState,
}

impl InstanceListController {
    /// Controller with an empty list and the default sort field, before any fetch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the controller and issue the one instance request.
    pub async fn initialize<S: InstanceSource>(source: &S) -> Self {
        let mut controller = Self::new();
        let result = source.fetch_instances().await;
        controller.apply(result);
        controller
    }

    /// Fold a completed fetch into the view state.
    ///
    /// Success replaces the instance list and appends the backend's errors.
    /// Failure appends one message and leaves the instance list alone.
    pub fn apply(&mut self, result: Result<InstancesPayload, FetchError>) {
        match result {
            Ok(payload) => {
                tracing::debug!(
                    instances = payload.instances.len(),
                    errors = payload.errors.len(),
                    "Loaded instance list"
                );
                self.state.replace_instances(payload.instances);
                self.state.append_errors(payload.errors);
            }
            Err(e) => {
                tracing::warn!(%e, "Instance list request failed");
                self.state.push_error(fetch_failure_message(e.status()));
            }
        }
    }

    pub fn instances(&self) -> &[Instance] {
        self.state.instances()
    }

    pub fn errors(&self) -> &[String] {
        self.state.errors()
    }

    pub fn sort_field(&self) -> &str {
        self.state.sort_field()
    }

    pub fn view_state(&self) -> &ViewState {
        &self.state
    }

    pub fn is_sort_field(&self, field: &str) -> bool {
        self.state.sort_field() == field
    }

    /// Any value is accepted; unknown fields simply leave the list in fetch order.
    pub fn set_sort_field(&mut self, field: impl Into<String>) {
        self.state.set_sort_field(field.into());
    }

    /// `true` means "show this row": the instance reported an error or has at
    /// least one replication link. Standalone healthy instances get `false`.
    pub fn hide_no_slave(&self, instance: &Instance) -> bool {
        !instance.errors.is_empty() || !instance.connections.is_empty()
    }
}
