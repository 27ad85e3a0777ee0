use serde::Serialize;

use crate::config::DEFAULT_SORT_FIELD;
use crate::models::instance::Instance;

/// Everything the dashboard shows, owned by one controller.
///
/// `errors` has no removal path: it only grows for the lifetime of the view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewState {
    sort_field: String,
    instances: Vec<Instance>,
    errors: Vec<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            sort_field: DEFAULT_SORT_FIELD.to_string(),
            instances: Vec::new(),
            errors: Vec::new(),
        }
    }
}

impl ViewState {
    pub fn sort_field(&self) -> &str {
        &self.sort_field
    }

    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub(crate) fn set_sort_field(&mut self, field: String) {
        self.sort_field = field;
    }

    pub(crate) fn replace_instances(&mut self, instances: Vec<Instance>) {
        self.instances = instances;
    }

    pub(crate) fn append_errors(&mut self, errors: Vec<String>) {
        self.errors.extend(errors);
    }

    pub(crate) fn push_error(&mut self, error: String) {
        self.errors.push(error);
    }
}
