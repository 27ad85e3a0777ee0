pub mod instance;
pub mod instances_payload;
pub mod view_state;

// Re-export the record types
pub use instance::{connection_label, Instance};
pub use instances_payload::InstancesPayload;
pub use view_state::ViewState;
