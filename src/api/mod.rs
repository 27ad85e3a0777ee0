// Backend access
pub mod client;
pub mod error;

// Re-export commonly used items
pub use client::{ApiClient, InstanceSource};
pub use error::FetchError;
