// Display utilities
pub mod size_formatter;

// Ordering utilities
pub mod sort_key;

// Re-export all utilities for convenient access
pub use size_formatter::human_size;
pub use sort_key::{sort_instances, sort_key, SortKey};
