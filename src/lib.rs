//! Terminal dashboard for a fleet of Redis instances.
//!
//! The backend publishes `GET /api/instances`; this crate fetches that list
//! once, keeps it in an [`InstanceListController`], and renders it as a
//! sortable table with memory figures in human units.

pub mod api;
pub mod config;
pub mod controller;
pub mod models;
pub mod render;
pub mod utils;

pub use api::{ApiClient, FetchError, InstanceSource};
pub use controller::InstanceListController;
pub use models::{Instance, InstancesPayload, ViewState};
pub use utils::human_size;
