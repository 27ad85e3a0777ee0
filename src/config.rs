use std::env;
use std::path::Path;
use std::time::Duration;

// Default configuration constants
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_SORT_FIELD: &str = "name";
pub const INSTANCES_ENDPOINT: &str = "/api/instances";

pub const API_URL_VAR: &str = "REDIBOARD_API_URL";
pub const TIMEOUT_VAR: &str = "REDIBOARD_TIMEOUT_SECS";

/// Attributes the table knows how to order by. `--sort` accepts anything;
/// this list only feeds help text and `check-config` output.
pub const SORT_FIELDS: &[&str] = &[
    "name",
    "host",
    "port",
    "role",
    "version",
    "used_memory",
    "maxmemory",
    "maxmemory_policy",
];

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        if let Err(e) = dotenvy::from_path(Path::new(path)) {
            tracing::warn!(%e, path, "Failed to load env file");
        }
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_api_base_url() -> String {
    sanitize_base_url(&env::var(API_URL_VAR).unwrap_or_default())
}

/// Request timeout; unset, empty, zero or unparsable means wait forever.
pub fn get_request_timeout() -> Option<Duration> {
    parse_timeout_secs(&env::var(TIMEOUT_VAR).unwrap_or_default())
}

pub fn parse_timeout_secs(raw: &str) -> Option<Duration> {
    let t = raw.trim();
    if t.is_empty() {
        return None;
    }
    match t.parse::<u64>() {
        Ok(0) => None,
        Ok(secs) => Some(Duration::from_secs(secs)),
        Err(e) => {
            tracing::warn!(%e, value = t, "Ignoring invalid {}", TIMEOUT_VAR);
            None
        }
    }
}

pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}
