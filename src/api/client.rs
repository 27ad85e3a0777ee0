use std::future::Future;
use std::time::Duration;

use serde::de::DeserializeOwned;
use yansi::Paint;

use super::error::FetchError;
use crate::config::INSTANCES_ENDPOINT;
use crate::models::InstancesPayload;

/// Anything that can produce the instance list. The controller only talks to
/// this trait, so tests can hand it canned results.
pub trait InstanceSource {
    fn fetch_instances(&self) -> impl Future<Output = Result<InstancesPayload, FetchError>> + Send;
}

/// HTTP client for the rediboard backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    verbose: bool,
}

impl ApiClient {
    /// Build a client for `base_url` (no trailing slash). `timeout` of `None`
    /// leaves requests unbounded.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(format!("rediboard/{}", env!("CARGO_PKG_VERSION")));
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        let client = builder
            .build()
            .map_err(|e| FetchError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            verbose: false,
        })
    }

    /// Print each request as a curl command and each response body.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `endpoint` and decode the JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, FetchError> {
        let url = format!("{}{}", self.base_url, endpoint);

        if self.verbose {
            let parts = [
                Paint::new("curl").fg(yansi::Color::Green).bold().to_string(),
                format!("-X {}", Paint::new("GET").fg(yansi::Color::Yellow).bold()),
                format!("'{}'", Paint::new(&url).fg(yansi::Color::Cyan)),
            ];
            eprintln!("Request:\n{}", parts.join(" "));
        }

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            if self.verbose {
                eprintln!("Response:\n{}", Paint::new(format!("HTTP {}", status)).fg(yansi::Color::Red));
            }
            tracing::debug!(status = status.as_u16(), %url, "Backend returned an error status");
            return Err(FetchError::Status(status.as_u16()));
        }

        let text = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if self.verbose {
            // Grayed out so the table stands out
            eprintln!("Response:\n{}", Paint::new(&text).rgb(100, 100, 100));
        }

        serde_json::from_str(&text).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

impl InstanceSource for ApiClient {
    async fn fetch_instances(&self) -> Result<InstancesPayload, FetchError> {
        self.get_json(INSTANCES_ENDPOINT).await
    }
}
