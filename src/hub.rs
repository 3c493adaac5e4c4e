//! Prompt-registry publisher.
//!
//! Pushes named chat prompt templates to a remote prompt hub under a fixed
//! handle. One POST per template, no retry or idempotence handling; the
//! caller decides what to do with a failure (the shipped script prints it
//! once and exits).

use crate::prompts::ChatPromptTemplate;

/// Default per-request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client for the remote prompt registry.
pub struct HubClient {
    /// Base URL of the registry.
    base_url: String,
    /// API key sent with every push.
    api_key: String,
    /// Handle the templates are published under.
    handle: String,
    http: reqwest::Client,
}

impl std::fmt::Debug for HubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HubClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("handle", &self.handle)
            .finish()
    }
}

impl HubClient {
    /// Create a new `HubClient`.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        handle: impl Into<String>,
    ) -> Result<Self, anyhow::Error> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            handle: handle.into(),
            http,
        })
    }

    /// The `handle/name` identifier a template is published under.
    pub fn repo_id(&self, name: &str) -> String {
        format!("{}/{}", self.handle, name)
    }

    /// Push one named template. Returns the URL the template is viewable at.
    pub async fn push(
        &self,
        name: &str,
        template: &ChatPromptTemplate,
    ) -> Result<String, anyhow::Error> {
        let url = format!("{}/v1/prompts/{}/{}", self.base_url, self.handle, name);
        log::debug!("Pushing prompt template to: {}", url);

        let resp = self
            .http
            .post(&url)
            .header("x-api-key", &self.api_key)
            .json(template)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!(
                "push of {} failed: HTTP {}: {}",
                self.repo_id(name),
                status,
                body
            );
        }

        Ok(format!("{}/hub/{}", self.base_url, self.repo_id(name)))
    }
}
