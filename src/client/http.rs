//! HTTP implementation of the preference backend.
//!
//! Talks to a PrefID service over a small REST surface under
//! `/v1/users/{user_id}/…`. Every request carries the bearer token and the
//! client id; every call is a single request/response exchange with no retry.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::context::PrefIdContext;
use crate::errors::PrefIdError;
use crate::types::{LearnAck, StyleExplanation, ThinkingPreference, UserPreferenceProfile};

use super::PreferenceBackend;

/// Default per-request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Preference backend over HTTP.
#[derive(Debug, Clone)]
pub struct HttpPreferenceBackend {
    /// Base URL of the PrefID service.
    base_url: String,
    http: reqwest::Client,
}

impl HttpPreferenceBackend {
    /// Create a backend against the given base URL with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self, PrefIdError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT_SECS)
    }

    /// Create a backend with an explicit per-request timeout.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout_secs: u64,
    ) -> Result<Self, PrefIdError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    fn user_url(&self, ctx: &PrefIdContext, suffix: &str) -> String {
        format!("{}/v1/users/{}/{}", self.base_url, ctx.user_id, suffix)
    }

    fn authed(&self, req: reqwest::RequestBuilder, ctx: &PrefIdContext) -> reqwest::RequestBuilder {
        req.bearer_auth(&ctx.access_token)
            .header("X-Client-Id", &ctx.client_id)
            .header("Accept", "application/json")
    }

    async fn parse<T: DeserializeOwned>(
        resp: reqwest::Response,
        resource: &str,
    ) -> Result<T, PrefIdError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp.json().await?);
        }
        let body = resp.text().await.unwrap_or_default();
        Err(PrefIdError::from_status(status.as_u16(), resource, &body))
    }
}

#[async_trait]
impl PreferenceBackend for HttpPreferenceBackend {
    async fn get_content_preferences(
        &self,
        ctx: &PrefIdContext,
        domain: &str,
    ) -> Result<UserPreferenceProfile, PrefIdError> {
        let url = self.user_url(ctx, &format!("preferences/{}", domain));
        log::debug!("GET {}", url);
        let resp = self.authed(self.http.get(&url), ctx).send().await?;
        Self::parse(resp, &format!("{} for {}", domain, ctx.user_id)).await
    }

    async fn get_thinking_preferences(
        &self,
        ctx: &PrefIdContext,
    ) -> Result<ThinkingPreference, PrefIdError> {
        let url = self.user_url(ctx, "thinking-preferences");
        log::debug!("GET {}", url);
        let resp = self.authed(self.http.get(&url), ctx).send().await?;
        Self::parse(resp, &format!("thinking preferences for {}", ctx.user_id)).await
    }

    async fn learn_thinking_preference(
        &self,
        ctx: &PrefIdContext,
        text: &str,
    ) -> Result<LearnAck, PrefIdError> {
        let url = self.user_url(ctx, "thinking-preferences");
        log::debug!("POST {}", url);
        let resp = self
            .authed(self.http.post(&url), ctx)
            .json(&json!({ "text": text }))
            .send()
            .await?;
        Self::parse(resp, &format!("learn for {}", ctx.user_id)).await
    }

    async fn explain_response_style(
        &self,
        ctx: &PrefIdContext,
    ) -> Result<StyleExplanation, PrefIdError> {
        let url = self.user_url(ctx, "response-style/explanation");
        log::debug!("GET {}", url);
        let resp = self.authed(self.http.get(&url), ctx).send().await?;
        Self::parse(resp, &format!("response style for {}", ctx.user_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let backend = HttpPreferenceBackend::new("https://api.pref-id.test/").unwrap();
        let ctx = PrefIdContext::new("client-1", "token", "user_123");
        assert_eq!(
            backend.user_url(&ctx, "thinking-preferences"),
            "https://api.pref-id.test/v1/users/user_123/thinking-preferences"
        );
    }

    #[test]
    fn test_content_preference_url_is_domain_scoped() {
        let backend = HttpPreferenceBackend::new("https://api.pref-id.test").unwrap();
        let ctx = PrefIdContext::new("client-1", "token", "user_123");
        assert_eq!(
            backend.user_url(&ctx, "preferences/food_profile"),
            "https://api.pref-id.test/v1/users/user_123/preferences/food_profile"
        );
    }
}
