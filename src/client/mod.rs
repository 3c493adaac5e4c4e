//! Preference-storage backend seam.
//!
//! The backend is an external collaborator; the adapter only ever issues one
//! blocking request per operation and never retries, caches, or batches. The
//! trait keeps the wire contract swappable: `HttpPreferenceBackend` talks to
//! a live PrefID service, `InMemoryPreferenceBackend` backs tests and the
//! example script.

pub mod http;
pub mod memory;

use async_trait::async_trait;

use crate::context::PrefIdContext;
use crate::errors::PrefIdError;
use crate::types::{LearnAck, StyleExplanation, ThinkingPreference, UserPreferenceProfile};

pub use http::HttpPreferenceBackend;
pub use memory::InMemoryPreferenceBackend;

/// The preference-storage service of record.
///
/// Methods mirror the four adapter operations one-to-one. Implementations
/// report a missing record as `PrefIdError::NotFound`; mapping that to an
/// empty result for read operations is the adapter's job, not the backend's.
#[async_trait]
pub trait PreferenceBackend: Send + Sync {
    /// Fetch one named content-preference domain for the context's user.
    async fn get_content_preferences(
        &self,
        ctx: &PrefIdContext,
        domain: &str,
    ) -> Result<UserPreferenceProfile, PrefIdError>;

    /// Fetch the response-style preferences for the context's user.
    async fn get_thinking_preferences(
        &self,
        ctx: &PrefIdContext,
    ) -> Result<ThinkingPreference, PrefIdError>;

    /// Record a stated response-style preference.
    async fn learn_thinking_preference(
        &self,
        ctx: &PrefIdContext,
        text: &str,
    ) -> Result<LearnAck, PrefIdError>;

    /// Explain which stored preferences drove the last response.
    async fn explain_response_style(
        &self,
        ctx: &PrefIdContext,
    ) -> Result<StyleExplanation, PrefIdError>;
}
