//! The preference operations as a tagged union.
//!
//! Modeling the four operations as enum variants (instead of four loose
//! callables) keeps the tool surface type safe when the calling framework is
//! swapped out: each variant carries its own typed input, and `execute`
//! returns a typed output union. The tool structs in `prefid_tools` are thin
//! wrappers over this union.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::PreferenceBackend;
use crate::context::PrefIdContext;
use crate::errors::PrefIdError;
use crate::types::{
    LearnAck, StyleExplanation, ThinkingPreference, UserPreferenceProfile,
};

/// One of the four preference operations, with its typed input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum PrefIdOperation {
    /// Read one named content-preference domain (e.g. `food_profile`).
    GetContentPreferences { domain: String },
    /// Read the response-style preferences.
    GetThinkingPreferences,
    /// Record a stated response-style preference.
    LearnThinkingPreference { text: String },
    /// Explain which stored preferences drove the last response.
    ExplainResponseStyle,
}

impl PrefIdOperation {
    /// Tool name the agent selects on.
    pub fn name(&self) -> &'static str {
        match self {
            Self::GetContentPreferences { .. } => "get_user_preferences",
            Self::GetThinkingPreferences => "get_thinking_preferences",
            Self::LearnThinkingPreference { .. } => "learn_thinking_preference",
            Self::ExplainResponseStyle => "explain_response_style",
        }
    }

    /// Natural-language description used for tool selection.
    pub fn description(&self) -> &'static str {
        match self {
            Self::GetContentPreferences { .. } => {
                "Get the user's content preferences for a named domain (e.g. \
                 'food_profile') as key/value pairs. Use this to learn WHAT \
                 the user likes before making recommendations."
            }
            Self::GetThinkingPreferences => {
                "Get the user's thinking preferences: HOW they want responses \
                 structured (verbosity, single recommendation vs. multiple \
                 options). Call this before composing a response."
            }
            Self::LearnThinkingPreference { .. } => {
                "Record a response-style preference the user just stated, e.g. \
                 'I prefer one clear recommendation over multiple options'."
            }
            Self::ExplainResponseStyle => {
                "Explain which stored preferences shaped the last response. \
                 Use this when the user asks why you responded a certain way."
            }
        }
    }
}

/// Typed output union matching `PrefIdOperation`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PrefIdOutput {
    ContentPreferences(UserPreferenceProfile),
    ThinkingPreferences(ThinkingPreference),
    Learned(LearnAck),
    Explanation(StyleExplanation),
}

impl PrefIdOutput {
    /// Serialize the inner record for handing back to the agent framework.
    pub fn to_value(&self) -> Value {
        match self {
            Self::ContentPreferences(p) => serde_json::to_value(p),
            Self::ThinkingPreferences(p) => serde_json::to_value(p),
            Self::Learned(a) => serde_json::to_value(a),
            Self::Explanation(e) => serde_json::to_value(e),
        }
        .unwrap_or(Value::Null)
    }
}

/// Execute one operation against the backend.
///
/// This is where the adapter-level semantics live: read operations map a
/// backend `NotFound` to an empty/default record, the learn operation
/// rejects blank text before any network call, and the explain operation
/// surfaces `NotFound` to the caller unchanged.
pub async fn execute(
    ctx: &PrefIdContext,
    backend: &dyn PreferenceBackend,
    op: PrefIdOperation,
) -> Result<PrefIdOutput, PrefIdError> {
    match op {
        PrefIdOperation::GetContentPreferences { domain } => {
            match backend.get_content_preferences(ctx, &domain).await {
                Ok(profile) => Ok(PrefIdOutput::ContentPreferences(profile)),
                Err(err) if err.is_not_found() => {
                    log::debug!("no {} recorded for {}; returning empty", domain, ctx.user_id);
                    Ok(PrefIdOutput::ContentPreferences(
                        UserPreferenceProfile::empty(ctx.user_id.clone(), domain),
                    ))
                }
                Err(err) => Err(err),
            }
        }
        PrefIdOperation::GetThinkingPreferences => {
            match backend.get_thinking_preferences(ctx).await {
                Ok(pref) => Ok(PrefIdOutput::ThinkingPreferences(pref)),
                Err(err) if err.is_not_found() => {
                    log::debug!(
                        "no thinking preferences recorded for {}; returning default",
                        ctx.user_id
                    );
                    Ok(PrefIdOutput::ThinkingPreferences(
                        ThinkingPreference::default_for(ctx.user_id.clone()),
                    ))
                }
                Err(err) => Err(err),
            }
        }
        PrefIdOperation::LearnThinkingPreference { text } => {
            if text.trim().is_empty() {
                return Err(PrefIdError::Validation {
                    message: "preference text must not be empty".to_string(),
                });
            }
            let ack = backend.learn_thinking_preference(ctx, &text).await?;
            Ok(PrefIdOutput::Learned(ack))
        }
        PrefIdOperation::ExplainResponseStyle => {
            let explanation = backend.explain_response_style(ctx).await?;
            Ok(PrefIdOutput::Explanation(explanation))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde_json::Value;

    use crate::client::InMemoryPreferenceBackend;
    use crate::types::RecommendationStyle;

    use super::*;

    fn ctx() -> PrefIdContext {
        PrefIdContext::new("client-1", "token", "user_123")
    }

    #[tokio::test]
    async fn test_missing_food_profile_is_an_empty_mapping() {
        let backend = InMemoryPreferenceBackend::new();
        let out = execute(
            &ctx(),
            &backend,
            PrefIdOperation::GetContentPreferences {
                domain: "food_profile".to_string(),
            },
        )
        .await
        .unwrap();
        match out {
            PrefIdOutput::ContentPreferences(profile) => {
                assert!(profile.is_empty());
                assert_eq!(profile.domain, "food_profile");
            }
            other => panic!("unexpected output: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_thinking_preferences_are_a_neutral_default() {
        let backend = InMemoryPreferenceBackend::new();
        let out = execute(&ctx(), &backend, PrefIdOperation::GetThinkingPreferences)
            .await
            .unwrap();
        match out {
            PrefIdOutput::ThinkingPreferences(pref) => {
                assert_eq!(pref.user_id, "user_123");
                assert!(pref.recommendation_style.is_none());
            }
            other => panic!("unexpected output: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_content_reads_are_idempotent() {
        let backend = InMemoryPreferenceBackend::new();
        let mut prefs = HashMap::new();
        prefs.insert("cuisine".to_string(), Value::String("italian".to_string()));
        backend.seed_content_profile("user_123", "food_profile", prefs);

        let op = PrefIdOperation::GetContentPreferences {
            domain: "food_profile".to_string(),
        };
        let first = execute(&ctx(), &backend, op.clone()).await.unwrap();
        let second = execute(&ctx(), &backend, op).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_learn_then_read_is_consistent() {
        let backend = InMemoryPreferenceBackend::new();
        execute(
            &ctx(),
            &backend,
            PrefIdOperation::LearnThinkingPreference {
                text: "prefer one clear recommendation over multiple options".to_string(),
            },
        )
        .await
        .unwrap();

        let out = execute(&ctx(), &backend, PrefIdOperation::GetThinkingPreferences)
            .await
            .unwrap();
        match out {
            PrefIdOutput::ThinkingPreferences(pref) => {
                assert_eq!(pref.recommendation_style, Some(RecommendationStyle::Single));
            }
            other => panic!("unexpected output: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_learn_blank_text_fails_validation_without_a_backend_call() {
        let backend = InMemoryPreferenceBackend::new();
        let err = execute(
            &ctx(),
            &backend,
            PrefIdOperation::LearnThinkingPreference {
                text: "   ".to_string(),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, PrefIdError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_explain_with_no_prior_interaction_is_a_hard_error() {
        let backend = InMemoryPreferenceBackend::new();
        let err = execute(&ctx(), &backend, PrefIdOperation::ExplainResponseStyle)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_operation_names_are_unique() {
        let names = [
            PrefIdOperation::GetContentPreferences {
                domain: "food_profile".to_string(),
            }
            .name(),
            PrefIdOperation::GetThinkingPreferences.name(),
            PrefIdOperation::LearnThinkingPreference {
                text: "x".to_string(),
            }
            .name(),
            PrefIdOperation::ExplainResponseStyle.name(),
        ];
        let mut deduped = names.to_vec();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), names.len());
    }

    #[test]
    fn test_operation_serde_roundtrip() {
        let op = PrefIdOperation::GetContentPreferences {
            domain: "food_profile".to_string(),
        };
        let json = serde_json::to_string(&op).unwrap();
        assert!(json.contains("get_content_preferences"));
        let back: PrefIdOperation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, op);
    }
}
