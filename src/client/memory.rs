//! In-memory preference backend.
//!
//! Process-local stand-in for the PrefID service, used by the tests and by
//! the example script when no live endpoint is configured. Implements the
//! same semantics the service documents: missing records are `NotFound`,
//! learned thinking preferences are visible to the next read, and the style
//! explanation references the preferences consulted by the most recent read.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use crate::context::PrefIdContext;
use crate::errors::PrefIdError;
use crate::types::{
    LearnAck, RecommendationStyle, StyleExplanation, ThinkingPreference, UserPreferenceProfile,
};

use super::PreferenceBackend;

#[derive(Default)]
struct State {
    /// (user_id, domain) -> preference key/value data.
    content: HashMap<(String, String), HashMap<String, Value>>,
    /// user_id -> thinking preference record.
    thinking: HashMap<String, ThinkingPreference>,
    /// user_id -> preference keys consulted by the most recent read.
    last_used: HashMap<String, Vec<String>>,
}

/// In-memory backend with the service's read/write semantics.
#[derive(Default)]
pub struct InMemoryPreferenceBackend {
    state: Mutex<State>,
}

impl InMemoryPreferenceBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a content-preference domain for a user.
    pub fn seed_content_profile(
        &self,
        user_id: impl Into<String>,
        domain: impl Into<String>,
        preferences: HashMap<String, Value>,
    ) {
        let mut state = self.state.lock().expect("backend state poisoned");
        state
            .content
            .insert((user_id.into(), domain.into()), preferences);
    }

    /// Derive structured style fields from a stated preference.
    fn interpret(text: &str, pref: &mut ThinkingPreference) {
        let lower = text.to_lowercase();
        if lower.contains("one clear")
            || lower.contains("just one")
            || lower.contains("single")
        {
            pref.recommendation_style = Some(RecommendationStyle::Single);
        } else if lower.contains("multiple") || lower.contains("several options") {
            pref.recommendation_style = Some(RecommendationStyle::Multiple);
        }
        if lower.contains("brief") || lower.contains("concise") || lower.contains("short") {
            pref.verbosity = Some("concise".to_string());
        } else if lower.contains("detail") || lower.contains("thorough") {
            pref.verbosity = Some("detailed".to_string());
        }
        pref.extras.insert(
            "last_statement".to_string(),
            Value::String(text.to_string()),
        );
    }
}

#[async_trait]
impl PreferenceBackend for InMemoryPreferenceBackend {
    async fn get_content_preferences(
        &self,
        ctx: &PrefIdContext,
        domain: &str,
    ) -> Result<UserPreferenceProfile, PrefIdError> {
        let mut state = self.state.lock().expect("backend state poisoned");
        let key = (ctx.user_id.clone(), domain.to_string());
        match state.content.get(&key).cloned() {
            Some(preferences) => {
                let mut used: Vec<String> = preferences.keys().cloned().collect();
                used.sort();
                state.last_used.insert(ctx.user_id.clone(), used);
                Ok(UserPreferenceProfile {
                    user_id: ctx.user_id.clone(),
                    domain: domain.to_string(),
                    preferences,
                })
            }
            None => Err(PrefIdError::NotFound {
                resource: format!("{} for {}", domain, ctx.user_id),
            }),
        }
    }

    async fn get_thinking_preferences(
        &self,
        ctx: &PrefIdContext,
    ) -> Result<ThinkingPreference, PrefIdError> {
        let mut state = self.state.lock().expect("backend state poisoned");
        match state.thinking.get(&ctx.user_id).cloned() {
            Some(pref) => {
                let mut used = Vec::new();
                if pref.verbosity.is_some() {
                    used.push("verbosity".to_string());
                }
                if pref.recommendation_style.is_some() {
                    used.push("recommendation_style".to_string());
                }
                state.last_used.insert(ctx.user_id.clone(), used);
                Ok(pref)
            }
            None => Err(PrefIdError::NotFound {
                resource: format!("thinking preferences for {}", ctx.user_id),
            }),
        }
    }

    async fn learn_thinking_preference(
        &self,
        ctx: &PrefIdContext,
        text: &str,
    ) -> Result<LearnAck, PrefIdError> {
        if text.trim().is_empty() {
            return Err(PrefIdError::Validation {
                message: "preference text must not be empty".to_string(),
            });
        }
        let mut state = self.state.lock().expect("backend state poisoned");
        let pref = state
            .thinking
            .entry(ctx.user_id.clone())
            .or_insert_with(|| ThinkingPreference::default_for(ctx.user_id.clone()));
        Self::interpret(text, pref);
        Ok(LearnAck {
            id: Uuid::new_v4().to_string(),
            user_id: ctx.user_id.clone(),
            learned: text.to_string(),
            recorded_at: Utc::now(),
        })
    }

    async fn explain_response_style(
        &self,
        ctx: &PrefIdContext,
    ) -> Result<StyleExplanation, PrefIdError> {
        let state = self.state.lock().expect("backend state poisoned");
        match state.last_used.get(&ctx.user_id) {
            Some(driven_by) => {
                let explanation = if driven_by.is_empty() {
                    "The last response used no stored preferences.".to_string()
                } else {
                    format!(
                        "The last response was shaped by these stored preferences: {}.",
                        driven_by.join(", ")
                    )
                };
                Ok(StyleExplanation {
                    user_id: ctx.user_id.clone(),
                    explanation,
                    driven_by: driven_by.clone(),
                })
            }
            None => Err(PrefIdError::NotFound {
                resource: format!("no prior interaction recorded for {}", ctx.user_id),
            }),
        }
    }
}
