//! Data model for PrefID preference records.
//!
//! Content preferences (WHAT the user likes) and thinking preferences (HOW
//! the user wants responses structured) live in distinct namespaces; every
//! record is scoped to a `user_id` and exactly one of the two domains.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The two preference namespaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferenceDomain {
    /// WHAT the user likes (e.g. a food profile).
    Content,
    /// HOW the user wants responses structured.
    Thinking,
}

impl PreferenceDomain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Content => "content",
            Self::Thinking => "thinking",
        }
    }
}

/// One named content-preference domain for one user.
///
/// Mutable only through an explicit learn operation on the backend; the
/// adapter treats it as read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPreferenceProfile {
    /// The user this profile belongs to.
    pub user_id: String,
    /// Domain name, e.g. `food_profile`.
    pub domain: String,
    /// Free-form preference key/value data.
    #[serde(default)]
    pub preferences: HashMap<String, Value>,
}

impl UserPreferenceProfile {
    /// An empty profile, used when the backend has nothing recorded.
    pub fn empty(user_id: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            domain: domain.into(),
            preferences: HashMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.preferences.is_empty()
    }
}

/// Whether the user wants one clear recommendation or a set of options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationStyle {
    /// One clear recommendation.
    Single,
    /// Several options to choose from.
    Multiple,
}

/// How a user wants responses structured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThinkingPreference {
    /// The user this preference belongs to.
    pub user_id: String,
    /// Preferred verbosity, e.g. `concise` or `detailed`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbosity: Option<String>,
    /// Single recommendation vs. multiple options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation_style: Option<RecommendationStyle>,
    /// Free-form notes about response format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format_notes: Option<String>,
    /// Anything else the backend has recorded about response style.
    #[serde(default)]
    pub extras: HashMap<String, Value>,
}

impl ThinkingPreference {
    /// A neutral preference, used when the backend has nothing recorded.
    pub fn default_for(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            verbosity: None,
            recommendation_style: None,
            format_notes: None,
            extras: HashMap::new(),
        }
    }
}

/// Acknowledgement for a learned preference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearnAck {
    /// Backend-assigned record id.
    pub id: String,
    /// The user the preference was recorded for.
    pub user_id: String,
    /// The preference text as stated by the user.
    pub learned: String,
    /// When the preference was recorded.
    pub recorded_at: DateTime<Utc>,
}

/// Why the last response was shaped the way it was.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleExplanation {
    /// The user the explanation is about.
    pub user_id: String,
    /// Human-readable justification.
    pub explanation: String,
    /// The stored preference keys that drove the last response.
    #[serde(default)]
    pub driven_by: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_profile() {
        let profile = UserPreferenceProfile::empty("user_123", "food_profile");
        assert!(profile.is_empty());
        assert_eq!(profile.domain, "food_profile");
    }

    #[test]
    fn test_profile_serde_roundtrip() {
        let mut profile = UserPreferenceProfile::empty("user_123", "food_profile");
        profile
            .preferences
            .insert("cuisine".to_string(), Value::String("italian".to_string()));
        let json = serde_json::to_string(&profile).unwrap();
        let back: UserPreferenceProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }

    #[test]
    fn test_thinking_preference_omits_unset_fields() {
        let pref = ThinkingPreference::default_for("user_123");
        let json = serde_json::to_string(&pref).unwrap();
        assert!(!json.contains("verbosity"));
        assert!(!json.contains("recommendation_style"));
    }

    #[test]
    fn test_recommendation_style_wire_format() {
        let json = serde_json::to_string(&RecommendationStyle::Single).unwrap();
        assert_eq!(json, "\"single\"");
        let style: RecommendationStyle = serde_json::from_str("\"multiple\"").unwrap();
        assert_eq!(style, RecommendationStyle::Multiple);
    }

    #[test]
    fn test_domain_tags_are_distinct() {
        assert_ne!(
            PreferenceDomain::Content.as_str(),
            PreferenceDomain::Thinking.as_str()
        );
    }
}
