//! Chat prompt templates for PrefID-aware agents.
//!
//! A template is an ordered list of role-tagged messages; `Placeholder`
//! entries are filled in by the agent framework at run time (chat history,
//! user input, agent scratchpad). Two templates ship with the integration:
//! the restaurant recommender prompt and a basic preference-aware prompt.

use serde::{Deserialize, Serialize};

/// Role of one message in a chat prompt template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptRole {
    /// System instructions.
    System,
    /// A human turn.
    Human,
    /// Slot filled by the agent framework (e.g. `{chat_history}`).
    Placeholder,
}

/// One message in a chat prompt template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptMessage {
    pub role: PromptRole,
    pub content: String,
}

/// An ordered chat prompt template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatPromptTemplate {
    pub messages: Vec<PromptMessage>,
}

impl ChatPromptTemplate {
    /// Build a template from (role, content) pairs, in order.
    pub fn from_messages(messages: Vec<(PromptRole, &str)>) -> Self {
        Self {
            messages: messages
                .into_iter()
                .map(|(role, content)| PromptMessage {
                    role,
                    content: content.to_string(),
                })
                .collect(),
        }
    }
}

const RESTAURANT_SYSTEM_PROMPT: &str = "\
You are a helpful restaurant recommendation assistant.

IMPORTANT: Before making recommendations:
1. Call get_thinking_preferences to understand HOW the user wants responses
2. Call get_user_preferences with 'food_profile' to understand WHAT they like
3. Structure your response according to their thinking preferences

If the user asks why you're responding a certain way, use explain_response_style.
If the user tells you how they prefer responses, use learn_thinking_preference.
";

const BASIC_SYSTEM_PROMPT: &str = "\
You are a helpful assistant with access to user preferences.
Use the provided tools to personalize your responses based on user preferences.
";

/// The restaurant recommender prompt: system instructions that wire the four
/// PrefID tools into the recommendation flow.
pub fn restaurant_recommender_prompt() -> ChatPromptTemplate {
    ChatPromptTemplate::from_messages(vec![
        (PromptRole::System, RESTAURANT_SYSTEM_PROMPT),
        (PromptRole::Placeholder, "{chat_history}"),
        (PromptRole::Human, "{input}"),
        (PromptRole::Placeholder, "{agent_scratchpad}"),
    ])
}

/// A generic preference-aware agent prompt.
pub fn basic_agent_prompt() -> ChatPromptTemplate {
    ChatPromptTemplate::from_messages(vec![
        (PromptRole::System, BASIC_SYSTEM_PROMPT),
        (PromptRole::Placeholder, "{chat_history}"),
        (PromptRole::Human, "{input}"),
        (PromptRole::Placeholder, "{agent_scratchpad}"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restaurant_prompt_role_ordering() {
        let prompt = restaurant_recommender_prompt();
        let roles: Vec<PromptRole> = prompt.messages.iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![
                PromptRole::System,
                PromptRole::Placeholder,
                PromptRole::Human,
                PromptRole::Placeholder,
            ]
        );
        assert_eq!(prompt.messages[1].content, "{chat_history}");
        assert_eq!(prompt.messages[3].content, "{agent_scratchpad}");
    }

    #[test]
    fn test_restaurant_prompt_names_all_four_tools() {
        let system = &restaurant_recommender_prompt().messages[0].content;
        for tool in [
            "get_thinking_preferences",
            "get_user_preferences",
            "explain_response_style",
            "learn_thinking_preference",
        ] {
            assert!(system.contains(tool), "missing {tool}");
        }
    }

    #[test]
    fn test_prompt_serde_roundtrip() {
        let prompt = basic_agent_prompt();
        let json = serde_json::to_string(&prompt).unwrap();
        let back: ChatPromptTemplate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, prompt);
    }
}
