//! The four PrefID tools and the suite constructor.
//!
//! Each tool is a thin wrapper around one `PrefIdOperation` variant: it
//! parses the agent's argument map, dispatches through `execute`, and hands
//! the typed result back as JSON. `create_prefid_tools` builds the full
//! suite for one credential triple.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::client::PreferenceBackend;
use crate::context::PrefIdContext;
use crate::errors::PrefIdError;

use super::base_tool::{required_str_arg, BaseTool};
use super::operation::{execute, PrefIdOperation};

/// Reads WHAT the user likes for a named domain.
#[derive(Clone)]
pub struct GetUserPreferencesTool {
    ctx: PrefIdContext,
    backend: Arc<dyn PreferenceBackend>,
}

#[async_trait]
impl BaseTool for GetUserPreferencesTool {
    fn name(&self) -> &str {
        "get_user_preferences"
    }

    fn description(&self) -> &str {
        PrefIdOperation::GetContentPreferences {
            domain: String::new(),
        }
        .description()
    }

    fn args_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "domain": {
                    "type": "string",
                    "description": "Preference domain to read, e.g. 'food_profile'"
                }
            },
            "required": ["domain"]
        })
    }

    async fn run(&self, args: HashMap<String, Value>) -> Result<Value, PrefIdError> {
        let domain = required_str_arg(&args, "domain")?;
        let out = execute(
            &self.ctx,
            self.backend.as_ref(),
            PrefIdOperation::GetContentPreferences { domain },
        )
        .await?;
        Ok(out.to_value())
    }
}

/// Reads HOW the user wants responses structured.
#[derive(Clone)]
pub struct GetThinkingPreferencesTool {
    ctx: PrefIdContext,
    backend: Arc<dyn PreferenceBackend>,
}

#[async_trait]
impl BaseTool for GetThinkingPreferencesTool {
    fn name(&self) -> &str {
        "get_thinking_preferences"
    }

    fn description(&self) -> &str {
        PrefIdOperation::GetThinkingPreferences.description()
    }

    async fn run(&self, _args: HashMap<String, Value>) -> Result<Value, PrefIdError> {
        let out = execute(
            &self.ctx,
            self.backend.as_ref(),
            PrefIdOperation::GetThinkingPreferences,
        )
        .await?;
        Ok(out.to_value())
    }
}

/// Records a stated response-style preference.
#[derive(Clone)]
pub struct LearnThinkingPreferenceTool {
    ctx: PrefIdContext,
    backend: Arc<dyn PreferenceBackend>,
}

#[async_trait]
impl BaseTool for LearnThinkingPreferenceTool {
    fn name(&self) -> &str {
        "learn_thinking_preference"
    }

    fn description(&self) -> &str {
        PrefIdOperation::LearnThinkingPreference {
            text: String::new(),
        }
        .description()
    }

    fn args_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "text": {
                    "type": "string",
                    "description": "The preference as the user stated it"
                }
            },
            "required": ["text"]
        })
    }

    async fn run(&self, args: HashMap<String, Value>) -> Result<Value, PrefIdError> {
        let text = required_str_arg(&args, "text")?;
        let out = execute(
            &self.ctx,
            self.backend.as_ref(),
            PrefIdOperation::LearnThinkingPreference { text },
        )
        .await?;
        Ok(out.to_value())
    }
}

/// Explains which stored preferences drove the last response.
#[derive(Clone)]
pub struct ExplainResponseStyleTool {
    ctx: PrefIdContext,
    backend: Arc<dyn PreferenceBackend>,
}

#[async_trait]
impl BaseTool for ExplainResponseStyleTool {
    fn name(&self) -> &str {
        "explain_response_style"
    }

    fn description(&self) -> &str {
        PrefIdOperation::ExplainResponseStyle.description()
    }

    async fn run(&self, _args: HashMap<String, Value>) -> Result<Value, PrefIdError> {
        let out = execute(
            &self.ctx,
            self.backend.as_ref(),
            PrefIdOperation::ExplainResponseStyle,
        )
        .await?;
        Ok(out.to_value())
    }
}

/// Build the full PrefID tool suite for one credential triple.
pub fn create_prefid_tools(
    ctx: PrefIdContext,
    backend: Arc<dyn PreferenceBackend>,
) -> Vec<Box<dyn BaseTool>> {
    vec![
        Box::new(GetUserPreferencesTool {
            ctx: ctx.clone(),
            backend: Arc::clone(&backend),
        }),
        Box::new(GetThinkingPreferencesTool {
            ctx: ctx.clone(),
            backend: Arc::clone(&backend),
        }),
        Box::new(LearnThinkingPreferenceTool {
            ctx: ctx.clone(),
            backend: Arc::clone(&backend),
        }),
        Box::new(ExplainResponseStyleTool { ctx, backend }),
    ]
}
