//! Base tool abstraction.
//!
//! A tool is a named, agent-invocable operation: the name and description
//! are what a tool-calling agent selects on, the args schema tells it what
//! arguments to pass, and `run` executes the call. Tools are side-effect
//! isolated; the only state they share is the credential context and a
//! handle to the backend.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::PrefIdError;

/// An agent-invocable operation.
#[async_trait]
pub trait BaseTool: Send + Sync {
    /// The unique name of the tool that clearly communicates its purpose.
    fn name(&self) -> &str;

    /// Description used to tell the model how/when/why to use the tool.
    fn description(&self) -> &str;

    /// JSON schema for the arguments that the tool accepts.
    fn args_schema(&self) -> Value {
        Value::Object(serde_json::Map::new())
    }

    /// Execute the tool with the given arguments.
    async fn run(&self, args: HashMap<String, Value>) -> Result<Value, PrefIdError>;
}

/// Pull a required string argument out of a tool-call argument map.
pub(crate) fn required_str_arg(
    args: &HashMap<String, Value>,
    name: &str,
) -> Result<String, PrefIdError> {
    match args.get(name).and_then(Value::as_str) {
        Some(s) if !s.trim().is_empty() => Ok(s.to_string()),
        Some(_) => Err(PrefIdError::Validation {
            message: format!("argument '{}' must not be empty", name),
        }),
        None => Err(PrefIdError::Validation {
            message: format!("missing required string argument '{}'", name),
        }),
    }
}
