//! Tool surface exposed to the agent framework.
//!
//! Four named tools wrap the preference-storage backend: two reads, one
//! write, and one introspection call. Each tool carries a name and a
//! natural-language description the calling agent uses for tool selection.

pub mod base_tool;
pub mod operation;
pub mod prefid_tools;

pub use base_tool::BaseTool;
pub use operation::{execute, PrefIdOperation, PrefIdOutput};
pub use prefid_tools::{
    create_prefid_tools, ExplainResponseStyleTool, GetThinkingPreferencesTool,
    GetUserPreferencesTool, LearnThinkingPreferenceTool,
};
