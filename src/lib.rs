//! # langchain-prefid
//!
//! PrefID preference tools for tool-calling conversational agents.
//!
//! PrefID is a preference-storage service that remembers WHAT a user likes
//! (content preferences, e.g. a food profile) and HOW the user wants
//! responses structured (thinking preferences, e.g. verbosity and
//! single-vs-multiple recommendation style). This crate exposes that service
//! to an agent framework as a fixed suite of four named tools, plus the
//! supporting pieces the integration ships with: the chat prompt templates,
//! a prompt-hub publisher, and the documentation notebook generator.

pub mod client;
pub mod context;
pub mod errors;
pub mod hub;
pub mod notebook;
pub mod prompts;
pub mod tools;
pub mod types;

pub use client::{HttpPreferenceBackend, InMemoryPreferenceBackend, PreferenceBackend};
pub use context::PrefIdContext;
pub use errors::PrefIdError;
pub use tools::{create_prefid_tools, BaseTool, PrefIdOperation, PrefIdOutput};
pub use types::{LearnAck, StyleExplanation, ThinkingPreference, UserPreferenceProfile};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
