//! Documentation notebook generator.
//!
//! Emits the PrefID integration guide as a static nbformat-4 JSON document:
//! a fixed sequence of markdown and code cells covering the introduction,
//! installation, setup, tool creation, and an agent run. Pure data
//! serialization; nothing here executes the cells.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One notebook cell, markdown or code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cell_type", rename_all = "lowercase")]
pub enum NotebookCell {
    Markdown {
        metadata: serde_json::Map<String, Value>,
        source: Vec<String>,
    },
    Code {
        execution_count: Option<u32>,
        metadata: serde_json::Map<String, Value>,
        outputs: Vec<Value>,
        source: Vec<String>,
    },
}

impl NotebookCell {
    /// A markdown cell from plain text.
    pub fn markdown(text: &str) -> Self {
        Self::Markdown {
            metadata: serde_json::Map::new(),
            source: source_lines(text),
        }
    }

    /// An unexecuted code cell from plain text.
    pub fn code(text: &str) -> Self {
        Self::Code {
            execution_count: None,
            metadata: serde_json::Map::new(),
            outputs: Vec::new(),
            source: source_lines(text),
        }
    }

    pub fn is_code(&self) -> bool {
        matches!(self, Self::Code { .. })
    }
}

/// Split text into nbformat source lines: every line keeps its trailing
/// newline except the last.
fn source_lines(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = text
        .split('\n')
        .map(|line| format!("{}\n", line))
        .collect();
    if let Some(last) = lines.last_mut() {
        last.pop();
        if last.is_empty() {
            lines.pop();
        }
    }
    lines
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kernelspec {
    pub display_name: String,
    pub language: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageInfo {
    pub file_extension: String,
    pub mimetype: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotebookMetadata {
    pub kernelspec: Kernelspec,
    pub language_info: LanguageInfo,
}

/// A complete nbformat-4 notebook document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notebook {
    pub cells: Vec<NotebookCell>,
    pub metadata: NotebookMetadata,
    pub nbformat: u32,
    pub nbformat_minor: u32,
}

impl Notebook {
    pub fn new(cells: Vec<NotebookCell>, metadata: NotebookMetadata) -> Self {
        Self {
            cells,
            metadata,
            nbformat: 4,
            nbformat_minor: 5,
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn rust_metadata() -> NotebookMetadata {
    NotebookMetadata {
        kernelspec: Kernelspec {
            display_name: "Rust".to_string(),
            language: "rust".to_string(),
            name: "rust".to_string(),
        },
        language_info: LanguageInfo {
            file_extension: ".rs".to_string(),
            mimetype: "text/rust".to_string(),
            name: "Rust".to_string(),
        },
    }
}

const INTRO_MD: &str = "\
# PrefID Integration

[PrefID](https://pref-id.vercel.app) provides identity-aware memory infrastructure for AI agents.
It helps agents understand:
- **WHAT** users like (content preferences)
- **HOW** users want responses (thinking preferences)

This integration gives tool-calling agents access to user preferences through a standardized tool suite.";

const INSTALL_MD: &str = "## Installation";

const INSTALL_CODE: &str = ":dep langchain-prefid = \"0.1\"";

const SETUP_MD: &str = "\
## Setup

Get your Client ID from the [PrefID Dashboard](https://pref-id.vercel.app/dashboard).";

const SETUP_CODE: &str = "\
use langchain_prefid::{HttpPreferenceBackend, PrefIdContext};

// Configuration
// In production, use environment variables or an OAuth flow
let ctx = PrefIdContext::new(\"your-client-id\", \"user-access-token\", \"user_123\");
let backend = HttpPreferenceBackend::new(\"https://api.pref-id.vercel.app\")?;";

const TOOLS_MD: &str = "\
## Create Tools

The `create_prefid_tools` helper creates a suite of tools for reading/writing preferences and introspection.";

const TOOLS_CODE: &str = "\
use std::sync::Arc;
use langchain_prefid::create_prefid_tools;

let tools = create_prefid_tools(ctx.clone(), Arc::new(backend));

// View available tools
for tool in &tools {
    println!(\"- {}: {}\", tool.name(), tool.description());
}";

const AGENT_MD: &str = "\
## Create and Run Agent

Hand the tool suite to your agent framework together with the shipped prompt.
The agent reads BOTH content preferences (food) AND thinking preferences (verbosity/style) before answering.";

const AGENT_CODE: &str = "\
use langchain_prefid::prompts::restaurant_recommender_prompt;

let prompt = restaurant_recommender_prompt();

// Register `tools` and `prompt` with your tool-calling agent, then run:
//   \"Recommend a restaurant for date night\"
// The agent will call get_thinking_preferences and
// get_user_preferences(\"food_profile\") before composing its answer.";

/// Build the PrefID integration guide with its fixed cell sequence.
pub fn prefid_integration_notebook() -> Notebook {
    Notebook::new(
        vec![
            NotebookCell::markdown(INTRO_MD),
            NotebookCell::markdown(INSTALL_MD),
            NotebookCell::code(INSTALL_CODE),
            NotebookCell::markdown(SETUP_MD),
            NotebookCell::code(SETUP_CODE),
            NotebookCell::markdown(TOOLS_MD),
            NotebookCell::code(TOOLS_CODE),
            NotebookCell::markdown(AGENT_MD),
            NotebookCell::code(AGENT_CODE),
        ],
        rust_metadata(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_lines_keep_interior_newlines() {
        let lines = source_lines("a\nb\nc");
        assert_eq!(lines, vec!["a\n", "b\n", "c"]);
    }

    #[test]
    fn test_source_lines_single_line() {
        assert_eq!(source_lines("only"), vec!["only"]);
    }

    #[test]
    fn test_cell_sequence_alternates_as_documented() {
        let nb = prefid_integration_notebook();
        assert_eq!(nb.cells.len(), 9);
        // intro, installation, setup, tool creation, agent run
        let kinds: Vec<bool> = nb.cells.iter().map(NotebookCell::is_code).collect();
        assert_eq!(
            kinds,
            vec![false, false, true, false, true, false, true, false, true]
        );
    }

    #[test]
    fn test_notebook_round_trips_with_same_cell_order() {
        let nb = prefid_integration_notebook();
        let json = nb.to_json_pretty().unwrap();
        let parsed: Notebook = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.cells.len(), nb.cells.len());
        assert_eq!(parsed, nb);
    }

    #[test]
    fn test_generated_document_is_nbformat_4() {
        let nb = prefid_integration_notebook();
        let value: Value = serde_json::from_str(&nb.to_json_pretty().unwrap()).unwrap();
        assert_eq!(value["nbformat"], 4);
        assert_eq!(value["cells"][0]["cell_type"], "markdown");
        assert_eq!(value["cells"][2]["cell_type"], "code");
        assert!(value["cells"][2]["execution_count"].is_null());
    }

    #[test]
    fn test_written_file_parses_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefid.ipynb");
        let nb = prefid_integration_notebook();
        std::fs::write(&path, nb.to_json_pretty().unwrap()).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        let parsed: Notebook = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.cells.len(), 9);
    }

    #[test]
    fn test_sections_appear_in_order() {
        let nb = prefid_integration_notebook();
        let flat: String = nb
            .cells
            .iter()
            .map(|c| match c {
                NotebookCell::Markdown { source, .. } => source.concat(),
                NotebookCell::Code { source, .. } => source.concat(),
            })
            .collect();
        let sections = [
            "# PrefID Integration",
            "## Installation",
            "## Setup",
            "## Create Tools",
            "## Create and Run Agent",
        ];
        let mut last = 0;
        for section in sections {
            let pos = flat[last..].find(section).expect(section) + last;
            last = pos;
        }
    }
}
