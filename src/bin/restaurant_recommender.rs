//! Example: restaurant recommender with PrefID.
//!
//! Shows how the PrefID tool suite is wired into a tool-calling agent. The
//! LLM side is your agent framework's job; this script walks the same three
//! interactions the integration guide describes, invoking the tools directly
//! so the flow can be seen end to end.
//!
//! Runs against the in-memory backend with a seeded food profile unless
//! PREFID_API_URL points at a live service. Credentials come from
//! PREFID_CLIENT_ID / PREFID_ACCESS_TOKEN / PREFID_USER_ID.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use langchain_prefid::client::{
    HttpPreferenceBackend, InMemoryPreferenceBackend, PreferenceBackend,
};
use langchain_prefid::prompts::restaurant_recommender_prompt;
use langchain_prefid::tools::{create_prefid_tools, BaseTool};
use langchain_prefid::PrefIdContext;

#[tokio::main]
async fn main() {
    env_logger::init();
    if let Err(err) = run().await {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), anyhow::Error> {
    // Configuration
    let client_id = env_or("PREFID_CLIENT_ID", "your-client-id");
    let access_token = env_or("PREFID_ACCESS_TOKEN", "user-access-token");
    let user_id = env_or("PREFID_USER_ID", "user_123");
    let ctx = PrefIdContext::new(client_id, access_token, user_id.clone());

    let backend: Arc<dyn PreferenceBackend> = match std::env::var("PREFID_API_URL") {
        Ok(url) => Arc::new(HttpPreferenceBackend::new(url)?),
        Err(_) => Arc::new(seeded_backend(&user_id)),
    };

    let tools = create_prefid_tools(ctx, backend);

    println!("Available tools:");
    for tool in &tools {
        println!("- {}: {}", tool.name(), tool.description());
    }

    let system = &restaurant_recommender_prompt().messages[0].content;
    println!("\nAgent system prompt:\n{system}");

    // Example 1: the reads an agent performs before recommending
    println!("=== Example 1: Restaurant Recommendation ===");
    let thinking = invoke(&tools, "get_thinking_preferences", HashMap::new()).await?;
    println!("Thinking preferences: {thinking}");
    let mut args = HashMap::new();
    args.insert(
        "domain".to_string(),
        Value::String("food_profile".to_string()),
    );
    let food = invoke(&tools, "get_user_preferences", args).await?;
    println!("Food profile: {food}\n");

    // Example 2: learn a stated preference, then read it back
    println!("=== Example 2: Learn Preference ===");
    let mut args = HashMap::new();
    args.insert(
        "text".to_string(),
        Value::String(
            "I prefer when you give me just one clear recommendation instead of multiple options"
                .to_string(),
        ),
    );
    let ack = invoke(&tools, "learn_thinking_preference", args).await?;
    println!("Learned: {ack}");
    let thinking = invoke(&tools, "get_thinking_preferences", HashMap::new()).await?;
    println!("Thinking preferences now: {thinking}\n");

    // Example 3: introspection
    println!("=== Example 3: Introspection ===");
    let explanation = invoke(&tools, "explain_response_style", HashMap::new()).await?;
    println!("Explanation: {explanation}");

    Ok(())
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn seeded_backend(user_id: &str) -> InMemoryPreferenceBackend {
    let backend = InMemoryPreferenceBackend::new();
    let mut profile = HashMap::new();
    profile.insert(
        "cuisine".to_string(),
        Value::String("italian, thai".to_string()),
    );
    profile.insert("spice".to_string(), Value::String("mild".to_string()));
    profile.insert(
        "dietary".to_string(),
        Value::String("no shellfish".to_string()),
    );
    backend.seed_content_profile(user_id, "food_profile", profile);
    backend
}

async fn invoke(
    tools: &[Box<dyn BaseTool>],
    name: &str,
    args: HashMap<String, Value>,
) -> Result<Value, anyhow::Error> {
    let tool = tools
        .iter()
        .find(|t| t.name() == name)
        .ok_or_else(|| anyhow::anyhow!("no tool named {name}"))?;
    Ok(tool.run(args).await?)
}
