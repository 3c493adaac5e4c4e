//! Push the PrefID agent prompts to the prompt hub.
//!
//! Usage:
//!     export LANGCHAIN_API_KEY="..."
//!     cargo run --bin push_to_hub
//!
//! Override the registry URL with PREFID_HUB_URL and the publishing handle
//! with PREFID_HUB_HANDLE.

use langchain_prefid::hub::HubClient;
use langchain_prefid::prompts::{basic_agent_prompt, restaurant_recommender_prompt};

const DEFAULT_HUB_URL: &str = "https://hub.pref-id.vercel.app";
const DEFAULT_HANDLE: &str = "prefid";

#[tokio::main]
async fn main() {
    env_logger::init();
    println!("Pushing prompts to the prompt hub...");
    match run().await {
        Ok(view_url) => println!("\nSuccess! View at {view_url}"),
        Err(err) => {
            eprintln!("\nError pushing to hub: {err}");
            eprintln!("Is LANGCHAIN_API_KEY set?");
            std::process::exit(1);
        }
    }
}

async fn run() -> Result<String, anyhow::Error> {
    let api_key = std::env::var("LANGCHAIN_API_KEY")
        .map_err(|_| anyhow::anyhow!("LANGCHAIN_API_KEY is not set"))?;
    let base_url =
        std::env::var("PREFID_HUB_URL").unwrap_or_else(|_| DEFAULT_HUB_URL.to_string());
    let handle =
        std::env::var("PREFID_HUB_HANDLE").unwrap_or_else(|_| DEFAULT_HANDLE.to_string());

    let client = HubClient::new(base_url.clone(), api_key, handle)?;

    client
        .push("restaurant-recommender", &restaurant_recommender_prompt())
        .await?;
    println!("Pushed: {}", client.repo_id("restaurant-recommender"));

    client.push("basic-agent", &basic_agent_prompt()).await?;
    println!("Pushed: {}", client.repo_id("basic-agent"));

    Ok(format!("{base_url}/hub"))
}
