//! Generate the PrefID integration notebook.
//!
//! Writes the static nbformat-4 guide to `docs/prefid.ipynb`, or to the path
//! given as the first argument.

use std::fs;
use std::path::PathBuf;

use langchain_prefid::notebook::prefid_integration_notebook;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error generating docs: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), anyhow::Error> {
    let output_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("docs/prefid.ipynb"));

    println!("Generating notebook at: {}", output_path.display());

    let notebook = prefid_integration_notebook();
    let json = notebook.to_json_pretty()?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(&output_path, json)?;

    println!("Success!");
    Ok(())
}
