//! Diagnostic CLI: run one extraction over a text file (or stdin) and print
//! the resulting partial recipe as JSON.

use anyhow::Result;
use recipe_extract::extract_recipe;
use std::env;
use std::io::Read;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut text = String::new();
    match env::args().nth(1) {
        Some(path) => {
            text = std::fs::read_to_string(&path)?;
            info!(path = %path, bytes = text.len(), "Read recipe text from file");
        }
        None => {
            std::io::stdin().read_to_string(&mut text)?;
            info!(bytes = text.len(), "Read recipe text from stdin");
        }
    }

    let recipe = extract_recipe(&text);
    println!("{}", serde_json::to_string_pretty(&recipe)?);
    Ok(())
}
