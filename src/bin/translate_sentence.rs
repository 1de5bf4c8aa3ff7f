//! Translate a single sentence from the command line and print the JSON
//! response.
//!
//! Usage:
//!   cargo run --bin translate-sentence -- "good morning"
//!   cargo run --bin translate-sentence -- --lookup dog
//!
//! Reads the same environment variables as the server (DICTIONARY_PATH,
//! NORMALIZED_PATH, SUFFIXES_PATH, TABLE_PRECEDENCE, AUDIO_BASE_URL,
//! PHRASE_MATCH_KIND).

use anyhow::{bail, Context, Result};
use quileute_translate::server::LookupMatch;
use quileute_translate::{build_translator, config};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quileute_translate=info".parse()?)
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (lookup, words) = match args.first().map(String::as_str) {
        Some("--lookup") => (true, &args[1..]),
        _ => (false, &args[..]),
    };
    if words.is_empty() {
        bail!("Usage: translate-sentence [--lookup] <sentence>");
    }
    let text = words.join(" ");

    let config = config::Config::from_env()?;
    let translator = build_translator(&config)?;
    info!("Loaded {} table(s)", translator.table_summaries().len());

    let output = if lookup {
        let matches = translator.lookup(&text)?;
        info!("Found {} match(es) for '{}'", matches.len(), text);
        let matches: Vec<LookupMatch> = matches.into_iter().map(LookupMatch::from).collect();
        serde_json::to_string_pretty(&matches).context("Failed to serialize matches")?
    } else {
        let response = translator.translate(&text)?;
        serde_json::to_string_pretty(&response).context("Failed to serialize translation")?
    };

    println!("{}", output);
    Ok(())
}
