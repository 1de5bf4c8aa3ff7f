//! Dictionary-driven English to Quileute phrase translation.
//!
//! A sentence is split into whitespace tokens, grouped greedily into the
//! longest phrases the lexical tables recognise, and each phrase is resolved
//! against the tables in precedence order. Tokens nothing recognises come back
//! as `[hypothetical]` segments.
//!
//! ```text
//! sentence ─▶ Segmenter ─▶ Resolver ─▶ EntryMatcher (per table)
//!                 │
//!                 ▼
//!             assemble ─▶ TranslationResponse
//! ```

pub mod assembler;
pub mod audio;
pub mod config;
pub mod engine;
pub mod lexicon;
pub mod matcher;
pub mod metrics;
pub mod resolver;
pub mod segmenter;
pub mod server;

pub use assembler::TranslationResponse;
pub use engine::{TranslateError, Translator};
pub use matcher::{MatchKind, MatchResult};

use anyhow::Result;

/// Load every configured table and build a translator from them.
///
/// All tables are read before this returns, so callers can start serving as
/// soon as they hold the translator.
pub fn build_translator(config: &config::Config) -> Result<Translator> {
    let sources = config.table_sources()?;
    let tables = lexicon::load_tables(&sources)?;

    Ok(Translator::new(
        tables,
        audio::AudioUrlDeriver::new(config.audio_base_url.clone()),
        config.phrase_match_kind,
    ))
}
