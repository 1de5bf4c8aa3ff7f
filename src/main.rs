use anyhow::Result;
use quileute_translate::{build_translator, config, server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quileute_translate=info".parse()?)
        )
        .init();

    info!("Starting Quileute translation service");

    // Load configuration from environment
    let config = config::Config::from_env()?;

    // Tables must be fully loaded before the socket is bound
    info!("Loading lexical tables: {}", config.table_precedence.join(" > "));
    let translator = build_translator(&config)?;
    info!(
        "Loaded {} table(s), phrase match threshold: {}",
        translator.table_summaries().len(),
        translator.phrase_threshold()
    );

    let cors = server::cors_layer(&config.allowed_origins)?;
    server::serve(server::AppState::new(translator), cors, config.port).await
}
