use dotenvy::dotenv;
use prompt_translator::{
    api::{self, AppState},
    config::{Settings, database},
    errors::Result,
    providers::{GeminiClient, TextGenerator},
};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; variables may also be set externally
    dotenv().ok();

    // 3. Load settings from config.toml and the environment
    let settings = Settings::from_environment()
        .inspect_err(|e| error!("Failed to load settings: {}", e))?;

    // 4. Connect to the database and create tables
    let db = database::create_connection(&settings.database_url)
        .await
        .inspect_err(|e| error!("Failed to initialize database: {}", e))?;

    // 5. Build the translation client; requests fail per call while no key is set
    let generator = GeminiClient::from_settings(&settings.gemini)?
        .map(|client| Arc::new(client) as Arc<dyn TextGenerator>);
    if generator.is_none() {
        warn!("GEMINI_API_KEY is not set; /translate will answer 500 until it is configured");
    }

    // 6. Serve the API
    let app = api::router(AppState::new(Some(db), generator));
    let listener = tokio::net::TcpListener::bind(&settings.bind_address)
        .await
        .inspect_err(|e| error!("Failed to bind {}: {}", settings.bind_address, e))?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
