use eventory::api;
use eventory::auth::SessionTokens;
use eventory::config::AppConfig;
use eventory::store::{EventStore, JsonStore, PgStore, UserStore};

use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "eventory=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Eventory v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::from_env();

    // DATABASE_URL selects Postgres; otherwise events live in the JSON data
    // file. Both stores serve the same traits, handlers never know which.
    let (events, users): (Arc<dyn EventStore>, Arc<dyn UserStore>) = match &config.database_url {
        Some(database_url) => {
            info!("Connecting to database...");
            let store = Arc::new(PgStore::connect(database_url).await?);
            (store.clone() as Arc<dyn EventStore>, store as Arc<dyn UserStore>)
        }
        None => {
            info!("Using JSON file storage at {}", config.data_file.display());
            let store = Arc::new(JsonStore::open(&config.data_file)?);
            (store.clone() as Arc<dyn EventStore>, store as Arc<dyn UserStore>)
        }
    };

    let tokens = SessionTokens::new(&config.session_secret, config.session_ttl_secs);

    let app = api::build_router(events, users, tokens)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = config.bind_addr();
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
