use estate_server::config::Config;
use estate_server::repositories::{PropertyStore, load_seed_file, seed_if_empty};
use estate_server::{AppState, create_router};
use sqlx::mysql::MySqlPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logging: RUST_LOG se presente, altrimenti default verboso per il crate
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,estate_server=debug,tower_http=info")),
        )
        .init();

    // Inizializza la configurazione
    let config = Config::from_env()?;
    config.print_info();

    // Pool di connessioni, creato una sola volta
    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .max_lifetime(Duration::from_secs(config.connection_lifetime_secs))
        .connect(&config.database_url)
        .await?;
    info!("Connected to database");

    // Schema (tabella properties + indici)
    sqlx::migrate!("./migrations").run(&pool).await?;
    info!("Migrations applied");

    let state = Arc::new(AppState::new(pool));

    if let Some(seed_file) = &config.seed_file {
        let documents = load_seed_file(seed_file).await?;
        let inserted = seed_if_empty(state.store.as_ref(), &documents).await?;
        info!("Seed file {} processed ({} inserted)", seed_file, inserted);
    } else if state.store.count(&Default::default()).await? == 0 {
        warn!("Store is empty and no SEED_FILE is configured");
    }

    let app = create_router(state);

    let listener = TcpListener::bind(config.bind_address()).await?;
    info!("Server listening on http://{}", config.bind_address());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl+C: {}", err);
        std::future::pending::<()>().await;
    }
    info!("Received Ctrl+C, shutting down");
}
