use payout_desk::{api, config::Config, store::PayoutStore};
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into()),
        )
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // Seed the in-memory store once for the process lifetime
    let store = Arc::new(PayoutStore::seeded());
    tracing::info!(
        payouts = store.dataset().payouts.len(),
        fraud_signals = store.dataset().fraud_signals.len(),
        "seeded review dataset"
    );

    // Create router
    let app = api::create_router(api::AppState::new(store));

    // Bind to address
    let addr = SocketAddr::new(config.bind_address, config.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    tracing::info!("Server listening on {}", addr);

    // Run server
    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}
