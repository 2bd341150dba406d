mod model;
mod server;

use std::sync::Arc;

use crate::server::{
    bot,
    config::Config,
    error::AppError,
    router,
    service::{metrics::ServiceMetrics, usage::DatabaseUsageTracker},
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let catalog = startup::load_catalog(&config).await?;
    let tracker = DatabaseUsageTracker::new(db);
    let metrics = Arc::new(ServiceMetrics::new());

    tracing::info!("Starting server");

    let bind_address = config.bind_address;
    let state = AppState::new(
        catalog.clone(),
        tracker.clone(),
        metrics.clone(),
        config.discord_client_id.clone(),
    );

    // Start Discord bot in a separate task
    tokio::spawn(async move {
        if let Err(e) = bot::start::start_bot(&config, catalog, Arc::new(tracker), metrics).await {
            tracing::error!("Discord bot error: {}", e);
        }
    });

    let app = router::router().with_state(state);
    let listener = tokio::net::TcpListener::bind(bind_address).await?;
    tracing::info!("Listening on {}", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
