use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use kidtask_backend::io::{create_router, AppState};
use kidtask_backend::storage::ConfigRepository;
use kidtask_backend::Backend;

// One thread: requests are handled strictly one after another
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize logging; RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ConfigRepository::in_working_directory().load()?;
    info!("Using data directory {:?}", config.data_directory);

    let backend = Backend::open(config.connection())?;
    let app = create_router(AppState::new(backend), &config.allowed_origin)?;

    let listener = tokio::net::TcpListener::bind(config.bind_address.as_str())
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_address))?;
    info!("Listening on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
