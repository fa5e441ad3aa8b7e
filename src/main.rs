use planora_api::{config::Config, create_app_state, create_router, logger};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file, if there is one
    dotenvy::dotenv().ok();
    logger::init_logger();

    let config = Config::from_env()?;

    let app_state = create_app_state(&config.database_url, config.max_connections).await?;

    let app = create_router(app_state, &config.allowed_origins);

    // Start the server
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        // Without a signal handler, keep serving until the process is killed.
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
