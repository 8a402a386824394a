use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;
use dotbot_backend::{config::Config, routes::create_router, utils::init_logger, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();

    // Load configuration
    let config = Config::from_env()?;
    info!("Configuration loaded: {:?}", config.server);

    // Wire in and initialize the optional services
    let state = AppState::initialize(config.clone()).await;
    info!(
        memory = state.memory.is_available(),
        payment = state.payment.is_available(),
        "Optional services ready"
    );

    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
