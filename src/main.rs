use axum::{Router, serve};
use tokio::net::TcpListener;

use hello_api::config::state::AppState;
use hello_api::core::logging::init_tracing;
use hello_api::core::server::{create_app, setup_listener, shutdown_signal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // set up logging
    init_tracing();

    // build our router
    let app: Router = create_app();

    // Listenfd integration (falls back to HOST:PORT from the environment)
    let listener: TcpListener = setup_listener().await?;

    let env = &AppState::instance().environment;
    tracing::info!(
        "Server listening on: {}://{} ({})",
        env.protocol,
        listener.local_addr()?,
        env.environment,
    );

    serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
