use crate::{config::Config, routes::create_router};
use axum::Router;
use std::{future::Future, io::Error};
use tokio::{net::TcpListener, signal};
use tracing::{info, warn};

pub async fn serve(config: &Config) -> Result<(), Error> {
    let listener = TcpListener::bind(config.bind_address()).await?;

    info!(
        "Listening on {}, function bound at /{}",
        listener.local_addr()?,
        config.route
    );

    serve_with_listener(listener, create_router(&config.route), shutdown_signal()).await
}

pub async fn serve_with_listener<S>(
    listener: TcpListener,
    router: Router,
    shutdown: S,
) -> Result<(), Error>
where
    S: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl-C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
