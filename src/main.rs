use anyhow::{bail, Context, Result};
use axum::{serve, Router};
use blockshift::core::config::Config;
use blockshift::core::routes::build_router;
use blockshift::core::startup::load_roster;
use blockshift::core::state::AppState;
use blockshift::core::tracing_init::init_tracing;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::net::{TcpListener, UnixListener};
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{error, info, Level};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let config_path = if args.len() > 1 {
        PathBuf::from(&args[1])
    } else {
        PathBuf::from("config.toml")
    };

    // Load and validate configuration
    let config = Config::from_file(&config_path)
        .context(format!(
            "Failed to load configuration from '{}'",
            config_path.display()
        ))?;

    // Initialize tracing/logging
    init_tracing(&config.logging)?;

    // One thread: requests are handled strictly one after another
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to build Tokio runtime")?;

    runtime.block_on(async_main(config, config_path))
}

async fn async_main(config: Config, config_path: PathBuf) -> Result<()> {
    info!(
        config_path = %config_path.display(),
        port = ?config.server.port,
        unix_socket = ?config.server.unix_socket,
        storage_backend = ?config.storage.backend,
        log_level = %config.logging.level,
        log_format = %config.logging.format,
        "Block Shift roster starting"
    );

    let roster = load_roster(&config.storage).context("Failed to load roster")?;
    let state = Arc::new(AppState::new(config.clone(), roster));

    // Build the router with middleware
    let app = build_router(state).layer(
        ServiceBuilder::new().layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
        ),
    );

    let tcp_handle = if let Some(port) = config.server.port {
        let addr = format!("{}:{}", config.server.bind_address, port);
        info!(address = %addr, "Starting TCP listener");

        let listener = TcpListener::bind(&addr)
            .await
            .context(format!("Failed to bind TCP listener to {}", addr))?;

        info!(address = %addr, "Roster page available at http://{}/", addr);

        let app_clone = app.clone();
        Some(tokio::spawn(async move {
            serve(listener, app_clone.into_make_service())
                .with_graceful_shutdown(shutdown_signal())
                .await
                .context("TCP server error")
        }))
    } else {
        None
    };

    let unix_handle = match &config.server.unix_socket {
        Some(unix_socket) => Some(spawn_unix_listener(unix_socket, app)?),
        None => None,
    };

    info!("HTTP server(s) started, waiting for shutdown signal");

    match (tcp_handle, unix_handle) {
        (Some(tcp), Some(unix)) => {
            tokio::select! {
                result = tcp => log_server_exit("TCP", result),
                result = unix => log_server_exit("Unix socket", result),
            }
        }
        (Some(tcp), None) => log_server_exit("TCP", tcp.await),
        (None, Some(unix)) => log_server_exit("Unix socket", unix.await),
        (None, None) => {
            error!("No listeners configured");
            bail!("No listeners configured");
        }
    }

    info!("Shutting down gracefully");

    Ok(())
}

fn log_server_exit(kind: &str, result: Result<Result<()>, tokio::task::JoinError>) {
    match result {
        Ok(Ok(())) => {}
        Ok(Err(e)) => error!(listener = kind, error = %e, "Server failed"),
        Err(e) => error!(listener = kind, error = %e, "Server task failed"),
    }
}

/// Serve the router on a Unix socket until a shutdown signal arrives
fn spawn_unix_listener(
    unix_socket: &Path,
    app: Router,
) -> Result<tokio::task::JoinHandle<Result<()>>> {
    info!(path = %unix_socket.display(), "Starting Unix socket listener");

    // Remove existing socket file if it exists
    if unix_socket.exists() {
        std::fs::remove_file(unix_socket)
            .context(format!("Failed to remove existing Unix socket: {}", unix_socket.display()))?;
    }

    let listener = UnixListener::bind(unix_socket)
        .context(format!("Failed to bind Unix socket listener to {}", unix_socket.display()))?;

    info!(path = %unix_socket.display(), "Unix socket listener bound successfully");

    let mut make_service = app.into_make_service();
    Ok(tokio::spawn(async move {
        use tower::Service;

        let shutdown = shutdown_signal();
        tokio::pin!(shutdown);

        loop {
            let (socket, _remote_addr) = tokio::select! {
                _ = &mut shutdown => return Ok::<(), anyhow::Error>(()),
                accepted = listener.accept() => match accepted {
                    Ok(conn) => conn,
                    Err(e) => {
                        error!(error = %e, "Failed to accept Unix socket connection");
                        continue;
                    }
                },
            };

            let tower_service = match make_service.call(&socket).await {
                Ok(svc) => svc,
                Err(infallible) => match infallible {},
            };

            tokio::spawn(async move {
                let socket = hyper_util::rt::TokioIo::new(socket);

                let hyper_service = hyper::service::service_fn(move |request: hyper::Request<hyper::body::Incoming>| {
                    tower_service.clone().call(request)
                });

                if let Err(err) = hyper_util::server::conn::auto::Builder::new(hyper_util::rt::TokioExecutor::new())
                    .serve_connection_with_upgrades(socket, hyper_service)
                    .await
                {
                    error!(error = %err, "Error serving Unix socket connection");
                }
            });
        }
    }))
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }

    info!("Shutdown signal received, starting graceful shutdown");
}
