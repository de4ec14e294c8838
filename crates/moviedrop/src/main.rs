use anyhow::Result;
use clap::Parser;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use moviedrop::{app::create_app, config::Config, state::AppState};

/// moviedrop - ingest movie records over HTTP into a key-value table
#[derive(Parser, Debug)]
#[command(name = "moviedrop")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the server to (local mode only)
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on (local mode only)
    #[arg(long, short, default_value = "3000", env = "PORT")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moviedrop=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let state = init_state(&config).await;

    // Build the application router
    let app = create_app(state);

    // Under the Lambda runtime the adapter owns the event loop; locally
    // we bind a TCP listener instead.
    if std::env::var("AWS_LAMBDA_RUNTIME_API").is_ok() {
        lambda_http::run(app)
            .await
            .map_err(|err| anyhow::anyhow!(err))?;
        return Ok(());
    }

    // Auto-reload support via listenfd
    let mut listenfd = listenfd::ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        // If we are given a tcp listener on listen fd 0, use that one
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        // Otherwise fall back to CLI-specified host:port
        None => {
            let addr = format!("{}:{}", cli.host, cli.port);
            TcpListener::bind(&addr).await?
        }
    };

    tracing::info!("listening on {}", listener.local_addr()?);

    // Run the server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Build application state around the configured storage backend.
#[cfg(feature = "dynamodb")]
async fn init_state(config: &Config) -> AppState {
    use std::sync::Arc;

    use moviedrop::storage::DynamoDbMovieStore;

    tracing::info!(table = %config.table_name, "using DynamoDB movie store");
    let store = DynamoDbMovieStore::from_env(&config.table_name).await;
    AppState::new(Arc::new(store))
}

#[cfg(not(feature = "dynamodb"))]
async fn init_state(_config: &Config) -> AppState {
    tracing::info!("using in-memory movie store");
    let (state, _store) = AppState::in_memory();
    state
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
