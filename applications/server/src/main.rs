/// Roster Server - GraphQL user directory
use clap::{Parser, Subcommand};
use roster_server::{build_schema, config::ServerConfig, create_router, state::AppState};
use roster_core::InMemoryUserStore;
use std::{path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "roster-server")]
#[command(about = "GraphQL API over an in-memory user directory", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long, env = "ROSTER_CONFIG")]
        config: Option<PathBuf>,

        /// Override the listening port
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Print the GraphQL schema (SDL) to stdout
    PrintSchema,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster_server=info,roster_core=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config, port } => {
            serve(config, port).await?;
        }
        Commands::PrintSchema => {
            let schema = build_schema(Arc::new(InMemoryUserStore::new()), usize::MAX);
            println!("{}", schema.sdl());
        }
    }

    Ok(())
}

async fn serve(config_path: Option<PathBuf>, port: Option<u16>) -> anyhow::Result<()> {
    // Load configuration
    let mut config = ServerConfig::load(config_path.as_deref())?;
    if let Some(port) = port {
        config.server.port = port;
    }
    config.validate()?;

    tracing::info!("Starting Roster Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let app_state = AppState::from_config(&config);
    tracing::info!(
        users = app_state.store.count().await?,
        seeded = config.store.seed,
        "User store initialized"
    );

    let app = create_router(app_state);
    let addr = config.socket_addr()?;

    tracing::info!("Running a GraphQL API server at http://{}/graphql", addr);
    if config.graphql.ide {
        tracing::info!("GraphiQL IDE available at http://{}/", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
