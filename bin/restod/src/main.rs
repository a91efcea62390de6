//! `restod` — the resto server binary.
//!
//! Usage:
//!   restod -c <context-name-or-path> [--listen <addr>]
//!
//! The context name resolves to `/etc/resto/<name>.toml`.
//! If a path with `/` or `.` is given, it's used directly.

mod config;
mod routes;

use std::sync::Arc;

use clap::Parser;
use resto_core::Module;
use tracing::info;

use config::ServerConfig;

/// Resto server.
#[derive(Parser, Debug)]
#[command(name = "restod", about = "Resto server")]
struct Cli {
    /// Context name or path to config file.
    #[arg(short = 'c', long = "config", required = true)]
    config: String,

    /// Listen address (overrides default 0.0.0.0:8080).
    #[arg(long = "listen", default_value = "0.0.0.0:8080")]
    listen: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    // Load server configuration.
    let config_path = ServerConfig::resolve_path(&cli.config);
    info!("Loading configuration from {}", config_path.display());
    let server_config = ServerConfig::load(&config_path)?;
    server_config.verify()?;

    // Initialize storage.
    let data_dir = std::path::PathBuf::from(&server_config.storage.data_dir);
    std::fs::create_dir_all(&data_dir)?;

    let core_config = resto_core::ServiceConfig {
        data_dir: Some(data_dir.clone()),
        listen: cli.listen.clone(),
        ..Default::default()
    };

    let sql: Arc<dyn resto_sql::SQLStore> = Arc::new(
        resto_sql::SqliteStore::open(&core_config.resolve_sqlite_path())
            .map_err(|e| anyhow::anyhow!("failed to open SQL store: {}", e))?,
    );

    // Initialize modules.
    let restaurant_module = restaurant::RestaurantModule::new(Arc::clone(&sql))
        .map_err(|e| anyhow::anyhow!("failed to initialize restaurant module: {}", e))?;
    info!("Restaurant module initialized");

    let module_routes = vec![(restaurant_module.name(), restaurant_module.routes())];

    // Build router.
    let app = routes::build_router(module_routes);

    // Start server.
    let listener = tokio::net::TcpListener::bind(&cli.listen).await?;
    info!("Resto server listening on {}", cli.listen);
    axum::serve(listener, app).await?;

    Ok(())
}
