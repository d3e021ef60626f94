use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use buoy_server::config::ServerConfig;
use buoy_server::ndbc::NdbcClient;
use buoy_server::stations;
use buoy_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,buoy_server=debug,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();

    let config = ServerConfig::from_env()?;
    info!(?config, "loaded configuration");

    let ndbc = NdbcClient::new(config.ndbc.clone())?;
    let state = AppState::new(ndbc);
    let app = create_router(state, &config.static_dir);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    println!();
    println!("  Gulf of Maine Buoy Monitor");
    println!("  ──────────────────────────────");
    println!("  http://localhost:{}", config.port);
    println!("  Monitoring {} NDBC stations", stations::all().len());
    println!();

    axum::serve(listener, app).await?;
    Ok(())
}
