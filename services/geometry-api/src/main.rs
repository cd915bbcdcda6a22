//! Geometry API Server
//!
//! Parses WKT-like geometry text into GeoJSON lines, either over HTTP or
//! once for a single input file.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use geo_common::CoordinateOrder;
use geometry_api::{build_router, file, ApiConfig, AppState};
use wkt_parser::{GeometryParser, ParserConfig};

/// Geometry API Server
#[derive(Parser, Debug)]
#[command(name = "geometry-api")]
#[command(about = "Parse WKT-like geometry text into drawable coordinate sequences")]
struct Args {
    /// Listen address
    #[arg(short, long, default_value = "0.0.0.0:8090", env = "GEOMETRY_API_LISTEN_ADDR")]
    listen: String,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Configuration file (YAML)
    #[arg(long, default_value = "config/geometry-api.yaml", env = "GEOMETRY_API_CONFIG")]
    config: PathBuf,

    /// Parse this file once, print GeoJSON to stdout and exit
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Coordinate order for untagged input (latlng or lnglat)
    #[arg(long)]
    order: Option<CoordinateOrder>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize tracing; stdout is reserved for one-shot output
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .json()
        .init();

    let mut config = ApiConfig::load(&args.config)?;
    if let Some(order) = args.order {
        config.default_order = order;
    }
    config.pretty |= args.pretty;

    if let Some(input) = &args.input {
        let parser = GeometryParser::new(ParserConfig::with_order(config.default_order));
        let json = file::parse_file(input, &parser, config.pretty)?;
        println!("{}", json);
        return Ok(());
    }

    run_server(&args.listen, config).await
}

async fn run_server(listen: &str, config: ApiConfig) -> Result<()> {
    let prometheus_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .context("Failed to install Prometheus recorder")?;

    info!("Prometheus metrics exporter initialized");
    info!(
        default_order = %config.default_order,
        "Starting geometry API server"
    );

    let state = Arc::new(AppState::new(config).with_prometheus(prometheus_handle));
    let app = build_router(state);

    let addr: SocketAddr = listen
        .parse()
        .with_context(|| format!("Invalid listen address: {}", listen))?;

    info!("Geometry API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server failed")?;

    info!("Geometry API stopped");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.ok();
    info!("Received shutdown signal");
}
