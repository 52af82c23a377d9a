//! probe-server entry point.
//!
//! Initializes tracing, reads the pod identity from the environment, builds
//! the router and serves it until SIGTERM/SIGINT.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use probe_server::config::{LogFormat, DEFAULT_HOST, DEFAULT_LOG_FILTER, DEFAULT_PORT};
use probe_server::http::start_server;
use probe_server::{create_router, AppState, PodIdentity};

/// probe-server: toggleable liveness and readiness probes over HTTP
#[derive(Parser, Debug)]
#[command(name = "probe-server", version, about)]
struct Args {
    /// Address to bind
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Log level filter (e.g., "probe_server=info")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

fn init_tracing(filter: &str, format: LogFormat) {
    let registry = tracing_subscriber::registry().with(EnvFilter::new(filter));
    match format {
        LogFormat::Text => registry.with(fmt::layer()).init(),
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    init_tracing(&log_filter, args.log_format);

    let identity = PodIdentity::from_env();
    tracing::info!(
        pod_name = %identity.name,
        pod_ip = %identity.address,
        "Loaded pod identity"
    );

    let app = create_router(AppState::new(identity));

    match start_server(app, &args.host, args.port).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Server failed");
            ExitCode::FAILURE
        }
    }
}
