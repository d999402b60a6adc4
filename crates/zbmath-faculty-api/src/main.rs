//! Faculty dashboard backend - entry point.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use zbmath_faculty_api::cache::ProfileCache;
use zbmath_faculty_api::config::Config;
use zbmath_faculty_api::fetcher::ProfileFetcher;
use zbmath_faculty_api::server::{self, AppState};
use zbmath_faculty_api::ZbmathClient;

#[derive(Parser, Debug)]
#[command(name = "zbmath-faculty-api")]
#[command(about = "Faculty bibliometrics backend for the zbMATH Open API")]
#[command(version)]
struct Cli {
    /// HTTP server port
    #[arg(long, default_value = "5000", env = "PORT")]
    port: u16,

    /// Comma-separated author identifiers overriding the default roster
    #[arg(long, env = "FACULTY_AUTHORS", value_delimiter = ',')]
    faculty: Option<Vec<String>>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    let mut config = Config::from_env()?;
    if let Some(faculty) = cli.faculty {
        config.faculty = faculty;
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        port = cli.port,
        faculty = ?config.faculty,
        cache_ttl = ?config.cache_ttl,
        "Starting faculty dashboard backend"
    );

    let client = ZbmathClient::new(&config)?;
    let fetcher = ProfileFetcher::new(client);
    let cache = Arc::new(ProfileCache::new(Arc::new(fetcher), config.cache_ttl));

    let state = AppState { cache, faculty: config.faculty };
    server::run(state, cli.port).await
}
