//! HTTP API server binary.

use std::sync::Arc;

use clap::Parser;
use ecloud::server::{AppState, serve};
use ecloud_search::{Searcher, SearcherConfig};

/// ECloud help-centre search API server.
#[derive(Parser)]
#[command(name = "ecloud-server", version, about)]
struct Args {
    /// Address to bind.
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on.
    #[arg(long, default_value_t = 8000)]
    port: u16,

    /// Directory for rotated log files.
    #[arg(long, default_value = "logs")]
    log_dir: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _log_guard = ecloud::logging::init(&args.log_dir)?;

    let searcher = Arc::new(Searcher::new(SearcherConfig::default())?);
    let state = AppState { searcher };

    serve(state, &format!("{}:{}", args.host, args.port)).await
}
