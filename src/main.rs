#![allow(missing_docs)]

//! Bilio AI chat server.
//!
//! HTTP mediation layer between the chat client and the generative-language
//! API: rule shield, local tools, session memory, search augmentation,
//! persona instructions, and output armor around every upstream call.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use bilio::config::BilioConfig;
use bilio::logging;
use bilio::ocr::{RemoteOcrClient, TextExtractor};
use bilio::pipeline::ChatPipeline;
use bilio::search::GoogleSearchClient;
use bilio::server;
use bilio::session::SessionStore;
use bilio::upstream::cache::ResponseCache;
use bilio::upstream::GeminiClient;

#[derive(Debug, Parser)]
#[command(name = "bilio", about = "Bilio AI chat server", version)]
struct Cli {
    /// Path to the config file (overrides BILIO_CONFIG_PATH).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Bind port override.
    #[arg(long)]
    port: Option<u16>,

    /// Log to stderr only, skipping the rotating JSON file.
    #[arg(long)]
    console_only: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before config so env overrides see it.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    if let Some(path) = &cli.config {
        // The config loader resolves the path through this variable.
        std::env::set_var("BILIO_CONFIG_PATH", path);
    }

    let mut config = BilioConfig::load().context("failed to load configuration")?;
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let logs_dir = (!cli.console_only).then(|| std::path::Path::new(&config.paths.logs_dir));
    let _logging_guard = logging::init(logs_dir).context("failed to initialise logging")?;

    info!(version = env!("CARGO_PKG_VERSION"), "bilio starting");

    if config.upstream.api_key.is_empty() {
        anyhow::bail!("no upstream API key configured (set GEMINI_API_KEY)");
    }
    if config.search.api_key.is_empty() || config.search.cse_id.is_empty() {
        warn!("search credentials missing, web lookups will fail and degrade to unaugmented answers");
    }

    let model = Arc::new(
        GeminiClient::new(
            &config.upstream.base_url,
            &config.upstream.api_key,
            Duration::from_secs(config.upstream.timeout_seconds),
        )
        .context("failed to build upstream client")?,
    );

    let search = Arc::new(
        GoogleSearchClient::new(
            &config.search.base_url,
            &config.search.api_key,
            &config.search.cse_id,
            Duration::from_secs(config.search.timeout_seconds),
        )
        .context("failed to build search client")?,
    );

    let ocr: Option<Arc<dyn TextExtractor>> = match &config.ocr.base_url {
        Some(url) => {
            info!(url = %url, "OCR collaborator enabled");
            Some(Arc::new(
                RemoteOcrClient::new(url, Duration::from_secs(config.ocr.timeout_seconds))
                    .context("failed to build OCR client")?,
            ))
        }
        None => {
            info!("no OCR endpoint configured, image requests will be answered without image text");
            None
        }
    };

    let sessions = Arc::new(SessionStore::new(Duration::from_secs(
        config.session.ttl_seconds,
    )));
    let cache = ResponseCache::new(Duration::from_secs(config.upstream.cache_ttl_seconds));

    let pipeline = Arc::new(ChatPipeline::new(
        Arc::clone(&sessions),
        search,
        model,
        ocr,
        cache,
        config.upstream.default_model.clone(),
        config.search.result_count,
        config.ocr.language.clone(),
    ));

    let sweeper = server::spawn_maintenance_sweeper(
        Arc::clone(&pipeline),
        Duration::from_secs(config.session.sweep_interval_seconds),
    );

    let app = server::router(pipeline);
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(addr = %addr, "listening");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for shutdown signal");
        }
        info!("received shutdown signal");
    })
    .await
    .context("server error")?;

    sweeper.abort();
    info!("bilio shut down cleanly");
    Ok(())
}
