//! Serve command
//!
//! Usage: duv serve [--config PATH] [--host HOST] [--port PORT] [--seed PATH] ...
//!
//! Lifecycle: load config and seed (init), run the HTTP server until
//! Ctrl-C (serve), then release the store (dispose). A seed that fails to
//! load aborts before the listener is bound.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Args;
use duv_api::{ApiConfig, AppState, HandlerSettings};
use duv_core::logging_facility;
use tokio::net::TcpListener;

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Configuration file (defaults to ./duv.toml if present)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Bind address
    #[arg(long)]
    pub host: Option<String>,

    /// Bind port
    #[arg(long, short)]
    pub port: Option<u16>,

    /// Seed JSON file; the built-in dataset is used when absent
    #[arg(long)]
    pub seed: Option<PathBuf>,

    /// Log profile: development or production
    #[arg(long)]
    pub log_profile: Option<String>,

    /// Accept declaration updates that reference unknown ships or people
    #[arg(long)]
    pub lenient_declaration_updates: bool,

    /// Reject crew members created without a sid
    #[arg(long)]
    pub require_crew_service_id: bool,
}

impl ServeArgs {
    /// Apply command-line overrides on top of the loaded configuration
    fn apply(&self, config: &mut ApiConfig) {
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(seed) = &self.seed {
            config.seed_path = Some(seed.clone());
        }
        if let Some(profile) = &self.log_profile {
            config.log_profile = profile.clone();
        }
        config.lenient_declaration_updates |= self.lenient_declaration_updates;
        config.require_crew_service_id |= self.require_crew_service_id;
    }
}

/// Execute serve command
pub fn execute(args: ServeArgs) -> Result<()> {
    let mut config = ApiConfig::load(args.config.as_deref()).context("invalid configuration")?;
    args.apply(&mut config);

    let profile = config.profile().map_err(|e| anyhow!(e))?;
    logging_facility::init(profile);

    let runtime = tokio::runtime::Runtime::new().context("cannot start async runtime")?;
    runtime.block_on(run(config))
}

async fn run(config: ApiConfig) -> Result<()> {
    // Init
    let loaded = duv_store::load_seed(config.seed_path.as_deref())
        .context("failed to load seed data")?;
    let (people, ships, declarations) = loaded.store.counts();
    tracing::info!(
        people_len = people,
        ships_len = ships,
        declarations_len = declarations,
        seed_digest = loaded.digest().unwrap_or("fallback"),
        "store initialised"
    );
    let state = AppState::with_settings(loaded.store, HandlerSettings::from(&config));

    // Serve
    let listener = TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("cannot bind {}", config.bind_addr()))?;
    tracing::info!(addr = %listener.local_addr()?, "DUV API listening");

    axum::serve(listener, duv_api::app(state.clone()))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    // Dispose
    match state.into_store() {
        Some(store) => {
            let (people, ships, declarations) = store.counts();
            tracing::info!(
                people_len = people,
                ships_len = ships,
                declarations_len = declarations,
                "store disposed"
            );
        }
        None => tracing::warn!("store still shared at shutdown"),
    }
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown requested"),
        Err(err) => tracing::error!(error = %err, "cannot listen for shutdown signal"),
    }
}
