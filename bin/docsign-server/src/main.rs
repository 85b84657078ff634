//! # Configuration
//!
//! The server is configured through:
//! - Base configuration file (`base_config.ron`)
//! - Environment variables prefixed with `SECSPACE_` (override base config)
//!
//! ## Base Configuration
//!
//! The default configuration is loaded from `base_config.ron`:
//!
//! ```ron
//! Config(
//!     app: AppConfig(
//!         listen: "localhost:59060",
//!         cors_allowed_origins: ["*"],
//!     ),
//!     ledger: LedgerConfig(
//!         seed_path: None,
//!         notarization_fee: FeeConfig(
//!             amount: 80,
//!             currency: "MYR",
//!         ),
//!     ),
//! )
//! ```
//!
//! ## Environment Variable Overrides
//!
//! Use double underscores (`__`) to override nested configuration fields:
//!
//! ```bash
//! export SECSPACE_APP__LISTEN="0.0.0.0:59060"
//! export SECSPACE_APP__CORS_ALLOWED_ORIGINS='["http://localhost:3000"]'
//!
//! # Start from another seed file instead of the embedded demo company
//! export SECSPACE_LEDGER__SEED_PATH="./seed.ron"
//! export SECSPACE_LEDGER__NOTARIZATION_FEE__AMOUNT="120"
//!
//! cargo run --bin secspace-docsign-server
//! ```
//!
//! ## CORS Configuration
//!
//! The `cors_allowed_origins` field controls cross-origin resource sharing:
//! - **Empty array `[]`**: CORS is disabled
//! - **Specific origins**: Only listed origins are allowed
//! - **Wildcard `["*"]`**: All origins are allowed (default for development)
//!
//! # Logging
//!
//! Logging is controlled via the `RUST_LOG` environment variable. Defaults to `info` level.
//!
//! The server logs:
//! - **HTTP requests**: Method, path, status code, and duration for all incoming requests
//! - **Client errors (4xx)**: Logged at `WARN` level with error details
//! - **Server errors (5xx)**: Logged at `ERROR` level with error details
//! - **Not found (404)**: Logged at `INFO` level
//! - **Notarization fees**: Logged at `INFO` level by the billing consumer
//!
//! # Shutdown
//!
//! On Ctrl-C the server stops accepting requests, drains in-flight ones, then stops the
//! ledger runtime. The billing consumer exits once the runtime drops its event sender.

use core::str::FromStr;
use std::sync::Arc;

use anyhow::anyhow;
use axum::http::{HeaderValue, Method, header};
use chrono::Utc;
use secspace_docsign_engine::{LedgerEngine, LedgerRuntimeConfig};
use secspace_docsign_server::{App, billing, config, seed};
use tokio::{net::TcpListener, signal, sync::mpsc, task};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{Subscriber, subscriber};
use tracing_subscriber::{EnvFilter, Registry, fmt::format::FmtSpan, layer::SubscriberExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = task::spawn_blocking(config::get_configuration).await??;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    subscriber::set_global_default(make_tracing_subscriber(env_filter))?;

    let ledger = {
        let seed_path = config.ledger.seed_path.clone();
        let seed = task::spawn_blocking(move || seed::load_seed(seed_path.as_deref())).await??;

        seed::seed_ledger(seed, config.ledger.notarization_fee.into(), Utc::now())?
    };

    let (event_sender, event_receiver) = mpsc::unbounded_channel();
    let billing_handle = tokio::spawn(billing::run_billing_consumer(event_receiver));

    let engine = {
        let ledger_runtime_config =
            LedgerRuntimeConfig::builder().event_sender(event_sender).build();

        LedgerEngine::new(ledger).start_ledger_runtime(ledger_runtime_config).map(Arc::new)?
    };

    let axum_handle = {
        let app = App::builder().engine(engine.clone()).build();
        let router = secspace_docsign_server::create_router(app);
        let cors = create_cors_layer(&config.app.cors_allowed_origins)?;
        let router = router.layer(TraceLayer::new_for_http()).layer(cors);

        let listener = TcpListener::bind(&config.app.listen)
            .await
            .inspect(|_| tracing::info!("server listening at {}", config.app.listen))?;

        tokio::spawn(async {
            axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await
        })
    };

    axum_handle.await??;

    let engine =
        Arc::try_unwrap(engine).map_err(|_| anyhow!("ledger engine is still shared"))?;
    let ledger = task::spawn_blocking(move || engine.stop_ledger_runtime()).await??.into_ledger();

    let charged = billing_handle.await?;
    tracing::info!(documents = ledger.len(), charged, "server stopped");

    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(e) => {
            tracing::error!("failed to listen for shutdown signal: {e}");
            std::future::pending::<()>().await;
        },
    }
}

fn create_cors_layer<S>(allowed_origins: &[S]) -> anyhow::Result<CorsLayer>
where
    S: AsRef<str>,
{
    if allowed_origins.iter().map(AsRef::as_ref).any(|s| s == "*") {
        return Ok(CorsLayer::permissive());
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .map(AsRef::as_ref)
        .map(FromStr::from_str)
        .collect::<Result<_, _>>()?;

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    Ok(cors)
}

fn make_tracing_subscriber(env_filter: EnvFilter) -> impl Subscriber {
    Registry::default()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_line_number(true)
                .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE),
        )
        .with(env_filter)
}
