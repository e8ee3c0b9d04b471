//! Kraftbox API server.
//!
//! Serves the public marketing-site API and the bearer-protected admin CMS
//! API on one port (default 8080).
//!
//! # Architecture
//!
//! - Axum web framework, JSON in and out
//! - `PostgreSQL` for the catalog, page content, inboxes, and sessions
//! - Hosted object storage for uploaded images
//! - Sentry for error tracking
//!
//! Admin accounts are never created over HTTP; provision them with
//! `kb-cli admin create`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use kraftbox_server::config::ServerConfig;
use kraftbox_server::state::AppState;
use kraftbox_server::{db, routes};
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    let config = ServerConfig::from_env().expect("Failed to load configuration");

    // Sentry hooks panics, so it comes up before anything else can fail.
    let sentry_guard = init_sentry(&config);
    init_tracing(&config);
    if sentry_guard.is_some() {
        tracing::info!("Sentry error tracking enabled");
    }

    let pool = db::create_pool(&config.database_url)
        .await
        .expect("Failed to create database pool");
    tracing::info!("Database pool ready");

    // Migrations are applied out of band: `kb-cli migrate`.

    let state =
        AppState::new(config.clone(), pool).expect("Failed to initialize application state");
    let app = build_router(state);

    let addr = config.socket_addr();
    tracing::info!("kraftbox-server listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Error tracking. The returned guard flushes queued events on drop and
/// must stay alive for the life of the process.
fn init_sentry(config: &ServerConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_deref()?;

    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            attach_stacktrace: true,
            ..Default::default()
        },
    )))
}

/// Tracing subscriber: `RUST_LOG`-style filtering, text or JSON output,
/// warnings and errors forwarded to Sentry.
fn init_tracing(config: &ServerConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "kraftbox_server=info,tower_http=debug".into());

    // JSON for structured log shipping in production, plain text locally.
    let (json_layer, text_layer) = if config.log_json {
        let json = tracing_subscriber::fmt::layer().json().flatten_event(true);
        (Some(json), None)
    } else {
        (None, Some(tracing_subscriber::fmt::layer()))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .with(sentry_tracing::layer().event_filter(sentry_events))
        .init();
}

/// Warnings and errors become Sentry events; info and debug ride along
/// as breadcrumbs on those events.
fn sentry_events(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    use sentry_tracing::EventFilter;
    use tracing::Level;

    match *metadata.level() {
        Level::ERROR | Level::WARN => EventFilter::Event,
        Level::INFO | Level::DEBUG => EventFilter::Breadcrumb,
        _ => EventFilter::Ignore,
    }
}

/// Health probes, the API routes, and the observability layers around
/// them.
fn build_router(state: AppState) -> Router {
    let trace = TraceLayer::new_for_http()
        .make_span_with(|request: &axum::http::Request<_>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                status = tracing::field::Empty,
                latency_ms = tracing::field::Empty,
            )
        })
        .on_response(
            |response: &axum::http::Response<_>, latency: std::time::Duration, span: &Span| {
                span.record("status", response.status().as_u16());
                span.record(
                    "latency_ms",
                    u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                );
                DefaultOnResponse::default().on_response(response, latency, span);
            },
        );

    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .merge(routes::routes())
        .layer(CorsLayer::permissive())
        .layer(trace)
        .with_state(state)
        // Sentry layers sit outermost so they see every request.
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction())
}

/// Liveness probe. Answers as long as the process is up.
async fn health() -> &'static str {
    "ok"
}

/// Readiness probe: round-trips the database before answering OK.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    let db_up = sqlx::query("SELECT 1").fetch_one(state.pool()).await.is_ok();
    if db_up {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// Resolves on Ctrl+C or SIGTERM so in-flight requests get to finish.
async fn shutdown_signal() {
    #[cfg(unix)]
    let sigterm = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        result = tokio::signal::ctrl_c() => result.expect("Failed to install Ctrl+C handler"),
        () = sigterm => {}
    }

    tracing::info!("Shutdown signal received, draining in-flight requests");
}
