use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::errors::WardenError;
use crate::models::SeverityCounts;
use crate::pipeline::aggregate;
use crate::store::ResultStore;

/// Gauge state behind the `/metrics` endpoint. The refresh task is the only
/// writer; each tick replaces the whole tally rather than adjusting it, so
/// the gauges can never drift from the stored results.
pub type SharedCounts = Arc<RwLock<SeverityCounts>>;

pub fn shared_counts() -> SharedCounts {
    Arc::new(RwLock::new(SeverityCounts::default()))
}

pub fn build_router(counts: SharedCounts) -> Router {
    Router::new()
        .route("/metrics", get(handle_metrics))
        .with_state(counts)
}

async fn handle_metrics(State(counts): State<SharedCounts>) -> impl IntoResponse {
    let c = *counts.read().await;
    let body = format!(
        "# HELP vuln_critical Number of CRITICAL vulnerabilities\n\
         # TYPE vuln_critical gauge\n\
         vuln_critical {}\n\
         # HELP vuln_high Number of HIGH vulnerabilities\n\
         # TYPE vuln_high gauge\n\
         vuln_high {}\n\
         # HELP vuln_medium Number of MEDIUM vulnerabilities\n\
         # TYPE vuln_medium gauge\n\
         vuln_medium {}\n\
         # HELP vuln_low Number of LOW vulnerabilities\n\
         # TYPE vuln_low gauge\n\
         vuln_low {}\n",
        c.critical, c.high, c.medium, c.low,
    );
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        body,
    )
}

/// Re-derives the gauge values from a fresh read of every stored result.
/// A store failure keeps the previous values; the scrape endpoint stays up.
pub async fn refresh<S: ResultStore>(store: &S, counts: &SharedCounts) {
    match store.load_all().await {
        Ok(results) => {
            let tally = aggregate(results.iter());
            *counts.write().await = tally;
        }
        Err(e) => warn!(error = %e, "Metrics refresh failed, keeping previous values"),
    }
}

/// Serves `/metrics` on the given port, recounting every `interval` from the
/// store. Runs until the process is stopped.
pub async fn serve<S>(store: S, port: u16, interval: Duration) -> Result<(), WardenError>
where
    S: ResultStore + Send + Sync + 'static,
{
    let counts = shared_counts();
    refresh(&store, &counts).await;

    let ticker_counts = counts.clone();
    tokio::spawn(async move {
        let mut tick = tokio::time::interval(interval);
        tick.tick().await; // first tick fires immediately, already refreshed
        loop {
            tick.tick().await;
            refresh(&store, &ticker_counts).await;
        }
    });

    let app = build_router(counts);
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, interval_secs = interval.as_secs(), "Metrics exporter running");

    axum::serve(listener, app)
        .await
        .map_err(|e| WardenError::Internal(format!("Metrics server error: {e}")))?;

    Ok(())
}
