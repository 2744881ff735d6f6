//! Web surface: the dashboard page and its data endpoint
//!
//! `GET /` serves the single dashboard page; `GET /api/dashboard` loads a
//! fresh Listing table, runs all six derivations, and returns the combined
//! payload. Every request is an independent render pass — no state is shared
//! or cached between requests.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use tracing::{error, info};

use crate::services::{Aggregator, DataLoaderService};
use crate::types::{Dashboard, ImmoboardError, Result};

/// Shared handler state: just the loader, which holds no connection.
#[derive(Clone)]
pub struct AppState {
    loader: Arc<DataLoaderService>,
}

impl AppState {
    pub fn new(loader: DataLoaderService) -> Self {
        Self {
            loader: Arc::new(loader),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/dashboard", get(dashboard_handler))
        .with_state(state)
}

/// Bind and serve until the process is terminated.
pub async fn serve(state: AppState, bind_addr: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!(addr = bind_addr, "dashboard listening");
    axum::serve(listener, router(state)).await?;
    Ok(())
}

async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}

/// One render pass: load, aggregate, respond. A failed load aborts all six
/// charts for this request; there is no partial rendering.
async fn dashboard_handler(
    State(state): State<AppState>,
) -> std::result::Result<Json<Dashboard>, (StatusCode, String)> {
    let listings = state.loader.load().await.map_err(|err| {
        error!(error = %err, "dashboard load failed");
        (status_for(&err), err.to_string())
    })?;

    Ok(Json(Aggregator::dashboard(&listings)))
}

/// Map the error taxonomy onto HTTP statuses: upstream trouble is a gateway
/// problem, everything else is ours.
fn status_for(err: &ImmoboardError) -> StatusCode {
    match err {
        ImmoboardError::Connection(_) => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_error_maps_to_bad_gateway() {
        let err = ImmoboardError::Connection("refused".into());
        assert_eq!(status_for(&err), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_query_error_maps_to_internal_error() {
        let err = ImmoboardError::Query("missing column".into());
        assert_eq!(status_for(&err), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_index_page_embeds_all_six_charts() {
        let page = include_str!("../../assets/index.html");
        for id in [
            "price-histogram",
            "house-types",
            "space-vs-rooms",
            "year-vs-price",
            "top-localities",
            "bottom-localities",
        ] {
            assert!(page.contains(id), "missing chart container {id}");
        }
    }
}
