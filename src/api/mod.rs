//! Sales Overview HTTP API
//!
//! HTTP layer for the dashboard, built with Axum. Every user interaction
//! is a request; the handler filters the shared dataset and renders the
//! response from scratch.
//!
//! # Endpoints
//!
//! ## Dashboard
//! - `GET /` - Rendered dashboard page
//!
//! ## Sales
//! - `GET /api/v1/regions` - Available regions
//! - `GET /api/v1/sales` - Filtered rows
//! - `GET /api/v1/sales/pivot` - Date × region pivot
//! - `GET /api/v1/sales/totals` - Per-region totals
//!
//! ## Export
//! - `GET /api/v1/export` - Filtered rows as a CSV download
//!
//! ## Health
//! - `GET /health/live` - Liveness check
//! - `GET /health/ready` - Readiness check
//! - `GET /health` - Full health status
//!
//! All data endpoints take the same selection query: repeated
//! `region=<Name>` pairs and/or `regions=<A,B>`.
//!
//! # Example
//!
//! ```rust,ignore
//! use sales_overview::api::{serve, AppState};
//! use sales_overview::config::ApiConfig;
//! use sales_overview::sales::GeneratorParams;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ApiConfig::default();
//!     let state = AppState::generate(&GeneratorParams::default(), config.clone())?;
//!     serve(state, &config).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/regions", get(routes::sales::list_regions))
        .route("/sales", get(routes::sales::list_sales))
        .route("/sales/pivot", get(routes::sales::sales_pivot))
        .route("/sales/totals", get(routes::sales::sales_totals))
        .route("/export", get(routes::export::export_csv));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::dashboard::dashboard))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the HTTP server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Sales dashboard listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Sales dashboard shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sales::{from_csv_bytes, GeneratorParams, Region};
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let state = AppState::generate(&GeneratorParams::default(), ApiConfig::default()).unwrap();
        build_router(state)
    }

    async fn send_get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        serde_json::from_slice(&body_bytes(response).await).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let response = send_get(create_test_app(), "/health/live").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let response = send_get(create_test_app(), "/health/ready").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let response = send_get(create_test_app(), "/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["dataset_rows"], 48);
    }

    #[tokio::test]
    async fn test_dashboard_page() {
        let response = send_get(create_test_app(), "/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/html"));

        let html = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(html.contains("Sales Overview Dashboard"));
        assert_eq!(html.matches("<td class=\"index\">").count(), 48);
    }

    #[tokio::test]
    async fn test_dashboard_form_submission() {
        let response = send_get(create_test_app(), "/?filtered=1&region=North&region=East").await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = String::from_utf8(body_bytes(response).await).unwrap();
        assert_eq!(html.matches("<td class=\"index\">").count(), 24);
    }

    #[tokio::test]
    async fn test_dashboard_unknown_region() {
        let response = send_get(create_test_app(), "/?region=Central").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "UNKNOWN_REGION");
    }

    #[tokio::test]
    async fn test_list_regions() {
        let response = send_get(create_test_app(), "/api/v1/regions").await;
        let json = body_json(response).await;
        assert_eq!(
            json["regions"],
            serde_json::json!(["North", "South", "East", "West"])
        );
    }

    #[tokio::test]
    async fn test_sales_rows_filtered() {
        let response = send_get(create_test_app(), "/api/v1/sales?regions=West").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let rows = json["rows"].as_array().unwrap();
        assert_eq!(rows.len(), 12);
        assert!(rows.iter().all(|r| r["Region"] == "West"));
        assert_eq!(json["summary"]["rows"], 12);
    }

    #[tokio::test]
    async fn test_sales_pivot() {
        let response = send_get(create_test_app(), "/api/v1/sales/pivot?regions=West,North").await;
        let json = body_json(response).await;

        assert_eq!(json["columns"], serde_json::json!(["North", "West"]));
        assert_eq!(json["rows"].as_array().unwrap().len(), 12);
        assert_eq!(json["rows"][0]["date"], "2023-01-31");
    }

    #[tokio::test]
    async fn test_sales_totals_sorted() {
        let response = send_get(create_test_app(), "/api/v1/sales/totals").await;
        let json = body_json(response).await;

        let totals: Vec<u64> = json["totals"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["total"].as_u64().unwrap())
            .collect();
        assert_eq!(totals.len(), 4);
        assert!(totals.windows(2).all(|w| w[0] >= w[1]));
    }

    #[tokio::test]
    async fn test_export_csv() {
        let response = send_get(create_test_app(), "/api/v1/export?regions=South,East").await;
        assert_eq!(response.status(), StatusCode::OK);

        let headers = response.headers();
        assert!(headers[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/csv"));
        assert_eq!(
            headers[header::CONTENT_DISPOSITION].to_str().unwrap(),
            "attachment; filename=\"sample_sales_data.csv\""
        );

        let bytes = body_bytes(response).await;
        assert!(bytes.starts_with(b"Date,Region,Sales\n"));

        let records = from_csv_bytes(&bytes).unwrap();
        assert_eq!(records.len(), 24);
        assert!(records
            .iter()
            .all(|r| r.region == Region::South || r.region == Region::East));
    }

    #[tokio::test]
    async fn test_export_empty_selection_is_header_only() {
        let response = send_get(create_test_app(), "/api/v1/export?filtered=1").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_bytes(response).await, b"Date,Region,Sales\n");
    }

    #[tokio::test]
    async fn test_export_disabled() {
        let config = ApiConfig {
            enable_export: false,
            ..ApiConfig::default()
        };
        let state = AppState::generate(&GeneratorParams::default(), config).unwrap();
        let response = send_get(build_router(state), "/api/v1/export").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
