//! Export Routes
//!
//! CSV download of the filtered rows.
//!
//! - GET /api/v1/export - Filtered data as `sample_sales_data.csv`

use axum::{
    body::Body,
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::api::dto::SelectionParams;
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::sales::{to_csv_bytes, CSV_CONTENT_TYPE, CSV_FILE_NAME};

/// GET /api/v1/export
///
/// Serialize the filtered rows to UTF-8 CSV and offer them as a download.
/// An empty selection yields a header-only file.
pub async fn export_csv(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ApiResult<Response> {
    if !state.config.enable_export {
        return Err(ApiError::NotFound("Export feature is disabled".to_string()));
    }

    let selection = SelectionParams::from_pairs(&pairs).selection()?;
    let filtered = state.filtered(&selection);
    let body = to_csv_bytes(filtered.records())?;

    tracing::info!(
        regions = %selection.to_list(),
        rows = filtered.len(),
        bytes = body.len(),
        "Exporting filtered sales data"
    );

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, format!("{}; charset=utf-8", CSV_CONTENT_TYPE)),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", CSV_FILE_NAME),
            ),
        ],
        Body::from(body),
    )
        .into_response())
}
