//! Dashboard Route
//!
//! - GET / - The rendered dashboard page

use axum::{
    extract::{Query, State},
    response::Html,
};
use std::sync::Arc;

use crate::api::dto::SelectionParams;
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::render::{render_dashboard, DashboardView};
use crate::sales::{pivot, summary, totals};

/// GET /
///
/// Filter by the requested regions, then render the line chart, bar
/// chart, table, and download link for the filtered rows.
pub async fn dashboard(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ApiResult<Html<String>> {
    let selection = SelectionParams::from_pairs(&pairs).selection()?;

    let filtered = state.filtered(&selection);
    let table = pivot(&filtered)?;
    let region_totals = totals(&filtered);

    tracing::debug!(
        regions = %selection.to_list(),
        rows = filtered.len(),
        "Rendering dashboard"
    );

    let page = render_dashboard(&DashboardView {
        selection: &selection,
        filtered: &filtered,
        pivot: &table,
        totals: &region_totals,
        summary: summary(&filtered),
    })?;

    Ok(Html(page))
}
