//! Sales Routes
//!
//! JSON views of the filtered dataset.
//!
//! - GET /api/v1/regions - Available regions
//! - GET /api/v1/sales - Filtered rows
//! - GET /api/v1/sales/pivot - Date × region pivot
//! - GET /api/v1/sales/totals - Per-region totals, largest first

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{
    PivotResponse, RegionsResponse, SalesRowsResponse, SelectionParams, TotalsResponse,
};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::sales::{pivot, summary, totals, Region, RegionSelection};

fn selection_from(pairs: &[(String, String)]) -> ApiResult<RegionSelection> {
    SelectionParams::from_pairs(pairs).selection()
}

/// GET /api/v1/regions
pub async fn list_regions() -> Json<RegionsResponse> {
    Json(RegionsResponse {
        regions: Region::all().to_vec(),
        default: RegionSelection::all().regions().to_vec(),
    })
}

/// GET /api/v1/sales
pub async fn list_sales(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ApiResult<Json<SalesRowsResponse>> {
    let selection = selection_from(&pairs)?;
    let filtered = state.filtered(&selection);

    Ok(Json(SalesRowsResponse {
        selection: selection.regions().to_vec(),
        summary: summary(&filtered),
        rows: filtered.into_records(),
    }))
}

/// GET /api/v1/sales/pivot
pub async fn sales_pivot(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ApiResult<Json<PivotResponse>> {
    let selection = selection_from(&pairs)?;
    let filtered = state.filtered(&selection);

    Ok(Json(PivotResponse {
        selection: selection.regions().to_vec(),
        pivot: pivot(&filtered)?,
    }))
}

/// GET /api/v1/sales/totals
pub async fn sales_totals(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ApiResult<Json<TotalsResponse>> {
    let selection = selection_from(&pairs)?;
    let filtered = state.filtered(&selection);

    Ok(Json(TotalsResponse {
        selection: selection.regions().to_vec(),
        totals: totals(&filtered),
    }))
}
