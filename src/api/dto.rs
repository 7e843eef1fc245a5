//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::Serialize;

use crate::api::error::ApiResult;
use crate::sales::{
    DatasetSummary, PivotTable, Region, RegionSelection, RegionTotal, SalesRecord,
};

// ============================================
// SELECTION
// ============================================

/// Region selection read from decoded query pairs
///
/// Accepts repeated `region=<Name>` pairs (what the sidebar form submits)
/// and/or a comma-separated `regions=<A,B>` value. With neither present
/// and no `filtered` marker, every region is selected. The form always
/// sends `filtered=1`, so an empty submission selects nothing.
#[derive(Debug, Default)]
pub struct SelectionParams {
    names: Vec<String>,
    explicit: bool,
}

impl SelectionParams {
    /// Collect the selection keys from `Query<Vec<(String, String)>>` pairs
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let mut params = SelectionParams::default();

        for (key, value) in pairs {
            match key.as_str() {
                "region" => {
                    params.explicit = true;
                    params.names.push(value.clone());
                }
                "regions" => {
                    params.explicit = true;
                    params
                        .names
                        .extend(value.split(',').map(|s| s.trim().to_string()));
                }
                "filtered" => params.explicit = true,
                _ => {}
            }
        }

        params
    }

    /// Resolve into a selection, rejecting unknown region names
    pub fn selection(&self) -> ApiResult<RegionSelection> {
        if !self.explicit {
            return Ok(RegionSelection::all());
        }
        Ok(RegionSelection::from_names(&self.names)?)
    }
}

// ============================================
// SALES DTOs
// ============================================

/// Filtered rows response
#[derive(Debug, Serialize)]
pub struct SalesRowsResponse {
    /// Regions the rows were filtered to
    pub selection: Vec<Region>,
    /// Rows in dataset order
    pub rows: Vec<SalesRecord>,
    /// Headline statistics for the rows
    pub summary: DatasetSummary,
}

/// Pivot response
#[derive(Debug, Serialize)]
pub struct PivotResponse {
    pub selection: Vec<Region>,
    #[serde(flatten)]
    pub pivot: PivotTable,
}

/// Totals response
#[derive(Debug, Serialize)]
pub struct TotalsResponse {
    pub selection: Vec<Region>,
    /// Per-region totals, largest first
    pub totals: Vec<RegionTotal>,
}

/// Available regions
#[derive(Debug, Serialize)]
pub struct RegionsResponse {
    pub regions: Vec<Region>,
    /// Regions selected when no filter is given
    pub default: Vec<Region>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy, unhealthy
    pub status: String,
    /// Number of rows in the generated dataset
    pub dataset_rows: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::Query, http::Uri};

    fn parse(uri: &'static str) -> ApiResult<RegionSelection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&Uri::from_static(uri)).unwrap();
        SelectionParams::from_pairs(&pairs).selection()
    }

    #[test]
    fn test_no_params_selects_all() {
        assert!(SelectionParams::from_pairs(&[]).selection().unwrap().is_all());
        assert!(parse("/").unwrap().is_all());
        assert!(parse("/?page=2").unwrap().is_all());
    }

    #[test]
    fn test_repeated_region_pairs() {
        let selection = parse("/?filtered=1&region=West&region=North").unwrap();
        assert_eq!(selection.regions(), &[Region::North, Region::West]);
    }

    #[test]
    fn test_comma_list() {
        let selection = parse("/?regions=South%2CEast").unwrap();
        assert_eq!(selection.regions(), &[Region::South, Region::East]);

        let selection = parse("/?regions=south,+east").unwrap();
        assert_eq!(selection.regions(), &[Region::South, Region::East]);
    }

    #[test]
    fn test_mixed_keys() {
        let selection = parse("/?filtered=1&region=North&regions=west").unwrap();
        assert_eq!(selection.regions(), &[Region::North, Region::West]);
    }

    #[test]
    fn test_empty_submission_selects_none() {
        assert!(parse("/?filtered=1").unwrap().is_empty());
        assert!(parse("/?filtered=1&regions=").unwrap().is_empty());
    }

    #[test]
    fn test_unknown_region_rejected() {
        assert!(parse("/?region=Central").is_err());
    }
}
