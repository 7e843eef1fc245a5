//! Derived views over the sales dataset
//!
//! Each view is a read-only projection of a (usually filtered) dataset:
//! - `filter`: rows whose region is selected
//! - `pivot`: date-indexed table with one column per region
//! - `totals`: per-region sums, largest first
//! - `summary`: headline statistics

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use super::error::{SalesError, SalesResult};
use super::generator::{generate, GeneratorParams};
use super::types::{Region, RegionSelection, SalesDataset, SalesRecord};

/// Keep only the rows whose region is in `selection`, preserving order
pub fn filter(dataset: &SalesDataset, selection: &RegionSelection) -> SalesDataset {
    dataset
        .iter()
        .filter(|r| selection.contains(r.region))
        .cloned()
        .collect::<Vec<_>>()
        .into()
}

/// Generate the dataset and keep the regions named in `regions`
///
/// `regions` is a comma-separated list such as `"North,East"`; `None`
/// keeps every region. Unknown names are rejected.
pub fn load_filtered(params: &GeneratorParams, regions: Option<&str>) -> SalesResult<SalesDataset> {
    let selection = match regions {
        Some(list) => RegionSelection::parse_list(list)?,
        None => RegionSelection::all(),
    };

    let filtered = filter(&generate(params)?, &selection);

    tracing::debug!(
        regions = %selection.to_list(),
        rows = filtered.len(),
        "Filtered dataset"
    );

    Ok(filtered)
}

/// Date × region reshaping of a dataset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PivotTable {
    /// Column regions, sorted alphabetically by name
    pub columns: Vec<Region>,
    /// Rows in ascending date order
    pub rows: Vec<PivotRow>,
}

/// One date's values, aligned with `PivotTable::columns`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PivotRow {
    pub date: NaiveDate,
    pub values: Vec<Option<u32>>,
}

impl PivotTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Values of a single column in date order
    pub fn column(&self, region: Region) -> Option<Vec<Option<u32>>> {
        let idx = self.columns.iter().position(|c| *c == region)?;
        Some(self.rows.iter().map(|row| row.values[idx]).collect())
    }

    /// Largest value anywhere in the table
    pub fn max_value(&self) -> Option<u32> {
        self.rows
            .iter()
            .flat_map(|row| row.values.iter().flatten())
            .copied()
            .max()
    }
}

/// Reshape into one row per date and one column per region
///
/// Fails if any (date, region) pair appears twice.
pub fn pivot(dataset: &SalesDataset) -> SalesResult<PivotTable> {
    let mut columns: Vec<Region> = Vec::new();
    for record in dataset {
        if !columns.contains(&record.region) {
            columns.push(record.region);
        }
    }
    columns.sort_by_key(|r| r.name());

    let mut cells: BTreeMap<NaiveDate, HashMap<Region, u32>> = BTreeMap::new();
    for record in dataset {
        let row = cells.entry(record.date).or_default();
        if row.insert(record.region, record.sales).is_some() {
            return Err(SalesError::DuplicateEntry {
                date: record.date,
                region: record.region,
            });
        }
    }

    let rows = cells
        .into_iter()
        .map(|(date, row)| PivotRow {
            date,
            values: columns.iter().map(|c| row.get(c).copied()).collect(),
        })
        .collect();

    Ok(PivotTable { columns, rows })
}

/// Total sales for one region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegionTotal {
    pub region: Region,
    pub total: u64,
}

/// Sum sales per region, sorted by total descending
///
/// Equal totals are ordered alphabetically by region name.
pub fn totals(dataset: &SalesDataset) -> Vec<RegionTotal> {
    let mut sums: HashMap<Region, u64> = HashMap::new();
    for record in dataset {
        *sums.entry(record.region).or_insert(0) += u64::from(record.sales);
    }

    let mut totals: Vec<RegionTotal> = sums
        .into_iter()
        .map(|(region, total)| RegionTotal { region, total })
        .collect();
    totals.sort_by(|a, b| {
        b.total
            .cmp(&a.total)
            .then_with(|| a.region.name().cmp(b.region.name()))
    });
    totals
}

/// Headline statistics for a dataset
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub rows: usize,
    pub total: u64,
    pub mean: Option<f64>,
    pub min: Option<u32>,
    pub max: Option<u32>,
}

pub fn summary(dataset: &SalesDataset) -> DatasetSummary {
    let total: u64 = dataset.iter().map(|r| u64::from(r.sales)).sum();
    let rows = dataset.len();

    DatasetSummary {
        rows,
        total,
        mean: (rows > 0).then(|| total as f64 / rows as f64),
        min: dataset.iter().map(|r| r.sales).min(),
        max: dataset.iter().map(|r| r.sales).max(),
    }
}

/// Filtered rows paired with a fresh 0-based index
pub fn indexed(dataset: &SalesDataset) -> impl Iterator<Item = (usize, &SalesRecord)> {
    dataset.iter().enumerate()
}
