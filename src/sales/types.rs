//! Core data types for the sales dataset
//!
//! This module defines the fundamental types used throughout the dashboard:
//! - `Region`: The fixed four-valued sales region
//! - `SalesRecord`: A single monthly observation for one region
//! - `SalesDataset`: An ordered collection of records
//! - `RegionSelection`: The subset of regions a user has picked

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::{SalesError, SalesResult};

/// Sales region
///
/// Declaration order is the generation order and the order in which
/// filter options are offered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    North,
    South,
    East,
    West,
}

impl Region {
    /// Get all regions for iteration
    pub fn all() -> &'static [Region] {
        &[Region::North, Region::South, Region::East, Region::West]
    }

    /// Capitalized display name
    pub fn name(&self) -> &'static str {
        match self {
            Region::North => "North",
            Region::South => "South",
            Region::East => "East",
            Region::West => "West",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Region {
    type Err = SalesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Region::all()
            .iter()
            .copied()
            .find(|r| r.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| SalesError::UnknownRegion(trimmed.to_string()))
    }
}

/// A single sales observation
///
/// Field names serialize as the exported column headers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SalesRecord {
    /// Calendar month-end date
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    /// Region the sales were made in
    #[serde(rename = "Region")]
    pub region: Region,
    /// Sales amount in whole dollars
    #[serde(rename = "Sales")]
    pub sales: u32,
}

impl SalesRecord {
    pub fn new(date: NaiveDate, region: Region, sales: u32) -> Self {
        Self { date, region, sales }
    }
}

/// Ordered, in-memory sales table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalesDataset {
    records: Vec<SalesRecord>,
}

impl SalesDataset {
    pub fn new(records: Vec<SalesRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SalesRecord> {
        self.records.iter()
    }

    /// Distinct dates in ascending order
    pub fn dates(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = self.records.iter().map(|r| r.date).collect();
        dates.sort_unstable();
        dates.dedup();
        dates
    }

    pub fn into_records(self) -> Vec<SalesRecord> {
        self.records
    }
}

impl From<Vec<SalesRecord>> for SalesDataset {
    fn from(records: Vec<SalesRecord>) -> Self {
        Self::new(records)
    }
}

impl<'a> IntoIterator for &'a SalesDataset {
    type Item = &'a SalesRecord;
    type IntoIter = std::slice::Iter<'a, SalesRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// The set of regions a user has selected
///
/// Always kept de-duplicated and in `Region::all()` order. The empty
/// selection is valid and filters every row out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionSelection {
    regions: Vec<Region>,
}

impl RegionSelection {
    /// Every region selected (the filter widget's default)
    pub fn all() -> Self {
        Self {
            regions: Region::all().to_vec(),
        }
    }

    /// Nothing selected
    pub fn none() -> Self {
        Self { regions: Vec::new() }
    }

    pub fn from_regions(regions: impl IntoIterator<Item = Region>) -> Self {
        let picked: Vec<Region> = regions.into_iter().collect();
        Self {
            regions: Region::all()
                .iter()
                .copied()
                .filter(|r| picked.contains(r))
                .collect(),
        }
    }

    /// Parse region names, rejecting any that are unknown
    pub fn from_names<I, S>(names: I) -> SalesResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let regions = names
            .into_iter()
            .filter(|n| !n.as_ref().trim().is_empty())
            .map(|n| n.as_ref().parse::<Region>())
            .collect::<SalesResult<Vec<_>>>()?;
        Ok(Self::from_regions(regions))
    }

    /// Parse a comma-separated list such as `"North,East"`
    pub fn parse_list(list: &str) -> SalesResult<Self> {
        Self::from_names(list.split(','))
    }

    pub fn contains(&self, region: Region) -> bool {
        self.regions.contains(&region)
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn is_all(&self) -> bool {
        self.regions.len() == Region::all().len()
    }

    /// Comma-separated names, suitable for a `regions=` query value
    pub fn to_list(&self) -> String {
        self.regions
            .iter()
            .map(|r| r.name())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl Default for RegionSelection {
    fn default() -> Self {
        Self::all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_parse_case_insensitive() {
        assert_eq!("north".parse::<Region>().unwrap(), Region::North);
        assert_eq!(" WEST ".parse::<Region>().unwrap(), Region::West);
        assert!(matches!(
            "Central".parse::<Region>(),
            Err(SalesError::UnknownRegion(_))
        ));
    }

    #[test]
    fn test_region_order() {
        let names: Vec<&str> = Region::all().iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["North", "South", "East", "West"]);
    }

    #[test]
    fn test_selection_normalizes_order_and_duplicates() {
        let selection =
            RegionSelection::from_names(["West", "north", "West", ""]).unwrap();
        assert_eq!(selection.regions(), &[Region::North, Region::West]);
        assert_eq!(selection.to_list(), "North,West");
        assert!(!selection.is_all());
    }

    #[test]
    fn test_selection_parse_list() {
        assert!(RegionSelection::parse_list("").unwrap().is_empty());
        assert!(RegionSelection::parse_list("North,South,East,West")
            .unwrap()
            .is_all());
        assert!(RegionSelection::parse_list("North,Nowhere").is_err());
    }

    #[test]
    fn test_dataset_dates_distinct_sorted() {
        let d1 = NaiveDate::from_ymd_opt(2023, 2, 28).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2023, 1, 31).unwrap();
        let dataset = SalesDataset::new(vec![
            SalesRecord::new(d1, Region::North, 1200),
            SalesRecord::new(d2, Region::North, 1300),
            SalesRecord::new(d1, Region::East, 1400),
        ]);

        assert_eq!(dataset.dates(), vec![d2, d1]);
        assert_eq!(dataset.len(), 3);
    }
}
