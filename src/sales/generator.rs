//! Synthetic sales data
//!
//! Produces a region-major table of monthly sales figures from a seeded
//! PRNG, so the same parameters always yield the same dataset.

use chrono::{Datelike, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::error::{SalesError, SalesResult};
use super::types::{Region, SalesDataset, SalesRecord};

/// Parameters controlling dataset synthesis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorParams {
    /// PRNG seed
    pub seed: u64,
    /// Year of the first month
    pub start_year: i32,
    /// Month (1-12) of the first month
    pub start_month: u32,
    /// Number of consecutive months
    pub periods: usize,
    /// Inclusive lower bound for sales values
    pub sales_min: u32,
    /// Exclusive upper bound for sales values
    pub sales_max: u32,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            seed: 42,
            start_year: 2023,
            start_month: 1,
            periods: 12,
            sales_min: 1000,
            sales_max: 5000,
        }
    }
}

impl GeneratorParams {
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn periods(mut self, periods: usize) -> Self {
        self.periods = periods;
        self
    }

    pub fn start(mut self, year: i32, month: u32) -> Self {
        self.start_year = year;
        self.start_month = month;
        self
    }

    pub fn sales_range(mut self, min: u32, max: u32) -> Self {
        self.sales_min = min;
        self.sales_max = max;
        self
    }

    /// Check parameters before generating
    pub fn validate(&self) -> SalesResult<()> {
        if self.periods == 0 {
            return Err(SalesError::InvalidParams(
                "periods must be at least 1".to_string(),
            ));
        }
        if self.sales_min >= self.sales_max {
            return Err(SalesError::InvalidParams(format!(
                "sales range [{}, {}) is empty",
                self.sales_min, self.sales_max
            )));
        }
        if month_end(self.start_year, self.start_month).is_none() {
            return Err(SalesError::InvalidParams(format!(
                "invalid start month {}-{:02}",
                self.start_year, self.start_month
            )));
        }
        Ok(())
    }
}

/// Last calendar day of the given month
pub fn month_end(year: i32, month: u32) -> Option<NaiveDate> {
    if !(1..=12).contains(&month) {
        return None;
    }
    let (next_year, next_month) = if month == 12 {
        (year.checked_add(1)?, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}

/// `periods` consecutive month-end dates starting at the given month
pub fn month_end_dates(year: i32, month: u32, periods: usize) -> SalesResult<Vec<NaiveDate>> {
    let mut dates = Vec::with_capacity(periods);
    let mut current = month_end(year, month).ok_or_else(|| {
        SalesError::InvalidParams(format!("invalid start month {}-{:02}", year, month))
    })?;

    for _ in 0..periods {
        dates.push(current);
        let next = current
            .succ_opt()
            .and_then(|first| month_end(first.year(), first.month()))
            .ok_or_else(|| SalesError::InvalidParams("date range overflows".to_string()))?;
        current = next;
    }

    Ok(dates)
}

/// Generate the sales dataset
///
/// Rows are region-major: every date for `North`, then every date for
/// `South`, and so on. One PRNG draw per row in row order.
pub fn generate(params: &GeneratorParams) -> SalesResult<SalesDataset> {
    params.validate()?;

    let dates = month_end_dates(params.start_year, params.start_month, params.periods)?;
    let mut rng = StdRng::seed_from_u64(params.seed);

    let mut records = Vec::with_capacity(dates.len() * Region::all().len());
    for &region in Region::all() {
        for &date in &dates {
            let sales = rng.gen_range(params.sales_min..params.sales_max);
            records.push(SalesRecord::new(date, region, sales));
        }
    }

    tracing::debug!(
        seed = params.seed,
        rows = records.len(),
        first = %dates[0],
        "Generated sales dataset"
    );

    Ok(SalesDataset::new(records))
}
