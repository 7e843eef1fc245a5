//! Sales Data
//!
//! This module provides everything the dashboard knows about its data:
//!
//! - **types**: Core data structures (Region, SalesRecord, SalesDataset)
//! - **generator**: Seeded synthesis of the monthly sales table
//! - **view**: Filter, pivot, per-region totals, and summary statistics
//! - **export**: CSV codec for the download artifact
//! - **error**: Error types
//!
//! # Pipeline
//!
//! ```text
//!   generate → filter(selection) ─┬→ pivot  → line chart
//!                                 ├→ totals → bar chart
//!                                 ├→ table
//!                                 └→ CSV bytes → download
//! ```
//!
//! # Example
//!
//! ```rust
//! use sales_overview::sales::{filter, generate, totals, GeneratorParams, Region, RegionSelection};
//!
//! let dataset = generate(&GeneratorParams::default()).unwrap();
//! let selection = RegionSelection::from_regions([Region::North, Region::East]);
//! let filtered = filter(&dataset, &selection);
//!
//! assert_eq!(filtered.len(), 24);
//! assert_eq!(totals(&filtered).len(), 2);
//! ```

pub mod error;
pub mod export;
pub mod generator;
pub mod types;
pub mod view;

pub use error::{SalesError, SalesResult};
pub use export::{from_csv_bytes, to_csv_bytes, CSV_CONTENT_TYPE, CSV_FILE_NAME};
pub use generator::{generate, GeneratorParams};
pub use types::{Region, RegionSelection, SalesDataset, SalesRecord};
pub use view::{filter, load_filtered, pivot, summary, totals, DatasetSummary, PivotRow, PivotTable, RegionTotal};
