//! # Sales Overview
//!
//! A single-page sales-overview dashboard: synthetic monthly sales for four
//! regions, sidebar region filters, a line chart, a bar chart, a data table,
//! and a CSV download.
//!
//! ## Modules
//!
//! - [`sales`]: Data model, seeded generator, views, and CSV codec
//! - [`render`]: Server-side HTML page and SVG charts
//! - [`api`]: HTTP server with Axum
//! - [`config`]: TOML configuration with environment overrides
//! - [`logging`]: Tracing subscriber setup
//!
//! ## Quick Start
//!
//! ```rust
//! use sales_overview::sales::*;
//!
//! let dataset = generate(&GeneratorParams::default()).unwrap();
//! assert_eq!(dataset.len(), 48);
//!
//! let selection = RegionSelection::parse_list("North,West").unwrap();
//! let filtered = filter(&dataset, &selection);
//!
//! let csv = to_csv_bytes(filtered.records()).unwrap();
//! assert_eq!(from_csv_bytes(&csv).unwrap().len(), 24);
//! ```

pub mod api;
pub mod config;
pub mod logging;
pub mod render;
pub mod sales;

// Re-export top-level types for convenience
pub use sales::{
    filter, generate, pivot, totals, GeneratorParams, PivotTable, Region, RegionSelection,
    RegionTotal, SalesDataset, SalesError, SalesRecord, SalesResult,
};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{ApiConfig, Config, ConfigError, DatasetConfig, LoggingConfig};
