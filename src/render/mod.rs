//! Dashboard Rendering
//!
//! Server-side rendering of the dashboard page:
//!
//! - **html**: The full page (sidebar filters, sections, table, download)
//! - **chart**: Line and bar charts drawn with plotters as inline SVG

pub mod chart;
pub mod html;

pub use chart::{bar_chart_svg, line_chart_svg, ChartError, ChartResult};
pub use html::{html_escape, render_dashboard, selection_query, DashboardView, PAGE_ICON, PAGE_TITLE};
