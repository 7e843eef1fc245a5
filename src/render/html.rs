//! HTML dashboard page
//!
//! Renders the whole dashboard as one self-contained document with
//! embedded CSS and inline SVG charts. Filter widgets are a plain form
//! that re-requests the page.

use crate::sales::{
    view, PivotTable, Region, RegionSelection, RegionTotal, SalesDataset, DatasetSummary,
};

use super::chart::{bar_chart_svg, line_chart_svg, ChartResult};

/// Browser tab title
pub const PAGE_TITLE: &str = "Sales Overview Dashboard";

/// Page icon, shown as the favicon and in the heading
pub const PAGE_ICON: &str = "📊";

/// Everything needed to render one dashboard response
pub struct DashboardView<'a> {
    pub selection: &'a RegionSelection,
    pub filtered: &'a SalesDataset,
    pub pivot: &'a PivotTable,
    pub totals: &'a [RegionTotal],
    pub summary: DatasetSummary,
}

/// Render the dashboard page
pub fn render_dashboard(dashboard: &DashboardView<'_>) -> ChartResult<String> {
    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="icon" href="data:image/svg+xml,<svg xmlns=%22http://www.w3.org/2000/svg%22 viewBox=%220 0 100 100%22><text y=%22.9em%22 font-size=%2290%22>{icon}</text></svg>">
    <style>{css}</style>
</head>
<body>
    <div class="layout">
        {sidebar}
        <main class="container">
            <h1>{icon} {title} (Sample)</h1>
            {summary}
            {line_section}
            {bar_section}
            {table_section}
            {download}
            {footer}
        </main>
    </div>
</body>
</html>"#,
        title = PAGE_TITLE,
        icon = PAGE_ICON,
        css = inline_css(),
        sidebar = render_sidebar(dashboard.selection),
        summary = render_summary(&dashboard.summary),
        line_section = render_line_section(dashboard.pivot)?,
        bar_section = render_bar_section(dashboard.totals)?,
        table_section = render_table(dashboard.filtered),
        download = render_download(dashboard.selection),
        footer = render_footer(),
    ))
}

/// Sidebar with the region multi-select
fn render_sidebar(selection: &RegionSelection) -> String {
    let options: String = Region::all()
        .iter()
        .map(|region| {
            format!(
                r#"<label class="option"><input type="checkbox" name="region" value="{name}"{checked}> {name}</label>"#,
                name = html_escape(region.name()),
                checked = if selection.contains(*region) { " checked" } else { "" },
            )
        })
        .collect::<Vec<_>>()
        .join("\n                ");

    format!(
        r#"<aside class="sidebar">
        <h2>🔎 Filters</h2>
        <form method="get" action="/">
            <input type="hidden" name="filtered" value="1">
            <fieldset>
                <legend>Select Region(s)</legend>
                {options}
            </fieldset>
            <button type="submit">Apply</button>
        </form>
    </aside>"#,
        options = options,
    )
}

fn render_summary(summary: &DatasetSummary) -> String {
    let mean = summary
        .mean
        .map(|m| format!("{:.0}", m))
        .unwrap_or_else(|| "-".to_string());
    let max = summary
        .max
        .map(|m| m.to_string())
        .unwrap_or_else(|| "-".to_string());

    format!(
        r#"<div class="summary">
                <div class="summary-card"><h3>Rows</h3><div class="value">{rows}</div></div>
                <div class="summary-card"><h3>Total Sales ($)</h3><div class="value">{total}</div></div>
                <div class="summary-card"><h3>Average Month ($)</h3><div class="value">{mean}</div></div>
                <div class="summary-card"><h3>Best Month ($)</h3><div class="value">{max}</div></div>
            </div>"#,
        rows = summary.rows,
        total = summary.total,
        mean = mean,
        max = max,
    )
}

fn empty_notice() -> &'static str {
    r#"<div class="notice">No data for the current selection. Pick at least one region in the sidebar.</div>"#
}

fn render_line_section(pivot: &PivotTable) -> ChartResult<String> {
    let body = if pivot.is_empty() {
        empty_notice().to_string()
    } else {
        format!(r#"<div class="chart">{}</div>"#, line_chart_svg(pivot)?)
    };

    Ok(format!(
        r#"<section class="section">
                <h2>📈 Monthly Sales by Region</h2>
                {body}
            </section>"#,
        body = body,
    ))
}

fn render_bar_section(totals: &[RegionTotal]) -> ChartResult<String> {
    let body = if totals.is_empty() {
        empty_notice().to_string()
    } else {
        format!(r#"<div class="chart">{}</div>"#, bar_chart_svg(totals)?)
    };

    Ok(format!(
        r#"<section class="section">
                <h2>📊 Total Sales by Region</h2>
                {body}
            </section>"#,
        body = body,
    ))
}

/// Raw rows with a fresh 0-based index
fn render_table(filtered: &SalesDataset) -> String {
    let rows: String = view::indexed(filtered)
        .map(|(idx, record)| {
            format!(
                r#"<tr><td class="index">{}</td><td>{}</td><td>{}</td><td class="number">{}</td></tr>"#,
                idx,
                record.date.format("%Y-%m-%d"),
                html_escape(record.region.name()),
                record.sales
            )
        })
        .collect::<Vec<_>>()
        .join("\n                        ");

    format!(
        r#"<section class="section">
                <h2>🧾 Raw Data Table</h2>
                <div class="table-wrap">
                <table>
                    <thead><tr><th></th><th>Date</th><th>Region</th><th>Sales</th></tr></thead>
                    <tbody>
                        {rows}
                    </tbody>
                </table>
                </div>
            </section>"#,
        rows = rows,
    )
}

/// Query string that reproduces `selection` on another endpoint
pub fn selection_query(selection: &RegionSelection) -> String {
    format!(
        "filtered=1&regions={}",
        urlencoding::encode(&selection.to_list())
    )
}

fn render_download(selection: &RegionSelection) -> String {
    format!(
        r#"<a class="button" href="/api/v1/export?{query}" download="{file}">⬇️ Download Filtered Data (CSV)</a>"#,
        query = html_escape(&selection_query(selection)),
        file = crate::sales::CSV_FILE_NAME,
    )
}

fn render_footer() -> &'static str {
    r#"<footer>
                <hr>
                <p>✅ <em>This is a demonstration of a clean, customizable dashboard with filters, visuals, and export options. Use this as a portfolio showcase or template.</em></p>
            </footer>"#
}

/// Escape text for HTML content and attribute values
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Inline CSS styles
fn inline_css() -> &'static str {
    r#"
* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: system-ui, -apple-system, 'Segoe UI', sans-serif;
    line-height: 1.6;
    color: #111827;
    background: #ffffff;
}

.layout { display: flex; min-height: 100vh; }

.sidebar {
    width: 260px;
    flex-shrink: 0;
    padding: 2rem 1.25rem;
    background: #f0f2f6;
}

.sidebar h2 { font-size: 1.25rem; margin-bottom: 1rem; }
.sidebar fieldset { border: none; margin-bottom: 1rem; }
.sidebar legend { font-size: 0.875rem; color: #374151; margin-bottom: 0.5rem; }
.sidebar .option { display: block; padding: 0.25rem 0; }

button, .button {
    display: inline-block;
    padding: 0.5rem 1rem;
    border: 1px solid #d1d5db;
    border-radius: 0.5rem;
    background: #ffffff;
    color: #111827;
    text-decoration: none;
    cursor: pointer;
}

button:hover, .button:hover { border-color: #ff4b4b; color: #ff4b4b; }

.container { flex: 1; max-width: 1400px; padding: 2rem 3rem; }

h1 { font-size: 2rem; font-weight: 700; margin-bottom: 1.5rem; }

.summary {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
    gap: 1rem;
    margin-bottom: 2rem;
}

.summary-card {
    background: #f9fafb;
    padding: 1rem;
    border-radius: 0.5rem;
    border-left: 4px solid #0068c9;
}

.summary-card h3 { font-size: 0.875rem; font-weight: 600; color: #6b7280; }
.summary-card .value { font-size: 1.5rem; font-weight: 700; }

.section { margin-bottom: 2rem; }
.section h2 { font-size: 1.5rem; font-weight: 700; margin-bottom: 1rem; }

.chart svg { width: 100%; height: auto; }

.notice {
    padding: 1rem;
    border-radius: 0.5rem;
    background: #fffbeb;
    color: #92400e;
}

.table-wrap { max-height: 420px; overflow-y: auto; }

table { width: 100%; border-collapse: collapse; }
th {
    position: sticky;
    top: 0;
    background: #f9fafb;
    padding: 0.5rem 0.75rem;
    text-align: left;
    font-size: 0.875rem;
    border-bottom: 2px solid #e5e7eb;
}
td { padding: 0.5rem 0.75rem; border-bottom: 1px solid #e5e7eb; font-size: 0.875rem; }
td.index { color: #9ca3af; }
td.number { text-align: right; font-variant-numeric: tabular-nums; }
tbody tr:hover { background: #f3f4f6; }

footer { margin-top: 3rem; color: #374151; }
footer hr { border: none; border-top: 1px solid #e5e7eb; margin-bottom: 1rem; }

@media (max-width: 768px) {
    .layout { flex-direction: column; }
    .sidebar { width: 100%; }
    .container { padding: 1rem; }
}
"#
}
