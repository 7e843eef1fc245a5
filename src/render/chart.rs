//! SVG chart generation
//!
//! Both dashboard charts are drawn with plotters into an in-memory SVG
//! document that the page embeds inline.

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use thiserror::Error;

use crate::sales::{PivotTable, RegionTotal};

/// Series colors, assigned to pivot columns in order
pub const SERIES_COLORS: [RGBColor; 4] = [
    RGBColor(31, 119, 180), // Blue
    RGBColor(255, 127, 14), // Orange
    RGBColor(44, 160, 44),  // Green
    RGBColor(214, 39, 40),  // Red
];

const BAR_COLOR: RGBColor = RGBColor(0, 104, 201);
const LABEL_COLOR: RGBColor = RGBColor(55, 65, 81);

const LINE_SIZE: (u32, u32) = (1000, 400);
const BAR_SIZE: (u32, u32) = (1000, 360);
const FONT: &str = "sans-serif";

pub type ChartResult<T> = Result<T, ChartError>;

/// Errors raised while drawing a chart
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("Chart drawing failed: {0}")]
    Drawing(#[from] DrawingAreaErrorKind<std::io::Error>),
}

/// Upper end of the value axis, leaving headroom above the tallest point
fn value_ceiling(max: f64) -> f64 {
    if max <= 0.0 {
        1.0
    } else {
        max * 1.1
    }
}

/// Label for an index axis: the entry at whole positions, blank between
fn position_label(labels: &[String], x: f64) -> String {
    let rounded = x.round();
    if rounded < 0.0 || (x - rounded).abs() > 1e-6 {
        return String::new();
    }
    labels.get(rounded as usize).cloned().unwrap_or_default()
}

/// Consecutive present cells of one pivot column as `(row index, value)`
///
/// A missing cell breaks the line, so each run is drawn as its own series.
fn column_runs(table: &PivotTable, col: usize) -> Vec<Vec<(f64, f64)>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();

    for (i, row) in table.rows.iter().enumerate() {
        match row.values.get(col).copied().flatten() {
            Some(v) => current.push((i as f64, f64::from(v))),
            None if !current.is_empty() => runs.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }

    runs
}

fn empty_svg(size: (u32, u32)) -> ChartResult<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
        root.fill(&WHITE)?;

        let style = (FONT, 14)
            .into_font()
            .color(&LABEL_COLOR)
            .pos(Pos::new(HPos::Center, VPos::Center));
        root.draw_text("No data", &style, ((size.0 / 2) as i32, (size.1 / 2) as i32))?;
        root.present()?;
    }
    Ok(svg)
}

/// Line chart of monthly sales, one series per pivot column
pub fn line_chart_svg(table: &PivotTable) -> ChartResult<String> {
    let max = match table.max_value() {
        Some(max) if !table.columns.is_empty() => max,
        _ => return empty_svg(LINE_SIZE),
    };

    let labels: Vec<String> = table
        .rows
        .iter()
        .map(|row| row.date.format("%b %Y").to_string())
        .collect();
    let last = labels.len().saturating_sub(1) as f64;

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, LINE_SIZE).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(80)
            .build_cartesian_2d(-0.5..last + 0.5, 0.0..value_ceiling(f64::from(max)))?;

        let date_label = |x: &f64| position_label(&labels, *x);
        chart
            .configure_mesh()
            .x_labels(labels.len())
            .x_label_formatter(&date_label)
            .y_label_formatter(&|y: &f64| format!("{:.0}", y))
            .x_desc("Date")
            .y_desc("Sales ($)")
            .label_style((FONT, 12))
            .draw()?;

        for (col, region) in table.columns.iter().enumerate() {
            let color = SERIES_COLORS[col % SERIES_COLORS.len()];

            for (n, run) in column_runs(table, col).into_iter().enumerate() {
                let series = chart.draw_series(LineSeries::new(run, color.stroke_width(2)))?;
                if n == 0 {
                    series.label(region.name()).legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                    });
                }
            }
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(&WHITE.mix(0.8))
            .border_style(&LABEL_COLOR.mix(0.3))
            .label_font((FONT, 12))
            .draw()?;

        root.present()?;
    }

    Ok(svg)
}

/// Bar chart of total sales per region, in the order given
pub fn bar_chart_svg(totals: &[RegionTotal]) -> ChartResult<String> {
    let max = match totals.iter().map(|t| t.total).max() {
        Some(max) => max,
        None => return empty_svg(BAR_SIZE),
    };

    let names: Vec<String> = totals.iter().map(|t| t.region.name().to_string()).collect();
    let last = names.len().saturating_sub(1) as f64;
    let ceiling = value_ceiling(max as f64);

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, BAR_SIZE).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(80)
            .build_cartesian_2d(-0.5..last + 0.5, 0.0..ceiling)?;

        let region_label = |x: &f64| position_label(&names, *x);
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(names.len())
            .x_label_formatter(&region_label)
            .y_label_formatter(&|y: &f64| format!("{:.0}", y))
            .x_desc("Region")
            .y_desc("Sales ($)")
            .label_style((FONT, 12))
            .draw()?;

        chart.draw_series(totals.iter().enumerate().map(|(i, total)| {
            let x = i as f64;
            Rectangle::new([(x - 0.3, 0.0), (x + 0.3, total.total as f64)], BAR_COLOR.filled())
        }))?;

        // Value above each bar
        chart.draw_series(totals.iter().enumerate().map(|(i, total)| {
            Text::new(
                total.total.to_string(),
                (i as f64, total.total as f64 + ceiling * 0.02),
                (FONT, 12)
                    .into_font()
                    .color(&LABEL_COLOR)
                    .pos(Pos::new(HPos::Center, VPos::Bottom)),
            )
        }))?;

        root.present()?;
    }

    Ok(svg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sales::{filter, generate, pivot, totals, GeneratorParams, PivotRow, Region, RegionSelection};
    use chrono::NaiveDate;

    #[test]
    fn test_position_label() {
        let labels = vec!["Jan 2023".to_string(), "Feb 2023".to_string()];
        assert_eq!(position_label(&labels, 0.0), "Jan 2023");
        assert_eq!(position_label(&labels, 1.0), "Feb 2023");
        assert_eq!(position_label(&labels, 0.5), "");
        assert_eq!(position_label(&labels, -1.0), "");
        assert_eq!(position_label(&labels, 2.0), "");
    }

    #[test]
    fn test_column_runs_split_on_missing_cells() {
        let date = |m| NaiveDate::from_ymd_opt(2023, m, 28).unwrap();
        let table = PivotTable {
            columns: vec![Region::East],
            rows: vec![
                PivotRow { date: date(1), values: vec![Some(1000)] },
                PivotRow { date: date(2), values: vec![None] },
                PivotRow { date: date(3), values: vec![Some(1200)] },
                PivotRow { date: date(4), values: vec![Some(1300)] },
            ],
        };

        let runs = column_runs(&table, 0);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0], vec![(0.0, 1000.0)]);
        assert_eq!(runs[1], vec![(2.0, 1200.0), (3.0, 1300.0)]);
    }

    #[test]
    fn test_value_ceiling() {
        assert_eq!(value_ceiling(0.0), 1.0);
        assert!(value_ceiling(5000.0) > 5000.0);
    }

    #[test]
    fn test_line_chart_series_per_region() {
        let data = generate(&GeneratorParams::default()).unwrap();
        let selection = RegionSelection::from_regions([Region::North, Region::West]);
        let table = pivot(&filter(&data, &selection)).unwrap();
        let svg = line_chart_svg(&table).unwrap();

        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(">North<"));
        assert!(svg.contains(">West<"));
        assert!(!svg.contains(">East<"));
        assert!(svg.contains("Sales ($)"));
        assert!(svg.contains("Jan 2023"));
    }

    #[test]
    fn test_bar_chart_labels_every_total() {
        let data = generate(&GeneratorParams::default()).unwrap();
        let result = totals(&data);
        let svg = bar_chart_svg(&result).unwrap();

        assert!(svg.contains("Sales ($)"));
        for total in &result {
            assert!(svg.contains(&format!(">{}<", total.region)));
            assert!(svg.contains(&format!(">{}<", total.total)));
        }
    }

    #[test]
    fn test_empty_charts() {
        assert!(line_chart_svg(&PivotTable::default()).unwrap().contains("No data"));
        assert!(bar_chart_svg(&[]).unwrap().contains("No data"));
    }

    #[test]
    fn test_chart_error_display() {
        let err = ChartError::from(DrawingAreaErrorKind::LayoutError);
        assert!(err.to_string().starts_with("Chart drawing failed"));
    }
}
