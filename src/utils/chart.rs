use plotters::prelude::*;

use crate::middleware::error::{AppError, AppResult};

pub const CHART_SIZE: (u32, u32) = (800, 480);

// Keeps every bar the same thickness no matter how tall the rows are.
const BAR_MARGIN_PX: u32 = 12;

/// Renders one horizontal bar per label into an SVG document. Counts map to
/// the x axis, labels to the y axis.
pub fn render_bar_chart(labels: &[&str], counts: &[u64]) -> AppResult<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(to_chart_error)?;

        let max_count = counts.iter().copied().max().unwrap_or(0).max(1);
        let mut chart = ChartBuilder::on(&root)
            .margin(16)
            .x_label_area_size(32)
            .y_label_area_size(88)
            .build_cartesian_2d(0..max_count, (0..labels.len()).into_segmented())
            .map_err(to_chart_error)?;

        chart
            .configure_mesh()
            .disable_mesh()
            .y_label_formatter(&|segment| match segment {
                SegmentValue::Exact(idx) | SegmentValue::CenterOf(idx) => labels
                    .get(*idx)
                    .map(|label| label.to_string())
                    .unwrap_or_default(),
                SegmentValue::Last => String::new(),
            })
            .draw()
            .map_err(to_chart_error)?;

        chart
            .draw_series(counts.iter().enumerate().map(|(idx, count)| {
                let mut bar = Rectangle::new(
                    [
                        (0, SegmentValue::Exact(idx)),
                        (*count, SegmentValue::Exact(idx + 1)),
                    ],
                    BLUE.filled(),
                );
                bar.set_margin(BAR_MARGIN_PX, BAR_MARGIN_PX, 0, 0);
                bar
            }))
            .map_err(to_chart_error)?;

        root.present().map_err(to_chart_error)?;
    }
    Ok(svg)
}

fn to_chart_error<E: std::fmt::Display>(err: E) -> AppError {
    AppError::Chart {
        source: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::render_bar_chart;

    #[test]
    fn renders_svg_document() {
        let svg = render_bar_chart(&["Abusive", "Individual"], &[3, 1]).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Abusive"));
        assert!(svg.contains("Individual"));
    }

    #[test]
    fn renders_with_all_zero_counts() {
        let svg = render_bar_chart(&["Abusive"], &[0]).unwrap();
        assert!(svg.contains("<svg"));
    }
}
