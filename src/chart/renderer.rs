// Two-panel summary figure drawn with plotters into an RGB buffer.
// Presentation is left to the window module so rendering stays headless.

use crate::analyzer::WorkforceSummary;
use crate::model::ChartError;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontTransform;

pub const FIGURE_WIDTH: usize = 1500;
pub const FIGURE_HEIGHT: usize = 600;

const BAR_FILL: RGBColor = RGBColor(135, 206, 235);
const PIE_START_ANGLE: f64 = 140.0;
const PIE_COLORS: [RGBColor; 4] = [
    RGBColor(240, 128, 128),
    RGBColor(255, 215, 0),
    RGBColor(173, 216, 230),
    RGBColor(144, 238, 144),
];

/// Renders the department bar chart and the job-title pie side by side
/// into `buffer` (RGB, `width * height * 3` bytes).
pub fn render_dashboard(
    summary: &WorkforceSummary,
    buffer: &mut [u8],
    (width, height): (u32, u32),
) -> Result<(), ChartError> {
    let root = BitMapBackend::with_buffer(buffer, (width, height)).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;

    let (left, right) = root.split_horizontally((width / 2) as i32);
    draw_department_bars(&left, &summary.department_counts)?;
    draw_job_title_pie(&right, &summary.job_title_counts)?;

    root.present().map_err(draw_err)?;
    Ok(())
}

fn draw_department_bars<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    counts: &[(String, usize)],
) -> Result<(), ChartError> {
    let max_count = counts.iter().map(|(_, n)| *n).max().unwrap_or(0) as u32;

    let mut chart = ChartBuilder::on(area)
        .caption("Number of Employees per Department", ("sans-serif", 28))
        .margin(15)
        .x_label_area_size(110)
        .y_label_area_size(60)
        .build_cartesian_2d(
            (0u32..counts.len() as u32).into_segmented(),
            0u32..max_count + 1,
        )
        .map_err(draw_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(counts.len())
        .x_desc("Department")
        .y_desc("Number of Employees")
        .x_label_style(
            ("sans-serif", 15)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .x_label_formatter(&|seg| match seg {
            SegmentValue::CenterOf(i) => counts
                .get(*i as usize)
                .map(|(name, _)| name.clone())
                .unwrap_or_default(),
            _ => String::new(),
        })
        .draw()
        .map_err(draw_err)?;

    chart
        .draw_series(counts.iter().enumerate().map(|(i, (_, count))| {
            Rectangle::new(bar_corners(i, *count), BAR_FILL.filled())
        }))
        .map_err(draw_err)?;

    // Outline pass; a filled rectangle carries no stroke of its own.
    chart
        .draw_series(counts.iter().enumerate().map(|(i, (_, count))| {
            Rectangle::new(bar_corners(i, *count), BLACK.stroke_width(1))
        }))
        .map_err(draw_err)?;

    Ok(())
}

fn bar_corners(index: usize, count: usize) -> [(SegmentValue<u32>, u32); 2] {
    [
        (SegmentValue::Exact(index as u32), 0),
        (SegmentValue::Exact(index as u32 + 1), count as u32),
    ]
}

fn draw_job_title_pie<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    counts: &[(String, usize)],
) -> Result<(), ChartError> {
    let area = area
        .titled("Job Title Distribution", ("sans-serif", 28))
        .map_err(draw_err)?;

    let (w, h) = area.dim_in_pixel();
    let center = (w as i32 / 2, h as i32 / 2);
    let radius = f64::from(w.min(h)) * 0.35;

    let sizes: Vec<f64> = counts.iter().map(|(_, n)| *n as f64).collect();
    let labels: Vec<String> = counts.iter().map(|(title, _)| title.clone()).collect();
    let colors: Vec<RGBColor> = (0..counts.len())
        .map(|i| PIE_COLORS[i % PIE_COLORS.len()])
        .collect();

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(PIE_START_ANGLE);
    pie.label_style(("sans-serif", 18).into_font());
    pie.percentages(("sans-serif", 14).into_font().color(&BLACK));

    area.draw(&pie).map_err(draw_err)?;
    Ok(())
}

fn draw_err<E: std::fmt::Display>(e: E) -> ChartError {
    ChartError::Draw(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_a_non_empty_summary_into_the_buffer() {
        let summary = WorkforceSummary {
            department_counts: vec![("R&D".to_string(), 2), ("Sales".to_string(), 1)],
            job_title_counts: vec![("Engineer".to_string(), 2), ("Manager".to_string(), 1)],
        };

        let (width, height) = (600u32, 300u32);
        let mut buffer = vec![0u8; (width * height * 3) as usize];

        render_dashboard(&summary, &mut buffer, (width, height)).unwrap();

        // White background plus at least some drawn pixels.
        assert!(buffer.iter().any(|&b| b == 255));
        assert!(buffer.iter().any(|&b| b != 255));
    }
}
