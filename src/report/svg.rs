use std::fs;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::report::export::ExportError;
use crate::report::text::annotation_lines;
use crate::report::{Distribution, Marker, PlotScene};

pub const SVG_SIZE: (u32, u32) = (1000, 600);

const BAR_COLOR: RGBColor = RGBColor(135, 206, 235);
const LINE_HEIGHT: i32 = 16;

/// Rendered in memory so write errors reach the caller as `ExportError::Io`.
pub fn write_svg(path: &Path, scene: &PlotScene, score_label: &str) -> Result<(), ExportError> {
    let svg = render_svg_string(scene, score_label)?;
    fs::write(path, svg)?;
    Ok(())
}

pub fn render_svg_string(scene: &PlotScene, score_label: &str) -> Result<String, ExportError> {
    let mut buf = String::new();
    {
        let root = SVGBackend::with_string(&mut buf, SVG_SIZE).into_drawing_area();
        draw_scene(&root, scene, score_label).map_err(|e| ExportError::Draw(e.to_string()))?;
    }
    Ok(buf)
}

/// Paints the whole scene onto `root`, clearing it first.
pub fn draw_scene<DB>(
    root: &DrawingArea<DB, Shift>,
    scene: &PlotScene,
    score_label: &str,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let Some(dist) = scene.distribution() else {
        root.draw(&Text::new(
            scene.title.clone(),
            (40, 40),
            ("sans-serif", 22).into_font(),
        ))?;
        root.present()?;
        return Ok(());
    };

    let (x0, x1) = dist.x_range;
    let mut chart = ChartBuilder::on(root)
        .caption(&scene.title, ("sans-serif", 22))
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d(x0..x1, 0.0..dist.y_max)?;

    chart
        .configure_mesh()
        .x_desc(scene.x_label.as_str())
        .y_desc(scene.y_label.as_str())
        .x_label_formatter(&|v| format!("{:.0}", v))
        .y_label_formatter(&|v| format!("{:.4}", v))
        .light_line_style(BLACK.mix(0.05))
        .draw()?;

    chart
        .draw_series(dist.bins.iter().map(|b| {
            Rectangle::new([(b.lo, 0.0), (b.hi, b.density)], BAR_COLOR.mix(0.6).filled())
        }))?
        .label(dist.histogram_label.as_str())
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], BAR_COLOR.mix(0.6).filled()));

    if !dist.curve.is_empty() {
        chart
            .draw_series(LineSeries::new(dist.curve.iter().copied(), RED.stroke_width(2)))?
            .label(dist.curve_label.as_str())
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));
    }

    if let Some(marker) = &dist.marker {
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(marker.score, 0.0), (marker.score, dist.y_max)],
            BLACK.stroke_width(2),
        )))?;

        let lines = annotation_lines(&marker.annotation, score_label);
        let (anchor, offset, width, height) = annotation_box(dist, marker, &lines);
        let frame = [(offset, 0), (offset + width, height)];
        chart.draw_series(std::iter::once(
            EmptyElement::at(anchor) + Rectangle::new(frame, WHITE.filled()),
        ))?;
        chart.draw_series(std::iter::once(
            EmptyElement::at(anchor) + Rectangle::new(frame, BLACK.stroke_width(1)),
        ))?;
        chart.draw_series(lines.iter().enumerate().map(|(i, line)| {
            EmptyElement::at(anchor)
                + Text::new(
                    line.clone(),
                    (offset + 6, 4 + LINE_HEIGHT * i as i32),
                    ("sans-serif", 14).into_font(),
                )
        }))?;
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;
    Ok(())
}

// The box sits right of the marker, or left of it when the marker is in the
// right half, so it stays inside the plot.
fn annotation_box(
    dist: &Distribution,
    marker: &Marker,
    lines: &[String],
) -> ((f64, f64), i32, i32, i32) {
    let max_chars = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as i32;
    let width = 12 + 8 * max_chars;
    let height = 8 + LINE_HEIGHT * lines.len() as i32;
    let (x0, x1) = dist.x_range;
    let offset = if marker.score > (x0 + x1) / 2.0 {
        -(10 + width)
    } else {
        10
    };
    ((marker.score, dist.y_max * 0.85), offset, width, height)
}
