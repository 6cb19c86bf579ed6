use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Axis, Block, Chart, Clear, Dataset as Series, GraphType, List, ListItem, Paragraph,
};

use crate::config::Settings;
use crate::model::{Sex, categories_for};
use crate::report::text::annotation_lines;
use crate::report::{Distribution, PlotScene, SceneBody};
use crate::ui::app::{App, Focus};
use crate::ui::controller::Session;

const SIDE_WIDTH: u16 = 16;

pub fn ui(frame: &mut Frame, app: &App, session: &Session, settings: &Settings) {
    let rows = Layout::vertical([
        Constraint::Min(10),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(frame.area());
    let main = Layout::horizontal([
        Constraint::Length(SIDE_WIDTH),
        Constraint::Min(20),
        Constraint::Length(SIDE_WIDTH),
    ])
    .split(rows[0]);

    render_sex_selector(frame, main[0], app, session);
    render_plot(frame, main[1], &session.scene, settings);
    render_class_selector(frame, main[2], app, session);
    render_name_box(frame, rows[1], app);

    let info = session.state.last_info.as_deref().unwrap_or("");
    frame.render_widget(
        Paragraph::new(info).style(Style::default().fg(Color::Blue)),
        rows[2],
    );
    let error = session.state.last_error.as_deref().unwrap_or("");
    frame.render_widget(
        Paragraph::new(error).style(Style::default().fg(Color::Red)),
        rows[3],
    );
    frame.render_widget(
        Paragraph::new(footer_text(app)).style(Style::default().fg(Color::DarkGray)),
        rows[4],
    );
}

fn footer_text(app: &App) -> String {
    let help = "Tab focus | ↑↓ Enter pick | Enter search | Ctrl-S export | Esc quit";
    match &app.status {
        Some(status) => format!("{status}  ·  {help}"),
        None => help.to_string(),
    }
}

fn focus_block(title: &str, focused: bool) -> Block<'_> {
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Block::bordered().title(title).border_style(style)
}

fn radio_items<'a>(
    labels: impl Iterator<Item = &'a str>,
    active: usize,
    cursor: Option<usize>,
) -> Vec<ListItem<'a>> {
    labels
        .enumerate()
        .map(|(i, label)| {
            let mark = if i == active { "(•) " } else { "( ) " };
            let style = if cursor == Some(i) {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![Span::raw(mark), Span::raw(label)])).style(style)
        })
        .collect()
}

fn render_sex_selector(frame: &mut Frame, area: Rect, app: &App, session: &Session) {
    let focused = app.focus == Focus::Sex;
    let active = Sex::ALL
        .iter()
        .position(|s| *s == session.state.filter.sex)
        .unwrap_or(0);
    let items = radio_items(
        Sex::ALL.iter().map(|s| s.label()),
        active,
        focused.then_some(app.sex_cursor),
    );
    frame.render_widget(List::new(items).block(focus_block("Sex", focused)), area);
}

fn render_class_selector(frame: &mut Frame, area: Rect, app: &App, session: &Session) {
    let focused = app.focus == Focus::WeightClass;
    let filter = &session.state.filter;
    let items = radio_items(
        categories_for(filter.sex).iter().copied(),
        filter.class_index(),
        focused.then_some(app.class_cursor),
    );
    frame.render_widget(List::new(items).block(focus_block("Class (kg)", focused)), area);
}

fn render_name_box(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Name;
    frame.render_widget(
        Paragraph::new(app.input.as_str()).block(focus_block("Athlete name", focused)),
        area,
    );
    if focused {
        let x = area.x + 1 + app.input.chars().count() as u16;
        frame.set_cursor_position((x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}

/// Paints the scene into `area`. The area is cleared first so nothing from
/// a previous scene survives.
pub fn render_plot(frame: &mut Frame, area: Rect, scene: &PlotScene, settings: &Settings) {
    frame.render_widget(Clear, area);
    match &scene.body {
        SceneBody::Placeholder => {
            let body = Paragraph::new("No athletes match this filter.")
                .alignment(Alignment::Center)
                .block(Block::bordered().title(scene.title.as_str()));
            frame.render_widget(body, area);
        }
        SceneBody::Distribution(dist) => render_distribution(frame, area, scene, dist, settings),
    }
}

fn render_distribution(
    frame: &mut Frame,
    area: Rect,
    scene: &PlotScene,
    dist: &Distribution,
    settings: &Settings,
) {
    let bars = dist
        .bins
        .iter()
        .map(|b| ((b.lo + b.hi) / 2.0, b.density))
        .collect::<Vec<_>>();
    let marker_line = dist
        .marker
        .as_ref()
        .map(|m| vec![(m.score, 0.0), (m.score, dist.y_max)]);

    let mut series = vec![
        Series::default()
            .name(dist.histogram_label.as_str())
            .marker(symbols::Marker::HalfBlock)
            .graph_type(GraphType::Bar)
            .style(Style::default().fg(Color::Cyan))
            .data(&bars),
    ];
    if !dist.curve.is_empty() {
        series.push(
            Series::default()
                .name(dist.curve_label.as_str())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Red))
                .data(&dist.curve),
        );
    }
    if let Some(points) = &marker_line {
        series.push(
            Series::default()
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::White))
                .data(points),
        );
    }

    let (x0, x1) = dist.x_range;
    let chart = Chart::new(series)
        .block(Block::bordered().title(scene.title.as_str()))
        .x_axis(
            Axis::default()
                .title(scene.x_label.as_str())
                .bounds([x0, x1])
                .labels(axis_labels(x0, x1, 0)),
        )
        .y_axis(
            Axis::default()
                .title(scene.y_label.as_str())
                .bounds([0.0, dist.y_max])
                .labels(axis_labels(0.0, dist.y_max, 3)),
        );
    frame.render_widget(chart, area);

    if let Some(marker) = &dist.marker {
        let lines = annotation_lines(&marker.annotation, &settings.score_label);
        let boxed = annotation_area(area, &lines, marker.score > (x0 + x1) / 2.0);
        frame.render_widget(Clear, boxed);
        frame.render_widget(
            Paragraph::new(lines.join("\n")).block(Block::bordered()),
            boxed,
        );
    }
}

fn axis_labels(lo: f64, hi: f64, precision: usize) -> Vec<String> {
    let mid = (lo + hi) / 2.0;
    [lo, mid, hi]
        .iter()
        .map(|v| format!("{:.*}", precision, v))
        .collect()
}

// Top corner away from the marker so the box does not hide it.
fn annotation_area(area: Rect, lines: &[String], marker_on_right: bool) -> Rect {
    let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u16 + 2;
    let height = lines.len() as u16 + 2;
    let width = width.min(area.width.saturating_sub(2));
    let height = height.min(area.height.saturating_sub(2));
    let rightmost = area.right().saturating_sub(width + 1);
    let x = if marker_on_right {
        (area.x + 1 + area.width.saturating_sub(2) / 6).min(rightmost)
    } else {
        rightmost
    };
    Rect::new(x, area.y + 1, width, height)
}

#[cfg(test)]
#[path = "../../tests/src_inline/ui/draw.rs"]
mod tests;
