use crate::model::{Filter, Selection};
use crate::pipeline::aggregate::BestScores;
use crate::report::{Annotation, PlotScene, SceneBody};

pub fn format_z(z: Option<f64>) -> String {
    match z {
        Some(z) => format!("{:.2}", z),
        None => "undefined".to_string(),
    }
}

fn format_or_na(value: Option<f64>, suffix: &str) -> String {
    match value {
        Some(v) => format!("{:.1}{}", v, suffix),
        None => "n/a".to_string(),
    }
}

/// `total` counts every ranked athlete, scoreless ones included.
pub fn info_line(
    selection: &Selection,
    total: usize,
    z: Option<f64>,
    percentile: Option<f64>,
    score_label: &str,
) -> String {
    format!(
        "Name: {} | {}: {} | Rank: {}/{} | Z: {} | Percentile: {}",
        selection.name,
        score_label,
        format_or_na(selection.score, ""),
        selection.rank,
        total,
        format_z(z),
        format_or_na(percentile, "%")
    )
}

pub fn not_found_line(query: &str, filter: &Filter, suggestion: Option<&str>) -> String {
    let mut msg = format!(
        "Athlete '{}' not found in {}, {}kg.",
        query, filter.sex, filter.weight_class
    );
    if let Some(name) = suggestion {
        msg.push_str(&format!(" Did you mean '{}'?", name));
    }
    msg
}

/// Lines of the annotation box drawn next to the marker.
pub fn annotation_lines(annotation: &Annotation, score_label: &str) -> Vec<String> {
    vec![
        annotation.name.clone(),
        format!("{:.1} {}", annotation.score, score_label),
        format!("Z={}", format_z(annotation.z_score)),
        format!("P={:.1}%", annotation.percentile),
    ]
}

/// Plain-text summary printed by the `report` command.
pub fn render_report_text(
    scene: &PlotScene,
    best: &BestScores,
    info: Option<&str>,
    error: Option<&str>,
    top: usize,
) -> String {
    let mut out = String::new();
    out.push_str(&scene.title);
    out.push('\n');
    out.push_str(&"=".repeat(scene.title.chars().count()));
    out.push_str("\n\n");

    match &scene.body {
        SceneBody::Placeholder if best.is_empty() => {
            out.push_str("No athletes match this filter.\n")
        }
        SceneBody::Placeholder => out.push_str(&format!(
            "Athletes: {} (none with a score)\n",
            best.len()
        )),
        SceneBody::Distribution(dist) => {
            out.push_str(&format!(
                "Athletes: {} ({} with a score)\n",
                best.len(),
                dist.stats.n
            ));
            out.push_str(&format!("Mean: {:.1}\n", dist.stats.mean));
            out.push_str(&format!("Std (sample): {:.1}\n\n", dist.stats.std));

            out.push_str(&format!("Top {}\n", top.min(best.len())));
            for (idx, entry) in best.entries.iter().take(top).enumerate() {
                let score = entry
                    .score
                    .map(|s| format!("{:.1}", s))
                    .unwrap_or_else(|| "-".to_string());
                out.push_str(&format!("{:>4}. {:<32} {:>7}\n", idx + 1, entry.name, score));
            }
        }
    }

    if let Some(info) = info {
        out.push('\n');
        out.push_str(info);
        out.push('\n');
    }
    if let Some(error) = error {
        out.push('\n');
        out.push_str(error);
        out.push('\n');
    }
    out
}
