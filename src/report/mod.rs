pub mod export;
pub mod json;
pub mod svg;
pub mod text;

use serde::Serialize;

use crate::config::Settings;
use crate::model::{Filter, Selection};
use crate::pipeline::aggregate::BestScores;
use crate::pipeline::stats::{
    HistogramBin, PopulationStats, density_curve, histogram, min_max, percentile_rank,
};

/// Everything a painter needs to draw one frame of the plot. Built from
/// scratch on every render and never patched in place, so painting the
/// same scene twice gives the same picture.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotScene {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub body: SceneBody,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SceneBody {
    Placeholder,
    Distribution(Distribution),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Distribution {
    pub stats: PopulationStats,
    pub bins: Vec<HistogramBin>,
    pub curve: Vec<(f64, f64)>,
    pub histogram_label: String,
    pub curve_label: String,
    pub x_range: (f64, f64),
    pub y_max: f64,
    pub marker: Option<Marker>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub score: f64,
    pub annotation: Annotation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub name: String,
    pub score: f64,
    pub z_score: Option<f64>,
    pub percentile: f64,
}

impl PlotScene {
    pub fn distribution(&self) -> Option<&Distribution> {
        match &self.body {
            SceneBody::Distribution(d) => Some(d),
            SceneBody::Placeholder => None,
        }
    }

    #[cfg(test)]
    pub fn annotation(&self) -> Option<&Annotation> {
        self.distribution()
            .and_then(|d| d.marker.as_ref())
            .map(|m| &m.annotation)
    }
}

pub fn render_scene(
    best: &BestScores,
    selection: Option<&Selection>,
    filter: &Filter,
    settings: &Settings,
) -> PlotScene {
    let scores = best.scores();
    let Some(stats) = PopulationStats::from_scores(&scores) else {
        return PlotScene {
            title: format!(
                "No data for {}, {}kg ({})",
                filter.sex, filter.weight_class, filter.federation
            ),
            x_label: settings.score_label.clone(),
            y_label: "Density".to_string(),
            body: SceneBody::Placeholder,
        };
    };

    let bins = histogram(&scores, settings.bins);
    let (lo, hi) = min_max(&scores);
    let curve = density_curve(&stats, lo, hi);

    let mut x_min = bins.first().map(|b| b.lo).unwrap_or(lo);
    let mut x_max = bins.last().map(|b| b.hi).unwrap_or(hi);
    if let (Some(first), Some(last)) = (curve.first(), curve.last()) {
        x_min = x_min.min(first.0);
        x_max = x_max.max(last.0);
    }
    let peak = bins
        .iter()
        .map(|b| b.density)
        .chain(curve.iter().map(|p| p.1))
        .fold(0.0f64, f64::max);
    let y_max = if peak > 0.0 { peak * 1.1 } else { 1.0 };

    // A scoreless selection has nowhere to sit on the score axis.
    let marker = selection.and_then(|sel| {
        let score = sel.score?;
        Some(Marker {
            score,
            annotation: Annotation {
                name: sel.name.clone(),
                score,
                z_score: stats.z_score(score),
                percentile: percentile_rank(&scores, score).unwrap_or(0.0),
            },
        })
    });

    PlotScene {
        title: format!(
            "{} distribution ({}, {}kg, {})",
            settings.score_label, filter.sex, filter.weight_class, filter.federation
        ),
        x_label: settings.score_label.clone(),
        y_label: "Density".to_string(),
        body: SceneBody::Distribution(Distribution {
            histogram_label: format!("Best {}", settings.score_label),
            curve_label: format!("Normal fit (μ={:.1}, σ={:.1})", stats.mean, stats.std),
            stats,
            bins,
            curve,
            x_range: (x_min, x_max),
            y_max,
            marker,
        }),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
