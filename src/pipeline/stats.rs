use serde::Serialize;

/// Mean and sample standard deviation (ddof = 1) of a score population.
/// A population of one has `std == 0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PopulationStats {
    pub n: usize,
    pub mean: f64,
    pub std: f64,
}

impl PopulationStats {
    pub fn from_scores(scores: &[f64]) -> Option<PopulationStats> {
        if scores.is_empty() {
            return None;
        }
        let n = scores.len();
        let mean = scores.iter().sum::<f64>() / n as f64;
        let std = if n < 2 {
            0.0
        } else {
            let ss = scores.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
            (ss / (n - 1) as f64).sqrt()
        };
        Some(PopulationStats { n, mean, std })
    }

    /// `None` when the spread is zero, so the z-score is undefined.
    pub fn z_score(&self, score: f64) -> Option<f64> {
        if !self.has_spread() {
            return None;
        }
        Some((score - self.mean) / self.std)
    }

    pub fn has_spread(&self) -> bool {
        self.std.is_finite() && self.std > 0.0
    }
}

/// Share of the population at or below `score`, in percent. Ties and the
/// value itself count, so the maximum always maps to 100.
pub fn percentile_rank(scores: &[f64], score: f64) -> Option<f64> {
    if scores.is_empty() {
        return None;
    }
    let at_or_below = scores.iter().filter(|&&v| v <= score).count();
    Some(at_or_below as f64 / scores.len() as f64 * 100.0)
}

pub fn normal_pdf(x: f64, mean: f64, std: f64) -> f64 {
    let z = (x - mean) / std;
    (-0.5 * z * z).exp() / (std * (2.0 * std::f64::consts::PI).sqrt())
}

/// Normal density on the integer grid `floor(x_min) - 5 ..= ceil(x_max) + 5`.
/// Empty when the population has no spread.
pub fn density_curve(stats: &PopulationStats, x_min: f64, x_max: f64) -> Vec<(f64, f64)> {
    if !stats.has_spread() || !x_min.is_finite() || !x_max.is_finite() {
        return Vec::new();
    }
    let start = x_min.floor() as i64 - 5;
    let end = x_max.ceil() as i64 + 5;
    (start..=end)
        .map(|x| {
            let x = x as f64;
            (x, normal_pdf(x, stats.mean, stats.std))
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lo: f64,
    pub hi: f64,
    pub count: usize,
    pub density: f64,
}

/// Equal-width bins over `[min, max]` with the last bin closed on the right.
/// Heights are densities, so the bar areas sum to one.
pub fn histogram(scores: &[f64], bins: usize) -> Vec<HistogramBin> {
    if scores.is_empty() || bins == 0 {
        return Vec::new();
    }
    let (mut lo, mut hi) = min_max(scores);
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }
    let width = (hi - lo) / bins as f64;

    let mut counts = vec![0usize; bins];
    for &v in scores {
        let idx = (((v - lo) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    let n = scores.len() as f64;
    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lo: lo + width * i as f64,
            hi: lo + width * (i + 1) as f64,
            count,
            density: count as f64 / (n * width),
        })
        .collect()
}

pub fn min_max(scores: &[f64]) -> (f64, f64) {
    scores
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stats.rs"]
mod tests;
