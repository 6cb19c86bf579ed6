use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::{Dataset, Filter};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestScore {
    pub name: String,
    /// `None` when every entry of the athlete in this filter lacks a score.
    pub score: Option<f64>,
}

/// Best score per athlete for one filter, sorted non-increasing by score
/// with scoreless athletes last. Names are unique; rank is the 1-based
/// position and the rank total counts every athlete.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BestScores {
    pub entries: Vec<BestScore>,
}

impl BestScores {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The scored population used for the statistics.
    pub fn scores(&self) -> Vec<f64> {
        self.entries.iter().filter_map(|e| e.score).collect()
    }
}

pub fn best_scores(dataset: &Dataset, filter: &Filter) -> BestScores {
    // BTreeMap visits athletes in name order, which is the tie-break order
    // preserved by the stable sort below.
    let mut best: BTreeMap<&str, Option<f64>> = BTreeMap::new();
    for record in &dataset.records {
        if record.sex != Some(filter.sex)
            || record.weight_class != filter.weight_class
            || record.federation != filter.federation
        {
            continue;
        }
        let cur = best.entry(record.name.as_str()).or_insert(None);
        if let Some(score) = record.score
            && cur.is_none_or(|c| score > c)
        {
            *cur = Some(score);
        }
    }

    let mut entries = best
        .into_iter()
        .map(|(name, score)| BestScore {
            name: name.to_string(),
            score,
        })
        .collect::<Vec<_>>();
    entries.sort_by(|a, b| match (a.score, b.score) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    BestScores { entries }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/aggregate.rs"]
mod tests;
