use std::cmp::Ordering;
use std::sync::LazyLock;

use regex_syntax::hir::{Class, HirKind};
use strsim::jaro_winkler;
use unicode_normalization::UnicodeNormalization;

use crate::pipeline::aggregate::{BestScore, BestScores};

const SUGGEST_MIN_SIMILARITY: f64 = 0.80;

/// Lowercase, decompose, drop nonspacing marks (category Mn). `"Dvořák"`
/// and `"DVORAK"` both become `"dvorak"`. Spacing marks (Mc) are kept.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_nonspacing_mark(*c))
        .collect()
}

// Sorted, disjoint ranges of General_Category=Mn from the regex Unicode tables.
static NONSPACING_MARKS: LazyLock<Vec<(char, char)>> = LazyLock::new(|| {
    match regex_syntax::parse(r"\p{Mn}").map(|hir| hir.into_kind()) {
        Ok(HirKind::Class(Class::Unicode(class))) => class
            .ranges()
            .iter()
            .map(|r| (r.start(), r.end()))
            .collect(),
        _ => Vec::new(),
    }
});

fn is_nonspacing_mark(c: char) -> bool {
    NONSPACING_MARKS
        .binary_search_by(|&(lo, hi)| {
            if hi < c {
                Ordering::Less
            } else if lo > c {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .is_ok()
}

/// First athlete, in ranking order, whose normalized name contains the
/// normalized query. Returns the 1-based rank with the entry.
pub fn find_athlete<'a>(best: &'a BestScores, query: &str) -> Option<(usize, &'a BestScore)> {
    let needle = normalize(query.trim());
    best.entries
        .iter()
        .enumerate()
        .find(|(_, entry)| normalize(&entry.name).contains(&needle))
        .map(|(idx, entry)| (idx + 1, entry))
}

/// Closest name by Jaro-Winkler similarity, when it is close enough to be a
/// plausible typo of the query.
pub fn suggest<'a>(best: &'a BestScores, query: &str) -> Option<&'a str> {
    let needle = normalize(query.trim());
    if needle.is_empty() {
        return None;
    }
    best.entries
        .iter()
        .map(|entry| (name_similarity(&needle, &normalize(&entry.name)), entry))
        .filter(|(sim, _)| *sim >= SUGGEST_MIN_SIMILARITY)
        .max_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, entry)| entry.name.as_str())
}

// Queries are often a single surname, so each name token is scored too.
fn name_similarity(needle: &str, name: &str) -> f64 {
    name.split_whitespace()
        .map(|token| jaro_winkler(needle, token))
        .fold(jaro_winkler(needle, name), f64::max)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/matcher.rs"]
mod tests;
