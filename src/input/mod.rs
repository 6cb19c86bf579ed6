use std::path::Path;
use std::time::Instant;

use thiserror::Error;
use tracing::{debug, info};

pub mod cache;
pub mod weight_class;

use cache::open_maybe_gz;
use weight_class::normalize_weight_class;

use crate::model::{Dataset, ResultRecord, Sex};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingFile(String),
    #[error("missing required column '{0}'")]
    MissingColumn(String),
    #[error("parse error: {0}")]
    Csv(#[from] csv::Error),
}

/// Header names of the five columns the explorer needs. Defaults follow the
/// OpenIPF CSV export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    pub name: String,
    pub sex: String,
    pub weight_class: String,
    pub federation: String,
    pub score: String,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            name: "Name".to_string(),
            sex: "Sex".to_string(),
            weight_class: "WeightClassKg".to_string(),
            federation: "Federation".to_string(),
            score: "Goodlift".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    pub columns: ColumnMap,
    /// `None` picks tab for `.tsv`/`.tsv.gz` and comma otherwise.
    pub delimiter: Option<u8>,
}

struct ColumnIndex {
    name: usize,
    sex: usize,
    weight_class: usize,
    federation: usize,
    score: usize,
}

pub fn load_results(path: &Path, opts: &LoadOptions) -> Result<Dataset, InputError> {
    if !path.exists() {
        return Err(InputError::MissingFile(format!(
            "dataset {} does not exist",
            path.display()
        )));
    }
    let started = Instant::now();
    let reader = open_maybe_gz(path)?;
    let delimiter = opts.delimiter.unwrap_or_else(|| default_delimiter(path));
    let mut csv = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(reader);

    let headers = csv.headers()?.clone();
    let index = resolve_columns(&headers, &opts.columns)?;

    let mut records = Vec::new();
    let mut unknown_sex = 0usize;
    for row in csv.records() {
        let row = row?;
        let field = |idx: usize| row.get(idx).unwrap_or("").trim();

        let sex = Sex::from_code(field(index.sex));
        if sex.is_none() {
            unknown_sex += 1;
        }
        records.push(ResultRecord {
            name: field(index.name).to_string(),
            sex,
            weight_class: normalize_weight_class(field(index.weight_class)),
            federation: field(index.federation).to_string(),
            score: parse_score(field(index.score)),
        });
    }

    info!(
        path = %path.display(),
        rows = records.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "loaded results dataset"
    );
    if unknown_sex > 0 {
        debug!(rows = unknown_sex, "rows with a sex outside M/F are never matched");
    }

    Ok(Dataset::new(records))
}

fn resolve_columns(headers: &csv::StringRecord, map: &ColumnMap) -> Result<ColumnIndex, InputError> {
    let find = |wanted: &str| -> Result<usize, InputError> {
        headers
            .iter()
            .position(|h| h.trim().trim_start_matches('\u{feff}') == wanted)
            .ok_or_else(|| InputError::MissingColumn(wanted.to_string()))
    };
    Ok(ColumnIndex {
        name: find(&map.name)?,
        sex: find(&map.sex)?,
        weight_class: find(&map.weight_class)?,
        federation: find(&map.federation)?,
        score: find(&map.score)?,
    })
}

fn default_delimiter(path: &Path) -> u8 {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    let name = name.strip_suffix(".gz").unwrap_or(&name);
    if name.ends_with(".tsv") { b'\t' } else { b',' }
}

pub fn parse_score(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
