use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::model::Filter;
use crate::report::json::{SceneExport, render_scene_json};
use crate::report::svg::write_svg;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("drawing failed: {0}")]
    Draw(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    pub svg: PathBuf,
    pub json: PathBuf,
}

/// `liftscope_ffforce_M_120plus`
pub fn export_basename(filter: &Filter) -> String {
    let federation = filter
        .federation
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase();
    format!(
        "liftscope_{}_{}_{}",
        federation,
        filter.sex,
        filter.weight_class.replace('+', "plus")
    )
}

pub fn write_json(path: &Path, export: &SceneExport<'_>) -> Result<(), ExportError> {
    let body = render_scene_json(export)?;
    fs::write(path, body)?;
    Ok(())
}

pub fn write_exports(
    dir: &Path,
    export: &SceneExport<'_>,
    score_label: &str,
) -> Result<ExportPaths, ExportError> {
    fs::create_dir_all(dir)?;
    let base = export_basename(export.filter);
    let paths = ExportPaths {
        svg: dir.join(format!("{base}.svg")),
        json: dir.join(format!("{base}.json")),
    };
    write_svg(&paths.svg, export.scene, score_label)?;
    write_json(&paths.json, export)?;
    info!(
        svg = %paths.svg.display(),
        json = %paths.json.display(),
        "exported plot"
    );
    Ok(paths)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/export.rs"]
mod tests;
