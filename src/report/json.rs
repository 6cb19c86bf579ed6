use serde::Serialize;

use crate::model::{Filter, Selection};
use crate::pipeline::aggregate::BestScores;
use crate::report::PlotScene;

#[derive(Debug, Serialize)]
pub struct SceneExport<'a> {
    pub tool: &'static str,
    pub version: &'static str,
    pub filter: &'a Filter,
    pub athletes: &'a BestScores,
    pub selection: Option<&'a Selection>,
    pub info: Option<&'a str>,
    pub error: Option<&'a str>,
    pub scene: &'a PlotScene,
}

impl<'a> SceneExport<'a> {
    pub fn new(
        filter: &'a Filter,
        athletes: &'a BestScores,
        selection: Option<&'a Selection>,
        scene: &'a PlotScene,
    ) -> Self {
        Self {
            tool: "liftscope",
            version: env!("CARGO_PKG_VERSION"),
            filter,
            athletes,
            selection,
            info: None,
            error: None,
            scene,
        }
    }

    pub fn with_messages(mut self, info: Option<&'a str>, error: Option<&'a str>) -> Self {
        self.info = info;
        self.error = error;
        self
    }
}

pub fn render_scene_json(export: &SceneExport<'_>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(export)
}
