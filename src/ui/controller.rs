use thiserror::Error;
use tracing::debug;

use crate::config::{ConfigError, Settings};
use crate::model::{Dataset, Filter, Selection, Sex, categories_for};
use crate::pipeline::aggregate::{BestScores, best_scores};
use crate::pipeline::matcher::{find_athlete, suggest};
use crate::pipeline::stats::{PopulationStats, percentile_rank};
use crate::report::json::SceneExport;
use crate::report::text::{info_line, not_found_line};
use crate::report::{PlotScene, render_scene};

/// One user action on the three input widgets.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    SexChanged(Sex),
    WeightClassChanged(String),
    NameSubmitted(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControlError {
    #[error("weight class '{class}' is not a {sex} category (use one of: {allowed})")]
    UnknownWeightClass {
        sex: Sex,
        class: String,
        allowed: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub filter: Filter,
    pub selection: Option<Selection>,
    pub last_error: Option<String>,
    pub last_info: Option<String>,
}

impl SessionState {
    pub fn new(filter: Filter) -> Self {
        Self {
            filter,
            selection: None,
            last_error: None,
            last_info: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub next: SessionState,
    /// Ranking to redraw the plot from. `None` leaves the current plot as is.
    pub rerender: Option<BestScores>,
}

/// Computes the state that follows `intent`. Touches nothing but its
/// arguments, so every rule can be checked without a terminal.
pub fn transition(
    state: &SessionState,
    intent: Intent,
    dataset: &Dataset,
    settings: &Settings,
) -> Result<Transition, ControlError> {
    match intent {
        Intent::SexChanged(sex) => {
            let next = SessionState::new(state.filter.with_sex(sex));
            let best = best_scores(dataset, &next.filter);
            Ok(Transition {
                next,
                rerender: Some(best),
            })
        }
        Intent::WeightClassChanged(class) => {
            let filter = state.filter.with_class(&class).ok_or_else(|| {
                ControlError::UnknownWeightClass {
                    sex: state.filter.sex,
                    class: class.clone(),
                    allowed: categories_for(state.filter.sex).join(", "),
                }
            })?;
            let next = SessionState::new(filter);
            let best = best_scores(dataset, &next.filter);
            Ok(Transition {
                next,
                rerender: Some(best),
            })
        }
        Intent::NameSubmitted(query) => {
            let best = best_scores(dataset, &state.filter);
            let mut next = state.clone();
            match find_athlete(&best, &query) {
                Some((rank, entry)) => {
                    let selection = Selection {
                        name: entry.name.clone(),
                        score: entry.score,
                        rank,
                    };
                    let scores = best.scores();
                    let z = selection.score.and_then(|score| {
                        PopulationStats::from_scores(&scores)?.z_score(score)
                    });
                    let percentile = selection
                        .score
                        .and_then(|score| percentile_rank(&scores, score));
                    next.last_info = Some(info_line(
                        &selection,
                        best.len(),
                        z,
                        percentile,
                        &settings.score_label,
                    ));
                    next.last_error = None;
                    next.selection = Some(selection);
                    Ok(Transition {
                        next,
                        rerender: Some(best),
                    })
                }
                None => {
                    debug!(query = %query, "no athlete matched search");
                    next.selection = None;
                    next.last_info = None;
                    next.last_error = Some(not_found_line(
                        &query,
                        &state.filter,
                        suggest(&best, &query),
                    ));
                    Ok(Transition {
                        next,
                        rerender: None,
                    })
                }
            }
        }
    }
}

/// Interaction state plus the plot currently on screen.
#[derive(Debug, Clone)]
pub struct Session {
    pub state: SessionState,
    pub best: BestScores,
    pub scene: PlotScene,
}

impl Session {
    pub fn new(dataset: &Dataset, settings: &Settings) -> Result<Session, ConfigError> {
        let state = SessionState::new(settings.initial_filter()?);
        let best = best_scores(dataset, &state.filter);
        let scene = render_scene(&best, None, &state.filter, settings);
        Ok(Session { state, best, scene })
    }

    /// Applies `intent` and redraws the plot when the transition asks for
    /// it. Returns whether the plot was redrawn.
    pub fn dispatch(
        &mut self,
        intent: Intent,
        dataset: &Dataset,
        settings: &Settings,
    ) -> Result<bool, ControlError> {
        debug!(?intent, "dispatch");
        let Transition { next, rerender } = transition(&self.state, intent, dataset, settings)?;
        self.state = next;
        let Some(best) = rerender else {
            return Ok(false);
        };
        self.scene = render_scene(
            &best,
            self.state.selection.as_ref(),
            &self.state.filter,
            settings,
        );
        self.best = best;
        Ok(true)
    }

    pub fn export_view(&self) -> SceneExport<'_> {
        SceneExport::new(
            &self.state.filter,
            &self.best,
            self.state.selection.as_ref(),
            &self.scene,
        )
        .with_messages(
            self.state.last_info.as_deref(),
            self.state.last_error.as_deref(),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/ui/controller.rs"]
mod tests;
