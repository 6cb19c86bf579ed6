pub mod app;
pub mod controller;
pub mod draw;

use std::io;
use std::path::Path;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::Terminal;
use ratatui::backend::Backend;
use tracing::{error, info, warn};

use crate::config::Settings;
use crate::error::AppError;
use crate::model::Dataset;
use crate::report::export::write_exports;
use app::{Action, App};
use controller::Session;

pub fn run_explorer(
    dataset: &Dataset,
    settings: &Settings,
    export_dir: &Path,
) -> Result<(), AppError> {
    let mut session = Session::new(dataset, settings)?;
    info!(
        sex = %session.state.filter.sex,
        class = %session.state.filter.weight_class,
        athletes = session.best.len(),
        rows = dataset.len(),
        "starting interactive session"
    );

    // try_init installs a panic hook that restores the terminal, but does
    // not undo raw mode when a later setup step fails.
    let mut terminal = match ratatui::try_init() {
        Ok(terminal) => terminal,
        Err(err) => {
            ratatui::restore();
            return Err(err.into());
        }
    };

    let res = event_loop(&mut terminal, &mut session, dataset, settings, export_dir);
    let teardown = terminal.show_cursor().and_then(|()| ratatui::try_restore());
    finish_session(res, teardown)
}

/// An error from the session wins over one from restoring the terminal.
fn finish_session(res: Result<(), AppError>, teardown: io::Result<()>) -> Result<(), AppError> {
    match (res, teardown) {
        (Err(err), teardown) => {
            if let Err(restore_err) = teardown {
                warn!(%restore_err, "failed to restore terminal");
            }
            Err(err)
        }
        (Ok(()), teardown) => Ok(teardown?),
    }
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    session: &mut Session,
    dataset: &Dataset,
    settings: &Settings,
    export_dir: &Path,
) -> Result<(), AppError> {
    let mut app = App::new(session);
    loop {
        terminal.draw(|f| draw::ui(f, &app, session, settings))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        match app.on_key(key, session) {
            Action::None => {}
            Action::Quit => return Ok(()),
            Action::Dispatch(intent) => match session.dispatch(intent, dataset, settings) {
                Ok(_) => {
                    app.sync(session);
                    app.status = None;
                }
                Err(err) => {
                    warn!(%err, "rejected input");
                    app.status = Some(err.to_string());
                }
            },
            Action::Export => {
                match write_exports(export_dir, &session.export_view(), &settings.score_label) {
                    Ok(paths) => app.status = Some(format!("Saved {}", paths.svg.display())),
                    Err(err) => {
                        error!(%err, "export failed");
                        app.status = Some(format!("Export failed: {err}"));
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/ui/mod.rs"]
mod tests;
