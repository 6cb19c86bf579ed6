mod cli;
mod config;
mod error;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;
mod ui;

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{info, warn};

use crate::cli::{Cli, Command};
use crate::config::{AppConfig, Settings};
use crate::error::AppError;
use crate::input::load_results;
use crate::logging::{init_tracing, log_target};
use crate::model::Dataset;
use crate::report::export::write_json;
use crate::report::svg::write_svg;
use crate::report::text::render_report_text;
use crate::ui::controller::{Intent, Session};

const REPORT_TOP_N: usize = 10;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = AppConfig::from_args(&cli.data)?;
    let command = cli.command.unwrap_or(Command::Explore {
        export_dir: PathBuf::from("."),
    });
    let interactive = matches!(command, Command::Explore { .. });
    init_tracing(log_target(config.log_file.as_deref(), interactive))?;

    let dataset = load_results(&config.data_path, &config.load)?;
    if dataset.is_empty() {
        warn!(path = %config.data_path.display(), "dataset has no rows");
    }

    match command {
        Command::Explore { export_dir } => {
            ui::run_explorer(&dataset, &config.settings, &export_dir)
        }
        Command::Report { name, svg, json } => run_report(
            &dataset,
            &config.settings,
            name,
            svg.as_deref(),
            json.as_deref(),
        ),
    }
}

fn run_report(
    dataset: &Dataset,
    settings: &Settings,
    name: Option<String>,
    svg: Option<&Path>,
    json: Option<&Path>,
) -> Result<(), AppError> {
    let mut session = Session::new(dataset, settings)?;
    if let Some(query) = name {
        session.dispatch(Intent::NameSubmitted(query), dataset, settings)?;
    }

    print!(
        "{}",
        render_report_text(
            &session.scene,
            &session.best,
            session.state.last_info.as_deref(),
            session.state.last_error.as_deref(),
            REPORT_TOP_N,
        )
    );

    if let Some(path) = svg {
        write_svg(path, &session.scene, &settings.score_label)?;
        info!(path = %path.display(), "wrote SVG plot");
    }
    if let Some(path) = json {
        write_json(path, &session.export_view())?;
        info!(path = %path.display(), "wrote JSON plot data");
    }
    Ok(())
}
