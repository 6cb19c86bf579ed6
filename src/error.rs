use thiserror::Error;

use crate::config::ConfigError;
use crate::input::InputError;
use crate::report::export::ExportError;
use crate::ui::controller::ControlError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to load dataset: {0}")]
    Input(#[from] InputError),
    #[error(transparent)]
    Control(#[from] ControlError),
    #[error("export failed: {0}")]
    Export(#[from] ExportError),
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
    #[error("logging setup failed: {0}")]
    Logging(String),
}
