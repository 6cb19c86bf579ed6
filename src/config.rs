use std::path::PathBuf;

use thiserror::Error;

use crate::cli::DataArgs;
use crate::input::{ColumnMap, LoadOptions};
use crate::model::{Filter, Sex, categories_for};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("weight class '{class}' is not a {sex} category (use one of: {allowed})")]
    InvalidClass {
        sex: Sex,
        class: String,
        allowed: String,
    },
    #[error("--bins must be at least 1")]
    ZeroBins,
}

/// Everything the session needs besides the dataset itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub federation: String,
    pub score_label: String,
    pub bins: usize,
    pub initial_sex: Sex,
    pub initial_class: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            federation: "FFForce".to_string(),
            score_label: "GL Points".to_string(),
            bins: 30,
            initial_sex: Sex::Male,
            initial_class: "93".to_string(),
        }
    }
}

impl Settings {
    pub fn initial_filter(&self) -> Result<Filter, ConfigError> {
        Filter::new(self.initial_sex, &self.initial_class, &self.federation).ok_or_else(|| {
            ConfigError::InvalidClass {
                sex: self.initial_sex,
                class: self.initial_class.clone(),
                allowed: categories_for(self.initial_sex).join(", "),
            }
        })
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_path: PathBuf,
    pub load: LoadOptions,
    pub settings: Settings,
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_args(args: &DataArgs) -> Result<Self, ConfigError> {
        if args.bins == 0 {
            return Err(ConfigError::ZeroBins);
        }
        let settings = Settings {
            federation: args.federation.clone(),
            score_label: args.score_label.clone(),
            bins: args.bins,
            initial_sex: args.sex,
            initial_class: args.weight_class.clone(),
        };
        // Fail before the dataset is read.
        settings.initial_filter()?;

        Ok(Self {
            data_path: args.data.clone(),
            load: LoadOptions {
                columns: ColumnMap {
                    name: args.name_column.clone(),
                    sex: args.sex_column.clone(),
                    weight_class: args.class_column.clone(),
                    federation: args.federation_column.clone(),
                    score: args.score_column.clone(),
                },
                delimiter: args.delimiter,
            },
            settings,
            log_file: args.log_file.clone(),
        })
    }
}
