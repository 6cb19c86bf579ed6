use serde::Serialize;

use crate::model::Sex;

#[derive(Debug, Clone, PartialEq)]
pub struct ResultRecord {
    pub name: String,
    pub sex: Option<Sex>,
    pub weight_class: String,
    pub federation: String,
    pub score: Option<f64>,
}

/// The athlete picked by a name search, with their rank at the time of the
/// search. A scoreless athlete can be selected but gets no plot marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection {
    pub name: String,
    pub score: Option<f64>,
    pub rank: usize,
}

/// Loaded once at startup and only borrowed afterwards.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub records: Vec<ResultRecord>,
}

impl Dataset {
    pub fn new(records: Vec<ResultRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
