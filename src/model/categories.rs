use std::fmt;
use std::str::FromStr;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Sex {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    pub fn code(self) -> &'static str {
        match self {
            Sex::Male => "M",
            Sex::Female => "F",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Sex::Male => "Men",
            Sex::Female => "Women",
        }
    }

    /// Parses the dataset's Sex column. Anything other than `M`/`F`
    /// (e.g. `Mx`) has no filterable category.
    pub fn from_code(raw: &str) -> Option<Sex> {
        match raw.trim() {
            "M" => Some(Sex::Male),
            "F" => Some(Sex::Female),
            _ => None,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "M" | "MEN" | "MALE" => Ok(Sex::Male),
            "F" | "WOMEN" | "FEMALE" => Ok(Sex::Female),
            other => Err(format!("invalid sex '{other}' (use M|F)")),
        }
    }
}

const MEN_CLASSES: &[&str] = &["59", "66", "74", "83", "93", "105", "120+"];
const WOMEN_CLASSES: &[&str] = &["47", "52", "57", "63", "72", "84", "84+"];

pub fn categories_for(sex: Sex) -> &'static [&'static str] {
    match sex {
        Sex::Male => MEN_CLASSES,
        Sex::Female => WOMEN_CLASSES,
    }
}

pub fn is_valid_class(sex: Sex, weight_class: &str) -> bool {
    categories_for(sex).contains(&weight_class)
}

/// Active (sex, weight class, federation) selection. `weight_class` is
/// always a member of `categories_for(sex)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Filter {
    pub sex: Sex,
    pub weight_class: String,
    pub federation: String,
}

impl Filter {
    pub fn new(sex: Sex, weight_class: &str, federation: &str) -> Option<Filter> {
        if !is_valid_class(sex, weight_class) {
            return None;
        }
        Some(Filter {
            sex,
            weight_class: weight_class.to_string(),
            federation: federation.to_string(),
        })
    }

    /// Same federation, new sex, first category of that sex.
    pub fn with_sex(&self, sex: Sex) -> Filter {
        Filter {
            sex,
            weight_class: categories_for(sex)[0].to_string(),
            federation: self.federation.clone(),
        }
    }

    pub fn with_class(&self, weight_class: &str) -> Option<Filter> {
        Filter::new(self.sex, weight_class, &self.federation)
    }

    pub fn class_index(&self) -> usize {
        categories_for(self.sex)
            .iter()
            .position(|c| *c == self.weight_class)
            .unwrap_or(0)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/categories.rs"]
mod tests;
