use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const DEFAULT_RATING: f64 = 4.6;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq)]
pub struct Doctor {
    pub id: i64,
    pub name: String,
    pub specialization: String,
    pub hospital: String,
    pub contact: String,
    pub work_hours: String,
    pub bio: String,
    pub photo: String,
    pub rating: f64,
}

impl Doctor {
    /// Label used for the booking form's doctor picker.
    pub fn choice_label(&self) -> String {
        format!("{} — {}", self.name, self.specialization)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewDoctor {
    pub name: String,
    pub specialization: String,
    pub hospital: String,
    pub contact: String,
    pub work_hours: String,
    pub bio: String,
    pub photo: String,
    #[serde(default = "default_rating")]
    pub rating: f64,
}

fn default_rating() -> f64 {
    DEFAULT_RATING
}

/// Directory filters. Blank values are treated as absent.
#[derive(Debug, Default, Clone)]
pub struct DoctorFilter {
    pub query: Option<String>,
    pub specialization: Option<String>,
}

impl DoctorFilter {
    pub fn new(query: Option<&str>, specialization: Option<&str>) -> Self {
        let clean = |v: Option<&str>| v.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string);
        Self {
            query: clean(query),
            specialization: clean(specialization),
        }
    }

    /// LIKE pattern for the case-insensitive name/hospital match.
    pub fn like_pattern(&self) -> Option<String> {
        self.query.as_ref().map(|q| format!("%{}%", q.to_lowercase()))
    }
}
