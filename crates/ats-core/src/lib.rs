pub mod analysis;
pub mod date;
pub mod error;
pub mod extraction;
pub mod logging;
pub mod parser;
pub mod scoring;
pub mod similarity;
pub mod skills;
pub mod text;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// Core data models shared by the extraction and scoring stages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resume {
    pub personal_info: PersonalInfo,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
    pub certifications: Vec<String>,
    pub raw_text: String,
    pub format_issues: Vec<String>,
}

impl Resume {
    /// Total years of experience summed across all entries. An entry without
    /// an end date runs through today; an entry whose start date never parsed
    /// contributes nothing. Overlapping or negative spans simply sum.
    pub fn total_experience_years(&self) -> f64 {
        let today = Utc::now().date_naive();
        self.experience
            .iter()
            .filter_map(|exp| {
                let start = exp.start_date?;
                let end = exp.end_date.unwrap_or(today);
                Some((end - start).num_days() as f64 / 365.25)
            })
            .sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    /// Graduating year, 0 when no year was found on the degree line.
    pub year: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub description: String,
    pub is_current: bool,
}

/// The heuristic extractor cannot tell a project name apart from its
/// description; both fields carry the same line of text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobDescription {
    pub title: String,
    pub company: String,
    pub required_skills: Vec<String>,
    /// Declared in the wire model but never populated by any extraction rule.
    pub preferred_skills: Vec<String>,
    pub min_experience: i32,
    pub education: Vec<String>,
    pub location: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub raw_text: String,
}
