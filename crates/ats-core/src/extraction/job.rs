use lazy_static::lazy_static;
use regex::Regex;

use super::DEGREE_RE;
use crate::similarity::extract_keywords;
use crate::skills::extract_skills;
use crate::text::remove_duplicates;
use crate::JobDescription;

const JOB_KEYWORD_COUNT: usize = 20;

lazy_static! {
    static ref COMPANY_RE: Regex = Regex::new(r"(?i)(company|organization|corp|inc|ltd)").unwrap();
    static ref EXPERIENCE_YEARS_RE: Regex = Regex::new(r"(\d+)\s*\+?\s*year").unwrap();
    // Capture stops at end of line.
    static ref LOCATION_RE: Regex =
        Regex::new(r"(?i)(location|based in|located in)[\s:]*([a-zA-Z ,]+)").unwrap();
}

/// Heuristic job-description extraction. Never fails; empty or garbage input
/// yields defaulted fields. Only required skills are populated, there is no
/// preferred-skill heuristic.
pub fn extract_job_description(text: &str) -> JobDescription {
    JobDescription {
        title: extract_title(text),
        company: extract_company(text),
        required_skills: extract_skills(text),
        min_experience: extract_min_experience(text),
        education: extract_required_education(text),
        location: extract_location(text),
        keywords: extract_keywords(text, JOB_KEYWORD_COUNT),
        raw_text: text.to_string(),
        ..JobDescription::default()
    }
}

fn extract_title(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .find(|line| line.len() > 5 && line.len() < 100)
        .map(str::to_string)
        .unwrap_or_default()
}

fn extract_company(text: &str) -> String {
    text.lines()
        .find(|line| COMPANY_RE.is_match(line))
        .map(|line| line.trim().to_string())
        .unwrap_or_default()
}

fn extract_min_experience(text: &str) -> i32 {
    EXPERIENCE_YEARS_RE
        .captures(&text.to_lowercase())
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

fn extract_required_education(text: &str) -> Vec<String> {
    let matches: Vec<String> = DEGREE_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect();
    remove_duplicates(&matches)
}

fn extract_location(text: &str) -> String {
    LOCATION_RE
        .captures(text)
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const POSTING: &str = "\
Senior Platform Engineer
TechFlow Inc
Location: Austin, Texas
We need a developer with python and go experience.
5+ years of experience required.
Bachelor degree in a technical field preferred.";

    #[test]
    fn extracts_title_from_first_substantial_line() {
        let jd = extract_job_description(POSTING);
        assert_eq!(jd.title, "Senior Platform Engineer");
    }

    #[test]
    fn extracts_company_line() {
        let jd = extract_job_description(POSTING);
        assert_eq!(jd.company, "TechFlow Inc");
    }

    #[test]
    fn extracts_required_skills_from_dictionary() {
        let jd = extract_job_description(POSTING);
        assert_eq!(jd.required_skills, vec!["python", "go"]);
        assert!(jd.preferred_skills.is_empty());
    }

    #[test]
    fn extracts_minimum_experience_years() {
        let jd = extract_job_description(POSTING);
        assert_eq!(jd.min_experience, 5);
    }

    #[test]
    fn extracts_required_education() {
        let jd = extract_job_description(POSTING);
        assert_eq!(jd.education, vec!["Bachelor"]);
    }

    #[test]
    fn extracts_location_up_to_end_of_line() {
        let jd = extract_job_description(POSTING);
        assert_eq!(jd.location, "Austin, Texas");
    }

    #[test]
    fn extracts_top_keywords_by_frequency() {
        let jd = extract_job_description("rust rust rust servers servers uptime");
        assert_eq!(jd.keywords, vec!["rust", "servers", "uptime"]);
    }

    #[test]
    fn defaults_min_experience_to_zero() {
        let jd = extract_job_description("No numeric requirement here");
        assert_eq!(jd.min_experience, 0);
    }
}
