pub mod job;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::date::parse_date;
use crate::skills::extract_skills;
use crate::{Education, Experience, PersonalInfo, Project, Resume};

lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap();
    // North-American digit grouping, optional country code and separators.
    static ref PHONE_RE: Regex =
        Regex::new(r"(\+?1?[-.\s]?)?\(?([0-9]{3})\)?[-.\s]?([0-9]{3})[-.\s]?([0-9]{4})").unwrap();
    static ref NAME_RE: Regex = Regex::new(r"^[A-Za-z\s.]{2,}$").unwrap();
    pub(crate) static ref DEGREE_RE: Regex = Regex::new(
        r"(?i)(bachelor|master|phd|b\.?s\.?|m\.?s\.?|b\.?a\.?|m\.?a\.?|b\.?tech|m\.?tech|mba|diploma)"
    )
    .unwrap();
    static ref YEAR_RE: Regex = Regex::new(r"(19|20)\d{2}").unwrap();
    static ref EXPERIENCE_DATE_RE: Regex = Regex::new(
        r"(?i)(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\s+(19|20)\d{2}"
    )
    .unwrap();
    static ref PROJECT_HEADER_RE: Regex = Regex::new(r"(?i)(project|projects?)[\s:]*").unwrap();
    static ref CERT_RE: Regex = Regex::new(r"(?i)(certification|certified|certificate)").unwrap();
    static ref TABLE_SPACING_RE: Regex = Regex::new(r"\s{5,}").unwrap();
    static ref BOX_DRAWING_RE: Regex = Regex::new(r"[│┌┐└┘├┤┬┴┼]").unwrap();
}

/// Run every field heuristic over the raw text. Extraction is best effort: a
/// pattern that finds nothing leaves its field at the default, it never
/// fails.
pub fn extract_resume(text: &str) -> Resume {
    let resume = Resume {
        personal_info: extract_personal_info(text),
        education: extract_education(text),
        experience: extract_experience(text),
        skills: extract_skills(text),
        projects: extract_projects(text),
        certifications: extract_certifications(text),
        format_issues: detect_format_issues(text),
        raw_text: text.to_string(),
    };

    debug!(
        education = resume.education.len(),
        experience = resume.experience.len(),
        skills = resume.skills.len(),
        projects = resume.projects.len(),
        "resume fields extracted"
    );

    resume
}

fn extract_personal_info(text: &str) -> PersonalInfo {
    let mut info = PersonalInfo::default();

    if let Some(email) = EMAIL_RE.find(text) {
        info.email = email.as_str().to_string();
    }
    if let Some(phone) = PHONE_RE.find(text) {
        info.phone = phone.as_str().to_string();
    }

    // The candidate name is almost always one of the first few lines.
    for line in text.lines().take(6) {
        let clean = line.trim();
        if clean.len() > 2
            && clean.len() < 50
            && !clean.contains('@')
            && !PHONE_RE.is_match(clean)
            && NAME_RE.is_match(clean)
        {
            info.name = clean.to_string();
            break;
        }
    }

    info
}

fn extract_education(text: &str) -> Vec<Education> {
    let lines: Vec<&str> = text.lines().collect();
    let mut entries = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        let Some(degree) = DEGREE_RE.find(line) else {
            continue;
        };

        let mut education = Education {
            degree: degree.as_str().trim().to_string(),
            ..Education::default()
        };

        // Institution: nearest following line that is not itself a degree
        // line and long enough to be a real name.
        for candidate in lines[i..lines.len().min(i + 3)].iter() {
            let current = candidate.trim();
            if current.len() > 5 && !DEGREE_RE.is_match(current) {
                education.institution = current.to_string();
                break;
            }
        }

        if let Some(year) = YEAR_RE.find(line) {
            education.year = year.as_str().parse().unwrap_or(0);
        }

        entries.push(education);
    }

    entries
}

fn extract_experience(text: &str) -> Vec<Experience> {
    let lines: Vec<&str> = text.lines().collect();
    let mut entries = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        if !EXPERIENCE_DATE_RE.is_match(line) {
            continue;
        }

        let mut experience = Experience::default();

        let dates: Vec<&str> = EXPERIENCE_DATE_RE
            .find_iter(line)
            .map(|m| m.as_str())
            .collect();
        if let Some(first) = dates.first() {
            match parse_date(first) {
                Ok(date) => experience.start_date = Some(date),
                Err(err) => debug!(%err, "skipping unparseable start date"),
            }
        }
        if let Some(second) = dates.get(1) {
            match parse_date(second) {
                Ok(date) => experience.end_date = Some(date),
                Err(err) => debug!(%err, "skipping unparseable end date"),
            }
        }
        experience.is_current = experience.end_date.is_none();

        // Company and position come from the nearest non-date lines around
        // the date hit, in encounter order.
        let window_start = i.saturating_sub(2);
        let window_end = lines.len().min(i + 3);
        for candidate in &lines[window_start..window_end] {
            let current = candidate.trim();
            if current.len() > 2 && !EXPERIENCE_DATE_RE.is_match(current) {
                if experience.company.is_empty() {
                    experience.company = current.to_string();
                } else if experience.position.is_empty() {
                    experience.position = current.to_string();
                }
            }
        }

        if !experience.company.is_empty() {
            entries.push(experience);
        }
    }

    entries
}

fn extract_projects(text: &str) -> Vec<Project> {
    let lines: Vec<&str> = text.lines().collect();
    let mut projects = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        if !PROJECT_HEADER_RE.is_match(line) {
            continue;
        }

        for candidate in lines[i + 1..lines.len().min(i + 10)].iter() {
            let project_line = candidate.trim();
            if project_line.len() > 10 {
                projects.push(Project {
                    name: project_line.to_string(),
                    description: project_line.to_string(),
                });
            }
        }
        break;
    }

    projects
}

fn extract_certifications(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| CERT_RE.is_match(line))
        .map(str::trim)
        .filter(|line| line.len() > 5)
        .map(str::to_string)
        .collect()
}

/// Approximate signals for layouts that break ATS text extraction. These are
/// heuristics, not exact detectors.
fn detect_format_issues(text: &str) -> Vec<String> {
    let mut issues = Vec::new();

    if text.contains('\t') || TABLE_SPACING_RE.is_match(text) {
        issues.push("Document may contain tables or complex formatting".to_string());
    }

    if BOX_DRAWING_RE.is_match(text) {
        issues.push("Document contains table borders or special formatting".to_string());
    }

    for line in text.lines() {
        if line.split_whitespace().count() > 10 {
            issues.push("Possible multi-column layout detected".to_string());
            break;
        }
    }

    issues
}
