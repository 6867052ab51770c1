pub mod suggestions;
pub mod weights;

use crate::analysis::{
    AnalysisResult, EducationResult, ExperienceResult, FormatResult, ScoreBreakdown,
    SkillMatchResult,
};
use crate::similarity::skill_match;
use crate::text::{remove_duplicates, word_count};
use crate::{Education, JobDescription, Resume};

use self::weights::{ScoringWeights, DEFAULT_WEIGHTS};

const FORMAT_ISSUE_PENALTY: f64 = 0.2;
const FORMAT_SCORE_FLOOR: f64 = 0.3;
/// One minor issue is tolerated before a resume stops counting as
/// ATS-friendly.
const ATS_FRIENDLY_MAX_ISSUES: usize = 1;
const RESUME_WORD_LIMIT: usize = 1000;

const STANDALONE_SKILL_BASE: f64 = 0.3;
const STANDALONE_SKILL_CAP: f64 = 0.7;
/// Skill-count breadth stops earning credit past this many skills.
const STANDALONE_SKILL_TARGET: f64 = 20.0;

/// Equivalence classes for degree comparison. "B.S." and "bachelor" must land
/// in the same class even though neither contains the other; comparison runs
/// on a compact key with separators stripped.
const DEGREE_EQUIVALENTS: &[(&str, &[&str])] = &[
    ("bachelor", &["bs", "ba", "btech", "bsc", "bachelor's"]),
    ("master", &["ms", "ma", "mtech", "msc", "master's", "mba"]),
    ("phd", &["doctorate", "doctoral", "ph.d"]),
];

#[derive(Debug, Clone)]
pub struct ScoringConfig {
    pub weights: ScoringWeights,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: DEFAULT_WEIGHTS,
        }
    }
}

pub struct ScoringEngine {
    config: ScoringConfig,
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Score a resume against a job description: four weighted sub-scores,
    /// an overall 0-100 score, and improvement suggestions.
    pub fn analyze(&self, resume: &Resume, job: &JobDescription) -> AnalysisResult {
        let weights = self.config.weights;

        let skill = self.score_skills(resume, job);
        let experience = self.score_experience(resume, job);
        let education = self.score_education(resume, job);
        let format = self.score_format(resume);

        let overall = ((skill.percentage / 100.0) * weights.skill
            + experience.score * weights.experience
            + education.score * weights.education
            + format.score * weights.format)
            * 100.0;

        let suggestions = suggestions::for_job_match(
            resume,
            job,
            &skill,
            &experience,
            &education,
            &format,
            overall,
        );

        AnalysisResult {
            score: overall,
            missing_keywords: skill.missing_skills.clone(),
            matched_keywords: skill.matched_skills.clone(),
            suggestions,
            score_breakdown: ScoreBreakdown {
                skill_weight: weights.skill,
                experience_weight: weights.experience,
                education_weight: weights.education,
                format_weight: weights.format,
                skill_score: skill.percentage,
                experience_score: experience.score * 100.0,
                education_score: education.score * 100.0,
                format_score: format.score * 100.0,
            },
            skill_match: skill,
            experience_match: experience,
            education_match: education,
            format_score: format,
        }
    }

    /// Score a resume on its own merits when no job description was supplied.
    /// Every identified skill counts as matched because there is no
    /// requirement to measure against.
    pub fn analyze_standalone(&self, resume: &Resume) -> AnalysisResult {
        let weights = self.config.weights;

        let skill_score = standalone_skill_score(resume);
        let experience_score = standalone_experience_score(resume);
        let education_score = standalone_education_score(resume);
        let format = self.score_format(resume);

        let overall = (skill_score * weights.skill
            + experience_score * weights.experience
            + education_score * weights.education
            + format.score * weights.format)
            * 100.0;

        let suggestions = suggestions::for_standalone(resume, &format);

        AnalysisResult {
            score: overall,
            skill_match: SkillMatchResult {
                percentage: skill_score * 100.0,
                matched_skills: resume.skills.clone(),
                missing_skills: Vec::new(),
                total_required: resume.skills.len(),
                total_matched: resume.skills.len(),
            },
            experience_match: ExperienceResult {
                score: experience_score,
                years_required: 0,
                years_candidate: resume.total_experience_years(),
                meets_requirement: true,
            },
            education_match: EducationResult {
                score: education_score,
                matched_degrees: degree_names(&resume.education),
                has_required_education: !resume.education.is_empty(),
            },
            score_breakdown: ScoreBreakdown {
                skill_weight: weights.skill,
                experience_weight: weights.experience,
                education_weight: weights.education,
                format_weight: weights.format,
                skill_score: skill_score * 100.0,
                experience_score: experience_score * 100.0,
                education_score: education_score * 100.0,
                format_score: format.score * 100.0,
            },
            format_score: format,
            missing_keywords: Vec::new(),
            matched_keywords: resume.skills.clone(),
            suggestions,
        }
    }

    fn score_skills(&self, resume: &Resume, job: &JobDescription) -> SkillMatchResult {
        let mut all_job_skills = job.required_skills.clone();
        all_job_skills.extend(job.preferred_skills.iter().cloned());
        let all_job_skills = remove_duplicates(&all_job_skills);

        let result = skill_match(&resume.skills, &all_job_skills);

        SkillMatchResult {
            percentage: result.percentage,
            total_required: all_job_skills.len(),
            total_matched: result.matched.len(),
            matched_skills: result.matched,
            missing_skills: result.missing,
        }
    }

    fn score_experience(&self, resume: &Resume, job: &JobDescription) -> ExperienceResult {
        let candidate_years = resume.total_experience_years();
        let required_years = job.min_experience as f64;
        let meets_requirement = candidate_years >= required_years;

        let score = if required_years == 0.0 || candidate_years >= required_years {
            1.0
        } else {
            (candidate_years / required_years).min(1.0)
        };

        ExperienceResult {
            score,
            years_required: job.min_experience,
            years_candidate: candidate_years,
            meets_requirement,
        }
    }

    fn score_education(&self, resume: &Resume, job: &JobDescription) -> EducationResult {
        if job.education.is_empty() {
            return EducationResult {
                score: 1.0,
                matched_degrees: Vec::new(),
                has_required_education: true,
            };
        }

        let mut matched_degrees = Vec::new();
        for entry in &resume.education {
            for required in &job.education {
                if education_matches(&entry.degree, required) {
                    matched_degrees.push(entry.degree.clone());
                }
            }
        }

        let has_match = !matched_degrees.is_empty();
        let score = if has_match {
            1.0
        } else if !resume.education.is_empty() {
            // Some education, just not the requested one.
            0.5
        } else {
            0.0
        };

        EducationResult {
            score,
            matched_degrees,
            has_required_education: has_match,
        }
    }

    fn score_format(&self, resume: &Resume) -> FormatResult {
        let mut issues = resume.format_issues.clone();
        issues.extend(content_issues(resume));

        let score = if issues.is_empty() {
            1.0
        } else {
            (1.0 - issues.len() as f64 * FORMAT_ISSUE_PENALTY).max(FORMAT_SCORE_FLOOR)
        };

        FormatResult {
            score,
            is_ats_friendly: issues.len() <= ATS_FRIENDLY_MAX_ISSUES,
            issues,
        }
    }
}

/// Issues derived from the extracted content rather than the raw layout.
fn content_issues(resume: &Resume) -> Vec<String> {
    let mut issues = Vec::new();

    if resume.personal_info.email.is_empty() {
        issues.push("Missing email address".to_string());
    }
    if resume.personal_info.phone.is_empty() {
        issues.push("Missing phone number".to_string());
    }
    if resume.experience.is_empty() && resume.education.is_empty() {
        issues.push("Missing key sections (experience or education)".to_string());
    }
    if resume.skills.is_empty() {
        issues.push("No skills section identified".to_string());
    }
    if word_count(&resume.raw_text) > RESUME_WORD_LIMIT {
        issues.push("Resume may be too long (consider condensing)".to_string());
    }

    issues
}

fn education_matches(candidate_degree: &str, required_degree: &str) -> bool {
    let candidate = candidate_degree.to_lowercase();
    let required = required_degree.to_lowercase();

    if candidate.contains(&required) || required.contains(&candidate) {
        return true;
    }

    let candidate_key = compact_degree_key(&candidate);
    let required_key = compact_degree_key(&required);

    for (degree, aliases) in DEGREE_EQUIVALENTS {
        let in_class = |key: &str| {
            key.contains(degree)
                || aliases
                    .iter()
                    .any(|alias| key.contains(&compact_degree_key(alias)))
        };
        if in_class(&candidate_key) && in_class(&required_key) {
            return true;
        }
    }

    false
}

/// Lowercased with separator characters stripped, so "B.S." keys as "bs".
fn compact_degree_key(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, '.' | ' ' | '-'))
        .collect()
}

fn standalone_skill_score(resume: &Resume) -> f64 {
    let skill_count = resume.skills.len();
    if skill_count == 0 {
        return 0.0;
    }
    STANDALONE_SKILL_BASE + (skill_count as f64 / STANDALONE_SKILL_TARGET).min(STANDALONE_SKILL_CAP)
}

fn standalone_experience_score(resume: &Resume) -> f64 {
    let years = resume.total_experience_years();
    if years == 0.0 {
        0.0
    } else if years < 1.0 {
        0.2
    } else if years < 3.0 {
        0.5
    } else if years < 5.0 {
        0.7
    } else if years < 10.0 {
        0.9
    } else {
        1.0
    }
}

fn standalone_education_score(resume: &Resume) -> f64 {
    if resume.education.is_empty() {
        // Unknown is not necessarily bad.
        return 0.3;
    }
    resume
        .education
        .iter()
        .map(|entry| degree_tier_score(&entry.degree))
        .fold(0.0, f64::max)
}

fn degree_tier_score(degree: &str) -> f64 {
    let degree = degree.to_lowercase();
    if degree.contains("phd") || degree.contains("doctorate") {
        1.0
    } else if degree.contains("master") || degree.contains("mba") {
        0.9
    } else if degree.contains("bachelor") || degree.contains("b.s") || degree.contains("b.a") {
        0.8
    } else if degree.contains("associate") {
        0.6
    } else if degree.contains("diploma") || degree.contains("certificate") {
        0.5
    } else {
        0.4
    }
}

fn degree_names(education: &[Education]) -> Vec<String> {
    education
        .iter()
        .filter(|entry| !entry.degree.is_empty())
        .map(|entry| entry.degree.clone())
        .collect()
}
