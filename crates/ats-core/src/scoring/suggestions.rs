use crate::analysis::{EducationResult, ExperienceResult, FormatResult, SkillMatchResult};
use crate::text::contains_any;
use crate::{JobDescription, Resume};

/// Signals that a resume quantifies its achievements.
const QUANTIFIED_SIGNALS: &[&str] = &["%", "increased", "reduced", "improved"];

const QUANTIFY_ADVICE: &str =
    "Add quantified achievements (e.g., 'Increased sales by 20%', 'Managed team of 5 people').";

/// Rule cascade for the job-matched analysis. Order is fixed and duplicates
/// are kept; consumers rely on the sequence.
#[allow(clippy::too_many_arguments)]
pub(crate) fn for_job_match(
    resume: &Resume,
    job: &JobDescription,
    skill: &SkillMatchResult,
    experience: &ExperienceResult,
    education: &EducationResult,
    format: &FormatResult,
    overall_score: f64,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    if skill.percentage < 50.0 {
        suggestions.push(
            "Your skill match is low. Consider adding more relevant skills from the job description."
                .to_string(),
        );
        if !skill.missing_skills.is_empty() {
            let top_missing: Vec<&str> = skill
                .missing_skills
                .iter()
                .take(5)
                .map(String::as_str)
                .collect();
            suggestions.push(format!("Key missing skills: {}", top_missing.join(", ")));
        }
    } else if skill.percentage < 75.0 {
        let additions: Vec<&str> = skill
            .missing_skills
            .iter()
            .take(3)
            .map(String::as_str)
            .collect();
        suggestions.push(format!(
            "Good skill match! Consider adding: {}",
            additions.join(", ")
        ));
    }

    if !experience.meets_requirement
        && experience.years_candidate < experience.years_required as f64
    {
        suggestions.push(
            "You may not meet the minimum experience requirement. Highlight relevant internships, projects, or transferable skills."
                .to_string(),
        );
    }

    if !education.has_required_education && !job.education.is_empty() {
        suggestions.push(
            "Consider highlighting relevant coursework, certifications, or continuing education if you don't have the preferred degree."
                .to_string(),
        );
    }

    for issue in &format.issues {
        if let Some(advice) = format_issue_advice(issue) {
            suggestions.push(advice.to_string());
        }
    }

    if overall_score < 60.0 {
        suggestions.push(
            "Consider tailoring your resume more closely to this specific job description."
                .to_string(),
        );
    }

    if !contains_any(&resume.raw_text, QUANTIFIED_SIGNALS) {
        suggestions.push(QUANTIFY_ADVICE.to_string());
    }

    suggestions
}

/// Rule cascade when no job description was supplied. Same fixed-order,
/// non-deduplicated accumulation policy.
pub(crate) fn for_standalone(resume: &Resume, format: &FormatResult) -> Vec<String> {
    let mut suggestions = Vec::new();

    if resume.skills.len() < 5 {
        suggestions
            .push("Add more relevant technical and soft skills to your resume.".to_string());
    }

    if resume.total_experience_years() < 1.0 {
        suggestions.push(
            "Include internships, projects, or volunteer work to demonstrate experience."
                .to_string(),
        );
    }

    if resume.education.is_empty() {
        suggestions.push(
            "Add your educational background including degrees, certifications, or relevant coursework."
                .to_string(),
        );
    }

    if resume.personal_info.email.is_empty() {
        suggestions.push("Include your email address in the contact section.".to_string());
    }
    if resume.personal_info.phone.is_empty() {
        suggestions
            .push("Add your phone number to make it easy for employers to contact you.".to_string());
    }

    for issue in &format.issues {
        if let Some(advice) = standalone_issue_advice(issue) {
            suggestions.push(advice.to_string());
        }
    }

    if !contains_any(&resume.raw_text, QUANTIFIED_SIGNALS) {
        suggestions.push(QUANTIFY_ADVICE.to_string());
    }

    if resume.projects.is_empty() {
        suggestions.push(
            "Include relevant projects to showcase your practical skills and experience."
                .to_string(),
        );
    }

    if resume.certifications.is_empty() {
        suggestions.push(
            "Add professional certifications or relevant training to strengthen your profile."
                .to_string(),
        );
    }

    suggestions
}

/// Keyword-to-advice mapping for the matched cascade. Unrecognized issue text
/// produces no suggestion.
fn format_issue_advice(issue: &str) -> Option<&'static str> {
    if issue.contains("table") {
        Some("Avoid using tables - use bullet points and clear headings instead.")
    } else if issue.contains("column") {
        Some("Use a single-column layout for better ATS readability.")
    } else if issue.contains("email") {
        Some("Add your email address to the contact section.")
    } else if issue.contains("phone") {
        Some("Include your phone number in the contact information.")
    } else if issue.contains("skills") {
        Some("Add a clear skills section with relevant technical and soft skills.")
    } else if issue.contains("too long") {
        Some("Consider condensing your resume to 1-2 pages for better readability.")
    } else {
        None
    }
}

/// The standalone cascade surfaces contact advice separately, so only layout
/// issues map here.
fn standalone_issue_advice(issue: &str) -> Option<&'static str> {
    if issue.contains("table") {
        Some("Avoid using tables - use bullet points and clear headings instead.")
    } else if issue.contains("column") {
        Some("Use a single-column layout for better ATS readability.")
    } else if issue.contains("too long") {
        Some("Consider condensing your resume to 1-2 pages for better readability.")
    } else {
        None
    }
}
