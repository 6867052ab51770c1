use ats_core::parser::{parse_job_description, parse_resume_text};
use ats_core::scoring::ScoringEngine;

const RESUME: &str = "\
John Smith
john@example.com
Skills: python
Bachelor 2020";

const JOB: &str = "\
Software Developer
We need python and go skills.
2+ years of experience.
Bachelor degree required.";

#[test]
fn matched_analysis_end_to_end() {
    let resume = parse_resume_text(RESUME);
    let job = parse_job_description(JOB);
    let engine = ScoringEngine::default();

    let result = engine.analyze(&resume, &job);

    // Skill: python matches, go does not.
    assert_eq!(result.skill_match.percentage, 50.0);
    assert_eq!(result.skill_match.matched_skills, vec!["python"]);
    assert_eq!(result.skill_match.missing_skills, vec!["go"]);

    // Experience: no entries extracted, two years required.
    assert!(!result.experience_match.meets_requirement);
    assert_eq!(result.experience_match.score, 0.0);
    assert_eq!(result.experience_match.years_required, 2);
    assert_eq!(result.experience_match.years_candidate, 0.0);

    // Education: the Bachelor line satisfies the requirement directly.
    assert!(result.education_match.has_required_education);
    assert_eq!(result.education_match.score, 1.0);
    assert_eq!(result.education_match.matched_degrees, vec!["Bachelor"]);

    // Format: the only issue is the missing phone number.
    assert_eq!(result.format_score.issues, vec!["Missing phone number"]);
    assert!((result.format_score.score - 0.8).abs() < 1e-9);
    assert!(result.format_score.is_ats_friendly);

    // Overall: 0.5*0.4 + 0.0*0.3 + 1.0*0.2 + 0.8*0.1, on a 0-100 scale.
    assert!((result.score - 48.0).abs() < 1e-9);

    let b = &result.score_breakdown;
    assert_eq!(b.skill_score, 50.0);
    assert_eq!(b.experience_score, 0.0);
    assert_eq!(b.education_score, 100.0);
    assert!((b.format_score - 80.0).abs() < 1e-9);

    // Suggestion cascade in its fixed order.
    assert_eq!(result.suggestions.len(), 5);
    assert_eq!(
        result.suggestions[0],
        "Good skill match! Consider adding: go"
    );
    assert!(result.suggestions[1].contains("minimum experience requirement"));
    assert!(result.suggestions[2].contains("phone number"));
    assert!(result.suggestions[3].contains("tailoring your resume"));
    assert!(result.suggestions[4].contains("quantified achievements"));
}

#[test]
fn standalone_analysis_end_to_end() {
    let resume = parse_resume_text(RESUME);
    let engine = ScoringEngine::default();

    let result = engine.analyze_standalone(&resume);

    // 0.35*0.4 + 0.0*0.3 + 0.8*0.2 + 0.8*0.1, on a 0-100 scale.
    assert!((result.score - 38.0).abs() < 1e-9);

    // Without a requirement every identified skill counts as matched.
    assert_eq!(result.skill_match.matched_skills, vec!["python"]);
    assert!(result.skill_match.missing_skills.is_empty());
    assert_eq!(result.experience_match.years_required, 0);
    assert!(result.experience_match.meets_requirement);
    assert_eq!(result.education_match.matched_degrees, vec!["Bachelor"]);
}

#[test]
fn analysis_result_serializes_to_json() {
    let resume = parse_resume_text(RESUME);
    let job = parse_job_description(JOB);
    let result = ScoringEngine::default().analyze(&resume, &job);

    let json = serde_json::to_value(&result).expect("analysis serializes");

    assert_eq!(json["skill_match"]["percentage"], 50.0);
    assert_eq!(json["score_breakdown"]["skill_weight"], 0.4);
    assert_eq!(json["education_match"]["has_required_education"], true);
    assert!(json["suggestions"].as_array().is_some());
}
