use serde::{Deserialize, Serialize};

/// Complete analysis output. Built once by the scoring engine and read-only
/// afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Overall weighted score on a 0-100 scale.
    pub score: f64,
    pub skill_match: SkillMatchResult,
    pub experience_match: ExperienceResult,
    pub education_match: EducationResult,
    pub format_score: FormatResult,
    pub missing_keywords: Vec<String>,
    pub matched_keywords: Vec<String>,
    /// Ordered, intentionally not deduplicated.
    pub suggestions: Vec<String>,
    pub score_breakdown: ScoreBreakdown,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillMatchResult {
    pub percentage: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub total_required: usize,
    pub total_matched: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceResult {
    /// Sub-score in [0, 1].
    pub score: f64,
    pub years_required: i32,
    /// Fractional years summed across experience entries.
    pub years_candidate: f64,
    pub meets_requirement: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationResult {
    /// Sub-score in [0, 1].
    pub score: f64,
    pub matched_degrees: Vec<String>,
    pub has_required_education: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormatResult {
    /// Sub-score in [0, 1].
    pub score: f64,
    pub issues: Vec<String>,
    pub is_ats_friendly: bool,
}

/// How the final score was assembled: the fixed weights and the four
/// per-category sub-scores on a 0-100 scale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skill_weight: f64,
    pub experience_weight: f64,
    pub education_weight: f64,
    pub format_weight: f64,
    pub skill_score: f64,
    pub experience_score: f64,
    pub education_score: f64,
    pub format_score: f64,
}
