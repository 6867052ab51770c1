use crate::text::remove_duplicates;

/// Fixed dictionary of technology keywords recognized in resumes and job
/// descriptions: languages, frameworks, data stores, cloud/devops tooling and
/// ML libraries. Entries are lowercase; matching is substring containment
/// against the lowercased document, so short entries like "go" will also hit
/// inside longer words. That looseness is accepted.
pub const SKILL_KEYWORDS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "typescript",
    "go",
    "golang",
    "rust",
    "c++",
    "c#",
    "react",
    "angular",
    "vue",
    "nodejs",
    "express",
    "django",
    "flask",
    "spring",
    "sql",
    "mysql",
    "postgresql",
    "mongodb",
    "redis",
    "elasticsearch",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "terraform",
    "ansible",
    "git",
    "github",
    "gitlab",
    "jenkins",
    "ci/cd",
    "devops",
    "machine learning",
    "deep learning",
    "tensorflow",
    "pytorch",
    "scikit-learn",
    "html",
    "css",
    "bootstrap",
    "tailwind",
    "sass",
    "less",
];

/// Scan the whole document for dictionary hits, deduplicated in dictionary
/// order. The canonical lowercase form is what gets stored.
pub fn extract_skills(text: &str) -> Vec<String> {
    let text_lower = text.to_lowercase();
    let found: Vec<String> = SKILL_KEYWORDS
        .iter()
        .filter(|skill| text_lower.contains(*skill))
        .map(|skill| skill.to_string())
        .collect();

    remove_duplicates(&found)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_skills_matches_case_insensitively() {
        let skills = extract_skills("Built services in Python and PostgreSQL on AWS");
        assert_eq!(skills, vec!["python", "sql", "postgresql", "aws"]);
    }

    #[test]
    fn extract_skills_returns_nothing_for_plain_prose() {
        assert!(extract_skills("Experienced chef and restaurant owner").is_empty());
    }

    #[test]
    fn extract_skills_has_no_case_insensitive_duplicates() {
        let skills = extract_skills("python Python PYTHON");
        assert_eq!(skills, vec!["python"]);
    }
}
