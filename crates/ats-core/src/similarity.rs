use std::collections::{HashMap, HashSet};

use strsim::levenshtein;

use crate::text::tokenize;

/// Minimum normalized edit-distance similarity for a fuzzy skill match.
pub const SKILL_FUZZY_THRESHOLD: f64 = 0.8;

/// Outcome of matching a resume's skills against a job's skill list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillMatch {
    pub percentage: f64,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// Cosine similarity over raw term-frequency vectors of the two texts.
/// Returns 0.0 when either text tokenizes to nothing.
pub fn cosine_similarity(text1: &str, text2: &str) -> f64 {
    let freq1 = term_frequencies(&tokenize(text1));
    let freq2 = term_frequencies(&tokenize(text2));

    let all_terms: HashSet<&String> = freq1.keys().chain(freq2.keys()).collect();

    let mut dot_product = 0.0;
    let mut norm1 = 0.0;
    let mut norm2 = 0.0;
    for term in all_terms {
        let f1 = freq1.get(term).copied().unwrap_or(0) as f64;
        let f2 = freq2.get(term).copied().unwrap_or(0) as f64;
        dot_product += f1 * f2;
        norm1 += f1 * f1;
        norm2 += f2 * f2;
    }

    if norm1 == 0.0 || norm2 == 0.0 {
        return 0.0;
    }

    dot_product / (norm1.sqrt() * norm2.sqrt())
}

/// TF-IDF scores across a document collection. `idf = ln(N/df)`, so a term
/// present in every document scores exactly zero no matter how frequent it
/// is; single-document callers wanting keywords should use
/// [`extract_keywords`] instead.
pub fn calculate_tf_idf(documents: &[String]) -> HashMap<String, f64> {
    let docs: Vec<HashMap<String, usize>> = documents
        .iter()
        .map(|doc| term_frequencies(&tokenize(doc)))
        .collect();

    let all_terms: HashSet<&String> = docs.iter().flat_map(|doc| doc.keys()).collect();
    let num_docs = documents.len() as f64;

    let mut scores = HashMap::new();
    for term in all_terms {
        let df = docs.iter().filter(|doc| doc.contains_key(term)).count();
        let idf = (num_docs / df as f64).ln();

        let mut total = 0.0;
        for doc in &docs {
            if let Some(&tf) = doc.get(term) {
                let doc_length: usize = doc.values().sum();
                total += tf as f64 / doc_length as f64 * idf;
            }
        }
        scores.insert(term.clone(), total);
    }

    scores
}

/// Top-K terms of a single document by raw term frequency, descending. Ties
/// keep token scan order: the list is built in first-occurrence order and the
/// sort is stable.
pub fn extract_keywords(text: &str, top_k: usize) -> Vec<String> {
    let mut freq: HashMap<String, usize> = HashMap::new();
    let mut order: Vec<String> = Vec::new();

    for token in tokenize(text) {
        let count = freq.entry(token.clone()).or_insert(0);
        if *count == 0 {
            order.push(token);
        }
        *count += 1;
    }

    let mut scored: Vec<(String, usize)> = order
        .into_iter()
        .map(|term| {
            let count = freq[&term];
            (term, count)
        })
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    scored
        .into_iter()
        .take(top_k)
        .map(|(term, _)| term)
        .collect()
}

/// Unit-cost edit distance normalized to [0, 1]. Two empty strings are
/// identical by definition.
pub fn levenshtein_similarity(s1: &str, s2: &str) -> f64 {
    let max_len = s1.chars().count().max(s2.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - levenshtein(s1, s2) as f64 / max_len as f64
}

/// Match job skills against resume skills: case-insensitive exact match
/// first, then a fuzzy pass over every resume skill. Percentage is 0.0 when
/// the job lists no skills; callers treat that as "no requirement".
pub fn skill_match(resume_skills: &[String], job_skills: &[String]) -> SkillMatch {
    let resume_set: HashSet<String> = resume_skills.iter().map(|s| s.to_lowercase()).collect();

    let mut matched = Vec::new();
    let mut missing = Vec::new();

    for job_skill in job_skills {
        let job_skill_lower = job_skill.to_lowercase();
        if resume_set.contains(&job_skill_lower) {
            matched.push(job_skill.clone());
        } else if resume_set
            .iter()
            .any(|skill| levenshtein_similarity(skill, &job_skill_lower) > SKILL_FUZZY_THRESHOLD)
        {
            matched.push(job_skill.clone());
        } else {
            missing.push(job_skill.clone());
        }
    }

    let percentage = if job_skills.is_empty() {
        0.0
    } else {
        matched.len() as f64 / job_skills.len() as f64 * 100.0
    };

    SkillMatch {
        percentage,
        matched,
        missing,
    }
}

fn term_frequencies(tokens: &[String]) -> HashMap<String, usize> {
    let mut freq = HashMap::new();
    for token in tokens {
        *freq.entry(token.clone()).or_insert(0) += 1;
    }
    freq
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cosine_similarity_is_one_for_identical_text() {
        let sim = cosine_similarity("rust backend services", "rust backend services");
        assert!((sim - 1.0).abs() < 1e-9);
    }

    #[test]
    fn cosine_similarity_is_zero_for_empty_input() {
        assert_eq!(cosine_similarity("", "rust backend"), 0.0);
        assert_eq!(cosine_similarity("rust backend", ""), 0.0);
        // Stop words only: tokenizes to nothing.
        assert_eq!(cosine_similarity("the and was", "rust backend"), 0.0);
    }

    #[test]
    fn cosine_similarity_stays_in_unit_range() {
        let sim = cosine_similarity("rust backend developer", "backend developer python");
        assert!(sim > 0.0 && sim < 1.0);
    }

    #[test]
    fn tf_idf_zeroes_terms_present_everywhere() {
        let docs = vec![
            "python developer wanted".to_string(),
            "python engineer wanted".to_string(),
        ];
        let scores = calculate_tf_idf(&docs);

        assert_eq!(scores["python"], 0.0);
        assert_eq!(scores["wanted"], 0.0);
        assert!(scores["developer"] > 0.0);
        assert!(scores["engineer"] > 0.0);
    }

    #[test]
    fn extract_keywords_ranks_by_frequency_with_stable_ties() {
        let keywords = extract_keywords("alpha beta alpha gamma beta alpha", 10);
        assert_eq!(keywords, vec!["alpha", "beta", "gamma"]);

        let top_two = extract_keywords("alpha beta alpha gamma beta alpha", 2);
        assert_eq!(top_two, vec!["alpha", "beta"]);
    }

    #[test]
    fn levenshtein_similarity_properties() {
        assert_eq!(levenshtein_similarity("", ""), 1.0);
        assert_eq!(levenshtein_similarity("python", "python"), 1.0);
        assert_eq!(
            levenshtein_similarity("python", "pythn"),
            levenshtein_similarity("pythn", "python")
        );
        assert!(levenshtein_similarity("python", "pythn") > SKILL_FUZZY_THRESHOLD);
        assert!(levenshtein_similarity("python", "go") < 0.2);
    }

    #[test]
    fn skill_match_counts_exact_and_missing() {
        let result = skill_match(
            &["python".to_string(), "java".to_string()],
            &["python".to_string(), "go".to_string()],
        );

        assert_eq!(result.percentage, 50.0);
        assert_eq!(result.matched, vec!["python"]);
        assert_eq!(result.missing, vec!["go"]);
    }

    #[test]
    fn skill_match_accepts_fuzzy_variants() {
        let result = skill_match(&["kubernetes".to_string()], &["kuberntes".to_string()]);

        assert_eq!(result.percentage, 100.0);
        assert_eq!(result.matched, vec!["kuberntes"]);
        assert!(result.missing.is_empty());
    }

    #[test]
    fn skill_match_with_no_job_skills_is_zero_not_error() {
        let result = skill_match(&["python".to_string()], &[]);
        assert_eq!(result.percentage, 0.0);
        assert!(result.matched.is_empty());
        assert!(result.missing.is_empty());
    }
}
