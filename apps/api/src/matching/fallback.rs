//! Deterministic skill-overlap scorer, used whenever the model path fails.

use std::collections::HashSet;

use crate::matching::{MatchOutcome, Recommendation, ScoredBy, DEFAULT_SCORE, MAX_LISTED_SKILLS};

/// One decimal place, ties to even (1 of 4 matched scores 3.2).
fn round_one_decimal(x: f64) -> f64 {
    (x * 10.0).round_ties_even() / 10.0
}

/// Required skills trimmed, blanks dropped, deduplicated case-insensitively
/// keeping the first spelling.
fn normalize_required(required: &[String]) -> Vec<&str> {
    let mut seen = HashSet::new();
    required
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .filter(|s| seen.insert(s.to_lowercase()))
        .collect()
}

fn justification(score: f64, matched: usize, required: usize, missing: usize) -> String {
    if score >= 7.0 {
        format!("Strong candidate with {matched} out of {required} required skills.")
    } else if score >= 4.0 {
        format!(
            "Moderate fit with {matched} out of {required} required skills, but missing {missing} key requirements."
        )
    } else {
        format!("Limited fit with only {matched} matching skills out of {required} required.")
    }
}

fn recommendation(score: f64) -> Recommendation {
    if score >= 8.0 {
        Recommendation::StrongHire
    } else if score >= 5.0 {
        Recommendation::Consider
    } else {
        Recommendation::Pass
    }
}

/// Scores by case-insensitive overlap between candidate and required skills.
/// Matched and missing are reported in the job's order and spelling.
pub fn fallback_match(candidate_skills: &[String], required_skills: &[String]) -> MatchOutcome {
    let candidate: HashSet<String> = candidate_skills
        .iter()
        .map(|s| s.trim().to_lowercase())
        .collect();
    let required = normalize_required(required_skills);

    let (matched, missing): (Vec<&str>, Vec<&str>) = required
        .iter()
        .partition(|skill| candidate.contains(&skill.to_lowercase()));

    let match_score = if required.is_empty() {
        DEFAULT_SCORE
    } else {
        round_one_decimal(1.0 + 9.0 * matched.len() as f64 / required.len() as f64)
    };

    let cap = |skills: Vec<&str>| -> Vec<String> {
        skills
            .into_iter()
            .take(MAX_LISTED_SKILLS)
            .map(String::from)
            .collect()
    };

    MatchOutcome {
        match_score,
        justification: justification(match_score, matched.len(), required.len(), missing.len()),
        overall_assessment: format!("Automated Score: {match_score:.1}/10"),
        recommendation: recommendation(match_score),
        matched_skills: cap(matched),
        missing_skills: cap(missing),
        scored_by: ScoredBy::Fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_partial_overlap_scenario() {
        let outcome = fallback_match(
            &skills(&["Python", "Flask", "SQL", "Docker"]),
            &skills(&["Python", "Flask", "PostgreSQL", "Docker", "AWS"]),
        );
        assert_eq!(outcome.matched_skills, vec!["Python", "Flask", "Docker"]);
        assert_eq!(outcome.missing_skills, vec!["PostgreSQL", "AWS"]);
        assert_eq!(outcome.match_score, 6.4);
        assert_eq!(outcome.recommendation, Recommendation::Consider);
        assert_eq!(
            outcome.justification,
            "Moderate fit with 3 out of 5 required skills, but missing 2 key requirements."
        );
        assert_eq!(outcome.overall_assessment, "Automated Score: 6.4/10");
        assert_eq!(outcome.scored_by, ScoredBy::Fallback);
    }

    #[test]
    fn test_empty_requirements_score_exactly_five() {
        let outcome = fallback_match(&skills(&["Python"]), &[]);
        assert_eq!(outcome.match_score, 5.0);
        assert!(outcome.matched_skills.is_empty());
        assert!(outcome.missing_skills.is_empty());
    }

    #[test]
    fn test_blank_requirements_are_ignored() {
        let outcome = fallback_match(&skills(&["Python"]), &skills(&["  ", ""]));
        assert_eq!(outcome.match_score, 5.0);
    }

    #[test]
    fn test_full_overlap_is_strong_hire() {
        let outcome = fallback_match(&skills(&["rust", "go"]), &skills(&["Rust", "Go"]));
        assert_eq!(outcome.match_score, 10.0);
        assert_eq!(outcome.recommendation, Recommendation::StrongHire);
        assert_eq!(outcome.justification, "Strong candidate with 2 out of 2 required skills.");
    }

    #[test]
    fn test_no_overlap_is_pass() {
        let outcome = fallback_match(&skills(&["Java"]), &skills(&["Rust", "Go"]));
        assert_eq!(outcome.match_score, 1.0);
        assert_eq!(outcome.recommendation, Recommendation::Pass);
        assert_eq!(
            outcome.justification,
            "Limited fit with only 0 matching skills out of 2 required."
        );
    }

    #[test]
    fn test_matched_and_missing_are_disjoint_subsets_of_required() {
        let required = skills(&["Python", "python", "AWS", "Go", "Kubernetes"]);
        let outcome = fallback_match(&skills(&["PYTHON", "go"]), &required);
        let required_lower: HashSet<String> = required.iter().map(|s| s.to_lowercase()).collect();

        for m in &outcome.matched_skills {
            assert!(!outcome.missing_skills.contains(m));
            assert!(required_lower.contains(&m.to_lowercase()));
        }
        for m in &outcome.missing_skills {
            assert!(required_lower.contains(&m.to_lowercase()));
        }
        // "python" is a duplicate of "Python".
        assert_eq!(outcome.matched_skills, vec!["Python", "Go"]);
        assert_eq!(outcome.missing_skills, vec!["AWS", "Kubernetes"]);
    }

    #[test]
    fn test_score_monotone_in_overlap() {
        let required = skills(&["a", "b", "c", "d", "e", "f", "g"]);
        let mut last = 0.0;
        for k in 0..=required.len() {
            let score = fallback_match(&required[..k], &required).match_score;
            assert!((1.0..=10.0).contains(&score));
            assert!(score >= last, "score dropped at {k}: {score} < {last}");
            last = score;
        }
    }

    #[test]
    fn test_exact_ties_round_to_even() {
        let outcome = fallback_match(&skills(&["Rust"]), &skills(&["Rust", "Go", "C", "Zig"]));
        assert_eq!(outcome.match_score, 3.2);
        assert_eq!(outcome.recommendation, Recommendation::Pass);

        let outcome = fallback_match(&skills(&["a", "b", "c"]), &skills(&["a", "b", "c", "d"]));
        assert_eq!(outcome.match_score, 7.8);
    }

    #[test]
    fn test_lists_capped_at_ten() {
        let required: Vec<String> = (0..14).map(|i| format!("skill{i}")).collect();
        let outcome = fallback_match(&[], &required);
        assert_eq!(outcome.missing_skills.len(), MAX_LISTED_SKILLS);
        assert_eq!(outcome.match_score, 1.0);
    }
}
