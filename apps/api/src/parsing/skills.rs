//! Closed-vocabulary skill extraction.
//!
//! Recall is bounded by `SKILL_VOCABULARY`: a skill outside the list is never
//! reported, and every reported skill is a vocabulary term in display form.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Known technology terms, lower-cased.
pub const SKILL_VOCABULARY: &[&str] = &[
    // Programming languages
    "python", "java", "javascript", "c++", "c#", "php", "ruby", "swift", "kotlin",
    "go", "rust", "typescript", "scala", "r", "matlab", "perl",
    // Web technologies
    "html", "css", "react", "angular", "vue", "node.js", "express", "django",
    "flask", "spring boot", "asp.net", "jquery", "bootstrap", "tailwind",
    // Databases
    "sql", "mysql", "postgresql", "mongodb", "redis", "oracle", "sqlite",
    "cassandra", "dynamodb", "firebase",
    // Cloud & DevOps
    "aws", "azure", "gcp", "docker", "kubernetes", "jenkins", "git", "github",
    "gitlab", "ci/cd", "terraform", "ansible",
    // Data science & ML
    "machine learning", "deep learning", "ai", "data science", "tensorflow",
    "pytorch", "keras", "scikit-learn", "pandas", "numpy", "nlp",
    // Mobile
    "android", "ios", "react native", "flutter", "xamarin",
    // Other tools & practices
    "linux", "unix", "agile", "scrum", "jira", "rest api", "graphql",
    "microservices", "oauth", "jwt", "websocket",
];

struct SkillPattern {
    pattern: Regex,
    display: String,
}

static SKILL_TABLE: Lazy<Vec<SkillPattern>> = Lazy::new(|| {
    SKILL_VOCABULARY
        .iter()
        .map(|term| SkillPattern {
            pattern: boundary_regex(term),
            display: title_case(term),
        })
        .collect()
});

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// `\b` only asserts anything next to a word character, so terms ending in
/// symbols (`c++`, `c#`) use "non-word character or text edge" on that side.
fn boundary_regex(term: &str) -> Regex {
    let left = match term.chars().next() {
        Some(c) if is_word_char(c) => r"\b",
        _ => r"(?:^|\W)",
    };
    let right = match term.chars().last() {
        Some(c) if is_word_char(c) => r"\b",
        _ => r"(?:\W|$)",
    };
    Regex::new(&format!("{left}{}{right}", regex::escape(term)))
        .expect("escaped vocabulary term is a valid regex")
}

/// Upper-cases the first letter of every alphabetic run and lower-cases the rest:
/// `node.js` → `Node.Js`, `ci/cd` → `Ci/Cd`.
pub fn title_case(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    let mut in_word = false;
    for c in term.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// Returns every vocabulary skill present in `text`, deduplicated and sorted.
pub fn extract_skills(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();

    SKILL_TABLE
        .iter()
        .filter(|skill| skill.pattern.is_match(&lower))
        .map(|skill| skill.display.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Built REST API services in Python and Flask, deployed with Docker \
        on AWS. Comfortable with PostgreSQL, Node.js and CI/CD pipelines. Some C++ too.";

    #[test]
    fn test_extracts_known_terms_in_display_form() {
        let skills = extract_skills(SAMPLE);
        for expected in ["Python", "Flask", "Docker", "Aws", "Postgresql", "Node.Js", "Ci/Cd", "Rest Api", "C++"] {
            assert!(skills.contains(&expected.to_string()), "missing {expected}: {skills:?}");
        }
    }

    #[test]
    fn test_output_sorted_and_deduplicated() {
        let skills = extract_skills("python PYTHON Python docker");
        assert_eq!(skills, vec!["Docker".to_string(), "Python".to_string()]);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        assert_eq!(extract_skills(SAMPLE), extract_skills(SAMPLE));
    }

    #[test]
    fn test_word_boundaries_prevent_partial_matches() {
        // "javascript" must not yield "java"; "gopher" must not yield "go".
        let skills = extract_skills("javascript gopher");
        assert_eq!(skills, vec!["Javascript".to_string()]);
    }

    #[test]
    fn test_symbol_suffixed_terms_match_before_punctuation() {
        assert!(extract_skills("Languages: C#, C++.").contains(&"C#".to_string()));
        assert!(extract_skills("c++").contains(&"C++".to_string()));
    }

    #[test]
    fn test_unknown_skills_are_never_reported() {
        assert!(extract_skills("Haskell, Elixir, COBOL").is_empty());
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("scikit-learn"), "Scikit-Learn");
        assert_eq!(title_case("machine learning"), "Machine Learning");
        assert_eq!(title_case("asp.net"), "Asp.Net");
    }

    #[test]
    fn test_vocabulary_terms_are_unique() {
        let unique: BTreeSet<_> = SKILL_VOCABULARY.iter().collect();
        assert_eq!(unique.len(), SKILL_VOCABULARY.len());
    }
}
