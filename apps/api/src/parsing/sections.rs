//! Experience/education section scraping and the years-of-experience estimate.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::parsing::SectionEntry;

pub const MAX_EXPERIENCE_ENTRIES: usize = 5;
pub const MAX_EDUCATION_ENTRIES: usize = 3;
pub const DESCRIPTION_CHARS: usize = 200;
pub const NOT_SPECIFIED: &str = "Not specified";

const MIN_EXPERIENCE_ENTRY_CHARS: usize = 20;
const MIN_EDUCATION_ENTRY_CHARS: usize = 10;

static EXPERIENCE_SECTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?is)(?:work experience|experience|employment|professional experience)(.*?)(?:education|skills|projects|certifications|$)",
    )
    .expect("valid experience section regex")
});

static EDUCATION_SECTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?is)(?:education|academic|qualifications)(.*?)(?:experience|skills|projects|certifications|$)",
    )
    .expect("valid education section regex")
});

static DEGREE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:bachelor|master|phd|diploma|undergraduate|graduate|post[- ]graduate|[bm]\.?(?:tech|sc|e|s|a)\b)",
    )
    .expect("valid degree regex")
});

static BLANK_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n").expect("valid blank line regex"));

static YEARS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+)\+?\s*years?\s*(?:of)?\s*(?:experience)?").expect("valid years regex")
});

fn section_entries(section_re: &Regex, text: &str) -> Vec<String> {
    let Some(body) = section_re.captures(text).and_then(|c| c.get(1)) else {
        return Vec::new();
    };

    BLANK_LINE_RE
        .split(body.as_str())
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(String::from)
        .collect()
}

fn to_entry(full_text: String) -> SectionEntry {
    SectionEntry {
        description: full_text.chars().take(DESCRIPTION_CHARS).collect(),
        full_text,
    }
}

/// Blank-line separated entries of the first experience-like section.
pub fn extract_experience(text: &str) -> Vec<SectionEntry> {
    section_entries(&EXPERIENCE_SECTION_RE, text)
        .into_iter()
        .filter(|entry| entry.chars().count() > MIN_EXPERIENCE_ENTRY_CHARS)
        .take(MAX_EXPERIENCE_ENTRIES)
        .map(to_entry)
        .collect()
}

/// Entries of the first education-like section that mention a degree.
pub fn extract_education(text: &str) -> Vec<SectionEntry> {
    section_entries(&EDUCATION_SECTION_RE, text)
        .into_iter()
        .filter(|entry| entry.chars().count() > MIN_EDUCATION_ENTRY_CHARS)
        .filter(|entry| DEGREE_RE.is_match(entry))
        .take(MAX_EDUCATION_ENTRIES)
        .map(to_entry)
        .collect()
}

/// Largest "N years" mention wins; otherwise the number of positions found.
pub fn estimate_experience_years(text: &str, experience_entries: usize) -> String {
    let lower = text.to_lowercase();
    let max_years = YEARS_RE
        .captures_iter(&lower)
        .filter_map(|c| c.get(1)?.as_str().parse::<u32>().ok())
        .max();

    match max_years {
        Some(years) => format!("{years} years"),
        None if experience_entries > 0 => format!("~{experience_entries} positions"),
        None => NOT_SPECIFIED.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "Jane Smith\n\
        jane@example.com\n\
        \n\
        Work Experience\n\
        Senior Engineer, Acme Corp (2019 - 2023)\n\
        Led the migration of billing services to Kubernetes.\n\
        \n\
        Engineer, Widgets Inc (2016 - 2019)\n\
        Built internal dashboards with React and Flask.\n\
        \n\
        Intern\n\
        \n\
        Education\n\
        Bachelor of Science in Computer Science, State University, 2016\n\
        \n\
        Chess club\n\
        \n\
        Skills\n\
        Python, Docker";

    #[test]
    fn test_experience_entries_split_on_blank_lines() {
        let entries = extract_experience(RESUME);
        assert_eq!(entries.len(), 2, "{entries:?}");
        assert!(entries[0].full_text.starts_with("Senior Engineer, Acme Corp"));
        assert!(entries[1].full_text.starts_with("Engineer, Widgets Inc"));
    }

    #[test]
    fn test_short_experience_entries_are_dropped() {
        let entries = extract_experience(RESUME);
        assert!(entries.iter().all(|e| e.full_text != "Intern"));
    }

    #[test]
    fn test_description_truncated_to_200_chars() {
        let long_line = "x".repeat(450);
        let text = format!("Experience\n{long_line}\n\nEducation\n");
        let entries = extract_experience(&text);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].description.chars().count(), DESCRIPTION_CHARS);
        assert_eq!(entries[0].full_text.chars().count(), 450);
    }

    #[test]
    fn test_experience_capped_at_five() {
        let jobs: Vec<String> = (0..8)
            .map(|i| format!("Engineer at Company Number {i}, doing things"))
            .collect();
        let text = format!("Employment\n{}", jobs.join("\n\n"));
        assert_eq!(extract_experience(&text).len(), MAX_EXPERIENCE_ENTRIES);
    }

    #[test]
    fn test_education_requires_degree_keyword() {
        let entries = extract_education(RESUME);
        assert_eq!(entries.len(), 1, "{entries:?}");
        assert!(entries[0].full_text.starts_with("Bachelor of Science"));
    }

    #[test]
    fn test_education_capped_at_three() {
        let text = "Education\nB.Tech in CS, 2010\n\nM.Tech in CS, 2012\n\nPhD in CS, 2016\n\nDiploma in Art, 2018";
        assert_eq!(extract_education(text).len(), MAX_EDUCATION_ENTRIES);
    }

    #[test]
    fn test_missing_sections_yield_empty_lists() {
        assert!(extract_experience("Jane Smith\nPython").is_empty());
        assert!(extract_education("Jane Smith\nPython").is_empty());
    }

    #[test]
    fn test_years_estimate_takes_maximum() {
        let text = "5+ years of experience with Python. 3 years of experience with Go.";
        assert_eq!(estimate_experience_years(text, 0), "5 years");
    }

    #[test]
    fn test_years_estimate_falls_back_to_positions() {
        assert_eq!(estimate_experience_years("no numbers here", 2), "~2 positions");
    }

    #[test]
    fn test_years_estimate_not_specified() {
        assert_eq!(estimate_experience_years("no numbers here", 0), NOT_SPECIFIED);
    }
}
