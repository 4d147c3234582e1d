//! Contact details and candidate name, recovered with best-effort patterns.

use once_cell::sync::Lazy;
use regex::Regex;

pub const UNKNOWN_CANDIDATE: &str = "Unknown";

/// How many leading lines are considered when guessing the candidate's name.
const NAME_SCAN_LINES: usize = 5;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("valid email regex")
});

/// Tried in order; the first pattern with any hit wins.
static PHONE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // +1 (555) 123-4567, 555.123.4567, 555 123 4567
        r"\+?\d{1,3}[-.\s]?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}",
        // 5551234567
        r"\d{10}",
        // +91 9876543210
        r"\+?\d{2}[-.\s]?\d{10}",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid phone regex"))
    .collect()
});

static PHONE_SHAPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{3}[-.\s]?\d{3}[-.\s]?\d{4}").expect("valid phone shape regex"));

static LINKEDIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"linkedin\.com/in/[\w-]+").expect("valid linkedin regex"));

static GITHUB_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"github\.com/[\w-]+").expect("valid github regex"));

#[derive(Debug, Clone, PartialEq)]
pub struct ContactInfo {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
}

pub fn extract_contact_info(text: &str) -> ContactInfo {
    let lower = text.to_lowercase();

    ContactInfo {
        name: extract_name(text).unwrap_or_else(|| UNKNOWN_CANDIDATE.to_string()),
        email: EMAIL_RE.find(text).map(|m| m.as_str().to_string()),
        phone: extract_phone(text),
        linkedin: LINKEDIN_RE
            .find(&lower)
            .map(|m| format!("https://{}", m.as_str())),
        github: GITHUB_RE
            .find(&lower)
            .map(|m| format!("https://{}", m.as_str())),
    }
}

fn extract_phone(text: &str) -> Option<String> {
    PHONE_RES
        .iter()
        .find_map(|re| re.find(text))
        .map(|m| m.as_str().to_string())
}

/// A line qualifies as a name when it has 2–4 tokens, no '@', no phone-shaped
/// substring, and every token is alphabetic once periods are removed.
fn extract_name(text: &str) -> Option<String> {
    text.trim()
        .split('\n')
        .take(NAME_SCAN_LINES)
        .map(str::trim)
        .find(|line| looks_like_name(line))
        .map(String::from)
}

fn looks_like_name(line: &str) -> bool {
    if line.contains('@') || PHONE_SHAPE_RE.is_match(line) {
        return false;
    }

    let words: Vec<&str> = line.split_whitespace().collect();
    if !(2..=4).contains(&words.len()) {
        return false;
    }

    words.iter().all(|word| {
        let stripped: String = word.chars().filter(|&c| c != '.').collect();
        !stripped.is_empty() && stripped.chars().all(char::is_alphabetic)
    })
}
