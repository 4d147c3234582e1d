//! Reply parser for the recruiter model.
//!
//! Total over any input: unknown layouts, missing sections and junk all map to
//! per-field defaults (score 5.0, empty lists, empty justification, Consider).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::matching::{
    clamp_score, MatchOutcome, Recommendation, ScoredBy, DEFAULT_SCORE, MAX_LISTED_SKILLS,
};

static HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(match score|matched skills|missing skills|justification|recommendation)\b")
        .expect("valid heading regex")
});

static NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+(?:\.\d+)?").expect("valid number regex"));

const BULLETS: &[char] = &['-', '•'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Score,
    Matched,
    Missing,
    Justification,
    Recommendation,
}

impl Section {
    fn from_heading(heading: &str) -> Option<Self> {
        match heading.to_ascii_lowercase().as_str() {
            "match score" => Some(Section::Score),
            "matched skills" => Some(Section::Matched),
            "missing skills" => Some(Section::Missing),
            "justification" => Some(Section::Justification),
            "recommendation" => Some(Section::Recommendation),
            _ => None,
        }
    }
}

/// A recognized heading: which section, where the heading starts and where
/// its body starts.
struct Heading {
    section: Section,
    start: usize,
    body_start: usize,
}

/// Skips `*` and horizontal whitespace starting at byte `pos`.
fn skip_decoration(text: &str, pos: usize) -> usize {
    pos + text[pos..]
        .find(|c: char| c != '*' && c != ' ' && c != '\t')
        .unwrap_or(text.len() - pos)
}

fn is_decoration(c: char) -> bool {
    c.is_whitespace() || c == '#' || c == '*'
}

/// A keyword counts as a heading when a colon follows it (after optional
/// `**`), or when it stands alone on its line apart from `#`/`*` decoration.
fn find_headings(text: &str) -> Vec<Heading> {
    let mut headings = Vec::new();

    for m in HEADING_RE.find_iter(text) {
        let Some(section) = Section::from_heading(m.as_str()) else {
            continue;
        };

        let after = skip_decoration(text, m.end());
        let has_colon = text[after..].starts_with(':');

        if !has_colon {
            let line_start = text[..m.start()].rfind('\n').map_or(0, |i| i + 1);
            let line_end = text[m.end()..].find('\n').map_or(text.len(), |i| m.end() + i);
            let alone_on_line = text[line_start..m.start()].chars().all(is_decoration)
                && text[m.end()..line_end].chars().all(is_decoration);
            if !alone_on_line {
                continue;
            }
        }

        let body_start = if has_colon {
            skip_decoration(text, after + 1)
        } else {
            after
        };

        headings.push(Heading {
            section,
            start: m.start(),
            body_start,
        });
    }

    headings
}

/// Body of the first occurrence of `section`, up to the next heading.
fn section_body<'a>(text: &'a str, headings: &[Heading], section: Section) -> Option<&'a str> {
    let idx = headings.iter().position(|h| h.section == section)?;
    let end = headings.get(idx + 1).map_or(text.len(), |next| next.start);
    let start = headings[idx].body_start.min(end);
    Some(&text[start..end])
}

fn parse_score(body: &str) -> f64 {
    NUMBER_RE
        .find(body)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .map(clamp_score)
        .unwrap_or(DEFAULT_SCORE)
}

/// Item text of a bulleted line. `*` only counts when whitespace follows,
/// so `**bold**` is left alone.
fn bullet_item(line: &str) -> Option<&str> {
    if line.starts_with(BULLETS) {
        return Some(line.trim_start_matches(BULLETS));
    }
    line.strip_prefix('*')
        .filter(|rest| rest.starts_with(char::is_whitespace))
}

fn parse_skill_list(body: &str) -> Vec<String> {
    let bullets: Vec<&str> = body
        .lines()
        .map(str::trim)
        .filter_map(bullet_item)
        .collect();

    let items: Vec<&str> = if bullets.is_empty() {
        body.split([',', '\n']).map(str::trim).collect()
    } else {
        bullets
    };

    items
        .into_iter()
        .map(|item| item.trim().trim_matches('*').trim())
        .filter(|item| !item.is_empty())
        .take(MAX_LISTED_SKILLS)
        .map(String::from)
        .collect()
}

fn parse_recommendation(body: &str) -> Recommendation {
    let Some(line) = body.lines().map(str::trim).find(|l| !l.is_empty()) else {
        return Recommendation::default();
    };
    let line = line.to_lowercase();

    if line.contains("strong hire") {
        Recommendation::StrongHire
    } else if line.contains("consider") {
        Recommendation::Consider
    } else if line.contains("maybe") {
        Recommendation::Maybe
    } else if line.contains("pass") {
        Recommendation::Pass
    } else {
        Recommendation::default()
    }
}

/// Turns a free-text model reply into a `MatchOutcome`.
pub fn parse_llm_response(text: &str) -> MatchOutcome {
    let headings = find_headings(text);
    let body = |section| section_body(text, &headings, section);

    let match_score = body(Section::Score).map_or(DEFAULT_SCORE, parse_score);
    let matched_skills = body(Section::Matched).map(parse_skill_list).unwrap_or_default();
    let missing_skills = body(Section::Missing).map(parse_skill_list).unwrap_or_default();
    let justification = body(Section::Justification)
        .map(|b| b.trim().to_string())
        .unwrap_or_default();
    let recommendation = body(Section::Recommendation)
        .map(parse_recommendation)
        .unwrap_or_default();

    MatchOutcome {
        overall_assessment: format!("Match Score: {match_score:.1}/10 - {recommendation}"),
        match_score,
        justification,
        matched_skills,
        missing_skills,
        recommendation,
        scored_by: ScoredBy::Llm,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELL_FORMED: &str = "MATCH SCORE: 7.5\n\
        \n\
        MATCHED SKILLS:\n\
        - Python\n\
        - Flask\n\
        \n\
        MISSING SKILLS:\n\
        - AWS\n\
        \n\
        JUSTIFICATION:\n\
        Solid backend experience. No cloud exposure.\n\
        \n\
        RECOMMENDATION:\n\
        Consider\n";

    #[test]
    fn test_well_formed_reply_parses_every_field() {
        let outcome = parse_llm_response(WELL_FORMED);
        assert_eq!(outcome.match_score, 7.5);
        assert_eq!(outcome.matched_skills, vec!["Python", "Flask"]);
        assert_eq!(outcome.missing_skills, vec!["AWS"]);
        assert_eq!(
            outcome.justification,
            "Solid backend experience. No cloud exposure."
        );
        assert_eq!(outcome.recommendation, Recommendation::Consider);
        assert_eq!(outcome.overall_assessment, "Match Score: 7.5/10 - Consider");
        assert_eq!(outcome.scored_by, ScoredBy::Llm);
    }

    #[test]
    fn test_reply_without_sections_yields_defaults() {
        let outcome = parse_llm_response("I think this person is great!");
        assert_eq!(outcome.match_score, 5.0);
        assert!(outcome.matched_skills.is_empty());
        assert!(outcome.missing_skills.is_empty());
        assert_eq!(outcome.justification, "");
        assert_eq!(outcome.recommendation, Recommendation::Consider);
        assert_eq!(outcome.overall_assessment, "Match Score: 5.0/10 - Consider");
    }

    #[test]
    fn test_section_order_does_not_matter() {
        let reply = "RECOMMENDATION: Strong Hire\n\
            JUSTIFICATION: Excellent fit.\n\
            MISSING SKILLS: none listed\n\
            MATCHED SKILLS: Rust, Go\n\
            MATCH SCORE: 9";
        let outcome = parse_llm_response(reply);
        assert_eq!(outcome.match_score, 9.0);
        assert_eq!(outcome.matched_skills, vec!["Rust", "Go"]);
        assert_eq!(outcome.recommendation, Recommendation::StrongHire);
        assert_eq!(outcome.justification, "Excellent fit.");
    }

    #[test]
    fn test_markdown_decorated_headings() {
        let reply = "## Match Score\n8/10\n\n**Matched Skills:**\n* Python\n* Docker\n\n\
            **Recommendation:** Maybe, pending interview";
        let outcome = parse_llm_response(reply);
        assert_eq!(outcome.match_score, 8.0);
        assert_eq!(outcome.matched_skills, vec!["Python", "Docker"]);
        assert_eq!(outcome.recommendation, Recommendation::Maybe);
    }

    #[test]
    fn test_score_is_clamped() {
        assert_eq!(parse_llm_response("MATCH SCORE: 42").match_score, 10.0);
        assert_eq!(parse_llm_response("MATCH SCORE: 0").match_score, 1.0);
        assert_eq!(parse_llm_response("MATCH SCORE: n/a").match_score, 5.0);
    }

    #[test]
    fn test_first_occurrence_wins() {
        let reply = "MATCH SCORE: 3\nMATCH SCORE: 9";
        assert_eq!(parse_llm_response(reply).match_score, 3.0);
    }

    #[test]
    fn test_inline_keyword_without_colon_is_not_a_heading() {
        let reply = "JUSTIFICATION: My recommendation is below.\nRECOMMENDATION: Pass";
        let outcome = parse_llm_response(reply);
        assert_eq!(outcome.justification, "My recommendation is below.");
        assert_eq!(outcome.recommendation, Recommendation::Pass);
    }

    #[test]
    fn test_keyword_opening_a_prose_line_stays_in_its_section() {
        let reply = "MATCH SCORE: 7\n\
            JUSTIFICATION:\n\
            Strong Python background.\n\
            Recommendation from a former manager is glowing.\n\
            RECOMMENDATION: Strong Hire";
        let outcome = parse_llm_response(reply);
        assert_eq!(outcome.match_score, 7.0);
        assert_eq!(
            outcome.justification,
            "Strong Python background.\nRecommendation from a former manager is glowing."
        );
        assert_eq!(outcome.recommendation, Recommendation::StrongHire);
    }

    #[test]
    fn test_bold_items_are_not_bullets() {
        let outcome = parse_llm_response("MATCHED SKILLS:\n**Python**, Docker\nRECOMMENDATION: Pass");
        assert_eq!(outcome.matched_skills, vec!["Python", "Docker"]);
        assert_eq!(outcome.recommendation, Recommendation::Pass);
    }

    #[test]
    fn test_bold_bullet_items_are_unwrapped() {
        let outcome = parse_llm_response("MISSING SKILLS:\n* **AWS**\n- **Terraform**");
        assert_eq!(outcome.missing_skills, vec!["AWS", "Terraform"]);
    }

    #[test]
    fn test_skill_lists_capped_at_ten() {
        let items: Vec<String> = (0..15).map(|i| format!("- Skill{i}")).collect();
        let reply = format!("MATCHED SKILLS:\n{}", items.join("\n"));
        assert_eq!(parse_llm_response(&reply).matched_skills.len(), MAX_LISTED_SKILLS);
    }

    #[test]
    fn test_strong_hire_checked_before_pass() {
        let outcome = parse_llm_response("RECOMMENDATION: Strong Hire (do not pass on this one)");
        assert_eq!(outcome.recommendation, Recommendation::StrongHire);
    }

    #[test]
    fn test_unrecognized_recommendation_defaults_to_consider() {
        let outcome = parse_llm_response("RECOMMENDATION:\n\nHire immediately");
        assert_eq!(outcome.recommendation, Recommendation::Consider);
    }
}
