//! Requirement phrase selection from ranked keyphrases.

use meetbrief_core::Result;
use meetbrief_nlp::NlpEngine;
use tracing::debug;

/// Lowercase substrings that mark a keyphrase as a requirement.
pub const REQUIREMENT_KEYWORDS: &[&str] = &[
    "require",
    "need",
    "should",
    "must",
    "deliver",
    "support",
    "implement",
    "setup",
    "integration",
];

/// Phrases this short are kept even without a requirement keyword.
pub const MAX_PLAIN_WORDS: usize = 5;

fn is_requirement(phrase: &str) -> bool {
    let lower = phrase.to_lowercase();
    REQUIREMENT_KEYWORDS.iter().any(|k| lower.contains(k))
        || phrase.split_whitespace().count() <= MAX_PLAIN_WORDS
}

/// Top keyphrases that look like requirements, in rank order.
///
/// When the filter removes everything, the unfiltered top `topn` phrases
/// are returned instead.
pub fn extract_requirements(
    engine: &dyn NlpEngine,
    transcript: &str,
    topn: usize,
) -> Result<Vec<String>> {
    let phrases = engine.rank_phrases(transcript, topn)?;
    let kept: Vec<String> = phrases.iter().filter(|p| is_requirement(p)).cloned().collect();
    if !kept.is_empty() {
        return Ok(kept);
    }

    debug!("No phrase passed the requirement filter, using top {}", topn);
    Ok(phrases.into_iter().take(topn).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::stub::ScriptedEngine;
    use meetbrief_nlp::create_engine;

    fn scripted(phrases: &[&str]) -> ScriptedEngine {
        ScriptedEngine {
            phrases: phrases.iter().map(|p| p.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_keyword_or_short_phrases_kept_in_rank_order() {
        let engine = scripted(&[
            "a very long rambling phrase about nothing much",
            "API integration for the new billing partner portal",
            "single sign-on",
            "the team should probably revisit the old plan",
        ]);
        let out = extract_requirements(&engine, "ignored", 12).unwrap();
        assert_eq!(
            out,
            vec![
                "API integration for the new billing partner portal",
                "single sign-on",
                "the team should probably revisit the old plan",
            ]
        );
    }

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        let engine = scripted(&["SSO SETUP across every regional office and branch"]);
        let out = extract_requirements(&engine, "ignored", 12).unwrap();
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_falls_back_to_unfiltered_top_phrases() {
        let engine = scripted(&[
            "one two three four five six",
            "seven eight nine ten eleven twelve",
            "a b c d e f g",
        ]);
        let out = extract_requirements(&engine, "ignored", 2).unwrap();
        assert_eq!(
            out,
            vec!["one two three four five six", "seven eight nine ten eleven twelve"]
        );
    }

    #[test]
    fn test_no_phrases_is_empty() {
        let engine = scripted(&[]);
        assert!(extract_requirements(&engine, "ignored", 12).unwrap().is_empty());
    }

    #[test]
    fn test_with_heuristic_engine() {
        let engine = create_engine();
        let text = "John will send the report by Friday. Acme Corp needs the integration done.";
        let out = extract_requirements(engine.as_ref(), text, 12).unwrap();
        assert!(out.iter().any(|p| p.contains("integration")));
        assert!(out.len() <= 12);
    }
}
