//! Action item detection.

use std::collections::HashSet;

use meetbrief_core::{ActionItem, Result};
use meetbrief_nlp::NlpEngine;

/// Lowercase substrings that mark a sentence as an action item.
/// `"by "` keeps its trailing space so "nearby" or a closing "by" don't count.
pub const ACTION_KEYWORDS: &[&str] = &[
    "action",
    "action item",
    "will",
    "shall",
    "to do",
    "assign",
    "assigned to",
    "owner",
    "deadline",
    "by ",
];

pub fn is_action_sentence(sentence: &str) -> bool {
    let lower = sentence.trim().to_lowercase();
    ACTION_KEYWORDS.iter().any(|k| lower.contains(k))
}

/// Sentences that read like commitments, with the people and dates in them.
///
/// Duplicates (same trimmed text) are dropped; first occurrence wins.
pub fn extract_action_items(engine: &dyn NlpEngine, transcript: &str) -> Result<Vec<ActionItem>> {
    let sentences = engine.segment(transcript)?;
    let entities = engine.recognize_entities(transcript)?;

    let mut seen = HashSet::new();
    let mut items = Vec::new();
    for sentence in &sentences {
        let text = sentence.text.trim();
        if !is_action_sentence(text) || !seen.insert(text.to_string()) {
            continue;
        }

        let mut owners = Vec::new();
        let mut dates = Vec::new();
        for entity in entities.iter().filter(|e| e.within(sentence)) {
            if entity.label.is_party() {
                owners.push(entity.text.clone());
            } else if entity.label.is_temporal() {
                dates.push(entity.text.clone());
            }
        }

        items.push(ActionItem {
            text: text.to_string(),
            owners,
            dates,
        });
    }
    Ok(items)
}
