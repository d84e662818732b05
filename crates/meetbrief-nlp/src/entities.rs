//! Rule-based entity recognition for PERSON, ORG, DATE and TIME.
//!
//! Each sentence is scanned in passes: organisations with a corporate
//! suffix, times, dates, acronyms, then runs of capitalised words as people.
//! A span claimed by an earlier pass is never reused by a later one.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::engine::{Entity, EntityLabel, Sentence};
use crate::segment::split_sentences;

const MONTHS: &str = "January|February|March|April|May|June|July|August|September|October|November|December|Jan|Feb|Mar|Apr|Jun|Jul|Aug|Sept|Sep|Oct|Nov|Dec";

const WEEKDAYS: &[&str] = &[
    "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday",
];

const MONTH_NAMES: &[&str] = &[
    "january", "february", "march", "april", "may", "june", "july", "august",
    "september", "october", "november", "december",
];

static ORG_SUFFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b[A-Z][A-Za-z0-9&'-]*(?:\s+[A-Z][A-Za-z0-9&'-]*){0,3}\s+(?:Corp|Corporation|Inc|LLC|Ltd|Co|Company|Group|Holdings|Labs|Technologies|Systems|Solutions|Partners|Bank|University|Agency|Foundation|Institute)\b",
    )
    .unwrap()
});

static ACRONYM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[A-Z][A-Z&]{1,5}\b").unwrap());

static CAPITALIZED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Z][a-z]+(?:-[A-Z]?[a-z]+|'[A-Z][a-z]+)?\b").unwrap()
});

static TIME_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\b\d{1,2}(?::\d{2})?\s?(?:[ap]\.m\.|[ap]m\b)",
        r"\b\d{1,2}:\d{2}\b",
        r"(?i)\b(?:noon|midnight|tonight)\b",
        r"(?i)\b(?:this|tomorrow|today|yesterday|monday|tuesday|wednesday|thursday|friday|saturday|sunday)\s+(?:morning|afternoon|evening|night)\b",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static DATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    let patterns = vec![
        format!(r"\b(?:{MONTHS})\.?\s+\d{{1,2}}(?:st|nd|rd|th)?(?:,?\s+\d{{4}})?\b"),
        format!(r"\b\d{{1,2}}(?:st|nd|rd|th)?\s+(?:of\s+)?(?:{MONTHS})(?:,?\s+\d{{4}})?\b"),
        r"\b(?:January|February|March|April|June|July|August|September|October|November|December)(?:\s+\d{4})?\b".to_string(),
        r"\b\d{4}-\d{2}-\d{2}\b".to_string(),
        r"\b\d{1,2}/\d{1,2}(?:/\d{2,4})?\b".to_string(),
        r"(?i)\b(?:(?:next|this|last|coming)\s+)?(?:monday|tuesday|wednesday|thursday|friday|saturday|sunday)\b".to_string(),
        r"(?i)\b(?:today|tomorrow|yesterday)\b".to_string(),
        r"(?i)\b(?:next|this|last|coming)\s+(?:week|month|quarter|year|sprint)\b".to_string(),
        r"(?i)\b(?:end|beginning|start|middle)\s+of\s+(?:the\s+|this\s+|next\s+)?(?:day|week|month|quarter|year|sprint)\b".to_string(),
        r"\bQ[1-4](?:\s+\d{4})?\b".to_string(),
        r"(?i)\b(?:\d+|one|two|three|four|five|six|seven|eight|nine|ten|a\s+few|several)\s+(?:days?|weeks?|months?|years?)\b".to_string(),
        r"\b(?:19|20)\d{2}\b".to_string(),
    ];
    patterns.iter().map(|p| Regex::new(p).unwrap()).collect()
});

/// Capitalised words that are not names on their own.
static COMMON_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "an", "the", "this", "that", "these", "those", "i", "we", "you", "he", "she",
        "it", "they", "me", "us", "him", "her", "them", "my", "our", "your", "his", "its",
        "their", "there", "here", "what", "when", "where", "who", "whom", "whose", "why",
        "how", "which", "and", "but", "or", "nor", "so", "yet", "for", "if", "then", "than",
        "because", "since", "although", "though", "while", "unless", "until", "after",
        "before", "once", "as", "at", "by", "in", "on", "of", "to", "from", "with", "without",
        "about", "above", "below", "into", "over", "under", "per", "via", "also", "just",
        "only", "still", "even", "maybe", "perhaps", "please", "thanks", "thank", "okay",
        "yes", "yeah", "yep", "no", "nope", "not", "hi", "hello", "hey", "sure", "right",
        "well", "oh", "um", "uh", "hmm", "great", "good", "cool", "awesome", "alright", "let",
        "lets", "everyone", "everybody", "someone", "somebody", "anyone", "anybody",
        "nobody", "none", "all", "each", "every", "both", "either", "neither", "some", "any",
        "many", "much", "more", "most", "other", "another", "such", "is", "are", "was",
        "were", "be", "been", "do", "does", "did", "have", "has", "had", "will", "would",
        "shall", "should", "can", "could", "may", "might", "must", "action", "item", "items",
        "agenda", "next", "last", "first", "second", "third", "finally", "meanwhile",
        "overall", "today", "tomorrow", "yesterday", "tonight", "speaker", "note", "notes",
        "update", "updates", "summary", "decision", "decisions", "question", "questions",
        "answer", "team", "meeting", "call", "deadline", "owner", "regarding", "re", "mr",
        "mrs", "ms", "dr", "prof", "sir", "madam",
    ]
    .into_iter()
    .collect()
});

/// Acronyms that are jargon rather than organisations.
const NON_ORG_ACRONYMS: &[&str] = &[
    "OK", "AM", "PM", "TBD", "FYI", "ASAP", "ETA", "EOD", "EOW", "QA", "UI", "UX", "API",
    "CEO", "CTO", "CFO", "COO", "VP", "PR", "HR", "IT", "ID", "URL", "PDF", "FAQ", "KPI",
    "OKR", "ROI", "SLA", "MVP", "SOW", "RFP", "POC", "TV", "US", "UK", "EU", "AI", "ML",
    "SQL", "CSV", "NOT", "NO", "YES", "AND", "THE", "TODO", "SSO",
    // Meeting markers ("ACTION ITEM:", "NOTE:", "DONE:").
    "ACTION", "ITEM", "ITEMS", "NOTE", "NOTES", "DONE", "AGENDA", "UPDATE", "DECISION",
    "FOLLOWUP", "BLOCKER", "RISK", "NEXT", "STEPS", "Q&A",
];

/// Words following a sentence-initial name that mark it as a subject.
const SUBJECT_CUES: &[&str] = &[
    "will", "shall", "would", "should", "can", "could", "must", "may", "might", "is", "was",
    "has", "had", "and", "said", "says", "asked", "mentioned", "agreed", "noted", "suggested",
    "confirmed", "thinks", "wants", "needs", "owns", "reported", "proposed", "explained",
    "raised", "presented", "joined", "led", "from", "at",
];

/// Recognise entities across `text`, in document order.
pub fn recognize(text: &str) -> Vec<Entity> {
    let sentences = split_sentences(text);
    let known = known_names(&sentences);

    let mut entities = Vec::new();
    for sentence in &sentences {
        for mut entity in recognize_sentence(&sentence.text, &known) {
            entity.start += sentence.start;
            entity.end += sentence.start;
            entities.push(entity);
        }
    }
    entities
}

/// Capitalised words seen away from a sentence start: evidence of a proper noun.
fn known_names(sentences: &[Sentence]) -> HashSet<String> {
    let mut known = HashSet::new();
    for sentence in sentences {
        for m in CAPITALIZED_RE.find_iter(&sentence.text) {
            if m.start() > 0 && !is_common(m.as_str()) && !is_temporal_word(m.as_str()) {
                known.insert(m.as_str().to_string());
            }
        }
    }
    known
}

fn recognize_sentence(sentence: &str, known: &HashSet<String>) -> Vec<Entity> {
    let mut claims = Claims::default();

    claim_orgs(sentence, &mut claims);
    claim_patterns(sentence, &TIME_PATTERNS, EntityLabel::Time, &mut claims);
    claim_patterns(sentence, &DATE_PATTERNS, EntityLabel::Date, &mut claims);
    claim_acronyms(sentence, &mut claims);
    claim_persons(sentence, known, &mut claims);

    let mut found = claims.entities;
    found.sort_by_key(|e| e.start);
    found
}

#[derive(Default)]
struct Claims {
    entities: Vec<Entity>,
}

impl Claims {
    fn overlaps(&self, start: usize, end: usize) -> bool {
        self.entities.iter().any(|e| start < e.end && e.start < end)
    }

    fn claim(&mut self, sentence: &str, label: EntityLabel, start: usize, end: usize) -> bool {
        if start >= end || self.overlaps(start, end) {
            return false;
        }
        self.entities.push(Entity {
            text: sentence[start..end].to_string(),
            label,
            start,
            end,
        });
        true
    }
}

fn claim_orgs(sentence: &str, claims: &mut Claims) {
    for m in ORG_SUFFIX_RE.find_iter(sentence) {
        let mut start = m.start();
        // Drop leading sentence starters and date words ("On Monday Acme Corp").
        loop {
            let rest = &sentence[start..m.end()];
            let word_len = rest.find(char::is_whitespace).unwrap_or(rest.len());
            let word = &rest[..word_len];
            if word_len == rest.len() || !(is_common(word) || is_temporal_word(word)) {
                break;
            }
            let skip = rest[word_len..].len() - rest[word_len..].trim_start().len();
            start += word_len + skip;
        }
        if sentence[start..m.end()].split_whitespace().count() >= 2 {
            claims.claim(sentence, EntityLabel::Org, start, m.end());
        }
    }
}

fn claim_patterns(sentence: &str, patterns: &[Regex], label: EntityLabel, claims: &mut Claims) {
    let mut candidates: Vec<(usize, usize)> = patterns
        .iter()
        .flat_map(|re| re.find_iter(sentence).map(|m| (m.start(), m.end())))
        .collect();
    // Earliest first, longest first at the same start.
    candidates.sort_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)));
    for (start, end) in candidates {
        claims.claim(sentence, label, start, end);
    }
}

fn claim_acronyms(sentence: &str, claims: &mut Claims) {
    for m in ACRONYM_RE.find_iter(sentence) {
        // "NOTE:" style labels, and the first half of "ACTION ITEM".
        let label_like = sentence[m.end()..].starts_with(':');
        let before_marker = next_word(sentence, m.end())
            .map_or(false, |w| NON_ORG_ACRONYMS.contains(&w));
        if NON_ORG_ACRONYMS.contains(&m.as_str()) || label_like || before_marker {
            continue;
        }
        claims.claim(sentence, EntityLabel::Org, m.start(), m.end());
    }
}

/// The word right after byte `end`, when a single space separates them.
fn next_word(sentence: &str, end: usize) -> Option<&str> {
    sentence[end..]
        .strip_prefix(' ')
        .and_then(|rest| rest.split(' ').next())
        .map(|w| w.trim_end_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
}

fn claim_persons(sentence: &str, known: &HashSet<String>, claims: &mut Claims) {
    let mut runs: Vec<(usize, usize, usize)> = Vec::new(); // (start, end, words)

    for m in CAPITALIZED_RE.find_iter(sentence) {
        let word = m.as_str();
        if is_common(word) || is_temporal_word(word) || claims.overlaps(m.start(), m.end()) {
            continue;
        }
        match runs.last_mut() {
            Some(run)
                if run.2 < 3
                    && !sentence[run.1..m.start()].is_empty()
                    && sentence[run.1..m.start()].chars().all(|c| c == ' ' || c == '\t') =>
            {
                run.1 = m.end();
                run.2 += 1;
            }
            _ => runs.push((m.start(), m.end(), 1)),
        }
    }

    for (start, end, words) in runs {
        let name = &sentence[start..end];
        if start == 0 && words == 1 && !known.contains(name) && !followed_by_cue(&sentence[end..]) {
            continue;
        }
        claims.claim(sentence, EntityLabel::Person, start, end);
    }
}

/// Whether the text after a sentence-initial word reads like a subject follows.
fn followed_by_cue(rest: &str) -> bool {
    if rest.starts_with(':') || rest.starts_with(',') || rest.starts_with("'s") {
        return true;
    }
    let mut words = rest
        .split_whitespace()
        .map(|w| w.trim_end_matches(|c: char| !c.is_alphanumeric()));
    match words.next().map(str::to_lowercase).as_deref() {
        // "Bob to send the deck", but not "Go to the office" or "Talk to Dana".
        Some("to") => words
            .next()
            .map_or(false, |w| starts_lowercase(w) && !is_common(w)),
        Some(w) => SUBJECT_CUES.contains(&w),
        None => false,
    }
}

fn starts_lowercase(word: &str) -> bool {
    word.chars().next().map_or(false, char::is_lowercase)
}

fn is_common(word: &str) -> bool {
    COMMON_WORDS.contains(word.to_lowercase().as_str())
}

fn is_temporal_word(word: &str) -> bool {
    let lower = word.to_lowercase();
    WEEKDAYS.contains(&lower.as_str()) || MONTH_NAMES.contains(&lower.as_str())
}
