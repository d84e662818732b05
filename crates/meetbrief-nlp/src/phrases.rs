//! Keyphrase ranking (RAKE-style) and phrase-coverage sentence ranking.
//!
//! Candidate phrases are maximal runs of content words inside a sentence,
//! broken by stopwords, numbers and punctuation. A word scores
//! `degree / frequency` over all candidates; a phrase scores the sum of its
//! words. Sentences are then ranked by the share of top-phrase weight they
//! contain.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

use crate::engine::{EngineError, SentenceExtract};
use crate::segment::split_sentences;

static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{L}\p{N}][\p{L}\p{N}'&-]*").unwrap());

static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and",
        "any", "are", "as", "at", "be", "because", "been", "before", "being", "below",
        "between", "both", "but", "by", "can", "could", "did", "do", "does", "doing", "done",
        "down", "during", "each", "either", "else", "even", "ever", "every", "few", "for",
        "from", "further", "get", "gets", "getting", "go", "goes", "going", "gonna", "got",
        "had", "has", "have", "having", "he", "her", "here", "hers", "herself", "him",
        "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just",
        "know", "let", "let's", "like", "make", "may", "me", "might", "more", "most", "much",
        "must", "my", "myself", "need", "needs", "needed", "no", "nor", "not", "now", "of",
        "off", "oh", "ok", "okay", "on", "once", "one", "only", "or", "other", "our", "ours",
        "ourselves", "out", "over", "own", "please", "really", "right", "said", "same",
        "say", "says", "shall", "she", "should", "so", "some", "such", "sure", "than",
        "thank", "thanks", "that", "that's", "the", "their", "theirs", "them", "themselves",
        "then", "there", "these", "they", "thing", "things", "think", "this", "those",
        "through", "to", "too", "uh", "um", "under", "until", "up", "us", "very", "want",
        "wants", "was", "we", "we'll", "we're", "well", "were", "what", "when", "where",
        "which", "while", "who", "whom", "why", "will", "with", "would", "yeah", "yes", "yet",
        "you", "your", "yours", "yourself", "yourselves", "it's", "i'm", "i'll", "don't",
        "can't", "won't", "there's", "they're", "you're",
    ]
    .into_iter()
    .collect()
});

/// A keyphrase with its salience score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredPhrase {
    pub text: String,
    pub score: f64,
}

struct Candidate {
    surface: String,
    words: Vec<String>,
}

/// Rank keyphrases in `text`, most salient first.
///
/// Phrases differing only in case or plural are merged; the first surface
/// form seen is kept. Equal scores keep first-occurrence order.
pub fn score_phrases(text: &str) -> Vec<ScoredPhrase> {
    let candidates = candidates(text);

    let mut stats: HashMap<&str, (usize, usize)> = HashMap::new(); // (frequency, degree)
    for candidate in &candidates {
        for word in &candidate.words {
            let entry = stats.entry(word.as_str()).or_insert((0, 0));
            entry.0 += 1;
            entry.1 += candidate.words.len();
        }
    }
    let word_score = |word: &str| -> f64 {
        stats
            .get(word)
            .map(|&(freq, degree)| degree as f64 / freq as f64)
            .unwrap_or(0.0)
    };

    let mut ranked: Vec<ScoredPhrase> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    for candidate in &candidates {
        if !seen.insert(candidate.words.join(" ")) {
            continue;
        }
        let score: f64 = candidate.words.iter().map(|w| word_score(w)).sum();
        ranked.push(ScoredPhrase {
            text: candidate.surface.clone(),
            score,
        });
    }

    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked
}

/// Top `limit` keyphrase texts, most salient first.
pub fn rank(text: &str, limit: usize) -> Vec<String> {
    score_phrases(text)
        .into_iter()
        .take(limit)
        .map(|p| p.text)
        .collect()
}

/// Rank sentences by how much top-phrase weight each one contains.
pub fn summarize(
    text: &str,
    limit_phrases: usize,
    limit_sentences: usize,
) -> Result<Vec<SentenceExtract>, EngineError> {
    let top: Vec<ScoredPhrase> = score_phrases(text).into_iter().take(limit_phrases).collect();
    if top.is_empty() {
        return Err(EngineError::NoPhrases);
    }
    let total: f64 = top.iter().map(|p| p.score).sum();
    let needles: Vec<(String, f64)> = top
        .iter()
        .map(|p| (p.text.to_lowercase(), p.score))
        .collect();

    let mut scored: Vec<SentenceExtract> = split_sentences(text)
        .into_iter()
        .map(|sentence| {
            let lower = sentence.text.to_lowercase();
            let covered: f64 = needles
                .iter()
                .filter(|(needle, _)| lower.contains(needle.as_str()))
                .map(|(_, score)| score)
                .sum();
            SentenceExtract {
                text: sentence.text,
                score: if total > 0.0 { covered / total } else { 0.0 },
            }
        })
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored.truncate(limit_sentences);
    Ok(scored)
}

fn candidates(text: &str) -> Vec<Candidate> {
    let mut out = Vec::new();

    for sentence in split_sentences(text) {
        let s = sentence.text.as_str();
        let mut run: Option<(usize, usize, Vec<String>)> = None;

        for m in WORD_RE.find_iter(s) {
            let lower = m.as_str().to_lowercase();
            let is_break =
                STOPWORDS.contains(lower.as_str()) || lower.chars().all(|c| c.is_numeric());
            if is_break {
                flush(s, run.take(), &mut out);
                continue;
            }
            let word = normalize(&lower);
            match run.as_mut() {
                Some((_, end, words)) if s[*end..m.start()].chars().all(char::is_whitespace) => {
                    *end = m.end();
                    words.push(word);
                }
                _ => {
                    flush(s, run.take(), &mut out);
                    run = Some((m.start(), m.end(), vec![word]));
                }
            }
        }
        flush(s, run.take(), &mut out);
    }
    out
}

fn flush(sentence: &str, run: Option<(usize, usize, Vec<String>)>, out: &mut Vec<Candidate>) {
    if let Some((start, end, words)) = run {
        out.push(Candidate {
            surface: sentence[start..end].to_string(),
            words,
        });
    }
}

/// Lowercased word with possessive and simple plural folded away.
fn normalize(lower: &str) -> String {
    let word = lower.strip_suffix("'s").unwrap_or(lower);
    if word.len() > 4 && word.ends_with("ies") {
        format!("{}y", &word[..word.len() - 3])
    } else if word.len() > 3
        && word.ends_with('s')
        && !word.ends_with("ss")
        && !word.ends_with("us")
        && !word.ends_with("is")
    {
        word[..word.len() - 1].to_string()
    } else {
        word.to_string()
    }
}
