//! Sentence segmentation.
//!
//! A sentence ends at `.`, `!` or `?` followed by whitespace, or at a line
//! break (transcripts usually put each speaker turn on its own line).
//! Honorifics such as "Dr." do not end a sentence.

use crate::engine::Sentence;

const ABBREVIATIONS: &[&str] = &["mr", "mrs", "ms", "dr", "prof", "vs", "e.g", "i.e", "approx"];

/// Split text into trimmed sentences with byte offsets.
pub fn split_sentences(text: &str) -> Vec<Sentence> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        let boundary = match c {
            '\n' => true,
            '.' | '!' | '?' => match chars.peek() {
                Some(&(_, next)) => {
                    next.is_whitespace() && !(c == '.' && ends_with_abbreviation(&text[start..i]))
                }
                None => false,
            },
            _ => false,
        };
        if boundary {
            let end = i + c.len_utf8();
            push_trimmed(text, start, end, &mut sentences);
            start = end;
        }
    }
    push_trimmed(text, start, text.len(), &mut sentences);
    sentences
}

fn ends_with_abbreviation(prefix: &str) -> bool {
    prefix
        .split_whitespace()
        .last()
        .map(|word| {
            let word = word.trim_start_matches(|c: char| !c.is_alphanumeric());
            ABBREVIATIONS.contains(&word.to_lowercase().as_str())
        })
        .unwrap_or(false)
}

fn push_trimmed(text: &str, start: usize, end: usize, out: &mut Vec<Sentence>) {
    let slice = &text[start..end];
    let trimmed = slice.trim();
    if trimmed.is_empty() {
        return;
    }
    let lead = slice.len() - slice.trim_start().len();
    out.push(Sentence {
        text: trimmed.to_string(),
        start: start + lead,
        end: start + lead + trimmed.len(),
    });
}
