//! Overlapping, size-bounded transcript chunking.
//!
//! Chunks are at most `max_chars` characters and consecutive chunks share
//! about `overlap` characters. Each cut is nudged to a nearby sentence
//! boundary (a period or newline followed by whitespace) when one exists
//! within `BOUNDARY_WINDOW` characters of the hard cut.

use once_cell::sync::Lazy;
use regex::Regex;

use meetbrief_core::config::{validate_chunking, DEFAULT_MAX_CHARS, DEFAULT_OVERLAP};
use meetbrief_core::Result;

/// How far (in characters) either side of a hard cut to look for a boundary.
pub const BOUNDARY_WINDOW: usize = 50;

static BOUNDARY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.\n]\s").unwrap());

/// A chunk with its position in the trimmed transcript.
///
/// `start_char..end_char` is the character window the chunk was cut from;
/// `text` is that window with surrounding whitespace removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChunk {
    pub text: String,
    pub chunk_index: usize,
    pub start_char: usize,
    pub end_char: usize,
}

/// Splits long text into overlapping windows.
#[derive(Debug, Clone, Copy)]
pub struct OverlapChunker {
    max_chars: usize,
    overlap: usize,
}

impl OverlapChunker {
    /// Fails with `Error::Config` unless `overlap < max_chars`.
    pub fn new(max_chars: usize, overlap: usize) -> Result<Self> {
        validate_chunking(max_chars, overlap)?;
        Ok(Self { max_chars, overlap })
    }

    /// Chunk texts only.
    pub fn chunk(&self, text: &str) -> Vec<String> {
        self.chunk_spans(text).into_iter().map(|c| c.text).collect()
    }

    /// Chunks with position metadata. Always returns at least one chunk.
    pub fn chunk_spans(&self, text: &str) -> Vec<TextChunk> {
        let text = text.trim();
        // Byte offset of every char, plus the end of the text.
        let offsets: Vec<usize> = text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
            .collect();
        let len = offsets.len() - 1;

        if len <= self.max_chars {
            return vec![TextChunk {
                text: text.to_string(),
                chunk_index: 0,
                start_char: 0,
                end_char: len,
            }];
        }

        let mut chunks = Vec::new();
        let mut start = 0;
        loop {
            let mut end = (start + self.max_chars).min(len);
            if end < len {
                if let Some(aligned) = self.align_to_boundary(text, &offsets, start, end) {
                    end = aligned;
                }
            }

            let piece = text[offsets[start]..offsets[end]].trim();
            if !piece.is_empty() {
                chunks.push(TextChunk {
                    text: piece.to_string(),
                    chunk_index: chunks.len(),
                    start_char: start,
                    end_char: end,
                });
            }

            if end >= len {
                break;
            }
            // end > start + overlap, so start strictly advances.
            start = end - self.overlap;
        }
        chunks
    }

    /// Char index just past the first boundary near `end`, if moving there
    /// still leaves the next window starting beyond `start`.
    fn align_to_boundary(
        &self,
        text: &str,
        offsets: &[usize],
        start: usize,
        end: usize,
    ) -> Option<usize> {
        let len = offsets.len() - 1;
        let lo = end.saturating_sub(BOUNDARY_WINDOW).max(start);
        let hi = (end + BOUNDARY_WINDOW).min(len);
        let window = &text[offsets[lo]..offsets[hi]];

        let m = BOUNDARY_RE.find(window)?;
        let aligned = offsets.binary_search(&(offsets[lo] + m.end())).ok()?;
        (aligned > start + self.overlap).then_some(aligned)
    }
}

impl Default for OverlapChunker {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
            overlap: DEFAULT_OVERLAP,
        }
    }
}

/// Split `text` into overlapping chunks of at most `max_chars` characters.
pub fn chunk_text(text: &str, max_chars: usize, overlap: usize) -> Result<Vec<String>> {
    Ok(OverlapChunker::new(max_chars, overlap)?.chunk(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use meetbrief_core::Error;

    fn prose(sentences: usize) -> String {
        (0..sentences)
            .map(|i| format!("This is sentence number {} of the meeting. ", i))
            .collect()
    }

    #[test]
    fn test_short_text_is_single_trimmed_chunk() {
        let chunks = chunk_text("  We met and agreed.\n", 4500, 300).unwrap();
        assert_eq!(chunks, vec!["We met and agreed.".to_string()]);

        let exact = "x".repeat(100);
        assert_eq!(chunk_text(&exact, 100, 10).unwrap(), vec![exact.clone()]);
    }

    #[test]
    fn test_overlap_must_be_smaller_than_max_chars() {
        let err = chunk_text("anything", 100, 100).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(OverlapChunker::new(100, 250).is_err());
        assert!(OverlapChunker::new(0, 0).is_err());
    }

    #[test]
    fn test_exact_overlap_reconstructs_text_without_boundaries() {
        let text = "abcdefghij".repeat(100);
        let chunks = chunk_text(&text, 300, 50).unwrap();
        assert_eq!(chunks.len(), 4);

        for pair in chunks.windows(2) {
            assert_eq!(&pair[0][pair[0].len() - 50..], &pair[1][..50]);
        }

        let mut rebuilt = chunks[0].clone();
        for chunk in &chunks[1..] {
            rebuilt.push_str(&chunk[50..]);
        }
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn test_cuts_align_to_sentence_boundaries() {
        let text = prose(40);
        let chunks = chunk_text(&text, 200, 40).unwrap();
        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 200 + BOUNDARY_WINDOW);
            assert!(chunk.ends_with('.'), "chunk not aligned: {:?}", chunk);
        }
        assert!(text.trim_end().ends_with(chunks.last().unwrap().as_str()));
    }

    #[test]
    fn test_spans_cover_whole_text_and_advance() {
        let text = prose(60);
        let total = text.trim().chars().count();
        for (max_chars, overlap) in [(120, 0), (120, 119), (300, 100), (57, 56), (1000, 300)] {
            let spans = OverlapChunker::new(max_chars, overlap)
                .unwrap()
                .chunk_spans(&text);
            assert_eq!(spans[0].start_char, 0);
            assert_eq!(spans.last().unwrap().end_char, total);
            for pair in spans.windows(2) {
                assert!(pair[1].start_char > pair[0].start_char);
                assert!(pair[1].start_char <= pair[0].end_char);
            }
        }
    }

    #[test]
    fn test_tiny_windows_terminate() {
        let text = "a. b. c. d. e. f. g. h.";
        let chunks = chunk_text(text, 5, 4).unwrap();
        assert!(!chunks.is_empty());
        assert!(chunks.last().unwrap().ends_with("h."));
    }

    #[test]
    fn test_lengths_are_counted_in_chars() {
        let text = "é".repeat(120);
        let chunks = chunk_text(&text, 50, 10).unwrap();
        assert_eq!(chunks.len(), 3);
        assert!(chunks.iter().all(|c| c.chars().count() <= 50));
    }

    #[test]
    fn test_chunk_indices_are_sequential() {
        let spans = OverlapChunker::new(100, 20).unwrap().chunk_spans(&prose(20));
        for (i, span) in spans.iter().enumerate() {
            assert_eq!(span.chunk_index, i);
        }
    }
}
