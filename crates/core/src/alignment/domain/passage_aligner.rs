use super::normalizer::normalize;
use super::tokenizer::tokenize;
use super::word_status::WordStatus;
use crate::shared::constants::DEFAULT_LOOKAHEAD_WINDOW;

/// Aligns a live transcript against a fixed reference passage.
///
/// The alignment is greedy and strictly forward: a single cursor walks the
/// reference, and each spoken token is checked against a small window of
/// unresolved reference positions starting at the cursor. A match inside
/// the window marks any skipped positions as missed and advances the
/// cursor past the match; a token with no match in the window is dropped
/// as recognition noise and leaves the cursor where it is. Positions
/// behind the cursor are never revisited within one call.
///
/// Cost is O(window) per spoken token.
#[derive(Debug, Clone, Copy)]
pub struct PassageAligner {
    lookahead_window: usize,
}

impl PassageAligner {
    pub fn new() -> Self {
        Self::with_lookahead(DEFAULT_LOOKAHEAD_WINDOW)
    }

    /// `lookahead_window` is the number of reference positions examined per
    /// spoken token (current position included), so a window of 3 tolerates
    /// up to 2 consecutively skipped reference words.
    pub fn with_lookahead(lookahead_window: usize) -> Self {
        Self { lookahead_window }
    }

    pub fn lookahead_window(&self) -> usize {
        self.lookahead_window
    }

    /// Compute the status of every reference word against the transcript.
    ///
    /// Pure and total: the result always has one entry per reference word,
    /// empty inputs yield the obvious degenerate outputs, and identical
    /// inputs always produce identical results.
    pub fn align(&self, reference_words: &[String], transcript: &str) -> Vec<WordStatus> {
        let reference: Vec<String> = reference_words.iter().map(|w| normalize(w)).collect();
        let mut statuses = vec![WordStatus::Pending; reference.len()];
        let mut target_idx = 0;

        for spoken in tokenize(transcript) {
            if target_idx >= reference.len() {
                break;
            }
            let spoken = normalize(spoken);
            // A token that was pure punctuation normalizes to empty and
            // carries no alignment information.
            if spoken.is_empty() {
                continue;
            }
            let window_end = (target_idx + self.lookahead_window).min(reference.len());
            if let Some(hit) = (target_idx..window_end).find(|&i| reference[i] == spoken) {
                for status in &mut statuses[target_idx..hit] {
                    *status = WordStatus::Missed;
                }
                statuses[hit] = WordStatus::Matched;
                target_idx = hit + 1;
            }
            // No match in the window: the token is noise, cursor stays.
        }

        statuses
    }
}

impl Default for PassageAligner {
    fn default() -> Self {
        Self::new()
    }
}
