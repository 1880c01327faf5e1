use super::tokenizer::tokenize;

/// A fixed passage the reader is meant to speak aloud, tokenized once at
/// selection time. Rebuilt (not mutated) when the user switches passages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferencePassage {
    words: Vec<String>,
}

impl ReferencePassage {
    pub fn from_text(text: &str) -> Self {
        Self {
            words: tokenize(text).into_iter().map(str::to_string).collect(),
        }
    }

    /// Raw display words, in passage order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
