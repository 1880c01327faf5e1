/// Accumulated transcript for one listening session: a finalized prefix
/// confirmed by the recognizer plus a provisional interim suffix that the
/// next interim result replaces wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    finalized: String,
    interim: String,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append confirmed text and drop the interim suffix it supersedes.
    pub fn push_final(&mut self, text: &str) {
        if text.is_empty() {
            self.interim.clear();
            return;
        }
        if !self.finalized.is_empty() {
            self.finalized.push(' ');
        }
        self.finalized.push_str(text);
        self.interim.clear();
    }

    /// Replace the provisional suffix.
    pub fn set_interim(&mut self, text: &str) {
        self.interim.clear();
        self.interim.push_str(text);
    }

    /// Reset both parts, e.g. on passage switch or session restart.
    pub fn clear(&mut self) {
        self.finalized.clear();
        self.interim.clear();
    }

    /// The concatenated text the aligner consumes. The aligner has no
    /// knowledge of which part is provisional.
    pub fn snapshot(&self) -> String {
        format!("{} {}", self.finalized, self.interim)
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_transcript_snapshot_is_empty() {
        assert_eq!(Transcript::new().snapshot(), "");
    }

    #[test]
    fn test_push_final_appends_with_space() {
        let mut t = Transcript::new();
        t.push_final("the cat");
        t.push_final("sat down");
        assert_eq!(t.snapshot(), "the cat sat down");
    }

    #[test]
    fn test_interim_is_replaced_wholesale() {
        let mut t = Transcript::new();
        t.set_interim("the");
        t.set_interim("the cat");
        assert_eq!(t.snapshot(), "the cat");
    }

    #[test]
    fn test_snapshot_joins_final_and_interim() {
        let mut t = Transcript::new();
        t.push_final("the cat");
        t.set_interim("sat on");
        assert_eq!(t.snapshot(), "the cat sat on");
    }

    #[test]
    fn test_final_clears_pending_interim() {
        let mut t = Transcript::new();
        t.set_interim("the cat sa");
        t.push_final("the cat sat");
        assert_eq!(t.snapshot(), "the cat sat");
    }

    #[test]
    fn test_empty_final_only_drops_interim() {
        let mut t = Transcript::new();
        t.push_final("the cat");
        t.set_interim("sa");
        t.push_final("");
        assert_eq!(t.snapshot(), "the cat");
    }

    #[test]
    fn test_clear_resets_both_parts() {
        let mut t = Transcript::new();
        t.push_final("the cat");
        t.set_interim("sat");
        t.clear();
        assert_eq!(t.snapshot(), "");
    }
}
