/// Alignment state of one reference word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordStatus {
    /// Not yet reached by the spoken transcript.
    Pending,
    /// Spoken and recognized at or near its reference position.
    Matched,
    /// Skipped over when a later reference word was matched.
    Missed,
}
