use crossbeam_channel::Receiver;

/// Events emitted by a live recognition session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Provisional text for the utterance in progress. Each interim event
    /// replaces the previous one wholesale.
    Interim(String),
    /// Confirmed text, appended permanently to the accumulated transcript.
    Final(String),
    /// The session ended normally; no further events follow.
    Stopped,
    /// The session failed with the recognizer's error detail; no further
    /// events follow.
    Error(String),
}

/// Domain interface for a live speech-recognition session.
///
/// Implementations stream interim and final transcript fragments over a
/// channel until the session stops or fails. The alignment core never
/// talks to a session directly; it only sees transcript snapshots.
pub trait RecognitionSession: Send {
    /// Begin recognition, returning the event stream. Called at most once
    /// per session; a new reading means a new session.
    fn start(&mut self) -> Result<Receiver<SessionEvent>, Box<dyn std::error::Error>>;

    /// Request termination. The session emits `Stopped` once it winds down.
    fn stop(&mut self);
}
