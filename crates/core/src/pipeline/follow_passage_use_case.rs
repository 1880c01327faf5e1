use crate::alignment::domain::passage_aligner::PassageAligner;
use crate::alignment::domain::reference_passage::ReferencePassage;
use crate::alignment::domain::word_status::WordStatus;
use crate::session::domain::recognition_session::{RecognitionSession, SessionEvent};
use crate::session::domain::transcript::Transcript;

/// Callback invoked with the freshly computed status array after every
/// transcript-changing event. Each call supersedes the previous one.
pub type UpdateFn = Box<dyn Fn(&[WordStatus]) + Send>;

/// Follows one reading of a passage: consumes a recognition session's
/// event stream, accumulates the transcript, and re-aligns the whole
/// passage on every update.
///
/// Alignment is recomputed from scratch per update (last-write-wins, no
/// merging across invocations); the session is the only stateful piece.
pub struct FollowPassageUseCase {
    session: Box<dyn RecognitionSession>,
    aligner: PassageAligner,
    on_update: Option<UpdateFn>,
}

impl FollowPassageUseCase {
    pub fn new(
        session: Box<dyn RecognitionSession>,
        aligner: PassageAligner,
        on_update: Option<UpdateFn>,
    ) -> Self {
        Self {
            session,
            aligner,
            on_update,
        }
    }

    /// Run the session to completion against `passage`, returning the
    /// final status array. A session error ends the reading with `Err`;
    /// the last array delivered through the callback stays valid.
    pub fn execute(
        &mut self,
        passage: &ReferencePassage,
    ) -> Result<Vec<WordStatus>, Box<dyn std::error::Error>> {
        let mut transcript = Transcript::new();
        let mut statuses = self.aligner.align(passage.words(), &transcript.snapshot());
        self.notify(&statuses);

        let events = self.session.start()?;
        log::info!("listening for {} reference words", passage.len());

        for event in events.iter() {
            match event {
                SessionEvent::Interim(text) => transcript.set_interim(&text),
                SessionEvent::Final(text) => transcript.push_final(&text),
                SessionEvent::Stopped => {
                    log::info!("session stopped");
                    break;
                }
                SessionEvent::Error(detail) => {
                    log::warn!("session error: {detail}");
                    return Err(detail.into());
                }
            }
            statuses = self.aligner.align(passage.words(), &transcript.snapshot());
            self.notify(&statuses);
        }

        Ok(statuses)
    }

    pub fn stop(&mut self) {
        self.session.stop();
    }

    fn notify(&self, statuses: &[WordStatus]) {
        if let Some(ref cb) = self.on_update {
            cb(statuses);
        }
    }
}
