use std::io::BufRead;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam_channel::Receiver;

use crate::session::domain::recognition_session::{RecognitionSession, SessionEvent};

/// A recognition session that replays transcript fragments from a text
/// source instead of a live recognizer. One fragment per line:
///
/// - `~text` — interim result (replaces the previous interim)
/// - `!detail` — recognizer error, terminates the session
/// - anything else — final result, appended to the transcript
///
/// End of input emits `Stopped`. Used as the CLI driver (script files or
/// stdin) and as the test double for session consumers.
pub struct ScriptedSession {
    source: Option<Box<dyn BufRead + Send>>,
    delay: Option<Duration>,
    stop_flag: Arc<AtomicBool>,
}

impl ScriptedSession {
    pub fn from_reader(source: Box<dyn BufRead + Send>) -> Self {
        Self {
            source: Some(source),
            delay: None,
            stop_flag: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn from_script(script: &str) -> Self {
        Self::from_reader(Box::new(std::io::Cursor::new(script.to_string())))
    }

    /// Pause between events to simulate live recognition pacing.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    fn parse_line(line: &str) -> SessionEvent {
        if let Some(detail) = line.strip_prefix('!') {
            SessionEvent::Error(detail.trim().to_string())
        } else if let Some(text) = line.strip_prefix('~') {
            SessionEvent::Interim(text.trim().to_string())
        } else {
            SessionEvent::Final(line.trim().to_string())
        }
    }
}

impl RecognitionSession for ScriptedSession {
    fn start(&mut self) -> Result<Receiver<SessionEvent>, Box<dyn std::error::Error>> {
        let source = self
            .source
            .take()
            .ok_or("scripted session already started")?;
        let delay = self.delay;
        let stop_flag = self.stop_flag.clone();
        let (tx, rx) = crossbeam_channel::unbounded::<SessionEvent>();

        thread::spawn(move || {
            for line in source.lines() {
                if stop_flag.load(Ordering::Relaxed) {
                    break;
                }
                let line = match line {
                    Ok(l) => l,
                    Err(e) => {
                        let _ = tx.send(SessionEvent::Error(e.to_string()));
                        return;
                    }
                };
                if line.trim().is_empty() {
                    continue;
                }
                let event = Self::parse_line(&line);
                log::debug!("scripted event: {event:?}");
                let terminal = matches!(event, SessionEvent::Error(_));
                if tx.send(event).is_err() {
                    // Receiver dropped; nobody is listening anymore.
                    return;
                }
                if terminal {
                    return;
                }
                if let Some(d) = delay {
                    thread::sleep(d);
                }
            }
            let _ = tx.send(SessionEvent::Stopped);
        });

        Ok(rx)
    }

    fn stop(&mut self) {
        self.stop_flag.store(true, Ordering::Relaxed);
    }
}
