//! Paced playback of a reply's explanation.
//!
//! The server returns the whole envelope at once; the "typing" effect is an
//! illusion built client-side by deferring each explanation line. Every
//! deferred append is scheduled at `delay × index` from a single dispatch
//! point, so lines land in source order no matter how slowly the consumer
//! drains them. The scheduled appends are a scoped resource: they belong to
//! one reply and are aborted when the next reply starts or the playback is
//! dropped.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::sleep;

use crate::transcript::{ChatMessage, Transcript};

/// Fixed interval between revealed lines.
pub const DEFAULT_LINE_DELAY: Duration = Duration::from_secs(3);

/// Schedules deferred transcript appends for one reply at a time.
#[derive(Debug)]
pub struct PacedPlayback {
    delay: Duration,
    tasks: Vec<JoinHandle<()>>,
}

impl PacedPlayback {
    /// Create a playback with the default line delay.
    pub fn new() -> Self {
        Self::with_delay(DEFAULT_LINE_DELAY)
    }

    /// Create a playback with a custom line delay.
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            tasks: Vec::new(),
        }
    }

    /// Schedule one deferred append per non-blank explanation line.
    ///
    /// Appends still pending from a previous reply are cancelled first, so
    /// two consecutive replies can never interleave in the transcript.
    pub fn start(&mut self, explanation: &str, transcript: Arc<RwLock<Transcript>>) {
        self.cancel();

        let lines: Vec<String> = explanation
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        for (index, line) in lines.into_iter().enumerate() {
            let transcript = transcript.clone();
            let delay = self.delay * index as u32;

            self.tasks.push(tokio::spawn(async move {
                sleep(delay).await;
                transcript.write().await.push(ChatMessage::bot(line));
            }));
        }
    }

    /// Abort every append that has not fired yet.
    pub fn cancel(&mut self) {
        for task in self.tasks.drain(..) {
            task.abort();
        }
    }

    /// Whether any scheduled append is still pending.
    pub fn is_pending(&self) -> bool {
        self.tasks.iter().any(|task| !task.is_finished())
    }
}

impl Drop for PacedPlayback {
    fn drop(&mut self) {
        self.cancel();
    }
}
