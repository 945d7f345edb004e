//! Per-deck playback task.

use crate::{Cursor, Frame, Playback, PlaybackEngine};
use slidecast_core::AudioAsset;
use slidecast_error::{BackendError, SlidecastResult};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument};

/// Requests handled by the session task.
#[derive(Debug)]
enum SessionMessage {
    Start(oneshot::Sender<Playback>),
    UnitFinished(oneshot::Sender<Playback>),
    Seek(u32, oneshot::Sender<Playback>),
    RefreshAudio(Vec<AudioAsset>, oneshot::Sender<Option<Playback>>),
    Frame(oneshot::Sender<Option<Frame>>),
    Shutdown,
}

/// Owns the engine inside the task and applies messages in arrival order.
struct SessionTask {
    engine: PlaybackEngine,
    rx: mpsc::Receiver<SessionMessage>,
}

impl SessionTask {
    #[instrument(skip(self), fields(deck_id = %self.engine.deck().id))]
    async fn run(mut self) -> Cursor {
        debug!("Playback session started");

        while let Some(msg) = self.rx.recv().await {
            // A dropped reply channel only means the caller stopped waiting.
            match msg {
                SessionMessage::Start(reply) => {
                    let _ = reply.send(self.engine.start());
                }
                SessionMessage::UnitFinished(reply) => {
                    let _ = reply.send(self.engine.unit_finished());
                }
                SessionMessage::Seek(target, reply) => {
                    let _ = reply.send(self.engine.seek(target));
                }
                SessionMessage::RefreshAudio(assets, reply) => {
                    let _ = reply.send(self.engine.refresh_audio(&assets));
                }
                SessionMessage::Frame(reply) => {
                    let _ = reply.send(self.engine.frame());
                }
                SessionMessage::Shutdown => {
                    info!("Playback session shutting down");
                    break;
                }
            }
        }

        self.engine.cursor()
    }
}

/// Handle to a deck's playback task.
///
/// Every event for the deck goes through one queue, so completion signals
/// that arrive close together are applied one at a time. Dropping the handle
/// closes the queue, ends the task and discards the cursor.
#[derive(Debug)]
pub struct PlaybackSession {
    tx: mpsc::Sender<SessionMessage>,
    task: JoinHandle<Cursor>,
}

impl PlaybackSession {
    /// Queue depth before senders wait.
    pub const CAPACITY: usize = 32;

    /// Spawn the task for `engine` on the current runtime.
    pub fn spawn(engine: PlaybackEngine) -> Self {
        let (tx, rx) = mpsc::channel(Self::CAPACITY);
        let task = tokio::spawn(SessionTask { engine, rx }.run());
        Self { tx, task }
    }

    /// Autoplay the first unit.
    pub async fn start(&self) -> SlidecastResult<Playback> {
        self.request(SessionMessage::Start).await
    }

    /// Report that the current clip finished.
    pub async fn unit_finished(&self) -> SlidecastResult<Playback> {
        self.request(SessionMessage::UnitFinished).await
    }

    /// Jump forward to a global unit number.
    pub async fn seek(&self, target: u32) -> SlidecastResult<Playback> {
        self.request(|reply| SessionMessage::Seek(target, reply)).await
    }

    /// Supply clips that arrived after load.
    pub async fn refresh_audio(
        &self,
        assets: Vec<AudioAsset>,
    ) -> SlidecastResult<Option<Playback>> {
        self.request(|reply| SessionMessage::RefreshAudio(assets, reply))
            .await
    }

    /// Snapshot of the current slide.
    pub async fn frame(&self) -> SlidecastResult<Option<Frame>> {
        self.request(SessionMessage::Frame).await
    }

    /// Stop the task after queued events and return the final cursor.
    pub async fn shutdown(self) -> SlidecastResult<Cursor> {
        self.tx
            .send(SessionMessage::Shutdown)
            .await
            .map_err(|_| BackendError::new("playback session closed"))?;
        let cursor = self
            .task
            .await
            .map_err(|e| BackendError::new(format!("playback session failed: {}", e)))?;
        Ok(cursor)
    }

    async fn request<R>(
        &self,
        message: impl FnOnce(oneshot::Sender<R>) -> SessionMessage,
    ) -> SlidecastResult<R> {
        let (reply, response) = oneshot::channel();
        self.tx
            .send(message(reply))
            .await
            .map_err(|_| BackendError::new("playback session closed"))?;
        let value = response
            .await
            .map_err(|_| BackendError::new("playback session closed"))?;
        Ok(value)
    }
}
