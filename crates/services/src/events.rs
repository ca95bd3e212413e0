//! Fire-and-forget dispatch of game events to external collaborators.
//!
//! Sound, confetti, and summary screens subscribe through [`EventSink`].
//! Dispatch is synchronous but strictly one-way: a failing or slow sink is
//! logged and dropped, never allowed to block or roll back the state
//! transition that produced the event.

use std::sync::Arc;

use thiserror::Error;

use quest_core::session::GameEvent;

/// A collaborator failed to act on an event. Swallowed by the dispatcher.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("event sink failed: {reason}")]
pub struct SinkError {
    pub reason: String,
}

impl SinkError {
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Receiver for session notifications.
///
/// Implementations must treat events as triggers only and never report back
/// into the game state.
pub trait EventSink: Send + Sync {
    /// Name used when logging a failure of this sink.
    fn name(&self) -> &str;

    /// React to an event.
    ///
    /// # Errors
    ///
    /// Implementations may fail (e.g. audio playback rejected by the
    /// platform); the dispatcher logs and ignores the error.
    fn handle(&self, event: &GameEvent) -> Result<(), SinkError>;
}

/// Forwards each event to every registered sink, in registration order.
#[derive(Clone, Default)]
pub struct EventDispatcher {
    sinks: Vec<Arc<dyn EventSink>>,
}

impl EventDispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    pub fn register(&mut self, sink: Arc<dyn EventSink>) {
        self.sinks.push(sink);
    }

    /// Dispatch an event to all sinks. Sink failures are logged at `warn`
    /// and otherwise ignored.
    pub fn dispatch(&self, event: &GameEvent) {
        tracing::debug!(?event, "dispatching game event");
        for sink in &self.sinks {
            if let Err(err) = sink.handle(event) {
                tracing::warn!(sink = sink.name(), %err, "event sink failed; continuing");
            }
        }
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("sinks", &self.sinks.len())
            .finish()
    }
}

/// Sink that traces events; stands in for playback adapters in headless
/// environments.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl EventSink for LogSink {
    fn name(&self) -> &str {
        "log"
    }

    fn handle(&self, event: &GameEvent) -> Result<(), SinkError> {
        match event {
            GameEvent::AnswerCorrect {
                points_awarded,
                streak,
                ..
            } => tracing::info!(points_awarded, streak, "correct answer"),
            GameEvent::AnswerIncorrect { option_id } => {
                tracing::info!(%option_id, "incorrect answer");
            }
            GameEvent::CourseCompleted { summary } => {
                tracing::info!(final_score = summary.final_score(), "course completed");
            }
        }
        Ok(())
    }
}

/// Sink that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn name(&self) -> &str {
        "null"
    }

    fn handle(&self, _event: &GameEvent) -> Result<(), SinkError> {
        Ok(())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
