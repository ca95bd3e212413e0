//! Orchestrates the drag gesture into session transitions.
//!
//! The presentation layer reports gestures here; this service measures the
//! live drop target, classifies the release point, drives the session's
//! operations, and dispatches whatever events they emit.

use std::sync::Arc;

use quest_core::Clock;
use quest_core::geometry::{DropZoneResolver, Point, Rect};
use quest_core::model::{GameSettings, OptionId, QuestionBank};
use quest_core::session::{GameEvent, GameSession};

use crate::error::GameServiceError;
use crate::events::EventDispatcher;

/// Capability to measure the drop zone's current on-screen rectangle.
///
/// Measured at evaluation time, once per release, because the target moves
/// with layout; callers must not cache the result.
pub trait DropTarget: Send + Sync {
    fn bounds(&self) -> Rect;
}

/// Outcome of a single drag release.
#[derive(Debug, Clone, PartialEq)]
pub struct DropReport {
    /// Whether the release landed within the buffered target.
    pub accepted: bool,
    /// The session event produced, if the drop was accepted and the
    /// question was still open.
    pub event: Option<GameEvent>,
}

/// Orchestrates session start and gesture handling.
#[derive(Clone)]
pub struct GameLoopService {
    clock: Clock,
    settings: GameSettings,
    resolver: DropZoneResolver,
    target: Arc<dyn DropTarget>,
    dispatcher: EventDispatcher,
}

impl GameLoopService {
    #[must_use]
    pub fn new(
        clock: Clock,
        settings: GameSettings,
        target: Arc<dyn DropTarget>,
        dispatcher: EventDispatcher,
    ) -> Self {
        let resolver = DropZoneResolver::from_settings(&settings);
        Self {
            clock,
            settings,
            resolver,
            target,
            dispatcher,
        }
    }

    /// Start a new session over the given course, timed by the service
    /// clock.
    #[must_use]
    pub fn start_session(&self, bank: QuestionBank) -> GameSession {
        GameSession::new(bank, self.settings.clone(), self.clock.now())
    }

    /// A card began being dragged. Advisory; drives UI affordances only.
    pub fn handle_drag_start(&self, session: &mut GameSession) {
        session.start_drag();
    }

    /// The drag of `option_id` ended at `point`.
    ///
    /// The drop target is re-measured, the release classified against it
    /// with the configured tolerance buffer, and an accepted drop is scored
    /// through the session. A release outside the buffered target changes
    /// nothing. Emitted events are dispatched before returning.
    ///
    /// # Errors
    ///
    /// Propagates `SessionError` for contract violations such as an option
    /// id foreign to the current question.
    pub fn handle_drop(
        &self,
        session: &mut GameSession,
        option_id: &OptionId,
        point: Point,
    ) -> Result<DropReport, GameServiceError> {
        session.end_drag();

        let target = self.target.bounds();
        if !self.resolver.is_within_target(point, target) {
            tracing::debug!(%option_id, ?point, "drop outside buffered target");
            return Ok(DropReport {
                accepted: false,
                event: None,
            });
        }

        let event = session.validate_answer(option_id)?;
        if let Some(event) = &event {
            self.dispatcher.dispatch(event);
        }

        Ok(DropReport {
            accepted: true,
            event,
        })
    }

    /// Take the "next" action, dispatching the completion event when the
    /// course wraps up.
    ///
    /// # Errors
    ///
    /// Propagates `SessionError` from the session's advance.
    pub fn advance(
        &self,
        session: &mut GameSession,
    ) -> Result<Option<GameEvent>, GameServiceError> {
        let event = session.advance(self.clock.now())?;
        if let Some(event) = &event {
            self.dispatcher.dispatch(event);
        }
        Ok(event)
    }

    /// Dismiss the wrong-answer notice.
    pub fn dismiss_error(&self, session: &mut GameSession) {
        session.close_error_modal();
    }
}

impl std::fmt::Debug for GameLoopService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameLoopService")
            .field("clock", &self.clock)
            .field("settings", &self.settings)
            .field("resolver", &self.resolver)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
