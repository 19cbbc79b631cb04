// Session state machine - pure transitions over a single session value
//
// Each event is applied to an immutable session snapshot and yields either the
// next snapshot plus the effects the controller must carry out, or a no-op.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::sequencing::error::{SessionError, SessionResult};
use crate::sequencing::types::{NoOpReason, SessionStatus, TestSession};

/// Operator actions that drive a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    Start,
    CompleteCurrent { test_id: Option<String> },
    SkipCurrent,
    Pause,
}

impl SessionEvent {
    pub fn name(&self) -> &'static str {
        match self {
            SessionEvent::Start => "start",
            SessionEvent::CompleteCurrent { .. } => "complete_current",
            SessionEvent::SkipCurrent => "skip_current",
            SessionEvent::Pause => "pause",
        }
    }
}

/// Side effects planned by a transition, carried out in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Point the repository's active pointer at this session
    Activate,
    /// Clear the repository's active pointer
    Deactivate,
    /// Announce the item at `index` to the execution collaborator
    StartTest { index: usize },
    /// Announce that the whole session finished
    SessionComplete,
}

/// Result of applying an event to a session
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    Applied {
        session: TestSession,
        effects: Vec<Effect>,
    },
    NoOp(NoOpReason),
}

/// Audit entry for an applied transition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    pub session_id: String,
    pub from: SessionStatus,
    pub to: SessionStatus,
    pub event: SessionEvent,
    pub index_before: usize,
    pub index_after: usize,
    pub timestamp: DateTime<Utc>,
}

/// Apply `event` to `session`, returning the next state without mutating the input
pub fn transition(session: &TestSession, event: &SessionEvent) -> SessionResult<Transition> {
    match (session.status, event) {
        (SessionStatus::Completed, SessionEvent::Start) => {
            Err(SessionError::SessionAlreadyCompleted {
                id: session.id.clone(),
            })
        }

        (_, SessionEvent::Start) => {
            if session.sequence.is_empty() {
                return Ok(Transition::NoOp(NoOpReason::EmptySequence));
            }
            let mut next = session.clone();
            next.status = SessionStatus::InProgress;
            Ok(Transition::Applied {
                effects: vec![
                    Effect::Activate,
                    Effect::StartTest {
                        index: next.current_index,
                    },
                ],
                session: next,
            })
        }

        (SessionStatus::InProgress, SessionEvent::CompleteCurrent { test_id }) => {
            let mut next = session.clone();
            let index = next.current_index;
            let Some(item) = next.sequence.get_mut(index) else {
                return Ok(Transition::NoOp(NoOpReason::EmptySequence));
            };
            item.completed = true;
            if let Some(test_id) = test_id {
                item.test_id = Some(test_id.clone());
            }
            next.completed_count = next.count_completed();

            if next.is_last_index() {
                next.status = SessionStatus::Completed;
                Ok(Transition::Applied {
                    session: next,
                    effects: vec![Effect::SessionComplete, Effect::Deactivate],
                })
            } else {
                next.current_index = index + 1;
                Ok(Transition::Applied {
                    effects: vec![Effect::StartTest {
                        index: next.current_index,
                    }],
                    session: next,
                })
            }
        }

        (SessionStatus::InProgress, SessionEvent::SkipCurrent) => {
            if session.is_last_index() {
                return Ok(Transition::NoOp(NoOpReason::AtLastItem));
            }
            let mut next = session.clone();
            next.current_index += 1;
            Ok(Transition::Applied {
                effects: vec![Effect::StartTest {
                    index: next.current_index,
                }],
                session: next,
            })
        }

        (SessionStatus::InProgress, SessionEvent::Pause) => {
            let mut next = session.clone();
            next.status = SessionStatus::Pending;
            Ok(Transition::Applied {
                session: next,
                effects: vec![Effect::Deactivate],
            })
        }

        (status, event) => Err(SessionError::InvalidTransition {
            status,
            event: event.clone(),
        }),
    }
}
