use thiserror::Error;

use crate::sequencing::state_machine::SessionEvent;
use crate::sequencing::types::SessionStatus;

/// Errors surfaced by the sequencing engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("A building is required to create a test session")]
    MissingBuilding,
    #[error("Invalid sequence parameter {field}: {value} (must be at least 1)")]
    InvalidSequence { field: &'static str, value: i64 },
    #[error("Floor range starting at {start_floor} with {floor_count} floors exceeds the supported range")]
    FloorRangeOverflow { start_floor: i32, floor_count: u32 },
    #[error("No test session is currently active")]
    NoActiveSession,
    #[error("Test session not found: {id}")]
    SessionNotFound { id: String },
    #[error("Test session {id} is already completed")]
    SessionAlreadyCompleted { id: String },
    #[error("Invalid transition: {event:?} not allowed while {status}")]
    InvalidTransition {
        status: SessionStatus,
        event: SessionEvent,
    },
}

pub type SessionResult<T> = Result<T, SessionError>;
