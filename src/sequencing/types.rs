// Core types for floor/damper test sequencing

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One damper inspection point within a session's ordered checklist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceItem {
    /// Zero-padded floor label ("00", "01", "-1")
    pub floor_number: String,
    /// Human label for the inspection point
    pub location: String,
    /// Shaft identifier, suffixed `-<n>` when a floor has several dampers
    pub shaft_id: String,
    #[serde(default)]
    pub completed: bool,
    /// Test record associated with this item once it has been run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,
}

impl SequenceItem {
    pub fn new(floor_number: String, location: String, shaft_id: String) -> Self {
        Self {
            floor_number,
            location,
            shaft_id,
            completed: false,
            test_id: None,
        }
    }

    /// Copy of this item with completion state cleared
    pub fn reset(&self) -> Self {
        Self::new(
            self.floor_number.clone(),
            self.location.clone(),
            self.shaft_id.clone(),
        )
    }
}

/// Session lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Pending,
    InProgress,
    Completed,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Pending => "pending",
            SessionStatus::InProgress => "in_progress",
            SessionStatus::Completed => "completed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionStatus::Completed)
    }
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One planned, ordered run of damper inspections for a building
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestSession {
    pub id: String,
    pub name: String,
    pub building: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    pub status: SessionStatus,
    pub current_index: usize,
    pub sequence: Vec<SequenceItem>,
    pub total_count: usize,
    pub completed_count: usize,
    pub created_at: DateTime<Utc>,
}

impl TestSession {
    /// Item the operator is currently on, if the sequence is non-empty
    pub fn current_item(&self) -> Option<&SequenceItem> {
        self.sequence.get(self.current_index)
    }

    pub fn is_last_index(&self) -> bool {
        self.current_index + 1 >= self.sequence.len()
    }

    pub fn remaining_count(&self) -> usize {
        self.total_count.saturating_sub(self.completed_count)
    }

    /// Items already passed over without being completed
    pub fn skipped_items(&self) -> Vec<&SequenceItem> {
        self.sequence
            .iter()
            .take(self.current_index)
            .filter(|item| !item.completed)
            .collect()
    }

    /// Whole-number completion percentage; 0 for an empty sequence
    pub fn progress_percent(&self) -> u8 {
        if self.total_count == 0 {
            return 0;
        }
        ((self.completed_count * 100) / self.total_count) as u8
    }

    pub fn is_active_status(&self) -> bool {
        matches!(self.status, SessionStatus::InProgress)
    }

    /// Count of items flagged complete, derived from the sequence itself
    pub fn count_completed(&self) -> usize {
        self.sequence.iter().filter(|item| item.completed).count()
    }
}

/// Parameters for expanding a building into an ordered checklist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceParams {
    pub start_floor: i32,
    pub floor_count: u32,
    pub dampers_per_floor: u32,
    pub location: String,
    pub shaft_id_prefix: String,
}

/// Request to create a session
#[derive(Debug, Clone, Default)]
pub struct NewSession {
    pub name: Option<String>,
    pub building: String,
    pub project_id: Option<String>,
    pub sequence: Vec<SequenceItem>,
}

impl NewSession {
    pub fn new(building: impl Into<String>, sequence: Vec<SequenceItem>) -> Self {
        Self {
            building: building.into(),
            sequence,
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_project(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }
}

/// Why an operation left everything unchanged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoOpReason {
    /// `start` on a session with no items
    EmptySequence,
    /// `skip` while already on the last item
    AtLastItem,
    /// complete/skip/pause with nothing active
    NoActiveSession,
}

/// Result of a lifecycle operation
#[derive(Debug, Clone, PartialEq)]
pub enum OperationOutcome {
    /// A transition was applied; carries the updated session
    Applied(TestSession),
    NoOp(NoOpReason),
}

impl OperationOutcome {
    pub fn session(&self) -> Option<&TestSession> {
        match self {
            OperationOutcome::Applied(session) => Some(session),
            OperationOutcome::NoOp(_) => None,
        }
    }

    pub fn is_noop(&self) -> bool {
        matches!(self, OperationOutcome::NoOp(_))
    }
}
