// Session factory - builds fresh sessions and independent duplicates

use crate::sequencing::error::{SessionError, SessionResult};
use crate::sequencing::traits::{Clock, IdGenerator, SystemClock, UuidIdGenerator};
use crate::sequencing::types::{NewSession, SessionStatus, TestSession};

const COPY_SUFFIX: &str = " (Copy)";

/// Creates sessions with injected identifier and time sources
pub struct SessionFactory {
    ids: Box<dyn IdGenerator>,
    clock: Box<dyn Clock>,
}

impl std::fmt::Debug for SessionFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionFactory").finish_non_exhaustive()
    }
}

impl Default for SessionFactory {
    fn default() -> Self {
        Self::new(Box::new(UuidIdGenerator), Box::new(SystemClock))
    }
}

impl SessionFactory {
    pub fn new(ids: Box<dyn IdGenerator>, clock: Box<dyn Clock>) -> Self {
        Self { ids, clock }
    }

    /// Create a pending session positioned on its first item
    pub fn create(&self, request: NewSession) -> SessionResult<TestSession> {
        let building = request.building.trim();
        if building.is_empty() {
            return Err(SessionError::MissingBuilding);
        }

        let created_at = self.clock.now();
        let name = match request.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("{} - {}", building, created_at.format("%Y-%m-%d")),
        };

        let total_count = request.sequence.len();
        Ok(TestSession {
            id: self.ids.next_id(),
            name,
            building: building.to_string(),
            project_id: request.project_id,
            status: SessionStatus::Pending,
            current_index: 0,
            sequence: request.sequence,
            total_count,
            completed_count: 0,
            created_at,
        })
    }

    /// Fresh pending copy of `original` with every item's progress cleared
    pub fn duplicate(&self, original: &TestSession) -> TestSession {
        TestSession {
            id: self.ids.next_id(),
            name: format!("{}{}", original.name, COPY_SUFFIX),
            building: original.building.clone(),
            project_id: original.project_id.clone(),
            status: SessionStatus::Pending,
            current_index: 0,
            sequence: original.sequence.iter().map(|item| item.reset()).collect(),
            total_count: original.total_count,
            completed_count: 0,
            created_at: self.clock.now(),
        }
    }
}
