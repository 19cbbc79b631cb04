// Mock implementations for testing - deterministic ids, time and callbacks

use chrono::{DateTime, TimeZone, Utc};
use std::cell::{Cell, RefCell};

use crate::sequencing::traits::*;
use crate::sequencing::types::*;

/// Ids of the form `<prefix>-1`, `<prefix>-2`, ...
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: Cell<u64>,
}

impl SequentialIdGenerator {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            next: Cell::new(1),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        let n = self.next.get();
        self.next.set(n + 1);
        format!("{}-{}", self.prefix, n)
    }
}

/// Clock that advances one minute per reading so creation order is stable
#[derive(Debug)]
pub struct FixedClock {
    current: Cell<DateTime<Utc>>,
}

impl FixedClock {
    pub fn at(year: i32, month: u32, day: u32) -> Self {
        let start = Utc
            .with_ymd_and_hms(year, month, day, 9, 0, 0)
            .single()
            .unwrap_or_else(Utc::now);
        Self {
            current: Cell::new(start),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        let now = self.current.get();
        self.current.set(now + chrono::Duration::minutes(1));
        now
    }
}

/// Callback observed by the recording collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollaboratorCall {
    StartTest {
        session_id: String,
        floor_number: String,
        shaft_id: String,
        current_index: usize,
    },
    SessionComplete {
        session_id: String,
        completed_count: usize,
    },
}

/// Collaborator that records every callback it receives
#[derive(Debug, Default)]
pub struct RecordingCollaborator {
    pub calls: RefCell<Vec<CollaboratorCall>>,
}

impl RecordingCollaborator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_calls(&self) -> Vec<CollaboratorCall> {
        self.calls.borrow().clone()
    }

    pub fn start_test_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, CollaboratorCall::StartTest { .. }))
            .count()
    }

    pub fn session_complete_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, CollaboratorCall::SessionComplete { .. }))
            .count()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }
}

impl ExecutionCollaborator for RecordingCollaborator {
    fn on_start_test(&self, item: &SequenceItem, session: &TestSession) {
        self.calls.borrow_mut().push(CollaboratorCall::StartTest {
            session_id: session.id.clone(),
            floor_number: item.floor_number.clone(),
            shaft_id: item.shaft_id.clone(),
            current_index: session.current_index,
        });
    }

    fn on_session_complete(&self, session: &TestSession) {
        self.calls.borrow_mut().push(CollaboratorCall::SessionComplete {
            session_id: session.id.clone(),
            completed_count: session.completed_count,
        });
    }
}
