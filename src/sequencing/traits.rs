// Traits for dependency injection - the host's test workflow, ids and time

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::sequencing::types::{SequenceItem, TestSession};

/// Host-side workflow that runs the actual instrument tests
#[cfg_attr(test, mockall::automock)]
pub trait ExecutionCollaborator {
    /// Called whenever a new item becomes current (start, skip, advance)
    fn on_start_test(&self, item: &SequenceItem, session: &TestSession);

    /// Called once, when the last item's completion finishes the session
    fn on_session_complete(&self, session: &TestSession);
}

/// Source of fresh session identifiers
pub trait IdGenerator {
    fn next_id(&self) -> String;
}

/// Source of the current time
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Random v4 UUID identifiers
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Collaborator that ignores every callback
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCollaborator;

impl ExecutionCollaborator for NoopCollaborator {
    fn on_start_test(&self, _item: &SequenceItem, _session: &TestSession) {}

    fn on_session_complete(&self, _session: &TestSession) {}
}

impl<T: ExecutionCollaborator + ?Sized> ExecutionCollaborator for &T {
    fn on_start_test(&self, item: &SequenceItem, session: &TestSession) {
        (**self).on_start_test(item, session)
    }

    fn on_session_complete(&self, session: &TestSession) {
        (**self).on_session_complete(session)
    }
}

impl<T: IdGenerator + ?Sized> IdGenerator for Box<T> {
    fn next_id(&self) -> String {
        (**self).next_id()
    }
}

impl<T: Clock + ?Sized> Clock for Box<T> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
