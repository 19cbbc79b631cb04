// In-memory session store with a single active-session pointer

use std::collections::HashMap;

use crate::sequencing::error::{SessionError, SessionResult};
use crate::sequencing::types::TestSession;

/// Volatile collection of test sessions keyed by id.
///
/// At most one session is active at a time; the pointer lives here rather
/// than on the sessions so two sessions can never both be marked active.
#[derive(Debug, Default, Clone)]
pub struct SessionRepository {
    sessions: HashMap<String, TestSession>,
    active_session_id: Option<String>,
}

impl SessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&TestSession> {
        self.sessions.get(id)
    }

    /// Every session, newest first
    pub fn list(&self) -> Vec<&TestSession> {
        let mut sessions: Vec<&TestSession> = self.sessions.values().collect();
        sessions.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        sessions
    }

    pub fn list_by_project(&self, project_id: &str) -> Vec<&TestSession> {
        self.list()
            .into_iter()
            .filter(|s| s.project_id.as_deref() == Some(project_id))
            .collect()
    }

    pub fn active_session_id(&self) -> Option<&str> {
        self.active_session_id.as_deref()
    }

    pub fn active(&self) -> Option<&TestSession> {
        self.active_session_id
            .as_deref()
            .and_then(|id| self.sessions.get(id))
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_session_id.as_deref() == Some(id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub(crate) fn insert(&mut self, session: TestSession) {
        self.sessions.insert(session.id.clone(), session);
    }

    /// Overwrite a stored session with its updated value
    pub(crate) fn replace(&mut self, session: TestSession) -> SessionResult<()> {
        match self.sessions.get_mut(&session.id) {
            Some(slot) => {
                *slot = session;
                Ok(())
            }
            None => Err(SessionError::SessionNotFound { id: session.id }),
        }
    }

    /// Remove a session, clearing the active pointer if it pointed at it
    pub(crate) fn remove(&mut self, id: &str) -> SessionResult<TestSession> {
        let removed = self
            .sessions
            .remove(id)
            .ok_or_else(|| SessionError::SessionNotFound { id: id.to_string() })?;
        if self.is_active(id) {
            self.active_session_id = None;
        }
        Ok(removed)
    }

    pub(crate) fn set_active(&mut self, id: &str) -> SessionResult<()> {
        if !self.sessions.contains_key(id) {
            return Err(SessionError::SessionNotFound { id: id.to_string() });
        }
        self.active_session_id = Some(id.to_string());
        Ok(())
    }

    pub(crate) fn clear_active(&mut self) {
        self.active_session_id = None;
    }
}
