// Session lifecycle controller - drives the active session and notifies the host

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::observability::SequencerMetrics;
use crate::sequencing::error::{SessionError, SessionResult};
use crate::sequencing::factory::SessionFactory;
use crate::sequencing::repository::SessionRepository;
use crate::sequencing::state_machine::{
    transition, Effect, SessionEvent, Transition, TransitionRecord,
};
use crate::sequencing::traits::ExecutionCollaborator;
use crate::sequencing::types::{
    NewSession, NoOpReason, OperationOutcome, SessionStatus, TestSession,
};
use crate::time_operation;

/// Behaviour switches for the controller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControllerOptions {
    /// Report complete/skip/pause without an active session as an error
    /// instead of a no-op
    pub strict_active_session: bool,
}

/// Owns the session store and walks one session at a time.
///
/// Every operation runs to completion before returning, so a collaborator
/// callback always sees the session in its settled state.
pub struct SessionController<C: ExecutionCollaborator> {
    repository: SessionRepository,
    factory: SessionFactory,
    collaborator: C,
    options: ControllerOptions,
    metrics: SequencerMetrics,
    history: Vec<TransitionRecord>,
}

impl<C: ExecutionCollaborator> SessionController<C> {
    pub fn new(collaborator: C) -> Self {
        Self::with_factory(collaborator, SessionFactory::default())
    }

    pub fn with_factory(collaborator: C, factory: SessionFactory) -> Self {
        Self {
            repository: SessionRepository::new(),
            factory,
            collaborator,
            options: ControllerOptions::default(),
            metrics: SequencerMetrics::new(),
            history: Vec::new(),
        }
    }

    pub fn with_options(mut self, options: ControllerOptions) -> Self {
        self.options = options;
        self
    }

    pub fn repository(&self) -> &SessionRepository {
        &self.repository
    }

    pub fn collaborator(&self) -> &C {
        &self.collaborator
    }

    pub fn metrics(&self) -> &SequencerMetrics {
        &self.metrics
    }

    pub fn history(&self) -> &[TransitionRecord] {
        &self.history
    }

    pub fn session(&self, id: &str) -> Option<&TestSession> {
        self.repository.get(id)
    }

    pub fn active_session(&self) -> Option<&TestSession> {
        self.repository.active()
    }

    /// Create and store a new pending session
    pub fn create_session(&mut self, request: NewSession) -> SessionResult<TestSession> {
        let session = self.factory.create(request).inspect_err(|e| {
            warn!(error = %e, "Rejected test session creation");
        })?;

        info!(
            session_id = %session.id,
            building = %session.building,
            total_count = session.total_count,
            "Created test session"
        );
        self.metrics.record_created();
        self.repository.insert(session.clone());
        Ok(session)
    }

    /// Make `id` the active session and announce its current item.
    ///
    /// Any other active session is paused first, but only when this start
    /// actually applies.
    pub fn start(&mut self, id: &str) -> SessionResult<OperationOutcome> {
        time_operation!("start");
        let session = self.lookup(id)?.clone();
        let planned = transition(&session, &SessionEvent::Start);

        if let (Ok(Transition::Applied { .. }), Some(active_id)) =
            (&planned, self.repository.active_session_id())
        {
            if active_id != id {
                let active_id = active_id.to_string();
                info!(
                    previous = %active_id,
                    next = %id,
                    "Pausing active session before starting another"
                );
                self.apply_to(&active_id, SessionEvent::Pause)?;
            }
        }

        let outcome = self.commit(&session, SessionEvent::Start, planned)?;
        if !outcome.is_noop() {
            self.metrics.record_started();
        }
        Ok(outcome)
    }

    /// Mark the active session's current item complete and move on
    pub fn mark_current_complete(
        &mut self,
        test_id: Option<String>,
    ) -> SessionResult<OperationOutcome> {
        time_operation!("complete_current");
        let Some(session) = self.active_or_noop()? else {
            return Ok(OperationOutcome::NoOp(NoOpReason::NoActiveSession));
        };
        let outcome = self.apply(&session, SessionEvent::CompleteCurrent { test_id })?;
        if !outcome.is_noop() {
            self.metrics.record_item_completed();
        }
        Ok(outcome)
    }

    /// Move past the active session's current item without completing it
    pub fn skip_current(&mut self) -> SessionResult<OperationOutcome> {
        time_operation!("skip_current");
        let Some(session) = self.active_or_noop()? else {
            return Ok(OperationOutcome::NoOp(NoOpReason::NoActiveSession));
        };
        let outcome = self.apply(&session, SessionEvent::SkipCurrent)?;
        if !outcome.is_noop() {
            self.metrics.record_item_skipped();
        }
        Ok(outcome)
    }

    /// Stop walking the active session, keeping its position
    pub fn pause(&mut self) -> SessionResult<OperationOutcome> {
        time_operation!("pause");
        let Some(session) = self.active_or_noop()? else {
            return Ok(OperationOutcome::NoOp(NoOpReason::NoActiveSession));
        };
        self.apply(&session, SessionEvent::Pause)
    }

    /// Store a fresh pending copy of `id`; the original is untouched
    pub fn duplicate(&mut self, id: &str) -> SessionResult<TestSession> {
        let copy = self.factory.duplicate(self.lookup(id)?);
        info!(
            source_id = %id,
            session_id = %copy.id,
            "Duplicated test session"
        );
        self.metrics.record_duplicated();
        self.repository.insert(copy.clone());
        Ok(copy)
    }

    /// Remove `id`; clears the active pointer without firing completion
    pub fn delete(&mut self, id: &str) -> SessionResult<TestSession> {
        let was_active = self.repository.is_active(id);
        let removed = self.repository.remove(id)?;
        info!(session_id = %id, was_active, "Deleted test session");
        self.metrics.record_deleted();
        Ok(removed)
    }

    fn lookup(&self, id: &str) -> SessionResult<&TestSession> {
        self.repository
            .get(id)
            .ok_or_else(|| SessionError::SessionNotFound { id: id.to_string() })
    }

    fn active_or_noop(&self) -> SessionResult<Option<TestSession>> {
        match self.repository.active() {
            Some(session) => Ok(Some(session.clone())),
            None if self.options.strict_active_session => {
                warn!("Operation requires an active session");
                Err(SessionError::NoActiveSession)
            }
            None => {
                debug!("No active session; ignoring operation");
                self.metrics.record_noop();
                Ok(None)
            }
        }
    }

    fn apply_to(&mut self, id: &str, event: SessionEvent) -> SessionResult<OperationOutcome> {
        let session = self.lookup(id)?.clone();
        self.apply(&session, event)
    }

    fn apply(&mut self, session: &TestSession, event: SessionEvent) -> SessionResult<OperationOutcome> {
        let planned = transition(session, &event);
        self.commit(session, event, planned)
    }

    /// Store the planned snapshot, then carry out its effects
    fn commit(
        &mut self,
        session: &TestSession,
        event: SessionEvent,
        planned: SessionResult<Transition>,
    ) -> SessionResult<OperationOutcome> {
        let (next, effects) = match planned {
            Ok(Transition::Applied { session, effects }) => (session, effects),
            Ok(Transition::NoOp(reason)) => {
                debug!(
                    session_id = %session.id,
                    event = event.name(),
                    reason = ?reason,
                    "Operation left session unchanged"
                );
                self.metrics.record_noop();
                return Ok(OperationOutcome::NoOp(reason));
            }
            Err(e) => {
                warn!(session_id = %session.id, event = event.name(), error = %e, "Transition rejected");
                return Err(e);
            }
        };

        self.record_transition(session, &next, event);
        self.repository.replace(next.clone())?;

        for effect in effects {
            match effect {
                Effect::Activate => self.repository.set_active(&next.id)?,
                Effect::Deactivate => {
                    if self.repository.is_active(&next.id) {
                        self.repository.clear_active();
                    }
                }
                Effect::StartTest { index } => {
                    if let Some(item) = next.sequence.get(index) {
                        debug!(
                            session_id = %next.id,
                            index,
                            floor = %item.floor_number,
                            shaft_id = %item.shaft_id,
                            "Starting test for sequence item"
                        );
                        self.collaborator.on_start_test(item, &next);
                    }
                }
                Effect::SessionComplete => {
                    self.metrics.record_session_completed();
                    info!(
                        session_id = %next.id,
                        completed_count = next.completed_count,
                        total_count = next.total_count,
                        "Test session completed"
                    );
                    self.collaborator.on_session_complete(&next);
                }
            }
        }

        Ok(OperationOutcome::Applied(next))
    }

    fn record_transition(&mut self, from: &TestSession, to: &TestSession, event: SessionEvent) {
        let record = TransitionRecord {
            session_id: to.id.clone(),
            from: from.status,
            to: to.status,
            event,
            index_before: from.current_index,
            index_after: to.current_index,
            timestamp: Utc::now(),
        };

        info!(
            session_id = %record.session_id,
            from_status = %record.from,
            to_status = %record.to,
            event = record.event.name(),
            index_before = record.index_before,
            index_after = record.index_after,
            completed_count = to.completed_count,
            "Session state transition"
        );

        if record.from == SessionStatus::InProgress && record.to == SessionStatus::Pending {
            self.metrics.record_paused();
        }
        self.history.push(record);
    }
}
