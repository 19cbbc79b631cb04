use anyhow::{anyhow, Result};
use serde::Serialize;

use crate::observability::SequencerStats;
use crate::sequencing::{
    generate_from_params, ControllerOptions, ExecutionCollaborator, NewSession, SequenceItem,
    SequenceParams, SessionController, TestSession,
};
use crate::telemetry::{create_session_span, generate_correlation_id};

/// Prints each test as it becomes current
#[derive(Debug, Default)]
pub struct ConsoleCollaborator;

impl ExecutionCollaborator for ConsoleCollaborator {
    fn on_start_test(&self, item: &SequenceItem, session: &TestSession) {
        println!(
            "▶️  [{}/{}] Floor {} · {} ({})",
            session.current_index + 1,
            session.total_count,
            item.floor_number,
            item.shaft_id,
            item.location
        );
    }

    fn on_session_complete(&self, session: &TestSession) {
        println!(
            "✅ {} complete: {}/{} dampers tested",
            session.name, session.completed_count, session.total_count
        );
    }
}

#[derive(Debug, Serialize)]
pub struct WalkReport {
    pub session: TestSession,
    pub metrics: SequencerStats,
}

pub struct WalkCommand {
    pub building: String,
    pub name: Option<String>,
    pub project: Option<String>,
    pub params: SequenceParams,
    pub skip: Vec<usize>,
    pub pause_at: Option<usize>,
    pub options: ControllerOptions,
    pub log_metrics: bool,
}

impl WalkCommand {
    pub fn new(building: String, params: SequenceParams) -> Self {
        Self {
            building,
            name: None,
            project: None,
            params,
            skip: Vec::new(),
            pause_at: None,
            options: ControllerOptions::default(),
            log_metrics: false,
        }
    }

    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    pub fn with_project(mut self, project: Option<String>) -> Self {
        self.project = project;
        self
    }

    pub fn with_skips(mut self, skip: Vec<usize>) -> Self {
        self.skip = skip;
        self
    }

    pub fn with_pause_at(mut self, pause_at: Option<usize>) -> Self {
        self.pause_at = pause_at;
        self
    }

    pub fn with_options(mut self, options: ControllerOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_metrics_log(mut self, log_metrics: bool) -> Self {
        self.log_metrics = log_metrics;
        self
    }

    pub fn execute(&self) -> Result<()> {
        let report = self.run(ConsoleCollaborator)?;
        println!();
        println!("{}", serde_json::to_string_pretty(&report)?);
        Ok(())
    }

    /// Walk a fresh session to completion, driving `collaborator` along the way
    pub fn run<C: ExecutionCollaborator>(&self, collaborator: C) -> Result<WalkReport> {
        let correlation_id = generate_correlation_id();
        let span = create_session_span("walk", None, Some(correlation_id.as_str()));
        let _guard = span.enter();

        let sequence = generate_from_params(&self.params)?;
        let mut controller = SessionController::new(collaborator).with_options(self.options);

        let mut request = NewSession::new(self.building.clone(), sequence);
        request.name = self.name.clone();
        request.project_id = self.project.clone();
        let session = controller.create_session(request)?;

        controller.start(&session.id)?;
        let mut paused_once = false;

        while let Some(active) = controller.active_session() {
            let index = active.current_index;
            let at_last = active.is_last_index();
            let test_id = active
                .current_item()
                .map(|item| format!("T-{}-{}", item.floor_number, item.shaft_id));

            if self.pause_at == Some(index) && !paused_once {
                paused_once = true;
                println!("⏸️  Pausing at item {}", index + 1);
                controller.pause()?;
                controller.start(&session.id)?;
                continue;
            }

            if self.skip.contains(&index) && !at_last {
                println!("⏭️  Skipping item {}", index + 1);
                controller.skip_current()?;
                continue;
            }

            controller.mark_current_complete(test_id)?;
        }

        if self.log_metrics {
            controller.metrics().log_stats();
        }

        let session = controller
            .session(&session.id)
            .cloned()
            .ok_or_else(|| anyhow!("session {} disappeared during walk", session.id))?;

        Ok(WalkReport {
            session,
            metrics: controller.metrics().snapshot(),
        })
    }
}
