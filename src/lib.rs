// Damper Sequencer Library - floor-by-floor damper inspection runs
// This exposes the core components for testing and integration

pub mod sequencing;
pub mod observability;
pub mod telemetry;
pub mod config;
pub mod cli;

// Re-export key types for easy access
pub use sequencing::{
    generate, ControllerOptions, ExecutionCollaborator, NewSession, OperationOutcome,
    SequenceItem, SequenceParams, SessionController, SessionError, SessionRepository,
    SessionStatus, TestSession,
};
pub use observability::{SequencerMetrics, SequencerStats, OperationTimer};
pub use telemetry::{init_telemetry, generate_correlation_id, create_session_span};
pub use config::{SequencerConfig, config};
