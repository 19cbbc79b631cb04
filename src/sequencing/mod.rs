// Floor/damper test sequencing
//
// Generates the ordered inspection checklist for a building and walks an
// operator through it one damper at a time, with the host's test workflow
// injected through `ExecutionCollaborator`.

pub mod types;
pub mod error;
pub mod traits;
pub mod generator;
pub mod factory;
pub mod repository;
pub mod state_machine;
pub mod controller;

#[cfg(test)]
pub mod mocks;

pub use types::{
    NewSession, NoOpReason, OperationOutcome, SequenceItem, SequenceParams, SessionStatus,
    TestSession,
};
pub use error::{SessionError, SessionResult};
pub use traits::{Clock, ExecutionCollaborator, IdGenerator, NoopCollaborator, SystemClock, UuidIdGenerator};
pub use generator::{generate, generate_from_params};
pub use factory::SessionFactory;
pub use repository::SessionRepository;
pub use state_machine::{transition, Effect, SessionEvent, Transition, TransitionRecord};
pub use controller::{ControllerOptions, SessionController};
