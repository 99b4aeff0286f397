//! Application layer for agent-debate
//!
//! This crate contains the debate orchestration use case and the port
//! definitions for everything peripheral: topic input, structured event
//! logging, and diagram rendering. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    diagram::{DiagramError, DiagramRenderer, NoDiagramRenderer},
    event_sink::{DebateEvent, EventSink, NoEventSink},
    topic_source::{FixedTopic, TopicError, TopicSource},
};
pub use use_cases::run_debate::{
    DEFAULT_ROUNDS, DebateOutcome, RunDebateError, RunDebateInput, RunDebateUseCase,
};
