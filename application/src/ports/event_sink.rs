//! Port for structured event logging.
//!
//! The debate loop emits a typed event for every observable state change:
//! topic collection, memory reads and appends, spoken lines, the verdict.
//! The sink only records; it never influences control flow and is never
//! queried by the core.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures the debate
//! itself in a machine-readable format (JSONL in the default adapter).

use debate_domain::{RoleId, Topic, TranscriptEntry, Verdict};
use serde::Serialize;
use std::path::PathBuf;

/// A structured debate event.
///
/// Tagged serialization keeps every payload typed; there is no dynamic
/// JSON value anywhere in the event stream.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum DebateEvent {
    /// The external topic source produced a topic (possibly empty)
    TopicCollected { topic: Topic },
    /// A contextual view was derived for a speaker
    MemoryView {
        role: RoleId,
        own_history_count: usize,
        recent_summary: String,
    },
    /// A debater spoke a line
    Message { role: RoleId, text: String },
    /// A debater's cumulative spoken log after a round
    SpokenRounds { role: RoleId, rounds: Vec<String> },
    /// An entry became part of the shared transcript
    MemoryAppend { entry: TranscriptEntry },
    /// The judge delivered its verdict
    JudgeResult { verdict: Verdict },
    /// The topology diagram was written
    DiagramRendered { path: PathBuf },
}

/// Port for recording debate events.
///
/// The `record` method is intentionally synchronous and non-fallible:
/// logging failures must never disrupt the debate, so adapters swallow
/// their own errors.
pub trait EventSink: Send + Sync {
    /// Record a debate event.
    fn record(&self, event: DebateEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoEventSink;

impl EventSink for NoEventSink {
    fn record(&self, _event: DebateEvent) {}
}
