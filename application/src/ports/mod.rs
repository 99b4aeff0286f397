//! Ports: narrow interfaces to peripheral collaborators.
//!
//! The debate core never performs I/O directly. Everything it needs from
//! the outside world comes through these traits, implemented in the
//! infrastructure layer and injected by the binary.

pub mod diagram;
pub mod event_sink;
pub mod topic_source;
