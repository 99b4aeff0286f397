//! Core domain concepts shared across all subdomains.
//!
//! - [`role::RoleId`] — identity of a debating participant
//! - [`topic::Topic`] — the debate topic, accepted verbatim from the caller
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod role;
pub mod topic;
