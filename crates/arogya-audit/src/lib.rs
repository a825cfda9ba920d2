//! arogya-audit
//!
//! Structured audit events for user-affecting actions.

pub mod events;

pub use events::AuditEvent;
