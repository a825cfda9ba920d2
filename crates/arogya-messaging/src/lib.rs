//! arogya-messaging
//!
//! SMS/WhatsApp subscription lifecycle and outbound sends. The transport is
//! behind [`sender::MessageSender`]; the in-tree [`sender::MockSender`]
//! fabricates provider ids so the rest of the pipeline (normalization,
//! persistence, logging) is exercised end to end without an SMS account.

pub mod error;
pub mod flows;
pub mod phone;
pub mod sender;
pub mod templates;
