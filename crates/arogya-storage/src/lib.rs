//! arogya-storage
//!
//! S3 persistence for predictions, chat logs, and subscriptions. Thin
//! wrapper around the AWS S3 SDK; every record is a standalone JSON object
//! and cross-record queries go through small `_state/` manifests.

pub mod chat_logs;
pub mod client;
pub mod error;
pub mod objects;
pub mod predictions;
pub mod state;
pub mod subscriptions;
