//! arogya-chat
//!
//! Bedrock-backed health chatbot personas and conversation.

pub mod chat;
pub mod error;
pub mod persona;
