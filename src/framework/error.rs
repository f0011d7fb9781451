//! # Framework Errors
//!
//! Errors produced by the store engine itself, independent of any particular state type.

/// Errors that can occur within the store framework.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Store closed")]
    ActorClosed,
    #[error("Store dropped response channel")]
    ActorDropped,
    #[error("Command rejected: {0}")]
    Rejected(Box<dyn std::error::Error + Send + Sync>),
}
