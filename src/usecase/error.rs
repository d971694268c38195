//! UseCase error types.

use thiserror::Error;

use crate::domain::{MessagePushError, StoreError};

/// Failure while routing a chat or private message.
///
/// A `Store` failure means the message was never persisted and therefore
/// never delivered (durability-before-delivery).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendMessageError {
    #[error("failed to persist message: {0}")]
    Store(#[from] StoreError),
    #[error("failed to deliver message: {0}")]
    Push(#[from] MessagePushError),
}
