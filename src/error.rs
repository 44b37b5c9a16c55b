//! Typed errors for queue operations.

use std::collections::TryReserveError;

/// Failure surfaced to the immediate caller of a queue operation.
///
/// A failing operation leaves the queue in its prior valid state.
#[derive(Debug, thiserror::Error)]
pub enum QueueError {
    #[error("failed to reserve storage for element value: {0}")]
    ValueAlloc(#[from] TryReserveError),
}
