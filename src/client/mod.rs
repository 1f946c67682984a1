//! Client side of the retry protocol: a durable queue of submissions not yet
//! accepted by the server, and the manager that drains it.

pub mod manager;
pub mod queue;
pub mod transport;

pub use manager::{DrainStats, QueueManager, SubmitOutcome};
pub use queue::{PendingQueue, QueueError};
pub use transport::{HttpTransport, Transport, TransportError};

use crate::validate::ValidationError;

#[derive(Debug)]
pub enum ClientError {
    /// Terminal: the submission fails the same checks the server applies.
    /// Retrying cannot help, so it is never queued.
    Invalid(ValidationError),
    /// The durable queue file could not be read or written.
    Queue(QueueError),
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::Invalid(err) => write!(f, "Invalid submission: {err}"),
            ClientError::Queue(err) => write!(f, "Queue error: {err}"),
        }
    }
}

impl From<ValidationError> for ClientError {
    fn from(err: ValidationError) -> Self {
        ClientError::Invalid(err)
    }
}

impl From<QueueError> for ClientError {
    fn from(err: QueueError) -> Self {
        ClientError::Queue(err)
    }
}
