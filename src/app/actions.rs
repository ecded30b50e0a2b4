//! Actions representing side effects to be executed by the host.
//!
//! This module defines the [`Action`] type, the imperative commands produced
//! by the event handler after processing an event. Actions are the boundary
//! between pure state transitions and effectful operations: the handler
//! never performs I/O itself, it only asks the host to.
//!
//! The event handler returns a `Vec<Action>` after each event, allowing
//! multiple side effects to be queued atomically; the host executes them in
//! sequence.

use crate::worker::WorkerMessage;

/// Commands representing side effects to be executed by the host.
///
/// The core's only side effect category is worker communication, i.e. the
/// directory fetch. Everything else (rendering from the view model,
/// routing) belongs to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Posts a message to the background worker.
    ///
    /// Emitted when the directory view is activated and a fetch must start.
    PostToWorker(WorkerMessage),
}
