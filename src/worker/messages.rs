//! Worker message types for cross-thread communication.
//!
//! This module defines the request and response protocol between the host's
//! event loop and the background worker that performs the user directory
//! fetch. Both sides are serde-serializable so hosts that relay messages
//! over an IPC boundary can do so without a second encoding.

use crate::domain::user::User;
use serde::{Deserialize, Serialize};

/// Messages sent from the host to the background worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Fetch the user directory from the given endpoint.
    ///
    /// Issued once per activation of the directory view. The worker answers
    /// with [`WorkerResponse::DirectoryLoaded`] or [`WorkerResponse::Error`];
    /// there is no timeout, retry, or cancellation.
    FetchDirectory {
        /// Endpoint URL returning the JSON list of user records.
        url: String,
    },
}

impl WorkerMessage {
    /// Creates a `FetchDirectory` message.
    #[must_use]
    pub fn fetch_directory(url: impl Into<String>) -> Self {
        Self::FetchDirectory { url: url.into() }
    }
}

/// Responses sent from the background worker back to the host.
///
/// Delivered to the application layer as `Event::WorkerResponse`, which
/// moves the directory state to `Ready` or `Failed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The directory was fetched and parsed successfully.
    DirectoryLoaded {
        /// The user records, in endpoint order.
        users: Vec<User>,
    },

    /// The fetch failed with a transport or parse error.
    Error {
        /// Human-readable error message, surfaced verbatim.
        message: String,
    },
}
