//! Background worker implementation for the user directory fetch.
//!
//! This module implements the worker that performs the one asynchronous
//! operation in the system, fetching the remote user directory, off the
//! host's event loop. The worker runs on a dedicated thread and talks to
//! the host over a pair of channels carrying the typed message protocol
//! from [`messages`](super::messages).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────┐
//! │   Host event loop       │
//! │  ┌──────────────────┐   │
//! │  │   WorkerHandle   │   │  ← post(WorkerMessage)
//! │  └──────────────────┘   │  ← drain_responses()
//! │          │ channels     │
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │ DirectoryWorker  │   │  ← blocking HTTP GET + JSON parse
//! │  │ (worker thread)  │   │
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! The fetch applies no timeout and no retry; a failure is reported once
//! and the directory stays failed until the consumer re-activates it.

use crate::domain::error::{NurseryError, Result};
use crate::domain::user::User;
use crate::worker::{WorkerMessage, WorkerResponse};
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::thread;

/// Worker state for handling directory fetches.
///
/// Holds the HTTP client; processes messages sent from the host thread.
pub struct DirectoryWorker {
    client: reqwest::blocking::Client,
}

impl DirectoryWorker {
    /// Creates a worker with a fresh HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`NurseryError::Worker`] if the client cannot be built
    /// (TLS backend initialization failure).
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| NurseryError::Worker(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Processes a worker message and returns the appropriate response.
    ///
    /// Errors never escape this function; they are folded into
    /// [`WorkerResponse::Error`] with the message surfaced verbatim.
    pub fn handle_message(&self, message: &WorkerMessage) -> WorkerResponse {
        let span = tracing::debug_span!("worker_handle_message", message_type = ?message);
        let _guard = span.entered();

        match message {
            WorkerMessage::FetchDirectory { url } => match self.fetch_directory(url) {
                Ok(users) => {
                    tracing::debug!(user_count = users.len(), "directory loaded");
                    WorkerResponse::DirectoryLoaded { users }
                }
                Err(e) => {
                    tracing::debug!(error = %e, "directory fetch failed");
                    WorkerResponse::Error {
                        message: e.to_string(),
                    }
                }
            },
        }
    }

    /// Performs the blocking GET and parses the payload.
    ///
    /// Transport failures (connection, non-success status, body read) and
    /// parse failures are reported separately in the message text but share
    /// the [`NurseryError::DirectoryFetch`] variant.
    fn fetch_directory(&self, url: &str) -> Result<Vec<User>> {
        tracing::debug!(url = %url, "fetching user directory");

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| NurseryError::DirectoryFetch(e.to_string()))?
            .error_for_status()
            .map_err(|e| NurseryError::DirectoryFetch(e.to_string()))?;

        let body = response
            .text()
            .map_err(|e| NurseryError::DirectoryFetch(e.to_string()))?;

        parse_directory(&body)
    }
}

/// Parses a directory payload into user records.
///
/// # Errors
///
/// Returns [`NurseryError::DirectoryFetch`] if the payload is not a valid
/// JSON list of user records.
pub fn parse_directory(body: &str) -> Result<Vec<User>> {
    serde_json::from_str(body)
        .map_err(|e| NurseryError::DirectoryFetch(format!("invalid directory payload: {e}")))
}

/// Host-side handle to the worker thread.
///
/// Created by [`WorkerHandle::spawn`]. The host posts messages and drains
/// responses from its event loop; dropping the handle closes the request
/// channel, which shuts the worker thread down.
pub struct WorkerHandle {
    requests: Sender<WorkerMessage>,
    responses: Receiver<WorkerResponse>,
}

impl WorkerHandle {
    /// Spawns the worker thread and returns the host-side handle.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or the thread
    /// cannot be spawned.
    pub fn spawn() -> Result<Self> {
        let worker = DirectoryWorker::new()?;
        let (requests, request_rx) = unbounded::<WorkerMessage>();
        let (response_tx, responses) = unbounded();

        thread::Builder::new()
            .name("nursery-directory".to_string())
            .spawn(move || {
                for message in request_rx {
                    let response = worker.handle_message(&message);
                    if response_tx.send(response).is_err() {
                        // Host side is gone; nothing left to report to.
                        break;
                    }
                }
                tracing::debug!("directory worker shutting down");
            })?;

        Ok(Self {
            requests,
            responses,
        })
    }

    /// Posts a message to the worker thread.
    ///
    /// # Errors
    ///
    /// Returns [`NurseryError::Worker`] if the worker thread has exited.
    pub fn post(&self, message: WorkerMessage) -> Result<()> {
        self.requests
            .send(message)
            .map_err(|e| NurseryError::Worker(format!("worker thread is gone: {e}")))
    }

    /// Drains every response currently queued, without blocking.
    ///
    /// Hosts call this from their event loop and feed each response back in
    /// as an `Event::WorkerResponse`.
    #[must_use]
    pub fn drain_responses(&self) -> Vec<WorkerResponse> {
        self.responses.try_iter().collect()
    }
}
