//! Background worker for the asynchronous user directory fetch.
//!
//! This module implements the worker that performs the directory HTTP call
//! off the host's event loop, so the single-threaded core never blocks on
//! I/O. Communication is message-passing over channels.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types
//! - `handler`: Worker implementation and host-side handle

pub mod handler;
pub mod messages;

pub use handler::{parse_directory, DirectoryWorker, WorkerHandle};
pub use messages::{WorkerMessage, WorkerResponse};
