//! Structured logging for the dashboard core.
//!
//! State transitions, filter recomputations, and worker operations are
//! instrumented with `tracing` spans and events. This module wires them to
//! a `tracing-subscriber` pipeline with env-filter level control.
//!
//! # Usage
//!
//! Initialize early in the host lifecycle:
//!
//! ```rust
//! use nursery::observability::init_tracing;
//! use nursery::Config;
//!
//! let config = Config::default();
//! init_tracing(&config);
//!
//! tracing::debug!("core initialized");
//! ```

mod init;

pub use init::init_tracing;
