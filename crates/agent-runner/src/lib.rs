//! Local execution and fault classification for a managed workflow agent.
//!
//! This crate is the piece of the agent that actually touches the host: it
//! runs external commands synchronously on behalf of a remote workflow
//! engine, captures their output and exit codes, and translates failures
//! into a typed taxonomy that tells the engine whether an operation is safe
//! to retry and after what delay.
//!
//! The two halves are:
//!
//! - [`CommandRunner`] — spawns one child process per call, merges
//!   caller-supplied environment overrides onto the ambient environment, and
//!   either returns an [`ExecutionResult`] or fails with a typed error.
//! - [`Error`] — the closed set of failure kinds carried back to the engine.
//!   Classification is data, not behavior: [`Error::retry_advice`] reports
//!   the retry decision, and scheduling stays with the remote engine.

pub mod command;
pub mod env;
pub mod error;
pub mod logging;
pub mod runner;
pub mod shellwords;
pub mod util;

pub use command::{ExecutionResult, RunOptions};
pub use error::{Error, Result, RetryAdvice};
pub use runner::CommandRunner;
