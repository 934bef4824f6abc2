//! Types for running external processes.

use std::io;
use std::process::ExitStatus;

use thiserror::Error;

/// How a finished process exited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitInfo {
  /// Exit code, or `None` when the process was terminated by a signal.
  pub code: Option<i32>,
}

impl ExitInfo {
  pub fn from_code(code: i32) -> Self {
    Self { code: Some(code) }
  }

  pub fn success(&self) -> bool {
    self.code == Some(0)
  }
}

impl From<ExitStatus> for ExitInfo {
  fn from(status: ExitStatus) -> Self {
    Self { code: status.code() }
  }
}

/// Errors that prevent a process from running to completion.
#[derive(Debug, Error)]
pub enum RunError {
  /// The program could not be started.
  #[error("failed to spawn {program}: {source}")]
  Spawn {
    program: String,
    #[source]
    source: io::Error,
  },

  /// Waiting on or killing the child failed.
  #[error("failed to wait for {program}: {source}")]
  Wait {
    program: String,
    #[source]
    source: io::Error,
  },

  /// Cancellation was requested before or while the process ran.
  #[error("{program} was cancelled")]
  Cancelled { program: String },
}
