//! External process execution.
//!
//! The build never spawns processes directly; it goes through a
//! [`ProcessRunner`]. [`TokioRunner`] is the real implementation.

mod process;
mod types;

use std::path::Path;

use tokio::sync::watch;

pub use process::TokioRunner;
pub use types::{ExitInfo, RunError};

/// Runs a program to completion and reports how it exited.
pub trait ProcessRunner {
  /// Run `program` with `args` in `working_dir`, waiting for it to exit.
  ///
  /// When `cancel` becomes `true` the process is terminated and
  /// [`RunError::Cancelled`] is returned. Output is not captured.
  fn run(
    &self,
    program: &str,
    args: &[String],
    working_dir: &Path,
    cancel: watch::Receiver<bool>,
  ) -> impl Future<Output = Result<ExitInfo, RunError>> + Send;
}
