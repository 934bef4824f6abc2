//! Progress reporting for a running build.

use tracing::{error, info};

/// Outcome marker attached to a completed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
  Ok,
  Error,
}

/// Receives human-readable progress from a build.
pub trait StatusSink {
  /// Replace the current status line.
  fn update(&mut self, message: &str);

  /// Emit a completed step with a success or failure marker.
  fn step(&mut self, status: StepStatus, message: &str);
}

/// [`StatusSink`] that forwards everything to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingStatus;

impl StatusSink for TracingStatus {
  fn update(&mut self, message: &str) {
    info!(status = %message, "status");
  }

  fn step(&mut self, status: StepStatus, message: &str) {
    match status {
      StepStatus::Ok => info!(step = %message, "step succeeded"),
      StepStatus::Error => error!(step = %message, "step failed"),
    }
  }
}
