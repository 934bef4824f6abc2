//! Process execution on the tokio runtime.

use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::execute::ProcessRunner;
use crate::execute::types::{ExitInfo, RunError};

/// [`ProcessRunner`] that spawns real child processes.
///
/// Children inherit the environment, stdout and stderr of the current
/// process. Stdin is closed. A child is killed if its future is dropped.
///
/// On unix each child leads its own process group. Cancellation kills the
/// whole group, so anything the package manager forked goes with it.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioRunner;

impl ProcessRunner for TokioRunner {
  async fn run(
    &self,
    program: &str,
    args: &[String],
    working_dir: &Path,
    cancel: watch::Receiver<bool>,
  ) -> Result<ExitInfo, RunError> {
    if *cancel.borrow() {
      return Err(RunError::Cancelled {
        program: program.to_string(),
      });
    }

    let mut command = Command::new(program);
    command
      .args(args)
      .current_dir(working_dir)
      .stdin(Stdio::null())
      .kill_on_drop(true);
    #[cfg(unix)]
    command.process_group(0);

    debug!(program = %program, args = ?args, working_dir = ?working_dir, "spawning process");

    let mut child = command.spawn().map_err(|source| RunError::Spawn {
      program: program.to_string(),
      source,
    })?;

    let outcome = tokio::select! {
      status = child.wait() => Some(status),
      _ = cancelled(cancel) => None,
    };

    match outcome {
      Some(status) => {
        let status = status.map_err(|source| RunError::Wait {
          program: program.to_string(),
          source,
        })?;
        debug!(program = %program, code = ?status.code(), "process exited");
        Ok(ExitInfo::from(status))
      }
      None => {
        warn!(program = %program, "cancellation requested, killing process");
        #[cfg(unix)]
        if let Some(pid) = child.id() {
          kill_group(pid);
        }
        child.kill().await.map_err(|source| RunError::Wait {
          program: program.to_string(),
          source,
        })?;
        Err(RunError::Cancelled {
          program: program.to_string(),
        })
      }
    }
  }
}

/// SIGKILL the process group led by `pid`.
#[cfg(unix)]
fn kill_group(pid: u32) {
  use rustix::process::{Pid, Signal, kill_process_group};

  let Some(pgid) = i32::try_from(pid).ok().and_then(Pid::from_raw) else {
    return;
  };
  if let Err(err) = kill_process_group(pgid, Signal::KILL) {
    debug!(pid, error = %err, "failed to signal process group");
  }
}

/// Resolves once the flag is `true`. Pends forever if the sender goes away first.
async fn cancelled(mut cancel: watch::Receiver<bool>) {
  if cancel.wait_for(|cancelled| *cancelled).await.is_err() {
    std::future::pending::<()>().await;
  }
}
