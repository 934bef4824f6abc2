//! Build orchestration.
//!
//! Runs `<package manager> install` and then `<package manager> build` in the
//! resolved exec directory and produces the final BuildArtifact.

use std::path::Path;

use tokio::sync::watch;
use tracing::{info, warn};

use crate::build::resolve::resolve_exec_dir;
use crate::build::types::{BuildArtifact, BuildError, Phase};
use crate::config::ValidatedConfig;
use crate::execute::{ProcessRunner, RunError};
use crate::platform::Environment;
use crate::status::{StatusSink, StepStatus};

/// Runs builds for one validated configuration.
#[derive(Debug, Clone)]
pub struct Builder {
  config: ValidatedConfig,
}

impl Builder {
  pub fn new(config: ValidatedConfig) -> Self {
    Self { config }
  }

  /// Run a build.
  ///
  /// # Arguments
  ///
  /// * `cancel` - Set to `true` to kill the running phase and abort
  /// * `status` - Receives a status line before each phase and a step after it
  /// * `env` - Source of the working directory
  /// * `runner` - Spawns the package manager
  ///
  /// # Returns
  ///
  /// The artifact whose location is the exec directory joined with the
  /// output directory. The first failing phase aborts the build.
  pub async fn build(
    &self,
    cancel: &watch::Receiver<bool>,
    status: &mut impl StatusSink,
    env: &impl Environment,
    runner: &impl ProcessRunner,
  ) -> Result<BuildArtifact, BuildError> {
    let exec_dir = resolve_exec_dir(&self.config, env)?;

    info!(
      exec_dir = %exec_dir.display(),
      package_manager = %self.config.package_manager(),
      "starting build"
    );

    status.update("Installing dependencies");
    self.run_phase(Phase::Install, &exec_dir, cancel, status, runner).await?;
    status.step(StepStatus::Ok, "Dependencies installed");

    status.update("Building application");
    self.run_phase(Phase::Build, &exec_dir, cancel, status, runner).await?;
    status.step(StepStatus::Ok, "Static files built successfully");

    let location = exec_dir.join(self.config.output());
    info!(location = %location.display(), "build complete");

    Ok(BuildArtifact { location })
  }

  async fn run_phase(
    &self,
    phase: Phase,
    exec_dir: &Path,
    cancel: &watch::Receiver<bool>,
    status: &mut impl StatusSink,
    runner: &impl ProcessRunner,
  ) -> Result<(), BuildError> {
    let program = self.config.package_manager();
    let command = format!("{} {}", program, phase.arg());

    let result = if *cancel.borrow() {
      Err(RunError::Cancelled {
        program: program.to_string(),
      })
    } else {
      info!(phase = %phase, command = %command, "running command");
      runner
        .run(program, &[phase.arg().to_string()], exec_dir, cancel.clone())
        .await
    };

    let error = match result {
      Ok(exit) if exit.success() => return Ok(()),
      Ok(exit) => BuildError::CommandFailed {
        phase,
        command,
        code: exit.code,
      },
      Err(RunError::Cancelled { .. }) => BuildError::Cancelled { phase },
      Err(source) => BuildError::Spawn { phase, source },
    };

    warn!(phase = %phase, error = %error, "phase failed");
    status.step(StepStatus::Error, phase.failure_message());
    Err(error)
  }
}
