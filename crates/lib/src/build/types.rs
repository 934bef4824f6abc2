//! Types for build execution.

use std::fmt;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ConfigError;
use crate::consts::{BUILD_ARG, INSTALL_ARG};
use crate::execute::RunError;

/// Result of a successful build, handed to the next pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildArtifact {
  /// Directory containing the built output.
  pub location: PathBuf,
}

/// One of the two package-manager invocations of a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
  Install,
  Build,
}

impl Phase {
  /// Argument passed to the package manager for this phase.
  pub fn arg(&self) -> &'static str {
    match self {
      Phase::Install => INSTALL_ARG,
      Phase::Build => BUILD_ARG,
    }
  }

  pub(crate) fn failure_message(&self) -> &'static str {
    match self {
      Phase::Install => "Failed to install dependencies",
      Phase::Build => "Build failed",
    }
  }
}

impl fmt::Display for Phase {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.arg())
  }
}

/// Errors that can occur during a build.
#[derive(Debug, Error)]
pub enum BuildError {
  /// The exec directory could not be resolved or does not exist.
  #[error(transparent)]
  Config(#[from] ConfigError),

  /// The working directory could not be determined.
  #[error("failed to determine working directory: {0}")]
  Environment(#[source] io::Error),

  /// The package manager could not be started or awaited.
  #[error("{phase} could not run: {source}")]
  Spawn {
    phase: Phase,
    #[source]
    source: RunError,
  },

  /// The package manager exited unsuccessfully.
  #[error("{}: {command}", describe_exit(*code))]
  CommandFailed {
    phase: Phase,
    command: String,
    code: Option<i32>,
  },

  /// Cancellation was requested during a phase.
  #[error("{phase} was cancelled")]
  Cancelled { phase: Phase },
}

fn describe_exit(code: Option<i32>) -> String {
  match code {
    Some(code) => format!("command failed with exit code {code}"),
    None => "command terminated by signal".to_string(),
  }
}

impl BuildError {
  /// The phase that failed, if the error came from running a command.
  pub fn phase(&self) -> Option<Phase> {
    match self {
      BuildError::Spawn { phase, .. } | BuildError::CommandFailed { phase, .. } | BuildError::Cancelled { phase } => {
        Some(*phase)
      }
      BuildError::Config(_) | BuildError::Environment(_) => None,
    }
  }
}
