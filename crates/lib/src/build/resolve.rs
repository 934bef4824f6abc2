//! Exec directory resolution.
//!
//! Exactly one resolution path is taken, selected by the strategy the
//! configuration was validated with.

use std::path::PathBuf;

use tracing::debug;

use crate::build::types::BuildError;
use crate::config::{Resolution, ValidatedConfig, ensure_directory};
use crate::platform::Environment;

/// Resolve the directory the package manager runs in.
///
/// - `explicit`: the configured directory, or the working directory
/// - `temp-scan`: the scratch directory, joined with the configured directory if any
/// - `working-dir`: the working directory, joined with the configured directory if any
///
/// The result is never empty and must be an existing directory.
pub fn resolve_exec_dir(config: &ValidatedConfig, env: &impl Environment) -> Result<PathBuf, BuildError> {
  let exec_dir = match &config.resolution {
    Resolution::Explicit { directory: Some(dir) } => dir.clone(),
    Resolution::Explicit { directory: None } => env.current_dir().map_err(BuildError::Environment)?,
    Resolution::TempScan { base, relative } => match relative {
      Some(relative) => base.join(relative),
      None => base.clone(),
    },
    Resolution::WorkingDir { relative } => {
      let cwd = env.current_dir().map_err(BuildError::Environment)?;
      match relative {
        Some(relative) => cwd.join(relative),
        None => cwd,
      }
    }
  };

  ensure_directory(env, &exec_dir)?;

  debug!(strategy = %config.strategy(), exec_dir = %exec_dir.display(), "resolved exec directory");
  Ok(exec_dir)
}
