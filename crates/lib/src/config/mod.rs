//! Build configuration loading and validation.

mod types;

use std::path::{Component, Path, PathBuf};

use tracing::{debug, info};

use crate::consts::{DEFAULT_OUTPUT_DIR, DEFAULT_PACKAGE_MANAGER, DEFAULT_SCRATCH_MARKER};
use crate::platform::Environment;

pub use types::{BuildConfig, ConfigError, ResolutionStrategy, ValidatedConfig};
pub(crate) use types::Resolution;

impl BuildConfig {
  /// Parse a config from TOML source.
  pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
    Ok(toml::from_str(source)?)
  }

  /// Load a config file from disk.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
      path: path.to_path_buf(),
      source,
    })?;
    Self::from_toml_str(&source)
  }

  /// Overlay `other` on top of `self`; values set in `other` win.
  pub fn merge(self, other: BuildConfig) -> BuildConfig {
    BuildConfig {
      directory: other.directory.or(self.directory),
      output: other.output.or(self.output),
      strategy: other.strategy.or(self.strategy),
      package_manager: other.package_manager.or(self.package_manager),
      scratch_marker: other.scratch_marker.or(self.scratch_marker),
    }
  }

  /// Validate the configuration against the environment.
  ///
  /// - `explicit`: a configured directory must exist
  /// - `temp-scan`: the scratch directory is discovered now and kept as the base
  /// - `working-dir`: nothing is checked until build time
  pub fn validate(self, env: &impl Environment) -> Result<ValidatedConfig, ConfigError> {
    let strategy = self.strategy.unwrap_or_default();
    let directory = non_empty(self.directory);

    debug!(strategy = %strategy, directory = ?directory, "validating config");

    let resolution = match strategy {
      ResolutionStrategy::Explicit => {
        let directory = directory.map(PathBuf::from);
        if let Some(dir) = &directory {
          ensure_directory(env, dir)?;
        }
        Resolution::Explicit { directory }
      }
      ResolutionStrategy::TempScan => {
        let marker = non_empty(self.scratch_marker).unwrap_or_else(|| DEFAULT_SCRATCH_MARKER.to_string());
        let base = discover_scratch_dir(env, &marker)?;
        Resolution::TempScan {
          base,
          relative: relative_path(directory.as_deref())?,
        }
      }
      ResolutionStrategy::WorkingDir => Resolution::WorkingDir {
        relative: relative_path(directory.as_deref())?,
      },
    };

    Ok(ValidatedConfig {
      resolution,
      output: non_empty(self.output).unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string()),
      package_manager: non_empty(self.package_manager).unwrap_or_else(|| DEFAULT_PACKAGE_MANAGER.to_string()),
    })
  }
}

/// Fail unless `path` is an existing directory.
pub(crate) fn ensure_directory(env: &impl Environment, path: &Path) -> Result<(), ConfigError> {
  if env.is_dir(path) {
    Ok(())
  } else if env.exists(path) {
    Err(ConfigError::NotADirectory(path.to_path_buf()))
  } else {
    Err(ConfigError::DirectoryNotFound(path.to_path_buf()))
  }
}

/// Find the first directory in the temp root whose name contains `marker`.
///
/// The listing order of the temp root decides which match wins.
fn discover_scratch_dir(env: &impl Environment, marker: &str) -> Result<PathBuf, ConfigError> {
  let root = env.temp_dir();
  let entries = env
    .list_dir(&root)
    .map_err(|source| ConfigError::TempDirUnreadable {
      path: root.clone(),
      source,
    })?;

  let found = entries
    .into_iter()
    .find(|entry| entry.is_dir && entry.name.contains(marker))
    .map(|entry| entry.path);

  match found {
    Some(base) => {
      info!(base = %base.display(), "discovered scratch directory");
      Ok(base)
    }
    None => Err(ConfigError::ScratchDirNotFound {
      marker: marker.to_string(),
      root,
    }),
  }
}

fn non_empty(value: Option<String>) -> Option<String> {
  value
    .map(|v| v.trim().to_string())
    .filter(|v| !v.is_empty())
}

/// Strip leading `./` and `/` so the result joins under a base directory.
///
/// Returns `None` when nothing is left (e.g. `"./"` or `"."`). A `..`
/// component anywhere is rejected.
fn relative_path(directory: Option<&str>) -> Result<Option<PathBuf>, ConfigError> {
  let Some(directory) = directory else {
    return Ok(None);
  };
  let mut rest = directory.trim();
  loop {
    if let Some(stripped) = rest.strip_prefix("./") {
      rest = stripped;
    } else if let Some(stripped) = rest.strip_prefix('/') {
      rest = stripped;
    } else {
      break;
    }
  }

  let path = PathBuf::from(rest);
  if path.components().any(|c| matches!(c, Component::ParentDir)) {
    return Err(ConfigError::EscapesBase(directory.to_string()));
  }

  if rest.is_empty() || rest == "." {
    Ok(None)
  } else {
    Ok(Some(path))
  }
}
