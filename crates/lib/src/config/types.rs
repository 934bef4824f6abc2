//! Types for build configuration.
//!
//! `BuildConfig` is the raw declarative input. Validation turns it into a
//! `ValidatedConfig` exactly once; the validated form never changes afterwards.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How the exec directory is located.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResolutionStrategy {
  /// Use `directory` as given (must exist), or the working directory at build time when unset.
  #[default]
  Explicit,
  /// Resolve `directory` under a scratch directory discovered in the temp root.
  TempScan,
  /// Resolve `directory` under the working directory at build time.
  WorkingDir,
}

impl ResolutionStrategy {
  pub fn as_str(&self) -> &'static str {
    match self {
      ResolutionStrategy::Explicit => "explicit",
      ResolutionStrategy::TempScan => "temp-scan",
      ResolutionStrategy::WorkingDir => "working-dir",
    }
  }
}

impl fmt::Display for ResolutionStrategy {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Declarative build configuration, as read from a config file or flags.
///
/// Every field is optional. Empty strings are treated the same as missing values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
  /// Directory to run the package manager in.
  pub directory: Option<String>,

  /// Subdirectory of the exec directory holding built artifacts (default: `build`).
  pub output: Option<String>,

  /// Directory resolution strategy (default: `explicit`).
  pub strategy: Option<ResolutionStrategy>,

  /// Package manager program (default: `yarn`).
  pub package_manager: Option<String>,

  /// Name fragment of the scratch directory for `temp-scan` (default: `waypoint`).
  pub scratch_marker: Option<String>,
}

/// Where the exec directory comes from, fixed at validation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Resolution {
  Explicit { directory: Option<PathBuf> },
  TempScan { base: PathBuf, relative: Option<PathBuf> },
  WorkingDir { relative: Option<PathBuf> },
}

/// Configuration after validation.
///
/// Output directory and package manager are defaulted, and a `temp-scan`
/// base directory has already been discovered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedConfig {
  pub(crate) resolution: Resolution,
  pub(crate) output: String,
  pub(crate) package_manager: String,
}

impl ValidatedConfig {
  pub fn strategy(&self) -> ResolutionStrategy {
    match self.resolution {
      Resolution::Explicit { .. } => ResolutionStrategy::Explicit,
      Resolution::TempScan { .. } => ResolutionStrategy::TempScan,
      Resolution::WorkingDir { .. } => ResolutionStrategy::WorkingDir,
    }
  }

  /// The configured directory, if any. Relative for `temp-scan` and `working-dir`.
  pub fn directory(&self) -> Option<&Path> {
    match &self.resolution {
      Resolution::Explicit { directory } => directory.as_deref(),
      Resolution::TempScan { relative, .. } | Resolution::WorkingDir { relative } => relative.as_deref(),
    }
  }

  /// The scratch directory discovered for `temp-scan`.
  pub fn base_directory(&self) -> Option<&Path> {
    match &self.resolution {
      Resolution::TempScan { base, .. } => Some(base),
      _ => None,
    }
  }

  pub fn output(&self) -> &str {
    &self.output
  }

  pub fn package_manager(&self) -> &str {
    &self.package_manager
  }
}

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
  /// Config file could not be read.
  #[error("failed to read config {}: {source}", path.display())]
  Read {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  /// Config is not valid TOML or a value has the wrong type.
  #[error("invalid config: {0}")]
  Parse(#[from] toml::de::Error),

  /// The exec directory does not exist.
  #[error("directory does not exist: {}", .0.display())]
  DirectoryNotFound(PathBuf),

  /// The exec directory exists but is not a directory.
  #[error("not a directory: {}", .0.display())]
  NotADirectory(PathBuf),

  /// The temp root could not be listed.
  #[error("failed to list temp directory {}: {source}", path.display())]
  TempDirUnreadable {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  /// No scratch directory matched the marker.
  #[error("no directory containing '{marker}' found in {}", root.display())]
  ScratchDirNotFound { marker: String, root: PathBuf },

  /// A relative directory tried to leave its base with `..`.
  #[error("directory '{0}' must stay inside its base directory")]
  EscapesBase(String),
}
