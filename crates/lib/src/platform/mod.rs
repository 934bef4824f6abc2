//! Access to the host process and filesystem.
//!
//! Directory resolution never reads the working directory or the temp root
//! directly. It goes through an [`Environment`], so tests can swap in a
//! deterministic fake instead of touching the real system.

use std::io;
use std::path::{Path, PathBuf};

/// A single entry returned by [`Environment::list_dir`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
  /// File name of the entry (last path component).
  pub name: String,
  /// Full path of the entry.
  pub path: PathBuf,
  /// Whether the entry is a directory (symlinks are followed).
  pub is_dir: bool,
}

/// The parts of the host environment needed to resolve an exec directory.
pub trait Environment {
  /// The process working directory.
  fn current_dir(&self) -> io::Result<PathBuf>;

  /// Root directory for temporary files.
  fn temp_dir(&self) -> PathBuf;

  /// List the entries of `path` in directory-listing order.
  fn list_dir(&self, path: &Path) -> io::Result<Vec<DirEntryInfo>>;

  /// Whether `path` exists at all.
  fn exists(&self, path: &Path) -> bool;

  /// Whether `path` exists and is a directory.
  fn is_dir(&self, path: &Path) -> bool;
}

/// [`Environment`] backed by the real process state and filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostEnvironment;

impl Environment for HostEnvironment {
  fn current_dir(&self) -> io::Result<PathBuf> {
    std::env::current_dir()
  }

  fn temp_dir(&self) -> PathBuf {
    std::env::temp_dir()
  }

  fn list_dir(&self, path: &Path) -> io::Result<Vec<DirEntryInfo>> {
    let mut entries = Vec::new();
    for entry in std::fs::read_dir(path)? {
      let entry = entry?;
      let entry_path = entry.path();
      entries.push(DirEntryInfo {
        name: entry.file_name().to_string_lossy().to_string(),
        is_dir: entry_path.is_dir(),
        path: entry_path,
      });
    }
    Ok(entries)
  }

  fn exists(&self, path: &Path) -> bool {
    path.exists()
  }

  fn is_dir(&self, path: &Path) -> bool {
    path.is_dir()
  }
}
