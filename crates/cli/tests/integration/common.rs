//! Shared test helpers for CLI integration tests.

use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Script cases that succeed and leave `build/index.html` behind.
pub const SUCCEEDING_PM: &str = r#"
  install) mkdir -p node_modules ;;
  build) mkdir -p build && echo ok > build/index.html ;;
"#;

/// Isolated test environment.
///
/// Each test gets its own temporary directory with a project directory and a
/// fake package manager script.
pub struct TestEnv {
  pub temp: TempDir,
  pub root: PathBuf,
  pub project_dir: PathBuf,
}

impl TestEnv {
  /// Create an environment whose package manager runs `cases` (a shell `case` body).
  ///
  /// The script records each invocation's first argument in `.calls`.
  pub fn with_package_manager(cases: &str) -> Self {
    let temp = TempDir::new().unwrap();
    let root = dunce::canonicalize(temp.path()).unwrap();
    let project_dir = root.join("project");
    std::fs::create_dir_all(&project_dir).unwrap();

    let script = format!(
      "#!/bin/sh\necho \"$1\" >> .calls\ncase \"$1\" in\n{}\nesac\n",
      cases
    );
    let pm = root.join("fake-pm");
    std::fs::write(&pm, script).unwrap();
    std::fs::set_permissions(&pm, std::fs::Permissions::from_mode(0o755)).unwrap();

    Self {
      temp,
      root,
      project_dir,
    }
  }

  pub fn package_manager(&self) -> PathBuf {
    self.root.join("fake-pm")
  }

  /// Write a file relative to the root directory.
  pub fn write_file(&self, relative_path: &str, content: &str) {
    let path = self.root.join(relative_path);
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
  }

  /// Phases recorded by the fake package manager in `dir`.
  pub fn calls(&self, dir: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(dir.join(".calls"))
      .map(|content| content.lines().map(str::to_string).collect())
      .unwrap_or_default()
  }

  /// Get a pre-configured Command for the yarnstep binary.
  ///
  /// Runs from the root directory with the fake package manager selected and
  /// `TMPDIR` pointed at the root.
  pub fn yarnstep_cmd(&self) -> Command {
    let mut cmd: Command = cargo_bin_cmd!("yarnstep");
    cmd.current_dir(&self.root);
    cmd.env("TMPDIR", &self.root);
    cmd.arg("build");
    cmd.arg("--package-manager").arg(self.package_manager());
    cmd
  }
}
