//! Build command integration tests.

use predicates::prelude::*;

use super::common::{SUCCEEDING_PM, TestEnv};

#[test]
fn build_explicit_directory() {
  let env = TestEnv::with_package_manager(SUCCEEDING_PM);

  env
    .yarnstep_cmd()
    .arg("--directory")
    .arg(&env.project_dir)
    .assert()
    .success()
    .stdout(predicate::str::contains(
      env.project_dir.join("build").display().to_string(),
    ))
    .stderr(predicate::str::contains("Installing dependencies"))
    .stderr(predicate::str::contains("Static files built successfully"));

  assert!(env.project_dir.join("build").join("index.html").exists());
  assert_eq!(env.calls(&env.project_dir), vec!["install", "build"]);
}

#[test]
fn build_json_output_is_artifact() {
  let env = TestEnv::with_package_manager(SUCCEEDING_PM);

  let output = env
    .yarnstep_cmd()
    .arg("--directory")
    .arg(&env.project_dir)
    .args(["--output-dir", "dist", "-o", "json"])
    .output()
    .unwrap();

  assert!(output.status.success());
  let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(
    json["location"],
    env.project_dir.join("dist").display().to_string()
  );
}

#[test]
fn build_defaults_to_working_directory() {
  let env = TestEnv::with_package_manager(SUCCEEDING_PM);

  env
    .yarnstep_cmd()
    .current_dir(&env.project_dir)
    .assert()
    .success()
    .stdout(predicate::str::contains(
      env.project_dir.join("build").display().to_string(),
    ));

  assert_eq!(env.calls(&env.project_dir), vec!["install", "build"]);
}

#[test]
fn build_working_dir_strategy_joins_relative_directory() {
  let env = TestEnv::with_package_manager(SUCCEEDING_PM);

  env
    .yarnstep_cmd()
    .args(["--strategy", "working-dir", "--directory", "./project"])
    .assert()
    .success();

  assert_eq!(env.calls(&env.project_dir), vec!["install", "build"]);
}

#[test]
fn build_temp_scan_uses_scratch_directory() {
  let env = TestEnv::with_package_manager(SUCCEEDING_PM);
  let site = env.root.join("waypoint-job-1").join("site");
  std::fs::create_dir_all(&site).unwrap();

  env
    .yarnstep_cmd()
    .args(["--strategy", "temp-scan", "--directory", "site"])
    .assert()
    .success()
    .stdout(predicate::str::contains(site.join("build").display().to_string()));

  assert_eq!(env.calls(&site), vec!["install", "build"]);
}

#[test]
fn build_reads_config_file() {
  let env = TestEnv::with_package_manager(
    r#"
      install) ;;
      build) mkdir -p public ;;
    "#,
  );
  env.write_file("yarnstep.toml", "directory = \"project\"\noutput = \"public\"\n");

  env
    .yarnstep_cmd()
    .assert()
    .success()
    .stdout(predicate::str::contains("public"));

  assert!(env.project_dir.join("public").is_dir());
}

#[test]
fn build_stops_after_failed_install() {
  let env = TestEnv::with_package_manager(
    r#"
      install) exit 1 ;;
      build) mkdir -p build ;;
    "#,
  );

  env
    .yarnstep_cmd()
    .arg("--directory")
    .arg(&env.project_dir)
    .assert()
    .failure()
    .stderr(predicate::str::contains("Failed to install dependencies"))
    .stderr(predicate::str::contains("Build failed"));

  assert_eq!(env.calls(&env.project_dir), vec!["install"]);
  assert!(!env.project_dir.join("build").exists());
}

#[test]
fn build_reports_failed_build_phase() {
  let env = TestEnv::with_package_manager(
    r#"
      install) ;;
      build) exit 2 ;;
    "#,
  );

  env
    .yarnstep_cmd()
    .arg("--directory")
    .arg(&env.project_dir)
    .assert()
    .failure()
    .stderr(predicate::str::contains("Dependencies installed"))
    .stderr(predicate::str::contains("command failed with exit code 2"));

  assert_eq!(env.calls(&env.project_dir), vec!["install", "build"]);
}
