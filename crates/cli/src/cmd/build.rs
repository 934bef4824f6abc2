//! Implementation of the `yarnstep build` command.
//!
//! Validates the configuration, installs dependencies, runs the build and
//! reports where the built artifacts are.

use std::time::Instant;

use anyhow::{Context, Result};
use tokio::sync::watch;
use tracing::warn;

use yarnstep_lib::{Builder, HostEnvironment, TokioRunner};

use crate::cmd::ConfigArgs;
use crate::output::{OutputFormat, TerminalStatus, format_duration, print_json, print_stat, print_success};

/// Execute the build command.
///
/// Ctrl-C while a phase runs kills the package manager and fails the build.
pub fn cmd_build(args: &ConfigArgs, output: OutputFormat) -> Result<()> {
  let config = args.load()?;
  let validated = config.validate(&HostEnvironment).context("Invalid configuration")?;
  let builder = Builder::new(validated);

  let rt = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;
  let started = Instant::now();

  let artifact = rt
    .block_on(async {
      let (cancel_tx, cancel_rx) = watch::channel(false);
      tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
          warn!("interrupt received, cancelling build");
          let _ = cancel_tx.send(true);
        }
      });

      let mut status = TerminalStatus;
      builder
        .build(&cancel_rx, &mut status, &HostEnvironment, &TokioRunner)
        .await
    })
    .context("Build failed")?;

  if output.is_json() {
    print_json(&artifact)?;
  } else {
    print_success(&format!("Build artifact: {}", artifact.location.display()));
    print_stat("Duration", &format_duration(started.elapsed()));
  }

  Ok(())
}
