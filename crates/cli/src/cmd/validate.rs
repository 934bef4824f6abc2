//! Implementation of the `yarnstep validate` command.

use anyhow::{Context, Result};
use serde::Serialize;

use yarnstep_lib::{HostEnvironment, ValidatedConfig};

use crate::cmd::ConfigArgs;
use crate::output::{OutputFormat, print_info, print_json, print_stat, print_success};

#[derive(Debug, Serialize)]
struct ValidateOutput {
  strategy: String,
  directory: Option<String>,
  base_directory: Option<String>,
  output: String,
  package_manager: String,
}

impl From<&ValidatedConfig> for ValidateOutput {
  fn from(config: &ValidatedConfig) -> Self {
    Self {
      strategy: config.strategy().to_string(),
      directory: config.directory().map(|d| d.display().to_string()),
      base_directory: config.base_directory().map(|d| d.display().to_string()),
      output: config.output().to_string(),
      package_manager: config.package_manager().to_string(),
    }
  }
}

/// Validate the configuration and print the effective settings.
pub fn cmd_validate(args: &ConfigArgs, output: OutputFormat) -> Result<()> {
  let config = args.load()?;
  let validated = config.validate(&HostEnvironment).context("Invalid configuration")?;
  let summary = ValidateOutput::from(&validated);

  if output.is_json() {
    return print_json(&summary);
  }

  print_success("Configuration is valid");
  print_stat("Strategy", &summary.strategy);
  match (&summary.directory, &summary.base_directory) {
    (Some(directory), _) => print_stat("Directory", directory),
    (None, None) => print_info("No directory configured; the working directory is used at build time"),
    (None, Some(_)) => {}
  }
  if let Some(base) = &summary.base_directory {
    print_stat("Base directory", base);
  }
  print_stat("Output", &summary.output);
  print_stat("Package manager", &summary.package_manager);

  Ok(())
}
