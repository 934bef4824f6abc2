//! Configuration flags shared by `build` and `validate`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use tracing::debug;

use yarnstep_lib::consts::DEFAULT_CONFIG_FILE;
use yarnstep_lib::{BuildConfig, ResolutionStrategy};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StrategyArg {
  Explicit,
  TempScan,
  WorkingDir,
}

impl From<StrategyArg> for ResolutionStrategy {
  fn from(arg: StrategyArg) -> Self {
    match arg {
      StrategyArg::Explicit => ResolutionStrategy::Explicit,
      StrategyArg::TempScan => ResolutionStrategy::TempScan,
      StrategyArg::WorkingDir => ResolutionStrategy::WorkingDir,
    }
  }
}

#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
  /// Path to the config file (default: yarnstep.toml, if present)
  #[arg(short, long)]
  pub config: Option<PathBuf>,

  /// Directory to run the package manager in
  #[arg(short, long)]
  pub directory: Option<String>,

  /// Subdirectory holding the built artifacts (default: build)
  #[arg(long)]
  pub output_dir: Option<String>,

  /// How the exec directory is located
  #[arg(long, value_enum)]
  pub strategy: Option<StrategyArg>,

  /// Package manager to run (default: yarn)
  #[arg(long)]
  pub package_manager: Option<String>,

  /// Name fragment of the scratch directory searched by temp-scan
  #[arg(long)]
  pub scratch_marker: Option<String>,
}

impl ConfigArgs {
  /// Load the config file and apply flag overrides on top of it.
  ///
  /// An explicitly given config file must exist. The default file is optional.
  pub fn load(&self) -> Result<BuildConfig> {
    let file_config = match &self.config {
      Some(path) => {
        BuildConfig::load(path).with_context(|| format!("Failed to load config {}", path.display()))?
      }
      None => {
        let default_path = Path::new(DEFAULT_CONFIG_FILE);
        if default_path.exists() {
          BuildConfig::load(default_path).with_context(|| format!("Failed to load config {}", DEFAULT_CONFIG_FILE))?
        } else {
          debug!(path = DEFAULT_CONFIG_FILE, "no config file, using defaults");
          BuildConfig::default()
        }
      }
    };

    Ok(file_config.merge(self.overrides()))
  }

  fn overrides(&self) -> BuildConfig {
    BuildConfig {
      directory: self.directory.clone(),
      output: self.output_dir.clone(),
      strategy: self.strategy.map(ResolutionStrategy::from),
      package_manager: self.package_manager.clone(),
      scratch_marker: self.scratch_marker.clone(),
    }
  }
}
