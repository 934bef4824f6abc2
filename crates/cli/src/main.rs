mod cmd;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cmd::{ConfigArgs, cmd_build, cmd_validate};
use output::OutputFormat;

/// yarnstep - package-manager build step for deployment pipelines
#[derive(Parser)]
#[command(name = "yarnstep")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Install dependencies and build the application
  Build {
    #[command(flatten)]
    config: ConfigArgs,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value = "text")]
    output: OutputFormat,
  },

  /// Check the configuration without building
  Validate {
    #[command(flatten)]
    config: ConfigArgs,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value = "text")]
    output: OutputFormat,
  },
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  // RUST_LOG wins over --verbose
  let default_filter = if cli.verbose { "debug" } else { "warn" };
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  match cli.command {
    Commands::Build { config, output } => cmd_build(&config, output),
    Commands::Validate { config, output } => cmd_validate(&config, output),
  }
}
