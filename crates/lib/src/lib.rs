//! yarnstep-lib: package-manager build step for deployment pipelines
//!
//! This crate provides the pieces used to run a JavaScript build as one step
//! of a larger deployment pipeline:
//! - `BuildConfig`: declarative input, validated once into a `ValidatedConfig`
//! - `Builder`: locates the exec directory, runs `install` then `build`
//! - `BuildArtifact`: where the built output ended up
//! - `Environment`, `ProcessRunner`, `StatusSink`: the host capabilities a build needs

pub mod build;
pub mod config;
pub mod consts;
pub mod execute;
pub mod platform;
pub mod status;


pub use build::{BuildArtifact, BuildError, Builder, Phase};
pub use config::{BuildConfig, ConfigError, ResolutionStrategy, ValidatedConfig};
pub use execute::{ExitInfo, ProcessRunner, RunError, TokioRunner};
pub use platform::{Environment, HostEnvironment};
pub use status::{StatusSink, StepStatus, TracingStatus};
