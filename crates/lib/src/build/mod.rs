//! Build orchestration: exec directory resolution, the install and build
//! phases, and the resulting artifact.

mod execute;
mod resolve;
mod types;

pub use execute::Builder;
pub use resolve::resolve_exec_dir;
pub use types::{BuildArtifact, BuildError, Phase};
