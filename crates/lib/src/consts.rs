/// Config file looked up in the current directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "yarnstep.toml";

/// Subdirectory of the exec directory that holds built artifacts.
pub const DEFAULT_OUTPUT_DIR: &str = "build";

pub const DEFAULT_PACKAGE_MANAGER: &str = "yarn";

/// Name fragment identifying the deployment tool's scratch space under the temp root.
pub const DEFAULT_SCRATCH_MARKER: &str = "waypoint";

pub const INSTALL_ARG: &str = "install";
pub const BUILD_ARG: &str = "build";
