mod args;
mod build;
mod validate;

pub use args::ConfigArgs;
pub use build::cmd_build;
pub use validate::cmd_validate;
