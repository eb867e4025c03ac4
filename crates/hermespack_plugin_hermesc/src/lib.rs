mod binary;
mod error;
mod hermesc_plugin;
mod invocation;
mod options;
mod temp_workspace;

pub use crate::{
  binary::{binary_path, platform_segment},
  error::HermescError,
  hermesc_plugin::HermescPlugin,
  options::{HermescOptions, NormalizedHermescOptions},
};
