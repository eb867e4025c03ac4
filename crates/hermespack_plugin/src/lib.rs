mod plugin;
mod plugin_context;
mod plugin_driver;
mod pluginable;
mod types;

pub use crate::{
  plugin::{HookNoopReturn, Plugin},
  plugin_context::PluginContext,
  plugin_driver::PluginDriver,
  pluginable::{Pluginable, SharedPluginable},
  types::{
    hook_build_end_args::HookBuildEndArgs,
    hook_generate_bundle_args::HookGenerateBundleArgs,
    log::{Log, LogLevel},
  },
};
