use std::{any::Any, borrow::Cow, fmt::Debug, future::Future};

use hermespack_utils::pretty_type_name::pretty_type_name;

use crate::{HookBuildEndArgs, HookGenerateBundleArgs, PluginContext};

pub type HookNoopReturn = anyhow::Result<()>;

pub trait Plugin: Any + Debug + Send + Sync + 'static {
  fn name(&self) -> Cow<'static, str> {
    pretty_type_name::<Self>()
  }

  /// Called once the output bundle is finalized. Assets emitted through `ctx` are added to
  /// the bundle after every plugin ran.
  fn generate_bundle(
    &self,
    _ctx: &PluginContext,
    _args: &HookGenerateBundleArgs<'_>,
  ) -> impl Future<Output = HookNoopReturn> + Send {
    async { Ok(()) }
  }

  fn build_end(
    &self,
    _ctx: &PluginContext,
    _args: Option<&HookBuildEndArgs<'_>>,
  ) -> impl Future<Output = HookNoopReturn> + Send {
    async { Ok(()) }
  }
}
