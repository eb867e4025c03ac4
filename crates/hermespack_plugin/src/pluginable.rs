use std::{any::Any, borrow::Cow, fmt::Debug, sync::Arc};

use futures::future::BoxFuture;

use crate::{HookBuildEndArgs, HookGenerateBundleArgs, HookNoopReturn, Plugin, PluginContext};

pub type SharedPluginable = Arc<dyn Pluginable>;

/// Object safe version of [`Plugin`], so plugins of different types can live in one list.
/// Every [`Plugin`] implements it.
pub trait Pluginable: Any + Debug + Send + Sync + 'static {
  fn call_name(&self) -> Cow<'static, str>;

  fn call_generate_bundle<'a>(
    &'a self,
    ctx: &'a PluginContext,
    args: &'a HookGenerateBundleArgs<'a>,
  ) -> BoxFuture<'a, HookNoopReturn>;

  fn call_build_end<'a>(
    &'a self,
    ctx: &'a PluginContext,
    args: Option<&'a HookBuildEndArgs<'a>>,
  ) -> BoxFuture<'a, HookNoopReturn>;
}

impl<T: Plugin> Pluginable for T {
  fn call_name(&self) -> Cow<'static, str> {
    Plugin::name(self)
  }

  fn call_generate_bundle<'a>(
    &'a self,
    ctx: &'a PluginContext,
    args: &'a HookGenerateBundleArgs<'a>,
  ) -> BoxFuture<'a, HookNoopReturn> {
    Box::pin(Plugin::generate_bundle(self, ctx, args))
  }

  fn call_build_end<'a>(
    &'a self,
    ctx: &'a PluginContext,
    args: Option<&'a HookBuildEndArgs<'a>>,
  ) -> BoxFuture<'a, HookNoopReturn> {
    Box::pin(Plugin::build_end(self, ctx, args))
  }
}
