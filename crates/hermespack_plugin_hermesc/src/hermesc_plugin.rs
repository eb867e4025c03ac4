use std::{borrow::Cow, path::Path};

use anyhow::Context;
use hermespack_common::EmittedAsset;
use hermespack_plugin::{
  HookBuildEndArgs, HookGenerateBundleArgs, HookNoopReturn, Plugin, PluginContext,
};
use hermespack_utils::path_ext::PathExt;

use crate::{
  binary::{binary_path, platform_segment},
  invocation::HermescInvocation,
  options::normalize_options,
  temp_workspace::TempWorkspace,
  HermescError, HermescOptions, NormalizedHermescOptions,
};

/// Compiles the chunk written to `output.file` into Hermes bytecode and emits it next to
/// the chunk as `<name>.bundle`.
#[derive(Debug)]
pub struct HermescPlugin {
  options: NormalizedHermescOptions,
}

impl Default for HermescPlugin {
  fn default() -> Self {
    Self::new(HermescOptions::default())
  }
}

impl HermescPlugin {
  pub fn new(options: HermescOptions) -> Self {
    Self { options: normalize_options(options) }
  }

  pub fn options(&self) -> &NormalizedHermescOptions {
    &self.options
  }

  fn workspace(&self, ctx: &PluginContext) -> TempWorkspace {
    TempWorkspace::new(&self.options.workspace_root, ctx.build_id())
  }

  async fn compile(
    &self,
    ctx: &PluginContext,
    args: &HookGenerateBundleArgs<'_>,
  ) -> Result<(), HermescError> {
    let root = &self.options.root;
    if let Err(source) = tokio::fs::metadata(root).await {
      return Err(HermescError::RootNotAccessible { root: root.clone(), source });
    }

    let Some(file) = args.options.file.as_deref() else { return Ok(()) };
    let file_path = Path::new(file);
    let (Some(file_name), Some(base_name)) =
      (file_path.output_file_name(), file_path.artifact_base_name())
    else {
      return Ok(());
    };
    let Some(chunk) = args.bundle.chunk(file_name) else { return Ok(()) };

    let asset_name = format!("{base_name}.bundle");
    let asset_path = Path::new(&args.options.dir).join(&asset_name);
    ctx.info(format!("{file} -> {}...", asset_path.display()));

    let binary = binary_path(root, platform_segment());
    if !tokio::fs::try_exists(&binary).await.unwrap_or(false) {
      return Err(HermescError::UnsupportedPlatform { binary });
    }

    let workspace = self.workspace(ctx);
    let workspace_error =
      |source| HermescError::Workspace { path: workspace.dir().to_path_buf(), source };
    workspace.ensure().await.map_err(workspace_error)?;
    let bytecode = workspace.random_file("bundle").map_err(workspace_error)?;
    let source = workspace.random_file("js").map_err(workspace_error)?;
    tokio::fs::write(&source, chunk.code.as_bytes()).await.map_err(workspace_error)?;

    HermescInvocation { binary: &binary, source: &source, bytecode: &bytecode }
      .run(ctx, self.options.timeout)
      .await?;

    let bytes = tokio::fs::read(&bytecode)
      .await
      .map_err(|source| HermescError::OutputMissing { path: bytecode.clone(), source })?;

    ctx.emit_file(EmittedAsset { file_name: asset_name.as_str().into(), source: bytes });
    ctx.info(format!("Bytecode compiled to {asset_name}"));

    Ok(())
  }
}

impl Plugin for HermescPlugin {
  fn name(&self) -> Cow<'static, str> {
    Cow::Borrowed("hermesc")
  }

  async fn generate_bundle(
    &self,
    ctx: &PluginContext,
    args: &HookGenerateBundleArgs<'_>,
  ) -> HookNoopReturn {
    match self.compile(ctx, args).await {
      Ok(()) => Ok(()),
      Err(err) if self.options.strict => Err(err.into()),
      Err(err) => {
        ctx.warn(format!("{:#}", anyhow::Error::new(err)));
        Ok(())
      }
    }
  }

  async fn build_end(
    &self,
    ctx: &PluginContext,
    _args: Option<&HookBuildEndArgs<'_>>,
  ) -> HookNoopReturn {
    let workspace = self.workspace(ctx);
    workspace
      .remove()
      .await
      .with_context(|| format!("Failed to remove `{}`", workspace.dir().display()))?;
    if let Err(err) = workspace.remove_root_if_unused().await {
      ctx.debug(format!("Kept `{}`: {err}", self.options.workspace_root.display()));
    }
    Ok(())
  }
}
