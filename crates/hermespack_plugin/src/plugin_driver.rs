use std::sync::Arc;

use arcstr::ArcStr;
use hermespack_common::{NormalizedOutputOptions, OutputAsset, OutputBundle};
use hermespack_error::{BuildError, BuildResult};

use crate::{
  plugin_context::BuildSession, HookBuildEndArgs, HookGenerateBundleArgs, Log, LogLevel,
  PluginContext, SharedPluginable,
};

/// Runs the plugin hooks of a single build. Plugins are shared, so the same plugin list can
/// back several drivers, one per build.
pub struct PluginDriver {
  plugins: Vec<(SharedPluginable, PluginContext)>,
  session: Arc<BuildSession>,
}

impl PluginDriver {
  pub fn new(plugins: Vec<SharedPluginable>) -> Self {
    let session = Arc::new(BuildSession::new());
    let plugins = plugins
      .into_iter()
      .map(|plugin| {
        let ctx = PluginContext::new(ArcStr::from(plugin.call_name().as_ref()), Arc::clone(&session));
        (plugin, ctx)
      })
      .collect();
    Self { plugins, session }
  }

  pub fn build_id(&self) -> &str {
    &self.session.build_id
  }

  /// Runs `generate_bundle` of every plugin in order, stopping at the first failure, then
  /// adds the emitted assets to `bundle`.
  pub async fn generate_bundle(
    &self,
    options: &NormalizedOutputOptions,
    bundle: &mut OutputBundle,
    is_write: bool,
  ) -> BuildResult<()> {
    {
      let args = HookGenerateBundleArgs { options, bundle, is_write };
      for (plugin, ctx) in &self.plugins {
        plugin.call_generate_bundle(ctx, &args).await.map_err(|err| {
          err.context(format!("[plugin {}] generate_bundle hook failed", ctx.plugin_name()))
        })?;
      }
    }

    for asset in self.session.take_emitted_files() {
      let filename = asset.file_name.clone();
      if bundle.insert(OutputAsset::from(asset)).is_some() {
        self.session.logs.push(Log {
          level: LogLevel::Warn,
          plugin: arcstr::literal!("driver"),
          message: format!("Emitted asset `{filename}` replaced an existing output."),
        });
      }
    }

    Ok(())
  }

  /// Runs `build_end` of every plugin, even after one of them failed.
  pub async fn build_end(&self, error: Option<&BuildError>) -> BuildResult<()> {
    let args = error.map(|error| HookBuildEndArgs { errors: error });
    let mut errors = BuildError::default();
    for (plugin, ctx) in &self.plugins {
      if let Err(err) = plugin.call_build_end(ctx, args.as_ref()).await {
        errors.push(err.context(format!("[plugin {}] build_end hook failed", ctx.plugin_name())));
      }
    }
    errors.into_result()
  }

  pub fn logs(&self) -> impl Iterator<Item = &Log> {
    self.session.logs.iter()
  }

  pub fn warnings(&self) -> impl Iterator<Item = &Log> {
    self.logs().filter(|log| log.level == LogLevel::Warn)
  }
}

#[cfg(test)]
mod tests {
  use hermespack_common::{normalize_output_options, EmittedAsset, OutputChunk, OutputOptions};

  use super::*;
  use crate::{HookNoopReturn, Plugin};

  #[derive(Debug)]
  struct EmitCopy;

  impl Plugin for EmitCopy {
    async fn generate_bundle(
      &self,
      ctx: &PluginContext,
      args: &HookGenerateBundleArgs<'_>,
    ) -> HookNoopReturn {
      let Some(chunk) = args.bundle.chunk("app.js") else { return Ok(()) };
      ctx.info(format!("copying {}", chunk.filename));
      ctx.emit_file(EmittedAsset {
        file_name: arcstr::literal!("app.copy"),
        source: chunk.code.clone().into_bytes(),
      });
      Ok(())
    }
  }

  #[derive(Debug)]
  struct AlwaysFails;

  impl Plugin for AlwaysFails {
    async fn generate_bundle(
      &self,
      _ctx: &PluginContext,
      _args: &HookGenerateBundleArgs<'_>,
    ) -> HookNoopReturn {
      Err(anyhow::anyhow!("boom"))
    }

    async fn build_end(
      &self,
      _ctx: &PluginContext,
      args: Option<&HookBuildEndArgs<'_>>,
    ) -> HookNoopReturn {
      anyhow::ensure!(args.is_some(), "expected the generate_bundle failure");
      Ok(())
    }
  }

  #[tokio::test]
  async fn emitted_assets_land_in_the_bundle() {
    let plugins: Vec<SharedPluginable> = vec![Arc::new(EmitCopy)];
    let driver = PluginDriver::new(plugins);
    let options = normalize_output_options(OutputOptions::default());
    let mut bundle = OutputBundle::new();
    bundle.insert(OutputChunk::new("app.js", "console.log(1)"));

    driver.generate_bundle(&options, &mut bundle, true).await.unwrap();

    let asset = bundle.get("app.copy").and_then(|output| output.as_asset()).unwrap();
    assert_eq!(asset.content_as_bytes(), b"console.log(1)");
    assert_eq!(driver.logs().count(), 1);
    assert_eq!(driver.warnings().count(), 0);
  }

  #[tokio::test]
  async fn emitting_an_existing_name_warns() {
    let plugins: Vec<SharedPluginable> = vec![Arc::new(EmitCopy)];
    let driver = PluginDriver::new(plugins);
    let options = normalize_output_options(OutputOptions::default());
    let mut bundle = OutputBundle::new();
    bundle.insert(OutputChunk::new("app.js", "1"));
    bundle.insert(OutputAsset { filename: arcstr::literal!("app.copy"), source: vec![] });

    driver.generate_bundle(&options, &mut bundle, true).await.unwrap();

    assert_eq!(bundle.len(), 2);
    assert_eq!(driver.warnings().count(), 1);
  }

  #[tokio::test]
  async fn failures_reach_build_end() {
    let plugins: Vec<SharedPluginable> = vec![Arc::new(AlwaysFails), Arc::new(EmitCopy)];
    let driver = PluginDriver::new(plugins);
    let options = normalize_output_options(OutputOptions::default());
    let mut bundle = OutputBundle::new();
    bundle.insert(OutputChunk::new("app.js", "1"));

    let error = driver.generate_bundle(&options, &mut bundle, true).await.unwrap_err();
    assert!(error[0].to_string().contains("AlwaysFails"));
    assert!(!bundle.contains("app.copy"));

    driver.build_end(Some(&error)).await.unwrap();
  }
}
