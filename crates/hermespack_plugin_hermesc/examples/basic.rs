use std::sync::Arc;

use hermespack_common::{normalize_output_options, OutputBundle, OutputChunk, OutputOptions};
use hermespack_plugin::{PluginDriver, SharedPluginable};
use hermespack_plugin_hermesc::HermescPlugin;

// Expects the prebuilt binaries under `<workspace>/hermesc/<platform>/`.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let plugins: Vec<SharedPluginable> = vec![Arc::new(HermescPlugin::default())];
  let driver = PluginDriver::new(plugins);

  let options = normalize_output_options(OutputOptions {
    file: Some("dist/app.js".to_string()),
    ..Default::default()
  });
  let mut bundle = OutputBundle::new();
  bundle.insert(OutputChunk::new("app.js", "print('hello from hermes');"));

  let result = driver.generate_bundle(&options, &mut bundle, false).await;
  driver.build_end(result.as_ref().err()).await?;
  result?;

  for log in driver.logs() {
    println!("{log}");
  }
  for output in bundle.iter() {
    println!("{}", output.filename());
  }

  Ok(())
}
