use arcstr::ArcStr;

use crate::OutputAsset;

/// An asset a plugin hands over to the pipeline. It becomes an [`OutputAsset`] once the
/// hook that emitted it returns.
#[derive(Debug, Clone)]
pub struct EmittedAsset {
  pub file_name: ArcStr,
  pub source: Vec<u8>,
}

impl From<EmittedAsset> for OutputAsset {
  fn from(asset: EmittedAsset) -> Self {
    OutputAsset { filename: asset.file_name, source: asset.source }
  }
}
