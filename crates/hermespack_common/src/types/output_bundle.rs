use arcstr::ArcStr;
use hermespack_utils::indexmap::FxIndexMap;

use crate::{Output, OutputChunk};

/// Finalized outputs of a build keyed by file name, in emission order.
#[derive(Debug, Default, Clone)]
pub struct OutputBundle(FxIndexMap<ArcStr, Output>);

impl OutputBundle {
  pub fn new() -> Self {
    Self::default()
  }

  /// Returns the previous output with the same file name, if any.
  pub fn insert(&mut self, output: impl Into<Output>) -> Option<Output> {
    let output = output.into();
    self.0.insert(output.filename().clone(), output)
  }

  pub fn get(&self, filename: &str) -> Option<&Output> {
    self.0.get(filename)
  }

  pub fn chunk(&self, filename: &str) -> Option<&OutputChunk> {
    self.get(filename).and_then(Output::as_chunk)
  }

  pub fn contains(&self, filename: &str) -> bool {
    self.0.contains_key(filename)
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = &Output> {
    self.0.values()
  }
}

impl FromIterator<Output> for OutputBundle {
  fn from_iter<T: IntoIterator<Item = Output>>(iter: T) -> Self {
    let mut bundle = Self::new();
    iter.into_iter().for_each(|output| {
      bundle.insert(output);
    });
    bundle
  }
}

#[test]
fn test_chunk_lookup_ignores_assets() {
  use crate::OutputAsset;

  let bundle: OutputBundle = [
    Output::from(OutputChunk::new("app.js", "console.log(1)")),
    Output::from(OutputAsset { filename: "logo.png".into(), source: vec![0x89] }),
  ]
  .into_iter()
  .collect();

  assert_eq!(bundle.len(), 2);
  assert_eq!(bundle.chunk("app.js").map(|chunk| chunk.code.as_str()), Some("console.log(1)"));
  assert!(bundle.chunk("logo.png").is_none());
  assert!(bundle.chunk("missing.js").is_none());
}
