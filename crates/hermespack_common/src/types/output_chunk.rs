use arcstr::ArcStr;

#[derive(Debug, Clone)]
pub struct OutputChunk {
  pub filename: ArcStr,
  pub code: String,
}

impl OutputChunk {
  pub fn new(filename: impl Into<ArcStr>, code: impl Into<String>) -> Self {
    Self { filename: filename.into(), code: code.into() }
  }
}
